use super::*;

use indexmap::map::Entry;

/// A writable handle to a field located inside a record.
///
/// Produced by [`Column::resolve`](crate::schema::db::Column::resolve). Struct
/// fields always exist once resolved; entries of a map-shaped record may be
/// absent, in which case the handle is not [valid](Self::is_valid) until a
/// value is [set](Self::set).
#[derive(Debug)]
pub enum FieldRef<'a> {
    /// A field of a struct
    Field(&'a mut Value),

    /// A key of a map-shaped record
    Entry(Entry<'a, String, Value>),
}

impl<'a> FieldRef<'a> {
    /// Returns `true` if the handle refers to an existing value.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Field(_) => true,
            Self::Entry(Entry::Occupied(_)) => true,
            Self::Entry(Entry::Vacant(_)) => false,
        }
    }

    pub fn get(&self) -> Option<&Value> {
        match self {
            Self::Field(value) => Some(&**value),
            Self::Entry(Entry::Occupied(entry)) => Some(entry.get()),
            Self::Entry(Entry::Vacant(_)) => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut Value> {
        match self {
            Self::Field(value) => Some(&mut **value),
            Self::Entry(Entry::Occupied(entry)) => Some(entry.get_mut()),
            Self::Entry(Entry::Vacant(_)) => None,
        }
    }

    /// Consumes the handle, returning the referenced value if it exists.
    pub fn into_mut(self) -> Option<&'a mut Value> {
        match self {
            Self::Field(value) => Some(value),
            Self::Entry(Entry::Occupied(entry)) => Some(entry.into_mut()),
            Self::Entry(Entry::Vacant(_)) => None,
        }
    }

    /// Writes `value` through the handle, inserting the key when the handle
    /// points at an absent map entry.
    pub fn set(self, value: impl Into<Value>) -> &'a mut Value {
        let value = value.into();

        match self {
            Self::Field(dst) => {
                *dst = value;
                dst
            }
            Self::Entry(Entry::Occupied(mut entry)) => {
                entry.insert(value);
                entry.into_mut()
            }
            Self::Entry(Entry::Vacant(entry)) => entry.insert(value),
        }
    }
}

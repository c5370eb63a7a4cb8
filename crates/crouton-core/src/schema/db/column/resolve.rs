use super::Column;
use crate::{
    stmt::{FieldRef, Value},
    Error, Result,
};

impl Column {
    /// Locates the field this column maps to inside `record`.
    ///
    /// `record` may be a pointer to the actual record; one level of pointer is
    /// followed before resolving. See [`Column::resolve_in`] for the walk.
    ///
    /// This may mutate `record`: nil pointers met along the path are replaced
    /// with zero values so the returned handle has somewhere to point.
    pub fn resolve<'a>(&self, record: &'a mut Value) -> Result<FieldRef<'a>> {
        let record = match record {
            Value::Ptr(ptr) => match ptr.get_mut() {
                Some(record) => record,
                None => return Err(self.not_valid()),
            },
            record => record,
        };

        self.resolve_in(record)
    }

    /// Locates the field this column maps to inside an already dereferenced
    /// `record`.
    ///
    /// - A map-shaped record is indexed by the *last* path segment only. The
    ///   entry is returned whether or not the key exists.
    /// - A [`Value::Dyn`] is unwrapped one level and treated as a struct.
    /// - A struct is walked segment by segment. Intermediate pointers to
    ///   structs are followed, allocating a zero value when nil.
    ///
    /// Fails with a field resolution error when the walk reaches a value that
    /// is neither a struct nor a pointer to a struct, or when the final field
    /// does not exist.
    pub fn resolve_in<'a>(&self, record: &'a mut Value) -> Result<FieldRef<'a>> {
        let path = self.field_path();

        let record = match record {
            Value::Map(map) => {
                let key = path.last().cloned().unwrap_or_default();
                return Ok(FieldRef::Entry(map.entry(key)));
            }
            Value::Dyn(inner) => &mut **inner,
            record => record,
        };

        let Value::Struct(record) = record else {
            return Err(self.not_valid());
        };

        let mut current = record.field_mut(&path[0]);

        for segment in &path[1..] {
            let Some(value) = current.take() else {
                break;
            };

            current = match value {
                Value::Struct(value) => value.field_mut(segment),
                Value::Ptr(ptr) if ptr.elem().is_struct() => {
                    if ptr.is_nil() {
                        tracing::trace!(
                            column = %self.name,
                            field = %self.field_name,
                            before = %segment,
                            "materializing nil pointer"
                        );
                    }

                    match ptr.get_or_zero() {
                        Value::Struct(value) => value.field_mut(segment),
                        _ => return Err(self.not_valid()),
                    }
                }
                _ => return Err(self.not_valid()),
            };
        }

        match current {
            Some(value) => Ok(FieldRef::Field(value)),
            None => Err(self.not_valid()),
        }
    }

    fn not_valid(&self) -> Error {
        tracing::debug!(column = %self.name, field = %self.field_name, "field resolution failed");
        Error::field_resolution(&self.field_name)
    }
}

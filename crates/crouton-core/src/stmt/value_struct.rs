use super::*;

use std::{ops, sync::Arc};

/// A structured value: one [`Value`] per field of its [`StructType`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValueStruct {
    ty: Arc<StructType>,
    fields: Vec<Value>,
}

impl ValueStruct {
    /// A value with every field set to its zero value.
    pub fn zero(ty: &Arc<StructType>) -> Self {
        Self {
            ty: ty.clone(),
            fields: ty.fields.iter().map(|field| field.ty.zero_value()).collect(),
        }
    }

    pub fn ty(&self) -> &Arc<StructType> {
        &self.ty
    }

    /// Sets the named field, builder style.
    ///
    /// # Panics
    ///
    /// Panics if the struct type has no field named `name`.
    #[track_caller]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        match self.field_mut(name) {
            Some(field) => *field = value.into(),
            None => panic!("struct `{}` has no field `{name}`", self.ty.name),
        }
        self
    }

    /// Looks up a field by name. `None` means the struct has no such field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let index = self.ty.field_index(name)?;
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        let index = self.ty.field_index(name)?;
        self.fields.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.ty
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .zip(self.fields.iter())
    }
}

impl ops::Index<&str> for ValueStruct {
    type Output = Value;

    #[track_caller]
    fn index(&self, name: &str) -> &Value {
        match self.field(name) {
            Some(value) => value,
            None => panic!("struct `{}` has no field `{name}`", self.ty.name),
        }
    }
}

use super::*;

use std::sync::Arc;

/// Shape of a structured value: a type name and its ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub name: String,
    pub fields: Vec<FieldTy>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldTy {
    pub name: String,
    pub ty: Type,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Appends a field, builder style.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.fields.push(FieldTy {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Position of the field named `name`, if any.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

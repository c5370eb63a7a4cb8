use super::*;

use std::sync::Arc;

/// Runtime type of a [`Value`].
///
/// Types are only needed where a value has to be created out of thin air:
/// materializing a nil pointer requires knowing what it points to. Every
/// `Type` therefore knows its own zero value.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    I64,
    U64,
    F64,
    String,
    Bytes,

    /// A list of values of the same type
    List(Box<Type>),

    /// A structured value with named fields
    Struct(Arc<StructType>),

    /// An optional pointer to a value of the inner type
    Ptr(Box<Type>),

    /// A string-keyed mapping to values of the inner type
    Map(Box<Type>),

    /// Any value, decided at runtime
    Dyn,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn ptr(ty: impl Into<Self>) -> Self {
        Self::Ptr(Box::new(ty.into()))
    }

    pub fn map(ty: impl Into<Self>) -> Self {
        Self::Map(Box::new(ty.into()))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    pub fn is_ptr(&self) -> bool {
        matches!(self, Self::Ptr(_))
    }

    pub fn as_struct(&self) -> Option<&Arc<StructType>> {
        match self {
            Self::Struct(ty) => Some(ty),
            _ => None,
        }
    }

    /// Returns the value a freshly allocated instance of this type holds.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::I64 => Value::I64(0),
            Self::U64 => Value::U64(0),
            Self::F64 => Value::F64(0.0),
            Self::String => Value::String(String::new()),
            Self::Bytes => Value::Bytes(vec![]),
            Self::List(_) => Value::List(vec![]),
            Self::Struct(ty) => ValueStruct::zero(ty).into(),
            Self::Ptr(ty) => ValuePtr::nil((**ty).clone()).into(),
            Self::Map(_) => Value::Map(ValueMap::new()),
            Self::Dyn => Value::Null,
        }
    }
}

impl From<Arc<StructType>> for Type {
    fn from(value: Arc<StructType>) -> Self {
        Self::Struct(value)
    }
}

impl From<StructType> for Type {
    fn from(value: StructType) -> Self {
        Self::Struct(Arc::new(value))
    }
}

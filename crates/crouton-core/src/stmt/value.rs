use super::*;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value, also the zero value of a [`Type::Dyn`]
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// A list of values of the same type
    List(Vec<Value>),

    /// A structured value with named fields
    Struct(ValueStruct),

    /// An optional pointer
    Ptr(ValuePtr),

    /// A string-keyed mapping
    Map(ValueMap),

    /// A boxed value whose concrete shape is only known at runtime
    Dyn(Box<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    pub const fn is_ptr(&self) -> bool {
        matches!(self, Self::Ptr(_))
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Wraps `value` in a [`Value::Dyn`].
    pub fn boxed(value: impl Into<Self>) -> Self {
        Self::Dyn(Box::new(value.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&ValueStruct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_struct_mut(&mut self) -> Option<&mut ValueStruct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ptr(&self) -> Option<&ValuePtr> {
        match self {
            Self::Ptr(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_struct(&self) -> &ValueStruct {
        match self {
            Self::Struct(value) => value,
            _ => panic!("expected struct; value={self:#?}"),
        }
    }

    #[track_caller]
    pub fn expect_ptr(&self) -> &ValuePtr {
        match self {
            Self::Ptr(value) => value,
            _ => panic!("expected pointer; value={self:#?}"),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<ValueStruct> for Value {
    fn from(value: ValueStruct) -> Self {
        Self::Struct(value)
    }
}

impl From<ValuePtr> for Value {
    fn from(value: ValuePtr) -> Self {
        Self::Ptr(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Self::Map(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

use super::*;

/// An optional pointer to a value of type `elem`.
///
/// A nil pointer still knows what it points to, so it can be filled with a
/// zero value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePtr {
    elem: Type,
    target: Option<Box<Value>>,
}

impl ValuePtr {
    pub fn nil(elem: Type) -> Self {
        Self { elem, target: None }
    }

    pub fn new(elem: Type, target: impl Into<Value>) -> Self {
        Self {
            elem,
            target: Some(Box::new(target.into())),
        }
    }

    pub fn elem(&self) -> &Type {
        &self.elem
    }

    pub fn is_nil(&self) -> bool {
        self.target.is_none()
    }

    pub fn get(&self) -> Option<&Value> {
        self.target.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Value> {
        self.target.as_deref_mut()
    }

    /// Returns the pointee, allocating a zero value of `elem` first if the
    /// pointer is nil.
    pub fn get_or_zero(&mut self) -> &mut Value {
        let elem = &self.elem;
        self.target.get_or_insert_with(|| Box::new(elem.zero_value()))
    }

    pub fn set(&mut self, value: impl Into<Value>) {
        self.target = Some(Box::new(value.into()));
    }

    pub fn take(&mut self) -> Option<Value> {
        self.target.take().map(|value| *value)
    }
}

use super::Error;

/// Error when a column's field path cannot be resolved against a record.
///
/// This occurs when:
/// - The walk reaches a value that is neither a struct nor a pointer to a struct
///   while path segments remain (e.g. `"Name.First"` where `Name` is a string)
/// - The last segment names a field that does not exist on the record
/// - The record itself is a nil pointer
#[derive(Debug)]
pub(super) struct FieldResolutionError {
    field_name: Box<str>,
}

impl std::error::Error for FieldResolutionError {}

impl core::fmt::Display for FieldResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "field {} is not valid", self.field_name)
    }
}

impl Error {
    /// Creates a field resolution error for the given dotted field name.
    pub fn field_resolution(field_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldResolution(FieldResolutionError {
            field_name: field_name.into().into(),
        }))
    }

    /// Returns `true` if this error is a field resolution error.
    pub fn is_field_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldResolution(_))
    }
}

use super::Error;

/// Error built from a format string via [`err!`](crate::err) or [`bail!`](crate::bail).
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<Box<str>>) -> Self {
        AdhocError {
            message: message.into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an ad-hoc error from pre-formatted arguments.
    pub fn from_args(message: core::fmt::Arguments<'_>) -> Error {
        let message: Box<str> = match message.as_str() {
            Some(s) => s.into(),
            None => message.to_string().into(),
        };

        Error::from(super::ErrorKind::Adhoc(AdhocError::new(message)))
    }
}

mod dialect;
pub use dialect::Dialect;

mod error;
pub use error::Error;

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Crouton's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

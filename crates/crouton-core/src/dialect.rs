use crate::schema::db::Column;

/// Vendor-specific SQL rendering rules.
///
/// The core only ever calls the four methods below; how a dialect maps a
/// [`SqlType`](crate::schema::db::SqlType) to a type name, or which keyword it
/// uses for auto-incrementing keys, is entirely up to the implementation.
pub trait Dialect {
    /// The character (or string) placed on both sides of an identifier.
    fn quote_char(&self) -> &str;

    /// Renders the storage type of `column`, including any size parameters.
    fn sql_type(&self, column: &Column) -> String;

    /// Keyword appended after `PRIMARY KEY` for auto-incrementing columns.
    fn auto_increment_keyword(&self) -> &str;

    /// When true, column definitions spell out `NULL` / `NOT NULL`.
    fn shows_explicit_nullability(&self) -> bool;
}

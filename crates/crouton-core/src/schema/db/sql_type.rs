use std::borrow::Cow;

/// Logical SQL type of a column.
///
/// `SqlType` carries a type name plus default size parameters. The name is
/// not interpreted by the core; dialects decide how (and whether) a given name
/// is spelled in DDL. The well-known names are provided as associated
/// constants so dialects and schema builders agree on spelling.
///
/// ```
/// # use crouton_core::schema::db::{SqlType, SqlTypeKind};
/// let ty = SqlType::new(SqlType::VARCHAR, 255, 0);
/// assert_eq!(ty.kind(), SqlTypeKind::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlType {
    /// Type name, e.g. `"VARCHAR"`.
    pub name: Cow<'static, str>,

    /// Length used when the column does not specify one.
    pub default_length: u64,

    /// Secondary length (scale for decimals) used when the column does not
    /// specify one.
    pub default_length2: u64,
}

/// Coarse classification of a [`SqlType`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlTypeKind {
    Bool,
    Integer,
    Float,
    Decimal,
    Text,
    Blob,
    Time,
    Unknown,
}

impl SqlType {
    pub const BIT: &'static str = "BIT";
    pub const TINY_INT: &'static str = "TINYINT";
    pub const SMALL_INT: &'static str = "SMALLINT";
    pub const MEDIUM_INT: &'static str = "MEDIUMINT";
    pub const INT: &'static str = "INT";
    pub const INTEGER: &'static str = "INTEGER";
    pub const BIG_INT: &'static str = "BIGINT";
    pub const SERIAL: &'static str = "SERIAL";
    pub const BIG_SERIAL: &'static str = "BIGSERIAL";

    pub const ENUM: &'static str = "ENUM";
    pub const SET: &'static str = "SET";

    pub const CHAR: &'static str = "CHAR";
    pub const VARCHAR: &'static str = "VARCHAR";
    pub const NVARCHAR: &'static str = "NVARCHAR";
    pub const TINY_TEXT: &'static str = "TINYTEXT";
    pub const TEXT: &'static str = "TEXT";
    pub const MEDIUM_TEXT: &'static str = "MEDIUMTEXT";
    pub const LONG_TEXT: &'static str = "LONGTEXT";
    pub const UUID: &'static str = "UUID";
    pub const JSON: &'static str = "JSON";

    pub const DATE: &'static str = "DATE";
    pub const DATETIME: &'static str = "DATETIME";
    pub const TIME: &'static str = "TIME";
    pub const TIMESTAMP: &'static str = "TIMESTAMP";
    pub const TIMESTAMPZ: &'static str = "TIMESTAMPZ";

    pub const DECIMAL: &'static str = "DECIMAL";
    pub const NUMERIC: &'static str = "NUMERIC";

    pub const REAL: &'static str = "REAL";
    pub const FLOAT: &'static str = "FLOAT";
    pub const DOUBLE: &'static str = "DOUBLE";

    pub const BINARY: &'static str = "BINARY";
    pub const VARBINARY: &'static str = "VARBINARY";
    pub const TINY_BLOB: &'static str = "TINYBLOB";
    pub const BLOB: &'static str = "BLOB";
    pub const MEDIUM_BLOB: &'static str = "MEDIUMBLOB";
    pub const LONG_BLOB: &'static str = "LONGBLOB";
    pub const BYTEA: &'static str = "BYTEA";

    pub const BOOL: &'static str = "BOOL";
    pub const BOOLEAN: &'static str = "BOOLEAN";

    pub fn new(name: impl Into<Cow<'static, str>>, default_length: u64, default_length2: u64) -> Self {
        Self {
            name: name.into(),
            default_length,
            default_length2,
        }
    }

    /// A type with no default size parameters.
    pub const fn named(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            default_length: 0,
            default_length2: 0,
        }
    }

    pub fn kind(&self) -> SqlTypeKind {
        const KINDS: &[(SqlTypeKind, &[&str])] = &[
            (SqlTypeKind::Bool, &[SqlType::BOOL, SqlType::BOOLEAN]),
            (
                SqlTypeKind::Integer,
                &[
                    SqlType::BIT,
                    SqlType::TINY_INT,
                    SqlType::SMALL_INT,
                    SqlType::MEDIUM_INT,
                    SqlType::INT,
                    SqlType::INTEGER,
                    SqlType::BIG_INT,
                    SqlType::SERIAL,
                    SqlType::BIG_SERIAL,
                ],
            ),
            (
                SqlTypeKind::Float,
                &[SqlType::REAL, SqlType::FLOAT, SqlType::DOUBLE],
            ),
            (SqlTypeKind::Decimal, &[SqlType::DECIMAL, SqlType::NUMERIC]),
            (
                SqlTypeKind::Text,
                &[
                    SqlType::CHAR,
                    SqlType::VARCHAR,
                    SqlType::NVARCHAR,
                    SqlType::TINY_TEXT,
                    SqlType::TEXT,
                    SqlType::MEDIUM_TEXT,
                    SqlType::LONG_TEXT,
                    SqlType::ENUM,
                    SqlType::SET,
                    SqlType::UUID,
                    SqlType::JSON,
                ],
            ),
            (
                SqlTypeKind::Blob,
                &[
                    SqlType::BINARY,
                    SqlType::VARBINARY,
                    SqlType::TINY_BLOB,
                    SqlType::BLOB,
                    SqlType::MEDIUM_BLOB,
                    SqlType::LONG_BLOB,
                    SqlType::BYTEA,
                ],
            ),
            (
                SqlTypeKind::Time,
                &[
                    SqlType::DATE,
                    SqlType::DATETIME,
                    SqlType::TIME,
                    SqlType::TIMESTAMP,
                    SqlType::TIMESTAMPZ,
                ],
            ),
        ];

        KINDS
            .iter()
            .find(|(_, names)| names.iter().any(|name| self.is(name)))
            .map(|(kind, _)| *kind)
            .unwrap_or(SqlTypeKind::Unknown)
    }

    /// Case-insensitive comparison against a type name.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn is_text(&self) -> bool {
        self.kind() == SqlTypeKind::Text
    }

    pub fn is_blob(&self) -> bool {
        self.kind() == SqlTypeKind::Blob
    }

    pub fn is_time(&self) -> bool {
        self.kind() == SqlTypeKind::Time
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self.kind(),
            SqlTypeKind::Integer | SqlTypeKind::Float | SqlTypeKind::Decimal
        )
    }
}

impl From<&'static str> for SqlType {
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

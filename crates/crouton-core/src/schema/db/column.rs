mod resolve;

use super::{MapType, SqlType};

use indexmap::{IndexMap, IndexSet};
use jiff::tz::TimeZone;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// Dotted path to the record field this column maps to, e.g. `"Addr.City"`.
    pub field_name: String,

    /// The logical SQL type, rendered by the dialect.
    pub sql_type: SqlType,

    /// Size parameters. Their meaning is up to the dialect (e.g. `VARCHAR(length)`
    /// or `DECIMAL(length, length2)`).
    pub length: u64,
    pub length2: u64,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Raw SQL of the DEFAULT clause. Empty means no default.
    pub default: String,

    /// True when the default is explicitly the empty value rather than absent.
    pub default_is_empty: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,

    /// Changes to the referenced record cascade to this column's row.
    pub cascade: bool,

    /// Optimistic-locking version column.
    pub version: bool,

    /// Lifecycle timestamp columns.
    pub created: bool,
    pub updated: bool,
    pub deleted: bool,

    /// Whether the column is read, written, or both.
    pub map_type: MapType,

    /// Names of the indexes this column belongs to.
    pub indexes: IndexSet<String>,

    /// Discrete value encodings for enum-like and flag-like columns.
    pub enum_options: IndexMap<String, i64>,
    pub set_options: IndexMap<String, i64>,

    /// Time zone values of this column are stored in, if not the default.
    pub time_zone: Option<TimeZone>,
    pub disable_time_zone: bool,

    /// `field_name` split on `.`, computed on first use.
    field_path: OnceLock<Vec<String>>,
}

impl Column {
    pub fn new(
        name: impl Into<String>,
        field_name: impl Into<String>,
        sql_type: impl Into<SqlType>,
        length: u64,
        length2: u64,
        nullable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            field_name: field_name.into(),
            sql_type: sql_type.into(),
            length,
            length2,
            nullable,
            default: String::new(),
            default_is_empty: false,
            primary_key: false,
            auto_increment: false,
            cascade: false,
            version: false,
            created: false,
            updated: false,
            deleted: false,
            map_type: MapType::TwoSides,
            indexes: IndexSet::new(),
            enum_options: IndexMap::new(),
            set_options: IndexMap::new(),
            time_zone: None,
            disable_time_zone: false,
            field_path: OnceLock::new(),
        }
    }

    /// Segments of `field_name`. The split happens once; later calls return
    /// the cached path even if `field_name` has since been reassigned.
    pub fn field_path(&self) -> &[String] {
        self.field_path
            .get_or_init(|| self.field_name.split('.').map(String::from).collect())
    }

    pub fn is_mapped_to_storage(&self) -> bool {
        self.map_type.writes_to_storage()
    }

    pub fn is_mapped_from_storage(&self) -> bool {
        self.map_type.reads_from_storage()
    }

    /// True for created/updated/deleted timestamp columns.
    pub fn is_lifecycle(&self) -> bool {
        self.created || self.updated || self.deleted
    }

    pub fn in_index(&self, name: &str) -> bool {
        self.indexes.contains(name)
    }
}

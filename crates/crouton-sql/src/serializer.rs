#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod create_table;

use column_def::ColumnDef;
use create_table::CreateTable;

use crouton_core::{
    schema::db::{Column, Table},
    Dialect,
};

/// Serialize schema definitions to SQL strings
pub struct Serializer<'a> {
    /// The dialect handles quoting, type names and the other differences
    /// between databases.
    dialect: &'a dyn Dialect,
}

struct Formatter<'a> {
    /// Dialect of the owning serializer
    dialect: &'a dyn Dialect,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Serializer<'a> {
        Serializer { dialect }
    }

    /// Renders the definition of `column` as it appears inside a CREATE TABLE
    /// statement, including an inline `PRIMARY KEY` clause when the column is
    /// a primary key.
    ///
    /// The fragment ends with a space so further clauses can be appended.
    pub fn column_def(&self, column: &Column) -> String {
        self.serialize(ColumnDef {
            column,
            primary_key: true,
        })
    }

    /// Same as [`column_def`](Self::column_def) but never emits the
    /// primary key clause. Used when the key is declared as a table
    /// constraint instead.
    pub fn column_def_no_pk(&self, column: &Column) -> String {
        self.serialize(ColumnDef {
            column,
            primary_key: false,
        })
    }

    /// Renders a `CREATE TABLE IF NOT EXISTS` statement for `table`.
    ///
    /// A single-column primary key is declared inline; a composite one is
    /// declared as a trailing `PRIMARY KEY (...)` constraint.
    pub fn create_table(&self, table: &Table) -> String {
        self.serialize(CreateTable(table))
    }

    fn serialize(&self, stmt: impl ToSql) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dialect: self.dialect,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);
        ret
    }
}

impl Formatter<'_> {
    fn trim_end(&mut self) {
        let len = self.dst.trim_end().len();
        self.dst.truncate(len);
    }
}

impl core::fmt::Debug for Serializer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Serializer")
            .field("quote_char", &self.dialect.quote_char())
            .finish()
    }
}

use super::{Formatter, Ident, ToSql};

use crouton_core::schema::db::Column;

pub(super) struct ColumnDef<'a> {
    pub(super) column: &'a Column,

    /// When false, the `PRIMARY KEY` clause is left out regardless of the
    /// column's flags.
    pub(super) primary_key: bool,
}

impl ToSql for ColumnDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let dialect = f.dialect;
        let column = self.column;
        let ty = dialect.sql_type(column);

        fmt!(f, Ident(&column.name), " ", &ty, " ");

        if self.primary_key && column.primary_key {
            fmt!(f, "PRIMARY KEY ");

            if column.auto_increment {
                fmt!(f, dialect.auto_increment_keyword(), " ");
            }
        }

        if dialect.shows_explicit_nullability() {
            fmt!(f, if column.nullable { "NULL " } else { "NOT NULL " });
        }

        if !column.default.is_empty() {
            fmt!(f, "DEFAULT ", &column.default, " ");
        }
    }
}

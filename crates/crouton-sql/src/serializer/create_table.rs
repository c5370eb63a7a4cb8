use super::{ColumnDef, Comma, Formatter, Ident, ToSql};

use crouton_core::schema::db::{Column, Table};

pub(super) struct CreateTable<'a>(pub(super) &'a Table);

impl ToSql for CreateTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = self.0;
        let primary_key: Vec<&Column> = table.primary_key_columns().collect();
        let inline_pk = primary_key.len() == 1;

        fmt!(f, "CREATE TABLE IF NOT EXISTS ", Ident(&table.name), " (");

        let mut s = "";
        for column in &table.columns {
            fmt!(
                f,
                s,
                ColumnDef {
                    column,
                    primary_key: inline_pk,
                }
            );
            f.trim_end();
            s = ", ";
        }

        if primary_key.len() > 1 {
            let names = Comma(primary_key.iter().map(|column| Ident(&column.name)));
            fmt!(f, ", PRIMARY KEY (", names, ")");
        }

        fmt!(f, ")");
    }
}

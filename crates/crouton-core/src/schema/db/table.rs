use super::Column;

#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Name of the table in the database.
    pub name: String,

    /// The table's columns, in declaration order.
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }
}

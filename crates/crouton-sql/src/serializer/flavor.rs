use super::Serializer;

use crouton_core::{
    schema::db::{Column, SqlType, SqlTypeKind},
    Dialect,
};

/// Built-in SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer<'static> {
    pub fn sqlite() -> Serializer<'static> {
        Serializer::new(&Flavor::Sqlite)
    }

    pub fn postgresql() -> Serializer<'static> {
        Serializer::new(&Flavor::Postgresql)
    }

    pub fn mysql() -> Serializer<'static> {
        Serializer::new(&Flavor::Mysql)
    }
}

impl Dialect for Flavor {
    fn quote_char(&self) -> &str {
        match self {
            Flavor::Postgresql => "\"",
            Flavor::Sqlite | Flavor::Mysql => "`",
        }
    }

    fn sql_type(&self, column: &Column) -> String {
        match self {
            Flavor::Sqlite => sqlite_type(column),
            Flavor::Postgresql => postgresql_type(column),
            Flavor::Mysql => mysql_type(column),
        }
    }

    fn auto_increment_keyword(&self) -> &str {
        match self {
            Flavor::Sqlite => "AUTOINCREMENT",
            Flavor::Mysql => "AUTO_INCREMENT",
            // Auto-incrementing keys are SERIAL columns
            Flavor::Postgresql => "",
        }
    }

    fn shows_explicit_nullability(&self) -> bool {
        true
    }
}

/// SQLite only knows storage classes; every type collapses into one of them.
fn sqlite_type(column: &Column) -> String {
    let ty = &column.sql_type;

    let name = match ty.kind() {
        SqlTypeKind::Bool | SqlTypeKind::Integer => "INTEGER",
        SqlTypeKind::Float => "REAL",
        SqlTypeKind::Decimal => "NUMERIC",
        SqlTypeKind::Text => "TEXT",
        SqlTypeKind::Blob => "BLOB",
        SqlTypeKind::Time if ty.is(SqlType::TIMESTAMPZ) => "TEXT",
        SqlTypeKind::Time => "DATETIME",
        SqlTypeKind::Unknown => return ty.name.to_uppercase(),
    };

    name.to_string()
}

fn postgresql_type(column: &Column) -> String {
    let ty = &column.sql_type;
    let auto = column.auto_increment;

    let name = if ty.is(SqlType::TINY_INT) || ty.is(SqlType::SMALL_INT) {
        SqlType::SMALL_INT
    } else if ty.is(SqlType::BIT) || ty.is(SqlType::BOOL) || ty.is(SqlType::BOOLEAN) {
        SqlType::BOOLEAN
    } else if ty.is(SqlType::MEDIUM_INT) || ty.is(SqlType::INT) || ty.is(SqlType::INTEGER) {
        if auto {
            SqlType::SERIAL
        } else {
            SqlType::INTEGER
        }
    } else if ty.is(SqlType::BIG_INT) {
        if auto {
            SqlType::BIG_SERIAL
        } else {
            SqlType::BIG_INT
        }
    } else if ty.is(SqlType::FLOAT) {
        SqlType::REAL
    } else if ty.is(SqlType::DOUBLE) {
        "DOUBLE PRECISION"
    } else if ty.is(SqlType::NVARCHAR) || ty.is(SqlType::ENUM) || ty.is(SqlType::SET) {
        SqlType::VARCHAR
    } else if ty.is(SqlType::TINY_TEXT) || ty.is(SqlType::MEDIUM_TEXT) || ty.is(SqlType::LONG_TEXT)
    {
        SqlType::TEXT
    } else if ty.is(SqlType::DATETIME) {
        SqlType::TIMESTAMP
    } else if ty.is(SqlType::TIMESTAMPZ) {
        "TIMESTAMP WITH TIME ZONE"
    } else if ty.is_blob() {
        SqlType::BYTEA
    } else {
        return with_lengths(&ty.name.to_uppercase(), column, takes_length(ty));
    };

    with_lengths(name, column, takes_length(&SqlType::named(name)))
}

fn mysql_type(column: &Column) -> String {
    let ty = &column.sql_type;

    if ty.is(SqlType::ENUM) || ty.is(SqlType::SET) {
        let options = if ty.is(SqlType::ENUM) {
            &column.enum_options
        } else {
            &column.set_options
        };

        let options = options
            .keys()
            .map(|option| format!("'{}'", option.replace('\'', "''")))
            .collect::<Vec<_>>()
            .join(",");

        return format!("{}({options})", ty.name.to_uppercase());
    }

    let (name, default_length) = if ty.is(SqlType::BOOL) || ty.is(SqlType::BOOLEAN) {
        (SqlType::TINY_INT, 1)
    } else if ty.is(SqlType::SERIAL) {
        (SqlType::INT, 0)
    } else if ty.is(SqlType::BIG_SERIAL) {
        (SqlType::BIG_INT, 0)
    } else if ty.is(SqlType::BYTEA) {
        (SqlType::BLOB, 0)
    } else if ty.is(SqlType::TIMESTAMPZ) {
        (SqlType::CHAR, 64)
    } else if ty.is(SqlType::NVARCHAR) {
        (SqlType::VARCHAR, 0)
    } else if ty.is(SqlType::UUID) {
        (SqlType::VARCHAR, 36)
    } else {
        let name = ty.name.to_uppercase();
        return with_lengths(&name, column, true);
    };

    if column.length == 0 && ty.default_length == 0 && default_length > 0 {
        return format!("{name}({default_length})");
    }

    with_lengths(name, column, true)
}

/// Types whose size parameters PostgreSQL accepts.
fn takes_length(ty: &SqlType) -> bool {
    [
        SqlType::CHAR,
        SqlType::VARCHAR,
        SqlType::DECIMAL,
        SqlType::NUMERIC,
    ]
    .iter()
    .any(|name| ty.is(name))
}

/// Appends `(length)` or `(length,length2)`, falling back to the type's
/// default lengths when the column does not set them.
fn with_lengths(name: &str, column: &Column, sized: bool) -> String {
    let length = match column.length {
        0 => column.sql_type.default_length,
        length => length,
    };
    let length2 = match column.length2 {
        0 => column.sql_type.default_length2,
        length2 => length2,
    };

    match (sized, length, length2) {
        (false, ..) | (true, 0, _) => name.to_string(),
        (true, length, 0) => format!("{name}({length})"),
        (true, length, length2) => format!("{name}({length},{length2})"),
    }
}

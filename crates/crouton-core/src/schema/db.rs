mod column;
pub use column::Column;

mod map_type;
pub use map_type::MapType;

mod sql_type;
pub use sql_type::{SqlType, SqlTypeKind};

mod table;
pub use table::Table;

mod field_ref;
pub use field_ref::FieldRef;

mod ty;
pub use ty::Type;

mod ty_struct;
pub use ty_struct::{FieldTy, StructType};

mod value;
pub use value::Value;

mod value_ptr;
pub use value_ptr::ValuePtr;

mod value_struct;
pub use value_struct::ValueStruct;

use indexmap::IndexMap;

/// Key/value shaped record.
pub type ValueMap = IndexMap<String, Value>;

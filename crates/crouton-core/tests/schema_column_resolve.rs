use crouton_core::schema::db::{Column, SqlType};
use crouton_core::stmt::{StructType, Type, Value, ValueMap, ValuePtr, ValueStruct};
use std::sync::Arc;

fn column(field_name: &str) -> Column {
    Column::new("col", field_name, SqlType::VARCHAR, 255, 0, true)
}

/// Address { City: String, Zip: String }
fn address_ty() -> Arc<StructType> {
    StructType::new("Address")
        .field("City", Type::String)
        .field("Zip", Type::String)
        .build()
}

/// Geo { Lat: F64 }
fn geo_ty() -> Arc<StructType> {
    StructType::new("Geo").field("Lat", Type::F64).build()
}

/// User { ID: I64, Name: String, Addr: *Address, Home: Address }
fn user_ty() -> Arc<StructType> {
    StructType::new("User")
        .field("ID", Type::I64)
        .field("Name", Type::String)
        .field("Addr", Type::ptr(address_ty()))
        .field("Home", address_ty())
        .build()
}

fn user() -> Value {
    ValueStruct::zero(&user_ty())
        .with("ID", 1i64)
        .with("Name", "alice")
        .into()
}

fn addr(record: &Value) -> &ValuePtr {
    record.expect_struct()["Addr"].expect_ptr()
}

#[test]
fn resolve_top_level_field_writes_through() {
    let col = column("Name");
    let mut record = user();

    col.resolve(&mut record).unwrap().set("bob");

    assert_eq!(record.expect_struct()["Name"], Value::from("bob"));
}

#[test]
fn resolve_reads_current_value() {
    let col = column("ID");
    let mut record = user();

    let field = col.resolve(&mut record).unwrap();
    assert!(field.is_valid());
    assert_eq!(field.get(), Some(&Value::I64(1)));
}

#[test]
fn resolve_nested_struct_field() {
    let col = column("Home.Zip");
    let mut record = user();

    col.resolve(&mut record).unwrap().set("94107");

    let home = record.expect_struct()["Home"].expect_struct();
    assert_eq!(home["Zip"], Value::from("94107"));
    assert_eq!(home["City"], Value::from(""));
}

#[test]
fn resolve_materializes_nil_pointer() {
    let col = column("Addr.City");
    let mut record = user();
    assert!(addr(&record).is_nil());

    let field = col.resolve(&mut record).unwrap();
    assert_eq!(field.get(), Some(&Value::from("")));
    field.set("Paris");

    let addr = addr(&record);
    assert!(!addr.is_nil());
    let addr = addr.get().unwrap().expect_struct();
    assert_eq!(addr["City"], Value::from("Paris"));
    assert_eq!(addr["Zip"], Value::from(""));
}

#[test]
fn resolve_twice_reuses_materialized_pointer() {
    let col = column("Addr.City");
    let mut record = user();

    col.resolve(&mut record).unwrap().set("Paris");
    let first = addr(&record).get().unwrap() as *const Value;

    let field = col.resolve(&mut record).unwrap();
    assert_eq!(field.get(), Some(&Value::from("Paris")));
    field.set("Lyon");

    let second = addr(&record).get().unwrap() as *const Value;
    assert_eq!(first, second);
    assert_eq!(
        addr(&record).get().unwrap().expect_struct()["City"],
        Value::from("Lyon")
    );
}

#[test]
fn resolve_follows_existing_pointer() {
    let col = column("Addr.Zip");
    let mut record: Value = ValueStruct::zero(&user_ty())
        .with(
            "Addr",
            ValuePtr::new(
                Type::Struct(address_ty()),
                ValueStruct::zero(&address_ty()).with("Zip", "10001"),
            ),
        )
        .into();

    let field = col.resolve(&mut record).unwrap();
    assert_eq!(field.get(), Some(&Value::from("10001")));
}

#[test]
fn resolve_pointer_chain() {
    // Outer { Inner: *Inner }, Inner { Geo: *Geo }
    let inner_ty = StructType::new("Inner")
        .field("Geo", Type::ptr(geo_ty()))
        .build();
    let outer_ty = StructType::new("Outer")
        .field("Inner", Type::ptr(inner_ty))
        .build();

    let col = column("Inner.Geo.Lat");
    let mut record: Value = ValueStruct::zero(&outer_ty).into();

    col.resolve(&mut record).unwrap().set(1.5f64);

    let inner = record.expect_struct()["Inner"].expect_ptr().get().unwrap();
    let geo = inner.expect_struct()["Geo"].expect_ptr().get().unwrap();
    assert_eq!(geo.expect_struct()["Lat"], Value::F64(1.5));
}

#[test]
fn resolve_missing_field_fails() {
    let col = column("X");
    let mut record = user();

    let err = col.resolve(&mut record).unwrap_err();
    assert!(err.is_field_resolution());
    assert_eq!(err.to_string(), "field X is not valid");
}

#[test]
fn resolve_missing_nested_field_fails() {
    let col = column("Home.Country");
    let mut record = user();

    let err = col.resolve(&mut record).unwrap_err();
    assert_eq!(err.to_string(), "field Home.Country is not valid");
}

#[test]
fn resolve_missing_intermediate_field_fails() {
    let col = column("Office.City");
    let mut record = user();

    let err = col.resolve(&mut record).unwrap_err();
    assert!(err.is_field_resolution());
    assert_eq!(err.to_string(), "field Office.City is not valid");
}

#[test]
fn resolve_through_scalar_fails() {
    let col = column("Name.First");
    let mut record = user();

    let err = col.resolve(&mut record).unwrap_err();
    assert!(err.is_field_resolution());
    assert_eq!(err.to_string(), "field Name.First is not valid");
}

#[test]
fn resolve_through_pointer_to_scalar_fails() {
    let ty = StructType::new("Holder")
        .field("Count", Type::ptr(Type::I64))
        .build();
    let col = column("Count.Value");
    let mut record: Value = ValueStruct::zero(&ty).into();

    let err = col.resolve(&mut record).unwrap_err();
    assert!(err.is_field_resolution());
    // The pointer is left untouched.
    assert!(record.expect_struct()["Count"].expect_ptr().is_nil());
}

#[test]
fn resolve_map_uses_last_segment() {
    let col = column("Addr.City");
    let mut map = ValueMap::new();
    map.insert("City".to_string(), Value::from("Oslo"));
    map.insert("Addr".to_string(), Value::from("ignored"));
    let mut record = Value::Map(map);

    let field = col.resolve(&mut record).unwrap();
    assert!(field.is_valid());
    assert_eq!(field.get(), Some(&Value::from("Oslo")));
}

#[test]
fn resolve_map_missing_key_is_invalid_not_error() {
    let col = column("City");
    let mut record = Value::Map(ValueMap::new());

    let field = col.resolve(&mut record).unwrap();
    assert!(!field.is_valid());
    assert_eq!(field.get(), None);

    field.set("Bergen");
    assert_eq!(
        record.as_map().unwrap().get("City"),
        Some(&Value::from("Bergen"))
    );
}

#[test]
fn resolve_boxed_record() {
    let col = column("Addr.City");
    let mut record = Value::boxed(user());

    col.resolve(&mut record).unwrap().set("Rome");

    let Value::Dyn(inner) = &record else {
        panic!("expected boxed record")
    };
    let city = &addr(inner).get().unwrap().expect_struct()["City"];
    assert_eq!(*city, Value::from("Rome"));
}

#[test]
fn resolve_through_top_level_pointer() {
    let col = column("Name");
    let mut record: Value = ValuePtr::new(Type::Struct(user_ty()), user()).into();

    col.resolve(&mut record).unwrap().set("carol");

    let user = record.expect_ptr().get().unwrap().expect_struct();
    assert_eq!(user["Name"], Value::from("carol"));
}

#[test]
fn resolve_nil_top_level_pointer_fails() {
    let col = column("Name");
    let mut record: Value = ValuePtr::nil(Type::Struct(user_ty())).into();

    let err = col.resolve(&mut record).unwrap_err();
    assert!(err.is_field_resolution());
}

#[test]
fn resolve_in_does_not_follow_top_level_pointer() {
    let col = column("Name");
    let mut record: Value = ValuePtr::new(Type::Struct(user_ty()), user()).into();

    let err = col.resolve_in(&mut record).unwrap_err();
    assert!(err.is_field_resolution());
}

#[test]
fn resolve_scalar_record_fails() {
    let col = column("Name");
    let mut record = Value::from("not a record");

    let err = col.resolve(&mut record).unwrap_err();
    assert!(err.is_field_resolution());
}

#[test]
fn resolve_uses_cached_field_path() {
    let mut col = column("Addr.City");
    assert_eq!(col.field_path(), ["Addr", "City"]);

    // The path is split once; reassigning the name does not re-split.
    col.field_name = "Name".to_string();
    let mut record = user();
    col.resolve(&mut record).unwrap().set("Paris");

    assert_eq!(
        addr(&record).get().unwrap().expect_struct()["City"],
        Value::from("Paris")
    );
    assert_eq!(record.expect_struct()["Name"], Value::from("alice"));
}

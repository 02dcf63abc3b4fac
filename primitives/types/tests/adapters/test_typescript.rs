use ir::{Field, FieldKind};
use types::{TypeAdapter, TypeMap, TypeScriptAdapter};

#[test]
fn test_typescript_adapter_metadata() {
    let adapter = TypeScriptAdapter::new();
    assert_eq!(adapter.target_name(), "typescript");
    assert_eq!(adapter.file_extension(), "ts");
    assert_eq!(adapter.type_map(), &TypeMap::typescript());
}

#[test]
fn test_map_scalar_defaults() {
    let adapter = TypeScriptAdapter::default();

    let cases = [
        ("String", "string"),
        ("Boolean", "boolean"),
        ("Int", "number"),
        ("Float", "number"),
        ("BigInt", "bigint"),
        ("Decimal", "number"),
        ("DateTime", "Date"),
        ("Json", "unknown"),
        ("Bytes", "Uint8Array"),
    ];
    for (source, expected) in cases {
        assert_eq!(
            adapter.map_scalar(source).expect("default scalar should map"),
            expected,
            "mapping for {}",
            source
        );
    }
}

#[test]
fn test_map_field_type_enum_uses_enum_name() {
    let adapter = TypeScriptAdapter::new();

    // Enum names are never looked up in the type map
    let field = Field::enumeration("role", "Role");
    assert_eq!(adapter.map_field_type(&field).expect("enum field should map"), "Role");

    let field = Field::new("status", "String", FieldKind::Enum);
    assert_eq!(adapter.map_field_type(&field).expect("enum field should map"), "String");
}

#[test]
fn test_map_field_type_scalar_unknown() {
    let adapter = TypeScriptAdapter::new();
    let field = Field::scalar("location", "Point");

    let err = adapter.map_field_type(&field).expect_err("Point is not a known scalar");
    assert_eq!(err.type_name, "Point");
}

#[test]
fn test_custom_type_map() {
    let map = TypeMap::typescript().with_overrides([("BigInt", "string"), ("Point", "[number, number]")]);
    let adapter = TypeScriptAdapter::with_type_map(map);

    assert_eq!(adapter.map_scalar("BigInt").expect("override should map"), "string");
    assert_eq!(
        adapter.map_field_type(&Field::scalar("location", "Point")).expect("added type should map"),
        "[number, number]"
    );
}

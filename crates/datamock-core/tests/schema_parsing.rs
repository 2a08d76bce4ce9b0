use datamock_core::{FieldKind, Schema, SchemaError};
use serde_json::json;

fn three_loops() -> serde_json::Value {
    json!({
        "business": {"type": "string", "loopOrder": 1, "enumeratedValues": ["retail", "wholesale"]},
        "product": {"type": "string", "loopOrder": 2, "enumeratedValues": ["a", "b", "c"]},
        "day": {"type": "date", "loopOrder": 3, "min": "2024-01-01", "max": "2024-01-05"}
    })
}

#[test]
fn declaration_order_is_preserved() {
    let mut doc = three_loops();
    doc.as_object_mut()
        .expect("object")
        .insert("amount".to_string(), json!({"type": "decimal", "min": 0, "max": 10, "random": true}));

    let schema = Schema::from_value(doc).expect("valid schema");
    let names: Vec<&str> = schema.names().collect();
    assert_eq!(names, vec!["business", "product", "day", "amount"]);
}

#[test]
fn empty_document_is_rejected() {
    let result = Schema::from_value(json!({}));
    assert!(matches!(result, Err(SchemaError::EmptySchema)));
}

#[test]
fn non_object_document_is_rejected() {
    let result = Schema::from_value(json!([1, 2, 3]));
    assert!(matches!(result, Err(SchemaError::InvalidDocument(_))));
}

#[test]
fn fewer_than_three_loop_fields_is_rejected() {
    let doc = json!({
        "business": {"type": "string", "loopOrder": 1, "enumeratedValues": ["retail"]},
        "product": {"type": "string", "loopOrder": 2, "enumeratedValues": ["a"]},
        "amount": {"type": "integer", "min": 1, "max": 5, "random": true}
    });
    let result = Schema::from_value(doc);
    assert!(matches!(
        result,
        Err(SchemaError::InsufficientLoopFields { found: 2 })
    ));
}

#[test]
fn loop_fields_sort_by_loop_order() {
    let doc = json!({
        "third": {"type": "string", "loopOrder": 9, "enumeratedValues": ["z"]},
        "first": {"type": "string", "loopOrder": 1, "enumeratedValues": ["a"]},
        "second": {"type": "string", "loopOrder": 4, "enumeratedValues": ["m"]}
    });
    let schema = Schema::from_value(doc).expect("valid schema");
    let parts = schema.partition().expect("partition");
    let loops: Vec<&str> = parts.loops.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(loops, vec!["first", "second", "third"]);
    assert!(parts.ignored.is_empty());
    assert!(parts.rest.is_empty());
}

#[test]
fn extra_loop_fields_are_ignored_not_expanded() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object").insert(
        "fourth".to_string(),
        json!({"type": "string", "loopOrder": 4, "enumeratedValues": ["x"]}),
    );
    let schema = Schema::from_value(doc).expect("valid schema");
    let parts = schema.partition().expect("partition");
    assert_eq!(parts.loops.len(), 3);
    assert_eq!(parts.ignored.len(), 1);
    assert_eq!(parts.ignored[0].name, "fourth");
}

#[test]
fn equal_loop_orders_keep_declaration_order() {
    let doc = json!({
        "left": {"type": "string", "loopOrder": 1, "enumeratedValues": ["a"]},
        "right": {"type": "string", "loopOrder": 1, "enumeratedValues": ["b"]},
        "day": {"type": "date", "loopOrder": 2, "min": "2024-01-01", "max": "2024-01-01"}
    });
    let schema = Schema::from_value(doc).expect("valid schema");
    let parts = schema.partition().expect("partition");
    let loops: Vec<&str> = parts.loops.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(loops, vec!["left", "right", "day"]);
}

#[test]
fn reversed_date_bounds_are_rejected() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object")["day"] =
        json!({"type": "date", "loopOrder": 3, "min": "2024-02-01", "max": "2024-01-01"});
    let result = Schema::from_value(doc);
    assert!(matches!(
        result,
        Err(SchemaError::InvalidFieldSpec { ref field, .. }) if field == "day"
    ));
}

#[test]
fn malformed_date_bound_is_rejected() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object")["day"] =
        json!({"type": "date", "loopOrder": 3, "min": "01/01/2024", "max": "2024-01-05"});
    assert!(Schema::from_value(doc).is_err());
}

#[test]
fn integer_loop_without_bounds_is_rejected() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object").insert(
        "quantity".to_string(),
        json!({"type": "integer", "loopOrder": 4}),
    );
    let result = Schema::from_value(doc);
    assert!(matches!(
        result,
        Err(SchemaError::InvalidFieldSpec { ref field, .. }) if field == "quantity"
    ));
}

#[test]
fn zero_step_is_rejected() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object")["product"] =
        json!({"type": "integer", "loopOrder": 2, "min": 1, "max": 5, "step": 0});
    assert!(Schema::from_value(doc).is_err());
}

#[test]
fn datetime_loop_field_is_rejected() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object")["product"] =
        json!({"type": "datetime", "loopOrder": 2});
    assert!(Schema::from_value(doc).is_err());
}

#[test]
fn unknown_kind_is_rejected_in_loop_position_only() {
    let mut doc = three_loops();
    doc.as_object_mut()
        .expect("object")
        .insert("blob".to_string(), json!({"type": "geometry"}));
    let schema = Schema::from_value(doc).expect("unknown rest kind is permitted");
    let blob = schema
        .fields()
        .iter()
        .find(|f| f.name == "blob")
        .expect("blob field");
    assert_eq!(blob.spec.kind, FieldKind::Other("geometry".to_string()));

    let mut doc = three_loops();
    doc.as_object_mut().expect("object")["product"] =
        json!({"type": "geometry", "loopOrder": 2});
    assert!(Schema::from_value(doc).is_err());
}

#[test]
fn string_without_constraints_is_rejected_as_loop() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object")["product"] =
        json!({"type": "string", "loopOrder": 2});
    let result = Schema::from_value(doc);
    assert!(matches!(
        result,
        Err(SchemaError::InvalidFieldSpec { ref field, .. }) if field == "product"
    ));
}

#[test]
fn float_and_double_are_decimal_synonyms() {
    let mut doc = three_loops();
    let object = doc.as_object_mut().expect("object");
    object.insert(
        "a".to_string(),
        json!({"type": "float", "min": 0.5, "max": 1.5, "random": true}),
    );
    object.insert(
        "b".to_string(),
        json!({"type": "double", "min": 0, "max": 1, "random": true}),
    );
    let schema = Schema::from_value(doc).expect("valid schema");
    for name in ["a", "b"] {
        let field = schema.fields().iter().find(|f| f.name == name).expect("field");
        assert_eq!(field.spec.kind, FieldKind::Decimal);
    }
}

#[test]
fn fixed_value_bypasses_range_validation() {
    let mut doc = three_loops();
    doc.as_object_mut().expect("object").insert(
        "constant".to_string(),
        json!({"type": "integer", "fixedValue": 42}),
    );
    assert!(Schema::from_value(doc).is_ok());
}

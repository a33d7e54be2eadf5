//! End-to-end test: the JSON input and output contract.
//!
//! Verifies that:
//! - Omitted flags are false and unknown flags are rejected
//! - The trait report serializes every aggregate reason for class types

use typetraits_evaluator::evaluate;
use typetraits_render::render;
use typetraits_types::{AttributeSet, TypeClass};

#[test]
fn collaborator_json_drives_both_consumers() {
    let set: AttributeSet = serde_json::from_str(
        r#"{
            "type_class": "class",
            "attributes": {
                "has_protected_base_class": true,
                "has_explicit_default_constr": true
            }
        }"#,
    )
    .unwrap();

    let report = serde_json::to_value(evaluate(&set)).unwrap();
    let reasons = &report["aggregate"]["reasons"];
    assert_eq!(reasons.as_object().unwrap().len(), 6);
    assert_eq!(reasons["has_explicit_constr"], true);
    assert_eq!(reasons["has_virtual_private_or_protected_base"], true);
    assert_eq!(reasons["has_virtual_mf"], false);
    assert_eq!(report["aggregate"]["is_aggregate"], false);

    let text = render(&set).unwrap();
    assert_eq!(
        text,
        "struct T : protected Base1\n{\n    explicit T() = default;\n};"
    );
}

#[test]
fn unknown_flag_rejected_at_boundary() {
    let result = serde_json::from_str::<AttributeSet>(
        r#"{"type_class":"class","attributes":{"has_trivial_base_class":true}}"#,
    );
    assert!(result.is_err());
}

#[test]
fn unknown_type_class_rejected_at_boundary() {
    let result = serde_json::from_str::<AttributeSet>(r#"{"type_class":"union"}"#);
    assert!(result.is_err());
}

#[test]
fn non_class_report_has_no_reasons() {
    let set = AttributeSet::new(TypeClass::Enumeration);
    let report = serde_json::to_value(evaluate(&set)).unwrap();
    assert!(report["aggregate"]["reasons"].is_null());
    assert_eq!(report["default_constructible"], true);
    assert_eq!(report["type_class"], "enumeration");
}

//! End-to-end test: evaluate and render the same snapshot.
//!
//! Verifies that:
//! - The evaluator and renderer agree on one shared attribute set
//! - Each documented scenario yields its verdicts and declaration text
//! - The two render conflicts surface as typed errors

use typetraits_evaluator::{evaluate, is_aggregate, AggregateCriterion};
use typetraits_render::{inheritance_fragment, render, RenderConfig, RenderError, Renderer};
use typetraits_types::{Attribute, AttributeSet, TypeClass};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn class_with(attributes: &[Attribute]) -> AttributeSet {
    AttributeSet::new(TypeClass::Class).with_all(attributes.iter().copied())
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn public_base_class_scenario() {
    let set = class_with(&[Attribute::HasPublicBaseClass]);

    let fragment = inheritance_fragment(&set, &RenderConfig::default());
    assert_eq!(fragment.text, ": public Base1");
    assert_eq!(fragment.base_count, 1);

    let report = evaluate(&set);
    assert!(report.is_aggregate());
    assert!(report.trivially_default_constructible);

    assert_eq!(render(&set).unwrap(), "struct T : public Base1\n{\n};");
}

#[test]
fn virtual_member_function_scenario() {
    let set = class_with(&[Attribute::HasVirtualMf]);

    let verdict = is_aggregate(&set);
    assert!(!verdict.is_aggregate);
    let reasons = verdict.reasons.unwrap();
    assert!(reasons.has_virtual_mf);
    assert_eq!(reasons.failing(), vec![AggregateCriterion::VirtualMf]);

    let text = render(&set).unwrap();
    assert!(text.contains("virtual f();"));
}

#[test]
fn member_with_initializer_scenario() {
    let set = class_with(&[Attribute::HasNsdmWithInitializer]);

    let report = evaluate(&set);
    assert!(!report.trivially_default_constructible);
    assert!(report.default_constructible);

    let text = render(&set).unwrap();
    assert!(text.lines().any(|l| l.trim() == "int a = 0;"));
}

#[test]
fn reference_member_scenario() {
    let set = class_with(&[Attribute::HasInitializerNeedyNsdm]);

    let report = evaluate(&set);
    assert!(!report.default_constructible);
    assert!(!report.trivially_default_constructible);
    assert!(report.is_aggregate());

    assert!(render(&set).unwrap().contains("int& b;"));
}

#[test]
fn inherited_constructor_with_private_base() {
    let set = class_with(&[
        Attribute::HasPrivateBaseClass,
        Attribute::HasInheritedDefaultConstr,
    ]);

    let report = evaluate(&set);
    let failing = report.aggregate.reasons.unwrap().failing();
    assert_eq!(
        failing,
        vec![
            AggregateCriterion::InheritedConstr,
            AggregateCriterion::VirtualPrivateOrProtectedBase
        ]
    );
    assert_eq!(report.aggregate.explain().len(), 2);

    let expected = "struct T : private Base1
{
    using Base1::Base1;
};";
    assert_eq!(render(&set).unwrap(), expected);
}

#[test]
fn user_provided_and_inherited_is_ambiguous() {
    let set = class_with(&[
        Attribute::HasPublicBaseClass,
        Attribute::HasUserProvidedDefaultConstr,
        Attribute::HasInheritedDefaultConstr,
    ]);
    assert!(matches!(
        render(&set),
        Err(RenderError::AmbiguousConstructorStyle { .. })
    ));

    // the evaluator still answers for the same snapshot
    let report = evaluate(&set);
    assert!(!report.is_aggregate());
    assert!(report.default_constructible);
}

#[test]
fn inherited_without_base_is_dangling() {
    let set = class_with(&[Attribute::HasInheritedDefaultConstr]);
    assert_eq!(render(&set), Err(RenderError::DanglingInheritedConstructor));
    assert!(!evaluate(&set).is_aggregate());
}

#[test]
fn contradictory_set_still_evaluates() {
    let set = AttributeSet::new(TypeClass::Array).with_all(Attribute::ALL);
    let report = evaluate(&set);
    assert!(report.is_aggregate());
    assert!(report.default_constructible);
    assert!(!report.trivially_default_constructible);
}

#[test]
fn shared_renderer_across_threads() {
    let renderer = std::sync::Arc::new(Renderer::new());
    let handles: Vec<_> = Attribute::BASE_CLASSES
        .into_iter()
        .map(|base| {
            let renderer = renderer.clone();
            std::thread::spawn(move || renderer.render(&class_with(&[base])))
        })
        .collect();
    for handle in handles {
        let text = handle.join().unwrap().unwrap();
        assert!(text.contains("Base1"));
    }
}

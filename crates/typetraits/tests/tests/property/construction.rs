//! Property tests: default-constructibility.

use proptest::prelude::*;
use typetraits_evaluator::{evaluate, is_default_constructible, is_trivially_default_constructible};
use typetraits_tests::{arb_attribute_set, arb_flags_for, arb_type_class};
use typetraits_types::TypeClass;

proptest! {
    /// Trivial default construction implies default construction.
    #[test]
    fn trivial_implies_default(set in arb_attribute_set()) {
        if is_trivially_default_constructible(&set) {
            prop_assert!(is_default_constructible(&set));
        }
    }

    /// Non-object types are never default constructible.
    #[test]
    fn non_objects_never_default_constructible(
        set in arb_type_class()
            .prop_filter("non-object", |t| !t.is_object())
            .prop_flat_map(arb_flags_for)
    ) {
        prop_assert!(!is_default_constructible(&set));
    }

    /// Scalars and arrays ignore the class-only flags.
    #[test]
    fn non_class_objects_always_default_constructible(
        set in arb_type_class()
            .prop_filter("non-class object", |t| t.is_object() && *t != TypeClass::Class)
            .prop_flat_map(arb_flags_for)
    ) {
        prop_assert!(is_default_constructible(&set));
    }

    /// The report agrees with the individual predicates.
    #[test]
    fn report_matches_predicates(set in arb_attribute_set()) {
        let report = evaluate(&set);
        prop_assert_eq!(report.default_constructible, is_default_constructible(&set));
        prop_assert_eq!(
            report.trivially_default_constructible,
            is_trivially_default_constructible(&set)
        );
        prop_assert_eq!(report, evaluate(&set));
    }
}

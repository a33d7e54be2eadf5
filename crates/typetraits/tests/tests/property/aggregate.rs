//! Property tests: aggregate classification.
//!
//! Arrays are always aggregates, other non-class types never are, and a
//! class is an aggregate exactly when none of its six recorded criteria holds.

use proptest::prelude::*;
use typetraits_evaluator::{is_aggregate, AggregateCriterion};
use typetraits_tests::{arb_attribute_set, arb_flags_for, arb_non_aggregate_class};
use typetraits_types::TypeClass;

proptest! {
    /// Arrays are aggregates whatever flags are set.
    #[test]
    fn arrays_always_aggregate(set in arb_flags_for(TypeClass::Array)) {
        let verdict = is_aggregate(&set);
        prop_assert!(verdict.is_aggregate);
        prop_assert!(verdict.reasons.is_none());
    }

    /// Non-array, non-class types are never aggregates.
    #[test]
    fn other_types_never_aggregate(
        set in arb_non_aggregate_class().prop_flat_map(arb_flags_for)
    ) {
        prop_assert!(!is_aggregate(&set).is_aggregate);
    }

    /// For classes the verdict is exactly "no criterion holds", and all six
    /// criteria are always present.
    #[test]
    fn class_verdict_matches_reasons(set in arb_flags_for(TypeClass::Class)) {
        let verdict = is_aggregate(&set);
        let reasons = verdict.reasons.expect("class verdict carries reasons");
        let any_failing = AggregateCriterion::ALL.iter().any(|c| reasons.get(*c));
        prop_assert_eq!(verdict.is_aggregate, !any_failing);

        let value = serde_json::to_value(reasons).unwrap();
        prop_assert_eq!(value.as_object().unwrap().len(), 6);
    }

    /// A criterion holds iff one of its triggering flags is set.
    #[test]
    fn criteria_follow_their_flags(set in arb_flags_for(TypeClass::Class)) {
        let reasons = is_aggregate(&set).reasons.unwrap();
        for criterion in AggregateCriterion::ALL {
            let expected = criterion.attributes().iter().any(|a| set.get(*a));
            prop_assert_eq!(reasons.get(criterion), expected, "{}", criterion);
        }
    }

    /// Evaluating twice gives the same verdict.
    #[test]
    fn aggregate_is_idempotent(set in arb_attribute_set()) {
        prop_assert_eq!(is_aggregate(&set), is_aggregate(&set));
    }
}

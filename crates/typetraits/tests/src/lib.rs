//! Shared proptest strategies for the type-trait test suites.

use proptest::prelude::*;
use typetraits_types::{Attribute, AttributeSet, TypeClass};

/// Any type classification.
pub fn arb_type_class() -> impl Strategy<Value = TypeClass> {
    prop::sample::select(TypeClass::ALL.to_vec())
}

/// Any classification other than array and class.
pub fn arb_non_aggregate_class() -> impl Strategy<Value = TypeClass> {
    prop::sample::select(
        TypeClass::ALL
            .into_iter()
            .filter(|t| !matches!(t, TypeClass::Array | TypeClass::Class))
            .collect::<Vec<_>>(),
    )
}

/// An attribute set of the given classification with arbitrary flags.
pub fn arb_flags_for(type_class: TypeClass) -> impl Strategy<Value = AttributeSet> {
    prop::collection::vec(any::<bool>(), Attribute::ALL.len()).prop_map(move |bits| {
        let mut set = AttributeSet::new(type_class);
        for (attribute, on) in Attribute::ALL.into_iter().zip(bits) {
            set.set(attribute, on);
        }
        set
    })
}

/// An arbitrary attribute set, contradictory combinations included.
pub fn arb_attribute_set() -> impl Strategy<Value = AttributeSet> {
    arb_type_class().prop_flat_map(arb_flags_for)
}

//! Combined trait report for one attribute set.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typetraits_types::{AttributeSet, TypeClass};

use crate::aggregate::{is_aggregate, AggregateVerdict};
use crate::construction::{is_default_constructible, is_trivially_default_constructible};

/// All three predicate verdicts for a single snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitReport {
    pub type_class: TypeClass,
    pub aggregate: AggregateVerdict,
    pub default_constructible: bool,
    pub trivially_default_constructible: bool,
}

impl TraitReport {
    pub fn is_aggregate(&self) -> bool {
        self.aggregate.is_aggregate
    }
}

impl std::fmt::Display for TraitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Traits({}: aggregate={}, default_constructible={}, trivially_default_constructible={})",
            self.type_class,
            self.aggregate.is_aggregate,
            self.default_constructible,
            self.trivially_default_constructible,
        )
    }
}

/// Evaluate every predicate against `set`.
pub fn evaluate(set: &AttributeSet) -> TraitReport {
    let report = TraitReport {
        type_class: set.type_class,
        aggregate: is_aggregate(set),
        default_constructible: is_default_constructible(set),
        trivially_default_constructible: is_trivially_default_constructible(set),
    };
    debug!(
        type_class = %set.type_class,
        enabled = set.enabled().count(),
        aggregate = report.aggregate.is_aggregate,
        default_constructible = report.default_constructible,
        trivially_default_constructible = report.trivially_default_constructible,
        "evaluated attribute set"
    );
    report
}

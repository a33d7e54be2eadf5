//! Aggregate classification with reason tracking.
//!
//! See <https://en.cppreference.com/w/cpp/language/aggregate_initialization>.
//! Arrays are always aggregates; of the remaining classifications only
//! class types can be, and only when none of six fail-criteria holds.
//! All six criteria are recorded for every class input so a caller can
//! explain a negative verdict criterion by criterion.

use serde::{Deserialize, Serialize};
use typetraits_types::{Attribute, AttributeSet, CompoundAttribute, TypeClass};

// ── Aggregate Criterion ──────────────────────────────────────────────

/// One rule that prevents a class type from being an aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateCriterion {
    PrivateOrProtectedNsdm,
    UserProvidedConstr,
    InheritedConstr,
    ExplicitConstr,
    VirtualPrivateOrProtectedBase,
    VirtualMf,
}

impl AggregateCriterion {
    /// Every criterion in the order it is recorded.
    pub const ALL: [AggregateCriterion; 6] = [
        AggregateCriterion::PrivateOrProtectedNsdm,
        AggregateCriterion::UserProvidedConstr,
        AggregateCriterion::InheritedConstr,
        AggregateCriterion::ExplicitConstr,
        AggregateCriterion::VirtualPrivateOrProtectedBase,
        AggregateCriterion::VirtualMf,
    ];

    /// Reason key, matching the field name in [`AggregateReasons`].
    pub fn name(self) -> &'static str {
        match self {
            Self::PrivateOrProtectedNsdm => "has_private_or_protected_nsdm",
            Self::UserProvidedConstr => "has_user_provided_constr",
            Self::InheritedConstr => "has_inherited_constr",
            Self::ExplicitConstr => "has_explicit_constr",
            Self::VirtualPrivateOrProtectedBase => "has_virtual_private_or_protected_base",
            Self::VirtualMf => "has_virtual_mf",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::PrivateOrProtectedNsdm => "has a private or protected non-static data member",
            Self::UserProvidedConstr => "has a user-provided constructor",
            Self::InheritedConstr => "has an inherited constructor",
            Self::ExplicitConstr => "has an explicit constructor",
            Self::VirtualPrivateOrProtectedBase => {
                "has a virtual, private, or protected base class"
            }
            Self::VirtualMf => "has a virtual member function",
        }
    }

    /// The stored flags that can trigger this criterion.
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            Self::PrivateOrProtectedNsdm => {
                &[Attribute::HasPrivateNsdm, Attribute::HasProtectedNsdm]
            }
            Self::UserProvidedConstr => CompoundAttribute::HasUserProvidedConstr.components(),
            Self::InheritedConstr => CompoundAttribute::HasInheritedConstr.components(),
            Self::ExplicitConstr => CompoundAttribute::HasExplicitConstr.components(),
            Self::VirtualPrivateOrProtectedBase => &[
                Attribute::HasVirtualBaseClass,
                Attribute::HasPrivateBaseClass,
                Attribute::HasProtectedBaseClass,
            ],
            Self::VirtualMf => &[Attribute::HasVirtualMf],
        }
    }
}

impl std::fmt::Display for AggregateCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Aggregate Reasons ────────────────────────────────────────────────

/// The six fail-criteria for a class type, each recorded as true or false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregateReasons {
    pub has_private_or_protected_nsdm: bool,
    pub has_user_provided_constr: bool,
    pub has_inherited_constr: bool,
    pub has_explicit_constr: bool,
    pub has_virtual_private_or_protected_base: bool,
    pub has_virtual_mf: bool,
}

impl AggregateReasons {
    /// Record every criterion for `set`. Never short-circuits.
    pub fn collect(set: &AttributeSet) -> Self {
        let a = &set.attributes;
        Self {
            // no private or protected non-static data members
            has_private_or_protected_nsdm: a.has_private_nsdm || a.has_protected_nsdm,
            // no user-provided, inherited, or explicit constructors
            // (explicitly defaulted or deleted constructors are allowed)
            has_user_provided_constr: set.has_user_provided_constructor(),
            has_inherited_constr: set.has_inherited_constructor(),
            has_explicit_constr: set.has_explicit_constructor(),
            // no virtual, private, or protected (since C++17) base classes
            has_virtual_private_or_protected_base: a.has_virtual_base_class
                || a.has_private_base_class
                || a.has_protected_base_class,
            // no virtual member functions
            has_virtual_mf: a.has_virtual_mf,
        }
    }

    pub fn get(&self, criterion: AggregateCriterion) -> bool {
        match criterion {
            AggregateCriterion::PrivateOrProtectedNsdm => self.has_private_or_protected_nsdm,
            AggregateCriterion::UserProvidedConstr => self.has_user_provided_constr,
            AggregateCriterion::InheritedConstr => self.has_inherited_constr,
            AggregateCriterion::ExplicitConstr => self.has_explicit_constr,
            AggregateCriterion::VirtualPrivateOrProtectedBase => {
                self.has_virtual_private_or_protected_base
            }
            AggregateCriterion::VirtualMf => self.has_virtual_mf,
        }
    }

    /// Criteria that hold, in recording order.
    pub fn failing(&self) -> Vec<AggregateCriterion> {
        AggregateCriterion::ALL
            .into_iter()
            .filter(|c| self.get(*c))
            .collect()
    }

    /// True when no criterion holds.
    pub fn is_clear(&self) -> bool {
        AggregateCriterion::ALL.iter().all(|c| !self.get(*c))
    }
}

// ── Aggregate Verdict ────────────────────────────────────────────────

/// Result of the aggregate predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateVerdict {
    pub type_class: TypeClass,
    pub is_aggregate: bool,
    /// All six criteria for class types; `None` for every other
    /// classification, whose verdict does not depend on the flags.
    pub reasons: Option<AggregateReasons>,
}

impl AggregateVerdict {
    /// One line per cause of a negative verdict; empty when aggregate.
    pub fn explain(&self) -> Vec<String> {
        if self.is_aggregate {
            return Vec::new();
        }
        match &self.reasons {
            Some(reasons) => reasons
                .failing()
                .into_iter()
                .map(|c| c.description().to_string())
                .collect(),
            None => vec![format!(
                "{} types are neither array nor class types",
                self.type_class
            )],
        }
    }
}

/// Evaluate the aggregate predicate.
pub fn is_aggregate(set: &AttributeSet) -> AggregateVerdict {
    match set.type_class {
        TypeClass::Array => AggregateVerdict {
            type_class: TypeClass::Array,
            is_aggregate: true,
            reasons: None,
        },
        TypeClass::Class => {
            let reasons = AggregateReasons::collect(set);
            AggregateVerdict {
                type_class: TypeClass::Class,
                is_aggregate: reasons.is_clear(),
                reasons: Some(reasons),
            }
        }
        other => AggregateVerdict {
            type_class: other,
            is_aggregate: false,
            reasons: None,
        },
    }
}

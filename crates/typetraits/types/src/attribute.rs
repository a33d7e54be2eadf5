//! The closed attribute vocabulary.
//!
//! Abbreviations used throughout:
//! - `nsdm` — non-static data member
//! - `constr` — constructor
//! - `mf` — member function

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ── Attribute Group ──────────────────────────────────────────────────

/// The concern an attribute flag belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeGroup {
    Construction,
    Inheritance,
    DataMembers,
    Methods,
}

impl std::fmt::Display for AttributeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Construction => write!(f, "construction"),
            Self::Inheritance => write!(f, "inheritance"),
            Self::DataMembers => write!(f, "data-members"),
            Self::Methods => write!(f, "methods"),
        }
    }
}

// ── Attribute ────────────────────────────────────────────────────────

/// One boolean flag of an attribute set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    HasUserProvidedDefaultConstr,
    HasInheritedDefaultConstr,
    HasExplicitDefaultConstr,
    HasUserProvidedCopyConstr,
    HasInheritedCopyConstr,
    HasExplicitCopyConstr,
    HasUserProvidedMoveConstr,
    HasInheritedMoveConstr,
    HasExplicitMoveConstr,
    HasDeletedConstr,
    HasPublicBaseClass,
    HasPrivateBaseClass,
    HasProtectedBaseClass,
    HasVirtualBaseClass,
    HasPrivateNsdm,
    HasProtectedNsdm,
    HasNsdmWithInitializer,
    HasNonTrivialNsdm,
    HasInitializerNeedyNsdm,
    HasVirtualMf,
}

impl Attribute {
    /// Every attribute in declaration order.
    pub const ALL: [Attribute; 20] = [
        Attribute::HasUserProvidedDefaultConstr,
        Attribute::HasInheritedDefaultConstr,
        Attribute::HasExplicitDefaultConstr,
        Attribute::HasUserProvidedCopyConstr,
        Attribute::HasInheritedCopyConstr,
        Attribute::HasExplicitCopyConstr,
        Attribute::HasUserProvidedMoveConstr,
        Attribute::HasInheritedMoveConstr,
        Attribute::HasExplicitMoveConstr,
        Attribute::HasDeletedConstr,
        Attribute::HasPublicBaseClass,
        Attribute::HasPrivateBaseClass,
        Attribute::HasProtectedBaseClass,
        Attribute::HasVirtualBaseClass,
        Attribute::HasPrivateNsdm,
        Attribute::HasProtectedNsdm,
        Attribute::HasNsdmWithInitializer,
        Attribute::HasNonTrivialNsdm,
        Attribute::HasInitializerNeedyNsdm,
        Attribute::HasVirtualMf,
    ];

    /// Base-class flags in the order the inheritance list is emitted.
    pub const BASE_CLASSES: [Attribute; 4] = [
        Attribute::HasPublicBaseClass,
        Attribute::HasPrivateBaseClass,
        Attribute::HasProtectedBaseClass,
        Attribute::HasVirtualBaseClass,
    ];

    /// Wire name used in JSON and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::HasUserProvidedDefaultConstr => "has_user_provided_default_constr",
            Self::HasInheritedDefaultConstr => "has_inherited_default_constr",
            Self::HasExplicitDefaultConstr => "has_explicit_default_constr",
            Self::HasUserProvidedCopyConstr => "has_user_provided_copy_constr",
            Self::HasInheritedCopyConstr => "has_inherited_copy_constr",
            Self::HasExplicitCopyConstr => "has_explicit_copy_constr",
            Self::HasUserProvidedMoveConstr => "has_user_provided_move_constr",
            Self::HasInheritedMoveConstr => "has_inherited_move_constr",
            Self::HasExplicitMoveConstr => "has_explicit_move_constr",
            Self::HasDeletedConstr => "has_deleted_constr",
            Self::HasPublicBaseClass => "has_public_base_class",
            Self::HasPrivateBaseClass => "has_private_base_class",
            Self::HasProtectedBaseClass => "has_protected_base_class",
            Self::HasVirtualBaseClass => "has_virtual_base_class",
            Self::HasPrivateNsdm => "has_private_nsdm",
            Self::HasProtectedNsdm => "has_protected_nsdm",
            Self::HasNsdmWithInitializer => "has_nsdm_with_initializer",
            Self::HasNonTrivialNsdm => "has_non_trivial_nsdm",
            Self::HasInitializerNeedyNsdm => "has_initializer_needy_nsdm",
            Self::HasVirtualMf => "has_virtual_mf",
        }
    }

    /// Human-readable description shown next to the toggle.
    pub fn description(self) -> &'static str {
        match self {
            Self::HasUserProvidedDefaultConstr => {
                "user-provided default constructor (explicitly defaulted or deleted does not count)"
            }
            Self::HasInheritedDefaultConstr => {
                "default constructor inherited via `using Base::Base;`"
            }
            Self::HasExplicitDefaultConstr => {
                "default constructor marked `explicit`, including `= default` / `= delete`"
            }
            Self::HasUserProvidedCopyConstr => {
                "user-provided copy constructor (explicitly defaulted or deleted does not count)"
            }
            Self::HasInheritedCopyConstr => "copy constructor inherited via `using Base::Base;`",
            Self::HasExplicitCopyConstr => {
                "copy constructor marked `explicit`, including `= default` / `= delete`"
            }
            Self::HasUserProvidedMoveConstr => {
                "user-provided move constructor (explicitly defaulted or deleted does not count)"
            }
            Self::HasInheritedMoveConstr => "move constructor inherited via `using Base::Base;`",
            Self::HasExplicitMoveConstr => {
                "move constructor marked `explicit`, including `= default` / `= delete`"
            }
            Self::HasDeletedConstr => "a constructor explicitly declared `= delete`",
            Self::HasPublicBaseClass => "inherits with `: public Base`",
            Self::HasPrivateBaseClass => "inherits with `: private Base`",
            Self::HasProtectedBaseClass => "inherits with `: protected Base`",
            Self::HasVirtualBaseClass => "inherits with `: virtual Base`",
            Self::HasPrivateNsdm => "private non-static data member",
            Self::HasProtectedNsdm => "protected non-static data member",
            Self::HasNsdmWithInitializer => "non-static data member with a default initializer",
            Self::HasNonTrivialNsdm => {
                "non-static data member that is not trivially default constructible"
            }
            Self::HasInitializerNeedyNsdm => {
                "member that needs an initializer and has none, e.g. `const int` or `int&`"
            }
            Self::HasVirtualMf => "defines or inherits a `virtual` member function",
        }
    }

    /// The concern this flag belongs to.
    pub fn group(self) -> AttributeGroup {
        match self {
            Self::HasUserProvidedDefaultConstr
            | Self::HasInheritedDefaultConstr
            | Self::HasExplicitDefaultConstr
            | Self::HasUserProvidedCopyConstr
            | Self::HasInheritedCopyConstr
            | Self::HasExplicitCopyConstr
            | Self::HasUserProvidedMoveConstr
            | Self::HasInheritedMoveConstr
            | Self::HasExplicitMoveConstr
            | Self::HasDeletedConstr => AttributeGroup::Construction,
            Self::HasPublicBaseClass
            | Self::HasPrivateBaseClass
            | Self::HasProtectedBaseClass
            | Self::HasVirtualBaseClass => AttributeGroup::Inheritance,
            Self::HasPrivateNsdm
            | Self::HasProtectedNsdm
            | Self::HasNsdmWithInitializer
            | Self::HasNonTrivialNsdm
            | Self::HasInitializerNeedyNsdm => AttributeGroup::DataMembers,
            Self::HasVirtualMf => AttributeGroup::Methods,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Attribute {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ModelError::UnknownAttribute(s.to_string()))
    }
}

// ── Compound Attribute ───────────────────────────────────────────────

/// Attributes derived from the stored flags. Never stored themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundAttribute {
    IsAggregate,
    HasUserProvidedConstr,
    HasInheritedConstr,
    HasExplicitConstr,
}

impl CompoundAttribute {
    pub const ALL: [CompoundAttribute; 4] = [
        CompoundAttribute::IsAggregate,
        CompoundAttribute::HasUserProvidedConstr,
        CompoundAttribute::HasInheritedConstr,
        CompoundAttribute::HasExplicitConstr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::IsAggregate => "is_aggregate",
            Self::HasUserProvidedConstr => "has_user_provided_constr",
            Self::HasInheritedConstr => "has_inherited_constr",
            Self::HasExplicitConstr => "has_explicit_constr",
        }
    }

    /// The stored flags a constructor compound is the OR of.
    ///
    /// `IsAggregate` depends on the type classification as well, so it has
    /// no flag-only definition and returns an empty slice.
    pub fn components(self) -> &'static [Attribute] {
        match self {
            Self::IsAggregate => &[],
            Self::HasUserProvidedConstr => &[
                Attribute::HasUserProvidedDefaultConstr,
                Attribute::HasUserProvidedCopyConstr,
                Attribute::HasUserProvidedMoveConstr,
            ],
            Self::HasInheritedConstr => &[
                Attribute::HasInheritedDefaultConstr,
                Attribute::HasInheritedCopyConstr,
                Attribute::HasInheritedMoveConstr,
            ],
            Self::HasExplicitConstr => &[
                Attribute::HasExplicitDefaultConstr,
                Attribute::HasExplicitCopyConstr,
                Attribute::HasExplicitMoveConstr,
            ],
        }
    }
}

impl std::fmt::Display for CompoundAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

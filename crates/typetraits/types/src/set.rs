//! The attribute set: one type classification plus the named flags.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, CompoundAttribute};
use crate::type_class::TypeClass;

// ── Attributes ───────────────────────────────────────────────────────

/// The boolean flags of an attribute set, one named field per flag.
///
/// Omitted fields deserialize as `false`; unknown fields are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Attributes {
    // constructors
    pub has_user_provided_default_constr: bool,
    pub has_inherited_default_constr: bool,
    pub has_explicit_default_constr: bool,
    pub has_user_provided_copy_constr: bool,
    pub has_inherited_copy_constr: bool,
    pub has_explicit_copy_constr: bool,
    pub has_user_provided_move_constr: bool,
    pub has_inherited_move_constr: bool,
    pub has_explicit_move_constr: bool,
    pub has_deleted_constr: bool,
    // inheritance
    pub has_public_base_class: bool,
    pub has_private_base_class: bool,
    pub has_protected_base_class: bool,
    pub has_virtual_base_class: bool,
    // data members
    pub has_private_nsdm: bool,
    pub has_protected_nsdm: bool,
    pub has_nsdm_with_initializer: bool,
    pub has_non_trivial_nsdm: bool,
    pub has_initializer_needy_nsdm: bool,
    // methods
    pub has_virtual_mf: bool,
}

impl Attributes {
    fn slot(&mut self, attribute: Attribute) -> &mut bool {
        match attribute {
            Attribute::HasUserProvidedDefaultConstr => &mut self.has_user_provided_default_constr,
            Attribute::HasInheritedDefaultConstr => &mut self.has_inherited_default_constr,
            Attribute::HasExplicitDefaultConstr => &mut self.has_explicit_default_constr,
            Attribute::HasUserProvidedCopyConstr => &mut self.has_user_provided_copy_constr,
            Attribute::HasInheritedCopyConstr => &mut self.has_inherited_copy_constr,
            Attribute::HasExplicitCopyConstr => &mut self.has_explicit_copy_constr,
            Attribute::HasUserProvidedMoveConstr => &mut self.has_user_provided_move_constr,
            Attribute::HasInheritedMoveConstr => &mut self.has_inherited_move_constr,
            Attribute::HasExplicitMoveConstr => &mut self.has_explicit_move_constr,
            Attribute::HasDeletedConstr => &mut self.has_deleted_constr,
            Attribute::HasPublicBaseClass => &mut self.has_public_base_class,
            Attribute::HasPrivateBaseClass => &mut self.has_private_base_class,
            Attribute::HasProtectedBaseClass => &mut self.has_protected_base_class,
            Attribute::HasVirtualBaseClass => &mut self.has_virtual_base_class,
            Attribute::HasPrivateNsdm => &mut self.has_private_nsdm,
            Attribute::HasProtectedNsdm => &mut self.has_protected_nsdm,
            Attribute::HasNsdmWithInitializer => &mut self.has_nsdm_with_initializer,
            Attribute::HasNonTrivialNsdm => &mut self.has_non_trivial_nsdm,
            Attribute::HasInitializerNeedyNsdm => &mut self.has_initializer_needy_nsdm,
            Attribute::HasVirtualMf => &mut self.has_virtual_mf,
        }
    }

    /// Value of a single flag.
    pub fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::HasUserProvidedDefaultConstr => self.has_user_provided_default_constr,
            Attribute::HasInheritedDefaultConstr => self.has_inherited_default_constr,
            Attribute::HasExplicitDefaultConstr => self.has_explicit_default_constr,
            Attribute::HasUserProvidedCopyConstr => self.has_user_provided_copy_constr,
            Attribute::HasInheritedCopyConstr => self.has_inherited_copy_constr,
            Attribute::HasExplicitCopyConstr => self.has_explicit_copy_constr,
            Attribute::HasUserProvidedMoveConstr => self.has_user_provided_move_constr,
            Attribute::HasInheritedMoveConstr => self.has_inherited_move_constr,
            Attribute::HasExplicitMoveConstr => self.has_explicit_move_constr,
            Attribute::HasDeletedConstr => self.has_deleted_constr,
            Attribute::HasPublicBaseClass => self.has_public_base_class,
            Attribute::HasPrivateBaseClass => self.has_private_base_class,
            Attribute::HasProtectedBaseClass => self.has_protected_base_class,
            Attribute::HasVirtualBaseClass => self.has_virtual_base_class,
            Attribute::HasPrivateNsdm => self.has_private_nsdm,
            Attribute::HasProtectedNsdm => self.has_protected_nsdm,
            Attribute::HasNsdmWithInitializer => self.has_nsdm_with_initializer,
            Attribute::HasNonTrivialNsdm => self.has_non_trivial_nsdm,
            Attribute::HasInitializerNeedyNsdm => self.has_initializer_needy_nsdm,
            Attribute::HasVirtualMf => self.has_virtual_mf,
        }
    }

    /// Set a single flag.
    pub fn set(&mut self, attribute: Attribute, value: bool) {
        *self.slot(attribute) = value;
    }
}

// ── Attribute Set ────────────────────────────────────────────────────

/// A type classification plus its attribute flags.
///
/// The default set is a `Class` with every flag false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSet {
    pub type_class: TypeClass,
    #[serde(default)]
    pub attributes: Attributes,
}

impl AttributeSet {
    /// An empty set of the given classification.
    pub fn new(type_class: TypeClass) -> Self {
        Self {
            type_class,
            attributes: Attributes::default(),
        }
    }

    /// Builder: turn a flag on.
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.attributes.set(attribute, true);
        self
    }

    /// Builder: turn several flags on.
    pub fn with_all(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        for attribute in attributes {
            self.attributes.set(attribute, true);
        }
        self
    }

    pub fn get(&self, attribute: Attribute) -> bool {
        self.attributes.get(attribute)
    }

    pub fn set(&mut self, attribute: Attribute, value: bool) {
        self.attributes.set(attribute, value);
    }

    /// Flags that are on, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL.into_iter().filter(move |a| self.get(*a))
    }

    /// Number of base-class flags that are on.
    pub fn base_class_count(&self) -> usize {
        Attribute::BASE_CLASSES
            .iter()
            .filter(|a| self.get(**a))
            .count()
    }

    pub fn has_user_provided_constructor(&self) -> bool {
        self.any_of(CompoundAttribute::HasUserProvidedConstr)
    }

    pub fn has_inherited_constructor(&self) -> bool {
        self.any_of(CompoundAttribute::HasInheritedConstr)
    }

    pub fn has_explicit_constructor(&self) -> bool {
        self.any_of(CompoundAttribute::HasExplicitConstr)
    }

    /// Value of a constructor compound. `IsAggregate` is owned by the
    /// evaluator and yields `None` here.
    pub fn compound(&self, compound: CompoundAttribute) -> Option<bool> {
        match compound {
            CompoundAttribute::IsAggregate => None,
            other => Some(self.any_of(other)),
        }
    }

    fn any_of(&self, compound: CompoundAttribute) -> bool {
        compound.components().iter().any(|a| self.get(*a))
    }
}

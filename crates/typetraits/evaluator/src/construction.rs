//! Default-constructibility predicates.
//!
//! Modeled subset of
//! <https://en.cppreference.com/w/cpp/types/is_default_constructible> and
//! <https://en.cppreference.com/w/cpp/language/default_constructor>.
//!
//! Not modeled, and treated as always satisfied: default-constructibility of
//! members and bases, destructor accessibility, and triviality of each
//! direct base class.

use typetraits_types::{AttributeSet, TypeClass};

/// Whether a value of the type can be created without arguments.
pub fn is_default_constructible(set: &AttributeSet) -> bool {
    if !set.type_class.is_object() {
        return false;
    }

    match set.type_class {
        TypeClass::NullPointer
        | TypeClass::Arithmetic
        | TypeClass::Pointer
        | TypeClass::Array
        | TypeClass::Enumeration => true,
        TypeClass::Class => {
            // no reference or const member without initializer,
            // no explicitly deleted constructor
            !set.attributes.has_initializer_needy_nsdm && !set.attributes.has_deleted_constr
        }
        TypeClass::Void | TypeClass::Reference | TypeClass::Function => false,
    }
}

/// Whether default construction runs no user code and no non-trivial
/// sub-object initialization.
pub fn is_trivially_default_constructible(set: &AttributeSet) -> bool {
    let a = &set.attributes;
    is_default_constructible(set)
        && !a.has_user_provided_default_constr
        && !a.has_virtual_mf
        && !a.has_virtual_base_class
        && !a.has_nsdm_with_initializer
        && !a.has_non_trivial_nsdm
}

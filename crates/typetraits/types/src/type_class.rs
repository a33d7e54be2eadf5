//! Primary type classification.
//!
//! Mirrors the C++ primary type categories relevant to the modeled traits.
//! See <https://en.cppreference.com/w/cpp/language/type>.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The classification tag carried by every attribute set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeClass {
    /// `void`
    Void,
    /// `std::nullptr_t`
    NullPointer,
    /// Integral and floating-point types, not pointers.
    Arithmetic,
    /// Lvalue and rvalue references, to objects or functions.
    Reference,
    /// Pointers to objects and pointers to members.
    Pointer,
    /// Built-in arrays such as `int[5]`, not `std::array`.
    Array,
    /// Function types such as `int() const&`, not `std::function` or lambdas.
    Function,
    /// Scoped and unscoped enumerations.
    Enumeration,
    /// Class, struct or union.
    #[default]
    Class,
}

impl TypeClass {
    /// Every classification in declaration order.
    pub const ALL: [TypeClass; 9] = [
        TypeClass::Void,
        TypeClass::NullPointer,
        TypeClass::Arithmetic,
        TypeClass::Reference,
        TypeClass::Pointer,
        TypeClass::Array,
        TypeClass::Function,
        TypeClass::Enumeration,
        TypeClass::Class,
    ];

    /// Wire name used in JSON and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::NullPointer => "null_pointer",
            Self::Arithmetic => "arithmetic",
            Self::Reference => "reference",
            Self::Pointer => "pointer",
            Self::Array => "array",
            Self::Function => "function",
            Self::Enumeration => "enumeration",
            Self::Class => "class",
        }
    }

    /// Void, `std::nullptr_t` and arithmetic types.
    pub fn is_fundamental(self) -> bool {
        matches!(self, Self::Void | Self::NullPointer | Self::Arithmetic)
    }

    /// Everything that is not fundamental.
    pub fn is_compound(self) -> bool {
        !self.is_fundamental()
    }

    /// Everything except functions, references and `void`.
    pub fn is_object(self) -> bool {
        !matches!(self, Self::Function | Self::Reference | Self::Void)
    }

    /// Arithmetic, pointer, enumeration and `std::nullptr_t`.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Arithmetic | Self::Pointer | Self::Enumeration | Self::NullPointer
        )
    }
}

impl std::fmt::Display for TypeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TypeClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ModelError::UnknownTypeClass(s.to_string()))
    }
}

//! Fragment builders for the rendered declaration.
//!
//! Each builder reads the attribute set and returns the text for one
//! section of the declaration. Member fragments end every line with `\n` and
//! render as the empty string when no relevant flag is set.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typetraits_types::{Attribute, AttributeSet};

use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};

// ── Inheritance ──────────────────────────────────────────────────────

/// The base-clause text and the number of bases it names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InheritanceFragment {
    /// `: public Base1, virtual Base2`, or empty without bases.
    pub text: String,
    pub base_count: usize,
}

/// Base-class flags with their access or `virtual` keyword, in emission order.
const BASE_KEYWORDS: [(Attribute, &str); 4] = [
    (Attribute::HasPublicBaseClass, "public"),
    (Attribute::HasPrivateBaseClass, "private"),
    (Attribute::HasProtectedBaseClass, "protected"),
    (Attribute::HasVirtualBaseClass, "virtual"),
];

/// Build the base clause. Bases are numbered by emission order.
pub fn inheritance_fragment(set: &AttributeSet, config: &RenderConfig) -> InheritanceFragment {
    let mut fragment = InheritanceFragment::default();

    for (attribute, keyword) in BASE_KEYWORDS {
        if !set.get(attribute) {
            continue;
        }
        fragment
            .text
            .push_str(if fragment.base_count == 0 { ": " } else { ", " });
        fragment.base_count += 1;
        fragment.text.push_str(keyword);
        fragment.text.push(' ');
        fragment.text.push_str(&config.base_name(fragment.base_count));
    }

    debug!(base_count = fragment.base_count, "built inheritance fragment");
    fragment
}

// ── Default Constructor ──────────────────────────────────────────────

/// The mutually exclusive ways the example declares its default constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorStyle {
    /// `T() {}`
    UserProvided,
    /// `using Base1::Base1;`
    Inherited,
    /// `explicit T() = default;`
    Explicit,
}

impl ConstructorStyle {
    pub const ALL: [ConstructorStyle; 3] = [
        ConstructorStyle::UserProvided,
        ConstructorStyle::Inherited,
        ConstructorStyle::Explicit,
    ];

    /// The flag that selects this style.
    pub fn attribute(self) -> Attribute {
        match self {
            Self::UserProvided => Attribute::HasUserProvidedDefaultConstr,
            Self::Inherited => Attribute::HasInheritedDefaultConstr,
            Self::Explicit => Attribute::HasExplicitDefaultConstr,
        }
    }
}

impl std::fmt::Display for ConstructorStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserProvided => write!(f, "user-provided"),
            Self::Inherited => write!(f, "inherited"),
            Self::Explicit => write!(f, "explicit"),
        }
    }
}

/// Pick the single default-constructor style, if any.
///
/// Fails when several styles are set, or when the constructor is inherited
/// and `base_count` is zero. Ambiguity is reported first.
pub fn constructor_style(
    set: &AttributeSet,
    base_count: usize,
) -> RenderResult<Option<ConstructorStyle>> {
    let styles: Vec<ConstructorStyle> = ConstructorStyle::ALL
        .into_iter()
        .filter(|s| set.get(s.attribute()))
        .collect();

    if styles.len() > 1 {
        return Err(RenderError::AmbiguousConstructorStyle { styles });
    }

    let style = styles.first().copied();
    if style == Some(ConstructorStyle::Inherited) && base_count == 0 {
        return Err(RenderError::DanglingInheritedConstructor);
    }
    Ok(style)
}

/// Build the default-constructor line.
pub fn default_constructor_fragment(
    set: &AttributeSet,
    inheritance: &InheritanceFragment,
    config: &RenderConfig,
) -> RenderResult<String> {
    let style = constructor_style(set, inheritance.base_count)?;
    debug!(style = ?style, "built default-constructor fragment");

    let indent = &config.indent;
    let name = &config.struct_name;
    Ok(match style {
        None => String::new(),
        Some(ConstructorStyle::UserProvided) => format!("{indent}{name}() {{}}\n"),
        Some(ConstructorStyle::Inherited) => {
            let base = config.base_name(1);
            format!("{indent}using {base}::{base};\n")
        }
        Some(ConstructorStyle::Explicit) => format!("{indent}explicit {name}() = default;\n"),
    })
}

// ── Members ──────────────────────────────────────────────────────────

/// Build the virtual member function declaration.
pub fn virtual_member_fragment(set: &AttributeSet, config: &RenderConfig) -> String {
    if set.attributes.has_virtual_mf {
        format!("{}virtual f();\n", config.indent)
    } else {
        String::new()
    }
}

/// Build the data member lines.
///
/// The initializer-needy member is a reference left without initializer.
pub fn data_member_fragment(set: &AttributeSet, config: &RenderConfig) -> String {
    let mut fragment = String::new();
    if set.attributes.has_nsdm_with_initializer {
        fragment.push_str(&format!("{}int a = 0;\n", config.indent));
    }
    if set.attributes.has_initializer_needy_nsdm {
        fragment.push_str(&format!("{}int& b;\n", config.indent));
    }
    fragment
}

//! Renderer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Names and layout used in the synthesized declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Name of the declared struct.
    pub struct_name: String,
    /// Prefix of synthesized base names; bases are numbered from 1.
    pub base_prefix: String,
    /// Indentation of member lines.
    pub indent: String,
}

impl RenderConfig {
    /// Name of the `n`-th emitted base class, starting at 1.
    pub fn base_name(&self, n: usize) -> String {
        format!("{}{}", self.base_prefix, n)
    }

    /// Both names must be identifiers (`[A-Za-z_][A-Za-z0-9_]*`) and the
    /// indent must be whitespace only.
    pub fn validate(&self) -> RenderResult<()> {
        for (field, value) in [
            ("struct_name", &self.struct_name),
            ("base_prefix", &self.base_prefix),
        ] {
            if !is_identifier(value) {
                return Err(RenderError::InvalidConfig {
                    field,
                    value: value.clone(),
                    reason: "not an identifier",
                });
            }
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(RenderError::InvalidConfig {
                field: "indent",
                value: self.indent.clone(),
                reason: "only spaces and tabs are allowed",
            });
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            struct_name: "T".into(),
            base_prefix: "Base".into(),
            indent: "    ".into(),
        }
    }
}

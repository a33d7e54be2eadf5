//! Declaration assembly.
//!
//! The declaration has a fixed layout: header, base clause, then the
//! default-constructor, virtual-member and data-member sections. Sections
//! without a matching flag are empty.

use tracing::{debug, warn};
use typetraits_types::AttributeSet;

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::fragment::{
    constructor_style, data_member_fragment, default_constructor_fragment, inheritance_fragment,
    virtual_member_fragment,
};

/// Renders example declarations for attribute sets. Holds no per-call state.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration. Rejects names that are not
    /// identifiers and non-whitespace indents.
    pub fn with_config(mut self, config: RenderConfig) -> RenderResult<Self> {
        config
            .validate()
            .inspect_err(|e| warn!(error = %e, "rejected render config"))?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Check the cross-flag invariants without producing text.
    pub fn validate(&self, set: &AttributeSet) -> RenderResult<()> {
        constructor_style(set, set.base_class_count()).map(|_| ())
    }

    /// Render the declaration for `set`.
    pub fn render(&self, set: &AttributeSet) -> RenderResult<String> {
        let inheritance = inheritance_fragment(set, &self.config);
        let constructor = default_constructor_fragment(set, &inheritance, &self.config)
            .inspect_err(|e| warn!(error = %e, "rejected attribute set"))?;

        let inher = if inheritance.text.is_empty() {
            String::new()
        } else {
            format!(" {}", inheritance.text)
        };

        let result = format!(
            "struct {name}{inher}\n{{\n{constructor}{virtual_mf}{nsdm}}};",
            name = self.config.struct_name,
            virtual_mf = virtual_member_fragment(set, &self.config),
            nsdm = data_member_fragment(set, &self.config),
        );

        debug!(
            type_class = %set.type_class,
            bytes = result.len(),
            "rendered declaration"
        );
        Ok(result)
    }
}

/// Render with the default configuration.
pub fn render(set: &AttributeSet) -> RenderResult<String> {
    Renderer::new().render(set)
}

/// Validate with the default configuration.
pub fn validate(set: &AttributeSet) -> RenderResult<()> {
    Renderer::new().validate(set)
}

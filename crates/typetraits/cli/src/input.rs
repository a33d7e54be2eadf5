//! Attribute-set input from flags and JSON files

use crate::error::CliResult;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;
use typetraits_types::{Attribute, AttributeSet, TypeClass};

/// Arguments describing one attribute set
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Type classification (void, null_pointer, arithmetic, reference,
    /// pointer, array, function, enumeration, class) [default: class]
    #[arg(short = 't', long = "type")]
    pub type_class: Option<TypeClass>,

    /// Attribute flag to turn on; repeatable
    #[arg(short, long = "attr")]
    pub attrs: Vec<Attribute>,

    /// JSON attribute set to start from
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Build the attribute set: file contents first, then `--type` and
    /// `--attr` on top.
    pub fn load(&self) -> CliResult<AttributeSet> {
        let base = match &self.file {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                serde_json::from_str(&contents)?
            }
            None => AttributeSet::default(),
        };
        let set = self.apply(base);
        debug!(type_class = %set.type_class, enabled = set.enabled().count(), "loaded attribute set");
        Ok(set)
    }

    fn apply(&self, mut set: AttributeSet) -> AttributeSet {
        if let Some(type_class) = self.type_class {
            set.type_class = type_class;
        }
        set.with_all(self.attrs.iter().copied())
    }
}

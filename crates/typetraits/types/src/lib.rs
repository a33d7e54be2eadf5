//! # typetraits-types
//!
//! The attribute model for the type-trait visualizer: a closed set of C++
//! type classifications, a closed vocabulary of boolean attribute flags, and
//! the constructor compounds derived from them.
//!
//! An [`AttributeSet`] is a plain `Copy` value. Consumers (the evaluator and
//! the renderer) only ever read it, so one snapshot is shared by both.
//!
//! ## Key Design Decisions
//!
//! - **Named fields**: flags are struct fields, not an index-addressed array
//! - **Computed compounds**: "has any X constructor" is derived, never stored
//! - **No cross-flag validation**: contradictory sets are representable

#![deny(unsafe_code)]

pub mod attribute;
pub mod error;
pub mod set;
pub mod type_class;

// ── Re-exports ───────────────────────────────────────────────────────

pub use attribute::{Attribute, AttributeGroup, CompoundAttribute};
pub use error::{ModelError, ModelResult};
pub use set::{AttributeSet, Attributes};
pub use type_class::TypeClass;

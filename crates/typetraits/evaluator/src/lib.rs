//! # typetraits-evaluator
//!
//! Pure predicates over an [`AttributeSet`](typetraits_types::AttributeSet):
//!
//! - [`is_aggregate`] — verdict plus the six recorded fail-criteria
//! - [`is_default_constructible`]
//! - [`is_trivially_default_constructible`] — implies default-constructible
//!
//! Evaluation is total: every set, however contradictory, yields a verdict.
//! [`evaluate`] bundles all three into a serializable [`TraitReport`].

#![deny(unsafe_code)]

pub mod aggregate;
pub mod construction;
pub mod report;

// ── Re-exports ───────────────────────────────────────────────────────

pub use aggregate::{is_aggregate, AggregateCriterion, AggregateReasons, AggregateVerdict};
pub use construction::{is_default_constructible, is_trivially_default_constructible};
pub use report::{evaluate, TraitReport};

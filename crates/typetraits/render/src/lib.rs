//! # typetraits-render
//!
//! Synthesizes a minimal C++ struct declaration that exhibits exactly the
//! flags of an [`AttributeSet`](typetraits_types::AttributeSet).
//!
//! ## Pipeline
//!
//! ```text
//! AttributeSet ──→ inheritance_fragment ──→ base_count
//!                         │                     │
//!                         │                     ▼
//!                         │       default_constructor_fragment (validates)
//!                         │                     │
//!                         ▼                     ▼
//!  declaration ←── virtual_member_fragment, data_member_fragment
//!         │
//!         ▼
//!   RenderResult<String>
//! ```
//!
//! Rendering is partial: an ambiguous default-constructor style and an
//! inherited constructor without a base class are reported as
//! [`RenderError`] values, as is a [`RenderConfig`] whose names are not
//! identifiers.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod fragment;
pub mod renderer;

// ── Re-exports ───────────────────────────────────────────────────────

pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use fragment::{
    constructor_style, data_member_fragment, default_constructor_fragment, inheritance_fragment,
    virtual_member_fragment, ConstructorStyle, InheritanceFragment,
};
pub use renderer::{render, validate, Renderer};

//! Jurisdiction-aware code assembly — turns a parsed contract definition
//! into contract source text plus deployment and test scripts.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ ContractDefini- │───▶│   CodeGenerator    │───▶│ ArtifactWriter│
//! │ tion (dsl)      │     │  rules + fragments │     │ *.sol, *.js  │
//! └────────────────┘     │  + template table  │     └──────────────┘
//!                        └───────────────────┘
//! ```
//!
//! The engine merges three sources into one rendering context: the
//! definition's own fields, the jurisdiction's rule-store metadata, and the
//! jurisdiction's six-slot fragment bundle. A flat template table keyed
//! `{jurisdiction}_{contract_type}` picks the skeleton; the renderer
//! substitutes `{{placeholder}}` markers. Rendering is pure — the same
//! definition always produces byte-identical text.
//!
//! Generation never validates: callers that want the structural pre-check
//! run `lexforge_dsl::validate` first. Skipping it renders an incomplete
//! contract without warning.

mod artifacts;
mod context;
mod engine;
mod fragments;
mod render;
mod templates;

pub use artifacts::ArtifactWriter;
pub use engine::{CodeGenerator, GeneratedContract};
pub use fragments::{FragmentBundle, FragmentRegistry, TestCase};
pub use render::{PlaceholderRenderer, RenderContext, TemplateRenderer};
pub use templates::{TemplateTable, template_key};

use lexforge_rules::RuleError;

/// Errors from the code assembly engine.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// No template matches the key and the table has no fallback. Should be
    /// unreachable for definitions that passed parsing, but handled anyway.
    #[error("no template registered for '{0}' and no fallback available")]
    TemplateNotFound(String),

    /// The fragment resource defines no bundle for a jurisdiction.
    #[error("no fragment bundle for jurisdiction '{0}'")]
    MissingFragments(String),

    /// The embedded fragment resource does not parse.
    #[error("malformed fragment resource: {0}")]
    Resource(String),

    /// Rule store lookup failed.
    #[error(transparent)]
    Rules(#[from] RuleError),

    /// Writing an artifact failed.
    #[error("artifact write error: {0}")]
    Io(#[from] std::io::Error),
}

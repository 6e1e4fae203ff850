//! # Lexforge Core
//!
//! Domain types for the lexforge contract generator. This crate defines the
//! jurisdiction-agnostic definition model that the parser produces, the
//! validator inspects, and the code assembly engine consumes. It carries no
//! I/O — loading documents and rendering artifacts live in their own crates,
//! and all of them depend inward on this one.

pub mod model;

// Re-export key types at crate root for ergonomics
pub use model::{Condition, ContractDefinition, ContractType, Jurisdiction, Party};

//! Contract definition DSL — parsing, validation, and canonical
//! serialization of definition documents.
//!
//! A definition document is TOML with a single top-level `[contract]` table:
//!
//! ```toml
//! [contract]
//! type = "escrow"
//! jurisdiction = "india"
//!
//! [[contract.parties]]
//! name = "Buyer"
//! role = "payer"
//!
//! [[contract.parties]]
//! name = "Seller"
//! role = "payee"
//!
//! [[contract.conditions]]
//! trigger = "delivery_confirmed"
//! action = "release_funds"
//! time_limit = 7
//! ```
//!
//! Parsing rejects malformed or unrecognized input immediately — the
//! generator cannot reason about a definition it does not understand.
//! Structural completeness (party counts, required roles) is a separate,
//! non-throwing concern: [`validate`] reports every violated rule at once so
//! an author can fix them in one pass.

mod parser;
mod validator;

pub use parser::{parse_file, parse_str, parse_value, to_toml_string, to_value};
pub use validator::validate;

/// Errors from parsing a definition document. All fatal: a document that
/// trips any of these cannot be turned into a [`lexforge_core::ContractDefinition`].
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The document is missing the required top-level structure.
    #[error("Contract definition must contain 'contract' key")]
    Schema,

    /// The document's shape does not match the definition schema.
    #[error("invalid contract definition: {0}")]
    InvalidShape(String),

    /// `type` is not one of the supported contract types.
    #[error("Unsupported contract type: {0}")]
    UnsupportedType(String),

    /// `jurisdiction` is not one of the supported jurisdictions.
    #[error("Unsupported jurisdiction: {0}")]
    UnsupportedJurisdiction(String),

    /// A party or condition entry is missing a required field.
    #[error("missing required field '{field}' in {section}[{index}]")]
    MissingField {
        section: &'static str,
        field: &'static str,
        index: usize,
    },

    /// The document is not valid TOML at all.
    #[error("definition parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A definition cannot be represented as a TOML document
    /// (e.g. a null metadata value).
    #[error("cannot serialize definition: {0}")]
    Serialize(String),

    /// Reading a definition file failed.
    #[error("definition file error: {0}")]
    Io(#[from] std::io::Error),
}

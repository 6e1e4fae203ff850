//! Jurisdiction rule store — read-only legal metadata per jurisdiction.
//!
//! Rules live in an embedded TOML resource (`resources/jurisdictions.toml`)
//! so the binary ships self-contained. [`RuleStore::builtin`] parses the
//! resource once; every lookup after that is a pure read of the immutable
//! table. Adding a jurisdiction is a resource change, not a code change.

use lexforge_core::{ContractType, Jurisdiction};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// The embedded jurisdiction rule resource.
const BUILTIN_RULES: &str = include_str!("../resources/jurisdictions.toml");

/// Errors from the rule store.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Jurisdiction {0} not found in legal rules")]
    UnknownJurisdiction(String),

    #[error("malformed jurisdiction rule resource: {0}")]
    Resource(String),
}

/// Per-contract-type rules within a jurisdiction.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ContractTypeRules {
    /// Requirement identifiers the generated contract must expose.
    #[serde(default)]
    pub legal_requirements: Vec<String>,

    /// Clause identifiers rendered into the contract header.
    #[serde(default)]
    pub mandatory_clauses: Vec<String>,

    /// Named deadlines in days.
    #[serde(default)]
    pub time_limits: BTreeMap<String, u32>,
}

/// Everything the rule resource knows about one jurisdiction.
#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionRules {
    /// Lowercase jurisdiction id, e.g. "india".
    pub id: String,

    /// Display name, e.g. "India".
    pub name: String,

    /// Regulators disputes escalate to, in resource order.
    pub regulatory_bodies: Vec<String>,

    /// Contract-type id → rules for that type.
    pub contract_types: BTreeMap<String, ContractTypeRules>,
}

impl JurisdictionRules {
    /// Rules for one contract type, if the resource defines an entry.
    pub fn for_contract_type(&self, contract_type: ContractType) -> Option<&ContractTypeRules> {
        self.contract_types.get(contract_type.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct RuleDocument {
    jurisdictions: BTreeMap<String, RuleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct RuleEntry {
    name: String,
    #[serde(default)]
    regulatory_bodies: Vec<String>,
    #[serde(default)]
    contract_types: BTreeMap<String, ContractTypeRules>,
}

/// The parsed, immutable rule table.
#[derive(Debug)]
pub struct RuleStore {
    jurisdictions: BTreeMap<String, RuleEntry>,
}

impl RuleStore {
    /// Parse the embedded rule resource.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_toml(BUILTIN_RULES)
    }

    /// Parse a rule document from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, RuleError> {
        let doc: RuleDocument =
            toml::from_str(source).map_err(|e| RuleError::Resource(e.to_string()))?;
        Ok(Self {
            jurisdictions: doc.jurisdictions,
        })
    }

    /// Look up rules by raw jurisdiction id.
    pub fn load(&self, jurisdiction_id: &str) -> Result<JurisdictionRules, RuleError> {
        let entry = self
            .jurisdictions
            .get(jurisdiction_id)
            .ok_or_else(|| RuleError::UnknownJurisdiction(jurisdiction_id.to_string()))?;
        debug!(jurisdiction = jurisdiction_id, "Loaded legal rules");
        Ok(JurisdictionRules {
            id: jurisdiction_id.to_string(),
            name: entry.name.clone(),
            regulatory_bodies: entry.regulatory_bodies.clone(),
            contract_types: entry.contract_types.clone(),
        })
    }

    /// Look up rules for a supported jurisdiction.
    pub fn rules_for(&self, jurisdiction: Jurisdiction) -> Result<JurisdictionRules, RuleError> {
        self.load(jurisdiction.as_str())
    }

    /// All jurisdiction ids the resource defines, in order.
    pub fn jurisdiction_ids(&self) -> Vec<&str> {
        self.jurisdictions.keys().map(String::as_str).collect()
    }
}

/// One-shot lookup against the embedded resource.
pub fn load_legal_rules(jurisdiction_id: &str) -> Result<JurisdictionRules, RuleError> {
    RuleStore::builtin()?.load(jurisdiction_id)
}

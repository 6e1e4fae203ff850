//! Definition model — the types that describe a contractual arrangement.
//!
//! A [`ContractDefinition`] is the in-memory form of a definition document:
//! the kind of arrangement, the legal regime it targets, the parties bound by
//! it, and the trigger→action conditions it enforces. The model is plain
//! data; structural rules (party counts, required roles) are checked by the
//! validator in `lexforge-dsl`, never by construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The kinds of contractual arrangement the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Escrow,
    Insurance,
    Settlement,
}

impl ContractType {
    /// All supported contract types, in canonical order.
    pub const ALL: [ContractType; 3] = [
        ContractType::Escrow,
        ContractType::Insurance,
        ContractType::Settlement,
    ];

    /// The lowercase identifier used in documents, template keys, and
    /// artifact filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Escrow => "escrow",
            ContractType::Insurance => "insurance",
            ContractType::Settlement => "settlement",
        }
    }

    /// Parse a lowercase-normalized identifier. Returns `None` for anything
    /// outside the supported set — callers turn that into their own error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "escrow" => Some(ContractType::Escrow),
            "insurance" => Some(ContractType::Insurance),
            "settlement" => Some(ContractType::Settlement),
            _ => None,
        }
    }

    /// The two roles every definition of this type must include.
    pub fn required_roles(&self) -> (&'static str, &'static str) {
        match self {
            ContractType::Escrow => ("payer", "payee"),
            ContractType::Insurance => ("insurer", "insured"),
            ContractType::Settlement => ("plaintiff", "defendant"),
        }
    }

    /// Capitalized form for user-facing text, e.g. "Escrow".
    pub fn display_name(&self) -> &'static str {
        match self {
            ContractType::Escrow => "Escrow",
            ContractType::Insurance => "Insurance",
            ContractType::Settlement => "Settlement",
        }
    }

    /// The contract name used in generated source and scripts,
    /// e.g. `EscrowContract`.
    pub fn contract_name(&self) -> String {
        format!("{}Contract", self.display_name())
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The legal regimes the generator can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    India,
    Eu,
    Us,
}

impl Jurisdiction {
    /// All supported jurisdictions, in the order multi-jurisdiction
    /// generation emits them.
    pub const ALL: [Jurisdiction; 3] = [Jurisdiction::India, Jurisdiction::Eu, Jurisdiction::Us];

    /// The lowercase identifier used in documents, the rule resource, and
    /// artifact filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::India => "india",
            Jurisdiction::Eu => "eu",
            Jurisdiction::Us => "us",
        }
    }

    /// Parse a lowercase-normalized identifier. Returns `None` for anything
    /// outside the supported set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "india" => Some(Jurisdiction::India),
            "eu" => Some(Jurisdiction::Eu),
            "us" => Some(Jurisdiction::Us),
            _ => None,
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant in a contract.
///
/// Parties have no identity beyond their position in the owning definition;
/// the `role` string is an enum in spirit, scoped per contract type
/// (escrow: payer/payee, insurance: insurer/insured, settlement:
/// plaintiff/defendant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Display name, e.g. "Buyer".
    pub name: String,

    /// Role within the contract type, e.g. "payer".
    pub role: String,

    /// On-chain address, if already known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Whether this party must pass jurisdiction-specific verification
    /// before the contract acts on its behalf.
    #[serde(default = "default_true")]
    pub verification_required: bool,
}

fn default_true() -> bool {
    true
}

impl Party {
    /// Create a party with no address and verification required.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            address: None,
            verification_required: true,
        }
    }
}

/// A trigger→action rule a contract enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Event that fires the condition, e.g. "delivery_confirmed".
    pub trigger: String,

    /// Action taken when the trigger fires, e.g. "release_funds".
    pub action: String,

    /// Deadline in days, if the action is time-bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,

    /// Free-form, use-case-specific parameters. Serialized last so the
    /// document form keeps scalar keys ahead of the parameter table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, serde_json::Value>>,
}

impl Condition {
    /// Create a condition with no parameters and no time limit.
    pub fn new(trigger: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            action: action.into(),
            parameters: None,
            time_limit: None,
        }
    }
}

/// A complete contract definition — the unit the parser produces and the
/// code assembly engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDefinition {
    /// What kind of arrangement this is.
    pub contract_type: ContractType,

    /// Which legal regime to generate for.
    pub jurisdiction: Jurisdiction,

    /// Participants, in document order.
    pub parties: Vec<Party>,

    /// Trigger→action rules, in document order.
    pub conditions: Vec<Condition>,

    /// Requirement identifiers the author declares the contract satisfies.
    /// Free-form: not cross-checked against the rule store's catalog.
    #[serde(default)]
    pub legal_requirements: Vec<String>,

    /// Free-form descriptive metadata (description, version, author, ...).
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl ContractDefinition {
    /// The role of every party, in order.
    pub fn roles(&self) -> Vec<&str> {
        self.parties.iter().map(|p| p.role.as_str()).collect()
    }

    /// An owned copy of this definition targeting a different jurisdiction.
    ///
    /// Multi-jurisdiction generation renders from these snapshots so the
    /// caller's definition is never mutated mid-iteration.
    pub fn with_jurisdiction(&self, jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            ..self.clone()
        }
    }

    /// The canonical starter definition for a contract type: the two
    /// required roles with conventional names, plus one conventional
    /// condition. Always passes structural validation.
    pub fn basic(contract_type: ContractType, jurisdiction: Jurisdiction) -> Self {
        let (parties, condition) = match contract_type {
            ContractType::Escrow => (
                vec![Party::new("Buyer", "payer"), Party::new("Seller", "payee")],
                Condition::new("delivery_confirmed", "release_funds"),
            ),
            ContractType::Insurance => (
                vec![
                    Party::new("Insurance Company", "insurer"),
                    Party::new("Policy Holder", "insured"),
                ],
                Condition::new("claim_submitted", "process_claim"),
            ),
            ContractType::Settlement => (
                vec![
                    Party::new("Plaintiff", "plaintiff"),
                    Party::new("Defendant", "defendant"),
                ],
                Condition::new("agreement_reached", "execute_settlement"),
            ),
        };
        Self {
            contract_type,
            jurisdiction,
            parties,
            conditions: vec![condition],
            legal_requirements: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }
}

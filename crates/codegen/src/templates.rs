//! The template table — embedded skeletons selected by
//! `{jurisdiction}_{contract_type}`.
//!
//! Selection is a flat lookup: nine contract entries plus a generic
//! fallback, and two secondary templates for deployment and test scripts.
//! No inheritance, no dynamic dispatch.

use crate::CodegenError;
use lexforge_core::ContractDefinition;

const INDIA_ESCROW: &str = include_str!("../templates/india_escrow.sol");
const INDIA_INSURANCE: &str = include_str!("../templates/india_insurance.sol");
const INDIA_SETTLEMENT: &str = include_str!("../templates/india_settlement.sol");
const EU_ESCROW: &str = include_str!("../templates/eu_escrow.sol");
const EU_INSURANCE: &str = include_str!("../templates/eu_insurance.sol");
const EU_SETTLEMENT: &str = include_str!("../templates/eu_settlement.sol");
const US_ESCROW: &str = include_str!("../templates/us_escrow.sol");
const US_INSURANCE: &str = include_str!("../templates/us_insurance.sol");
const US_SETTLEMENT: &str = include_str!("../templates/us_settlement.sol");
const BASE_CONTRACT: &str = include_str!("../templates/base_contract.sol");
const DEPLOYMENT_SCRIPT: &str = include_str!("../templates/deployment_script.js");
const TEST_SCRIPT: &str = include_str!("../templates/test_script.js");

const CONTRACT_TEMPLATES: [(&str, &str); 9] = [
    ("india_escrow", INDIA_ESCROW),
    ("india_insurance", INDIA_INSURANCE),
    ("india_settlement", INDIA_SETTLEMENT),
    ("eu_escrow", EU_ESCROW),
    ("eu_insurance", EU_INSURANCE),
    ("eu_settlement", EU_SETTLEMENT),
    ("us_escrow", US_ESCROW),
    ("us_insurance", US_INSURANCE),
    ("us_settlement", US_SETTLEMENT),
];

/// The template key a definition selects.
pub fn template_key(def: &ContractDefinition) -> String {
    format!("{}_{}", def.jurisdiction, def.contract_type)
}

/// Flat table of contract templates plus an optional fallback.
pub struct TemplateTable {
    entries: &'static [(&'static str, &'static str)],
    fallback: Option<&'static str>,
}

impl TemplateTable {
    /// The embedded table: all nine jurisdiction/type entries plus the
    /// generic fallback.
    pub fn builtin() -> Self {
        Self {
            entries: &CONTRACT_TEMPLATES,
            fallback: Some(BASE_CONTRACT),
        }
    }

    /// Select the template for a key, falling back to the generic contract
    /// when the key is unknown.
    pub fn select(&self, key: &str) -> Result<&'static str, CodegenError> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
            .or(self.fallback)
            .ok_or_else(|| CodegenError::TemplateNotFound(key.to_string()))
    }

    /// The deployment-script template.
    pub fn deployment_script(&self) -> &'static str {
        DEPLOYMENT_SCRIPT
    }

    /// The test-script template.
    pub fn test_script(&self) -> &'static str {
        TEST_SCRIPT
    }
}

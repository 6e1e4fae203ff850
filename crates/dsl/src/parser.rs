//! Definition document parsing and canonical serialization.
//!
//! The raw document shapes below mirror the input schema with every
//! required sub-field optional, so a missing `name` or `trigger` surfaces as
//! a [`DefinitionError::MissingField`] naming the field and its index
//! instead of an opaque deserializer message.

use crate::DefinitionError;
use lexforge_core::{Condition, ContractDefinition, ContractType, Jurisdiction, Party};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawDocument {
    contract: RawDefinition,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDefinition {
    #[serde(rename = "type")]
    contract_type: Option<String>,
    jurisdiction: Option<String>,
    parties: Vec<RawParty>,
    conditions: Vec<RawCondition>,
    legal_requirements: Vec<String>,
    metadata: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawParty {
    name: Option<String>,
    role: Option<String>,
    address: Option<String>,
    verification_required: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCondition {
    trigger: Option<String>,
    action: Option<String>,
    parameters: Option<BTreeMap<String, serde_json::Value>>,
    time_limit: Option<u32>,
}

/// Parse a definition from already-structured content.
///
/// The value must carry a top-level `contract` table; `type` and
/// `jurisdiction` are lowercase-normalized before the enum check, so
/// `"Escrow"` and `"INDIA"` are accepted.
pub fn parse_value(value: toml::Value) -> Result<ContractDefinition, DefinitionError> {
    let has_contract_key = value
        .as_table()
        .is_some_and(|table| table.contains_key("contract"));
    if !has_contract_key {
        return Err(DefinitionError::Schema);
    }

    let doc: RawDocument = value
        .try_into()
        .map_err(|e: toml::de::Error| DefinitionError::InvalidShape(e.to_string()))?;
    build_definition(doc.contract)
}

/// Parse a definition from TOML text.
pub fn parse_str(content: &str) -> Result<ContractDefinition, DefinitionError> {
    let value: toml::Value = toml::from_str(content)?;
    parse_value(value)
}

/// Read and parse a definition file.
pub fn parse_file(path: &Path) -> Result<ContractDefinition, DefinitionError> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

fn build_definition(raw: RawDefinition) -> Result<ContractDefinition, DefinitionError> {
    let type_id = raw.contract_type.unwrap_or_default().to_lowercase();
    let Some(contract_type) = ContractType::parse(&type_id) else {
        return Err(DefinitionError::UnsupportedType(type_id));
    };

    let jurisdiction_id = raw.jurisdiction.unwrap_or_default().to_lowercase();
    let Some(jurisdiction) = Jurisdiction::parse(&jurisdiction_id) else {
        return Err(DefinitionError::UnsupportedJurisdiction(jurisdiction_id));
    };

    let mut parties = Vec::with_capacity(raw.parties.len());
    for (index, party) in raw.parties.into_iter().enumerate() {
        let name = party.name.ok_or(DefinitionError::MissingField {
            section: "parties",
            field: "name",
            index,
        })?;
        let role = party.role.ok_or(DefinitionError::MissingField {
            section: "parties",
            field: "role",
            index,
        })?;
        parties.push(Party {
            name,
            role,
            address: party.address,
            verification_required: party.verification_required.unwrap_or(true),
        });
    }

    let mut conditions = Vec::with_capacity(raw.conditions.len());
    for (index, condition) in raw.conditions.into_iter().enumerate() {
        let trigger = condition.trigger.ok_or(DefinitionError::MissingField {
            section: "conditions",
            field: "trigger",
            index,
        })?;
        let action = condition.action.ok_or(DefinitionError::MissingField {
            section: "conditions",
            field: "action",
            index,
        })?;
        conditions.push(Condition {
            trigger,
            action,
            parameters: condition.parameters,
            time_limit: condition.time_limit,
        });
    }

    let def = ContractDefinition {
        contract_type,
        jurisdiction,
        parties,
        conditions,
        legal_requirements: raw.legal_requirements,
        metadata: raw.metadata,
    };
    debug!(
        contract_type = %def.contract_type,
        jurisdiction = %def.jurisdiction,
        parties = def.parties.len(),
        conditions = def.conditions.len(),
        "Parsed contract definition"
    );
    Ok(def)
}

#[derive(Serialize)]
struct DocumentOut<'a> {
    contract: DefinitionOut<'a>,
}

// Scalar fields and plain arrays come before the array-of-table and table
// fields so the emitted TOML stays unambiguous.
#[derive(Serialize)]
struct DefinitionOut<'a> {
    #[serde(rename = "type")]
    contract_type: &'a str,
    jurisdiction: &'a str,
    legal_requirements: &'a [String],
    parties: &'a [Party],
    conditions: &'a [Condition],
    metadata: &'a BTreeMap<String, serde_json::Value>,
}

fn document_out(def: &ContractDefinition) -> DocumentOut<'_> {
    DocumentOut {
        contract: DefinitionOut {
            contract_type: def.contract_type.as_str(),
            jurisdiction: def.jurisdiction.as_str(),
            legal_requirements: &def.legal_requirements,
            parties: &def.parties,
            conditions: &def.conditions,
            metadata: &def.metadata,
        },
    }
}

/// The canonical document form of a definition, mirroring the input schema.
/// `parse_value(to_value(def))` reconstructs a field-wise equal definition.
pub fn to_value(def: &ContractDefinition) -> Result<toml::Value, DefinitionError> {
    toml::Value::try_from(document_out(def)).map_err(|e| DefinitionError::Serialize(e.to_string()))
}

/// The canonical document form of a definition, as TOML text.
pub fn to_toml_string(def: &ContractDefinition) -> Result<String, DefinitionError> {
    toml::to_string_pretty(&document_out(def)).map_err(|e| DefinitionError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ESCROW_DOC: &str = r#"
[contract]
type = "escrow"
jurisdiction = "india"
legal_requirements = ["kyc_verification", "gst_compliance"]

[contract.metadata]
version = "1.0.0"

[[contract.parties]]
name = "Buyer"
role = "payer"
address = "0x1234567890123456789012345678901234567890"

[[contract.parties]]
name = "Seller"
role = "payee"
address = "0x0987654321098765432109876543210987654321"

[[contract.conditions]]
trigger = "delivery_confirmed"
action = "release_funds"
time_limit = 7

[contract.conditions.parameters]
confirmation_method = "digital_signature"
delivery_proof_required = true
"#;

    #[test]
    fn parse_valid_escrow_contract() {
        let def = parse_str(ESCROW_DOC).unwrap();

        assert_eq!(def.contract_type, ContractType::Escrow);
        assert_eq!(def.jurisdiction, Jurisdiction::India);
        assert_eq!(def.parties.len(), 2);
        assert_eq!(def.conditions.len(), 1);
        assert_eq!(def.legal_requirements.len(), 2);

        let payer = &def.parties[0];
        assert_eq!(payer.name, "Buyer");
        assert_eq!(payer.role, "payer");
        assert_eq!(
            payer.address.as_deref(),
            Some("0x1234567890123456789012345678901234567890")
        );
        assert!(payer.verification_required);

        let condition = &def.conditions[0];
        assert_eq!(condition.trigger, "delivery_confirmed");
        assert_eq!(condition.action, "release_funds");
        assert_eq!(condition.time_limit, Some(7));
        let params = condition.parameters.as_ref().unwrap();
        assert_eq!(
            params.get("confirmation_method"),
            Some(&serde_json::json!("digital_signature"))
        );
        assert_eq!(
            params.get("delivery_proof_required"),
            Some(&serde_json::json!(true))
        );
    }

    #[test]
    fn parse_valid_insurance_contract() {
        let def = parse_str(
            r#"
[contract]
type = "insurance"
jurisdiction = "eu"

[[contract.parties]]
name = "Insurance Company"
role = "insurer"

[[contract.parties]]
name = "Policy Holder"
role = "insured"

[[contract.conditions]]
trigger = "claim_submitted"
action = "process_claim"
time_limit = 10
"#,
        )
        .unwrap();

        assert_eq!(def.contract_type, ContractType::Insurance);
        assert_eq!(def.jurisdiction, Jurisdiction::Eu);
        assert_eq!(def.parties[0].role, "insurer");
        assert_eq!(def.parties[1].role, "insured");
        assert!(def.legal_requirements.is_empty());
        assert!(def.metadata.is_empty());
    }

    #[test]
    fn type_and_jurisdiction_are_lowercase_normalized() {
        let def = parse_str(
            r#"
[contract]
type = "Settlement"
jurisdiction = "US"

[[contract.parties]]
name = "Plaintiff"
role = "plaintiff"

[[contract.parties]]
name = "Defendant"
role = "defendant"

[[contract.conditions]]
trigger = "agreement_reached"
action = "execute_settlement"
"#,
        )
        .unwrap();
        assert_eq!(def.contract_type, ContractType::Settlement);
        assert_eq!(def.jurisdiction, Jurisdiction::Us);
    }

    #[test]
    fn missing_contract_key_rejected() {
        let err = parse_str("[definition]\ntype = \"escrow\"").unwrap_err();
        assert!(matches!(err, DefinitionError::Schema));
        assert_eq!(
            err.to_string(),
            "Contract definition must contain 'contract' key"
        );
    }

    #[test]
    fn unsupported_type_rejected() {
        let err = parse_str("[contract]\ntype = \"loan\"\njurisdiction = \"india\"").unwrap_err();
        match err {
            DefinitionError::UnsupportedType(t) => assert_eq!(t, "loan"),
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_jurisdiction_rejected() {
        let err = parse_str("[contract]\ntype = \"escrow\"\njurisdiction = \"mars\"").unwrap_err();
        match err {
            DefinitionError::UnsupportedJurisdiction(j) => assert_eq!(j, "mars"),
            other => panic!("expected UnsupportedJurisdiction, got {other:?}"),
        }
    }

    #[test]
    fn missing_type_reported_as_unsupported() {
        // Mirrors the normalize-then-check order: absent type normalizes to ""
        // and fails the enum check, not a missing-field check.
        let err = parse_str("[contract]\njurisdiction = \"india\"").unwrap_err();
        assert!(matches!(err, DefinitionError::UnsupportedType(t) if t.is_empty()));
    }

    #[test]
    fn missing_party_name_names_field_and_index() {
        let err = parse_str(
            r#"
[contract]
type = "escrow"
jurisdiction = "india"

[[contract.parties]]
name = "Buyer"
role = "payer"

[[contract.parties]]
role = "payee"
"#,
        )
        .unwrap_err();
        match err {
            DefinitionError::MissingField {
                section,
                field,
                index,
            } => {
                assert_eq!(section, "parties");
                assert_eq!(field, "name");
                assert_eq!(index, 1);
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn missing_condition_action_names_field_and_index() {
        let err = parse_str(
            r#"
[contract]
type = "escrow"
jurisdiction = "india"

[[contract.conditions]]
trigger = "delivery_confirmed"
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::MissingField {
                section: "conditions",
                field: "action",
                index: 0,
            }
        ));
    }

    #[test]
    fn wrong_shape_rejected() {
        let err = parse_str("[contract]\ntype = \"escrow\"\njurisdiction = \"india\"\nparties = 3")
            .unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidShape(_)));
    }

    #[test]
    fn invalid_toml_rejected() {
        let err = parse_str("contract = [").unwrap_err();
        assert!(matches!(err, DefinitionError::Toml(_)));
    }

    #[test]
    fn round_trip_preserves_definition() {
        let def = parse_str(ESCROW_DOC).unwrap();
        let value = to_value(&def).unwrap();
        let back = parse_value(value).unwrap();
        assert_eq!(back, def);
    }

    #[test]
    fn round_trip_through_text() {
        let def = parse_str(ESCROW_DOC).unwrap();
        let text = to_toml_string(&def).unwrap();
        let back = parse_str(&text).unwrap();
        assert_eq!(back, def);
    }

    #[test]
    fn parse_file_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ESCROW_DOC.as_bytes()).unwrap();
        let def = parse_file(file.path()).unwrap();
        assert_eq!(def.contract_type, ContractType::Escrow);
        assert_eq!(def.parties.len(), 2);
    }

    #[test]
    fn parse_file_missing_path_is_io_error() {
        let err = parse_file(Path::new("/nonexistent/contract.toml")).unwrap_err();
        assert!(matches!(err, DefinitionError::Io(_)));
    }
}

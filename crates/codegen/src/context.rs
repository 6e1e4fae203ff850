//! Rendering-context assembly.
//!
//! Merges the three context sources — definition fields, rule-store
//! metadata, and the jurisdiction fragment bundle — into one
//! [`RenderContext`]. Every per-party and per-condition block is emitted
//! here, in definition order, so the renderer itself stays a dumb
//! substitution pass.

use crate::fragments::{FragmentBundle, TestCase};
use crate::render::RenderContext;
use lexforge_core::{Condition, ContractDefinition, ContractType, Party};
use lexforge_rules::{ContractTypeRules, JurisdictionRules};

/// Build the context for a contract template.
pub fn build_contract_context(
    def: &ContractDefinition,
    rules: &JurisdictionRules,
    bundle: &FragmentBundle,
) -> RenderContext {
    let type_rules = rules
        .for_contract_type(def.contract_type)
        .cloned()
        .unwrap_or_default();

    let mut ctx = RenderContext::new();

    // (a) definition fields
    ctx.insert("contract_name", def.contract_type.contract_name());
    ctx.insert("contract_type", def.contract_type.as_str());
    ctx.insert("jurisdiction", def.jurisdiction.as_str());
    ctx.insert("parties_comment", parties_comment(&def.parties));
    ctx.insert("condition_functions", condition_functions(&def.conditions));
    ctx.insert(
        "declared_requirements_comment",
        comment_list(def.legal_requirements.iter().cloned()),
    );
    ctx.insert("metadata_comment", metadata_comment(def));

    // (b) rule-store fields
    ctx.insert("jurisdiction_name", rules.name.clone());
    ctx.insert(
        "regulatory_bodies_comment",
        comment_list(rules.regulatory_bodies.iter().cloned()),
    );
    ctx.insert(
        "mandatory_clauses_comment",
        comment_list(type_rules.mandatory_clauses.iter().cloned()),
    );
    ctx.insert(
        "legal_requirements_comment",
        comment_list(type_rules.legal_requirements.iter().cloned()),
    );
    ctx.insert("time_limits_comment", time_limits_comment(&type_rules));

    // (c) the six fragment slots
    ctx.insert("jurisdiction_variables", bundle.variables.clone());
    ctx.insert("jurisdiction_initialization", bundle.initialization.clone());
    ctx.insert(
        "compliance_verification",
        bundle.compliance_verification.clone(),
    );
    ctx.insert(
        "legal_requirements_accessor",
        bundle.legal_requirements_accessor.clone(),
    );
    ctx.insert("dispute_handling", bundle.dispute_handling.clone());
    ctx.insert(
        "jurisdiction_functions",
        bundle.jurisdiction_functions.clone(),
    );

    ctx
}

/// Build the context for the deployment-script template.
pub fn build_deployment_context(
    def: &ContractDefinition,
    rules: &JurisdictionRules,
    bundle: &FragmentBundle,
) -> RenderContext {
    let mut ctx = RenderContext::new();
    ctx.insert("contract_name", def.contract_type.contract_name());
    ctx.insert("contract_type", def.contract_type.as_str());
    ctx.insert("jurisdiction", def.jurisdiction.as_str());
    ctx.insert("jurisdiction_name", rules.name.clone());
    ctx.insert("constructor_args", constructor_args(bundle));
    ctx
}

/// Build the context for the test-script template.
pub fn build_test_context(
    def: &ContractDefinition,
    rules: &JurisdictionRules,
    bundle: &FragmentBundle,
) -> RenderContext {
    let mut ctx = RenderContext::new();
    ctx.insert("contract_name", def.contract_type.contract_name());
    ctx.insert("contract_type", def.contract_type.as_str());
    ctx.insert("jurisdiction", def.jurisdiction.as_str());
    ctx.insert("jurisdiction_name", rules.name.clone());
    ctx.insert("constructor_args", constructor_args(bundle));
    ctx.insert("test_cases", test_cases_block(&test_cases(def, bundle)));
    ctx
}

/// The full test-case list for a definition: the two contract-type-agnostic
/// base cases, then the jurisdiction's extra verifier cases.
pub fn test_cases(def: &ContractDefinition, bundle: &FragmentBundle) -> Vec<TestCase> {
    let mut cases = vec![
        TestCase::new(
            "Contract Creation",
            "Test contract creation with valid parameters",
            "createContract",
            creation_args(def.contract_type),
        ),
        TestCase::new(
            "Legal Compliance",
            "Test legal compliance verification",
            "verifyLegalCompliance",
            &["contractId", "partyA", "partyB", "amount"],
        ),
    ];
    cases.extend(bundle.test_cases.iter().cloned());
    cases
}

fn creation_args(contract_type: ContractType) -> &'static [&'static str] {
    match contract_type {
        ContractType::Escrow => &["payee", "amount", "deadline"],
        ContractType::Insurance => &["insured", "premium", "coverage"],
        ContractType::Settlement => &["defendant", "amount", "deadline"],
    }
}

/// `"A", "B", "C"` — the quoted argument list for deploy/test scripts.
fn constructor_args(bundle: &FragmentBundle) -> String {
    bundle
        .constructor_args
        .iter()
        .map(|arg| format!("\"{arg}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// ` * - item` lines for doc-comment headers; ` * (none)` when empty.
fn comment_list(items: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = items.map(|item| format!(" * - {item}")).collect();
    if lines.is_empty() {
        " * (none)".to_string()
    } else {
        lines.join("\n")
    }
}

fn time_limits_comment(type_rules: &ContractTypeRules) -> String {
    comment_list(
        type_rules
            .time_limits
            .iter()
            .map(|(name, days)| format!("{name}: {days}")),
    )
}

fn metadata_comment(def: &ContractDefinition) -> String {
    comment_list(
        def.metadata
            .iter()
            .map(|(key, value)| format!("{key}: {}", json_display(value))),
    )
}

/// Unquoted display for JSON scalars; compact JSON for anything else.
fn json_display(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn parties_comment(parties: &[Party]) -> String {
    if parties.is_empty() {
        return "    // Parties: (none declared)".to_string();
    }
    let mut out = String::from("    // Parties:");
    for party in parties {
        let address = party.address.as_deref().unwrap_or("unassigned");
        let verification = if party.verification_required {
            "verification required"
        } else {
            "verification waived"
        };
        out.push_str(&format!(
            "\n    //   - {} ({}), address {address}, {verification}",
            party.name, party.role
        ));
    }
    out
}

/// One `on<Trigger>` function per condition, in definition order.
fn condition_functions(conditions: &[Condition]) -> String {
    let mut out = String::new();
    for (i, condition) in conditions.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&format!(
            "    /// Condition {}: '{}' triggers '{}'.\n",
            i + 1,
            condition.trigger,
            condition.action
        ));
        if let Some(days) = condition.time_limit {
            out.push_str(&format!("    /// Must resolve within {days} days.\n"));
        }
        out.push_str(&format!(
            "    function on{}(uint256 contractId) external onlyOwner {{\n",
            pascal_case(&condition.trigger)
        ));
        out.push_str(
            "        require(legalComplianceVerified[contractId], \"Legal compliance not verified\");\n",
        );
        if let Some(parameters) = &condition.parameters {
            for (key, value) in parameters {
                out.push_str(&format!("        // {key}: {}\n", json_display(value)));
            }
        }
        out.push_str(&format!(
            "        emit ConditionTriggered(contractId, \"{}\", \"{}\");\n",
            condition.trigger, condition.action
        ));
        out.push_str("    }");
    }
    out
}

/// `delivery_confirmed` → `DeliveryConfirmed`.
fn pascal_case(identifier: &str) -> String {
    identifier
        .split(|c: char| c == '_' || c == '-' || c == ' ')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn test_cases_block(cases: &[TestCase]) -> String {
    let mut out = String::new();
    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&format!(
            "  it(\"{} — {}\", async function () {{\n",
            case.name, case.description
        ));
        out.push_str(&format!(
            "    // exercises {}({})\n",
            case.function,
            case.args.join(", ")
        ));
        out.push_str(&format!(
            "    expect(typeof contract.{}).to.equal(\"function\");\n",
            case.function
        ));
        out.push_str("  });");
    }
    out
}

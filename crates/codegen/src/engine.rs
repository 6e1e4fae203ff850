//! The code assembly engine.
//!
//! [`CodeGenerator`] owns the immutable pieces — rule store, fragment
//! registry, template table, renderer — and exposes the four generation
//! operations. Every operation is a pure function of the definition it is
//! handed; nothing here mutates the caller's definition or keeps state
//! between calls.

use crate::context::{build_contract_context, build_deployment_context, build_test_context};
use crate::fragments::FragmentRegistry;
use crate::render::{PlaceholderRenderer, TemplateRenderer};
use crate::templates::{TemplateTable, template_key};
use crate::CodegenError;
use lexforge_core::{ContractDefinition, Jurisdiction};
use lexforge_rules::RuleStore;
use tracing::debug;

/// One jurisdiction's output from [`CodeGenerator::generate_all`].
#[derive(Debug, Clone)]
pub struct GeneratedContract {
    pub jurisdiction: Jurisdiction,
    pub source: String,
}

/// The assembly engine.
pub struct CodeGenerator {
    rules: RuleStore,
    fragments: FragmentRegistry,
    templates: TemplateTable,
    renderer: Box<dyn TemplateRenderer>,
}

impl CodeGenerator {
    /// An engine over the embedded rule, fragment, and template resources,
    /// rendering with the default placeholder backend.
    pub fn new() -> Result<Self, CodegenError> {
        Self::with_renderer(Box::new(PlaceholderRenderer))
    }

    /// An engine with a custom rendering backend.
    pub fn with_renderer(renderer: Box<dyn TemplateRenderer>) -> Result<Self, CodegenError> {
        Ok(Self {
            rules: RuleStore::builtin()?,
            fragments: FragmentRegistry::builtin()?,
            templates: TemplateTable::builtin(),
            renderer,
        })
    }

    /// Render contract source for a definition.
    ///
    /// Does NOT validate: a structurally incomplete definition renders
    /// without warning. Run `lexforge_dsl::validate` first when a pre-check
    /// is wanted.
    pub fn generate_contract(&self, def: &ContractDefinition) -> Result<String, CodegenError> {
        let rules = self.rules.rules_for(def.jurisdiction)?;
        let bundle = self.fragments.bundle(def.jurisdiction)?;
        let context = build_contract_context(def, &rules, bundle);

        let key = template_key(def);
        let template = self.templates.select(&key)?;
        debug!(template = %key, "Rendering contract source");

        Ok(self.renderer.render(template, &context))
    }

    /// Render the contract for every supported jurisdiction.
    ///
    /// Each render works on an immutable snapshot of `def` with the
    /// jurisdiction substituted; the caller's definition is untouched.
    pub fn generate_all(
        &self,
        def: &ContractDefinition,
    ) -> Result<Vec<GeneratedContract>, CodegenError> {
        Jurisdiction::ALL
            .iter()
            .map(|&jurisdiction| {
                let snapshot = def.with_jurisdiction(jurisdiction);
                self.generate_contract(&snapshot).map(|source| GeneratedContract {
                    jurisdiction,
                    source,
                })
            })
            .collect()
    }

    /// Render the hardhat deployment script for a definition.
    pub fn create_deployment_script(
        &self,
        def: &ContractDefinition,
    ) -> Result<String, CodegenError> {
        let rules = self.rules.rules_for(def.jurisdiction)?;
        let bundle = self.fragments.bundle(def.jurisdiction)?;
        let context = build_deployment_context(def, &rules, bundle);
        Ok(self
            .renderer
            .render(self.templates.deployment_script(), &context))
    }

    /// Render the hardhat test script for a definition.
    pub fn create_test_script(&self, def: &ContractDefinition) -> Result<String, CodegenError> {
        let rules = self.rules.rules_for(def.jurisdiction)?;
        let bundle = self.fragments.bundle(def.jurisdiction)?;
        let context = build_test_context(def, &rules, bundle);
        Ok(self.renderer.render(self.templates.test_script(), &context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexforge_core::{Condition, ContractType, Party};

    fn engine() -> CodeGenerator {
        CodeGenerator::new().unwrap()
    }

    fn escrow_india() -> ContractDefinition {
        ContractDefinition::basic(ContractType::Escrow, Jurisdiction::India)
    }

    #[test]
    fn india_escrow_contains_fragment_markers() {
        let source = engine().generate_contract(&escrow_india()).unwrap();

        assert!(source.contains("India"));
        for marker in [
            "panNumbers",
            "aadhaarNumbers",
            "gstNumbers",
            "kycVerified",
            "gstCompliant",
            "MAX_TRANSACTION_LIMIT",
            "verifyKYC",
            "verifyGSTCompliance",
            "RBI",
        ] {
            assert!(source.contains(marker), "missing {marker}");
        }
        assert!(source.contains("contract EscrowContract"));
    }

    #[test]
    fn eu_insurance_contains_fragment_markers() {
        let def = ContractDefinition::basic(ContractType::Insurance, Jurisdiction::Eu);
        let source = engine().generate_contract(&def).unwrap();

        assert!(source.contains("European Union"));
        for marker in [
            "gdprCompliant",
            "psd2Compliant",
            "dataProtectionOfficer",
            "GDPR_RESPONSE_DAYS",
            "PSD2_COMPLIANCE_DAYS",
            "verifyGDPRCompliance",
            "verifyPSD2Compliance",
        ] {
            assert!(source.contains(marker), "missing {marker}");
        }
        assert!(source.contains("contract InsuranceContract"));
        assert!(source.contains("InsurancePolicy"));
    }

    #[test]
    fn us_settlement_contains_fragment_markers() {
        let def = ContractDefinition::basic(ContractType::Settlement, Jurisdiction::Us);
        let source = engine().generate_contract(&def).unwrap();

        assert!(source.contains("United States"));
        for marker in [
            "secRegistered",
            "finraRegistered",
            "stateOfResidence",
            "SEC_FILING_DAYS",
            "STATE_COMPLIANCE_DAYS",
            "verifySECRegistration",
            "verifyFINRARegistration",
            "setStateOfResidence",
        ] {
            assert!(source.contains(marker), "missing {marker}");
        }
        assert!(source.contains("contract SettlementContract"));
    }

    #[test]
    fn every_pair_renders_with_no_leftover_markers() {
        let engine = engine();
        for ct in ContractType::ALL {
            for j in Jurisdiction::ALL {
                let def = ContractDefinition::basic(ct, j);
                let source = engine.generate_contract(&def).unwrap();
                assert!(
                    !source.contains("{{"),
                    "{j}_{ct}: unsubstituted placeholder remains"
                );
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let engine = engine();
        let def = escrow_india();
        assert_eq!(
            engine.generate_contract(&def).unwrap(),
            engine.generate_contract(&def).unwrap()
        );
    }

    #[test]
    fn generation_skips_validation() {
        // One party, zero conditions — structurally incomplete, still renders.
        let def = ContractDefinition {
            parties: vec![Party::new("Seller", "payee")],
            conditions: vec![],
            ..escrow_india()
        };
        let source = engine().generate_contract(&def).unwrap();
        assert!(source.contains("contract EscrowContract"));
    }

    #[test]
    fn generate_all_covers_every_jurisdiction() {
        let def = escrow_india();
        let outputs = engine().generate_all(&def).unwrap();

        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0].jurisdiction, Jurisdiction::India);
        assert_eq!(outputs[1].jurisdiction, Jurisdiction::Eu);
        assert_eq!(outputs[2].jurisdiction, Jurisdiction::Us);

        assert!(outputs[0].source.contains("panNumbers"));
        assert!(outputs[1].source.contains("gdprCompliant"));
        assert!(outputs[2].source.contains("secRegistered"));
    }

    #[test]
    fn generate_all_never_mutates_the_input() {
        let def = escrow_india();
        let before = def.clone();
        engine().generate_all(&def).unwrap();
        assert_eq!(def, before);
        assert_eq!(def.jurisdiction, Jurisdiction::India);
    }

    #[test]
    fn deployment_script_carries_constructor_args() {
        let script = engine().create_deployment_script(&escrow_india()).unwrap();

        assert!(script.contains("EscrowContract"));
        assert!(script.contains("escrow"));
        assert!(script.contains("india"));
        assert!(script.contains("\"RBI_GUIDELINES\", \"GST_COMPLIANCE\", \"KYC_VERIFICATION\""));
    }

    #[test]
    fn deployment_args_differ_per_jurisdiction() {
        let engine = engine();
        let eu = engine
            .create_deployment_script(&escrow_india().with_jurisdiction(Jurisdiction::Eu))
            .unwrap();
        assert!(eu.contains("\"GDPR_COMPLIANCE\", \"PSD2_COMPLIANCE\", \"MICA_REGULATIONS\""));

        let us = engine
            .create_deployment_script(&escrow_india().with_jurisdiction(Jurisdiction::Us))
            .unwrap();
        assert!(us.contains("\"SEC_REGISTRATION\", \"FINRA_COMPLIANCE\", \"STATE_LAWS\""));
    }

    #[test]
    fn india_test_script_has_base_and_extra_cases() {
        let script = engine().create_test_script(&escrow_india()).unwrap();

        assert!(script.contains("Contract Creation"));
        assert!(script.contains("Legal Compliance"));
        assert!(script.contains("KYC Verification"));
        assert!(script.contains("GST Compliance"));
        assert!(script.contains("describe(\"EscrowContract — India\""));
    }

    #[test]
    fn eu_test_script_has_its_verifier_cases() {
        let def = escrow_india().with_jurisdiction(Jurisdiction::Eu);
        let script = engine().create_test_script(&def).unwrap();
        assert!(script.contains("GDPR Compliance"));
        assert!(script.contains("PSD2 Compliance"));
        assert!(!script.contains("KYC Verification"));
    }

    #[test]
    fn parsed_document_generates_end_to_end() {
        let def = lexforge_dsl::parse_str(
            r#"
[contract]
type = "escrow"
jurisdiction = "india"
legal_requirements = ["kyc_verification", "gst_compliance"]

[[contract.parties]]
name = "Buyer"
role = "payer"

[[contract.parties]]
name = "Seller"
role = "payee"

[[contract.conditions]]
trigger = "delivery_confirmed"
action = "release_funds"
time_limit = 7
"#,
        )
        .unwrap();

        let source = engine().generate_contract(&def).unwrap();
        assert!(source.contains("contract EscrowContract"));
        assert!(source.contains("India"));
        assert!(source.contains("panNumbers"));
        assert!(source.contains("verifyKYC"));
        assert!(source.contains("verifyGSTCompliance"));
        assert!(source.contains(" * - kyc_verification"));
    }

    #[test]
    fn conditions_surface_in_generated_source() {
        let mut def = escrow_india();
        def.conditions.push(Condition::new("dispute_raised", "freeze_funds"));
        let source = engine().generate_contract(&def).unwrap();
        assert!(source.contains("function onDeliveryConfirmed"));
        assert!(source.contains("function onDisputeRaised"));
    }
}

//! Structural validation of parsed contract definitions.

use lexforge_core::ContractDefinition;

/// Check a definition against the structural rules and return every
/// violation as a human-readable message.
///
/// Never fails and never short-circuits: a definition with one party and no
/// conditions yields both messages, so the author fixes everything in one
/// pass. Order is fixed — party count, condition count, then the role-pair
/// check for the contract type. An empty result means the definition is
/// structurally complete.
pub fn validate(def: &ContractDefinition) -> Vec<String> {
    let mut errors = Vec::new();

    if def.parties.len() < 2 {
        errors.push("Contract must have at least two parties".to_string());
    }

    if def.conditions.is_empty() {
        errors.push("Contract must have at least one condition".to_string());
    }

    let (first, second) = def.contract_type.required_roles();
    let roles = def.roles();
    if !roles.contains(&first) || !roles.contains(&second) {
        errors.push(format!(
            "{} contract must have '{first}' and '{second}' roles",
            def.contract_type.display_name()
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexforge_core::{Condition, ContractDefinition, ContractType, Jurisdiction, Party};

    fn escrow(parties: Vec<Party>, conditions: Vec<Condition>) -> ContractDefinition {
        ContractDefinition {
            parties,
            conditions,
            ..ContractDefinition::basic(ContractType::Escrow, Jurisdiction::India)
        }
    }

    #[test]
    fn complete_escrow_is_valid() {
        let def = escrow(
            vec![Party::new("Buyer", "payer"), Party::new("Seller", "payee")],
            vec![Condition::new("delivery_confirmed", "release_funds")],
        );
        assert_eq!(validate(&def), Vec::<String>::new());
    }

    #[test]
    fn single_party_escrow_reports_both_defects() {
        let def = escrow(
            vec![Party::new("Seller", "payee")],
            vec![Condition::new("delivery_confirmed", "release_funds")],
        );
        assert_eq!(
            validate(&def),
            vec![
                "Contract must have at least two parties".to_string(),
                "Escrow contract must have 'payer' and 'payee' roles".to_string(),
            ]
        );
    }

    #[test]
    fn no_conditions_reported() {
        let def = escrow(
            vec![Party::new("Buyer", "payer"), Party::new("Seller", "payee")],
            vec![],
        );
        assert_eq!(
            validate(&def),
            vec!["Contract must have at least one condition".to_string()]
        );
    }

    #[test]
    fn one_party_and_no_conditions_reports_all_three() {
        let def = escrow(vec![Party::new("Seller", "payee")], vec![]);
        assert_eq!(
            validate(&def),
            vec![
                "Contract must have at least two parties".to_string(),
                "Contract must have at least one condition".to_string(),
                "Escrow contract must have 'payer' and 'payee' roles".to_string(),
            ]
        );
    }

    #[test]
    fn insurance_missing_insurer_reported() {
        let def = ContractDefinition {
            parties: vec![Party::new("Policy Holder", "insured")],
            ..ContractDefinition::basic(ContractType::Insurance, Jurisdiction::Eu)
        };
        let errors = validate(&def);
        assert_eq!(errors.len(), 2);
        assert!(
            errors.contains(&"Insurance contract must have 'insurer' and 'insured' roles".into())
        );
    }

    #[test]
    fn settlement_missing_plaintiff_reported() {
        let def = ContractDefinition {
            parties: vec![Party::new("Defendant", "defendant")],
            ..ContractDefinition::basic(ContractType::Settlement, Jurisdiction::Us)
        };
        let errors = validate(&def);
        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .contains(&"Settlement contract must have 'plaintiff' and 'defendant' roles".into())
        );
    }

    #[test]
    fn extra_parties_beyond_required_roles_are_fine() {
        let def = escrow(
            vec![
                Party::new("Buyer", "payer"),
                Party::new("Seller", "payee"),
                Party::new("Agent", "arbiter"),
            ],
            vec![Condition::new("delivery_confirmed", "release_funds")],
        );
        assert!(validate(&def).is_empty());
    }

    #[test]
    fn validation_never_mutates() {
        let def = escrow(vec![Party::new("Seller", "payee")], vec![]);
        let before = def.clone();
        let _ = validate(&def);
        let _ = validate(&def);
        assert_eq!(def, before);
    }

    #[test]
    fn basic_definitions_validate_cleanly() {
        for ct in ContractType::ALL {
            for j in Jurisdiction::ALL {
                let def = ContractDefinition::basic(ct, j);
                assert!(validate(&def).is_empty(), "{ct}/{j} should be valid");
            }
        }
    }
}

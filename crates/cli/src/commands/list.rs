//! The `list-types` and `list-jurisdictions` commands.

use lexforge_core::{ContractType, Jurisdiction};
use lexforge_rules::RuleStore;

pub fn types() {
    println!("Supported contract types:");
    for contract_type in ContractType::ALL {
        println!("  - {contract_type}");
    }
}

pub fn jurisdictions() -> anyhow::Result<()> {
    let store = RuleStore::builtin()?;
    println!("Supported jurisdictions:");
    for jurisdiction in Jurisdiction::ALL {
        let rules = store.rules_for(jurisdiction)?;
        println!("  - {jurisdiction} ({})", rules.name);
    }
    Ok(())
}

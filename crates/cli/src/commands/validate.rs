//! The `validate` command — parse a definition file and report every
//! structural defect, or a short summary when the definition is complete.

use std::path::Path;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let def = match lexforge_dsl::parse_file(file) {
        Ok(def) => def,
        Err(e) => {
            eprintln!("Validation failed: {e}");
            std::process::exit(1);
        }
    };

    let errors = lexforge_dsl::validate(&def);
    if errors.is_empty() {
        println!("Contract definition is valid!");
        println!("Type: {}", def.contract_type);
        println!("Jurisdiction: {}", def.jurisdiction);
        println!("Parties: {}", def.parties.len());
        println!("Conditions: {}", def.conditions.len());
    } else {
        println!("Validation errors:");
        for error in &errors {
            println!("  - {error}");
        }
        std::process::exit(1);
    }

    Ok(())
}

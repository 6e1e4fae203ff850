//! The `generate` command — definition in, artifacts out.
//!
//! Validates before generating: on structural defects every message is
//! printed and nothing is written. This is the one boundary that composes
//! validate-then-generate; the engine itself renders whatever it is handed.

use anyhow::bail;
use lexforge_codegen::{ArtifactWriter, CodeGenerator};
use lexforge_core::{ContractDefinition, ContractType, Jurisdiction};
use std::path::{Path, PathBuf};

pub fn run(
    file: Option<PathBuf>,
    contract_type: Option<String>,
    jurisdiction: Option<String>,
    output: &Path,
    all: bool,
) -> anyhow::Result<()> {
    let def = match (file, contract_type, jurisdiction) {
        (Some(path), _, _) => lexforge_dsl::parse_file(&path)?,
        (None, Some(ct), Some(j)) => starter_definition(&ct, &j)?,
        _ => bail!("must specify either --file or --type together with --jurisdiction"),
    };

    let errors = lexforge_dsl::validate(&def);
    if !errors.is_empty() {
        println!("Validation errors:");
        for error in &errors {
            println!("  - {error}");
        }
        std::process::exit(1);
    }

    let generator = CodeGenerator::new()?;
    let writer = ArtifactWriter::new(output)?;

    if all {
        for generated in generator.generate_all(&def)? {
            let snapshot = def.with_jurisdiction(generated.jurisdiction);
            write_artifacts(&generator, &writer, &snapshot, &generated.source)?;
        }
    } else {
        println!(
            "Generating {} contract for {}...",
            def.contract_type, def.jurisdiction
        );
        let source = generator.generate_contract(&def)?;
        write_artifacts(&generator, &writer, &def, &source)?;
    }

    Ok(())
}

fn starter_definition(contract_type: &str, jurisdiction: &str) -> anyhow::Result<ContractDefinition> {
    let Some(ct) = ContractType::parse(&contract_type.to_lowercase()) else {
        bail!("Unsupported contract type: {contract_type}");
    };
    let Some(j) = Jurisdiction::parse(&jurisdiction.to_lowercase()) else {
        bail!("Unsupported jurisdiction: {jurisdiction}");
    };
    Ok(ContractDefinition::basic(ct, j))
}

fn write_artifacts(
    generator: &CodeGenerator,
    writer: &ArtifactWriter,
    def: &ContractDefinition,
    source: &str,
) -> anyhow::Result<()> {
    let contract_path = writer.write_contract(def, source)?;
    println!("Contract generated successfully: {}", contract_path.display());

    let deployment = generator.create_deployment_script(def)?;
    let deployment_path = writer.write_deployment_script(def, &deployment)?;
    println!("Deployment script: {}", deployment_path.display());

    let test = generator.create_test_script(def)?;
    let test_path = writer.write_test_script(def, &test)?;
    println!("Test script: {}", test_path.display());

    Ok(())
}

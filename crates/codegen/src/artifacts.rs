//! Artifact persistence — deterministic filenames, plain writes.
//!
//! Filenames derive from `(contract_type, jurisdiction)` only, so
//! regenerating the same pair silently overwrites the previous artifact.
//! Callers that need collision protection or atomic replacement must
//! provide it themselves.

use crate::CodegenError;
use lexforge_core::ContractDefinition;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes rendered text into an output directory.
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer, creating the output directory if needed.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, CodegenError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `{type}_{jurisdiction}.sol`
    pub fn contract_filename(def: &ContractDefinition) -> String {
        format!("{}_{}.sol", def.contract_type, def.jurisdiction)
    }

    /// `deploy_{type}_{jurisdiction}.js`
    pub fn deployment_filename(def: &ContractDefinition) -> String {
        format!("deploy_{}_{}.js", def.contract_type, def.jurisdiction)
    }

    /// `test_{type}_{jurisdiction}.js`
    pub fn test_filename(def: &ContractDefinition) -> String {
        format!("test_{}_{}.js", def.contract_type, def.jurisdiction)
    }

    /// Write contract source; returns the path written.
    pub fn write_contract(
        &self,
        def: &ContractDefinition,
        source: &str,
    ) -> Result<PathBuf, CodegenError> {
        self.write(&Self::contract_filename(def), source)
    }

    /// Write a deployment script; returns the path written.
    pub fn write_deployment_script(
        &self,
        def: &ContractDefinition,
        script: &str,
    ) -> Result<PathBuf, CodegenError> {
        self.write(&Self::deployment_filename(def), script)
    }

    /// Write a test script; returns the path written.
    pub fn write_test_script(
        &self,
        def: &ContractDefinition,
        script: &str,
    ) -> Result<PathBuf, CodegenError> {
        self.write(&Self::test_filename(def), script)
    }

    fn write(&self, filename: &str, content: &str) -> Result<PathBuf, CodegenError> {
        let path = self.output_dir.join(filename);
        std::fs::write(&path, content)?;
        info!(path = %path.display(), "Wrote artifact");
        Ok(path)
    }
}

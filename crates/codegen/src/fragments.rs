//! Per-jurisdiction fragment bundles.
//!
//! Each jurisdiction owns one fixed bundle of six named text fragments that
//! the templates splice in, independent of contract type. The bundles live
//! in an embedded TOML resource and are parsed once at registry
//! construction — adding a jurisdiction is a data change.

use crate::CodegenError;
use lexforge_core::Jurisdiction;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The embedded fragment resource.
const BUILTIN_FRAGMENTS: &str = include_str!("../resources/fragments.toml");

/// A test case descriptor rendered into generated test scripts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub description: String,
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        function: impl Into<String>,
        args: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            function: function.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One jurisdiction's bundle: the six template slots plus the deployment
/// constructor-argument triple and the jurisdiction's extra test cases.
#[derive(Debug, Clone, Deserialize)]
pub struct FragmentBundle {
    /// Compliance state declarations spliced into the contract body.
    pub variables: String,

    /// Constructor hook comment/setup.
    pub initialization: String,

    /// Assertions that both transacting parties satisfy the jurisdiction's
    /// compliance flags before value moves.
    pub compliance_verification: String,

    /// Body of `getLegalRequirements()` — the fixed requirement identifier
    /// list for this jurisdiction.
    pub legal_requirements_accessor: String,

    /// Dispute escalation to the jurisdiction's regulator.
    pub dispute_handling: String,

    /// Setter/verifier operations that flip the compliance flags.
    pub jurisdiction_functions: String,

    /// Named compliance-regime constants passed to the constructor.
    pub constructor_args: Vec<String>,

    /// Test cases tied to this jurisdiction's verifier operations.
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

/// The parsed, immutable fragment table.
#[derive(Debug)]
pub struct FragmentRegistry {
    bundles: BTreeMap<String, FragmentBundle>,
}

impl FragmentRegistry {
    /// Parse the embedded fragment resource.
    pub fn builtin() -> Result<Self, CodegenError> {
        Self::from_toml(BUILTIN_FRAGMENTS)
    }

    /// Parse a fragment resource from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, CodegenError> {
        let bundles: BTreeMap<String, FragmentBundle> =
            toml::from_str(source).map_err(|e| CodegenError::Resource(e.to_string()))?;
        Ok(Self { bundles })
    }

    /// The bundle for a jurisdiction.
    pub fn bundle(&self, jurisdiction: Jurisdiction) -> Result<&FragmentBundle, CodegenError> {
        self.bundles
            .get(jurisdiction.as_str())
            .ok_or_else(|| CodegenError::MissingFragments(jurisdiction.as_str().to_string()))
    }
}

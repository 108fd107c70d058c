//! Generator configuration
//!
//! The operator list and the spellings of the external `BigInt` collaborator
//! are stored in `config/operators.yaml` and compiled into the binary.
//! Operators are rendered in list order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Embedded operator configuration
const EMBEDDED: &str = include_str!("../config/operators.yaml");

/// Only supported configuration schema version
const CONFIG_VERSION: u32 = 1;

/// Operator tokens valid both bare (`OP`) and as compound assignment (`OP=`)
const SYMBOLS: [&str; 8] = ["+", "-", "*", "/", "%", "&", "|", "^"];

/// One arithmetic operator to generate tests for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSpec {
    /// Display name, PascalCase (e.g. `Add`)
    pub name: String,
    /// Operator token (e.g. `+`)
    pub symbol: String,
}

impl OperatorSpec {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Name used as the identifier prefix of tests and helpers
    ///
    /// # Examples
    /// ```
    /// use bigint_cow_testgen::OperatorSpec;
    /// assert_eq!(OperatorSpec::new("Add", "+").lower_name(), "add");
    /// ```
    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Compound-assignment form of the symbol (e.g. `+=`)
    pub fn compound_symbol(&self) -> String {
        format!("{}=", self.symbol)
    }

    fn check(&self) -> Result<()> {
        let mut chars = self.name.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Config(format!(
                "operator name '{}' is not an identifier fragment",
                self.name
            )));
        }

        if !SYMBOLS.contains(&self.symbol.as_str()) {
            return Err(Error::Config(format!(
                "operator '{}' has unsupported symbol '{}'",
                self.name, self.symbol
            )));
        }

        Ok(())
    }
}

/// Names owned by the `BigInt` module and the XCTest fixture
///
/// The generated tests only reference these; none of them is defined here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Big integer type, also used as its single-argument initializer
    #[serde(default = "default_big_int_type")]
    pub big_int_type: String,

    /// Largest value stored inline
    #[serde(default = "default_smi_max")]
    pub smi_max: String,

    /// Largest value of a single heap word
    #[serde(default = "default_heap_max")]
    pub heap_max: String,

    /// Right-hand operand stored inline
    #[serde(default = "default_smi_fixture")]
    pub smi_fixture: String,

    /// Right-hand operand stored on the heap
    #[serde(default = "default_heap_fixture")]
    pub heap_fixture: String,

    #[serde(default = "default_assert_equal")]
    pub assert_equal: String,

    #[serde(default = "default_assert_not_equal")]
    pub assert_not_equal: String,
}

fn default_big_int_type() -> String {
    "BigInt".to_string()
}

fn default_smi_max() -> String {
    "SmiStorage.max".to_string()
}

fn default_heap_max() -> String {
    "HeapWord.max".to_string()
}

fn default_smi_fixture() -> String {
    "self.smiValue".to_string()
}

fn default_heap_fixture() -> String {
    "self.heapValue".to_string()
}

fn default_assert_equal() -> String {
    "XCTAssertEqual".to_string()
}

fn default_assert_not_equal() -> String {
    "XCTAssertNotEqual".to_string()
}

impl Default for Collaborator {
    fn default() -> Self {
        Self {
            big_int_type: default_big_int_type(),
            smi_max: default_smi_max(),
            heap_max: default_heap_max(),
            smi_fixture: default_smi_fixture(),
            heap_fixture: default_heap_fixture(),
            assert_equal: default_assert_equal(),
            assert_not_equal: default_assert_not_equal(),
        }
    }
}

/// Full generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Schema version for migrations
    pub version: u32,

    /// Operators to render, in output order
    pub operators: Vec<OperatorSpec>,

    #[serde(default)]
    pub collaborator: Collaborator,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            operators: vec![
                OperatorSpec::new("Add", "+"),
                OperatorSpec::new("Sub", "-"),
                OperatorSpec::new("Mul", "*"),
                OperatorSpec::new("Div", "/"),
                OperatorSpec::new("Mod", "%"),
            ],
            collaborator: Collaborator::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load the configuration compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED)
    }

    /// Parse and check a configuration document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_norway::from_str(content)?;
        config.validate()?;
        tracing::debug!(operators = config.operators.len(), "configuration loaded");
        Ok(config)
    }

    /// Check the operator list before anything is rendered
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        if self.operators.is_empty() {
            return Err(Error::Config("no operators configured".into()));
        }

        let mut seen = HashSet::new();
        for op in &self.operators {
            op.check()?;
            if !seen.insert(op.lower_name()) {
                return Err(Error::Config(format!("duplicate operator '{}'", op.name)));
            }
        }

        Ok(())
    }
}

// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # bigint-cow-testgen
//!
//! Generates the XCTest suite that checks value semantics (copy-on-write)
//! of the two-tier `BigInt` arithmetic operators.
//!
//! `BigInt` stores small magnitudes inline (*smi*) and large ones in a shared
//! heap buffer. Mutating a copy must never be visible through the original,
//! while mutating through `inout` must be. For every configured operator the
//! generator emits a section with four tests, each covering the four storage
//! pairings smi/smi, smi/heap, heap/smi and heap/heap:
//!
//! | Test | Operation | Assertion |
//! |------|-----------|-----------|
//! | `test_add_toCopy_doesNotModifyOriginal` | `_ = copy + rhs` | equal |
//! | `test_add_toInout_doesNotModifyOriginal` | `_ = value + rhs` via `inout` | equal |
//! | `test_addEqual_toCopy_doesNotModifyOriginal` | `copy += rhs` | equal |
//! | `test_addEqual_toInout_doesModifyOriginal` | `value += rhs` via `inout` | not equal |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bigint_cow_testgen::{render_operator, Collaborator, GeneratorConfig, OperatorSpec};
//!
//! let section = render_operator(&OperatorSpec::new("Add", "+"), &Collaborator::default())?;
//! assert!(section.contains("_ = copy + self.smiValue"));
//!
//! // Everything the binary prints
//! let suite = bigint_cow_testgen::render_suite(&GeneratorConfig::embedded()?)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! config/operators.yaml ──► GeneratorConfig
//!                                │
//!             for each OperatorSpec, in order
//!                                │
//!                                ▼
//!        Scenario × TierPair ──► BlockContext ──► cow_tests.jinja ──► text
//! ```

pub mod config;
pub mod error;
pub mod scenario;
pub mod templates;

// Re-exports
pub use config::{Collaborator, GeneratorConfig, OperatorSpec};
pub use error::{Error, Result};
pub use scenario::{Binding, Expectation, OperatorForm, Scenario, Tier, TierPair};
pub use templates::{render_operator, render_suite};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

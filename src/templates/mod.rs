//! Template-based test generation
//!
//! Uses a MiniJinja template, compiled into the binary, to lay out one
//! operator section of the copy-on-write test suite.

pub mod context;

use minijinja::Environment;
use std::sync::OnceLock;

use crate::config::{Collaborator, GeneratorConfig, OperatorSpec};
use crate::error::Result;

// Embedded templates (compiled into binary)
mod embedded {
    pub const COW_TESTS: &str = include_str!("../../templates/cow_tests.jinja");
}

/// Name of the operator section template
pub const COW_TESTS_TEMPLATE: &str = "cow_tests.jinja";

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

/// Initialize the template engine with embedded templates
fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();

    // Block tags sit on their own lines and must not leave blank lines behind
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    env.add_template(COW_TESTS_TEMPLATE, embedded::COW_TESTS)
        .expect("Failed to load cow tests template");

    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Render the test section for one operator
///
/// The section ends with the closing brace of its last helper and a newline.
pub fn render_operator(op: &OperatorSpec, collaborator: &Collaborator) -> Result<String> {
    let template = engine().get_template(COW_TESTS_TEMPLATE)?;
    let ctx = context::BlockContext::from_operator(op, collaborator);
    let block = template.render(&ctx)?;
    tracing::trace!(operator = %op.name, bytes = block.len(), "rendered operator section");
    Ok(block)
}

/// Render every configured operator, in order, as the binary writes them
pub fn render_suite(config: &GeneratorConfig) -> Result<String> {
    let mut out = String::new();
    for op in &config.operators {
        out.push_str(&render_operator(op, &config.collaborator)?);
        out.push('\n');
    }
    Ok(out)
}

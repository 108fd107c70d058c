//! Template context structures
//!
//! Converts an [`OperatorSpec`] into template-friendly data. All identifiers
//! and statements are assembled here; the template only lays them out.

use crate::config::{Collaborator, OperatorSpec};
use crate::scenario::{Binding, Scenario, Tier, TierPair};
use serde::Serialize;

/// Context for one operator section
#[derive(Debug, Clone, Serialize)]
pub struct BlockContext {
    /// Operator display name (section header)
    pub name: String,
    /// Big integer type name
    pub big_int: String,
    /// Tests in [`Scenario::ALL`] order
    pub tests: Vec<TestView>,
}

/// View of one generated test and the helpers that follow it
#[derive(Debug, Clone, Serialize)]
pub struct TestView {
    pub fn_name: String,
    /// Whether the doc comment is emitted
    pub documented: bool,
    /// Whether each case binds a `copy` of the value
    pub copies: bool,
    /// Cases in [`TierPair::ALL`] order
    pub cases: Vec<CaseView>,
    /// Private helpers, empty unless the test goes through `inout`
    pub helpers: Vec<HelperView>,
}

/// View of one tier-pair case
#[derive(Debug, Clone, Serialize)]
pub struct CaseView {
    pub comment: String,
    /// `var ` on the first case, empty afterwards
    pub decl: &'static str,
    pub lhs_max: String,
    pub statement: String,
    pub assertion: String,
}

/// View of a private `inout` helper
#[derive(Debug, Clone, Serialize)]
pub struct HelperView {
    pub name: String,
    pub statement: String,
}

impl BlockContext {
    pub fn from_operator(op: &OperatorSpec, collaborator: &Collaborator) -> Self {
        let tests = Scenario::ALL
            .iter()
            .map(|&scenario| TestView::from_scenario(scenario, op, collaborator))
            .collect();

        Self {
            name: op.name.clone(),
            big_int: collaborator.big_int_type.clone(),
            tests,
        }
    }
}

impl TestView {
    fn from_scenario(scenario: Scenario, op: &OperatorSpec, collaborator: &Collaborator) -> Self {
        let assertion = scenario.expectation().assertion(collaborator);

        let cases = TierPair::ALL
            .iter()
            .enumerate()
            .map(|(i, &pair)| CaseView {
                comment: pair.comment(op),
                decl: if i == 0 { "var " } else { "" },
                lhs_max: pair.lhs.max_value(collaborator).to_string(),
                statement: scenario.statement(op, pair, collaborator),
                assertion: assertion.to_string(),
            })
            .collect();

        let helpers = match scenario.binding {
            Binding::Copy => Vec::new(),
            Binding::Inout => Tier::ALL
                .iter()
                .map(|&rhs| HelperView {
                    name: scenario.helper_name(op, rhs),
                    statement: scenario.form.apply(op, "value", rhs.fixture(collaborator)),
                })
                .collect(),
        };

        Self {
            fn_name: scenario.test_name(op),
            documented: scenario.is_documented(),
            copies: scenario.binding == Binding::Copy,
            cases,
            helpers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(name: &str, symbol: &str) -> BlockContext {
        BlockContext::from_operator(&OperatorSpec::new(name, symbol), &Collaborator::default())
    }

    #[test]
    fn test_block_shape() {
        let ctx = context("Mul", "*");
        assert_eq!(ctx.name, "Mul");
        assert_eq!(ctx.tests.len(), 4);
        for test in &ctx.tests {
            assert_eq!(test.cases.len(), 4);
            assert_eq!(test.cases[0].decl, "var ");
            assert!(test.cases[1..].iter().all(|c| c.decl.is_empty()));
        }

        let helper_counts: Vec<_> = ctx.tests.iter().map(|t| t.helpers.len()).collect();
        assert_eq!(helper_counts, [0, 2, 0, 2]);
    }

    #[test]
    fn test_helper_statements() {
        let ctx = context("Sub", "-");
        let bare: Vec<_> = ctx.tests[1].helpers.iter().map(|h| h.statement.as_str()).collect();
        let compound: Vec<_> = ctx.tests[3].helpers.iter().map(|h| h.statement.as_str()).collect();

        assert_eq!(bare, ["_ = value - self.smiValue", "_ = value - self.heapValue"]);
        assert_eq!(compound, ["value -= self.smiValue", "value -= self.heapValue"]);
        assert_eq!(ctx.tests[3].helpers[1].name, "subEqualHeap");
    }

    #[test]
    fn test_assertions_and_bases() {
        let ctx = context("Add", "+");
        let copy_equal = &ctx.tests[2];
        let inout_equal = &ctx.tests[3];

        assert!(copy_equal.cases.iter().all(|c| c.assertion == "XCTAssertEqual"));
        assert!(inout_equal.cases.iter().all(|c| c.assertion == "XCTAssertNotEqual"));

        let bases: Vec<_> = copy_equal.cases.iter().map(|c| c.lhs_max.as_str()).collect();
        assert_eq!(
            bases,
            ["SmiStorage.max", "SmiStorage.max", "HeapWord.max", "HeapWord.max"]
        );
    }
}

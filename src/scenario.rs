//! Scenario model for the generated copy-on-write tests
//!
//! Every operator gets the same four tests. Each test runs the operator over
//! all four storage-tier pairings, always in [`TierPair::ALL`] order so that
//! adding or reordering operators keeps diffs of the generated file small.

use crate::config::{Collaborator, OperatorSpec};

/// Storage tier of a `BigInt` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Stored inline
    Smi,
    /// Stored in a separately allocated buffer
    Heap,
}

impl Tier {
    /// Helper order: one helper per right-hand tier
    pub const ALL: [Tier; 2] = [Tier::Smi, Tier::Heap];

    /// Label used in case comments (`// smi + heap`)
    pub fn label(self) -> &'static str {
        match self {
            Tier::Smi => "smi",
            Tier::Heap => "heap",
        }
    }

    /// Suffix of the private helper names (`addSmi`, `addEqualHeap`)
    pub fn suffix(self) -> &'static str {
        match self {
            Tier::Smi => "Smi",
            Tier::Heap => "Heap",
        }
    }

    /// Maximum-value accessor used to build the left-hand value
    pub fn max_value(self, collaborator: &Collaborator) -> &str {
        match self {
            Tier::Smi => &collaborator.smi_max,
            Tier::Heap => &collaborator.heap_max,
        }
    }

    /// Fixture used as the right-hand operand
    pub fn fixture(self, collaborator: &Collaborator) -> &str {
        match self {
            Tier::Smi => &collaborator.smi_fixture,
            Tier::Heap => &collaborator.heap_fixture,
        }
    }
}

/// Left-hand tier × right-hand tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPair {
    pub lhs: Tier,
    pub rhs: Tier,
}

impl TierPair {
    pub const ALL: [TierPair; 4] = [
        TierPair::new(Tier::Smi, Tier::Smi),
        TierPair::new(Tier::Smi, Tier::Heap),
        TierPair::new(Tier::Heap, Tier::Smi),
        TierPair::new(Tier::Heap, Tier::Heap),
    ];

    pub const fn new(lhs: Tier, rhs: Tier) -> Self {
        Self { lhs, rhs }
    }

    /// Case comment, e.g. `heap * smi`
    pub fn comment(self, op: &OperatorSpec) -> String {
        format!("{} {} {}", self.lhs.label(), op.symbol, self.rhs.label())
    }
}

/// Which operator form a test exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorForm {
    /// `a OP b`, result discarded
    Bare,
    /// `a OP= b`
    Compound,
}

impl OperatorForm {
    fn name_infix(self) -> &'static str {
        match self {
            OperatorForm::Bare => "",
            OperatorForm::Compound => "Equal",
        }
    }

    /// Statement applying the operator to `target`
    pub fn apply(self, op: &OperatorSpec, target: &str, operand: &str) -> String {
        match self {
            OperatorForm::Bare => format!("_ = {} {} {}", target, op.symbol, operand),
            OperatorForm::Compound => format!("{} {} {}", target, op.compound_symbol(), operand),
        }
    }
}

/// How the value reaches the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Applied to a second binding holding a copy of the value
    Copy,
    /// Applied inside a private helper taking the value `inout`
    Inout,
}

impl Binding {
    fn label(self) -> &'static str {
        match self {
            Binding::Copy => "toCopy",
            Binding::Inout => "toInout",
        }
    }
}

/// What happens to the original value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Unchanged,
    Changed,
}

impl Expectation {
    fn label(self) -> &'static str {
        match self {
            Expectation::Unchanged => "doesNotModifyOriginal",
            Expectation::Changed => "doesModifyOriginal",
        }
    }

    /// Assertion function checking this expectation
    pub fn assertion(self, collaborator: &Collaborator) -> &str {
        match self {
            Expectation::Unchanged => &collaborator.assert_equal,
            Expectation::Changed => &collaborator.assert_not_equal,
        }
    }
}

/// One generated test: an operator form reached through a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub form: OperatorForm,
    pub binding: Binding,
}

impl Scenario {
    /// Order of the tests inside an operator section
    pub const ALL: [Scenario; 4] = [
        Scenario::new(OperatorForm::Bare, Binding::Copy),
        Scenario::new(OperatorForm::Bare, Binding::Inout),
        Scenario::new(OperatorForm::Compound, Binding::Copy),
        Scenario::new(OperatorForm::Compound, Binding::Inout),
    ];

    pub const fn new(form: OperatorForm, binding: Binding) -> Self {
        Self { form, binding }
    }

    /// Only mutating through `inout` is visible to the caller.
    pub fn expectation(self) -> Expectation {
        match (self.form, self.binding) {
            (OperatorForm::Compound, Binding::Inout) => Expectation::Changed,
            _ => Expectation::Unchanged,
        }
    }

    /// e.g. `test_addEqual_toInout_doesModifyOriginal`
    pub fn test_name(self, op: &OperatorSpec) -> String {
        format!(
            "test_{}{}_{}_{}",
            op.lower_name(),
            self.form.name_infix(),
            self.binding.label(),
            self.expectation().label()
        )
    }

    /// e.g. `addEqualSmi`
    pub fn helper_name(self, op: &OperatorSpec, rhs: Tier) -> String {
        format!("{}{}{}", op.lower_name(), self.form.name_infix(), rhs.suffix())
    }

    /// The bare-form tests explain why they exist at all.
    pub fn is_documented(self) -> bool {
        self.form == OperatorForm::Bare
    }

    /// Statement executed for one tier pair inside the test body
    pub fn statement(self, op: &OperatorSpec, pair: TierPair, collaborator: &Collaborator) -> String {
        match self.binding {
            Binding::Copy => self.form.apply(op, "copy", pair.rhs.fixture(collaborator)),
            Binding::Inout => format!("self.{}(toInout: &value)", self.helper_name(op, pair.rhs)),
        }
    }
}

// ============================================================================
// Operator Dispatch Table
// Closed set of operators keyed by operation identifier
// ============================================================================

use super::addition::Addition;
use super::subtraction::Subtraction;
use crate::domain::{DigitSequence, Operation};
use crate::interfaces::ArithmeticOperator;
use crate::numeric::{EngineError, EngineResult, Notation};
use arrayvec::ArrayVec;

/// Every arithmetic operator the engine knows about.
///
/// Multiply and divide are placeholders: they can be registered and selected,
/// but evaluating them reports `Unimplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add(Addition),
    Subtract(Subtraction),
    Multiply,
    Divide,
}

impl Operator {
    /// Operator implementing an identifier, if any. Extension commands have
    /// no operator.
    pub fn for_operation(operation: Operation) -> Option<Self> {
        match operation {
            Operation::Add => Some(Operator::Add(Addition)),
            Operation::Subtract => Some(Operator::Subtract(Subtraction)),
            Operation::Multiply => Some(Operator::Multiply),
            Operation::Divide => Some(Operator::Divide),
            Operation::Special(_) => None,
        }
    }
}

impl ArithmeticOperator for Operator {
    fn operation(&self) -> Operation {
        match self {
            Operator::Add(op) => op.operation(),
            Operator::Subtract(op) => op.operation(),
            Operator::Multiply => Operation::Multiply,
            Operator::Divide => Operation::Divide,
        }
    }

    fn compute(
        &self,
        notation: &Notation,
        first: &DigitSequence,
        second: &DigitSequence,
    ) -> EngineResult<DigitSequence> {
        match self {
            Operator::Add(op) => op.compute(notation, first, second),
            Operator::Subtract(op) => op.compute(notation, first, second),
            Operator::Multiply | Operator::Divide => {
                Err(EngineError::Unimplemented(self.operation()))
            },
        }
    }

    fn name(&self) -> &str {
        match self {
            Operator::Add(op) => op.name(),
            Operator::Subtract(op) => op.name(),
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }
}

/// Fixed-capacity table mapping operation identifiers to operators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorTable {
    entries: ArrayVec<Operator, 4>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add and subtract
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.entries.push(Operator::Add(Addition));
        table.entries.push(Operator::Subtract(Subtraction));
        table
    }

    /// Build a table from identifiers.
    ///
    /// # Errors
    /// `OperatorNotRegistered` for identifiers without an operator.
    pub fn from_operations(operations: &[Operation]) -> EngineResult<Self> {
        let mut table = Self::new();
        for &operation in operations {
            table.register(operation)?;
        }
        Ok(table)
    }

    /// Register the operator for an identifier. Registering twice is a no-op.
    pub fn register(&mut self, operation: Operation) -> EngineResult<()> {
        if self.find(operation).is_some() {
            return Ok(());
        }
        let operator =
            Operator::for_operation(operation).ok_or(EngineError::OperatorNotRegistered(operation))?;
        // One slot per variant
        self.entries
            .try_push(operator)
            .map_err(|_| EngineError::OperatorNotRegistered(operation))
    }

    pub fn find(&self, operation: Operation) -> Option<&Operator> {
        self.entries.iter().find(|op| op.handles(operation))
    }

    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.entries.iter().map(|op| op.operation())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

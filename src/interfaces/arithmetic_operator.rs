// ============================================================================
// Arithmetic Operator Interface
// Defines the contract shared by every registered operator
// ============================================================================

use crate::domain::{DigitSequence, Operation};
use crate::numeric::{EngineResult, Notation};

/// Capability of one entry in the operator table: identify by operator key
/// and compute a result from two operands.
///
/// Implementations: Addition, Subtraction, and the `Operator` dispatch enum.
pub trait ArithmeticOperator {
    /// Identifier matched against the session's pending operation
    fn operation(&self) -> Operation;

    /// Compute `first <op> second`.
    ///
    /// # Arguments
    /// * `notation` - Engine context (base and separator)
    /// * `first` - Left operand
    /// * `second` - Right operand
    ///
    /// # Errors
    /// Operators define their own preconditions, e.g. same-sign operands.
    fn compute(
        &self,
        notation: &Notation,
        first: &DigitSequence,
        second: &DigitSequence,
    ) -> EngineResult<DigitSequence>;

    /// Get the operator name for logging
    fn name(&self) -> &str;

    /// Whether this operator answers to the given identifier
    fn handles(&self, operation: Operation) -> bool {
        self.operation() == operation
    }
}

// ============================================================================
// Sign Resolution
// Rewrites (operation, A, B) so digit-wise operators only see same signs
// ============================================================================

use crate::domain::{DigitSequence, Operation};
use crate::numeric::{EngineError, EngineResult};

/// Operation and operands after sign rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub operation: Operation,
    pub first: DigitSequence,
    pub second: DigitSequence,
}

impl Resolved {
    fn unchanged(operation: Operation, first: DigitSequence, second: DigitSequence) -> Self {
        Self {
            operation,
            first,
            second,
        }
    }
}

/// Rewrite a binary operation so that add receives same-sign operands and
/// subtract is unambiguous.
///
/// | request | A | B | rewrite |
/// |---|---|---|---|
/// | add | ± | same | unchanged |
/// | add | − | + | subtract(B, \|A\|) |
/// | add | + | − | subtract(A, \|B\|) |
/// | subtract | ± | same | unchanged |
/// | subtract | − | + | add(A, −B) |
/// | subtract | + | − | add(A, \|B\|) |
///
/// Extension commands pass through untouched.
///
/// # Errors
/// Returns `SignRuleUnimplemented` for multiply and divide, which have no
/// rewriting rule yet.
pub fn resolve_signs(
    operation: Operation,
    mut first: DigitSequence,
    mut second: DigitSequence,
) -> EngineResult<Resolved> {
    let same_sign = first.is_negative() == second.is_negative();

    let resolved = match operation {
        Operation::Add | Operation::Subtract if same_sign => {
            Resolved::unchanged(operation, first, second)
        },
        Operation::Add if first.is_negative() => {
            first.toggle_sign();
            Resolved {
                operation: Operation::Subtract,
                first: second,
                second: first,
            }
        },
        Operation::Add => {
            second.toggle_sign();
            Resolved::unchanged(Operation::Subtract, first, second)
        },
        Operation::Subtract => {
            second.toggle_sign();
            Resolved::unchanged(Operation::Add, first, second)
        },
        Operation::Multiply | Operation::Divide => {
            return Err(EngineError::SignRuleUnimplemented(operation));
        },
        Operation::Special(_) => Resolved::unchanged(operation, first, second),
    };

    tracing::trace!(
        requested = %operation,
        resolved = %resolved.operation,
        "Signs resolved"
    );
    Ok(resolved)
}

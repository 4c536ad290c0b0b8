// ============================================================================
// Addition Operator
// Digit-by-digit addition with carry propagation in the configured base
// ============================================================================

use super::alignment::{level_up_numbers, remove_extra_zeroes};
use crate::domain::digits::Symbols;
use crate::domain::{DigitSequence, Operation};
use crate::interfaces::ArithmeticOperator;
use crate::numeric::{EngineError, EngineResult, Notation};

/// Adds two same-sign operands.
///
/// Positions are scanned from least to most significant. A position sum that
/// reaches the base emits `sum - base` and carries one. Separator positions
/// are copied through, which is sound because both operands are aligned to
/// identical shape first. A final carry becomes a new leading digit.
///
/// # Example
/// ```text
/// base 10:  "99" + "1"  = "100"
/// base 8:   "7"  + "1"  = "10"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Addition;

impl Addition {
    pub fn new() -> Self {
        Self
    }
}

impl ArithmeticOperator for Addition {
    fn operation(&self) -> Operation {
        Operation::Add
    }

    fn compute(
        &self,
        notation: &Notation,
        first: &DigitSequence,
        second: &DigitSequence,
    ) -> EngineResult<DigitSequence> {
        if first.is_negative() != second.is_negative() {
            return Err(EngineError::MixedSigns);
        }

        let radix = notation.radix;
        let (first, second) = level_up_numbers(first, second);
        let mut sum = Symbols::from_slice(first.symbols());
        let mut carry = 0u8;

        for (i, (&a, &b)) in first
            .symbols()
            .iter()
            .zip(second.symbols())
            .enumerate()
            .rev()
        {
            match (radix.digit_value(a), radix.digit_value(b)) {
                (Some(x), Some(y)) => {
                    let total = x + y + carry;
                    if total >= radix.get() {
                        sum[i] = radix.symbol_for(total - radix.get());
                        carry = 1;
                    } else {
                        sum[i] = radix.symbol_for(total);
                        carry = 0;
                    }
                },
                // Separator, copied from the left operand
                _ if a == b && a == first.separator() => {},
                (None, _) => return Err(EngineError::InvalidDigit(a as char)),
                (_, None) => return Err(EngineError::InvalidDigit(b as char)),
            }
        }

        if carry > 0 {
            sum.insert(0, radix.symbol_for(carry));
        }

        let result = DigitSequence::from_parts(&sum, first.is_negative(), first.separator());
        let mut result = remove_extra_zeroes(result);
        if result.is_zero() {
            result.set_negative(false);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Addition"
    }
}

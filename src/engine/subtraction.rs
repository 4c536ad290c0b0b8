// ============================================================================
// Subtraction Operator
// Digit-by-digit subtraction with borrow propagation in the configured base
// ============================================================================

use super::alignment::{level_up_numbers, remove_extra_zeroes, strip_leading_zeroes};
use crate::domain::digits::Symbols;
use crate::domain::{DigitSequence, Operation};
use crate::interfaces::ArithmeticOperator;
use crate::numeric::{EngineError, EngineResult, Notation, Radix};
use std::cmp::Ordering;

/// Subtracts two same-sign operands.
///
/// The smaller magnitude is taken from the larger one. The result carries the
/// first operand's sign when `|A| >= |B|` and the opposite sign otherwise;
/// zero is never negative.
///
/// # Example
/// ```text
/// "3"  - "5"  = "-2"
/// "-5" - "-3" = "-2"
/// "100" - "99" = "1"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subtraction;

impl Subtraction {
    pub fn new() -> Self {
        Self
    }
}

/// Compare aligned magnitudes position by position.
fn compare_magnitudes(radix: Radix, first: &[u8], second: &[u8]) -> EngineResult<Ordering> {
    for (&a, &b) in first.iter().zip(second) {
        let ordering = match (radix.digit_value(a), radix.digit_value(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ if a == b => Ordering::Equal,
            (None, _) => return Err(EngineError::InvalidDigit(a as char)),
            (_, None) => return Err(EngineError::InvalidDigit(b as char)),
        };
        if ordering != Ordering::Equal {
            return Ok(ordering);
        }
    }
    Ok(Ordering::Equal)
}

impl ArithmeticOperator for Subtraction {
    fn operation(&self) -> Operation {
        Operation::Subtract
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

        let (larger, smaller, negative) =
            match compare_magnitudes(radix, first.symbols(), second.symbols())? {
                Ordering::Less => (&second, &first, !first.is_negative()),
                _ => (&first, &second, first.is_negative()),
            };

        let mut difference = Symbols::from_slice(larger.symbols());
        let mut borrow = 0u8;

        for (i, (&a, &b)) in larger
            .symbols()
            .iter()
            .zip(smaller.symbols())
            .enumerate()
            .rev()
        {
            // Both are digits here; separators were checked by the comparison
            if let (Some(x), Some(y)) = (radix.digit_value(a), radix.digit_value(b)) {
                let subtrahend = y + borrow;
                if x >= subtrahend {
                    difference[i] = radix.symbol_for(x - subtrahend);
                    borrow = 0;
                } else {
                    difference[i] = radix.symbol_for(x + radix.get() - subtrahend);
                    borrow = 1;
                }
            }
        }

        let result = strip_leading_zeroes(DigitSequence::from_parts(
            &difference,
            negative,
            first.separator(),
        ));
        let mut result = remove_extra_zeroes(result);
        if result.is_zero() {
            result.set_negative(false);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Subtraction"
    }
}

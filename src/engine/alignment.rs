// ============================================================================
// Alignment Engine
// Zero-pads two digit sequences so digit positions line up
// ============================================================================

use crate::domain::digits::{DigitSequence, Symbols};
use crate::numeric::ZERO_SYMBOL;

/// Level two operands so their integer parts and fractional parts have
/// matching lengths.
///
/// Integer parts align at the separator, so they are padded on the left.
/// Fractional parts align right after it, so they are padded on the right.
/// Signs are preserved.
///
/// # Example
/// ```text
/// "12.5" , "3.75"  ->  "12.50" , "03.75"
/// ```
pub fn level_up_numbers(
    first: &DigitSequence,
    second: &DigitSequence,
) -> (DigitSequence, DigitSequence) {
    let (first_int, first_frac) = first.split_at_separator();
    let (second_int, second_frac) = second.split_at_separator();

    let int_width = first_int.len().max(second_int.len());
    let frac_width = first_frac.len().max(second_frac.len());

    let first_leveled = join_parts(
        &pad_left(first_int, int_width),
        &pad_right(first_frac, frac_width),
        first.separator(),
    );
    let second_leveled = join_parts(
        &pad_left(second_int, int_width),
        &pad_right(second_frac, frac_width),
        second.separator(),
    );

    (
        DigitSequence::from_parts(&first_leveled, first.is_negative(), first.separator()),
        DigitSequence::from_parts(&second_leveled, second.is_negative(), second.separator()),
    )
}

fn pad_left(part: &[u8], width: usize) -> Symbols {
    let mut padded = Symbols::with_capacity(width);
    padded.extend(std::iter::repeat(ZERO_SYMBOL).take(width.saturating_sub(part.len())));
    padded.extend_from_slice(part);
    padded
}

fn pad_right(part: &[u8], width: usize) -> Symbols {
    let mut padded = Symbols::from_slice(part);
    padded.resize(width.max(part.len()), ZERO_SYMBOL);
    padded
}

/// Rejoin integer and fractional parts. The separator is only written when
/// a fractional part exists.
fn join_parts(integer: &[u8], fraction: &[u8], separator: u8) -> Symbols {
    let mut joined = Symbols::with_capacity(integer.len() + fraction.len() + 1);
    joined.extend_from_slice(integer);
    if !fraction.is_empty() {
        joined.push(separator);
        joined.extend_from_slice(fraction);
    }
    joined
}

/// Drop the fractional part when every fractional digit is zero.
/// `"4.00"` becomes `"4"`, `"4.05"` is returned unchanged.
pub fn remove_extra_zeroes(result: DigitSequence) -> DigitSequence {
    let (integer, fraction) = result.split_at_separator();
    if !fraction.is_empty() && fraction.iter().all(|&s| s == ZERO_SYMBOL) {
        return DigitSequence::from_parts(integer, result.is_negative(), result.separator());
    }
    result
}

/// Strip zeros ahead of the most significant non-zero integer digit,
/// keeping at least one integer digit.
pub fn strip_leading_zeroes(result: DigitSequence) -> DigitSequence {
    let (integer, _) = result.split_at_separator();
    let excess = integer
        .iter()
        .take(integer.len().saturating_sub(1))
        .take_while(|&&s| s == ZERO_SYMBOL)
        .count();

    if excess == 0 {
        return result;
    }
    DigitSequence::from_parts(
        &result.symbols()[excess..],
        result.is_negative(),
        result.separator(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> DigitSequence {
        text.parse().unwrap()
    }

    #[test]
    fn test_level_integer_parts() {
        let (a, b) = level_up_numbers(&seq("12345"), &seq("67"));
        assert_eq!(a.digits(), "12345");
        assert_eq!(b.digits(), "00067");
    }

    #[test]
    fn test_level_fractional_parts() {
        let (a, b) = level_up_numbers(&seq("1.5"), &seq("2.125"));
        assert_eq!(a.digits(), "1.500");
        assert_eq!(b.digits(), "2.125");
    }

    #[test]
    fn test_level_mixed() {
        let (a, b) = level_up_numbers(&seq("12.5"), &seq("3"));
        assert_eq!(a.digits(), "12.5");
        assert_eq!(b.digits(), "03.0");
    }

    #[test]
    fn test_level_preserves_sign() {
        let (a, b) = level_up_numbers(&seq("-1"), &seq("10"));
        assert!(a.is_negative());
        assert_eq!(a.digits(), "01");
        assert!(!b.is_negative());
    }

    #[test]
    fn test_level_trailing_separator_dropped() {
        let (a, b) = level_up_numbers(&seq("5."), &seq("1"));
        assert_eq!(a.digits(), "5");
        assert_eq!(b.digits(), "1");
    }

    #[test]
    fn test_level_empty() {
        let (a, b) = level_up_numbers(&DigitSequence::new(), &DigitSequence::new());
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn test_remove_extra_zeroes() {
        assert_eq!(remove_extra_zeroes(seq("4.00")).digits(), "4");
        assert_eq!(remove_extra_zeroes(seq("4.05")).digits(), "4.05");
        assert_eq!(remove_extra_zeroes(seq("40")).digits(), "40");
        assert!(remove_extra_zeroes(seq("-3.0")).is_negative());
    }

    #[test]
    fn test_strip_leading_zeroes() {
        assert_eq!(strip_leading_zeroes(seq("1.5")).digits(), "1.5");
        assert_eq!(
            strip_leading_zeroes(DigitSequence::from_parts(b"0012", false, b'.')).digits(),
            "12"
        );
        assert_eq!(
            strip_leading_zeroes(DigitSequence::from_parts(b"000.25", false, b'.')).digits(),
            "0.25"
        );
        assert_eq!(
            strip_leading_zeroes(DigitSequence::from_parts(b"000", false, b'.')).digits(),
            "0"
        );
    }
}

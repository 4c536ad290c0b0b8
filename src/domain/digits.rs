// ============================================================================
// Digit Sequence Domain Model
// Positional-notation operand stored as an array of digit symbols
// ============================================================================

use crate::numeric::{EngineError, EngineResult, Notation, Radix, DEFAULT_SEPARATOR, ZERO_SYMBOL};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline storage covers the usual display widths without allocating.
pub type Symbols = SmallVec<[u8; 24]>;

/// Echo of a single accepted symbol, used to build display events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Echo {
    pub symbol: char,
    /// The append replaced the sequence (empty or leading-zero overwrite)
    pub reset: bool,
    pub negative: bool,
}

/// One operand: digit symbols (most significant first), at most one decimal
/// separator, and a sign flag.
///
/// An empty sequence means "nothing entered yet" and is distinct from zero,
/// which is the single symbol `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitSequence {
    symbols: Symbols,
    negative: bool,
    separator: u8,
}

impl DigitSequence {
    /// Empty sequence using the default `.` separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: u8) -> Self {
        Self {
            symbols: Symbols::new(),
            negative: false,
            separator,
        }
    }

    /// Build directly from stored symbols, bypassing the input rules.
    ///
    /// Used for computed results; keystroke input goes through
    /// [`DigitSequence::append_digit`] and [`DigitSequence::append_separator`].
    pub fn from_parts(symbols: &[u8], negative: bool, separator: u8) -> Self {
        Self {
            symbols: Symbols::from_slice(symbols),
            negative,
            separator,
        }
    }

    /// Parse a whole string by feeding each character through the append
    /// rules, so `"007"` becomes `"7"`. A leading `-` sets the sign.
    ///
    /// # Errors
    /// - `InvalidDigit` for a symbol that is neither a digit nor a separator
    /// - `DuplicateSeparator` for a second separator
    pub fn parse(text: &str, notation: &Notation) -> EngineResult<Self> {
        let mut sequence = Self::with_separator(notation.separator);
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut separator_used = false;
        for ch in body.chars() {
            let symbol = u8::try_from(ch).map_err(|_| EngineError::InvalidDigit(ch))?;
            if let Some(digit) = notation.radix.normalize(symbol) {
                sequence.append_digit(digit, separator_used);
            } else if notation.is_separator(symbol) {
                if separator_used {
                    return Err(EngineError::DuplicateSeparator);
                }
                separator_used = true;
                sequence.append_separator();
            } else {
                return Err(EngineError::InvalidDigit(ch));
            }
        }

        sequence.negative = negative;
        Ok(sequence)
    }

    /// Convert a decimal into a base-10 sequence.
    pub fn from_decimal(value: Decimal, separator: u8) -> EngineResult<Self> {
        Self::parse(
            &value.to_string(),
            &Notation::new(Radix::DECIMAL, separator),
        )
    }

    // ========================================================================
    // Input rules
    // ========================================================================

    /// Append one digit symbol.
    ///
    /// An empty sequence, or a lone `0` while no separator has been used,
    /// is replaced by the new symbol and the echo reports a reset.
    pub fn append_digit(&mut self, symbol: u8, separator_used: bool) -> Echo {
        let reset = self.symbols.is_empty()
            || (self.symbols.as_slice() == [ZERO_SYMBOL] && !separator_used);

        if reset {
            self.symbols.clear();
        }
        self.symbols.push(symbol);

        Echo {
            symbol: symbol as char,
            reset,
            negative: self.negative,
        }
    }

    /// Append the decimal separator, synthesizing a leading zero when the
    /// sequence is empty so the separator is never rendered first.
    ///
    /// Returns one echo per stored symbol. A sequence that already holds a
    /// separator is left unchanged and yields no echoes.
    pub fn append_separator(&mut self) -> SmallVec<[Echo; 2]> {
        let mut echoes = SmallVec::new();
        if self.has_separator() {
            return echoes;
        }

        let reset = self.symbols.is_empty();
        if reset {
            self.symbols.push(ZERO_SYMBOL);
            echoes.push(Echo {
                symbol: ZERO_SYMBOL as char,
                reset: true,
                negative: self.negative,
            });
        }

        self.symbols.push(self.separator);
        echoes.push(Echo {
            symbol: self.separator as char,
            reset: false,
            negative: self.negative,
        });
        echoes
    }

    /// Flip the sign; digits are untouched. Returns the new sign.
    pub fn toggle_sign(&mut self) -> bool {
        self.negative = !self.negative;
        self.negative
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    /// Copy with the sign flipped.
    pub fn negated(&self) -> Self {
        let mut flipped = self.clone();
        flipped.toggle_sign();
        flipped
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Stored symbol count, separator included.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn separator(&self) -> u8 {
        self.separator
    }

    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn has_separator(&self) -> bool {
        self.symbols.contains(&self.separator)
    }

    /// Split into (integer part, fractional part). Without a separator the
    /// whole sequence is the integer part.
    pub fn split_at_separator(&self) -> (&[u8], &[u8]) {
        match self.symbols.iter().position(|&s| s == self.separator) {
            Some(pos) => (&self.symbols[..pos], &self.symbols[pos + 1..]),
            None => (&self.symbols, &[]),
        }
    }

    /// True when every digit is `0`. Empty sequences are not zero.
    pub fn is_zero(&self) -> bool {
        !self.is_empty()
            && self
                .symbols
                .iter()
                .all(|&s| s == ZERO_SYMBOL || s == self.separator)
    }

    /// Symbols as text, without the sign.
    pub fn digits(&self) -> String {
        self.symbols.iter().map(|&s| s as char).collect()
    }

    /// Convert to a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `NotBase10` unless `radix` is decimal
    /// - `DecimalConversion` for empty sequences or values beyond 28 digits
    pub fn to_decimal(&self, radix: Radix) -> EngineResult<Decimal> {
        if radix != Radix::DECIMAL {
            return Err(EngineError::NotBase10);
        }
        if self.is_empty() {
            return Err(EngineError::DecimalConversion);
        }

        let (integer, fraction) = self.split_at_separator();
        let mut text = String::with_capacity(self.len() + 2);
        if self.negative {
            text.push('-');
        }
        if integer.is_empty() {
            text.push('0');
        } else {
            text.extend(integer.iter().map(|&s| s as char));
        }
        if !fraction.is_empty() {
            text.push('.');
            text.extend(fraction.iter().map(|&s| s as char));
        }

        Decimal::from_str_exact(&text).map_err(|_| EngineError::DecimalConversion)
    }
}

impl Default for DigitSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_empty() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.digits())
    }
}

impl FromStr for DigitSequence {
    type Err = EngineError;

    /// Parse with the default base-10 notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Notation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> DigitSequence {
        text.parse().unwrap()
    }

    #[test]
    fn test_leading_zero_overwrite() {
        let mut number = DigitSequence::new();

        let first = number.append_digit(b'0', false);
        assert!(first.reset);
        assert_eq!(number.digits(), "0");

        let second = number.append_digit(b'5', false);
        assert!(second.reset);
        assert_eq!(second.symbol, '5');
        assert_eq!(number.digits(), "5");

        let third = number.append_digit(b'3', false);
        assert!(!third.reset);
        assert_eq!(number.digits(), "53");
    }

    #[test]
    fn test_zero_kept_once_separator_used() {
        let mut number = DigitSequence::new();
        number.append_separator();
        let echo = number.append_digit(b'0', true);
        assert!(!echo.reset);
        assert_eq!(number.digits(), "0.0");
    }

    #[test]
    fn test_separator_first_synthesizes_zero() {
        let mut number = DigitSequence::new();
        let echoes = number.append_separator();

        assert_eq!(number.digits(), "0.");
        assert_eq!(echoes.len(), 2);
        assert_eq!(echoes[0].symbol, '0');
        assert!(echoes[0].reset);
        assert_eq!(echoes[1].symbol, '.');
        assert!(!echoes[1].reset);
    }

    #[test]
    fn test_duplicate_separator_ignored() {
        let mut number = seq("1.5");
        assert!(number.append_separator().is_empty());
        assert_eq!(number.digits(), "1.5");
    }

    #[test]
    fn test_toggle_sign() {
        let mut number = seq("42");
        assert!(number.toggle_sign());
        assert_eq!(number.to_string(), "-42");
        assert_eq!(number.digits(), "42");
        assert!(!number.toggle_sign());
    }

    #[test]
    fn test_empty_is_not_zero() {
        let empty = DigitSequence::new();
        assert!(empty.is_empty());
        assert!(!empty.is_zero());
        assert!(seq("0").is_zero());
        assert!(seq("0.00").is_zero());
        assert!(!seq("0.01").is_zero());
    }

    #[test]
    fn test_split_at_separator() {
        let number = seq("123.45");
        let (integer, fraction) = number.split_at_separator();
        assert_eq!(integer, b"123");
        assert_eq!(fraction, b"45");

        let whole = seq("77");
        let (integer, fraction) = whole.split_at_separator();
        assert_eq!(integer, b"77");
        assert!(fraction.is_empty());
    }

    #[test]
    fn test_parse_applies_input_rules() {
        assert_eq!(seq("007").digits(), "7");
        assert_eq!(seq(".5").digits(), "0.5");
        assert_eq!(seq("-3,25").to_string(), "-3.25");
        assert_eq!("1.2.3".parse::<DigitSequence>(), Err(EngineError::DuplicateSeparator));
        assert_eq!("12a".parse::<DigitSequence>(), Err(EngineError::InvalidDigit('a')));
    }

    #[test]
    fn test_parse_with_radix() {
        let hex = Notation::new(Radix::HEXADECIMAL, b'.');
        assert_eq!(DigitSequence::parse("ff", &hex).unwrap().digits(), "FF");

        let binary = Notation::new(Radix::BINARY, b'.');
        assert_eq!(
            DigitSequence::parse("102", &binary),
            Err(EngineError::InvalidDigit('2'))
        );
    }

    #[test]
    fn test_custom_separator_is_stored() {
        let notation = Notation::new(Radix::DECIMAL, b',');
        let number = DigitSequence::parse("1.5", &notation).unwrap();
        assert_eq!(number.digits(), "1,5");
        assert_eq!(number.split_at_separator(), (&b"1"[..], &b"5"[..]));
    }

    #[test]
    fn test_decimal_conversion() {
        let number = seq("-12.50");
        assert_eq!(number.to_decimal(Radix::DECIMAL).unwrap(), Decimal::new(-1250, 2));
        assert_eq!(number.to_decimal(Radix::OCTAL), Err(EngineError::NotBase10));
        assert_eq!(
            DigitSequence::new().to_decimal(Radix::DECIMAL),
            Err(EngineError::DecimalConversion)
        );

        let back = DigitSequence::from_decimal(Decimal::new(305, 1), b'.').unwrap();
        assert_eq!(back.to_string(), "30.5");
    }
}

// ============================================================================
// Radix and Notation
// Digit symbol tables for positional notation in bases 2 to 16
// ============================================================================

use super::errors::{EngineError, EngineResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit symbols in ascending value order.
const SYMBOLS: &[u8; 16] = b"0123456789ABCDEF";

/// The zero digit, shared by every supported base.
pub const ZERO_SYMBOL: u8 = b'0';

/// Decimal separator used when none is configured.
pub const DEFAULT_SEPARATOR: u8 = b'.';

/// Validated numeric base.
///
/// Only the first `radix` entries of `0-9A-F` are digits. Lower-case hex
/// letters are accepted on input and normalized to upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Radix(u8);

impl Radix {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 16;

    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    /// Create a radix, rejecting bases without a symbol table.
    pub fn new(base: u8) -> EngineResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Self(base))
        } else {
            Err(EngineError::InvalidRadix(base))
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Value of a digit symbol, or `None` if the symbol is not a digit in
    /// this base.
    #[inline]
    pub fn digit_value(self, symbol: u8) -> Option<u8> {
        let value = match symbol.to_ascii_uppercase() {
            s @ b'0'..=b'9' => s - b'0',
            s @ b'A'..=b'F' => s - b'A' + 10,
            _ => return None,
        };
        (value < self.0).then_some(value)
    }

    /// Canonical symbol for a digit value. Values are reduced modulo the base.
    #[inline]
    pub fn symbol_for(self, value: u8) -> u8 {
        SYMBOLS[(value % self.0) as usize]
    }

    #[inline]
    pub fn is_digit(self, symbol: u8) -> bool {
        self.digit_value(symbol).is_some()
    }

    /// Normalize a typed digit to its stored symbol.
    #[inline]
    pub fn normalize(self, symbol: u8) -> Option<u8> {
        self.digit_value(symbol).map(|value| self.symbol_for(value))
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl TryFrom<u8> for Radix {
    type Error = EngineError;

    fn try_from(base: u8) -> Result<Self, Self::Error> {
        Self::new(base)
    }
}

impl From<Radix> for u8 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base {}", self.0)
    }
}

/// Engine context handed to every operator: the base and the separator
/// symbol stored inside digit sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notation {
    pub radix: Radix,
    pub separator: u8,
}

impl Notation {
    pub const fn new(radix: Radix, separator: u8) -> Self {
        Self { radix, separator }
    }

    /// True for the configured separator and the two keyboard separators.
    #[inline]
    pub fn is_separator(&self, symbol: u8) -> bool {
        symbol == self.separator || symbol == b'.' || symbol == b','
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::new(Radix::DECIMAL, DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_bounds() {
        assert!(Radix::new(2).is_ok());
        assert!(Radix::new(16).is_ok());
        assert_eq!(Radix::new(1), Err(EngineError::InvalidRadix(1)));
        assert_eq!(Radix::new(17), Err(EngineError::InvalidRadix(17)));
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(Radix::DECIMAL.digit_value(b'9'), Some(9));
        assert_eq!(Radix::OCTAL.digit_value(b'8'), None);
        assert_eq!(Radix::HEXADECIMAL.digit_value(b'f'), Some(15));
        assert_eq!(Radix::DECIMAL.digit_value(b'A'), None);
        assert_eq!(Radix::BINARY.digit_value(b'.'), None);
    }

    #[test]
    fn test_symbol_for() {
        assert_eq!(Radix::DECIMAL.symbol_for(7), b'7');
        assert_eq!(Radix::HEXADECIMAL.symbol_for(11), b'B');
        assert_eq!(Radix::HEXADECIMAL.normalize(b'c'), Some(b'C'));
    }

    #[test]
    fn test_separator_classification() {
        let notation = Notation::default();
        assert!(notation.is_separator(b'.'));
        assert!(notation.is_separator(b','));
        assert!(!notation.is_separator(b'+'));
    }
}

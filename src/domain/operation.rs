// ============================================================================
// Operation Identifiers and Keystroke Classification
// ============================================================================

use crate::numeric::{EngineError, EngineResult, Notation};
use std::fmt;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equals key.
pub const EQUALS_SYMBOL: u8 = b'=';

/// Pending operation identifier.
///
/// The four arithmetic identifiers live in the printable-ASCII operator block
/// (`*` to `/`). `Special` covers the reserved extension range above it, kept
/// for non-arithmetic commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Special(u8),
}

impl Operation {
    /// Identifiers reserved for extension commands.
    pub const SPECIAL_IDS: RangeInclusive<u8> = 101..=255;

    /// Map an operator key to its identifier.
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'+' => Some(Operation::Add),
            b'-' => Some(Operation::Subtract),
            b'*' => Some(Operation::Multiply),
            b'/' => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Build an extension identifier.
    ///
    /// # Errors
    /// Returns `InvalidOperatorId` for ids outside [`Operation::SPECIAL_IDS`].
    pub fn special(id: u8) -> EngineResult<Self> {
        if Self::SPECIAL_IDS.contains(&id) {
            Ok(Operation::Special(id))
        } else {
            Err(EngineError::InvalidOperatorId(id))
        }
    }

    /// Numeric identifier: the ASCII code of the operator key, or the
    /// extension id.
    pub fn id(self) -> u8 {
        match self {
            Operation::Add => b'+',
            Operation::Subtract => b'-',
            Operation::Multiply => b'*',
            Operation::Divide => b'/',
            Operation::Special(id) => id,
        }
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Operation::Special(_) => None,
            op => Some(op.id() as char),
        }
    }

    pub fn is_special(self) -> bool {
        matches!(self, Operation::Special(_))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "#{}", self.id()),
        }
    }
}

/// Classification of a single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSymbol {
    /// Digit of the configured base, already normalized to its stored symbol
    Digit(u8),
    Separator,
    Operator(Operation),
    Equals,
    Unsupported(char),
}

impl InputSymbol {
    /// Classify a keystroke. Separators are checked before operators because
    /// `,` and `.` sit inside the ASCII operator block.
    pub fn classify(ch: char, notation: &Notation) -> Self {
        if !ch.is_ascii() {
            return InputSymbol::Unsupported(ch);
        }
        let symbol = ch as u8;

        if let Some(digit) = notation.radix.normalize(symbol) {
            InputSymbol::Digit(digit)
        } else if notation.is_separator(symbol) {
            InputSymbol::Separator
        } else if let Some(op) = Operation::from_symbol(symbol) {
            InputSymbol::Operator(op)
        } else if symbol == EQUALS_SYMBOL {
            InputSymbol::Equals
        } else {
            InputSymbol::Unsupported(ch)
        }
    }
}

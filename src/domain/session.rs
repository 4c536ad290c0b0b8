// ============================================================================
// Calculator Session State
// Operand slots and input flags owned by one calculator session
// ============================================================================

use super::digits::DigitSequence;
use super::operation::Operation;
use crate::numeric::EngineError;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which operand receives digits. Derived from whether an operation is
/// pending; a displayed result is `AwaitingFirstOperand` with the
/// continuation flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputMode {
    AwaitingFirstOperand,
    AwaitingSecondOperand,
}

/// Scope of a clear request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearMode {
    /// "CE": only the operand currently receiving digits
    Entry,
    /// "C": the whole session
    All,
}

impl FromStr for ClearMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CE" => Ok(ClearMode::Entry),
            "C" => Ok(ClearMode::All),
            other => Err(EngineError::InvalidClearMode(other.to_string())),
        }
    }
}

/// Mutable state of one session.
///
/// Each transition in the engine documents which of these fields it reads
/// and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionState {
    pub first: DigitSequence,
    pub second: DigitSequence,
    pub pending: Option<Operation>,
    /// A separator was already typed into the open operand
    pub separator_used: bool,
    /// The next digit starts a fresh session instead of extending a result
    pub continuation: bool,
    separator: u8,
}

impl SessionState {
    pub fn new(separator: u8) -> Self {
        Self {
            first: DigitSequence::with_separator(separator),
            second: DigitSequence::with_separator(separator),
            pending: None,
            separator_used: false,
            continuation: false,
            separator,
        }
    }

    pub fn mode(&self) -> InputMode {
        match self.pending {
            None => InputMode::AwaitingFirstOperand,
            Some(_) => InputMode::AwaitingSecondOperand,
        }
    }

    pub fn open_operand(&self) -> &DigitSequence {
        match self.mode() {
            InputMode::AwaitingFirstOperand => &self.first,
            InputMode::AwaitingSecondOperand => &self.second,
        }
    }

    pub fn open_operand_mut(&mut self) -> &mut DigitSequence {
        match self.mode() {
            InputMode::AwaitingFirstOperand => &mut self.first,
            InputMode::AwaitingSecondOperand => &mut self.second,
        }
    }

    /// Both operand slots hold at least one symbol.
    pub fn operands_entered(&self) -> bool {
        !self.first.is_empty() && !self.second.is_empty()
    }

    /// Writes: every field.
    pub fn reset_all(&mut self) {
        *self = Self::new(self.separator);
    }

    /// Writes: the open operand, `separator_used`, `continuation`.
    pub fn reset_open(&mut self) {
        let separator = self.separator;
        *self.open_operand_mut() = DigitSequence::with_separator(separator);
        self.separator_used = false;
        self.continuation = false;
    }

    /// Writes: `pending`, `separator_used`, `continuation`.
    pub fn select_operation(&mut self, operation: Operation) {
        self.pending = Some(operation);
        self.separator_used = false;
        self.continuation = false;
    }

    /// Store an evaluation result as the first operand and open a fresh
    /// second operand behind the continuation flag.
    ///
    /// Writes: every field.
    pub fn commit_result(&mut self, result: DigitSequence) {
        self.first = result;
        self.second = DigitSequence::with_separator(self.separator);
        self.pending = None;
        self.separator_used = false;
        self.continuation = true;
    }
}

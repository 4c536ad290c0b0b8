// ============================================================================
// Engine Errors
// Error types for digit arithmetic and session requests
// ============================================================================

use crate::domain::Operation;
use std::fmt;

/// Errors that can occur while building, feeding or evaluating a calculator
/// session.
///
/// Rejected keystrokes (capacity reached, duplicate separator, equals with a
/// missing operand) are not errors: they are dropped without an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineError {
    /// Numeric base outside 2..=16
    InvalidRadix(u8),
    /// Symbol is not a digit of the configured base
    InvalidDigit(char),
    /// A second decimal separator in one number
    DuplicateSeparator,
    /// Digit-wise operator called with operands of different signs
    MixedSigns,
    /// Operator variant exists but has no arithmetic yet
    Unimplemented(Operation),
    /// No sign rewriting rule exists for the operation
    SignRuleUnimplemented(Operation),
    /// Pending operation has no entry in the operator table
    OperatorNotRegistered(Operation),
    /// Extension command id outside the reserved range
    InvalidOperatorId(u8),
    /// Clear mode other than "CE" or "C"
    InvalidClearMode(String),
    /// Configuration rejected by validation
    InvalidConfiguration(String),
    /// Conversion requires a base-10 sequence
    NotBase10,
    /// Sequence does not fit a `rust_decimal::Decimal`
    DecimalConversion,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidRadix(radix) => {
                write!(f, "invalid radix {}: supported bases are 2 to 16", radix)
            },
            EngineError::InvalidDigit(symbol) => {
                write!(f, "invalid digit '{}' for the configured base", symbol)
            },
            EngineError::DuplicateSeparator => {
                write!(f, "decimal separator may appear only once")
            },
            EngineError::MixedSigns => write!(
                f,
                "cannot combine numbers with different signs, resolve signs first"
            ),
            EngineError::Unimplemented(op) => {
                write!(f, "operation '{}' is not implemented", op)
            },
            EngineError::SignRuleUnimplemented(op) => {
                write!(f, "no sign resolution rule for operation '{}'", op)
            },
            EngineError::OperatorNotRegistered(op) => {
                write!(f, "operation '{}' is not registered", op)
            },
            EngineError::InvalidOperatorId(id) => {
                write!(f, "operator id {} is outside any supported range", id)
            },
            EngineError::InvalidClearMode(mode) => {
                write!(f, "core failure: unsupported clear mode '{}'", mode)
            },
            EngineError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            },
            EngineError::NotBase10 => write!(f, "decimal conversion requires base 10"),
            EngineError::DecimalConversion => {
                write!(f, "number does not fit a decimal value")
            },
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

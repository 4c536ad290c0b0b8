// ============================================================================
// Numeric Module
// Positional-notation primitives shared by the digit arithmetic
// ============================================================================
//
// This module provides:
// - Radix: validated numeric base (2-16) with its digit symbol table
// - Notation: radix plus decimal separator, the context every operator sees
// - EngineError: error type for arithmetic and session requests
//
// Design principles:
// - No native integer or floating-point arithmetic on operand values
// - All fallible operations return Result (no panics)

mod errors;
mod radix;

pub use errors::{EngineError, EngineResult};
pub use radix::{Notation, Radix, DEFAULT_SEPARATOR, ZERO_SYMBOL};

// ============================================================================
// Digit Calculator Library
// Arbitrary-length positional-notation calculator engine
// ============================================================================

//! # Digit Calculator
//!
//! A calculator engine that keeps numbers as sequences of digit symbols
//! instead of machine numbers, so operands are limited only by the
//! configured display width.
//!
//! ## Features
//!
//! - **Digit-array arithmetic** in any base from 2 to 16
//! - **Keystroke state machine** with first/second operand entry, continuation
//!   after a result and capacity limits
//! - **Sign resolution** that rewrites mixed-sign add/subtract into same-sign
//!   operations
//! - **Display events** delivered to pluggable handlers
//!
//! ## Example
//!
//! ```rust
//! use digit_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let recorder = Arc::new(RecordingEventHandler::new());
//! let mut calc = create_from_config(CalculatorConfig::standard(), recorder.clone()).unwrap();
//!
//! calc.submit_str("12.5+0.75=").unwrap();
//!
//! assert_eq!(calc.first().digits(), "13.25");
//! assert_eq!(
//!     recorder.last_payload(),
//!     Some(DisplayPayload::new("13.25", true, false))
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorConfig, ClearMode, DigitSequence, InputMode, Operation, SessionId,
    };
    pub use crate::engine::{
        create_from_config, level_up_numbers, Addition, Calculator, CalculatorBuilder,
        OperatorTable, Subtraction,
    };
    pub use crate::interfaces::{
        ArithmeticOperator, ChannelEventHandler, DisplayEvent, DisplayPayload, EventHandler,
        LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{EngineError, EngineResult, Notation, Radix};
}

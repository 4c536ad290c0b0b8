// ============================================================================
// Domain Models Module
// Operands, operation identifiers, session state and configuration
// ============================================================================

pub mod config;
pub mod digits;
pub mod operation;
pub mod session;

pub use config::{CalculatorConfig, DEFAULT_MAX_PLACES};
pub use digits::{DigitSequence, Echo};
pub use operation::{InputSymbol, Operation, EQUALS_SYMBOL};
pub use session::{ClearMode, InputMode, SessionId, SessionState};

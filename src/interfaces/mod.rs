// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod arithmetic_operator;
mod event_handler;

pub use arithmetic_operator::ArithmeticOperator;
#[cfg(feature = "async")]
pub use event_handler::AsyncChannelEventHandler;
pub use event_handler::{
    ChannelEventHandler, DisplayEvent, DisplayPayload, EventHandler, LoggingEventHandler,
    NoOpEventHandler, RecordingEventHandler, CLEARED_MARKER, OVERFLOW_MARKER,
};

// ============================================================================
// Event Handler Interface
// Defines the contract for delivering display updates to a presentation layer
// ============================================================================

use chrono::{DateTime, Utc};
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text shown when the display is cleared or an operator was selected
pub const CLEARED_MARKER: &str = "0";

/// Text shown when a result exceeds the configured capacity
pub const OVERFLOW_MARKER: &str = "E";

/// Events emitted by a calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayEvent {
    /// One symbol was accepted into the open operand
    SymbolAccepted {
        symbol: char,
        reset_display: bool,
        negative: bool,
        timestamp: DateTime<Utc>,
    },

    /// A whole number must be rendered (sign toggle, evaluation result)
    NumberShown {
        digits: String,
        reset_display: bool,
        negative: bool,
        timestamp: DateTime<Utc>,
    },

    /// Display reset to the cleared marker (operator selected, clear)
    DisplayCleared { timestamp: DateTime<Utc> },

    /// Evaluation result did not fit; operands are kept for correction
    Overflow { timestamp: DateTime<Utc> },
}

/// The boundary triple handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPayload {
    pub text: String,
    pub reset_display: bool,
    pub negative: bool,
}

impl DisplayPayload {
    pub fn new(text: impl Into<String>, reset_display: bool, negative: bool) -> Self {
        Self {
            text: text.into(),
            reset_display,
            negative,
        }
    }
}

impl DisplayEvent {
    pub fn symbol_accepted(symbol: char, reset_display: bool, negative: bool) -> Self {
        DisplayEvent::SymbolAccepted {
            symbol,
            reset_display,
            negative,
            timestamp: Utc::now(),
        }
    }

    pub fn number_shown(digits: String, reset_display: bool, negative: bool) -> Self {
        DisplayEvent::NumberShown {
            digits,
            reset_display,
            negative,
            timestamp: Utc::now(),
        }
    }

    pub fn display_cleared() -> Self {
        DisplayEvent::DisplayCleared {
            timestamp: Utc::now(),
        }
    }

    pub fn overflow() -> Self {
        DisplayEvent::Overflow {
            timestamp: Utc::now(),
        }
    }

    /// Flatten into `{ text, reset_display, negative }`
    pub fn payload(&self) -> DisplayPayload {
        match self {
            DisplayEvent::SymbolAccepted {
                symbol,
                reset_display,
                negative,
                ..
            } => DisplayPayload::new(symbol.to_string(), *reset_display, *negative),
            DisplayEvent::NumberShown {
                digits,
                reset_display,
                negative,
                ..
            } => DisplayPayload::new(digits.clone(), *reset_display, *negative),
            DisplayEvent::DisplayCleared { .. } => DisplayPayload::new(CLEARED_MARKER, true, false),
            DisplayEvent::Overflow { .. } => DisplayPayload::new(OVERFLOW_MARKER, true, false),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            DisplayEvent::SymbolAccepted { timestamp, .. }
            | DisplayEvent::NumberShown { timestamp, .. }
            | DisplayEvent::DisplayCleared { timestamp }
            | DisplayEvent::Overflow { timestamp } => *timestamp,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, DisplayEvent::Overflow { .. })
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Event handler trait for display updates.
/// Handlers are optional: a session with none still computes correctly.
pub trait EventHandler: Send + Sync {
    /// Handle a display event
    fn on_event(&self, event: DisplayEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<DisplayEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: DisplayEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: DisplayEvent) {
        tracing::debug!("Calculator display event: {:?}", event.payload());
    }
}

/// Keeps every event in memory, for tests and headless hosts
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<DisplayEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().clone()
    }

    pub fn payloads(&self) -> Vec<DisplayPayload> {
        self.events.lock().iter().map(DisplayEvent::payload).collect()
    }

    pub fn last_payload(&self) -> Option<DisplayPayload> {
        self.events.lock().last().map(DisplayEvent::payload)
    }

    /// Drain recorded events
    pub fn take(&self) -> Vec<DisplayEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: DisplayEvent) {
        self.events.lock().push(event);
    }
}

/// Forwards events over a crossbeam channel to a presentation thread
pub struct ChannelEventHandler {
    sender: Sender<DisplayEvent>,
}

impl ChannelEventHandler {
    /// Create a handler and the receiving end of its unbounded channel
    pub fn new() -> (Self, Receiver<DisplayEvent>) {
        let (sender, receiver) = channel::unbounded();
        (Self { sender }, receiver)
    }
}

impl EventHandler for ChannelEventHandler {
    fn on_event(&self, event: DisplayEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("Display receiver dropped, event discarded");
        }
    }
}

/// Forwards events into a tokio task
#[cfg(feature = "async")]
pub struct AsyncChannelEventHandler {
    sender: tokio::sync::mpsc::UnboundedSender<DisplayEvent>,
}

#[cfg(feature = "async")]
impl AsyncChannelEventHandler {
    pub fn new() -> (Self, tokio::sync::mpsc::UnboundedReceiver<DisplayEvent>) {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[cfg(feature = "async")]
impl EventHandler for AsyncChannelEventHandler {
    fn on_event(&self, event: DisplayEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("Async display receiver dropped, event discarded");
        }
    }
}

// ============================================================================
// Calculator Session
// Input state machine: keystroke routing, evaluation and display events
// ============================================================================

use super::operator::OperatorTable;
use super::sign::resolve_signs;
use crate::domain::{
    CalculatorConfig, ClearMode, DigitSequence, Echo, InputMode, InputSymbol, Operation,
    SessionId, SessionState,
};
use crate::interfaces::{ArithmeticOperator, DisplayEvent, EventHandler};
use crate::numeric::{EngineError, EngineResult, Notation};
use std::sync::Arc;

/// One long-lived calculator session.
///
/// Single-threaded and synchronous: every request runs to completion and
/// returns the display events it produced, in order. The same events are
/// pushed to every subscribed handler.
pub struct Calculator {
    /// Identifier recorded on every log line
    id: SessionId,

    /// Capacity, base, separator
    config: CalculatorConfig,

    /// Cached from the configuration
    notation: Notation,

    /// Registered operators
    operators: OperatorTable,

    /// Operand slots and input flags
    state: SessionState,

    /// Display subscribers, zero or more
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl Calculator {
    /// Create a new session.
    ///
    /// The configuration is used as-is; prefer
    /// [`create_from_config`](crate::engine::create_from_config), which
    /// validates it first.
    pub fn new(config: CalculatorConfig, operators: OperatorTable) -> Self {
        let notation = config.notation();
        let id = SessionId::new();
        tracing::debug!(
            session = %id,
            radix = notation.radix.get(),
            max_places = config.max_places,
            "Calculator session created"
        );

        Self {
            id,
            state: SessionState::new(notation.separator),
            notation,
            config,
            operators,
            handlers: Vec::new(),
        }
    }

    /// Register a display handler
    pub fn subscribe(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    // ========================================================================
    // Boundary operations
    // ========================================================================

    /// Feed one keystroke: digit, separator, operator or equals.
    ///
    /// Unsupported characters and rejected input produce no events.
    ///
    /// # Errors
    /// Evaluation errors (see [`Calculator::evaluate`]). The session is left
    /// unchanged when an error is returned.
    pub fn submit_char(&mut self, ch: char) -> EngineResult<Vec<DisplayEvent>> {
        let events = self.accept(ch)?;
        Ok(self.emit(events))
    }

    /// Feed a whole string, one character at a time.
    ///
    /// # Errors
    /// Stops at the first failing character. Events of the characters
    /// accepted before it have already reached the handlers.
    pub fn submit_str(&mut self, text: &str) -> EngineResult<Vec<DisplayEvent>> {
        let mut events = Vec::new();
        for ch in text.chars() {
            match self.accept(ch) {
                Ok(accepted) => events.extend(accepted),
                Err(error) => {
                    self.emit(events);
                    return Err(error);
                },
            }
        }
        Ok(self.emit(events))
    }

    /// Flip the sign of the open operand, if it holds anything.
    ///
    /// Reads: `pending`. Writes: the open operand's sign.
    pub fn toggle_sign(&mut self) -> Vec<DisplayEvent> {
        let operand = self.state.open_operand_mut();
        if operand.is_empty() {
            return Vec::new();
        }

        let negative = operand.toggle_sign();
        let event = DisplayEvent::number_shown(operand.digits(), true, negative);
        tracing::trace!(session = %self.id, negative, "Sign toggled");
        self.emit(vec![event])
    }

    /// Clear the open operand (`Entry`) or the whole session (`All`).
    pub fn clear(&mut self, mode: ClearMode) -> Vec<DisplayEvent> {
        match mode {
            ClearMode::Entry => self.state.reset_open(),
            ClearMode::All => self.state.reset_all(),
        }
        tracing::debug!(session = %self.id, ?mode, "Cleared");
        self.emit(vec![DisplayEvent::display_cleared()])
    }

    /// Clear by mode text: `"CE"` or `"C"`.
    ///
    /// # Errors
    /// `InvalidClearMode` for any other text; the session is untouched.
    pub fn request_clear(&mut self, mode: &str) -> EngineResult<Vec<DisplayEvent>> {
        let mode = mode.parse::<ClearMode>().map_err(|error| {
            tracing::warn!(session = %self.id, %error, "Clear request rejected");
            error
        })?;
        Ok(self.clear(mode))
    }

    /// Select an extension command id as the pending operation.
    ///
    /// # Errors
    /// `InvalidOperatorId` for ids outside [`Operation::SPECIAL_IDS`].
    pub fn select_special_action(&mut self, id: u8) -> EngineResult<Vec<DisplayEvent>> {
        let operation = Operation::special(id).map_err(|error| {
            tracing::warn!(session = %self.id, %error, "Extension command rejected");
            error
        })?;
        let events = self.select_operation(operation);
        Ok(self.emit(events))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> InputMode {
        self.state.mode()
    }

    pub fn first(&self) -> &DigitSequence {
        &self.state.first
    }

    pub fn second(&self) -> &DigitSequence {
        &self.state.second
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.state.pending
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn accept(&mut self, ch: char) -> EngineResult<Vec<DisplayEvent>> {
        let input = InputSymbol::classify(ch, &self.notation);
        tracing::trace!(session = %self.id, ?input, "Keystroke classified");

        match input {
            InputSymbol::Digit(symbol) => Ok(self.append_digit(symbol)),
            InputSymbol::Separator => Ok(self.append_separator()),
            InputSymbol::Operator(operation) => Ok(self.select_operation(operation)),
            InputSymbol::Equals => self.evaluate(),
            InputSymbol::Unsupported(_) => Ok(Vec::new()),
        }
    }

    /// Room for `needed` more symbols in the open operand
    fn has_capacity(&self, needed: usize) -> bool {
        self.state.open_operand().len() + needed <= self.config.max_places
    }

    /// Start over when a result is on display.
    ///
    /// Reads/writes: `continuation`, and every field when it is set.
    fn leave_result(&mut self) {
        if self.state.continuation {
            self.state.reset_all();
        }
    }

    /// Reads: `separator_used`. Writes: the open operand.
    fn append_digit(&mut self, symbol: u8) -> Vec<DisplayEvent> {
        if !self.has_capacity(1) {
            tracing::trace!(session = %self.id, "Digit rejected, capacity reached");
            return Vec::new();
        }
        self.leave_result();

        let separator_used = self.state.separator_used;
        let echo = self.state.open_operand_mut().append_digit(symbol, separator_used);
        vec![Self::echo_event(echo)]
    }

    /// Writes: `separator_used`, the open operand.
    fn append_separator(&mut self) -> Vec<DisplayEvent> {
        if self.state.separator_used {
            return Vec::new();
        }
        let needed = if self.state.open_operand().is_empty() { 2 } else { 1 };
        // A reset operand is empty again and needs room for the synthesized zero
        let room_after_reset = !self.state.continuation || self.config.max_places >= 2;
        if !self.has_capacity(needed) || !room_after_reset {
            tracing::trace!(session = %self.id, "Separator rejected, capacity reached");
            return Vec::new();
        }
        self.leave_result();

        self.state.separator_used = true;
        self.state
            .open_operand_mut()
            .append_separator()
            .into_iter()
            .map(Self::echo_event)
            .collect()
    }

    /// Writes: `pending`, `separator_used`, `continuation`.
    fn select_operation(&mut self, operation: Operation) -> Vec<DisplayEvent> {
        self.state.select_operation(operation);
        tracing::debug!(session = %self.id, %operation, "Operation selected");
        vec![DisplayEvent::display_cleared()]
    }

    /// Evaluate the pending operation.
    ///
    /// Ignored without a pending operation, with a missing operand, or when
    /// no operator is registered for the pending identifier. A result wider
    /// than the capacity yields an overflow event and leaves the session as
    /// it was. Otherwise the result becomes the first operand.
    ///
    /// # Errors
    /// - `SignRuleUnimplemented` for multiply and divide
    /// - `OperatorNotRegistered` if sign resolution needs a missing operator
    /// - operator errors from `compute`
    fn evaluate(&mut self) -> EngineResult<Vec<DisplayEvent>> {
        let Some(requested) = self.state.pending else {
            return Ok(Vec::new());
        };
        if !self.state.operands_entered() {
            return Ok(Vec::new());
        }
        if self.operators.find(requested).is_none() {
            tracing::debug!(session = %self.id, %requested, "No operator registered, ignored");
            return Ok(Vec::new());
        }

        let resolved = resolve_signs(
            requested,
            self.state.first.clone(),
            self.state.second.clone(),
        )?;
        let operator = self
            .operators
            .find(resolved.operation)
            .ok_or(EngineError::OperatorNotRegistered(resolved.operation))?;
        let result = operator.compute(&self.notation, &resolved.first, &resolved.second)?;

        if result.len() > self.config.max_places {
            tracing::warn!(
                session = %self.id,
                width = result.len(),
                max_places = self.config.max_places,
                "Result overflow"
            );
            return Ok(vec![DisplayEvent::overflow()]);
        }

        tracing::debug!(
            session = %self.id,
            operator = operator.name(),
            first = %self.state.first,
            second = %self.state.second,
            result = %result,
            "Evaluated"
        );

        let event = DisplayEvent::number_shown(result.digits(), true, result.is_negative());
        self.state.commit_result(result);
        Ok(vec![event])
    }

    fn echo_event(echo: Echo) -> DisplayEvent {
        DisplayEvent::symbol_accepted(echo.symbol, echo.reset, echo.negative)
    }

    fn emit(&self, events: Vec<DisplayEvent>) -> Vec<DisplayEvent> {
        if !events.is_empty() {
            for handler in &self.handlers {
                handler.on_events(events.clone());
            }
        }
        events
    }
}

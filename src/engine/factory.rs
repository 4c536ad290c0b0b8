// ============================================================================
// Calculator Factory
// Creates calculator sessions from validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::{Calculator, OperatorTable};
use crate::interfaces::EventHandler;
use crate::numeric::{EngineError, EngineResult, Radix};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator session from configuration
///
/// # Arguments
/// * `config` - Capacity, base, separator and operators
/// * `event_handler` - Display handler subscribed to the new session
///
/// # Errors
/// `InvalidConfiguration` when the configuration does not validate.
///
/// # Example
/// ```
/// use digit_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let mut calc =
///     create_from_config(CalculatorConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
/// calc.submit_str("2+2=").unwrap();
/// assert_eq!(calc.first().digits(), "4");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> EngineResult<Calculator> {
    config.validate().map_err(|reason| {
        tracing::warn!(%reason, "Calculator configuration rejected");
        EngineError::InvalidConfiguration(reason)
    })?;

    let operators = OperatorTable::from_operations(&config.operators)?;

    let mut calculator = Calculator::new(config, operators);
    calculator.subscribe(event_handler);
    Ok(calculator)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for calculator sessions with a fluent API
///
/// # Example
/// ```
/// use digit_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .with_radix(Radix::HEXADECIMAL)
///     .with_max_places(8)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calc.config().max_places, 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Start from the standard decimal configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Individual Settings
    // ========================================================================

    pub fn with_max_places(mut self, max_places: usize) -> Self {
        self.config.max_places = max_places;
        self
    }

    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.config.radix = radix;
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    /// Register multiply and divide alongside add and subtract
    pub fn with_all_operators(mut self) -> Self {
        use crate::domain::Operation;
        self.config.operators = vec![
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ];
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    pub fn binary() -> Self {
        Self {
            config: CalculatorConfig::binary(),
        }
    }

    pub fn octal() -> Self {
        Self {
            config: CalculatorConfig::octal(),
        }
    }

    pub fn hexadecimal() -> Self {
        Self {
            config: CalculatorConfig::hexadecimal(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> EngineResult<Calculator> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operation;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};

    #[test]
    fn test_create_standard_calculator() {
        let calc =
            create_from_config(CalculatorConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calc.config().max_places, 13);
        assert_eq!(calc.notation().radix, Radix::DECIMAL);
        assert_eq!(calc.operators().len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CalculatorConfig::standard().with_max_places(0);
        let result = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(matches!(result, Err(EngineError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_handler_subscribed() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let mut calc = create_from_config(CalculatorConfig::standard(), recorder.clone()).unwrap();
        calc.submit_str("12").unwrap();
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_builder_pattern() {
        let builder = CalculatorBuilder::new()
            .with_max_places(4)
            .with_decimal_separator(',');
        assert_eq!(builder.get_config().decimal_separator, ',');

        let mut calc = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        calc.submit_str("1.5+1,5=").unwrap();
        assert_eq!(calc.first().digits(), "3");

        calc.submit_str("1.25").unwrap();
        assert_eq!(calc.first().digits(), "1,25");
    }

    #[test]
    fn test_builder_all_operators() {
        let calc = CalculatorBuilder::new()
            .with_all_operators()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert!(calc.operators().find(Operation::Divide).is_some());
    }

    #[test]
    fn test_builder_presets() {
        let mut hex = CalculatorBuilder::hexadecimal()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        hex.submit_str("ff+1=").unwrap();
        assert_eq!(hex.first().digits(), "100");

        let mut binary = CalculatorBuilder::binary()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        binary.submit_str("11+1=").unwrap();
        assert_eq!(binary.first().digits(), "100");

        let octal = CalculatorBuilder::octal();
        assert_eq!(octal.get_config().radix, Radix::OCTAL);
    }
}

// ============================================================================
// Calculator Configuration
// Capacity, numeric base, separator and operator set for a session
// ============================================================================

use super::operation::{Operation, EQUALS_SYMBOL};
use crate::numeric::{Notation, Radix, DEFAULT_SEPARATOR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display width of the classic desktop calculator.
pub const DEFAULT_MAX_PLACES: usize = 13;

/// Complete configuration for creating a calculator session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Maximum symbol count of any operand, separator included
    pub max_places: usize,

    /// Numeric base used for carries and digit validation
    pub radix: Radix,

    /// Separator stored inside digit sequences
    pub decimal_separator: char,

    /// Operators registered in the dispatch table
    pub operators: Vec<Operation>,
}

impl CalculatorConfig {
    /// Create a new configuration with add and subtract registered
    pub fn new(max_places: usize, radix: Radix) -> Self {
        Self {
            max_places,
            radix,
            decimal_separator: DEFAULT_SEPARATOR as char,
            operators: vec![Operation::Add, Operation::Subtract],
        }
    }

    /// Builder method: Set maximum operand width
    pub fn with_max_places(mut self, max_places: usize) -> Self {
        self.max_places = max_places;
        self
    }

    /// Builder method: Set numeric base
    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }

    /// Builder method: Set decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder method: Replace the operator set
    pub fn with_operators(mut self, operators: Vec<Operation>) -> Self {
        self.operators = operators;
        self
    }

    /// Notation derived from radix and separator.
    ///
    /// A non-ASCII separator falls back to [`DEFAULT_SEPARATOR`]; `validate`
    /// rejects such configurations.
    pub fn notation(&self) -> Notation {
        let separator = u8::try_from(self.decimal_separator)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(DEFAULT_SEPARATOR);
        Notation::new(self.radix, separator)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_places == 0 {
            return Err("Maximum places must be at least 1".to_string());
        }

        // Validate separator
        let separator = self.decimal_separator;
        if !separator.is_ascii_graphic() {
            return Err(format!(
                "Decimal separator '{}' must be a printable ASCII symbol",
                separator
            ));
        }
        let symbol = separator as u8;
        if Radix::HEXADECIMAL.is_digit(symbol) {
            return Err(format!(
                "Decimal separator '{}' collides with a digit symbol",
                separator
            ));
        }
        if Operation::from_symbol(symbol).is_some() || symbol == EQUALS_SYMBOL {
            return Err(format!(
                "Decimal separator '{}' collides with an operator key",
                separator
            ));
        }

        // Validate operator set
        let mut seen = Vec::with_capacity(self.operators.len());
        for op in &self.operators {
            if op.is_special() {
                return Err(format!(
                    "Extension command {} has no operator implementation",
                    op
                ));
            }
            if seen.contains(op) {
                return Err(format!("Operator '{}' registered twice", op));
            }
            seen.push(*op);
        }

        // Sign resolution rewrites add and subtract into each other
        let has_add = seen.contains(&Operation::Add);
        let has_subtract = seen.contains(&Operation::Subtract);
        if has_add != has_subtract {
            return Err("Add and subtract must be registered together".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Desktop calculator
    /// - 13 places
    /// - Base 10
    pub fn standard() -> Self {
        Self::new(DEFAULT_MAX_PLACES, Radix::DECIMAL)
    }

    /// Binary programmer mode
    /// - 32 places
    pub fn binary() -> Self {
        Self::new(32, Radix::BINARY)
    }

    /// Octal programmer mode
    /// - 16 places
    pub fn octal() -> Self {
        Self::new(16, Radix::OCTAL)
    }

    /// Hexadecimal programmer mode
    /// - 16 places
    pub fn hexadecimal() -> Self {
        Self::new(16, Radix::HEXADECIMAL)
    }
}

#[cfg(feature = "serde")]
impl CalculatorConfig {
    /// Load a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

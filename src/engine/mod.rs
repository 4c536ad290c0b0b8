// ============================================================================
// Engine Module
// Alignment, sign resolution, operators and the calculator session
// ============================================================================

mod addition;
mod alignment;
mod calculator;
mod operator;
mod sign;
mod subtraction;

pub mod factory;

pub use addition::Addition;
pub use alignment::{level_up_numbers, remove_extra_zeroes, strip_leading_zeroes};
pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
pub use operator::{Operator, OperatorTable};
pub use sign::{resolve_signs, Resolved};
pub use subtraction::Subtraction;

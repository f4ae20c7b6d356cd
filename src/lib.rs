pub mod units;

// Re-exports for convenience
pub use units::{validate_unit, InvalidUnitOfMeasure, UnitValue};

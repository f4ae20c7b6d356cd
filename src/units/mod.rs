// Units of measure: a fixed catalog of canonical unit strings and a
// validator that normalizes enum-or-string input to the canonical form.
// The registry is assembled once on first use and never mutated afterwards.

pub mod catalog;
pub mod error;
pub mod registry;
pub mod validator;


pub use catalog::*;
pub use error::InvalidUnitOfMeasure;
pub use validator::{validate_unit, UnitValue};

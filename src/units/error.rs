use std::fmt;

use crate::units::registry;

/// The supplied unit is not a recognized unit of measure.
///
/// Carries the offending value and the full list of valid canonical units so
/// callers can surface a complete diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUnitOfMeasure {
    value: String,
    valid_units: Vec<&'static str>,
}

impl InvalidUnitOfMeasure {
    pub(crate) fn new(value: String) -> Self {
        Self {
            value,
            valid_units: registry::canonical_units(),
        }
    }

    /// The rejected input, rendered as text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Every canonical unit string the registry accepts.
    pub fn valid_units(&self) -> &[&'static str] {
        &self.valid_units
    }
}

impl fmt::Display for InvalidUnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid unit of measurement: '{}'. Valid units are: ", self.value)?;
        for (i, unit) in self.valid_units.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", unit)?;
        }
        write!(f, ".")
    }
}

impl std::error::Error for InvalidUnitOfMeasure {}

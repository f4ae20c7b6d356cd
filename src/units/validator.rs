//! Validation of unit-of-measure input.
//!
//! Accepts either a plain string or any type that can expose an underlying
//! unit string through [`UnitValue`]. Integration layers define their own
//! unit enums and implement `UnitValue` for them; this module never needs to
//! know the concrete type.

use std::fmt;

use crate::units::error::InvalidUnitOfMeasure;
use crate::units::registry;

/// A value that may carry an underlying unit string.
///
/// Returning `None` means the value is not string-backed (an integer-valued
/// or empty enum member, a bare number) and can never validate, even if its
/// rendering coincides with a registered unit.
pub trait UnitValue {
    fn unit_value(&self) -> Option<&str>;
}

impl UnitValue for &str {
    fn unit_value(&self) -> Option<&str> {
        Some(*self)
    }
}

impl UnitValue for String {
    fn unit_value(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: UnitValue> UnitValue for Option<T> {
    fn unit_value(&self) -> Option<&str> {
        self.as_ref().and_then(UnitValue::unit_value)
    }
}

// Numbers are never units, regardless of any registered constant they might
// coincide with once rendered.
macro_rules! impl_non_string_unit_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl UnitValue for $ty {
                fn unit_value(&self) -> Option<&str> {
                    None
                }
            }
        )+
    };
}

impl_non_string_unit_value!(i32, i64, u32, u64, f32, f64);

/// Validate a unit of measure and return its canonical string form.
///
/// The comparison is an exact, case-sensitive lookup against the unit
/// registry: no trimming, no case folding. On failure the returned
/// [`InvalidUnitOfMeasure`] carries the offending value and the full list of
/// valid units.
pub fn validate_unit<U>(unit: U) -> Result<&'static str, InvalidUnitOfMeasure>
where
    U: UnitValue + fmt::Debug,
{
    match unit.unit_value() {
        Some(value) => match registry::canonical(value) {
            Some(canonical) => Ok(canonical),
            None => Err(InvalidUnitOfMeasure::new(value.to_owned())),
        },
        None => Err(InvalidUnitOfMeasure::new(format!("{:?}", unit))),
    }
}

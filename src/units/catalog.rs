//! Unit categories and standalone unit constants.
//!
//! Each category enum maps its variants to canonical unit strings. The serde
//! representation is the canonical string itself, so integration layers that
//! persist or display units round-trip through the exact registry form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::validator::UnitValue;

/// Temperature units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfTemperature {
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "°F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl UnitOfTemperature {
    pub const ALL: &'static [Self] = &[Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfTemperature::Celsius => "°C",
            UnitOfTemperature::Fahrenheit => "°F",
            UnitOfTemperature::Kelvin => "K",
        }
    }
}

/// Mass units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMass {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "mg")]
    Milligrams,
    #[serde(rename = "µg")]
    Micrograms,
    #[serde(rename = "oz")]
    Ounces,
    #[serde(rename = "lb")]
    Pounds,
    #[serde(rename = "st")]
    Stones,
}

impl UnitOfMass {
    pub const ALL: &'static [Self] = &[
        Self::Grams,
        Self::Kilograms,
        Self::Milligrams,
        Self::Micrograms,
        Self::Ounces,
        Self::Pounds,
        Self::Stones,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfMass::Grams => "g",
            UnitOfMass::Kilograms => "kg",
            UnitOfMass::Milligrams => "mg",
            // Micro sign U+00B5, not Greek mu
            UnitOfMass::Micrograms => "µg",
            UnitOfMass::Ounces => "oz",
            UnitOfMass::Pounds => "lb",
            UnitOfMass::Stones => "st",
        }
    }
}

/// Pressure units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfPressure {
    #[serde(rename = "Pa")]
    Pa,
    #[serde(rename = "hPa")]
    HPa,
    #[serde(rename = "kPa")]
    KPa,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "cbar")]
    CBar,
    #[serde(rename = "mbar")]
    MBar,
    #[serde(rename = "mmHg")]
    MmHg,
    #[serde(rename = "inHg")]
    InHg,
    #[serde(rename = "psi")]
    Psi,
}

impl UnitOfPressure {
    pub const ALL: &'static [Self] = &[
        Self::Pa,
        Self::HPa,
        Self::KPa,
        Self::Bar,
        Self::CBar,
        Self::MBar,
        Self::MmHg,
        Self::InHg,
        Self::Psi,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfPressure::Pa => "Pa",
            UnitOfPressure::HPa => "hPa",
            UnitOfPressure::KPa => "kPa",
            UnitOfPressure::Bar => "bar",
            UnitOfPressure::CBar => "cbar",
            UnitOfPressure::MBar => "mbar",
            UnitOfPressure::MmHg => "mmHg",
            UnitOfPressure::InHg => "inHg",
            UnitOfPressure::Psi => "psi",
        }
    }
}

/// Power units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfPower {
    #[serde(rename = "W")]
    Watt,
    #[serde(rename = "kW")]
    KiloWatt,
    #[serde(rename = "BTU/h")]
    BtuPerHour,
}

impl UnitOfPower {
    pub const ALL: &'static [Self] = &[Self::Watt, Self::KiloWatt, Self::BtuPerHour];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfPower::Watt => "W",
            UnitOfPower::KiloWatt => "kW",
            UnitOfPower::BtuPerHour => "BTU/h",
        }
    }
}

/// Apparent power units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfApparentPower {
    #[serde(rename = "VA")]
    VoltAmpere,
}

impl UnitOfApparentPower {
    pub const ALL: &'static [Self] = &[Self::VoltAmpere];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfApparentPower::VoltAmpere => "VA",
        }
    }
}

/// Electric current units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfElectricCurrent {
    #[serde(rename = "mA")]
    Milliampere,
    #[serde(rename = "A")]
    Ampere,
}

impl UnitOfElectricCurrent {
    pub const ALL: &'static [Self] = &[Self::Milliampere, Self::Ampere];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfElectricCurrent::Milliampere => "mA",
            UnitOfElectricCurrent::Ampere => "A",
        }
    }
}

/// Electric potential units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfElectricPotential {
    #[serde(rename = "mV")]
    Millivolt,
    #[serde(rename = "V")]
    Volt,
}

impl UnitOfElectricPotential {
    pub const ALL: &'static [Self] = &[Self::Millivolt, Self::Volt];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfElectricPotential::Millivolt => "mV",
            UnitOfElectricPotential::Volt => "V",
        }
    }
}

/// Frequency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfFrequency {
    #[serde(rename = "Hz")]
    Hertz,
    #[serde(rename = "kHz")]
    Kilohertz,
    #[serde(rename = "MHz")]
    Megahertz,
    #[serde(rename = "GHz")]
    Gigahertz,
}

impl UnitOfFrequency {
    pub const ALL: &'static [Self] = &[
        Self::Hertz,
        Self::Kilohertz,
        Self::Megahertz,
        Self::Gigahertz,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfFrequency::Hertz => "Hz",
            UnitOfFrequency::Kilohertz => "kHz",
            UnitOfFrequency::Megahertz => "MHz",
            UnitOfFrequency::Gigahertz => "GHz",
        }
    }
}

/// Volume flow rate units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfVolumeFlowRate {
    #[serde(rename = "m³/h")]
    CubicMetersPerHour,
    #[serde(rename = "ft³/min")]
    CubicFeetPerMinute,
    #[serde(rename = "L/min")]
    LitersPerMinute,
    #[serde(rename = "gal/min")]
    GallonsPerMinute,
}

impl UnitOfVolumeFlowRate {
    pub const ALL: &'static [Self] = &[
        Self::CubicMetersPerHour,
        Self::CubicFeetPerMinute,
        Self::LitersPerMinute,
        Self::GallonsPerMinute,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfVolumeFlowRate::CubicMetersPerHour => "m³/h",
            UnitOfVolumeFlowRate::CubicFeetPerMinute => "ft³/min",
            UnitOfVolumeFlowRate::LitersPerMinute => "L/min",
            UnitOfVolumeFlowRate::GallonsPerMinute => "gal/min",
        }
    }
}

/// Volume units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfVolume {
    #[serde(rename = "ft³")]
    CubicFeet,
    #[serde(rename = "CCF")]
    CentumCubicFeet,
    #[serde(rename = "m³")]
    CubicMeters,
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "mL")]
    Milliliters,
    /// US gallons. British/Imperial gallons are not supported.
    #[serde(rename = "gal")]
    Gallons,
    /// US fluid ounces. British/Imperial fluid ounces are not supported.
    #[serde(rename = "fl. oz.")]
    FluidOunces,
}

impl UnitOfVolume {
    pub const ALL: &'static [Self] = &[
        Self::CubicFeet,
        Self::CentumCubicFeet,
        Self::CubicMeters,
        Self::Liters,
        Self::Milliliters,
        Self::Gallons,
        Self::FluidOunces,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfVolume::CubicFeet => "ft³",
            UnitOfVolume::CentumCubicFeet => "CCF",
            UnitOfVolume::CubicMeters => "m³",
            UnitOfVolume::Liters => "L",
            UnitOfVolume::Milliliters => "mL",
            UnitOfVolume::Gallons => "gal",
            UnitOfVolume::FluidOunces => "fl. oz.",
        }
    }
}

/// Time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfTime {
    #[serde(rename = "μs")]
    Microseconds,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "d")]
    Days,
    #[serde(rename = "w")]
    Weeks,
    #[serde(rename = "m")]
    Months,
    #[serde(rename = "y")]
    Years,
}

impl UnitOfTime {
    pub const ALL: &'static [Self] = &[
        Self::Microseconds,
        Self::Milliseconds,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Years,
    ];

    pub fn value(self) -> &'static str {
        match self {
            // Greek mu U+03BC, unlike the micro sign in "µg"
            UnitOfTime::Microseconds => "μs",
            UnitOfTime::Milliseconds => "ms",
            UnitOfTime::Seconds => "s",
            UnitOfTime::Minutes => "min",
            UnitOfTime::Hours => "h",
            UnitOfTime::Days => "d",
            UnitOfTime::Weeks => "w",
            UnitOfTime::Months => "m",
            UnitOfTime::Years => "y",
        }
    }
}

/// Length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfLength {
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "yd")]
    Yards,
    #[serde(rename = "mi")]
    Miles,
}

impl UnitOfLength {
    pub const ALL: &'static [Self] = &[
        Self::Millimeters,
        Self::Centimeters,
        Self::Meters,
        Self::Kilometers,
        Self::Inches,
        Self::Feet,
        Self::Yards,
        Self::Miles,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfLength::Millimeters => "mm",
            UnitOfLength::Centimeters => "cm",
            UnitOfLength::Meters => "m",
            UnitOfLength::Kilometers => "km",
            UnitOfLength::Inches => "in",
            UnitOfLength::Feet => "ft",
            UnitOfLength::Yards => "yd",
            UnitOfLength::Miles => "mi",
        }
    }
}

/// Energy units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfEnergy {
    #[serde(rename = "GJ")]
    GigaJoule,
    #[serde(rename = "kWh")]
    KiloWattHour,
    #[serde(rename = "MJ")]
    MegaJoule,
    #[serde(rename = "MWh")]
    MegaWattHour,
    #[serde(rename = "Wh")]
    WattHour,
}

impl UnitOfEnergy {
    pub const ALL: &'static [Self] = &[
        Self::GigaJoule,
        Self::KiloWattHour,
        Self::MegaJoule,
        Self::MegaWattHour,
        Self::WattHour,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UnitOfEnergy::GigaJoule => "GJ",
            UnitOfEnergy::KiloWattHour => "kWh",
            UnitOfEnergy::MegaJoule => "MJ",
            UnitOfEnergy::MegaWattHour => "MWh",
            UnitOfEnergy::WattHour => "Wh",
        }
    }
}

macro_rules! impl_unit_traits {
    ($($category:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $category {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.value())
                }
            }

            impl UnitValue for $category {
                fn unit_value(&self) -> Option<&str> {
                    Some(self.value())
                }
            }
        )+
    };
}

impl_unit_traits!(
    UnitOfTemperature,
    UnitOfMass,
    UnitOfPressure,
    UnitOfPower,
    UnitOfApparentPower,
    UnitOfElectricCurrent,
    UnitOfElectricPotential,
    UnitOfFrequency,
    UnitOfVolumeFlowRate,
    UnitOfVolume,
    UnitOfTime,
    UnitOfLength,
    UnitOfEnergy,
);

// Concentration units
pub const CONCENTRATION_MICROGRAMS_PER_CUBIC_METER: &str = "µg/m³";
pub const CONCENTRATION_MILLIGRAMS_PER_CUBIC_METER: &str = "mg/m³";
pub const CONCENTRATION_MICROGRAMS_PER_CUBIC_FOOT: &str = "μg/ft³";
pub const CONCENTRATION_PARTS_PER_CUBIC_METER: &str = "p/m³";
pub const CONCENTRATION_PARTS_PER_MILLION: &str = "ppm";
pub const CONCENTRATION_PARTS_PER_BILLION: &str = "ppb";

// Signal strength units
pub const SIGNAL_STRENGTH_DECIBELS: &str = "dB";
pub const SIGNAL_STRENGTH_DECIBELS_MILLIWATT: &str = "dBm";

// Light units
pub const LIGHT_LUX: &str = "lx";

// Percentage units
pub const PERCENTAGE: &str = "%";

/// Units that are not grouped into any category.
pub(crate) const STANDALONE_UNITS: [&str; 10] = [
    CONCENTRATION_MICROGRAMS_PER_CUBIC_METER,
    CONCENTRATION_MILLIGRAMS_PER_CUBIC_METER,
    CONCENTRATION_MICROGRAMS_PER_CUBIC_FOOT,
    CONCENTRATION_PARTS_PER_CUBIC_METER,
    CONCENTRATION_PARTS_PER_MILLION,
    CONCENTRATION_PARTS_PER_BILLION,
    SIGNAL_STRENGTH_DECIBELS,
    SIGNAL_STRENGTH_DECIBELS_MILLIWATT,
    LIGHT_LUX,
    PERCENTAGE,
];

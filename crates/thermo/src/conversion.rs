//! Named selection among the supported conversion chains.
//!
//! The set is closed: each variant maps to exactly one function in
//! [`crate::scalar`]. There is no unit graph and no inverse conversions.

use std::fmt;
use std::str::FromStr;

use crate::error::ThermoError;
use crate::scalar::{celsius_to_kelvin, fahr_to_celsius, fahr_to_kelvin};

/// One of the three supported temperature conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Fahrenheit to Celsius.
    FahrToCelsius,
    /// Celsius to Kelvin.
    CelsiusToKelvin,
    /// Fahrenheit to Kelvin.
    FahrToKelvin,
}

impl Conversion {
    /// Every supported conversion, in declaration order.
    pub const ALL: [Conversion; 3] = [
        Conversion::FahrToCelsius,
        Conversion::CelsiusToKelvin,
        Conversion::FahrToKelvin,
    ];

    /// Returns the kebab-case name used by `FromStr` and `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Conversion::FahrToCelsius => "fahr-to-celsius",
            Conversion::CelsiusToKelvin => "celsius-to-kelvin",
            Conversion::FahrToKelvin => "fahr-to-kelvin",
        }
    }

    /// Applies the conversion to a single value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Conversion::FahrToCelsius => fahr_to_celsius(value),
            Conversion::CelsiusToKelvin => celsius_to_kelvin(value),
            Conversion::FahrToKelvin => fahr_to_kelvin(value),
        }
    }

    /// Applies the conversion to every value, preserving order and length.
    pub fn convert_all(self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conversion {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Conversion::ALL
            .into_iter()
            .find(|c| c.name() == needle)
            .ok_or_else(|| ThermoError::UnknownConversion {
                name: s.to_string(),
            })
    }
}

//! Fahrenheit, Celsius and Kelvin conversion functions.

/// Offset between the Celsius and Kelvin scales.
pub const ABSOLUTE_ZERO_CELSIUS_OFFSET: f64 = 273.15;

/// Freezing point of water in degrees Fahrenheit.
pub const FREEZING_POINT_FAHRENHEIT: f64 = 32.0;

/// Converts degrees Fahrenheit to degrees Celsius.
///
/// Computes `(temp - 32) * (5 / 9)`. Any input is accepted, including
/// values below absolute zero; NaN propagates.
pub fn fahr_to_celsius(temp: f64) -> f64 {
    (temp - FREEZING_POINT_FAHRENHEIT) * (5.0 / 9.0)
}

/// Converts degrees Celsius to Kelvin.
///
/// Negative Kelvin results are returned as-is.
pub fn celsius_to_kelvin(temp: f64) -> f64 {
    temp + ABSOLUTE_ZERO_CELSIUS_OFFSET
}

/// Converts degrees Fahrenheit to Kelvin via Celsius.
///
/// ```
/// assert_eq!(lumen_thermo::fahr_to_kelvin(212.0), 373.15);
/// ```
pub fn fahr_to_kelvin(temp: f64) -> f64 {
    celsius_to_kelvin(fahr_to_celsius(temp))
}

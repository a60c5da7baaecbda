//! # lumen-thermo
//!
//! Scalar temperature conversions between Fahrenheit, Celsius and Kelvin.
//!
//! Values are plain `f64`; the unit is implied by which function is called.
//! Nothing here validates physical plausibility: temperatures below absolute
//! zero convert like any other number.
//!
//! ## Quick Start
//!
//! ```
//! use lumen_thermo::{Conversion, fahr_to_kelvin};
//!
//! assert_eq!(fahr_to_kelvin(212.0), 373.15);
//!
//! let conv: Conversion = "fahr-to-celsius".parse().unwrap();
//! assert_eq!(conv.convert_all(&[32.0, 212.0]), vec![0.0, 100.0]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `scalar` | The three conversion functions |
//! | `conversion` | Named conversion selector for callers that pick at runtime |
//! | `error` | Error types |

mod conversion;
mod error;
mod scalar;

pub use conversion::Conversion;
pub use error::ThermoError;
pub use scalar::{
    ABSOLUTE_ZERO_CELSIUS_OFFSET, FREEZING_POINT_FAHRENHEIT, celsius_to_kelvin, fahr_to_celsius,
    fahr_to_kelvin,
};

//! Colour hint passed through to the plotting backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LightCurveError;

/// A colour specification such as `"red"` or `"#1f77b4"`.
///
/// The string is not interpreted here; it only has to be non-blank.
/// Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Creates a colour hint.
    ///
    /// # Errors
    ///
    /// Returns `LightCurveError::InvalidColor` if `spec` is empty or blank.
    pub fn new(spec: impl Into<String>) -> Result<Self, LightCurveError> {
        let spec = spec.into();
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(LightCurveError::InvalidColor { spec });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the colour specification.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = LightCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = LightCurveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_hex_colours() {
        assert_eq!(Color::new("red").unwrap().as_str(), "red");
        assert_eq!("#1f77b4".parse::<Color>().unwrap().as_str(), "#1f77b4");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(Color::new("  tab:blue ").unwrap().to_string(), "tab:blue");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(
            Color::new(""),
            Err(LightCurveError::InvalidColor { .. })
        ));
        assert!(matches!(
            "   ".parse::<Color>(),
            Err(LightCurveError::InvalidColor { .. })
        ));
    }

    #[test]
    fn serde_uses_plain_string() {
        let c: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(c.as_str(), "green");
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"green\"");
        assert!(serde_json::from_str::<Color>("\"\"").is_err());
    }
}

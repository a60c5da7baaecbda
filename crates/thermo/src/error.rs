//! Error types for the lumen-thermo crate.

/// Error type for the fallible parts of the lumen-thermo crate.
///
/// The conversion functions themselves never fail; only selecting a
/// conversion by name can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThermoError {
    /// Returned when a conversion name is not one of the supported chains.
    #[error(
        "unknown conversion: {name:?} (expected fahr-to-celsius, celsius-to-kelvin or fahr-to-kelvin)"
    )]
    UnknownConversion {
        /// The name that failed to parse.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_conversion() {
        let e = ThermoError::UnknownConversion {
            name: "kelvin-to-rankine".to_string(),
        };
        assert!(e.to_string().contains("kelvin-to-rankine"));
        assert!(e.to_string().contains("fahr-to-kelvin"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ThermoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ThermoError>();
    }
}

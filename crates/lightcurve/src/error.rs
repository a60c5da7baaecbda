//! Error types for the lumen-lightcurve crate.

/// Errors raised by light-curve helpers.
///
/// `render` never produces these; it only forwards the plotter's own error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LightCurveError {
    /// Returned by `validate` when a present sequence differs in length from
    /// the first present one.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Length of the first present sequence.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched field.
        field: String,
    },

    /// Returned when a colour specification is blank.
    #[error("invalid color: {spec:?} (must not be empty)")]
    InvalidColor {
        /// The rejected specification.
        spec: String,
    },
}

/// Errors raised by the in-memory [`Figure`](crate::Figure) backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FigureError {
    /// A strict figure received no data for a required axis.
    #[error("missing series: {field} is required")]
    MissingSeries {
        /// Which input was absent (`x` or `y`).
        field: String,
    },

    /// A strict figure received sequences of different lengths.
    #[error("shape mismatch: x has {x} points, y has {y}, y_error has {y_error:?}")]
    ShapeMismatch {
        /// Length of `x`.
        x: usize,
        /// Length of `y`.
        y: usize,
        /// Length of `y_error`, if given.
        y_error: Option<usize>,
    },

    /// Returned when the recorded calls cannot be serialized.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },
}

//! The plotting collaborator used by [`LightCurve::render`](crate::LightCurve::render).

use crate::color::Color;

/// Marker style passed to [`Plotter::error_bar_plot`]: filled circles.
pub const CIRCLE_MARKER: &str = "o";

/// Horizontal axis label set by `render`.
pub const X_LABEL: &str = "Time";

/// Vertical axis label set by `render`.
pub const Y_LABEL: &str = "Flux";

/// A plotting context that can draw an error-bar series and label a figure.
///
/// Implementations own whatever "current figure" state they keep. Sequences
/// arrive exactly as the caller stored them: absent inputs are `None` and
/// ragged lengths are not reconciled. Deciding what to do with such input,
/// and reporting it through `Self::Error`, is up to the implementation.
pub trait Plotter {
    /// Failure raised by the backend.
    type Error: std::error::Error;

    /// Draws `y` against `x` with symmetric vertical error bars `y_error`.
    fn error_bar_plot(
        &mut self,
        x: Option<&[f64]>,
        y: Option<&[f64]>,
        y_error: Option<&[f64]>,
        marker: &str,
        color: Option<&Color>,
    ) -> Result<(), Self::Error>;

    /// Sets the horizontal axis label.
    fn set_x_label(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Sets the vertical axis label.
    fn set_y_label(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Sets (or clears, with `None`) the figure title.
    fn set_title(&mut self, text: Option<&str>) -> Result<(), Self::Error>;
}

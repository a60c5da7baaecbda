//! The light-curve record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::error::LightCurveError;
use crate::plotter::{CIRCLE_MARKER, Plotter, X_LABEL, Y_LABEL};

/// A time series of brightness measurements.
///
/// The four sequences are meant to be positionally aligned, one entry per
/// observation, but nothing enforces that. Every field may be absent and
/// callers are free to mutate them directly. Use [`LightCurve::validate`]
/// to check alignment explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightCurve {
    /// Observation timestamps.
    pub times: Option<Vec<f64>>,
    /// Measured flux at each timestamp.
    pub fluxes: Option<Vec<f64>>,
    /// Symmetric one-sigma error on each flux.
    pub uncertainties: Option<Vec<f64>>,
    /// Per-point quality markers. Not interpreted by this crate.
    pub flags: Option<Vec<i64>>,
    /// Display label, used as the plot title.
    pub name: Option<String>,
}

impl LightCurve {
    /// Creates a light curve with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timestamps.
    pub fn with_times(mut self, times: Vec<f64>) -> Self {
        self.times = Some(times);
        self
    }

    /// Sets the fluxes.
    pub fn with_fluxes(mut self, fluxes: Vec<f64>) -> Self {
        self.fluxes = Some(fluxes);
        self
    }

    /// Sets the flux uncertainties.
    pub fn with_uncertainties(mut self, uncertainties: Vec<f64>) -> Self {
        self.uncertainties = Some(uncertainties);
        self
    }

    /// Sets the quality flags.
    pub fn with_flags(mut self, flags: Vec<i64>) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the number of timestamps, if `times` is present.
    pub fn n_points(&self) -> Option<usize> {
        self.times.as_ref().map(Vec::len)
    }

    /// Checks that every present sequence has the same length.
    ///
    /// Absent sequences are skipped. The first present sequence, in field
    /// order, sets the expected length. This is never called implicitly.
    ///
    /// # Errors
    ///
    /// Returns `LightCurveError::LengthMismatch` naming the first field whose
    /// length differs.
    pub fn validate(&self) -> Result<(), LightCurveError> {
        let lengths = [
            ("times", self.times.as_ref().map(Vec::len)),
            ("fluxes", self.fluxes.as_ref().map(Vec::len)),
            ("uncertainties", self.uncertainties.as_ref().map(Vec::len)),
            ("flags", self.flags.as_ref().map(Vec::len)),
        ];
        let mut present = lengths
            .into_iter()
            .filter_map(|(field, len)| len.map(|n| (field, n)));

        let Some((_, expected)) = present.next() else {
            return Ok(());
        };
        for (field, got) in present {
            if got != expected {
                return Err(LightCurveError::LengthMismatch {
                    expected,
                    got,
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Draws the light curve on `plotter`.
    ///
    /// Issues, in order: an error-bar plot of `fluxes` against `times` with
    /// `uncertainties` as error bars and circular markers, tinted by `color`
    /// if given; the `"Time"` x label; the `"Flux"` y label; and `name` as
    /// the title. Sequences are passed exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns the plotter's error from the first call that fails. No
    /// further calls are made after a failure.
    #[tracing::instrument(skip_all, fields(name = self.name.as_deref()))]
    pub fn render<P: Plotter>(
        &self,
        plotter: &mut P,
        color: Option<&Color>,
    ) -> Result<(), P::Error> {
        plotter.error_bar_plot(
            self.times.as_deref(),
            self.fluxes.as_deref(),
            self.uncertainties.as_deref(),
            CIRCLE_MARKER,
            color,
        )?;
        debug!(points = self.n_points(), "error bars drawn");

        plotter.set_x_label(X_LABEL)?;
        plotter.set_y_label(Y_LABEL)?;
        plotter.set_title(self.name.as_deref())?;
        debug!("labels set");

        Ok(())
    }
}

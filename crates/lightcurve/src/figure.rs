//! In-memory plotting backend that records every call it receives.
//!
//! [`Figure`] draws nothing. It keeps an ordered log of [`PlotCall`]s that
//! can be inspected or serialized to JSON, which is enough to check what a
//! real backend would have been asked to do.

use serde::Serialize;
use tracing::{trace, warn};

use crate::color::Color;
use crate::error::FigureError;
use crate::plotter::Plotter;

/// One call received by a [`Figure`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum PlotCall {
    /// An error-bar series.
    ErrorBar {
        x: Option<Vec<f64>>,
        y: Option<Vec<f64>>,
        y_error: Option<Vec<f64>>,
        marker: String,
        color: Option<String>,
    },
    /// Horizontal axis label.
    XLabel { text: String },
    /// Vertical axis label.
    YLabel { text: String },
    /// Figure title; `None` clears it.
    Title { text: Option<String> },
}

/// A recording [`Plotter`].
///
/// In the default mode every call is logged verbatim, including absent or
/// ragged series. A [strict](Figure::strict) figure rejects error-bar input
/// that a real backend could not draw and records nothing for that call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Figure {
    #[serde(skip)]
    strict: bool,
    calls: Vec<PlotCall>,
}

impl Figure {
    /// Creates an empty figure that accepts any input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty figure that rejects missing or ragged series.
    pub fn strict() -> Self {
        Self {
            strict: true,
            calls: Vec::new(),
        }
    }

    /// Returns whether shape checking is enabled.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns every recorded call in order.
    pub fn calls(&self) -> &[PlotCall] {
        &self.calls
    }

    /// Returns the recorded error-bar series in order.
    pub fn series(&self) -> impl Iterator<Item = &PlotCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, PlotCall::ErrorBar { .. }))
    }

    /// Returns the most recently set x label.
    pub fn x_label(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            PlotCall::XLabel { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Returns the most recently set y label.
    pub fn y_label(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            PlotCall::YLabel { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Returns the current title, honouring a later `None` that cleared it.
    pub fn title(&self) -> Option<&str> {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                PlotCall::Title { text } => Some(text.as_deref()),
                _ => None,
            })
            .flatten()
    }

    /// Drops every recorded call.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Serializes the recorded calls to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, FigureError> {
        serde_json::to_string_pretty(self).map_err(|e| FigureError::Serialization {
            reason: e.to_string(),
        })
    }

    fn check_shape(
        x: Option<&[f64]>,
        y: Option<&[f64]>,
        y_error: Option<&[f64]>,
    ) -> Result<(), FigureError> {
        let x = x.ok_or_else(|| FigureError::MissingSeries {
            field: "x".to_string(),
        })?;
        let y = y.ok_or_else(|| FigureError::MissingSeries {
            field: "y".to_string(),
        })?;
        let y_error_len = y_error.map(<[f64]>::len);
        if x.len() != y.len() || y_error_len.is_some_and(|n| n != y.len()) {
            return Err(FigureError::ShapeMismatch {
                x: x.len(),
                y: y.len(),
                y_error: y_error_len,
            });
        }
        Ok(())
    }
}

impl Plotter for Figure {
    type Error = FigureError;

    fn error_bar_plot(
        &mut self,
        x: Option<&[f64]>,
        y: Option<&[f64]>,
        y_error: Option<&[f64]>,
        marker: &str,
        color: Option<&Color>,
    ) -> Result<(), FigureError> {
        if self.strict {
            if let Err(e) = Self::check_shape(x, y, y_error) {
                warn!(error = %e, "rejected error-bar series");
                return Err(e);
            }
        }
        trace!(
            n_x = x.map(<[f64]>::len),
            n_y = y.map(<[f64]>::len),
            marker,
            "recording error bars"
        );
        self.calls.push(PlotCall::ErrorBar {
            x: x.map(<[f64]>::to_vec),
            y: y.map(<[f64]>::to_vec),
            y_error: y_error.map(<[f64]>::to_vec),
            marker: marker.to_string(),
            color: color.map(|c| c.as_str().to_string()),
        });
        Ok(())
    }

    fn set_x_label(&mut self, text: &str) -> Result<(), FigureError> {
        self.calls.push(PlotCall::XLabel {
            text: text.to_string(),
        });
        Ok(())
    }

    fn set_y_label(&mut self, text: &str) -> Result<(), FigureError> {
        self.calls.push(PlotCall::YLabel {
            text: text.to_string(),
        });
        Ok(())
    }

    fn set_title(&mut self, text: Option<&str>) -> Result<(), FigureError> {
        self.calls.push(PlotCall::Title {
            text: text.map(str::to_string),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_figure_is_empty_and_lenient() {
        let fig = Figure::new();
        assert!(fig.calls().is_empty());
        assert!(!fig.is_strict());
        assert_eq!(fig.title(), None);
        assert_eq!(fig.x_label(), None);
    }

    #[test]
    fn lenient_records_absent_series() {
        let mut fig = Figure::new();
        fig.error_bar_plot(None, None, None, "o", None).unwrap();
        assert_eq!(
            fig.calls()[0],
            PlotCall::ErrorBar {
                x: None,
                y: None,
                y_error: None,
                marker: "o".into(),
                color: None,
            }
        );
    }

    #[test]
    fn strict_rejects_missing_axis() {
        let mut fig = Figure::strict();
        let err = fig
            .error_bar_plot(Some(&[1.0][..]), None, None, "o", None)
            .unwrap_err();
        assert_eq!(
            err,
            FigureError::MissingSeries {
                field: "y".to_string()
            }
        );
        assert!(fig.calls().is_empty());
    }

    #[test]
    fn strict_rejects_ragged_error_bars() {
        let mut fig = Figure::strict();
        let err = fig
            .error_bar_plot(Some(&[1.0, 2.0][..]), Some(&[3.0, 4.0][..]), Some(&[0.1][..]), "o", None)
            .unwrap_err();
        assert_eq!(
            err,
            FigureError::ShapeMismatch {
                x: 2,
                y: 2,
                y_error: Some(1)
            }
        );
    }

    #[test]
    fn strict_allows_missing_error_bars() {
        let mut fig = Figure::strict();
        fig.error_bar_plot(Some(&[1.0][..]), Some(&[2.0][..]), None, "o", None)
            .unwrap();
        assert_eq!(fig.series().count(), 1);
    }

    #[test]
    fn title_can_be_cleared() {
        let mut fig = Figure::new();
        fig.set_title(Some("first")).unwrap();
        assert_eq!(fig.title(), Some("first"));
        fig.set_title(None).unwrap();
        assert_eq!(fig.title(), None);
    }

    #[test]
    fn labels_report_latest_value() {
        let mut fig = Figure::new();
        fig.set_x_label("a").unwrap();
        fig.set_x_label("b").unwrap();
        fig.set_y_label("c").unwrap();
        assert_eq!(fig.x_label(), Some("b"));
        assert_eq!(fig.y_label(), Some("c"));
    }

    #[test]
    fn clear_keeps_mode() {
        let mut fig = Figure::strict();
        fig.set_x_label("t").unwrap();
        fig.clear();
        assert!(fig.calls().is_empty());
        assert!(fig.is_strict());
    }

    #[test]
    fn json_is_tagged_by_call() {
        let mut fig = Figure::new();
        fig.set_y_label("Flux").unwrap();
        let json = fig.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["calls"][0]["call"], "y_label");
        assert_eq!(parsed["calls"][0]["text"], "Flux");
        assert!(parsed.get("strict").is_none());
    }
}

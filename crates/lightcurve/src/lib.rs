//! # lumen-lightcurve
//!
//! An astronomical light curve: a time series of flux measurements with
//! per-point uncertainties and caller-defined quality flags.
//!
//! [`LightCurve`] is a plain record. Its fields are public, independently
//! optional and never cross-checked unless the caller asks for it with
//! [`LightCurve::validate`]. Drawing is delegated to a [`Plotter`] handle
//! passed into [`LightCurve::render`]; this crate ships no drawing engine,
//! only [`Figure`], which records what it was asked to draw.
//!
//! ## Quick Start
//!
//! ```
//! use lumen_lightcurve::{Figure, LightCurve};
//!
//! let lc = LightCurve::new()
//!     .with_times(vec![1.0, 2.0, 3.0])
//!     .with_fluxes(vec![4.0, 5.0, 6.0])
//!     .with_uncertainties(vec![0.1, 0.1, 0.1])
//!     .with_flags(vec![0, 0, 0])
//!     .with_name("star1");
//!
//! let mut fig = Figure::new();
//! lc.render(&mut fig, None).unwrap();
//! assert_eq!(fig.title(), Some("star1"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `curve` | The `LightCurve` record and its `render` operation |
//! | `plotter` | The plotting collaborator trait and fixed labels |
//! | `color` | Colour hint newtype |
//! | `figure` | In-memory recording `Plotter` |
//! | `error` | Error types |

mod color;
mod curve;
mod error;
mod figure;
mod plotter;

pub use color::Color;
pub use curve::LightCurve;
pub use error::{FigureError, LightCurveError};
pub use figure::{Figure, PlotCall};
pub use plotter::{CIRCLE_MARKER, Plotter, X_LABEL, Y_LABEL};

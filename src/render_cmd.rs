//! Render command: draw a configured light curve into a recording figure.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lumen_lightcurve::{Color, Figure, LightCurve};

use crate::cli::RenderArgs;
use crate::config::LumenConfig;

/// Load the curve, render it, and write the recorded calls as JSON.
pub fn run(args: RenderArgs) -> Result<()> {
    let _cmd = info_span!("render").entered();
    // 1. Load config; CLI flags override the [render] section
    let config = LumenConfig::load(&args.config)?;
    let settings = RenderSettings {
        color: args.color.or(config.render.color),
        strict: args.strict || config.render.strict,
        validate: args.validate || config.render.validate,
    };
    info!(
        name = config.curve.name.as_deref(),
        points = config.curve.n_points(),
        "light curve loaded"
    );

    // 2. Render
    let figure = render_curve(&config.curve, &settings)?;

    // 3. Emit
    let json = figure.to_json()?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "figure written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Effective render options after merging CLI and config.
struct RenderSettings {
    color: Option<Color>,
    strict: bool,
    validate: bool,
}

fn render_curve(curve: &LightCurve, settings: &RenderSettings) -> Result<Figure> {
    if settings.validate {
        curve.validate().context("light curve failed validation")?;
    }
    let mut figure = if settings.strict {
        Figure::strict()
    } else {
        Figure::new()
    };
    curve
        .render(&mut figure, settings.color.as_ref())
        .with_context(|| {
            format!(
                "failed to render light curve {}",
                curve.name.as_deref().unwrap_or("<unnamed>")
            )
        })?;
    Ok(figure)
}

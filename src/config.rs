use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use lumen_lightcurve::{Color, LightCurve};

/// Top-level Lumen configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LumenConfig {
    /// Render settings.
    #[serde(default)]
    pub render: RenderToml,

    /// The light curve to render.
    #[serde(default)]
    pub curve: LightCurve,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub validate: bool,
}

impl LumenConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&toml_str)
    }

    fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = LumenConfig::parse("").unwrap();
        assert!(cfg.render.color.is_none());
        assert!(!cfg.render.strict);
        assert!(!cfg.render.validate);
        assert_eq!(cfg.curve, LightCurve::default());
    }

    #[test]
    fn full_config() {
        let cfg = LumenConfig::parse(
            r##"
            [render]
            color = "#1f77b4"
            strict = true

            [curve]
            name = "star1"
            times = [1.0, 2.0, 3.0]
            fluxes = [4.0, 5.0, 6.0]
            uncertainties = [0.1, 0.1, 0.1]
            flags = [0, 0, 0]
            "##,
        )
        .unwrap();
        assert_eq!(cfg.render.color.as_ref().map(Color::as_str), Some("#1f77b4"));
        assert!(cfg.render.strict);
        assert_eq!(cfg.curve.n_points(), Some(3));
        assert_eq!(cfg.curve.flags, Some(vec![0, 0, 0]));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = LumenConfig::parse("[plot]\ndpi = 300").unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }

    #[test]
    fn blank_color_is_rejected() {
        assert!(LumenConfig::parse("[render]\ncolor = \"\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = LumenConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}

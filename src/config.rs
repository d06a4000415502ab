use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Rendering configuration shared by both pipelines.
///
/// Built directly (`RenderOptions { resolution: 64, ..Default::default() }`)
/// or loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Fraction of the trajectory span added as padding on each side of the
    /// plotted extent. Unset resolves to 0.5 for 1-D and 1.0 for 2-D.
    pub margin: Option<f64>,

    /// Samples per axis for the landscape grid. The 2-D sampler performs
    /// `resolution^2` objective evaluations.
    pub resolution: usize,

    /// Draw labeled contour lines instead of a heatmap (2-D only).
    pub contours: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: None,
            resolution: 500,
            contours: false,
        }
    }
}

impl RenderOptions {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read render options file {}", path.display()))?;
        let options: RenderOptions = toml::from_str(&raw)
            .with_context(|| format!("failed to parse render options file {}", path.display()))?;
        options
            .validate()
            .with_context(|| format!("invalid render options in {}", path.display()))?;
        Ok(options)
    }

    /// Reject bad values before any sampling work begins.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.resolution >= 2,
            "resolution must be at least 2, got {}",
            self.resolution
        );
        if let Some(margin) = self.margin {
            ensure!(
                margin.is_finite() && margin >= 0.0,
                "margin must be a non-negative finite number, got {margin}"
            );
        }
        Ok(())
    }

    pub fn margin_1d(&self) -> f64 {
        self.margin.unwrap_or(0.5)
    }

    pub fn margin_2d(&self) -> f64 {
        self.margin.unwrap_or(1.0)
    }
}

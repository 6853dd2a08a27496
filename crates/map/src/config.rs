use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use input::Key;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The key that acts as the "primary" modifier for temporary zoom tools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryModifier {
    /// Command on macOS, super or windows elsewhere.
    #[default]
    Meta,
    Control,
}

impl PrimaryModifier {
    pub fn matches(self, key: &Key) -> bool {
        match self {
            PrimaryModifier::Meta => key.is_logo(),
            PrimaryModifier::Control => key.is_ctrl(),
        }
    }
}

/// User settings of the map input layer, stored as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Zoom with the mouse wheel, one step per notch.
    pub wheel_zoom: bool,
    /// Scale change of a single zoom step, must be greater than one.
    pub zoom_factor: f32,
    pub primary_modifier: PrimaryModifier,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_zoom: true,
            zoom_factor: 1.5,
            primary_modifier: PrimaryModifier::default(),
        }
    }
}

impl InputConfig {
    /// Loads the config at `path`, a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no input config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read input config {}", path.display()));
            }
        };
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse input config {}", path.display()))?;
        config.validate()?;
        info!("loaded input config from {}", path.display());
        Ok(config)
    }

    /// Loads the config from the user's config directory.
    pub fn load_default() -> Result<Self> {
        Self::load(&config_path()?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let contents =
            serde_json::to_string_pretty(self).context("failed to serialize input config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write input config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.) {
            bail!(
                "zoom_factor must be a finite number greater than 1, got {}",
                self.zoom_factor
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("failed to get the config dir, please set $XDG_CONFIG_HOME or $HOME")?
        .join("flex-projector")
        .join("input.json"))
}

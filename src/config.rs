//! Configuration loading and defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::InitError;
use crate::interaction::PointerParams;
use crate::links::{LinkStrategy, DEFAULT_LINK_DISTANCE};
use crate::point::{SpawnParams, DEFAULT_PULSE_RATE};
use crate::scheduler::SceneParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub points: PointsConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub pointer: PointerConfig,

    /// Fixed RNG seed for a reproducible layout
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial logical size
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default)]
    pub fullscreen: bool,

    /// Clear color, linear RGB in 0.0 - 1.0
    #[serde(default)]
    pub background: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_count")]
    pub count: usize,

    /// Per-axis speed bound in logical units per frame
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,

    #[serde(default = "default_min_radius")]
    pub min_radius: f32,
    #[serde(default = "default_max_radius")]
    pub max_radius: f32,

    /// Hue band in degrees
    #[serde(default = "default_min_hue")]
    pub min_hue: f32,
    #[serde(default = "default_max_hue")]
    pub max_hue: f32,

    /// Pulse phase advance in radians per frame
    #[serde(default = "default_pulse_rate")]
    pub pulse_rate: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_link_distance")]
    pub max_distance: f32,

    #[serde(default)]
    pub strategy: LinkStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerConfig {
    #[serde(default = "default_pointer_line_distance")]
    pub line_distance: f32,

    #[serde(default = "default_pointer_glow_distance")]
    pub glow_distance: f32,
}

// Default value functions
fn default_title() -> String {
    "circuit".to_string()
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    800
}
fn default_count() -> usize {
    120
}
fn default_max_speed() -> f32 {
    SpawnParams::default().max_speed
}
fn default_min_radius() -> f32 {
    SpawnParams::default().min_radius
}
fn default_max_radius() -> f32 {
    SpawnParams::default().max_radius
}
fn default_min_hue() -> f32 {
    SpawnParams::default().min_hue
}
fn default_max_hue() -> f32 {
    SpawnParams::default().max_hue
}
fn default_pulse_rate() -> f32 {
    DEFAULT_PULSE_RATE
}
fn default_link_distance() -> f32 {
    DEFAULT_LINK_DISTANCE
}
fn default_pointer_line_distance() -> f32 {
    PointerParams::default().line_distance
}
fn default_pointer_glow_distance() -> f32 {
    PointerParams::default().glow_distance
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            fullscreen: false,
            background: [0.0; 3],
        }
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            max_speed: default_max_speed(),
            min_radius: default_min_radius(),
            max_radius: default_max_radius(),
            min_hue: default_min_hue(),
            max_hue: default_max_hue(),
            pulse_rate: default_pulse_rate(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            max_distance: default_link_distance(),
            strategy: LinkStrategy::default(),
        }
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            line_distance: default_pointer_line_distance(),
            glow_distance: default_pointer_glow_distance(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// An explicitly given path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Config::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "circuit-glow")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), InitError> {
        let p = &self.points;
        let finite = [
            p.max_speed,
            p.min_radius,
            p.max_radius,
            p.min_hue,
            p.max_hue,
            p.pulse_rate,
            self.links.max_distance,
            self.pointer.line_distance,
            self.pointer.glow_distance,
        ]
        .iter()
        .all(|v| v.is_finite());
        let checks = [
            (finite, "point, link and pointer values must be finite"),
            (self.window.width > 0 && self.window.height > 0, "window size must be non-zero"),
            (p.max_speed >= 0.0, "points.max_speed must not be negative"),
            (p.min_radius > 0.0, "points.min_radius must be positive"),
            (p.min_radius <= p.max_radius, "points.min_radius exceeds points.max_radius"),
            (p.min_hue <= p.max_hue, "points.min_hue exceeds points.max_hue"),
            (self.links.max_distance > 0.0, "links.max_distance must be positive"),
            (self.pointer.line_distance > 0.0, "pointer.line_distance must be positive"),
            (self.pointer.glow_distance > 0.0, "pointer.glow_distance must be positive"),
        ];
        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(InitError::InvalidConfig((*msg).to_string())),
            None => Ok(()),
        }
    }

    pub fn scene_params(&self) -> SceneParams {
        SceneParams {
            point_count: self.points.count,
            spawn: SpawnParams {
                max_speed: self.points.max_speed,
                min_radius: self.points.min_radius,
                max_radius: self.points.max_radius,
                min_hue: self.points.min_hue,
                max_hue: self.points.max_hue,
            },
            pulse_rate: self.points.pulse_rate,
            link_distance: self.links.max_distance,
            link_strategy: self.links.strategy,
            pointer: PointerParams {
                line_distance: self.pointer.line_distance,
                glow_distance: self.pointer.glow_distance,
            },
        }
    }
}

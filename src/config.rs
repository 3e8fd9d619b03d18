//! Tunable constants for the scene and page timing
//!
//! Every field has a default, so a config file only needs the values it changes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::animation::{FloatParams, RotationRates};
use crate::field::SpiralParams;
use crate::math::{Color, ColorGradient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    pub spread: f32,
    pub rotation: RotationRates,
    pub point_size: f32,
    pub color: Color,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 3000,
            spread: 10.0,
            rotation: RotationRates::new(-1.0 / 20.0, -1.0 / 25.0, 0.0),
            point_size: 0.003,
            color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub count: usize,
    pub shape: SpiralParams,
    pub gradient: ColorGradient,
    pub rotation: RotationRates,
    /// Group placement: the galaxy spins inside a tilted, offset frame
    pub position: [f32; 3],
    pub tilt: [f32; 3],
    pub opacity: f32,
    pub point_size: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            shape: SpiralParams::default(),
            gradient: ColorGradient::new(
                Color::new(247.0 / 255.0, 215.0 / 255.0, 148.0 / 255.0),
                Color::new(145.0 / 255.0, 94.0 / 255.0, 1.0),
            ),
            rotation: RotationRates::new(0.0, 0.15, 0.0),
            position: [0.0, 0.0, -0.5],
            tilt: [0.4, 0.0, 0.2],
            opacity: 0.8,
            point_size: 0.008,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonConfig {
    pub radius: f32,
    pub position: [f32; 3],
    pub color: Color,
    pub float: FloatParams,
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            radius: 0.25,
            position: [0.0, 0.0, -0.2],
            color: Color::new(225.0 / 255.0, 225.0 / 255.0, 225.0 / 255.0),
            float: FloatParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_intensity: f32,
    pub ambient_color: Color,
    pub point_intensity: f32,
    pub point_color: Color,
    /// Range past which the point light contributes nothing
    pub point_distance: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.7,
            ambient_color: Color::WHITE,
            point_intensity: 2.0,
            point_color: Color::WHITE,
            point_distance: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    pub background: Color,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 2.0],
            fov: 75.0,
            background: Color::new(5.0 / 255.0, 8.0 / 255.0, 22.0 / 255.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub preloader_ms: u64,
    pub preloader_exit_ms: u64,
    pub reveal_ms: u64,
    pub preloader_text: Vec<String>,
    pub preloader_char_delay_ms: u64,
    pub hero_titles: Vec<String>,
    pub hero_char_delay_ms: u64,
    pub hero_pause_ms: u64,
    pub name_colors: Vec<Color>,
    pub name_cycle_secs: f32,
    pub code_rain_drops: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        let hex = |h: &str| Color::from_hex(h).unwrap_or(Color::WHITE);
        Self {
            preloader_ms: 3000,
            preloader_exit_ms: 1000,
            reveal_ms: 1200,
            preloader_text: vec!["AI".to_string()],
            preloader_char_delay_ms: 150,
            hero_titles: vec![
                "Generative AI Developer".to_string(),
                "Next.js Developer".to_string(),
                "Backend Specialist".to_string(),
            ],
            hero_char_delay_ms: 80,
            hero_pause_ms: 1500,
            name_colors: vec![hex("#22d3ee"), hex("#a855f7"), hex("#ec4899"), hex("#6366f1")],
            name_cycle_secs: 4.0,
            code_rain_drops: 80,
        }
    }
}

impl TimelineConfig {
    pub fn preloader(&self) -> Duration {
        Duration::from_millis(self.preloader_ms)
    }

    pub fn preloader_exit(&self) -> Duration {
        Duration::from_millis(self.preloader_exit_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub stars: StarFieldConfig,
    pub galaxy: GalaxyConfig,
    pub moon: MoonConfig,
    pub lights: LightingConfig,
    pub camera: CameraConfig,
    pub timeline: TimelineConfig,
    /// Optional JSON file replacing the built-in page content
    pub content: Option<PathBuf>,
}

/// Top-level sections a config file may override
const SECTIONS: [&str; 6] = ["stars", "galaxy", "moon", "lights", "camera", "timeline"];

fn missing_sections(value: &serde_json::Value) -> Vec<&'static str> {
    SECTIONS
        .into_iter()
        .filter(|name| value.get(name).is_none())
        .collect()
}

impl PortfolioConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing portfolio config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;

        let missing = missing_sections(&value);
        if !missing.is_empty() {
            log::warn!(
                "config {} has no {} section(s), using defaults",
                path.display(),
                missing.join(", ")
            );
        }

        let mut config: Self = serde_json::from_value(value)
            .with_context(|| format!("parsing config {}", path.display()))?;

        // Content paths are relative to the config file
        if let (Some(content), Some(dir)) = (config.content.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = PortfolioConfig::from_json("{}").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.stars.count, 3000);
        assert_eq!(config.galaxy.shape.branches, 3);
        assert_eq!(config.timeline.preloader(), Duration::from_millis(3000));
    }

    #[test]
    fn reports_missing_sections() {
        let value: serde_json::Value = serde_json::from_str(r#"{"stars": {}, "camera": {}}"#).unwrap();
        assert_eq!(missing_sections(&value), vec!["galaxy", "moon", "lights", "timeline"]);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PortfolioConfig::from_json(
            r##"{ "galaxy": { "count": 10, "gradient": { "inner": "#000000", "outer": "#ffffff" } } }"##,
        )
        .unwrap();

        assert_eq!(config.galaxy.count, 10);
        assert_eq!(config.galaxy.gradient.inner, Color::BLACK);
        assert_eq!(config.galaxy.shape.max_radius, 1.5);
        assert_eq!(config.stars, StarFieldConfig::default());
    }

    #[test]
    fn moon_surface_keys_without_effect_are_ignored() {
        let config = PortfolioConfig::from_json(
            r##"{ "moon": { "radius": 0.5, "roughness": 0.8, "metalness": 0.1 } }"##,
        )
        .unwrap();

        assert_eq!(config.moon.radius, 0.5);
        assert_eq!(config.moon.color, MoonConfig::default().color);
    }

    #[test]
    fn bad_color_is_an_error() {
        let err = PortfolioConfig::from_json(r#"{ "stars": { "color": "white" } }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid hex color"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = PortfolioConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn resolve_without_path_is_default() {
        assert_eq!(PortfolioConfig::resolve(None).unwrap(), PortfolioConfig::default());
    }

    #[test]
    fn default_name_colors_parse() {
        let timeline = TimelineConfig::default();
        assert_eq!(timeline.name_colors.len(), 4);
        assert_eq!(timeline.name_colors[0].to_hex(), "#22d3ee");
    }
}

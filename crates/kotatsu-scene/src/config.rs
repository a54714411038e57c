use std::path::Path;

use kotatsu_core::params::default_hole_margin;
use kotatsu_core::{ConfigError, RoomParams, TableGeometryParams};
use kotatsu_sky::{ColorKeyframe, KeyframeTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse scene RON: {0}")]
    SceneParseError(String),
    #[error("Failed to read scene file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn default_scale() -> f32 {
    1.0
}

/// Static scene configuration, loaded once at scene construction.
/// Any omitted table/room/margin value is derived from `scale`; an omitted
/// sky table uses the built-in keyframes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub table: Option<TableGeometryParams>,
    #[serde(default)]
    pub room: Option<RoomParams>,
    #[serde(default)]
    pub hole_margin: Option<f32>,
    #[serde(default)]
    pub sky: Option<Vec<ColorKeyframe>>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            table: None,
            room: None,
            hole_margin: None,
            sky: None,
        }
    }
}

impl SceneConfig {
    pub fn table_params(&self) -> TableGeometryParams {
        self.table
            .unwrap_or_else(|| TableGeometryParams::scaled(self.scale))
    }

    pub fn room_params(&self) -> RoomParams {
        self.room.unwrap_or_else(|| RoomParams::scaled(self.scale))
    }

    pub fn hole_margin(&self) -> f32 {
        self.hole_margin
            .unwrap_or_else(|| default_hole_margin(self.scale))
    }

    /// Validate the configured sky keyframes, or fall back to the default table.
    pub fn keyframe_table(&self) -> Result<KeyframeTable, ConfigError> {
        match &self.sky {
            Some(frames) => KeyframeTable::new(frames.clone()),
            None => Ok(KeyframeTable::default()),
        }
    }
}

/// Parse a scene config from RON. `Some(..)` may be omitted around optional fields.
pub fn load_scene_from_str(ron_str: &str) -> Result<SceneConfig, LoadError> {
    let options =
        ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::SceneParseError(e.to_string()))
}

pub fn load_scene_from_path(path: &Path) -> Result<SceneConfig, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    load_scene_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_scaled_defaults() {
        let config = load_scene_from_str("(scale: 2.0)").expect("should parse");
        assert_eq!(config.table_params(), TableGeometryParams::scaled(2.0));
        assert_eq!(config.room_params(), RoomParams::scaled(2.0));
        assert!((config.hole_margin() - 0.4).abs() < 1e-6);
        assert_eq!(
            config.keyframe_table().expect("default sky"),
            KeyframeTable::default()
        );
    }

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.room_params(), RoomParams::default());
    }

    #[test]
    fn test_explicit_fields_override_scale() {
        let ron = r#"(
            scale: 1.0,
            table: (
                table_size: 3.0,
                table_height: 0.5,
                leg_height: 0.35,
                blanket_thickness: 0.06,
            ),
            room: (width: 10.0, depth: 9.0),
            hole_margin: 0.3,
        )"#;
        let config = load_scene_from_str(ron).expect("should parse");
        let table = config.table_params();
        assert_eq!(table.table_size, 3.0);
        // slope falls back to the default angle
        assert_eq!(
            table.slope_angle_rad,
            kotatsu_core::constants::DEFAULT_SLOPE_ANGLE_RAD
        );
        assert_eq!(config.room_params().depth, 9.0);
        assert_eq!(config.hole_margin(), 0.3);
    }

    #[test]
    fn test_invalid_sky_reported_by_keyframe_table() {
        let ron = r#"(
            sky: [(hour: 5.0, top: 0, bottom: 0)],
        )"#;
        let config = load_scene_from_str(ron).expect("RON itself is fine");
        assert_eq!(
            config.keyframe_table(),
            Err(ConfigError::TooFewKeyframes(1))
        );
    }

    #[test]
    fn test_malformed_scene_rejected() {
        let result = load_scene_from_str("(scale: )");
        assert!(matches!(result, Err(LoadError::SceneParseError(_))));
    }

    #[test]
    fn test_missing_file_reported() {
        let result = load_scene_from_path(Path::new("/nonexistent/scene.ron"));
        assert!(matches!(result, Err(LoadError::ReadError { .. })));
    }

    #[test]
    fn test_bundled_scene_loads() {
        let ron = include_str!("../../../data/scenes/omisoka.ron");
        let config = load_scene_from_str(ron).expect("bundled scene loads");
        assert_eq!(config.scale, 1.0);
        assert!(config.keyframe_table().is_ok());
    }
}

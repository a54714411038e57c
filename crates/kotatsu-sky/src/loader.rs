use kotatsu_core::ConfigError;

use crate::keyframe::{ColorKeyframe, KeyframeTable};

/// Parse and validate a keyframe table from RON: a list of
/// `(hour: f64, top: color, bottom: color)` entries.
pub fn load_keyframes_from_str(ron_str: &str) -> Result<KeyframeTable, ConfigError> {
    let options = ron::Options::default();
    let keyframes: Vec<ColorKeyframe> = options
        .from_str(ron_str)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    KeyframeTable::new(keyframes)
}

use thiserror::Error;

/// Malformed sky keyframe configuration. Raised when the table is built,
/// never while sampling.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("keyframe table needs at least 2 entries, got {0}")]
    TooFewKeyframes(usize),

    #[error("keyframe {index} hour {hour} is outside [0, 24)")]
    HourOutOfRange { index: usize, hour: f64 },

    #[error("keyframe {index} hour {hour} duplicates the previous entry")]
    DuplicateHour { index: usize, hour: f64 },

    #[error("keyframe {index} hour {hour} is earlier than previous hour {previous}")]
    NonMonotonicHour { index: usize, hour: f64, previous: f64 },

    #[error("invalid color {0:?} (expected 0xRRGGBB or \"#RRGGBB\")")]
    InvalidColor(String),

    #[error("failed to parse keyframes RON: {0}")]
    Parse(String),
}

/// Invalid table or room parameters. No partial geometry is produced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryError {
    #[error("table size must be positive, got {0}")]
    NonPositiveTableSize(f32),

    #[error("blanket thickness must not be negative, got {0}")]
    NegativeBlanketThickness(f32),

    #[error("slope angle {0} rad is outside (0, pi/2)")]
    SlopeOutOfRange(f32),

    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("skirt top {0} lies below the ground plane")]
    SkirtBelowGround(f32),

    #[error("room must be positive in both axes, got {width} x {depth}")]
    InvalidRoom { width: f32, depth: f32 },

    #[error("aperture footprint must be non-negative, got half-extent {0}")]
    NegativeFootprint(f32),

    #[error("hole margin must be non-negative, got {0}")]
    NegativeMargin(f32),
}

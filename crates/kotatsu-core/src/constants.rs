//! Shared constants for the scene artifacts.
//! Geometry values are in meters at scale 1.0 and are multiplied by the
//! scene scale where noted.

/// Hours in one day. Keyframe hours live in [0, HOURS_PER_DAY).
pub const HOURS_PER_DAY: f64 = 24.0;

/// Width of one resampling bucket in minutes.
pub const BUCKET_MINUTES: u32 = 15;

/// Recommended host poll cadence for the sky bucket check (one minute).
pub const SKY_POLL_INTERVAL_MS: u64 = 60_000;

/// Default skirt slope against the ground plane (30 degrees).
pub const DEFAULT_SLOPE_ANGLE_RAD: f32 = std::f32::consts::FRAC_PI_6;

/// Fraction of the table height the skirt top sits below the tabletop center.
pub const TABLETOP_SINK_FRACTION: f32 = 0.05;

/// Table edge length at scale 1.0.
pub const DEFAULT_TABLE_SIZE: f32 = 2.0;

/// Table height at scale 1.0.
pub const DEFAULT_TABLE_HEIGHT: f32 = 0.4;

/// Leg height at scale 1.0.
pub const DEFAULT_LEG_HEIGHT: f32 = 0.3;

/// Blanket thickness at scale 1.0.
pub const DEFAULT_BLANKET_THICKNESS: f32 = 0.05;

/// Room width and depth at scale 1.0.
pub const DEFAULT_ROOM_SIZE: f32 = 8.0;

/// Clearance between the skirt footprint and the floor aperture at scale 1.0.
pub const DEFAULT_HOLE_MARGIN: f32 = 0.2;

/// Floor collider slab thickness. Not scaled: the slab top stays at y = 0.
pub const FLOOR_THICKNESS: f32 = 0.1;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::GeometryError;

fn default_slope() -> f32 {
    DEFAULT_SLOPE_ANGLE_RAD
}

/// Dimensions of the low table the skirt hangs from.
/// Supplied once per scene; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableGeometryParams {
    /// Edge length of the square tabletop.
    pub table_size: f32,
    pub table_height: f32,
    pub leg_height: f32,
    pub blanket_thickness: f32,
    /// Skirt slope against the ground plane, in (0, pi/2).
    #[serde(default = "default_slope")]
    pub slope_angle_rad: f32,
}

impl Default for TableGeometryParams {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

impl TableGeometryParams {
    /// Default table proportions multiplied by `scale`. Slope is scale-free.
    pub fn scaled(scale: f32) -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE * scale,
            table_height: DEFAULT_TABLE_HEIGHT * scale,
            leg_height: DEFAULT_LEG_HEIGHT * scale,
            blanket_thickness: DEFAULT_BLANKET_THICKNESS * scale,
            slope_angle_rad: DEFAULT_SLOPE_ANGLE_RAD,
        }
    }

    /// Reject parameters that cannot produce a skirt. Values are never clamped.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("table_size", self.table_size),
            ("table_height", self.table_height),
            ("leg_height", self.leg_height),
            ("blanket_thickness", self.blanket_thickness),
            ("slope_angle_rad", self.slope_angle_rad),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { name, value });
            }
        }
        if self.table_size <= 0.0 {
            return Err(GeometryError::NonPositiveTableSize(self.table_size));
        }
        if self.blanket_thickness < 0.0 {
            return Err(GeometryError::NegativeBlanketThickness(
                self.blanket_thickness,
            ));
        }
        if self.slope_angle_rad <= 0.0 || self.slope_angle_rad >= std::f32::consts::FRAC_PI_2 {
            return Err(GeometryError::SlopeOutOfRange(self.slope_angle_rad));
        }
        Ok(())
    }
}

/// Floor footprint of the room, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomParams {
    pub width: f32,
    pub depth: f32,
}

impl Default for RoomParams {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

impl RoomParams {
    pub fn scaled(scale: f32) -> Self {
        Self {
            width: DEFAULT_ROOM_SIZE * scale,
            depth: DEFAULT_ROOM_SIZE * scale,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }

    pub fn area(&self) -> f32 {
        self.width * self.depth
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.depth) {
            Ok(())
        } else {
            Err(GeometryError::InvalidRoom {
                width: self.width,
                depth: self.depth,
            })
        }
    }
}

/// Default clearance between skirt footprint and floor aperture.
pub fn default_hole_margin(scale: f32) -> f32 {
    DEFAULT_HOLE_MARGIN * scale
}

//! Floor collision frame around the skirt footprint.
//!
//! The room rectangle minus a centered aperture is cut into at most four
//! strips. West/east strips span the full room depth; north/south strips
//! span only the aperture width, so no two strips overlap:
//!
//! ```text
//!   +----+----------+----+
//!   |    |  north   |    |
//!   |    +----------+    |
//!   |west| aperture |east|
//!   |    +----------+    |
//!   |    |  south   |    |
//!   +----+----------+----+
//! ```

use glam::Vec2;
use kotatsu_core::constants::FLOOR_THICKNESS;
use kotatsu_core::{GeometryError, RoomParams};
use serde::{Deserialize, Serialize};

/// Centered rectangular hole in the floor collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorAperture {
    pub half_x: f32,
    pub half_z: f32,
}

impl FloorAperture {
    /// Footprint half-extent plus margin, clamped to the room per axis.
    pub fn fit(room: &RoomParams, footprint_half_extent: f32) -> Self {
        Self {
            half_x: room.half_width().min(footprint_half_extent),
            half_z: room.half_depth().min(footprint_half_extent),
        }
    }

    pub fn width(&self) -> f32 {
        self.half_x * 2.0
    }

    pub fn depth(&self) -> f32 {
        self.half_z * 2.0
    }

    pub fn area(&self) -> f32 {
        self.width() * self.depth()
    }

    pub fn contains_xz(&self, p: Vec2) -> bool {
        p.x.abs() <= self.half_x && p.y.abs() <= self.half_z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StripSide {
    West,
    East,
    North,
    South,
}

/// One static floor slab. `center` and `size` are in the XZ plane
/// (`Vec2::y` is world Z); the slab's top face sits at y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectCollider {
    pub side: StripSide,
    pub center: Vec2,
    pub size: Vec2,
    pub thickness: f32,
    pub center_y: f32,
}

impl RectCollider {
    fn slab(side: StripSide, center: Vec2, size: Vec2) -> Self {
        Self {
            side,
            center,
            size,
            thickness: FLOOR_THICKNESS,
            center_y: -FLOOR_THICKNESS / 2.0,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// Area shared with `other`; touching edges count as zero.
    pub fn overlap_area(&self, other: &RectCollider) -> f32 {
        let lo = self.min().max(other.min());
        let hi = self.max().min(other.max());
        let extent = (hi - lo).max(Vec2::ZERO);
        extent.x * extent.y
    }

    pub fn contains_xz(&self, p: Vec2) -> bool {
        let (lo, hi) = (self.min(), self.max());
        p.x >= lo.x && p.x <= hi.x && p.y >= lo.y && p.y <= hi.y
    }

    /// Full 3D box extents (x, y, z) for physics registration.
    pub fn box_size(&self) -> [f32; 3] {
        [self.size.x, self.thickness, self.size.y]
    }

    pub fn box_center(&self) -> [f32; 3] {
        [self.center.x, self.center_y, self.center.y]
    }
}

/// Aperture plus the strips framing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorLayout {
    pub room: RoomParams,
    pub aperture: FloorAperture,
    pub strips: Vec<RectCollider>,
}

impl FloorLayout {
    /// Strip area plus aperture area. Equals the room area up to rounding.
    pub fn covered_area(&self) -> f32 {
        self.strips.iter().map(RectCollider::area).sum::<f32>() + self.aperture.area()
    }
}

pub struct FloorApertureBuilder;

impl FloorApertureBuilder {
    /// Cut an aperture of half-extent `bottom_half_extent + margin` (clamped
    /// to the room) and frame it with strips. `margin` must be finite and
    /// non-negative so the aperture never shrinks inside the footprint. Strips whose width or depth
    /// is not positive are left out, including north/south strips over a
    /// zero-width aperture; an aperture covering the whole room
    /// yields no strips.
    pub fn build(
        room: &RoomParams,
        bottom_half_extent: f32,
        margin: f32,
    ) -> Result<FloorLayout, GeometryError> {
        room.validate()?;
        if !margin.is_finite() {
            return Err(GeometryError::NonFinite {
                name: "hole margin",
                value: margin,
            });
        }
        if margin < 0.0 {
            return Err(GeometryError::NegativeMargin(margin));
        }
        let footprint = bottom_half_extent + margin;
        if !footprint.is_finite() {
            return Err(GeometryError::NonFinite {
                name: "aperture footprint",
                value: footprint,
            });
        }
        if footprint < 0.0 {
            return Err(GeometryError::NegativeFootprint(footprint));
        }

        let aperture = FloorAperture::fit(room, footprint);
        let side_width = (room.width - aperture.width()) / 2.0;
        let side_depth = (room.depth - aperture.depth()) / 2.0;

        let mut strips = Vec::with_capacity(4);
        if side_width > 0.0 {
            let offset = aperture.half_x + side_width / 2.0;
            let size = Vec2::new(side_width, room.depth);
            strips.push(RectCollider::slab(StripSide::West, Vec2::new(-offset, 0.0), size));
            strips.push(RectCollider::slab(StripSide::East, Vec2::new(offset, 0.0), size));
        }
        if side_depth > 0.0 && aperture.width() > 0.0 {
            let offset = aperture.half_z + side_depth / 2.0;
            let size = Vec2::new(aperture.width(), side_depth);
            strips.push(RectCollider::slab(StripSide::North, Vec2::new(0.0, -offset), size));
            strips.push(RectCollider::slab(StripSide::South, Vec2::new(0.0, offset), size));
        }

        log::debug!(
            "floor aperture {:.3} x {:.3} in {:.3} x {:.3} room, {} strips",
            aperture.width(),
            aperture.depth(),
            room.width,
            room.depth,
            strips.len()
        );

        Ok(FloorLayout {
            room: *room,
            aperture,
            strips,
        })
    }
}

/// The strips of [`FloorApertureBuilder::build`], for physics registration.
pub fn build_floor_colliders(
    room: &RoomParams,
    bottom_half_extent: f32,
    margin: f32,
) -> Result<Vec<RectCollider>, GeometryError> {
    FloorApertureBuilder::build(room, bottom_half_extent, margin).map(|layout| layout.strips)
}

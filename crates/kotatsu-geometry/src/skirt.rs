//! Sloped blanket skirt hanging from the table rim to the floor.
//!
//! Vertex layout (top ring 0..4 at `blanket_top_y`, ground ring 4..8 at y = 0):
//!
//! ```text
//!   z-  0 ---- 1        4 -------- 5
//!       |      |        |          |
//!   z+  3 ---- 2        7 -------- 6
//!      x-     x+       x-         x+
//! ```

use glam::Vec3;
use kotatsu_core::constants::TABLETOP_SINK_FRACTION;
use kotatsu_core::{GeometryError, TableGeometryParams};
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Height of the ground plane the skirt rests on.
pub const GROUND_Y: f32 = 0.0;

/// Triangles of the closed skirt hull, two per quad face.
const SKIRT_INDICES: [u32; 36] = [
    // top cap
    0, 2, 1, 0, 3, 2, //
    // north (z-)
    0, 1, 5, 0, 5, 4, //
    // east (x+)
    1, 2, 6, 1, 6, 5, //
    // south (z+)
    2, 3, 7, 2, 7, 6, //
    // west (x-)
    3, 0, 4, 3, 4, 7, //
    // bottom cap
    4, 5, 6, 4, 6, 7,
];

/// Derived skirt dimensions. The floor aperture reads
/// `bottom_half_extent` to keep its hole clear of the skirt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkirtExtents {
    pub blanket_top_y: f32,
    /// Vertical fall from the top ring to the ground; equals `blanket_top_y`.
    pub blanket_drop: f32,
    pub top_half_extent: f32,
    /// Half edge length of the square ground footprint.
    pub bottom_half_extent: f32,
}

impl SkirtExtents {
    pub fn from_params(params: &TableGeometryParams) -> Result<Self, GeometryError> {
        params.validate()?;

        let tabletop_center_y =
            params.leg_height + params.blanket_thickness + params.table_height / 2.0;
        let blanket_top_y = tabletop_center_y
            - params.table_height * TABLETOP_SINK_FRACTION
            - params.blanket_thickness / 2.0;
        if blanket_top_y < GROUND_Y {
            return Err(GeometryError::SkirtBelowGround(blanket_top_y));
        }

        let blanket_drop = blanket_top_y - GROUND_Y;
        let top_half_extent = params.table_size / 2.0;
        let bottom_half_extent = top_half_extent + blanket_drop / params.slope_angle_rad.tan();

        Ok(Self {
            blanket_top_y,
            blanket_drop,
            top_half_extent,
            bottom_half_extent,
        })
    }
}

/// Skirt mesh plus the extents it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SkirtGeometry {
    pub mesh: Mesh,
    pub extents: SkirtExtents,
}

impl SkirtGeometry {
    pub fn top_ring(&self) -> &[Vec3] {
        &self.mesh.positions[0..4]
    }

    pub fn ground_ring(&self) -> &[Vec3] {
        &self.mesh.positions[4..8]
    }
}

pub struct SkirtGeometryBuilder;

impl SkirtGeometryBuilder {
    /// Build the 8-vertex, 12-triangle skirt hull. Invalid parameters fail
    /// before any geometry is produced.
    pub fn build(params: &TableGeometryParams) -> Result<SkirtGeometry, GeometryError> {
        let extents = SkirtExtents::from_params(params)?;
        let t = extents.top_half_extent;
        let b = extents.bottom_half_extent;
        let y = extents.blanket_top_y;

        let positions = vec![
            Vec3::new(-t, y, -t),
            Vec3::new(t, y, -t),
            Vec3::new(t, y, t),
            Vec3::new(-t, y, t),
            Vec3::new(-b, GROUND_Y, -b),
            Vec3::new(b, GROUND_Y, -b),
            Vec3::new(b, GROUND_Y, b),
            Vec3::new(-b, GROUND_Y, b),
        ];
        let mesh = Mesh::from_triangles(positions, SKIRT_INDICES.to_vec());

        log::debug!(
            "built skirt: top y {:.3}, half extents {:.3} -> {:.3}",
            extents.blanket_top_y,
            extents.top_half_extent,
            extents.bottom_half_extent
        );
        Ok(SkirtGeometry { mesh, extents })
    }
}

/// Convenience entry point for [`SkirtGeometryBuilder::build`].
pub fn build_skirt_geometry(params: &TableGeometryParams) -> Result<SkirtGeometry, GeometryError> {
    SkirtGeometryBuilder::build(params)
}

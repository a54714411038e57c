pub mod aperture;
pub mod mesh;
pub mod skirt;

pub use aperture::{
    build_floor_colliders, FloorAperture, FloorApertureBuilder, FloorLayout, RectCollider,
    StripSide,
};
pub use mesh::{GpuVertex, Mesh};
pub use skirt::{build_skirt_geometry, SkirtExtents, SkirtGeometry, SkirtGeometryBuilder};

pub mod color;
pub mod constants;
pub mod error;
pub mod params;

pub use color::{ColorPair, Rgb24};
pub use error::{ConfigError, GeometryError};
pub use params::{RoomParams, TableGeometryParams};

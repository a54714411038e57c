pub mod assembly;
pub mod config;
pub mod slot;

pub use assembly::{AssembledScene, AssemblyError, SceneAssembler, SceneElement, SceneFailure};
pub use config::{load_scene_from_path, load_scene_from_str, LoadError, SceneConfig};
pub use slot::ArtifactSlot;

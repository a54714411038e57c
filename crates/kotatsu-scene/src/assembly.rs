use std::rc::Rc;

use kotatsu_core::{ConfigError, GeometryError, RoomParams, TableGeometryParams};
use kotatsu_geometry::{FloorApertureBuilder, FloorLayout, SkirtGeometry, SkirtGeometryBuilder};
use kotatsu_sky::{SkyPoller, TimeOfDayColorEngine};
use serde::Serialize;
use thiserror::Error;

use crate::config::SceneConfig;
use crate::slot::ArtifactSlot;

/// Independently assembled parts of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SceneElement {
    Sky,
    Skirt,
    Floor,
}

impl std::fmt::Display for SceneElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SceneElement::Sky => "sky",
            SceneElement::Skirt => "skirt",
            SceneElement::Floor => "floor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("floor aperture needs the skirt footprint, but the skirt failed to build")]
    MissingSkirt,
}

/// An element that failed to assemble. The rest of the scene is unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFailure {
    pub element: SceneElement,
    pub error: AssemblyError,
}

/// Scene artifacts after assembly. Geometry lives in [`ArtifactSlot`]s so
/// it can be rebuilt while the renderer and physics keep their old buffers.
#[derive(Debug)]
pub struct AssembledScene {
    sky: Option<SkyPoller>,
    skirt: ArtifactSlot<SkirtGeometry>,
    floor: ArtifactSlot<FloorLayout>,
    hole_margin: f32,
    failures: Vec<SceneFailure>,
}

impl AssembledScene {
    pub fn skirt(&self) -> Option<Rc<SkirtGeometry>> {
        self.skirt.current()
    }

    pub fn floor(&self) -> Option<Rc<FloorLayout>> {
        self.floor.current()
    }

    /// Generation counters of the skirt and floor slots.
    pub fn generations(&self) -> (u64, u64) {
        (self.skirt.generation(), self.floor.generation())
    }

    pub fn sky_poller(&self) -> Option<&SkyPoller> {
        self.sky.as_ref()
    }

    /// Hand the sky poller to the render loop that will own it.
    pub fn take_sky_poller(&mut self) -> Option<SkyPoller> {
        self.sky.take()
    }

    pub fn failures(&self) -> &[SceneFailure] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn hole_margin(&self) -> f32 {
        self.hole_margin
    }

    /// Rebuild skirt and floor for new parameters. Both are built before
    /// either slot is touched; on error the current pair stays bound.
    pub fn update_geometry(
        &mut self,
        table: &TableGeometryParams,
        room: &RoomParams,
        hole_margin: f32,
    ) -> Result<(), AssemblyError> {
        let skirt = SkirtGeometryBuilder::build(table)?;
        let floor =
            FloorApertureBuilder::build(room, skirt.extents.bottom_half_extent, hole_margin)?;

        self.skirt.replace(skirt);
        self.floor.replace(floor);
        self.hole_margin = hole_margin;
        // a successful rebuild supersedes earlier geometry failures
        self.failures
            .retain(|f| !matches!(f.element, SceneElement::Skirt | SceneElement::Floor));
        log::info!(
            "swapped scene geometry (generation {:?})",
            self.generations()
        );
        Ok(())
    }

    fn record(&mut self, element: SceneElement, error: AssemblyError) {
        log::warn!("scene element '{}' failed to assemble: {}", element, error);
        self.failures.push(SceneFailure { element, error });
    }
}

pub struct SceneAssembler;

impl SceneAssembler {
    /// Build every element independently. A failing element is recorded and
    /// skipped; only the floor depends on another element (the skirt).
    pub fn assemble(config: &SceneConfig) -> AssembledScene {
        let hole_margin = config.hole_margin();
        let mut scene = AssembledScene {
            sky: None,
            skirt: ArtifactSlot::empty(),
            floor: ArtifactSlot::empty(),
            hole_margin,
            failures: Vec::new(),
        };

        match config.keyframe_table() {
            Ok(table) => scene.sky = Some(SkyPoller::new(TimeOfDayColorEngine::new(table))),
            Err(e) => scene.record(SceneElement::Sky, e.into()),
        }

        let table = config.table_params();
        let footprint = match scene
            .skirt
            .replace_with(|| SkirtGeometryBuilder::build(&table))
        {
            Ok(skirt) => Some(skirt.extents.bottom_half_extent),
            Err(e) => {
                scene.record(SceneElement::Skirt, e.into());
                None
            }
        };

        match footprint {
            Some(bottom_half_extent) => {
                let room = config.room_params();
                if let Err(e) = scene.floor.replace_with(|| {
                    FloorApertureBuilder::build(&room, bottom_half_extent, hole_margin)
                }) {
                    scene.record(SceneElement::Floor, e.into());
                }
            }
            None => scene.record(SceneElement::Floor, AssemblyError::MissingSkirt),
        }

        log::info!(
            "assembled scene: {} element(s) failed",
            scene.failures.len()
        );
        scene
    }
}

use std::path::Path;

use kotatsu_core::Rgb24;
use kotatsu_geometry::{FloorLayout, SkirtExtents};
use kotatsu_scene::{AssembledScene, SceneElement};
use kotatsu_sky::TimeOfDay;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SkyReport {
    pub time: String,
    pub bucket: String,
    pub top: Rgb24,
    pub bottom: Rgb24,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkirtReport {
    pub extents: SkirtExtents,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub element: SceneElement,
    pub reason: String,
}

/// Snapshot of an assembled scene for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct SceneReport {
    pub sky: Option<SkyReport>,
    pub skirt: Option<SkirtReport>,
    pub floor: Option<FloorLayout>,
    pub failures: Vec<FailureReport>,
}

pub fn build_report(scene: &AssembledScene, now: TimeOfDay) -> SceneReport {
    let sky = scene.sky_poller().map(|poller| {
        let pair = poller.engine().sample(now);
        SkyReport {
            time: format!("{:02}:{:02}", now.hour(), now.minute()),
            bucket: now.bucket().to_string(),
            top: pair.top,
            bottom: pair.bottom,
        }
    });

    let skirt = scene.skirt().map(|skirt| SkirtReport {
        extents: skirt.extents,
        vertex_count: skirt.mesh.vertex_count(),
        triangle_count: skirt.mesh.triangle_count(),
    });

    SceneReport {
        sky,
        skirt,
        floor: scene.floor().map(|floor| (*floor).clone()),
        failures: scene
            .failures()
            .iter()
            .map(|f| FailureReport {
                element: f.element,
                reason: f.error.to_string(),
            })
            .collect(),
    }
}

/// Format a report as markdown.
pub fn format_markdown(report: &SceneReport) -> String {
    let mut out = String::new();

    out.push_str("### Sky\n\n");
    match &report.sky {
        Some(sky) => out.push_str(&format!(
            "| Time | Bucket | Top | Bottom |\n|------|--------|-----|--------|\n| {} | {} | {} | {} |\n\n",
            sky.time, sky.bucket, sky.top, sky.bottom
        )),
        None => out.push_str("_unavailable_\n\n"),
    }

    out.push_str("### Skirt\n\n");
    match &report.skirt {
        Some(skirt) => {
            let e = &skirt.extents;
            out.push_str("| Top Y | Drop | Top Half | Bottom Half | Vertices | Triangles |\n");
            out.push_str("|-------|------|----------|-------------|----------|-----------|\n");
            out.push_str(&format!(
                "| {:.4} | {:.4} | {:.4} | {:.4} | {} | {} |\n\n",
                e.blanket_top_y,
                e.blanket_drop,
                e.top_half_extent,
                e.bottom_half_extent,
                skirt.vertex_count,
                skirt.triangle_count,
            ));
        }
        None => out.push_str("_unavailable_\n\n"),
    }

    out.push_str("### Floor\n\n");
    match &report.floor {
        Some(floor) => {
            out.push_str(&format!(
                "Aperture {:.4} x {:.4} in {:.2} x {:.2} room, covered area {:.4}\n\n",
                floor.aperture.width(),
                floor.aperture.depth(),
                floor.room.width,
                floor.room.depth,
                floor.covered_area(),
            ));
            out.push_str("| Side | Center X | Center Z | Width | Depth |\n");
            out.push_str("|------|----------|----------|-------|-------|\n");
            for s in &floor.strips {
                out.push_str(&format!(
                    "| {:?} | {:.4} | {:.4} | {:.4} | {:.4} |\n",
                    s.side, s.center.x, s.center.y, s.size.x, s.size.y
                ));
            }
            out.push('\n');
        }
        None => out.push_str("_unavailable_\n\n"),
    }

    if !report.failures.is_empty() {
        out.push_str("### Failures\n\n");
        for f in &report.failures {
            out.push_str(&format!("  - {}: {}\n", f.element, f.reason));
        }
    }

    out
}

/// Save a report as pretty JSON, creating parent directories.
pub fn save_report(path: &Path, report: &SceneReport) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

//! Cross-artifact checks: the floor aperture must always clear the skirt,
//! plus the concrete sky and geometry scenarios.

use std::f32::consts::FRAC_PI_6;
use std::rc::Rc;

use glam::Vec2;
use kotatsu_core::{GeometryError, Rgb24, RoomParams, TableGeometryParams};
use kotatsu_geometry::{build_floor_colliders, FloorApertureBuilder, SkirtGeometryBuilder};
use kotatsu_scene::{
    load_scene_from_str, AssemblyError, SceneAssembler, SceneConfig, SceneElement,
};
use kotatsu_sky::{ColorKeyframe, KeyframeTable, TimeOfDayColorEngine};

fn scenario_b_table() -> TableGeometryParams {
    TableGeometryParams {
        table_size: 2.0,
        table_height: 0.4,
        leg_height: 0.3,
        blanket_thickness: 0.05,
        slope_angle_rad: FRAC_PI_6,
    }
}

#[test]
fn test_scenario_a_midpoint_blend() {
    let table = KeyframeTable::new(vec![
        ColorKeyframe::new(0.0, 0x0a0a20, 0x1a1a3a),
        ColorKeyframe::new(7.0, 0xff9966, 0xffb088),
    ])
    .expect("valid table");
    let engine = TimeOfDayColorEngine::new(table);
    let pair = engine.sample_hours(3.5);

    let a = ColorKeyframe::new(0.0, 0x0a0a20, 0x1a1a3a);
    let b = ColorKeyframe::new(7.0, 0xff9966, 0xffb088);
    let mid = |x: u8, y: u8| ((x as f64 + y as f64) / 2.0).round() as u8;
    assert_eq!(
        pair.top,
        Rgb24::from_channels(
            mid(a.top.r(), b.top.r()),
            mid(a.top.g(), b.top.g()),
            mid(a.top.b(), b.top.b())
        )
    );
    assert_eq!(
        pair.bottom,
        Rgb24::from_channels(
            mid(a.bottom.r(), b.bottom.r()),
            mid(a.bottom.g(), b.bottom.g()),
            mid(a.bottom.b(), b.bottom.b())
        )
    );
}

#[test]
fn test_scenario_b_four_strips_tile_room() {
    let skirt = SkirtGeometryBuilder::build(&scenario_b_table()).expect("valid table");
    assert!((skirt.extents.blanket_top_y - 0.505).abs() < 1e-5);
    let expected_bottom = 1.0 + 0.505 / FRAC_PI_6.tan();
    assert!((skirt.extents.bottom_half_extent - expected_bottom).abs() < 1e-5);

    let room = RoomParams {
        width: 8.0,
        depth: 8.0,
    };
    let layout = FloorApertureBuilder::build(&room, skirt.extents.bottom_half_extent, 0.2)
        .expect("valid room");
    assert_eq!(layout.strips.len(), 4);
    for strip in &layout.strips {
        assert!(strip.size.x > 0.0 && strip.size.y > 0.0);
    }
    let total: f32 =
        layout.strips.iter().map(|s| s.area()).sum::<f32>() + layout.aperture.area();
    assert!((total - 64.0).abs() < 1e-3, "total area {total}");
}

#[test]
fn test_scenario_c_aperture_fills_room() {
    let room = RoomParams {
        width: 8.0,
        depth: 8.0,
    };
    let layout = FloorApertureBuilder::build(&room, 3.0, 5.0).expect("valid room");
    assert_eq!(layout.aperture.half_x, 4.0);
    assert_eq!(layout.aperture.half_z, 4.0);
    assert!(layout.strips.is_empty());
    assert!(build_floor_colliders(&room, 3.0, 5.0)
        .expect("valid room")
        .is_empty());
}

#[test]
fn test_skirt_footprint_inside_aperture() {
    for scale in [0.25f32, 0.5, 1.0, 1.5] {
        for slope_deg in [20.0f32, 30.0, 45.0, 70.0] {
            let table = TableGeometryParams {
                slope_angle_rad: slope_deg.to_radians(),
                ..TableGeometryParams::scaled(scale)
            };
            let room = RoomParams::scaled(scale);
            let skirt = SkirtGeometryBuilder::build(&table).expect("valid table");
            let layout =
                FloorApertureBuilder::build(&room, skirt.extents.bottom_half_extent, 0.2 * scale)
                    .expect("valid room");

            for p in skirt.ground_ring() {
                let xz = Vec2::new(p.x, p.z);
                for strip in &layout.strips {
                    // strips may touch the footprint only when the aperture was clamped
                    let (lo, hi) = (strip.min(), strip.max());
                    let inside = xz.x > lo.x && xz.x < hi.x && xz.y > lo.y && xz.y < hi.y;
                    assert!(
                        !inside,
                        "scale {scale} slope {slope_deg}: ground vertex {xz:?} inside {:?} strip",
                        strip.side
                    );
                }
            }
        }
    }
}

#[test]
fn test_margin_clearance_when_room_is_large() {
    let table = TableGeometryParams::default();
    let skirt = SkirtGeometryBuilder::build(&table).expect("valid table");
    let room = RoomParams {
        width: 20.0,
        depth: 20.0,
    };
    let layout =
        FloorApertureBuilder::build(&room, skirt.extents.bottom_half_extent, 0.2).expect("valid");
    for strip in &layout.strips {
        for p in skirt.ground_ring() {
            let xz = Vec2::new(p.x, p.z);
            let gap = (strip.min() - xz).max(xz - strip.max()).max_element();
            assert!(gap >= 0.2 - 1e-5, "{:?} strip only {gap} from skirt", strip.side);
        }
    }
}

#[test]
fn test_negative_or_nan_margin_fails_the_floor_only() {
    for margin in [-1.5f32, -0.01, f32::NAN] {
        let config = SceneConfig {
            hole_margin: Some(margin),
            ..SceneConfig::default()
        };
        let scene = SceneAssembler::assemble(&config);
        assert!(scene.skirt().is_some(), "skirt unaffected by margin {margin}");
        assert!(scene.sky_poller().is_some());
        assert!(scene.floor().is_none(), "no floor may cover the skirt");

        let failures = scene.failures();
        assert_eq!(failures.len(), 1, "margin {margin}: {failures:?}");
        assert_eq!(failures[0].element, SceneElement::Floor);
        assert!(matches!(
            failures[0].error,
            AssemblyError::Geometry(
                GeometryError::NegativeMargin(_) | GeometryError::NonFinite { .. }
            )
        ));
    }

    // a rebuild with a negative margin keeps the bound floor
    let mut scene = SceneAssembler::assemble(&SceneConfig::default());
    let bound_floor = scene.floor().expect("floor built");
    assert!(scene
        .update_geometry(&TableGeometryParams::default(), &RoomParams::default(), -1.5)
        .is_err());
    assert!(Rc::ptr_eq(&bound_floor, &scene.floor().expect("still bound")));
}

#[test]
fn test_scene_rebuild_is_atomic() {
    let mut scene = SceneAssembler::assemble(&SceneConfig::default());
    let bound_skirt = scene.skirt().expect("skirt built");
    let bound_floor = scene.floor().expect("floor built");

    let bigger = TableGeometryParams::scaled(1.2);
    scene
        .update_geometry(&bigger, &RoomParams::scaled(1.2), 0.24)
        .expect("valid update");

    let new_skirt = scene.skirt().expect("skirt built");
    assert!(!Rc::ptr_eq(&bound_skirt, &new_skirt));
    assert!(new_skirt.extents.bottom_half_extent > bound_skirt.extents.bottom_half_extent);
    // renderer and physics keep reading the buffers they were given
    assert_eq!(bound_skirt.extents.top_half_extent, 1.0);
    assert_eq!(bound_floor.room.width, 8.0);
    assert_eq!(scene.generations(), (2, 2));

    // a failing rebuild leaves both artifacts bound
    let broken = TableGeometryParams {
        slope_angle_rad: 2.0,
        ..bigger
    };
    assert!(scene
        .update_geometry(&broken, &RoomParams::default(), 0.2)
        .is_err());
    assert!(Rc::ptr_eq(&new_skirt, &scene.skirt().expect("still bound")));
    assert_eq!(scene.generations(), (2, 2));

    // a valid skirt with an invalid room must not swap the skirt alone
    let bad_room = RoomParams {
        width: -1.0,
        depth: 8.0,
    };
    assert!(scene
        .update_geometry(&TableGeometryParams::default(), &bad_room, 0.2)
        .is_err());
    assert!(Rc::ptr_eq(&new_skirt, &scene.skirt().expect("still bound")));
    assert_eq!(scene.generations(), (2, 2));
}

#[test]
fn test_bundled_scene_assembles() {
    let config = load_scene_from_str(include_str!("../../../data/scenes/omisoka.ron"))
        .expect("bundled scene loads");
    let scene = SceneAssembler::assemble(&config);
    assert!(scene.is_complete(), "failures: {:?}", scene.failures());
    let floor = scene.floor().expect("floor built");
    assert_eq!(floor.strips.len(), 4);
    assert!((floor.covered_area() - 64.0).abs() < 1e-3);
}

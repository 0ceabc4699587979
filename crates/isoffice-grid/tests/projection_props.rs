//! Property tests for the isometric projection and depth keys.

use isoffice_grid::{depth_key, GridPos, IsoProjection, TileSize};
use proptest::prelude::*;

fn grid_coord() -> impl Strategy<Value = f64> {
    -50.0f64..50.0
}

fn tile() -> impl Strategy<Value = TileSize> {
    (2.0f64..256.0, 2.0f64..128.0).prop_map(|(w, h)| TileSize::new(w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn screen_to_grid_inverts_grid_to_screen(gx in grid_coord(), gy in grid_coord()) {
        let p = IsoProjection::default();
        let s = p.grid_to_screen(gx, gy);
        let back = p.screen_to_grid(s.x, s.y);
        prop_assert!((back.gx - gx).abs() < 1e-9, "gx {} -> {}", gx, back.gx);
        prop_assert!((back.gy - gy).abs() < 1e-9, "gy {} -> {}", gy, back.gy);
    }

    #[test]
    fn round_trip_holds_for_any_tile_size(
        t in tile(),
        gx in grid_coord(),
        gy in grid_coord(),
    ) {
        let p = IsoProjection::new(t);
        let back = p.unproject(p.project(GridPos::new(gx, gy)));
        prop_assert!((back.gx - gx).abs() < 1e-9);
        prop_assert!((back.gy - gy).abs() < 1e-9);
    }

    #[test]
    fn unit_step_along_gx_is_constant(gx in grid_coord(), gy in grid_coord()) {
        let p = IsoProjection::default();
        let d = p.grid_to_screen(gx + 1.0, gy) - p.grid_to_screen(gx, gy);
        prop_assert!((d.x - p.half_width()).abs() < 1e-9);
        prop_assert!((d.y - p.half_height()).abs() < 1e-9);
    }

    #[test]
    fn unit_step_along_gy_is_constant(gx in grid_coord(), gy in grid_coord()) {
        let p = IsoProjection::default();
        let d = p.grid_to_screen(gx, gy + 1.0) - p.grid_to_screen(gx, gy);
        prop_assert!((d.x + p.half_width()).abs() < 1e-9);
        prop_assert!((d.y - p.half_height()).abs() < 1e-9);
    }

    #[test]
    fn depth_key_is_monotonic_in_diagonal(
        gx in -50i32..50,
        gy in -50i32..50,
        a in 0u32..100,
        b in 0u32..100,
    ) {
        // Any layer on the next diagonal beats any layer on this one.
        let here = depth_key(gx as f64, gy as f64, a);
        let next = depth_key(gx as f64 + 1.0, gy as f64, b);
        prop_assert!(next > here);
    }
}

// Host-side tests for the point-cloud generator.

use galaxy_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

fn small(count: u32) -> GalaxyParameters {
    GalaxyParameters {
        count,
        ..GalaxyParameters::default()
    }
}

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// Angle around +Y measured from +X towards +Z, in [0, TAU)
fn arm_angle(p: glam::Vec3) -> f32 {
    p.z.atan2(p.x).rem_euclid(TAU)
}

fn angle_close(a: f32, b: f32, eps: f32) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d < eps || TAU - d < eps
}

#[test]
fn output_sequences_match_count() {
    let cloud = generate_with(&small(1_000), &mut seeded(1));
    assert_eq!(cloud.len(), 1_000);
    assert_eq!(cloud.positions().len(), 3_000);
    assert_eq!(cloud.colors().len(), 3_000);
    assert_eq!(cloud.to_vertices().len(), 1_000);
}

#[test]
fn zero_count_yields_empty_cloud() {
    let cloud = generate(&small(0));
    assert!(cloud.is_empty());
    assert_eq!(cloud.len(), 0);
    assert!(cloud.position(0).is_none());
}

#[test]
fn same_seed_is_reproducible_and_new_draws_differ() {
    let params = small(500);
    let a = generate_with(&params, &mut seeded(7));
    let b = generate_with(&params, &mut seeded(7));
    let c = generate_with(&params, &mut seeded(8));
    assert_eq!(a, b);
    assert_ne!(a, c);

    // The thread RNG path re-draws every time
    assert_ne!(generate(&params), generate(&params));
}

#[test]
fn points_fall_on_their_arm_without_spin_or_jitter() {
    for branches in [3u32, 2, 5] {
        let params = GalaxyParameters {
            count: 300,
            branches,
            spin: 0.0,
            randomness: 0.0,
            ..GalaxyParameters::default()
        };
        let cloud = generate_with(&params, &mut seeded(branches as u64));
        for i in 0..cloud.len() {
            let p = cloud.position(i).unwrap();
            assert_eq!(p.y, 0.0);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            if r < 1e-3 {
                continue;
            }
            let expected = (i as u32 % branches) as f32 / branches as f32 * TAU;
            assert!(
                angle_close(arm_angle(p), expected, 1e-3),
                "point {} at {:?} not on arm {} of {}",
                i,
                p,
                i as u32 % branches,
                branches
            );
        }
    }
}

// Share of points per arm direction after undoing the spin. Only points
// well outside the core are counted, where jitter barely moves the angle.
fn arm_histogram(params: &GalaxyParameters, seed: u64, arms_at: &[f32]) -> Vec<f32> {
    let cloud = generate_with(params, &mut seeded(seed));
    let mut hits = vec![0usize; arms_at.len()];
    let mut sampled = 0usize;
    for i in 0..cloud.len() {
        let p = cloud.position(i).unwrap();
        let r = (p.x * p.x + p.z * p.z).sqrt();
        if r < 2.0 {
            continue;
        }
        sampled += 1;
        let unspun = arm_angle(p) - r * params.spin;
        if let Some(k) = arms_at
            .iter()
            .position(|&a| angle_close(unspun, a, 15f32.to_radians()))
        {
            hits[k] += 1;
        }
    }
    assert!(sampled > 1_000);
    hits.iter().map(|&h| h as f32 / sampled as f32).collect()
}

#[test]
fn arm_spacing_follows_branch_count_under_default_jitter() {
    let three = GalaxyParameters {
        count: 20_000,
        ..GalaxyParameters::default()
    };
    let two = GalaxyParameters {
        branches: 2,
        ..three.clone()
    };
    let thirds = [0.0, TAU / 3.0, 2.0 * TAU / 3.0];
    let halves = [0.0, TAU / 2.0];

    // Three arms: every point sits near a multiple of 2π/3, evenly shared
    let h = arm_histogram(&three, 31, &thirds);
    assert!(h.iter().sum::<f32>() > 0.95, "{:?}", h);
    assert!(h.iter().all(|&f| (f - 1.0 / 3.0).abs() < 0.05), "{:?}", h);
    assert!(arm_histogram(&three, 31, &[TAU / 2.0])[0] < 0.01);

    // Two arms: the mass moves to multiples of π and leaves 2π/3 empty
    let h = arm_histogram(&two, 31, &halves);
    assert!(h.iter().sum::<f32>() > 0.95, "{:?}", h);
    assert!(h.iter().all(|&f| (f - 0.5).abs() < 0.05), "{:?}", h);
    let stale = arm_histogram(&two, 31, &thirds[1..]);
    assert!(stale.iter().sum::<f32>() < 0.01, "{:?}", stale);
}

#[test]
fn arm_assignment_is_round_robin() {
    assert_eq!(branch_angle(0, 3), 0.0);
    assert_eq!(branch_angle(3, 3), branch_angle(0, 3));
    assert!((branch_angle(1, 3) - TAU / 3.0).abs() < 1e-6);
    assert!((branch_angle(4, 3) - branch_angle(1, 3)).abs() < 1e-6);
    assert!((branch_angle(1, 2) - TAU / 2.0).abs() < 1e-6);
}

#[test]
fn spin_rotates_by_radius() {
    let params = GalaxyParameters {
        count: 200,
        branches: 1,
        spin: 0.5,
        randomness: 0.0,
        ..GalaxyParameters::default()
    };
    let cloud = generate_with(&params, &mut seeded(3));
    for i in 0..cloud.len() {
        let p = cloud.position(i).unwrap();
        let r = (p.x * p.x + p.z * p.z).sqrt();
        if r < 1e-3 {
            continue;
        }
        assert!(angle_close(arm_angle(p), r * params.spin, 1e-3));
    }
}

#[test]
fn jitter_is_bounded_by_randomness() {
    let params = small(2_000);
    let cloud = generate_with(&params, &mut seeded(11));
    let reach = params.radius + params.randomness * 2f32.sqrt() + 1e-4;
    for i in 0..cloud.len() {
        let p = cloud.position(i).unwrap();
        assert!(p.y.abs() <= params.randomness + 1e-6);
        assert!((p.x * p.x + p.z * p.z).sqrt() <= reach);
    }
}

#[test]
fn zero_randomness_keeps_points_in_the_plane() {
    let params = GalaxyParameters {
        count: 500,
        randomness: 0.0,
        ..GalaxyParameters::default()
    };
    let cloud = generate_with(&params, &mut seeded(5));
    assert!(cloud.positions().chunks(3).all(|p| p[1] == 0.0));
}

#[test]
fn color_blends_by_radius_fraction() {
    let params = GalaxyParameters {
        count: 400,
        randomness: 0.0,
        ..GalaxyParameters::default()
    };
    let cloud = generate_with(&params, &mut seeded(21));
    for i in 0..cloud.len() {
        let p = cloud.position(i).unwrap();
        let t = (p.x * p.x + p.z * p.z).sqrt() / params.radius;
        let expected = params.inside_color.lerp(params.outside_color, t).to_array();
        let got = cloud.color(i).unwrap();
        for ch in 0..3 {
            assert!((got[ch] - expected[ch]).abs() < 1e-4, "point {} channel {}", i, ch);
        }
    }
}

#[test]
fn default_galaxy_runs_from_warm_core_to_cool_rim() {
    let params = GalaxyParameters::default();
    let cloud = generate_with(&params, &mut seeded(42));
    assert_eq!(cloud.len(), DEFAULT_COUNT as usize);

    let inside = Rgb::from_hex(DEFAULT_INSIDE_COLOR).unwrap().to_array();
    let outside = Rgb::from_hex(DEFAULT_OUTSIDE_COLOR).unwrap().to_array();
    let near = |c: [f32; 3], target: [f32; 3]| (0..3).all(|k| (c[k] - target[k]).abs() < 0.1);

    // Colors do not depend on jitter, so the extremes of the color ramp
    // must sit at the two ends of the gradient.
    let mut warmest = cloud.color(0).unwrap();
    let mut coolest = warmest;
    for i in 0..cloud.len() {
        let c = cloud.color(i).unwrap();
        if c[0] > warmest[0] {
            warmest = c;
        }
        if c[0] < coolest[0] {
            coolest = c;
        }
    }
    assert!(near(warmest, inside), "warmest {:?}", warmest);
    assert!(near(coolest, outside), "coolest {:?}", coolest);
}

#[test]
fn zero_branches_is_degenerate_not_a_panic() {
    let params = GalaxyParameters {
        count: 10,
        branches: 0,
        ..GalaxyParameters::default()
    };
    assert!(branch_angle(3, 0).is_nan());
    let cloud = generate_with(&params, &mut seeded(9));
    assert_eq!(cloud.len(), 10);
    let p = cloud.position(0).unwrap();
    assert!(p.x.is_nan() && p.z.is_nan());
    assert!(p.y.is_finite());
    assert_eq!(params.validate(), Err(ParamError::ZeroBranches));
}

#[test]
fn vertices_interleave_position_and_color() {
    let cloud = generate_with(&small(3), &mut seeded(2));
    let verts = cloud.to_vertices();
    for (i, v) in verts.iter().enumerate() {
        assert_eq!(glam::Vec3::from(v.position), cloud.position(i).unwrap());
        assert_eq!(v.color, cloud.color(i).unwrap());
    }
}

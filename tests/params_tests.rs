// Host-side tests for parameter ranges, validation and colors.

use galaxy_core::*;

#[test]
fn defaults_match_the_published_table() {
    let p = GalaxyParameters::default();
    assert_eq!(p.count, 100_000);
    assert_eq!(p.size, 0.01);
    assert_eq!(p.radius, 5.0);
    assert_eq!(p.branches, 3);
    assert_eq!(p.spin, 1.0);
    assert_eq!(p.randomness, 0.2);
    assert_eq!(p.randomness_power, 3.0);
    assert_eq!(p.inside_color.to_hex(), DEFAULT_INSIDE_COLOR);
    assert_eq!(p.outside_color.to_hex(), DEFAULT_OUTSIDE_COLOR);
    assert!(p.validate().is_ok());
}

#[test]
fn every_default_sits_inside_its_range() {
    let p = GalaxyParameters::default();
    for field in ParamField::ALL {
        let r = field.range();
        let v = field.get(&p);
        assert!(v >= r.min && v <= r.max, "{} = {}", field.key(), v);
        // f32 storage drifts a hair off the f64 grid
        assert!((r.clamp_snap(v) - v).abs() < 1e-6, "{} not on its grid", field.key());
    }
}

#[test]
fn clamp_snap_clamps_and_snaps() {
    let count = ParamField::Count.range();
    assert_eq!(count.clamp_snap(5_000_000.0), 1_000_000.0);
    assert_eq!(count.clamp_snap(0.0), 100.0);
    assert_eq!(count.clamp_snap(150.0), 200.0);
    assert_eq!(count.clamp_snap(149.0), 100.0);

    let branches = ParamField::Branches.range();
    assert_eq!(branches.clamp_snap(1.0), 2.0);
    assert_eq!(branches.clamp_snap(7.4), 7.0);

    let spin = ParamField::Spin.range();
    assert_eq!(spin.clamp_snap(-7.0), -5.0);
    assert_eq!(spin.clamp_snap(0.3), 0.3);

    let randomness = ParamField::Randomness.range();
    assert_eq!(randomness.clamp_snap(0.0307), 0.031);
    assert_eq!(randomness.clamp_snap(f64::NAN), 0.0);
}

#[test]
fn decimals_follow_the_step() {
    assert_eq!(ParamField::Size.range().decimals(), 3);
    assert_eq!(ParamField::Radius.range().decimals(), 2);
    assert_eq!(ParamField::Branches.range().decimals(), 0);
    assert_eq!(ParamField::Count.range().decimals(), 0);
}

#[test]
fn format_uses_step_precision() {
    let p = GalaxyParameters::default();
    assert_eq!(ParamField::Count.format(&p), "100000");
    assert_eq!(ParamField::Size.format(&p), "0.010");
    assert_eq!(ParamField::Radius.format(&p), "5.00");
    assert_eq!(ParamField::Branches.format(&p), "3");
}

#[test]
fn apply_stores_the_snapped_value() {
    let mut p = GalaxyParameters::default();
    assert_eq!(ParamField::Branches.apply(&mut p, 25.0), 20.0);
    assert_eq!(p.branches, 20);
    assert_eq!(ParamField::Count.apply(&mut p, 1_234.0), 1_200.0);
    assert_eq!(p.count, 1_200);
    let stored = ParamField::RandomnessPower.apply(&mut p, 0.5);
    assert_eq!(stored, 1.0);
    assert_eq!(p.randomness_power, 1.0);
}

#[test]
fn typed_entries_reach_steps_the_slider_skips() {
    let mut p = GalaxyParameters::default();
    assert_eq!(ParamField::Spin.apply_text(&mut p, "1.237"), Some(1.237));
    assert!((p.spin - 1.237).abs() < 1e-6);
    assert_eq!(ParamField::Count.apply_text(&mut p, " 123400 "), Some(123_400.0));
    assert_eq!(p.count, 123_400);
    // Typed values are clamped and snapped like slider values
    assert_eq!(ParamField::Randomness.apply_text(&mut p, "0.12345"), Some(0.123));
    assert_eq!(ParamField::Branches.apply_text(&mut p, "99"), Some(20.0));
    assert_eq!(p.branches, 20);
}

#[test]
fn unusable_typed_entries_leave_the_record_alone() {
    let mut p = GalaxyParameters::default();
    let before = p.clone();
    for text in ["", "  ", "abc", "NaN", "inf", "-inf", "1,5"] {
        assert_eq!(ParamField::Radius.apply_text(&mut p, text), None, "{:?}", text);
    }
    assert_eq!(p, before);
}

#[test]
fn nudge_moves_by_whole_steps_and_stops_at_the_ends() {
    let mut p = GalaxyParameters::default();
    assert_eq!(ParamField::Branches.nudge(&mut p, 1.0), 4.0);
    assert_eq!(ParamField::Branches.nudge(&mut p, -10.0), 2.0);
    assert_eq!(ParamField::Count.nudge(&mut p, 10.0), 101_000.0);
    p.spin = 5.0;
    assert_eq!(ParamField::Spin.nudge(&mut p, 1.0), 5.0);
}

#[test]
fn keys_are_stable_identifiers() {
    let keys: Vec<&str> = ParamField::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(
        keys,
        ["count", "size", "radius", "branches", "spin", "randomness", "randomnessPower"]
    );
    assert_eq!(ColorField::Inside.key(), "insideColor");
    assert_eq!(ColorField::Outside.key(), "outsideColor");
}

#[test]
fn validate_rejects_unusable_records() {
    let base = GalaxyParameters::default();

    let p = GalaxyParameters { branches: 0, ..base.clone() };
    assert_eq!(p.validate(), Err(ParamError::ZeroBranches));

    let p = GalaxyParameters { spin: f32::NAN, ..base.clone() };
    assert_eq!(p.validate(), Err(ParamError::NonFinite { field: "spin" }));

    let p = GalaxyParameters { size: 0.0, ..base.clone() };
    assert!(matches!(p.validate(), Err(ParamError::OutOfRange { field: "size", .. })));

    let p = GalaxyParameters { radius: -1.0, ..base.clone() };
    assert!(matches!(p.validate(), Err(ParamError::OutOfRange { field: "radius", .. })));

    let p = GalaxyParameters { randomness_power: 0.5, ..base.clone() };
    assert!(matches!(
        p.validate(),
        Err(ParamError::OutOfRange { field: "randomnessPower", .. })
    ));

    let p = GalaxyParameters { count: MAX_COUNT + 1, ..base.clone() };
    assert!(matches!(p.validate(), Err(ParamError::OutOfRange { field: "count", .. })));
}

#[test]
fn validate_accepts_edges_the_generator_handles() {
    let base = GalaxyParameters::default();
    assert!(GalaxyParameters { count: 0, ..base.clone() }.validate().is_ok());
    assert!(GalaxyParameters { branches: 1, ..base.clone() }.validate().is_ok());
    assert!(GalaxyParameters { randomness: 0.0, ..base.clone() }.validate().is_ok());
    assert!(GalaxyParameters { spin: -5.0, ..base }.validate().is_ok());
}

#[test]
fn hex_parsing_accepts_long_short_and_bare_forms() {
    assert_eq!(Rgb::from_hex("#ff6030").unwrap(), Rgb::from_u8(0xff, 0x60, 0x30));
    assert_eq!(Rgb::from_hex("1b3984").unwrap(), Rgb::from_u8(0x1b, 0x39, 0x84));
    assert_eq!(Rgb::from_hex("#abc").unwrap().to_hex(), "#aabbcc");
    assert_eq!(" #FFFFFF ".parse::<Rgb>().unwrap(), Rgb::WHITE);
}

#[test]
fn hex_parsing_rejects_garbage() {
    for bad in ["", "#", "#12345", "#gggggg", "#ff60301", "#ééé"] {
        assert!(
            matches!(Rgb::from_hex(bad), Err(ParamError::InvalidColor(_))),
            "{:?} should not parse",
            bad
        );
    }
}

#[test]
fn lerp_hits_both_endpoints() {
    let a = Rgb::from_hex(DEFAULT_INSIDE_COLOR).unwrap();
    let b = Rgb::from_hex(DEFAULT_OUTSIDE_COLOR).unwrap();
    assert_eq!(a.lerp(b, 0.0), a);
    let end = a.lerp(b, 1.0);
    assert!((end.r - b.r).abs() < 1e-6 && (end.g - b.g).abs() < 1e-6 && (end.b - b.b).abs() < 1e-6);
    let mid = Rgb::BLACK.lerp(Rgb::WHITE, 0.5);
    assert_eq!(mid.to_array(), [0.5, 0.5, 0.5]);
}

#[test]
fn colors_read_and_write_by_field() {
    let mut p = GalaxyParameters::default();
    p.set_color(ColorField::Outside, Rgb::WHITE);
    assert_eq!(p.color(ColorField::Outside), Rgb::WHITE);
    assert_eq!(p.color(ColorField::Inside).to_string(), DEFAULT_INSIDE_COLOR);
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(ParamError::ZeroBranches.to_string(), "branches must be at least 1");
    let e = Rgb::from_hex("nope").unwrap_err();
    assert!(e.to_string().contains("nope"));
}

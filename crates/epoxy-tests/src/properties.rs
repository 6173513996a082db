//! Whole-system properties of the floor transform.
//!
//! Each test sweeps every style and scheme (or a range of sizes) rather
//! than a single hand-picked case.

use approx::assert_relative_eq;
use epoxy_core::{FloorRegion, RgbaImage};
use epoxy_ops::{apply_profile, transform_pixel};
use epoxy_style::{DEFAULT_STYLE, StyleProfile, Tint, resolve, scheme_names, style_names};

use crate::noise_image;

/// Every style, alone and with every scheme.
fn all_combinations() -> Vec<(&'static str, Option<&'static str>)> {
    let mut out = Vec::new();
    for style in style_names() {
        out.push((style, None));
        for scheme in scheme_names() {
            out.push((style, Some(scheme)));
        }
    }
    out
}

#[test]
fn region_bounds_for_all_heights() {
    for h in 1..=2000u32 {
        let region = FloorRegion::detect(640, h);
        assert_eq!(region.start_y as f64, (h as f64 * 0.6).floor(), "h={h}");
        assert!(region.start_y < region.end_y, "h={h}");
        assert_eq!(region.end_y, h);
    }
    let empty = FloorRegion::detect(640, 0);
    assert_eq!((empty.start_y, empty.end_y), (0, 0));
}

#[test]
fn rows_above_floor_are_untouched() {
    let src = noise_image(23, 19, 11);
    let region = FloorRegion::detect(23, 19);
    for (style, scheme) in all_combinations() {
        let out = apply_profile(&src, region, &resolve(style, scheme));
        for y in 0..region.start_y {
            assert_eq!(out.row(y), src.row(y), "{style} / {scheme:?} row {y}");
        }
    }
}

#[test]
fn alpha_is_preserved() {
    let src = noise_image(17, 13, 99);
    let region = FloorRegion::detect(17, 13);
    for (style, scheme) in all_combinations() {
        let out = apply_profile(&src, region, &resolve(style, scheme));
        let alpha_in = src.as_raw().chunks_exact(4).map(|p| p[3]);
        let alpha_out = out.as_raw().chunks_exact(4).map(|p| p[3]);
        assert!(alpha_in.eq(alpha_out), "{style} / {scheme:?}");
    }
}

#[test]
fn unknown_style_matches_default() {
    let src = noise_image(12, 12, 5);
    let region = FloorRegion::detect(12, 12);
    let expected = apply_profile(&src, region, &resolve(DEFAULT_STYLE, None));
    for name in ["", "Granit", "metallic epoksi", "Düz Renk", "🙂"] {
        assert_eq!(apply_profile(&src, region, &resolve(name, None)), expected, "{name:?}");
    }
}

#[test]
fn reflection_darkens_down_the_floor() {
    // Mid-dark gray keeps every stage away from the clamps.
    let src = RgbaImage::filled(3, 40, [80, 80, 80, 255]);
    let region = FloorRegion::detect(3, 40);
    for style in style_names() {
        let profile = resolve(style, None);
        if profile.reflection <= 0.0 {
            continue;
        }
        let out = apply_profile(&src, region, &profile);
        let mut prev = u8::MAX;
        for y in region.rows() {
            let px = out.pixel(0, y).unwrap();
            let level = px[0].max(px[1]).max(px[2]);
            assert!(level <= prev, "{style}: row {y} brighter than the row above");
            prev = level;
        }
        let top = out.pixel(0, region.start_y).unwrap();
        let bottom = out.pixel(0, region.end_y - 1).unwrap();
        assert!(top[0] > bottom[0], "{style}: no visible gloss gradient");
    }
}

#[test]
fn extreme_profiles_stay_in_range() {
    let extremes = [
        StyleProfile::new()
            .with_brightness(2.0)
            .with_contrast(3.0)
            .with_saturation(3.0)
            .with_reflection(1.0)
            .with_tint(Tint::new(255, 0, 255, 1.0)),
        StyleProfile::new().with_brightness(0.0).with_contrast(0.0).with_saturation(0.0),
        StyleProfile::new().with_contrast(10.0).with_saturation(5.0).with_reflection(1.0),
    ];
    let src = noise_image(16, 16, 1234);
    for profile in &extremes {
        for px in src.as_raw().chunks_exact(4) {
            let rgb = [px[0] as f32, px[1] as f32, px[2] as f32];
            for t in [0.0, 0.5, 1.0] {
                for c in transform_pixel(rgb, profile, t) {
                    assert!((0.0..=255.0).contains(&c), "{c} out of range for {profile:?}");
                }
            }
        }
        // Byte write-back must not panic or wrap.
        let _ = apply_profile(&src, FloorRegion::detect(16, 16), profile);
    }
}

#[test]
fn white_stays_white_under_default() {
    let white = RgbaImage::filled(10, 10, [255, 255, 255, 255]);
    let out = apply_profile(&white, FloorRegion::detect(10, 10), &resolve("Düz Renk Epoksi", None));
    assert_eq!(out, white);
}

#[test]
fn scheme_applies_to_fallback_style() {
    let src = noise_image(10, 10, 3);
    let region = FloorRegion::detect(10, 10);
    for scheme in scheme_names() {
        let fallback = apply_profile(&src, region, &resolve("No Such Style", Some(scheme)));
        let direct = apply_profile(&src, region, &resolve(DEFAULT_STYLE, Some(scheme)));
        assert_eq!(fallback, direct, "{scheme}");

        let tint = resolve("No Such Style", Some(scheme)).tint.unwrap();
        let entry = epoxy_style::scheme(scheme).unwrap();
        assert_eq!((tint.r, tint.g, tint.b), (entry.r, entry.g, entry.b));
        assert_relative_eq!(tint.opacity, entry.opacity);
    }
}

#[test]
fn resolution_is_pure() {
    for (style, scheme) in all_combinations() {
        assert_eq!(resolve(style, scheme), resolve(style, scheme));
    }
    // Catalog values survive repeated merges.
    let before = epoxy_style::style("Metallic Epoksi").unwrap();
    for scheme in scheme_names() {
        let _ = resolve("Metallic Epoksi", Some(scheme));
    }
    assert_eq!(epoxy_style::style("Metallic Epoksi").unwrap(), before);
}

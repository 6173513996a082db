//! Digest-based determinism checks.
//!
//! The transform must give byte-identical output for identical input, no
//! matter how many times it runs or whether rows are processed serially
//! or on the rayon pool. Comparing SHA-256 digests of whole catalogs of
//! renders keeps the failure output short.

use epoxy_core::FloorRegion;
use epoxy_ops::{apply_profile, apply_profile_raw, parallel};
use epoxy_style::{resolve, scheme_names, style_names};

use crate::{noise_image, room_image, sha256_hex};

/// One digest per (style, scheme) render of `image`, serial path.
fn catalog_digests(image: &epoxy_core::RgbaImage) -> Vec<String> {
    let region = FloorRegion::detect(image.width(), image.height());
    let mut digests = Vec::new();
    for style in style_names() {
        for scheme in std::iter::once(None).chain(scheme_names().map(Some)) {
            let out = apply_profile(image, region, &resolve(style, scheme));
            digests.push(sha256_hex(out.as_raw()));
        }
    }
    digests
}

#[test]
fn golden_repeat_runs_identical() {
    let image = room_image(64, 48);
    assert_eq!(catalog_digests(&image), catalog_digests(&image));
}

#[test]
fn golden_parallel_matches_serial() {
    let image = noise_image(97, 61, 42);
    let region = FloorRegion::detect(97, 61);
    for style in style_names() {
        let profile = resolve(style, Some("Mavi-Beyaz Kombin"));
        let serial = apply_profile(&image, region, &profile);
        let par = parallel::apply_profile(&image, region, &profile);
        assert_eq!(sha256_hex(serial.as_raw()), sha256_hex(par.as_raw()), "{style}");

        let raw = apply_profile_raw(image.as_raw(), 97, 61, region, &profile).unwrap();
        assert_eq!(sha256_hex(&raw), sha256_hex(serial.as_raw()), "{style} raw");
    }
}

#[test]
fn golden_styles_are_distinct() {
    // Every style must visibly differ from every other on a textured photo.
    let image = room_image(32, 32);
    let region = FloorRegion::detect(32, 32);
    let mut seen: Vec<(String, &str)> = Vec::new();
    for style in style_names() {
        let digest = sha256_hex(apply_profile(&image, region, &resolve(style, None)).as_raw());
        if let Some((_, other)) = seen.iter().find(|(d, _)| *d == digest) {
            panic!("{style} renders identically to {other}");
        }
        seen.push((digest, style));
    }
}

#[test]
fn golden_input_unchanged() {
    let image = noise_image(20, 20, 8);
    let before = sha256_hex(image.as_raw());
    let _ = catalog_digests(&image);
    assert_eq!(sha256_hex(image.as_raw()), before);
}

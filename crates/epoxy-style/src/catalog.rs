//! Built-in style and color-scheme tables.
//!
//! Both tables are `static` slices built at compile time, with a
//! name index created on first use. Lookups return copies of the
//! profiles; the entries themselves are only reachable by shared
//! reference.
//!
//! # Styles
//!
//! | Name | brightness | contrast | saturation | reflection | tint |
//! |------|-----------:|---------:|-----------:|-----------:|------|
//! | Metallic Epoksi | 1.10 | 1.20 | 1.20 | 0.45 | (192,192,200) @ 0.15 |
//! | Kuvars Kumlu Epoksi | 0.95 | 1.10 | 0.95 | 0.10 | (210,200,185) @ 0.10 |
//! | Flake (Pul) Epoksi | 1.00 | 1.15 | 1.10 | 0.25 | - |
//! | 3D Efektli Epoksi | 1.05 | 1.30 | 1.30 | 0.40 | (120,160,220) @ 0.12 |
//! | Düz Renk Epoksi | 1.00 | 1.10 | 1.00 | 0.15 | - |
//! | Mermer Desenli Epoksi | 1.15 | 1.05 | 0.90 | 0.35 | (240,240,235) @ 0.18 |
//! | Terrazzo Görünümlü | 1.05 | 1.10 | 1.05 | 0.20 | (225,215,200) @ 0.12 |
//! | Endüstriyel Stil | 0.90 | 1.25 | 0.90 | 0.10 | (128,128,128) @ 0.20 |
//! | Parlak Yüzey | 1.20 | 1.10 | 1.10 | 0.60 | - |

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ColorSchemeTint, StyleProfile, Tint};

/// Name of the flat solid-color style used for unknown style names.
pub const DEFAULT_STYLE: &str = "Düz Renk Epoksi";

/// A named style preset.
#[derive(Debug, Clone, Copy)]
pub struct StyleEntry {
    /// Display name, also the lookup key.
    pub name: &'static str,
    /// One-line English description.
    pub summary: &'static str,
    /// Visual parameters.
    pub profile: StyleProfile,
}

/// A named color-scheme tint.
#[derive(Debug, Clone, Copy)]
pub struct SchemeEntry {
    /// Display name, also the lookup key.
    pub name: &'static str,
    /// Tint merged into the style profile.
    pub tint: ColorSchemeTint,
}

const fn entry(
    name: &'static str,
    summary: &'static str,
    brightness: f32,
    contrast: f32,
    saturation: f32,
    reflection: f32,
    tint: Option<Tint>,
) -> StyleEntry {
    StyleEntry {
        name,
        summary,
        profile: StyleProfile {
            brightness,
            contrast,
            saturation,
            reflection,
            tint,
        },
    }
}

static STYLES: &[StyleEntry] = &[
    entry(
        "Metallic Epoksi",
        "Pearlescent metallic pigments with a strong sheen",
        1.10, 1.20, 1.20, 0.45,
        Some(Tint::new(192, 192, 200, 0.15)),
    ),
    entry(
        "Kuvars Kumlu Epoksi",
        "Quartz-sand broadcast, matte and slip resistant",
        0.95, 1.10, 0.95, 0.10,
        Some(Tint::new(210, 200, 185, 0.10)),
    ),
    entry(
        "Flake (Pul) Epoksi",
        "Decorative vinyl flakes over a solid base coat",
        1.00, 1.15, 1.10, 0.25,
        None,
    ),
    entry(
        "3D Efektli Epoksi",
        "Deep clear coat with a three-dimensional look",
        1.05, 1.30, 1.30, 0.40,
        Some(Tint::new(120, 160, 220, 0.12)),
    ),
    entry(
        DEFAULT_STYLE,
        "Flat single-color finish",
        1.00, 1.10, 1.00, 0.15,
        None,
    ),
    entry(
        "Mermer Desenli Epoksi",
        "Marble veining in a bright polished surface",
        1.15, 1.05, 0.90, 0.35,
        Some(Tint::new(240, 240, 235, 0.18)),
    ),
    entry(
        "Terrazzo Görünümlü",
        "Terrazzo-style aggregate in a warm binder",
        1.05, 1.10, 1.05, 0.20,
        Some(Tint::new(225, 215, 200, 0.12)),
    ),
    entry(
        "Endüstriyel Stil",
        "Hard-wearing gray industrial coating",
        0.90, 1.25, 0.90, 0.10,
        Some(Tint::new(128, 128, 128, 0.20)),
    ),
    entry(
        "Parlak Yüzey",
        "High-gloss clear topcoat",
        1.20, 1.10, 1.10, 0.60,
        None,
    ),
];

static SCHEMES: &[SchemeEntry] = &[
    SchemeEntry { name: "Modern Gri Tonları", tint: ColorSchemeTint::new(150, 150, 155, 0.30) },
    SchemeEntry { name: "Sıcak Kahve Tonları", tint: ColorSchemeTint::new(140, 95, 60, 0.35) },
    SchemeEntry { name: "Mavi-Beyaz Kombin", tint: ColorSchemeTint::new(110, 160, 220, 0.30) },
    SchemeEntry { name: "Siyah-Beyaz Kontrast", tint: ColorSchemeTint::new(40, 40, 40, 0.25) },
    SchemeEntry { name: "Doğal Bejler", tint: ColorSchemeTint::new(215, 195, 165, 0.30) },
    SchemeEntry { name: "Canlı Renkler", tint: ColorSchemeTint::new(230, 80, 120, 0.35) },
    SchemeEntry { name: "Pastel Tonlar", tint: ColorSchemeTint::new(240, 200, 220, 0.25) },
    SchemeEntry { name: "Metalik Gümüş", tint: ColorSchemeTint::new(200, 200, 210, 0.30) },
    SchemeEntry { name: "Altın Dokunuşlar", tint: ColorSchemeTint::new(212, 175, 55, 0.35) },
];

lazy_static! {
    static ref STYLE_INDEX: HashMap<&'static str, &'static StyleEntry> =
        STYLES.iter().map(|e| (e.name, e)).collect();
    static ref SCHEME_INDEX: HashMap<&'static str, &'static SchemeEntry> =
        SCHEMES.iter().map(|e| (e.name, e)).collect();
}

/// Looks up a style entry by exact name (surrounding whitespace ignored).
pub fn style_entry(name: &str) -> Option<&'static StyleEntry> {
    STYLE_INDEX.get(name.trim()).copied()
}

/// Looks up a style profile by name, returning a copy.
pub fn style(name: &str) -> Option<StyleProfile> {
    style_entry(name).map(|e| e.profile)
}

/// Looks up a color-scheme entry by exact name (surrounding whitespace ignored).
pub fn scheme_entry(name: &str) -> Option<&'static SchemeEntry> {
    SCHEME_INDEX.get(name.trim()).copied()
}

/// Looks up a color-scheme tint by name, returning a copy.
pub fn scheme(name: &str) -> Option<ColorSchemeTint> {
    scheme_entry(name).map(|e| e.tint)
}

/// The default ("Düz Renk Epoksi") profile.
pub fn default_profile() -> StyleProfile {
    // DEFAULT_STYLE is part of STYLES
    style(DEFAULT_STYLE).unwrap_or(StyleProfile {
        brightness: 1.0,
        contrast: 1.1,
        saturation: 1.0,
        reflection: 0.15,
        tint: None,
    })
}

/// All style entries in catalog order.
pub fn styles() -> impl Iterator<Item = &'static StyleEntry> {
    STYLES.iter()
}

/// All color-scheme entries in catalog order.
pub fn schemes() -> impl Iterator<Item = &'static SchemeEntry> {
    SCHEMES.iter()
}

/// Style names in catalog order.
pub fn style_names() -> impl Iterator<Item = &'static str> {
    STYLES.iter().map(|e| e.name)
}

/// Color-scheme names in catalog order.
pub fn scheme_names() -> impl Iterator<Item = &'static str> {
    SCHEMES.iter().map(|e| e.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(STYLES.len(), 9);
        assert_eq!(SCHEMES.len(), 9);
        assert_eq!(STYLE_INDEX.len(), 9, "duplicate style name");
        assert_eq!(SCHEME_INDEX.len(), 9, "duplicate scheme name");
    }

    #[test]
    fn test_default_profile_values() {
        let p = default_profile();
        assert_eq!(p.brightness, 1.0);
        assert_eq!(p.contrast, 1.1);
        assert_eq!(p.saturation, 1.0);
        assert_eq!(p.reflection, 0.15);
        assert!(p.tint.is_none());
    }

    #[test]
    fn test_all_presets_valid() {
        for e in styles() {
            e.profile.validate().unwrap_or_else(|err| panic!("{}: {err}", e.name));
            assert!((0.9..=1.2).contains(&e.profile.brightness), "{}", e.name);
            assert!((1.0..=1.3).contains(&e.profile.contrast), "{}", e.name);
            assert!((0.9..=1.4).contains(&e.profile.saturation), "{}", e.name);
        }
        for e in schemes() {
            assert!((0.0..=1.0).contains(&e.tint.opacity), "{}", e.name);
        }
    }

    #[test]
    fn test_lookup_unicode_names() {
        assert!(style("Terrazzo Görünümlü").is_some());
        assert!(style("Endüstriyel Stil").is_some());
        assert!(scheme("Sıcak Kahve Tonları").is_some());
        assert!(scheme("Altın Dokunuşlar").is_some());
        // no case folding
        assert!(style("parlak yüzey").is_none());
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(style("  Parlak Yüzey \n"), style("Parlak Yüzey"));
        assert!(scheme(" Pastel Tonlar").is_some());
    }

    #[test]
    fn test_lookup_returns_copy() {
        let mut p = style("Metallic Epoksi").unwrap();
        p.brightness = 9.0;
        assert_eq!(style("Metallic Epoksi").unwrap().brightness, 1.10);
    }

    #[test]
    fn test_names_in_order() {
        let names: Vec<_> = style_names().collect();
        assert_eq!(names.first(), Some(&"Metallic Epoksi"));
        assert_eq!(names.last(), Some(&"Parlak Yüzey"));
        assert_eq!(scheme_names().nth(2), Some("Mavi-Beyaz Kombin"));
    }
}

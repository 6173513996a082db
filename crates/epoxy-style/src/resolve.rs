//! Style name resolution.
//!
//! Turns the free-form names a visitor picked into one concrete
//! [`StyleProfile`]. Resolution is lenient: an unknown style falls back to
//! [`DEFAULT_STYLE`] and an unknown scheme is ignored, so the visualizer is
//! never blocked by unexpected input.

use tracing::debug;

use crate::catalog::{self, DEFAULT_STYLE};
use crate::StyleProfile;

/// Outcome of resolving a style name and optional scheme name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Catalog name of the style that was used.
    pub style: &'static str,
    /// Catalog name of the scheme that was merged, if any.
    pub scheme: Option<&'static str>,
    /// `true` if the requested style was unknown.
    pub fell_back: bool,
    /// Final profile, an owned copy.
    pub profile: StyleProfile,
}

impl Resolution {
    /// Resolves `style_name` and `scheme_name` against the built-in catalogs.
    ///
    /// ```rust
    /// use epoxy_style::{Resolution, DEFAULT_STYLE};
    ///
    /// let r = Resolution::of("Epoksi?", Some("Pastel Tonlar"));
    /// assert!(r.fell_back);
    /// assert_eq!(r.style, DEFAULT_STYLE);
    /// assert_eq!(r.scheme, Some("Pastel Tonlar"));
    /// ```
    pub fn of(style_name: &str, scheme_name: Option<&str>) -> Self {
        let (style, fell_back, mut profile) = match catalog::style_entry(style_name) {
            Some(entry) => (entry.name, false, entry.profile),
            None => {
                debug!(requested = style_name, fallback = DEFAULT_STYLE, "unknown style, using default");
                (DEFAULT_STYLE, true, catalog::default_profile())
            }
        };

        let mut scheme = None;
        if let Some(name) = scheme_name {
            match catalog::scheme_entry(name) {
                Some(entry) => {
                    profile = profile.with_scheme(&entry.tint);
                    scheme = Some(entry.name);
                }
                None => debug!(requested = name, "unknown color scheme, ignoring"),
            }
        }

        Self {
            style,
            scheme,
            fell_back,
            profile,
        }
    }
}

/// Resolves a style name and optional color-scheme name to a profile.
///
/// Never fails; see [`Resolution::of`] for the details of what was chosen.
pub fn resolve(style_name: &str, scheme_name: Option<&str>) -> StyleProfile {
    Resolution::of(style_name, scheme_name).profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scheme, style, Tint};

    #[test]
    fn test_known_style_no_scheme() {
        let r = Resolution::of("Metallic Epoksi", None);
        assert!(!r.fell_back);
        assert_eq!(r.scheme, None);
        assert_eq!(r.profile, style("Metallic Epoksi").unwrap());
    }

    #[test]
    fn test_unknown_style_falls_back() {
        assert_eq!(resolve("Granite", None), resolve(DEFAULT_STYLE, None));
        assert_eq!(resolve("", None), resolve(DEFAULT_STYLE, None));
    }

    #[test]
    fn test_unknown_scheme_ignored() {
        let r = Resolution::of("Parlak Yüzey", Some("Neon"));
        assert_eq!(r.scheme, None);
        assert_eq!(r.profile, style("Parlak Yüzey").unwrap());
    }

    #[test]
    fn test_scheme_on_fallback_still_tints() {
        let r = Resolution::of("no such style", Some("Canlı Renkler"));
        assert!(r.fell_back);
        let tint = r.profile.tint.expect("scheme tint applied to fallback");
        assert_eq!(tint, scheme("Canlı Renkler").unwrap().as_tint());
    }

    #[test]
    fn test_scheme_merges_with_style_tint() {
        let p = resolve("Endüstriyel Stil", Some("Altın Dokunuşlar"));
        let tint = p.tint.unwrap();
        // (128,128,128) * (212,175,55)/255
        assert_eq!((tint.r, tint.g, tint.b), (106, 88, 28));
        assert!((tint.opacity - (0.20 + 0.35 / 2.0)).abs() < 1e-6);
        assert_ne!(tint, Tint::new(128, 128, 128, 0.20));
    }

    #[test]
    fn test_resolution_does_not_alter_catalog() {
        let _ = resolve("Endüstriyel Stil", Some("Altın Dokunuşlar"));
        assert_eq!(
            style("Endüstriyel Stil").unwrap().tint,
            Some(Tint::new(128, 128, 128, 0.20))
        );
    }
}

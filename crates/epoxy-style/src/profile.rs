//! Style profile and tint parameters.
//!
//! A [`StyleProfile`] drives the floor transform in `epoxy-ops`:
//!
//! ```text
//! c'    = clamp((c - 128) * contrast + 128 * brightness)
//! c''   = clamp(gray + (c' - gray) * saturation)       gray = BT.601 luma of c'
//! c'''  = clamp(c'' + (tint - c'') * opacity)           only with a tint
//! out   = clamp(c''' * (1 + reflection * t))            t: 1 at floor top, 0 at bottom
//! ```
//!
//! # Example
//!
//! ```rust
//! use epoxy_style::{StyleProfile, Tint};
//!
//! let profile = StyleProfile::new()
//!     .with_contrast(1.2)
//!     .with_reflection(0.4)
//!     .with_tint(Tint::new(192, 192, 200, 0.15));
//! assert!(profile.validate().is_ok());
//! ```

use crate::{StyleError, StyleResult};

/// A color bias blended towards `(r, g, b)` with strength `opacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tint {
    /// Red target (0-255).
    pub r: u8,
    /// Green target (0-255).
    pub g: u8,
    /// Blue target (0-255).
    pub b: u8,
    /// Blend strength in `[0, 1]`.
    pub opacity: f32,
}

impl Tint {
    /// Creates a tint.
    pub const fn new(r: u8, g: u8, b: u8, opacity: f32) -> Self {
        Self { r, g, b, opacity }
    }

    /// Target color as `f32` channels on the 0..255 scale.
    #[inline]
    pub fn rgb_f32(&self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

/// Secondary tint keyed by a color-scheme name.
///
/// Merged into a profile with [`StyleProfile::with_scheme`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSchemeTint {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Scheme strength in `[0, 1]`.
    pub opacity: f32,
}

impl ColorSchemeTint {
    /// Creates a scheme tint.
    pub const fn new(r: u8, g: u8, b: u8, opacity: f32) -> Self {
        Self { r, g, b, opacity }
    }

    /// The scheme as a standalone [`Tint`].
    pub const fn as_tint(&self) -> Tint {
        Tint::new(self.r, self.g, self.b, self.opacity)
    }
}

/// Resolved visual parameters for one floor finish.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StyleProfile {
    /// Multiplier on the mid-gray anchor (1.0 = unchanged).
    pub brightness: f32,
    /// Slope around mid-gray (1.0 = unchanged).
    pub contrast: f32,
    /// Chroma multiplier around luma (1.0 = unchanged, 0.0 = gray).
    pub saturation: f32,
    /// Gloss gradient strength in `[0, 1]`.
    pub reflection: f32,
    /// Optional color bias.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tint: Option<Tint>,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleProfile {
    /// Identity profile: no tone change, no gloss, no tint.
    pub const fn new() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            reflection: 0.0,
            tint: None,
        }
    }

    /// Sets brightness.
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets contrast.
    pub const fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Sets saturation.
    pub const fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    /// Sets reflection strength.
    pub const fn with_reflection(mut self, reflection: f32) -> Self {
        self.reflection = reflection;
        self
    }

    /// Sets the tint.
    pub const fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Merges a color-scheme tint into this profile.
    ///
    /// With an existing tint the scheme color multiplies it component-wise
    /// (scheme normalized to 0..1) and half the scheme opacity is added:
    ///
    /// ```text
    /// rgb     = round(tint.rgb * scheme.rgb / 255)
    /// opacity = min(tint.opacity + scheme.opacity / 2, 1)
    /// ```
    ///
    /// The product is quantized to the nearest `u8` because [`Tint`] stores
    /// byte targets. This moves each merged channel by at most 0.5, which
    /// shifts a blended pixel by at most `0.5 * opacity` before write-back.
    ///
    /// Without a tint, the scheme becomes the tint unchanged.
    ///
    /// ```rust
    /// use epoxy_style::{ColorSchemeTint, StyleProfile, Tint};
    ///
    /// let scheme = ColorSchemeTint::new(255, 0, 128, 0.4);
    /// let merged = StyleProfile::new()
    ///     .with_tint(Tint::new(200, 200, 200, 0.1))
    ///     .with_scheme(&scheme);
    /// let tint = merged.tint.unwrap();
    /// assert_eq!((tint.r, tint.g, tint.b), (200, 0, 100));
    /// assert!((tint.opacity - 0.3).abs() < 1e-6);
    /// ```
    pub fn with_scheme(mut self, scheme: &ColorSchemeTint) -> Self {
        self.tint = Some(match self.tint {
            Some(base) => Tint {
                r: modulate(base.r, scheme.r),
                g: modulate(base.g, scheme.g),
                b: modulate(base.b, scheme.b),
                opacity: (base.opacity + scheme.opacity * 0.5).clamp(0.0, 1.0),
            },
            None => scheme.as_tint(),
        });
        self
    }

    /// Returns `true` if the profile leaves pixels unchanged.
    pub fn is_identity(&self) -> bool {
        self.brightness == 1.0
            && self.contrast == 1.0
            && self.saturation == 1.0
            && self.reflection == 0.0
            && self.tint.is_none_or(|t| t.opacity == 0.0)
    }

    /// Checks that every parameter is finite and within range.
    ///
    /// Brightness, contrast and saturation must be non-negative; reflection
    /// and tint opacity must lie in `[0, 1]`.
    pub fn validate(&self) -> StyleResult<()> {
        non_negative("brightness", self.brightness)?;
        non_negative("contrast", self.contrast)?;
        non_negative("saturation", self.saturation)?;
        unit("reflection", self.reflection)?;
        if let Some(tint) = self.tint {
            unit("tint.opacity", tint.opacity)?;
        }
        Ok(())
    }
}

#[inline]
fn modulate(base: u8, scheme: u8) -> u8 {
    (base as f32 * (scheme as f32 / 255.0)).round().clamp(0.0, 255.0) as u8
}

fn non_negative(field: &'static str, value: f32) -> StyleResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidProfile { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> StyleResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(StyleError::InvalidProfile { field, value })
    }
}

//! Per-pixel transform stages.
//!
//! Values are `f32` on the 0..255 scale. Every stage clamps its result to
//! `[0, 255]` before the next stage reads it, so no out-of-range
//! intermediate ever leaks forward.
//!
//! Stage order is fixed and significant:
//!
//! ```text
//! contrast/brightness -> saturation -> tint (optional) -> reflection
//! ```

use epoxy_core::luma_bt601;
use epoxy_style::{StyleProfile, Tint};

/// Mid-gray anchor for contrast and brightness.
pub const MID_GRAY: f32 = 128.0;

/// Largest channel value.
pub const MAX_CHANNEL: f32 = 255.0;

#[inline]
fn clamp_channel(v: f32) -> f32 {
    v.clamp(0.0, MAX_CHANNEL)
}

/// Combined contrast and brightness.
///
/// `c' = (c - 128) * contrast + 128 * brightness`. Brightness scales the
/// anchor rather than running as a separate pass.
#[inline]
pub fn contrast_brightness(rgb: [f32; 3], contrast: f32, brightness: f32) -> [f32; 3] {
    let anchor = MID_GRAY * brightness;
    rgb.map(|c| clamp_channel((c - MID_GRAY) * contrast + anchor))
}

/// Saturation around BT.601 luma.
///
/// `c'' = gray + (c' - gray) * saturation`
#[inline]
pub fn saturate(rgb: [f32; 3], saturation: f32) -> [f32; 3] {
    let gray = luma_bt601(rgb);
    rgb.map(|c| clamp_channel(gray + (c - gray) * saturation))
}

/// Linear blend towards the tint color.
///
/// `c''' = c'' + (tint - c'') * opacity`
#[inline]
pub fn blend_tint(rgb: [f32; 3], tint: &Tint) -> [f32; 3] {
    let target = tint.rgb_f32();
    let opacity = tint.opacity;
    [
        clamp_channel(rgb[0] + (target[0] - rgb[0]) * opacity),
        clamp_channel(rgb[1] + (target[1] - rgb[1]) * opacity),
        clamp_channel(rgb[2] + (target[2] - rgb[2]) * opacity),
    ]
}

/// Gloss gradient: `c * (1 + reflection * t)`.
///
/// `t` is `1.0` at the top of the floor band and falls to `0.0` at its
/// bottom edge (see [`FloorRegion::gradient`](epoxy_core::FloorRegion::gradient)).
#[inline]
pub fn reflect(rgb: [f32; 3], reflection: f32, t: f32) -> [f32; 3] {
    let factor = 1.0 + reflection * t;
    rgb.map(|c| clamp_channel(c * factor))
}

/// Runs every stage of `profile` on one pixel.
///
/// The tint stage is skipped entirely when the profile has no tint.
///
/// ```rust
/// use epoxy_ops::transform_pixel;
/// use epoxy_style::StyleProfile;
///
/// let out = transform_pixel([255.0, 255.0, 255.0], &StyleProfile::new().with_contrast(1.1), 1.0);
/// assert_eq!(out, [255.0, 255.0, 255.0]);
/// ```
#[inline]
pub fn transform_pixel(rgb: [f32; 3], profile: &StyleProfile, t: f32) -> [f32; 3] {
    let rgb = contrast_brightness(rgb, profile.contrast, profile.brightness);
    let rgb = saturate(rgb, profile.saturation);
    let rgb = match &profile.tint {
        Some(tint) => blend_tint(rgb, tint),
        None => rgb,
    };
    reflect(rgb, profile.reflection, t)
}

/// Converts a final channel value back to a byte.
///
/// Rounds half to even, matching how canvas pixel arrays store floats.
#[inline]
pub fn to_byte(v: f32) -> u8 {
    clamp_channel(v).round_ties_even() as u8
}

/// Transforms one RGBA row in place with gradient position `t`.
///
/// Alpha bytes are not touched.
#[inline]
pub fn transform_row(row: &mut [u8], profile: &StyleProfile, t: f32) {
    for px in row.chunks_exact_mut(4) {
        let rgb = [px[0] as f32, px[1] as f32, px[2] as f32];
        let out = transform_pixel(rgb, profile, t);
        px[0] = to_byte(out[0]);
        px[1] = to_byte(out[1]);
        px[2] = to_byte(out[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_contrast_brightness_identity() {
        let rgb = [12.0, 128.0, 250.0];
        assert_eq!(contrast_brightness(rgb, 1.0, 1.0), rgb);
    }

    #[test]
    fn test_contrast_brightness_formula() {
        let out = contrast_brightness([100.0, 200.0, 128.0], 1.2, 0.9);
        // (100-128)*1.2 + 115.2 = 81.6
        assert_relative_eq!(out[0], 81.6, epsilon = 1e-4);
        // (200-128)*1.2 + 115.2 = 201.6
        assert_relative_eq!(out[1], 201.6, epsilon = 1e-4);
        assert_relative_eq!(out[2], 115.2, epsilon = 1e-4);
    }

    #[test]
    fn test_contrast_brightness_clamps() {
        let out = contrast_brightness([0.0, 255.0, 128.0], 1.1, 1.0);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 255.0);
    }

    #[test]
    fn test_saturate_zero_is_gray() {
        let out = saturate([200.0, 100.0, 50.0], 0.0);
        let gray = 0.299 * 200.0 + 0.587 * 100.0 + 0.114 * 50.0;
        for c in out {
            assert_relative_eq!(c, gray, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_saturate_clamps_high_saturation() {
        let out = saturate([250.0, 10.0, 10.0], 3.0);
        assert_eq!(out[0], 255.0);
        assert_eq!(out[1], 0.0);
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn test_blend_tint() {
        let tint = Tint::new(200, 0, 100, 0.25);
        let out = blend_tint([100.0, 100.0, 100.0], &tint);
        assert_relative_eq!(out[0], 125.0);
        assert_relative_eq!(out[1], 75.0);
        assert_relative_eq!(out[2], 100.0);
    }

    #[test]
    fn test_reflect_gradient() {
        assert_eq!(reflect([100.0; 3], 0.5, 0.0), [100.0; 3]);
        assert_eq!(reflect([100.0; 3], 0.5, 1.0), [150.0; 3]);
        assert_eq!(reflect([200.0; 3], 0.5, 1.0), [255.0; 3]);
    }

    #[test]
    fn test_stage_order_matters() {
        // Tint before reflection: reflection scales the tinted value.
        let profile = StyleProfile::new()
            .with_reflection(0.5)
            .with_tint(Tint::new(0, 0, 0, 0.5));
        let out = transform_pixel([100.0; 3], &profile, 1.0);
        assert_relative_eq!(out[0], 75.0, epsilon = 1e-3);
    }

    #[test]
    fn test_to_byte_rounding() {
        assert_eq!(to_byte(-3.0), 0);
        assert_eq!(to_byte(300.0), 255);
        assert_eq!(to_byte(10.5), 10);
        assert_eq!(to_byte(11.5), 12);
        assert_eq!(to_byte(10.6), 11);
    }

    #[test]
    fn test_transform_row_keeps_alpha() {
        let mut row = vec![10, 20, 30, 7, 240, 230, 220, 0];
        let profile = StyleProfile::new()
            .with_brightness(2.0)
            .with_saturation(3.0)
            .with_reflection(1.0);
        transform_row(&mut row, &profile, 1.0);
        assert_eq!(row[3], 7);
        assert_eq!(row[7], 0);
    }
}

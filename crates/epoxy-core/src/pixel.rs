//! Pixel layout constants and luma.
//!
//! Images in epoxy-rs are always 8-bit RGBA, interleaved `[R G B A R G B A ...]`.
//! Color math runs in `f32` on the 0..255 scale, not normalized 0..1.

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// BT.601 luma coefficient for red channel.
///
/// Used in the perceptual luma formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const BT601_LUMA_R: f32 = 0.299;

/// BT.601 luma coefficient for green channel.
pub const BT601_LUMA_G: f32 = 0.587;

/// BT.601 luma coefficient for blue channel.
pub const BT601_LUMA_B: f32 = 0.114;

/// BT.601 luma coefficients as an array [R, G, B].
pub const BT601_LUMA: [f32; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Calculate BT.601 luma from RGB values.
///
/// # Example
/// ```
/// use epoxy_core::pixel::luma_bt601;
/// let luma = luma_bt601([255.0, 255.0, 255.0]);
/// assert!((luma - 255.0).abs() < 1e-3);
/// ```
#[inline]
pub fn luma_bt601(rgb: [f32; 3]) -> f32 {
    rgb[0] * BT601_LUMA_R + rgb[1] * BT601_LUMA_G + rgb[2] * BT601_LUMA_B
}

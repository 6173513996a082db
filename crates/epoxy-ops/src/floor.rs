//! Region-masked application of a style profile.
//!
//! Only rows inside the [`FloorRegion`] are visited; every other byte of
//! the buffer is left exactly as it was. An empty region makes the whole
//! call a no-op.

use epoxy_core::{FloorRegion, RgbaImage, CHANNELS};
use epoxy_style::StyleProfile;
use tracing::trace;

use crate::stages::transform_row;
use crate::{OpsError, OpsResult};

/// Applies `profile` to the floor rows of `image`, returning a new image.
///
/// Region rows past the bottom of the image are ignored.
///
/// ```rust
/// use epoxy_core::{FloorRegion, RgbaImage};
/// use epoxy_ops::apply_profile;
/// use epoxy_style::resolve;
///
/// let white = RgbaImage::filled(10, 10, [255, 255, 255, 255]);
/// let region = FloorRegion::detect(10, 10);
/// let out = apply_profile(&white, region, &resolve("Düz Renk Epoksi", None));
/// assert_eq!(out, white);
/// ```
pub fn apply_profile(image: &RgbaImage, region: FloorRegion, profile: &StyleProfile) -> RgbaImage {
    let mut out = image.clone();
    apply_profile_in_place(&mut out, region, profile);
    out
}

/// In-place variant of [`apply_profile`].
pub fn apply_profile_in_place(image: &mut RgbaImage, region: FloorRegion, profile: &StyleProfile) {
    trace!(
        width = image.width(),
        height = image.height(),
        start_y = region.start_y,
        end_y = region.end_y,
        "apply_profile"
    );

    if region.is_empty() {
        return;
    }
    let last = region.end_y.min(image.height());
    for y in region.start_y..last {
        let t = region.gradient(y);
        transform_row(image.row_mut(y), profile, t);
    }
}

/// Applies `profile` to a raw row-major RGBA8 buffer.
///
/// # Errors
///
/// - [`OpsError::InvalidDimensions`] if `src.len() != width * height * 4`
///   or the size overflows
/// - [`OpsError::InvalidRegion`] if the region extends past `height`
/// - [`OpsError::InvalidParameter`] if the profile holds NaN, infinite or
///   out-of-range values
pub fn apply_profile_raw(
    src: &[u8],
    width: u32,
    height: u32,
    region: FloorRegion,
    profile: &StyleProfile,
) -> OpsResult<Vec<u8>> {
    validate_raw(src, width, height, region, profile)?;

    let mut dst = src.to_vec();
    let stride = width as usize * CHANNELS;
    if stride == 0 || region.is_empty() {
        return Ok(dst);
    }
    for y in region.rows() {
        let start = y as usize * stride;
        transform_row(&mut dst[start..start + stride], profile, region.gradient(y));
    }
    Ok(dst)
}

pub(crate) fn validate_raw(
    src: &[u8],
    width: u32,
    height: u32,
    region: FloorRegion,
    profile: &StyleProfile,
) -> OpsResult<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| OpsError::InvalidDimensions("image dimensions overflow".into()))?;

    if src.len() != expected {
        return Err(OpsError::InvalidDimensions(format!(
            "expected {} bytes for {}x{} RGBA, got {}",
            expected,
            width,
            height,
            src.len()
        )));
    }

    if !region.fits(height) {
        return Err(OpsError::InvalidRegion {
            start_y: region.start_y,
            end_y: region.end_y,
            height,
        });
    }

    profile
        .validate()
        .map_err(|e| OpsError::InvalidParameter(e.to_string()))
}

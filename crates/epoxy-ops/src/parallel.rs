//! Row-parallel floor transform using Rayon.
//!
//! Produces byte-identical output to [`floor`](crate::floor); rows are
//! independent so each one is handed to a worker as a whole.
//!
//! # Example
//!
//! ```rust
//! use epoxy_core::{FloorRegion, RgbaImage};
//! use epoxy_ops::parallel;
//! use epoxy_style::resolve;
//!
//! let photo = RgbaImage::filled(1920, 1080, [90, 110, 130, 255]);
//! let region = FloorRegion::detect(1920, 1080);
//! let out = parallel::apply_profile(&photo, region, &resolve("Mermer Desenli Epoksi", None));
//! assert_eq!(out.row(0), photo.row(0));
//! ```

use epoxy_core::{FloorRegion, RgbaImage, CHANNELS};
use epoxy_style::StyleProfile;
use rayon::prelude::*;
use tracing::trace;

use crate::floor::validate_raw;
use crate::stages::transform_row;
use crate::OpsResult;

/// Parallel version of [`floor::apply_profile`](crate::floor::apply_profile).
pub fn apply_profile(image: &RgbaImage, region: FloorRegion, profile: &StyleProfile) -> RgbaImage {
    let mut out = image.clone();
    apply_profile_in_place(&mut out, region, profile);
    out
}

/// Parallel version of [`floor::apply_profile_in_place`](crate::floor::apply_profile_in_place).
pub fn apply_profile_in_place(image: &mut RgbaImage, region: FloorRegion, profile: &StyleProfile) {
    trace!(
        width = image.width(),
        height = image.height(),
        start_y = region.start_y,
        end_y = region.end_y,
        threads = rayon::current_num_threads(),
        "parallel::apply_profile"
    );

    let height = image.height();
    let stride = image.stride();
    transform_rows_par(image.as_raw_mut(), stride, height, region, profile);
}

/// Parallel version of [`floor::apply_profile_raw`](crate::floor::apply_profile_raw).
///
/// # Errors
///
/// Same conditions as the serial variant.
pub fn apply_profile_raw(
    src: &[u8],
    width: u32,
    height: u32,
    region: FloorRegion,
    profile: &StyleProfile,
) -> OpsResult<Vec<u8>> {
    validate_raw(src, width, height, region, profile)?;
    let mut dst = src.to_vec();
    transform_rows_par(&mut dst, width as usize * CHANNELS, height, region, profile);
    Ok(dst)
}

fn transform_rows_par(
    data: &mut [u8],
    stride: usize,
    height: u32,
    region: FloorRegion,
    profile: &StyleProfile,
) {
    if stride == 0 || region.is_empty() {
        return;
    }
    let first = region.start_y.min(height) as usize;
    let last = region.end_y.min(height) as usize;
    if first >= last {
        return;
    }

    data[first * stride..last * stride]
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(i, row)| {
            let y = (first + i) as u32;
            transform_row(row, profile, region.gradient(y));
        });
}

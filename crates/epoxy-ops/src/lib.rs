//! # epoxy-ops
//!
//! The floor tint transform.
//!
//! Applies a resolved [`StyleProfile`](epoxy_style::StyleProfile) to every
//! pixel of a [`FloorRegion`](epoxy_core::FloorRegion) in an RGBA8 buffer.
//! Pixels outside the region, and the alpha channel everywhere, are left
//! byte-identical.
//!
//! # Modules
//!
//! - [`stages`] - The four per-pixel stages and their fixed composition
//! - [`floor`] - Region-masked application over whole images
//! - `parallel` - Row-parallel variant (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use epoxy_core::{FloorRegion, RgbaImage};
//! use epoxy_ops::apply_profile;
//! use epoxy_style::resolve;
//!
//! let photo = RgbaImage::filled(8, 10, [90, 110, 130, 255]);
//! let region = FloorRegion::detect(photo.width(), photo.height());
//! let profile = resolve("Metallic Epoksi", Some("Metalik Gümüş"));
//!
//! let out = apply_profile(&photo, region, &profile);
//! assert_eq!(out.row(0), photo.row(0));
//! assert_ne!(out.row(6), photo.row(6));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod floor;
pub mod stages;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use floor::{apply_profile, apply_profile_in_place, apply_profile_raw};
pub use stages::{blend_tint, contrast_brightness, reflect, saturate, transform_pixel};

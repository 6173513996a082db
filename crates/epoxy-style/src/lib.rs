//! # epoxy-style
//!
//! Named epoxy floor styles and color-scheme tints.
//!
//! A *style* ("Metallic Epoksi", "Parlak Yüzey", ...) maps to a
//! [`StyleProfile`]: brightness, contrast, saturation, reflection strength
//! and an optional [`Tint`]. A *color scheme* ("Mavi-Beyaz Kombin", ...)
//! is a secondary [`ColorSchemeTint`] merged into the profile's tint.
//!
//! Both tables are fixed at compile time. Lookups hand out copies, so no
//! caller can alter a preset for later callers.
//!
//! # Resolution
//!
//! ```rust
//! use epoxy_style::{resolve, DEFAULT_STYLE};
//!
//! // Unknown names degrade to the flat default, never an error.
//! let fallback = resolve("Mystery Floor", None);
//! assert_eq!(fallback, resolve(DEFAULT_STYLE, None));
//!
//! // A scheme on top of a style without a tint gives it one.
//! let tinted = resolve("Parlak Yüzey", Some("Metalik Gümüş"));
//! assert!(tinted.tint.is_some());
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize profiles and tints

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
mod error;
pub mod profile;
mod resolve;

pub use catalog::{
    default_profile, scheme, scheme_entry, scheme_names, schemes, style, style_entry, style_names, styles,
    SchemeEntry, StyleEntry, DEFAULT_STYLE,
};
pub use error::{StyleError, StyleResult};
pub use profile::{ColorSchemeTint, StyleProfile, Tint};
pub use resolve::{resolve, Resolution};

//! Wavatar derives a small, deterministic avatar image from arbitrary bytes.
//!
//! Given an input (usually a hash of an email address) the crate:
//!
//! 1. **Derives** eight parameters from a PCG32 stream seeded by the input's FNV-1a digest
//!    ([`AvatarParams::derive`]).
//! 2. **Colors** a background and a "wave" tone with an integer 240-domain HSL model
//!    ([`hsl_to_rgb`]).
//! 3. **Composites** pre-drawn layers (fade, mask, shine, brow, eyes, pupils, mouth) with
//!    source-over blending, flood-filling the area enclosed by the mask
//!    ([`generate`], [`flood_fill`]).
//!
//! Layers come from a caller-supplied [`LayerSource`]: an in-memory bundle, a directory of
//! PNG files, or any custom provider. The output is an 80x80 premultiplied [`Raster`];
//! [`encode_png`] turns it into a file.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical input and layers give bit-identical output.
//! - **No panics on bad assets**: missing or undecodable layers surface as
//!   [`WavatarError::Layer`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod color;
mod encode;
mod foundation;
mod generate;
mod params;
mod raster;

pub use assets::decode::decode_layer;
pub use assets::source::{
    CachedLayerSource, DirLayerSource, LayerCategory, LayerKey, LayerSource, MemoryLayerSource,
};
pub use color::{HSL_MAX, Rgb8, hsl_to_rgb};
pub use encode::{encode_png, to_rgba_image};
pub use foundation::core::{AVATAR_SIZE, Raster, Rgba8Premul};
pub use foundation::error::{WavatarError, WavatarResult};
pub use generate::{generate, generate_with_params};
pub use params::{AvatarParams, Seed};
pub use raster::composite::{draw_over, over};
pub use raster::flood::flood_fill;

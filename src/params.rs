//! Seeded derivation of the avatar's layer variants and hues.
//!
//! The input is hashed with FNV-1a 64; the digest seeds a PCG32 stream from which eight
//! bounded integers are drawn. The draw order is fixed: reordering the draws changes the
//! avatar of every input.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::assets::source::{LayerCategory, LayerKey};
use crate::color::{HSL_MAX, Rgb8, hsl_to_rgb};
use crate::foundation::math::Fnv1a64;

const SATURATION: i32 = 240;
const BACKGROUND_LIGHTNESS: i32 = 50;
const WAVE_LIGHTNESS: i32 = 170;

/// The two 64-bit components that fully determine a PCG32 stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Seed {
    /// Initial generator state.
    pub state: u64,
    /// Stream selector; always odd when derived from input bytes.
    pub stream: u64,
}

impl Seed {
    /// Hash `input` into a seed.
    pub fn from_input(input: &[u8]) -> Self {
        let mut hasher = Fnv1a64::new_default();
        hasher.write_bytes(input);
        let digest = hasher.finish();
        Self {
            state: digest,
            stream: (digest >> 1) | 1,
        }
    }
}

/// Layer variants and hues chosen for one avatar. All values are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AvatarParams {
    /// Face variant, shared by the mask and shine layers.
    pub face: u32,
    /// Background hue in the 240-domain.
    pub background_hue: u32,
    /// Fade pattern variant.
    pub fade: u32,
    /// Hue of the flood-filled wave area.
    pub wave_hue: u32,
    /// Brow variant.
    pub brow: u32,
    /// Eyes variant.
    pub eyes: u32,
    /// Pupils variant.
    pub pupil: u32,
    /// Mouth variant.
    pub mouth: u32,
}

impl AvatarParams {
    /// Derive parameters from arbitrary input bytes. Total over every input length.
    pub fn derive(input: &[u8]) -> Self {
        Self::from_seed(Seed::from_input(input))
    }

    /// Draw parameters from an explicit seed.
    pub fn from_seed(seed: Seed) -> Self {
        let mut rng = Pcg32::new(seed.state, seed.stream);
        let hue_max = HSL_MAX as u32;

        // Field initializers evaluate in source order; keep it.
        Self {
            face: rng.gen_range(1..=LayerCategory::Mask.variant_count()),
            background_hue: rng.gen_range(1..=hue_max),
            fade: rng.gen_range(1..=LayerCategory::Fade.variant_count()),
            wave_hue: rng.gen_range(1..=hue_max),
            brow: rng.gen_range(1..=LayerCategory::Brow.variant_count()),
            eyes: rng.gen_range(1..=LayerCategory::Eyes.variant_count()),
            pupil: rng.gen_range(1..=LayerCategory::Pupils.variant_count()),
            mouth: rng.gen_range(1..=LayerCategory::Mouth.variant_count()),
        }
    }

    /// Background color: full saturation, dark lightness.
    pub fn background_color(&self) -> Rgb8 {
        hsl_to_rgb(self.background_hue as i32, SATURATION, BACKGROUND_LIGHTNESS)
    }

    /// Color flood-filled into the area enclosed by the mask.
    pub fn wave_color(&self) -> Rgb8 {
        hsl_to_rgb(self.wave_hue as i32, SATURATION, WAVE_LIGHTNESS)
    }

    /// Layers to composite, in drawing order.
    pub fn layers(&self) -> [LayerKey; 7] {
        [
            LayerKey::unchecked(LayerCategory::Fade, self.fade),
            LayerKey::unchecked(LayerCategory::Mask, self.face),
            LayerKey::unchecked(LayerCategory::Shine, self.face),
            LayerKey::unchecked(LayerCategory::Brow, self.brow),
            LayerKey::unchecked(LayerCategory::Eyes, self.eyes),
            LayerKey::unchecked(LayerCategory::Pupils, self.pupil),
            LayerKey::unchecked(LayerCategory::Mouth, self.mouth),
        ]
    }
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::Context;

use crate::{
    assets::decode::decode_layer,
    foundation::core::Raster,
    foundation::error::{WavatarError, WavatarResult},
};

/// Kind of pre-drawn layer an avatar is assembled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerCategory {
    /// Background fade pattern.
    Fade,
    /// Face outline; its enclosed area is flood-filled with the wave color.
    Mask,
    /// Highlight drawn over the filled face, same variant as the mask.
    Shine,
    /// Eyebrows.
    Brow,
    /// Eye whites.
    Eyes,
    /// Pupils.
    Pupils,
    /// Mouth.
    Mouth,
}

impl LayerCategory {
    /// All categories in drawing order.
    pub const ALL: [LayerCategory; 7] = [
        Self::Fade,
        Self::Mask,
        Self::Shine,
        Self::Brow,
        Self::Eyes,
        Self::Pupils,
        Self::Mouth,
    ];

    /// Name used in asset file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Mask => "mask",
            Self::Shine => "shine",
            Self::Brow => "brow",
            Self::Eyes => "eyes",
            Self::Pupils => "pupils",
            Self::Mouth => "mouth",
        }
    }

    /// Number of variants shipped in the reference asset set.
    pub fn variant_count(self) -> u32 {
        match self {
            Self::Fade => 4,
            Self::Mask | Self::Shine => 11,
            Self::Brow => 8,
            Self::Eyes => 13,
            Self::Pupils => 11,
            Self::Mouth => 19,
        }
    }
}

impl fmt::Display for LayerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a single layer asset: category plus 1-based variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerKey {
    category: LayerCategory,
    variant: u32,
}

impl LayerKey {
    /// Build a key, rejecting variants outside `1..=category.variant_count()`.
    pub fn new(category: LayerCategory, variant: u32) -> WavatarResult<Self> {
        if !(1..=category.variant_count()).contains(&variant) {
            return Err(WavatarError::validation(format!(
                "{category} variant {variant} out of range 1..={}",
                category.variant_count()
            )));
        }
        Ok(Self { category, variant })
    }

    pub(crate) fn unchecked(category: LayerCategory, variant: u32) -> Self {
        Self { category, variant }
    }

    /// Layer category.
    pub fn category(self) -> LayerCategory {
        self.category
    }

    /// 1-based variant number.
    pub fn variant(self) -> u32 {
        self.variant
    }

    /// Asset file name, e.g. `mask7.png`.
    pub fn file_name(self) -> String {
        format!("{self}.png")
    }

    /// Every key of the reference asset set.
    pub fn all() -> impl Iterator<Item = LayerKey> {
        LayerCategory::ALL.into_iter().flat_map(|category| {
            (1..=category.variant_count()).map(move |variant| Self { category, variant })
        })
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category, self.variant)
    }
}

/// Provider of decoded, premultiplied layer rasters.
///
/// Implementations must return the same pixels for the same key on every call.
pub trait LayerSource: Send + Sync {
    /// Load the layer for `key`.
    fn layer(&self, key: LayerKey) -> anyhow::Result<Arc<Raster>>;
}

impl<S: LayerSource + ?Sized> LayerSource for Arc<S> {
    fn layer(&self, key: LayerKey) -> anyhow::Result<Arc<Raster>> {
        (**self).layer(key)
    }
}

/// Layers held in memory, decoded up front.
#[derive(Clone, Debug, Default)]
pub struct MemoryLayerSource {
    layers: HashMap<LayerKey, Arc<Raster>>,
}

impl MemoryLayerSource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already decoded layer.
    pub fn insert_raster(&mut self, key: LayerKey, raster: Raster) {
        self.layers.insert(key, Arc::new(raster));
    }

    /// Decode and register encoded image bytes, e.g. from `include_bytes!`.
    pub fn insert_encoded(&mut self, key: LayerKey, bytes: &[u8]) -> WavatarResult<()> {
        let raster = decode_layer(bytes).map_err(|e| WavatarError::layer(key, e))?;
        self.insert_raster(key, raster);
        Ok(())
    }

    /// Number of registered layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers are registered.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl LayerSource for MemoryLayerSource {
    fn layer(&self, key: LayerKey) -> anyhow::Result<Arc<Raster>> {
        self.layers
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no in-memory layer '{key}'"))
    }
}

/// Reads `<root>/<category><variant>.png` on every request.
#[derive(Clone, Debug)]
pub struct DirLayerSource {
    root: PathBuf,
}

impl DirLayerSource {
    /// Source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory layers are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: LayerKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}

impl LayerSource for DirLayerSource {
    fn layer(&self, key: LayerKey) -> anyhow::Result<Arc<Raster>> {
        let path = self.path_for(key);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read layer bytes from '{}'", path.display()))?;
        let raster =
            decode_layer(&bytes).with_context(|| format!("decode '{}'", path.display()))?;
        Ok(Arc::new(raster))
    }
}

/// Memoizes successful loads of an inner source. Failed loads are retried on next request.
#[derive(Debug)]
pub struct CachedLayerSource<S> {
    inner: S,
    cache: Mutex<HashMap<LayerKey, Arc<Raster>>>,
}

impl<S: LayerSource> CachedLayerSource<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached layers.
    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    /// Borrow the wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<LayerKey, Arc<Raster>>> {
        // Entries are only ever inserted whole, so a poisoned map is still consistent.
        self.cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<S: LayerSource> LayerSource for CachedLayerSource<S> {
    fn layer(&self, key: LayerKey) -> anyhow::Result<Arc<Raster>> {
        if let Some(hit) = self.lock().get(&key).cloned() {
            tracing::trace!(%key, "layer cache hit");
            return Ok(hit);
        }

        tracing::debug!(%key, "layer cache miss");
        let loaded = self.inner.layer(key)?;
        Ok(self.lock().entry(key).or_insert(loaded).clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;

use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::foundation::core::Rgba8Premul;

struct CountingSource {
    calls: AtomicUsize,
}

impl LayerSource for CountingSource {
    fn layer(&self, key: LayerKey) -> anyhow::Result<Arc<Raster>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if key.category() == LayerCategory::Mouth {
            anyhow::bail!("mouths are missing");
        }
        let mut r = Raster::new(1, 1);
        r.fill(Rgba8Premul::opaque(key.variant() as u8, 0, 0));
        Ok(Arc::new(r))
    }
}

#[test]
fn key_display_matches_asset_file_stem() {
    let key = LayerKey::new(LayerCategory::Pupils, 11).unwrap();
    assert_eq!(key.to_string(), "pupils11");
    assert_eq!(key.file_name(), "pupils11.png");
}

#[test]
fn key_rejects_out_of_range_variants() {
    assert!(LayerKey::new(LayerCategory::Fade, 0).is_err());
    assert!(LayerKey::new(LayerCategory::Fade, 5).is_err());
    assert!(LayerKey::new(LayerCategory::Mouth, 19).is_ok());
}

#[test]
fn all_keys_cover_reference_asset_set() {
    assert_eq!(LayerKey::all().count(), 4 + 11 + 11 + 8 + 13 + 11 + 19);
}

#[test]
fn memory_source_reports_missing_layer() {
    let mut src = MemoryLayerSource::new();
    let key = LayerKey::new(LayerCategory::Brow, 3).unwrap();
    assert!(src.is_empty());
    src.insert_raster(key, Raster::new(1, 1));
    assert_eq!(src.len(), 1);
    assert!(src.layer(key).is_ok());

    let other = LayerKey::new(LayerCategory::Brow, 4).unwrap();
    let err = src.layer(other).unwrap_err();
    assert!(err.to_string().contains("brow4"));
}

#[test]
fn memory_source_insert_encoded_fails_with_key() {
    let mut src = MemoryLayerSource::new();
    let key = LayerKey::new(LayerCategory::Eyes, 2).unwrap();
    let err = src.insert_encoded(key, b"junk").unwrap_err();
    assert_eq!(err.layer_key(), Some(key));
}

#[test]
fn dir_source_missing_file_names_path() {
    let src = DirLayerSource::new("/nonexistent/wavatar/parts");
    let key = LayerKey::new(LayerCategory::Mask, 1).unwrap();
    let err = src.layer(key).unwrap_err();
    assert!(format!("{err:#}").contains("mask1.png"));
}

#[test]
fn cached_source_loads_each_key_once() {
    let cached = CachedLayerSource::new(CountingSource {
        calls: AtomicUsize::new(0),
    });
    let key = LayerKey::new(LayerCategory::Eyes, 5).unwrap();

    let a = cached.layer(key).unwrap();
    let b = cached.layer(key).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);
    assert_eq!(cached.cached_len(), 1);
}

#[test]
fn cached_source_does_not_cache_failures() {
    let cached = CachedLayerSource::new(CountingSource {
        calls: AtomicUsize::new(0),
    });
    let key = LayerKey::new(LayerCategory::Mouth, 1).unwrap();

    assert!(cached.layer(key).is_err());
    assert!(cached.layer(key).is_err());
    assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
    assert_eq!(cached.cached_len(), 0);
}

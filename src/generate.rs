use crate::{
    assets::source::{LayerCategory, LayerKey, LayerSource},
    foundation::core::{AVATAR_SIZE, Raster},
    foundation::error::{WavatarError, WavatarResult},
    params::AvatarParams,
    raster::{composite::draw_over, flood::flood_fill},
};

/// Generate the avatar for `input` (typically a hash of an email address).
///
/// Deterministic: the same input and layer set always yield the same pixels. Fails only
/// when a layer cannot be obtained or has the wrong size; no partial raster is returned.
#[tracing::instrument(skip_all, fields(input_len = input.len()))]
pub fn generate(input: &[u8], layers: &dyn LayerSource) -> WavatarResult<Raster> {
    let params = AvatarParams::derive(input);
    tracing::debug!(?params, "derived avatar params");
    generate_with_params(&params, layers)
}

/// Assemble an avatar from explicit parameters.
#[tracing::instrument(skip(layers))]
pub fn generate_with_params(
    params: &AvatarParams,
    layers: &dyn LayerSource,
) -> WavatarResult<Raster> {
    let mut raster = Raster::new(AVATAR_SIZE, AVATAR_SIZE);

    raster.fill(params.background_color().to_opaque());

    for key in params.layers() {
        apply_layer(&mut raster, layers, key)?;

        if key.category() == LayerCategory::Mask {
            let center = i64::from(AVATAR_SIZE / 2);
            let wave = params.wave_color().to_opaque();
            let filled = flood_fill(&mut raster, center, center, wave);
            tracing::debug!(filled, "filled wave area");
        }
    }

    Ok(raster)
}

fn apply_layer(raster: &mut Raster, layers: &dyn LayerSource, key: LayerKey) -> WavatarResult<()> {
    let layer = layers
        .layer(key)
        .map_err(|e| WavatarError::layer(key, e))?;
    draw_over(raster, &layer).map_err(|e| WavatarError::layer(key, e))
}

#[cfg(test)]
#[path = "../tests/unit/generate.rs"]
mod tests;

use anyhow::Context;

use crate::foundation::core::Raster;

/// Decode encoded image bytes (PNG or any format `image` knows) into a premultiplied layer.
pub fn decode_layer(bytes: &[u8]) -> anyhow::Result<Raster> {
    let dyn_img = image::load_from_memory(bytes).context("decode layer image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    Ok(Raster::from_premul_bytes(width, height, data)?)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

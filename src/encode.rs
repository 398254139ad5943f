use std::io::Cursor;

use crate::foundation::core::Raster;
use crate::foundation::error::{WavatarError, WavatarResult};

/// Convert a premultiplied raster to a straight-alpha `image::RgbaImage`.
pub fn to_rgba_image(raster: &Raster) -> WavatarResult<image::RgbaImage> {
    let mut data = raster.as_bytes().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    image::RgbaImage::from_raw(raster.width(), raster.height(), data)
        .ok_or_else(|| WavatarError::encode("raster buffer does not match its dimensions"))
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> WavatarResult<Vec<u8>> {
    let img = to_rgba_image(raster)?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| WavatarError::encode(format!("png: {e}")))?;
    Ok(buf)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/encode.rs"]
mod tests;

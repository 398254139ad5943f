use crate::foundation::core::{Raster, Rgba8Premul};
use crate::foundation::error::{WavatarError, WavatarResult};
use crate::foundation::math::mul_div255;

/// Premultiplied source-over: `src + dst * (1 - src.a)`.
pub fn over(dst: Rgba8Premul, src: Rgba8Premul) -> Rgba8Premul {
    if src.a == 0 {
        return dst;
    }
    if src.a == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src.a);
    let blend = |s: u8, d: u8| s.saturating_add(mul_div255(u16::from(d), inv));
    Rgba8Premul {
        r: blend(src.r, dst.r),
        g: blend(src.g, dst.g),
        b: blend(src.b, dst.b),
        a: blend(src.a, dst.a),
    }
}

/// Draw `layer` over `dst` at the origin. Both rasters must have the same dimensions.
pub fn draw_over(dst: &mut Raster, layer: &Raster) -> WavatarResult<()> {
    if dst.width() != layer.width() || dst.height() != layer.height() {
        return Err(WavatarError::validation(format!(
            "layer is {}x{}, expected {}x{}",
            layer.width(),
            layer.height(),
            dst.width(),
            dst.height()
        )));
    }
    for (d, s) in dst
        .as_bytes_mut()
        .chunks_exact_mut(4)
        .zip(layer.as_bytes().chunks_exact(4))
    {
        let out = over(
            Rgba8Premul {
                r: d[0],
                g: d[1],
                b: d[2],
                a: d[3],
            },
            Rgba8Premul {
                r: s[0],
                g: s[1],
                b: s[2],
                a: s[3],
            },
        );
        d.copy_from_slice(&out.to_array());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;

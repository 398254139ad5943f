use crate::foundation::error::{WavatarError, WavatarResult};

/// Edge length of a generated avatar, in pixels.
pub const AVATAR_SIZE: u32 = 80;

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8Premul {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque color; premultiplication is the identity at alpha 255.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channels in memory order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn from_slice(px: &[u8]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }
}

/// Mutable grid of premultiplied RGBA8 pixels, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Allocate a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Wrap existing premultiplied RGBA8 bytes.
    pub fn from_premul_bytes(width: u32, height: u32, data: Vec<u8>) -> WavatarResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(WavatarError::validation(format!(
                "raster {width}x{height} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw premultiplied bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Whether `(x, y)` addresses a pixel of this raster.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba8Premul> {
        let i = self.offset(x, y)?;
        Some(Rgba8Premul::from_slice(&self.data[i..i + 4]))
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, px: Rgba8Premul) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&px.to_array());
        }
    }

    /// Replace every pixel with `px`.
    pub fn fill(&mut self, px: Rgba8Premul) {
        let bytes = px.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&bytes);
        }
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8Premul> + '_ {
        self.data.chunks_exact(4).map(Rgba8Premul::from_slice)
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

//! In-process BMP fixture builder.

#![allow(dead_code)]

/// Route decoder logs to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Writes a BITMAPFILEHEADER + BITMAPINFOHEADER followed by pixel rows.
///
/// `rows` are given in file order (bottom scanline first), each pixel as
/// on-disk `[b, g, r]`.
pub struct BmpBuilder {
    pub width: i32,
    pub height: i32,
    pub signature: u16,
    pub planes: u16,
    pub bits: u16,
    pub compression: u32,
    /// Extra bytes between the headers and the pixel block.
    pub gap: usize,
    /// Byte used for row padding.
    pub pad_byte: u8,
    pub rows: Vec<Vec<[u8; 3]>>,
}

impl BmpBuilder {
    pub fn new(rows: Vec<Vec<[u8; 3]>>) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        Self {
            width,
            height,
            signature: 0x4D42,
            planes: 1,
            bits: 24,
            compression: 0,
            gap: 0,
            pad_byte: 0,
            rows,
        }
    }

    /// Uniform image of `width`x`height` pixels with on-disk `bgr`.
    pub fn solid(width: usize, height: usize, bgr: [u8; 3]) -> Self {
        Self::new(vec![vec![bgr; width]; height])
    }

    pub fn stride(&self) -> usize {
        (self.width as usize * 3).div_ceil(4) * 4
    }

    pub fn build(&self) -> Vec<u8> {
        let stride = self.stride();
        let offset = 54 + self.gap;
        let image_size = stride * self.rows.len();
        let file_size = offset + image_size;

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(&self.signature.to_le_bytes());
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&(offset as u32).to_le_bytes());

        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&(image_size as u32).to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        out.resize(offset, 0xEE);
        for row in &self.rows {
            let start = out.len();
            for px in row {
                out.extend_from_slice(px);
            }
            out.resize(start + stride, self.pad_byte);
        }
        out
    }
}

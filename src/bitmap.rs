use crate::pixel::Rgb;

/// Header summary returned by [`crate::probe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes per row including padding.
    pub row_stride: usize,
    /// Byte offset of the pixel block within the file.
    pub pixel_offset: usize,
}

/// A decoded 24-bit image.
///
/// Pixel bytes are RGB. Rows are stored in file order, which for BMP means
/// row 0 is the bottom scanline of the picture. Each row is `row_stride`
/// bytes long, the last `row_padding()` of which are padding.
///
/// The normalized buffer has the same layout as the byte buffer with every
/// element divided by 255, computed once at decode time.
///
/// `Bitmap::default()` is an empty 0x0 image; rendering it draws nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    row_stride: usize,
    pixels: Vec<u8>,
    normalized: Vec<f32>,
}

impl Bitmap {
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        row_stride: usize,
        pixels: Vec<u8>,
        normalized: Vec<f32>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), row_stride * height as usize);
        debug_assert_eq!(pixels.len(), normalized.len());
        Self {
            width,
            height,
            row_stride,
            pixels,
            normalized,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row including padding.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Padding bytes at the end of each row.
    pub fn row_padding(&self) -> usize {
        self.row_stride - self.width as usize * 3
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGB bytes, `row_stride * height` long, padding included.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Normalized samples, same layout as [`Bitmap::pixels`].
    pub fn normalized(&self) -> &[f32] {
        &self.normalized
    }

    /// Pixel bytes of one row without its padding.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: u32) -> &[u8] {
        let start = self.offset(row, 0);
        &self.pixels[start..start + self.width as usize * 3]
    }

    /// RGB bytes at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn rgb_at(&self, row: u32, col: u32) -> [u8; 3] {
        let off = self.offset(row, col);
        [self.pixels[off], self.pixels[off + 1], self.pixels[off + 2]]
    }

    /// Normalized colour at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn normalized_at(&self, row: u32, col: u32) -> Rgb {
        let off = self.offset(row, col);
        Rgb::new(
            self.normalized[off],
            self.normalized[off + 1],
            self.normalized[off + 2],
        )
    }

    /// Typed RGB pixel at `(row, col)`.
    #[cfg(feature = "rgb")]
    pub fn rgb8_at(&self, row: u32, col: u32) -> rgb::RGB8 {
        let [r, g, b] = self.rgb_at(row, col);
        rgb::RGB8::new(r, g, b)
    }

    fn offset(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} bitmap",
            self.width,
            self.height
        );
        row as usize * self.row_stride + col as usize * 3
    }
}

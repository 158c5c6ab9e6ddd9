//! 24-bit uncompressed BMP decoder.
//!
//! Header fields are pulled one at a time from a little-endian cursor so
//! that no struct layout or alignment padding is involved in locating them.

use enough::Stop;
use tracing::{debug, warn};

use crate::error::BmpError;

/// "BM" read as a little-endian u16.
pub(crate) const BMP_SIGNATURE: u16 = 0x4D42;

/// BI_RGB.
const COMPRESSION_NONE: u32 = 0;

const SUPPORTED_BITS_PER_PIXEL: u16 = 24;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos.checked_add(N).ok_or(BmpError::UnexpectedEof)?;
        let src = self.data.get(self.pos..end).ok_or(BmpError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(src);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], BmpError> {
        let end = self.pos.checked_add(n).ok_or(BmpError::UnexpectedEof)?;
        let out = self.data.get(self.pos..end).ok_or(BmpError::UnexpectedEof)?;
        self.pos = end;
        Ok(out)
    }
}

// ── Headers ─────────────────────────────────────────────────────────

/// BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug)]
struct FileHeader {
    signature: u16,
    _file_size: u32,
    _reserved1: u16,
    _reserved2: u16,
    pixel_offset: u32,
}

/// BITMAPINFOHEADER (Windows V3).
#[derive(Clone, Copy, Debug)]
struct InfoHeader {
    _size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bits_per_pixel: u16,
    compression: u32,
    _image_size: u32,
    _x_resolution: i32,
    _y_resolution: i32,
    _colors_used: u32,
    _important_colors: u32,
}

/// Validated header of a supported BMP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BmpHeader {
    pub width: u32,
    pub height: u32,
    pub row_stride: usize,
    pub pixel_offset: usize,
}

impl BmpHeader {
    /// Size of the pixel block on disk, `row_stride * height`.
    pub(crate) fn pixel_data_len(&self) -> Result<usize, BmpError> {
        self.row_stride
            .checked_mul(self.height as usize)
            .ok_or(BmpError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

/// Bytes per row of 24-bit pixels, padded to a multiple of 4.
pub(crate) fn row_stride(width: u32) -> Option<usize> {
    (width as usize).checked_mul(3)?.checked_add(3).map(|r| r & !3)
}

/// Remaining BITMAPFILEHEADER fields, after the signature.
fn read_file_header(cursor: &mut Cursor<'_>, signature: u16) -> Result<FileHeader, BmpError> {
    Ok(FileHeader {
        signature,
        _file_size: cursor.get_u32_le()?,
        _reserved1: cursor.get_u16_le()?,
        _reserved2: cursor.get_u16_le()?,
        pixel_offset: cursor.get_u32_le()?,
    })
}

fn read_info_header(cursor: &mut Cursor<'_>) -> Result<InfoHeader, BmpError> {
    Ok(InfoHeader {
        _size: cursor.get_u32_le()?,
        width: cursor.get_i32_le()?,
        height: cursor.get_i32_le()?,
        planes: cursor.get_u16_le()?,
        bits_per_pixel: cursor.get_u16_le()?,
        compression: cursor.get_u32_le()?,
        _image_size: cursor.get_u32_le()?,
        _x_resolution: cursor.get_i32_le()?,
        _y_resolution: cursor.get_i32_le()?,
        _colors_used: cursor.get_u32_le()?,
        _important_colors: cursor.get_u32_le()?,
    })
}

/// Parse and validate both headers.
///
/// Checks run in a fixed order: signature, compression, bit depth, planes,
/// then dimensions.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, BmpError> {
    let mut cursor = Cursor::new(data);

    let signature = cursor.get_u16_le()?;
    if signature != BMP_SIGNATURE {
        warn!(signature, "rejecting file without BM signature");
        return Err(BmpError::NotABmpFile { signature });
    }
    let file = read_file_header(&mut cursor, signature)?;

    let info = read_info_header(&mut cursor)?;
    debug!(?file, ?info, "read BMP headers");

    if info.compression != COMPRESSION_NONE {
        warn!(compression = info.compression, "compressed BMP not supported");
        return Err(BmpError::UnsupportedCompression(info.compression));
    }
    if info.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
        warn!(bits = info.bits_per_pixel, "BMP bit depth not supported");
        return Err(BmpError::UnsupportedBitDepth(info.bits_per_pixel));
    }
    if info.planes != 1 {
        warn!(planes = info.planes, "BMP plane count not supported");
        return Err(BmpError::UnsupportedPlaneCount(info.planes));
    }

    if info.width <= 0 {
        return Err(BmpError::InvalidHeader(format!(
            "BMP width must be positive, got {}",
            info.width
        )));
    }
    if info.height <= 0 {
        return Err(BmpError::InvalidHeader(format!(
            "BMP height must be positive (top-down rows unsupported), got {}",
            info.height
        )));
    }

    let width = info.width as u32;
    let height = info.height as u32;
    let row_stride = row_stride(width).ok_or(BmpError::DimensionsTooLarge { width, height })?;

    Ok(BmpHeader {
        width,
        height,
        row_stride,
        pixel_offset: file.pixel_offset as usize,
    })
}

// ── Pixel data ──────────────────────────────────────────────────────

/// Read the `len`-byte pixel block and swap every BGR triple to RGB in place.
///
/// Rows keep their on-disk order, so row 0 is the bottom scanline.
/// Padding bytes at the end of each row are copied through untouched.
pub(crate) fn decode_bmp_pixels(
    data: &[u8],
    header: &BmpHeader,
    len: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let mut cursor = Cursor::new(data);
    cursor.set_position(header.pixel_offset)?;
    let mut buf = cursor.take(len)?.to_vec();

    let row_bytes = header.width as usize * 3;
    for (row_idx, row) in buf.chunks_exact_mut(header.row_stride).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for pix in row[..row_bytes].chunks_exact_mut(3) {
            pix.swap(0, 2);
        }
    }

    Ok(buf)
}

/// Divide every byte by 255.
pub(crate) fn normalize(pixels: &[u8]) -> Vec<f32> {
    pixels.iter().map(|&b| f32::from(b) / 255.0).collect()
}

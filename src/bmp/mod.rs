//! BMP decoding (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::load_file`] or
//! [`crate::DecodeRequest`].

mod decode;

use enough::Stop;
use tracing::debug;

use crate::bitmap::{Bitmap, BmpInfo};
use crate::error::BmpError;
use crate::limits::Limits;

/// Parse the headers only.
pub(crate) fn probe(data: &[u8]) -> Result<BmpInfo, BmpError> {
    let header = decode::parse_bmp_header(data)?;
    Ok(BmpInfo {
        width: header.width,
        height: header.height,
        row_stride: header.row_stride,
        pixel_offset: header.pixel_offset,
    })
}

/// Decode a 24-bit BMP into a [`Bitmap`].
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Bitmap, BmpError> {
    let header = decode::parse_bmp_header(data)?;
    let len = header.pixel_data_len()?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height, len)?;
    }
    stop.check()?;

    let pixels = decode::decode_bmp_pixels(data, &header, len, stop)?;
    let normalized = decode::normalize(&pixels);
    debug!(
        width = header.width,
        height = header.height,
        row_stride = header.row_stride,
        "decoded BMP"
    );

    Ok(Bitmap::from_parts(
        header.width,
        header.height,
        header.row_stride,
        pixels,
        normalized,
    ))
}

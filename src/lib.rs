//! # bmpview
//!
//! 24-bit uncompressed BMP decoder with a channel-aware pixel renderer.
//!
//! ## Decoding
//!
//! [`load_file`] and [`DecodeRequest`] turn a Windows V3 BMP
//! (BITMAPFILEHEADER + BITMAPINFOHEADER, 24 bits per pixel, `BI_RGB`, one
//! plane) into an immutable [`Bitmap`]. The bitmap keeps the file's row
//! padding and bottom-to-top row order, converts BGR to RGB once, and caches
//! a normalized `f32` copy of every byte for rendering.
//!
//! ## Rendering
//!
//! [`render`] paints a bitmap onto any [`Canvas`] one pixel at a time,
//! applying the channel toggles, brightness offset, luminance mode, flips and
//! white transparency in [`DisplayParameters`]. [`FrameBuffer`] is an
//! in-memory canvas for headless use.
//!
//! ## Histogram
//!
//! [`Histogram::from_bitmap`] counts byte values per channel under the same
//! display parameters.
//!
//! ## Non-Goals
//!
//! - Compressed, paletted, 16-bit or 32-bit BMP variants
//! - Encoding
//! - GUI widgets and event handling
//!
//! ## Usage
//!
//! ```no_run
//! use bmpview::{DisplayParameters, FrameBuffer, load_file, render};
//!
//! let bitmap = load_file("picture.bmp")?;
//! let params = DisplayParameters::default().with_brightness(0.1);
//! let mut frame = FrameBuffer::new(bitmap.width(), bitmap.height());
//! render(&bitmap, &params, (0, 0), &mut frame);
//! # Ok::<(), bmpview::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod bmp;
mod decode;
mod error;
mod histogram;
mod limits;
mod pixel;
mod render;

// Re-exports
pub use bitmap::{Bitmap, BmpInfo};
pub use decode::{DecodeRequest, decode_bmp, load_file, load_file_with, probe};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use histogram::{BINS, Channel, Histogram};
pub use limits::Limits;
pub use pixel::{LUMINANCE_WEIGHTS, Rgb, WHITE_THRESHOLD, luminance};
pub use render::{Canvas, DisplayParameters, FrameBuffer, pixel_color, render};

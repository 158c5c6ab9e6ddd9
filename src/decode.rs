use std::io::ErrorKind;
use std::path::Path;

use enough::{Stop, Unstoppable};
use tracing::info;

use crate::bitmap::{Bitmap, BmpInfo};
use crate::error::BmpError;
use crate::limits::Limits;

/// Builder for a single decode call.
///
/// ```no_run
/// use bmpview::{DecodeRequest, Limits, Unstoppable};
///
/// let data = std::fs::read("photo.bmp")?;
/// let limits = Limits { max_pixels: Some(4096 * 4096), ..Default::default() };
/// let bitmap = DecodeRequest::new(&data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", bitmap.width(), bitmap.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse and validate the headers without reading pixel data.
    pub fn probe(&self) -> Result<BmpInfo, BmpError> {
        crate::bmp::probe(self.data)
    }

    pub fn decode(self, stop: impl Stop) -> Result<Bitmap, BmpError> {
        crate::bmp::decode(self.data, self.limits, &stop)
    }
}

/// Decode BMP bytes with no limits.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Bitmap, BmpError> {
    DecodeRequest::new(data).decode(stop)
}

/// Parse and validate BMP headers without decoding pixels.
pub fn probe(data: &[u8]) -> Result<BmpInfo, BmpError> {
    crate::bmp::probe(data)
}

/// Read and decode a BMP file.
///
/// A missing file yields [`BmpError::FileNotFound`]; any other read failure
/// yields [`BmpError::Io`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Bitmap, BmpError> {
    load_file_with(path.as_ref(), None, Unstoppable)
}

/// Read and decode a BMP file with optional limits and a stop token.
pub fn load_file_with(
    path: impl AsRef<Path>,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Bitmap, BmpError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading BMP");
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BmpError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => BmpError::Io(e),
    })?;

    let mut request = DecodeRequest::new(&data);
    if let Some(limits) = limits {
        request = request.with_limits(limits);
    }
    request.decode(stop)
}

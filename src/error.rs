use std::path::PathBuf;

use enough::StopReason;

/// Errors from BMP loading and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a BMP file (signature {signature:#06x})")]
    NotABmpFile { signature: u16 },

    #[error("unsupported BMP compression: {0}")]
    UnsupportedCompression(u32),

    #[error("unsupported BMP bit depth: {0} bits/pixel")]
    UnsupportedBitDepth(u16),

    #[error("unsupported BMP plane count: {0}")]
    UnsupportedPlaneCount(u16),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

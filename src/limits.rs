use crate::error::BmpError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Limits are checked after the
/// headers validate and before any pixel buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes held by a decoded bitmap: the raw byte buffer plus its
    /// normalized `f32` copy, padding included.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a bitmap of `width` x `height` whose pixel block is
    /// `pixel_bytes` long.
    pub(crate) fn check(&self, width: u32, height: u32, pixel_bytes: usize) -> Result<(), BmpError> {
        let exceeded = |what: &str, value: u64, max: u64| {
            BmpError::LimitExceeded(format!("{what} {value} exceeds limit {max}"))
        };

        if let Some(max) = self.max_width
            && u64::from(width) > max
        {
            return Err(exceeded("width", width.into(), max));
        }
        if let Some(max) = self.max_height
            && u64::from(height) > max
        {
            return Err(exceeded("height", height.into(), max));
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(exceeded("pixel count", pixels, max));
            }
        }
        if let Some(max) = self.max_memory_bytes {
            let bytes = (pixel_bytes as u64)
                .checked_mul(1 + size_of::<f32>() as u64)
                .ok_or(BmpError::DimensionsTooLarge { width, height })?;
            if bytes > max {
                return Err(exceeded("decoded size in bytes", bytes, max));
            }
        }
        Ok(())
    }
}

//! Channel histograms of a [`Bitmap`] under [`DisplayParameters`].

use crate::bitmap::Bitmap;
use crate::pixel::luminance;
use crate::render::DisplayParameters;

/// Number of bins per channel.
pub const BINS: usize = 256;

/// Histogram channel selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Luminance,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Luminance,
    ];

    fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Luminance => 3,
        }
    }
}

/// Per-channel value counts.
///
/// Only channels enabled in the [`DisplayParameters`] used to build the
/// histogram are counted; the rest stay zero. Values are byte-scale and
/// shifted by `brightness * 255`. Shifted values outside `1..=255` are not
/// counted, so pure black never lands in bin 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    bins: [[u32; BINS]; 4],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            bins: [[0; BINS]; 4],
        }
    }
}

impl Histogram {
    pub fn from_bitmap(bitmap: &Bitmap, params: &DisplayParameters) -> Self {
        let mut hist = Self::default();
        if bitmap.is_empty() {
            return hist;
        }
        let offset = params.brightness * (BINS - 1) as f32;
        for row in 0..bitmap.height() {
            for px in bitmap.row(row).chunks_exact(3) {
                let [r, g, b] = [px[0], px[1], px[2]].map(f32::from);
                if params.red {
                    hist.count(Channel::Red, r - offset);
                }
                if params.green {
                    hist.count(Channel::Green, g - offset);
                }
                if params.blue {
                    hist.count(Channel::Blue, b - offset);
                }
                if params.luminance {
                    hist.count(Channel::Luminance, luminance(r, g, b) - offset);
                }
            }
        }
        hist
    }

    fn count(&mut self, channel: Channel, value: f32) {
        // `as` truncates toward zero and maps NaN to 0.
        let bin = value as i32;
        if bin > 0 && (bin as usize) < BINS {
            self.bins[channel.index()][bin as usize] += 1;
        }
    }

    pub fn bins(&self, channel: Channel) -> &[u32; BINS] {
        &self.bins[channel.index()]
    }

    /// Largest count in any bin of any channel.
    pub fn highest(&self) -> u32 {
        self.bins
            .iter()
            .flat_map(|c| c.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Scale `count` to a bar height where the highest bin fills `full_height`.
    ///
    /// Counts above the highest bin are clamped to `full_height`.
    pub fn bar_height(&self, count: u32, full_height: u32) -> u32 {
        match self.highest() {
            0 => 0,
            highest => {
                let scaled = u64::from(full_height) * u64::from(count) / u64::from(highest);
                u32::try_from(scaled).map_or(full_height, |h| h.min(full_height))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_rejects_zero_and_out_of_range() {
        let mut h = Histogram::default();
        h.count(Channel::Red, 0.0);
        h.count(Channel::Red, 0.9);
        h.count(Channel::Red, -3.0);
        h.count(Channel::Red, 256.0);
        h.count(Channel::Red, f32::NAN);
        assert_eq!(h.highest(), 0);

        h.count(Channel::Red, 1.0);
        h.count(Channel::Red, 255.7);
        assert_eq!(h.bins(Channel::Red)[1], 1);
        assert_eq!(h.bins(Channel::Red)[255], 1);
    }

    #[test]
    fn bar_height_scales_to_highest() {
        let mut h = Histogram::default();
        for _ in 0..4 {
            h.count(Channel::Green, 10.0);
        }
        h.count(Channel::Green, 20.0);
        assert_eq!(h.bar_height(4, 200), 200);
        assert_eq!(h.bar_height(1, 200), 50);
        assert_eq!(Histogram::default().bar_height(3, 200), 0);
    }

    #[test]
    fn bar_height_clamps_counts_above_highest() {
        let mut h = Histogram::default();
        h.count(Channel::Blue, 5.0);
        assert_eq!(h.bar_height(3, 200), 200);
        assert_eq!(h.bar_height(u32::MAX, u32::MAX), u32::MAX);
    }
}

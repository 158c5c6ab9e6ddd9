//! Per-pixel rendering of a [`Bitmap`] onto a [`Canvas`].
//!
//! Rendering walks the source in row-major order. Each visible pixel costs
//! one [`Canvas::set_color`] and one [`Canvas::fill_pixel`]; pixels hidden by
//! the white-transparency rule are skipped without touching the canvas.
//!
//! Destination `y` grows with the source row index and source row 0 is the
//! bottom scanline, so the picture is upright on a y-up canvas and upside
//! down on a y-down one unless `flip_vertical` is set.

use crate::bitmap::Bitmap;
use crate::pixel::Rgb;

/// Drawing surface consumed by [`render`].
pub trait Canvas {
    /// Colour for subsequent fills.
    fn set_color(&mut self, color: Rgb);

    /// Fill the 1x1 cell at `(x, y)` with the current colour.
    fn fill_pixel(&mut self, x: i32, y: i32);
}

/// Display settings applied while rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayParameters {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    /// Draw greyscale luminance instead of the individual channels.
    pub luminance: bool,
    /// Subtracted from every emitted channel, in normalized units.
    pub brightness: f32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    /// Skip near-white pixels (see [`Rgb::is_white`]).
    pub white_is_transparent: bool,
}

impl Default for DisplayParameters {
    fn default() -> Self {
        Self {
            red: true,
            green: true,
            blue: true,
            luminance: false,
            brightness: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
            white_is_transparent: false,
        }
    }
}

impl DisplayParameters {
    pub fn with_channels(mut self, red: bool, green: bool, blue: bool) -> Self {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self
    }

    pub fn with_luminance(mut self, luminance: bool) -> Self {
        self.luminance = luminance;
        self
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_flip(mut self, horizontal: bool, vertical: bool) -> Self {
        self.flip_horizontal = horizontal;
        self.flip_vertical = vertical;
        self
    }

    pub fn with_white_transparent(mut self, enable: bool) -> Self {
        self.white_is_transparent = enable;
        self
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }
}

/// Colour to paint for one normalized source pixel, or `None` if the pixel
/// is transparent.
///
/// Results are not clamped.
pub fn pixel_color(source: Rgb, params: &DisplayParameters) -> Option<Rgb> {
    if params.white_is_transparent && source.is_white() {
        return None;
    }
    let offset = params.brightness;
    if params.luminance {
        return Some(Rgb::grey(source.luminance() - offset));
    }
    let channel = |enabled: bool, v: f32| if enabled { v - offset } else { 0.0 };
    Some(Rgb::new(
        channel(params.red, source.r),
        channel(params.green, source.g),
        channel(params.blue, source.b),
    ))
}

/// Walk direction along one axis: starting destination offset and step.
fn axis(len: u32, reversed: bool) -> (i32, i32) {
    if reversed {
        (len as i32 - 1, -1)
    } else {
        (0, 1)
    }
}

/// Paint `bitmap` onto `canvas` with its first pixel at `origin`.
///
/// An empty bitmap draws nothing. Pixels whose destination falls outside
/// the `i32` range are skipped.
pub fn render<C: Canvas + ?Sized>(
    bitmap: &Bitmap,
    params: &DisplayParameters,
    origin: (i32, i32),
    canvas: &mut C,
) {
    if bitmap.is_empty() {
        return;
    }
    let data = bitmap.normalized();
    let stride = bitmap.row_stride();
    let width = bitmap.width() as usize;
    let (origin_x, origin_y) = origin;
    let (col_start, col_step) = axis(bitmap.width(), params.flip_horizontal);
    let (row_start, row_step) = axis(bitmap.height(), params.flip_vertical);

    let mut row = row_start;
    for src_row in data.chunks_exact(stride) {
        let mut column = col_start;
        for px in src_row[..width * 3].chunks_exact(3) {
            let dest = origin_x.checked_add(column).zip(origin_y.checked_add(row));
            if let Some((x, y)) = dest
                && let Some(color) = pixel_color(Rgb::new(px[0], px[1], px[2]), params)
            {
                canvas.set_color(color);
                canvas.fill_pixel(x, y);
            }
            column += col_step;
        }
        row += row_step;
    }
}

/// In-memory canvas of `f32` RGB cells, row-major with `y` as the row.
///
/// Fills outside the grid are ignored. Cells never drawn to hold `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    cells: Vec<Option<Rgb>>,
    current: Rgb,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            current: Rgb::BLACK,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour at `(x, y)`, `None` if untouched or out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Number of cells that have been painted.
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for FrameBuffer {
    fn set_color(&mut self, color: Rgb) {
        self.current = color;
    }

    fn fill_pixel(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(self.current);
        }
    }
}

//! CPU-side draw primitives and the RGBA frame buffer they write into.

use bytemuck::{Pod, Zeroable};

/// 8-bit RGBA color, laid out to match an `Rgba8` texture texel
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque gray with R = G = B = `level`
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

/// Drawing surface used by the render loop.
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Implementations clip to their own bounds, so callers may pass
/// coordinates outside the visible area.
pub trait Canvas {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Plot a single pixel
    fn draw_point(&mut self, x: i32, y: i32, color: Color);

    /// Draw a horizontal segment covering `x1..=x2` on row `y`
    fn draw_hline(&mut self, x1: i32, x2: i32, y: i32, color: Color);
}

/// Row-major RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Resize the buffer, discarding its contents
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, Color::BLACK);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw RGBA bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn draw_hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        if self.width == 0 || y < 0 || y >= self.height as i32 {
            return;
        }

        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let lo = lo.max(0);
        let hi = hi.min(self.width as i32 - 1);
        if lo > hi {
            return;
        }

        let row = y as usize * self.width as usize;
        self.pixels[row + lo as usize..=row + hi as usize].fill(color);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::gray(255);

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut frame = FrameBuffer::new(4, 3);
        frame.clear(Color::rgb(1, 2, 3));
        assert!(frame.as_bytes().chunks(4).all(|px| px == [1, 2, 3, 255]));
        assert_eq!(frame.as_bytes().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_points_outside_are_ignored() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.draw_point(-1, 0, WHITE);
        frame.draw_point(4, 0, WHITE);
        frame.draw_point(0, 4, WHITE);
        assert!(frame.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));

        frame.draw_point(3, 3, WHITE);
        assert_eq!(frame.pixel(3, 3), Some(WHITE));
        assert_eq!(frame.pixel(4, 3), None);
    }

    #[test]
    fn test_hline_is_clamped_to_width() {
        let mut frame = FrameBuffer::new(8, 2);
        frame.draw_hline(-50, 690, 1, WHITE);

        for x in 0..8 {
            assert_eq!(frame.pixel(x, 1), Some(WHITE));
            assert_eq!(frame.pixel(x, 0), Some(Color::BLACK));
        }
    }

    #[test]
    fn test_hline_off_screen_rows_and_spans() {
        let mut frame = FrameBuffer::new(8, 2);
        frame.draw_hline(0, 7, 2, WHITE);
        frame.draw_hline(0, 7, -1, WHITE);
        frame.draw_hline(-10, -1, 0, WHITE);
        frame.draw_hline(8, 20, 0, WHITE);
        assert!(frame.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));

        // Reversed endpoints still fill the span
        frame.draw_hline(5, 2, 0, WHITE);
        let lit: Vec<i32> = (0..8).filter(|&x| frame.pixel(x, 0) == Some(WHITE)).collect();
        assert_eq!(lit, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.clear(WHITE);
        frame.resize(3, 1);
        assert_eq!(frame.size(), (3, 1));
        assert_eq!(frame.pixel(2, 0), Some(Color::BLACK));

        frame.resize(0, 0);
        frame.draw_hline(0, 10, 0, WHITE);
        assert!(frame.as_bytes().is_empty());
    }
}

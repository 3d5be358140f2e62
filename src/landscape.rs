//! Horizon silhouette drawn over the stars.

use crate::canvas::{Canvas, Color};
use crate::params::RenderConfig;

/// Fill an axis-aligned ellipse centred on (cx, cy) with semi-axes `a` (horizontal)
/// and `b` (vertical), one horizontal span per scanline.
///
/// Span endpoints are truncated toward zero and may fall outside the canvas;
/// clipping is left to the canvas.
pub fn fill_ellipse<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, a: i32, b: i32, color: Color) {
    if a < 0 || b < 0 {
        return;
    }
    if b == 0 {
        canvas.draw_hline(cx - a, cx + a, cy, color);
        return;
    }

    let b2 = f64::from(b) * f64::from(b);
    for y in cy - b..=cy + b {
        let dy = f64::from(y - cy);
        let dx = f64::from(a) * (1.0 - (dy * dy) / b2).sqrt();
        let x1 = (f64::from(cx) - dx) as i32;
        let x2 = (f64::from(cx) + dx) as i32;
        canvas.draw_hline(x1, x2, y, color);
    }
}

/// Draw the landscape: a half-ellipse rising from the bottom edge that spills
/// past both sides of the viewport.
pub fn draw_landscape<C: Canvas + ?Sized>(canvas: &mut C, width: u32, height: u32, config: &RenderConfig) {
    let width = width as i32;
    let height = height as i32;
    fill_ellipse(
        canvas,
        width / 2,
        height,
        width / 2 + config.landscape_overhang_px,
        height / config.landscape_height_divisor,
        config.landscape_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::RecordingCanvas;
    use crate::canvas::FrameBuffer;

    const GREEN: Color = Color::rgb(22, 29, 21);

    #[test]
    fn test_center_row_spans_full_width() {
        let mut canvas = RecordingCanvas::new(640, 480);
        fill_ellipse(&mut canvas, 320, 480, 370, 48, GREEN);

        let spans = canvas.hlines();
        assert_eq!(spans.len(), 97); // 480-48 ..= 480+48
        assert!(spans.contains(&(-50, 690, 480)));
    }

    #[test]
    fn test_spans_narrow_towards_the_poles() {
        let mut canvas = RecordingCanvas::new(640, 480);
        fill_ellipse(&mut canvas, 320, 480, 370, 48, GREEN);

        let spans = canvas.hlines();
        let (top_x1, top_x2, top_y) = spans[0];
        assert_eq!(top_y, 432);
        assert_eq!((top_x1, top_x2), (320, 320));

        let widths: Vec<i32> = spans
            .iter()
            .take_while(|(_, _, y)| *y <= 480)
            .map(|(x1, x2, _)| x2 - x1)
            .collect();
        assert!(widths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_framebuffer_clips_the_ellipse() {
        let mut frame = FrameBuffer::new(640, 480);
        fill_ellipse(&mut frame, 320, 480, 370, 48, GREEN);

        // Row 479 is one below the centre row; its span covers the whole width
        assert_eq!(frame.pixel(0, 479), Some(GREEN));
        assert_eq!(frame.pixel(639, 479), Some(GREEN));
        // Above the ellipse nothing is touched
        assert_eq!(frame.pixel(320, 431), Some(Color::BLACK));
        assert_eq!(frame.pixel(320, 432), Some(GREEN));
    }

    #[test]
    fn test_degenerate_ellipses() {
        let mut canvas = RecordingCanvas::new(10, 10);
        fill_ellipse(&mut canvas, 5, 5, 3, 0, GREEN);
        assert_eq!(canvas.hlines(), vec![(2, 8, 5)]);

        let mut canvas = RecordingCanvas::new(10, 10);
        fill_ellipse(&mut canvas, 5, 5, -1, 2, GREEN);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_landscape_for_default_viewport() {
        let config = RenderConfig::default();
        let mut canvas = RecordingCanvas::new(640, 480);
        draw_landscape(&mut canvas, 640, 480, &config);

        assert!(canvas.hlines().contains(&(-50, 690, 480)));
        assert_eq!(canvas.hlines().first().map(|s| s.2), Some(432));
    }
}

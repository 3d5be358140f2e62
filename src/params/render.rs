//! Window and frame composition configuration.

use std::time::Duration;

use crate::canvas::Color;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window title
    pub window_title: String,

    /// Initial window width (pixels)
    pub window_width: u32,

    /// Initial window height (pixels)
    pub window_height: u32,

    /// Pause after each presented frame (milliseconds)
    /// 16ms ≈ 60 fps; the delay is not corrected for time spent drawing.
    pub frame_delay_ms: u64,

    /// Color the frame is cleared to before drawing stars
    pub background_color: Color,

    /// Landscape silhouette color
    pub landscape_color: Color,

    /// How far the landscape extends past each side of the window (pixels)
    pub landscape_overhang_px: i32,

    /// Landscape height as a fraction of window height (height / divisor)
    pub landscape_height_divisor: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_title: "Starry Sky".to_string(),
            window_width: 640,
            window_height: 480,
            frame_delay_ms: 16,
            background_color: Color::BLACK,
            landscape_color: Color::rgb(22, 29, 21), // Dark moss green
            landscape_overhang_px: 50,
            landscape_height_divisor: 10,
        }
    }
}

impl RenderConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

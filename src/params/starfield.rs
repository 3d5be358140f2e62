//! Star field simulation parameters.

/// Star field sampling and motion parameters
#[derive(Debug, Clone)]
pub struct StarFieldParams {
    /// Number of stars in the field
    pub star_count: usize,

    /// Angular advance applied every frame (radians per frame)
    /// Not scaled by elapsed time: rotation speed is tied to the frame rate.
    pub rotation_speed_rad: f32,

    /// Outermost star distance as a multiple of viewport height
    /// 1.25 lets the disc reach the top corners of a 4:3 window.
    pub max_radius_factor: f32,

    /// Dimmest star brightness (gray level, inclusive)
    pub brightness_min: u8,

    /// Brightest star brightness (gray level, inclusive)
    pub brightness_max: u8,
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
            star_count: 1000,
            rotation_speed_rad: 0.0002,
            max_radius_factor: 1.25,
            brightness_min: 100,
            brightness_max: 255,
        }
    }
}

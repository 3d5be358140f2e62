//! Star field rotating about a pivot at the bottom-center of the viewport.
//!
//! Stars are stored in polar form (radius, angle) around the pivot so that
//! rotating the whole field is a single addition per star.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::params::StarFieldParams;

/// A single star
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Distance from the pivot (pixels), fixed for the star's lifetime
    pub radius: f32,

    /// Current angle around the pivot (radians, in [0, 2π))
    pub angle: f32,

    /// Gray level used to draw the star
    pub brightness: u8,

    /// Cartesian position derived from pivot, radius and angle
    pub position: Vec2,
}

impl Star {
    pub fn new(pivot: Vec2, radius: f32, angle: f32, brightness: u8) -> Self {
        let mut star = Self {
            radius,
            angle,
            brightness,
            position: pivot,
        };
        star.reposition(pivot);
        star
    }

    /// Pixel the star is drawn at (coordinates truncated toward zero)
    pub fn pixel(&self) -> (i32, i32) {
        (self.position.x as i32, self.position.y as i32)
    }

    fn reposition(&mut self, pivot: Vec2) {
        self.position = pivot + self.radius * Vec2::new(self.angle.cos(), self.angle.sin());
    }
}

/// Fixed-size collection of stars sharing one pivot
#[derive(Clone, Debug)]
pub struct StarField {
    stars: Vec<Star>,
    pivot: Vec2,
    max_radius: f32,
}

impl StarField {
    /// Sample a fresh field for a `width` x `height` viewport.
    ///
    /// The pivot sits at the bottom-center of the viewport. Radii are drawn as
    /// `sqrt(u) * max_radius` so stars are spread evenly over the disc's area
    /// rather than bunched near the pivot.
    pub fn initialize<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        params: &StarFieldParams,
        rng: &mut R,
    ) -> Self {
        let pivot = Vec2::new(width as f32 / 2.0, height as f32);
        let max_radius = height as f32 * params.max_radius_factor;

        let stars = (0..params.star_count)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let radius = rng.gen::<f32>().sqrt() * max_radius;
                let brightness = rng.gen_range(params.brightness_min..=params.brightness_max);
                Star::new(pivot, radius, angle, brightness)
            })
            .collect();

        Self {
            stars,
            pivot,
            max_radius,
        }
    }

    /// Rotate every star by `rotation_speed` radians about the pivot
    pub fn advance(&mut self, rotation_speed: f32) {
        let pivot = self.pivot;
        for star in &mut self.stars {
            star.angle = wrap_angle(star.angle + rotation_speed);
            star.reposition(pivot);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(stars: Vec<Star>, pivot: Vec2, max_radius: f32) -> Self {
        Self {
            stars,
            pivot,
            max_radius,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Wrap an angle into [0, 2π)
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

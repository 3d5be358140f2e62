//! Platform-independent frame state machine.
//!
//! The windowing layer feeds [`LoopEvent`]s in, calls [`RenderLoop::update`]
//! once per tick and hands a [`Canvas`] to [`RenderLoop::draw`]. Nothing here
//! touches the window, GPU or audio device.

use rand::rngs::StdRng;

use crate::canvas::{Canvas, Color};
use crate::landscape::draw_landscape;
use crate::params::{RenderConfig, StarFieldParams};
use crate::starfield::StarField;

/// Loop lifecycle; `Stopped` is terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Input the loop reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEvent {
    Quit,
    Resized { width: u32, height: u32 },
}

/// Drawable area in physical pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether a pixel lies inside the viewport, edges included
    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && y >= 0 && i64::from(x) <= i64::from(self.width) && i64::from(y) <= i64::from(self.height)
    }
}

/// Per-frame driver owning the star field
pub struct RenderLoop {
    state: LoopState,
    viewport: Viewport,
    starfield: StarField,
    params: StarFieldParams,
    render_config: RenderConfig,
    rng: StdRng,
}

impl RenderLoop {
    /// Create a running loop with a freshly sampled star field
    pub fn new(
        viewport: Viewport,
        params: StarFieldParams,
        render_config: RenderConfig,
        mut rng: StdRng,
    ) -> Self {
        let starfield = StarField::initialize(viewport.width, viewport.height, &params, &mut rng);
        Self {
            state: LoopState::Running,
            viewport,
            starfield,
            params,
            render_config,
            rng,
        }
    }

    /// Apply a single input event
    pub fn handle_event(&mut self, event: LoopEvent) {
        if self.state == LoopState::Stopped {
            return;
        }

        match event {
            LoopEvent::Quit => {
                log::info!("Quit requested");
                self.state = LoopState::Stopped;
            }
            LoopEvent::Resized { width, height } => {
                log::debug!("Viewport resized to {}x{}, regenerating stars", width, height);
                self.viewport = Viewport::new(width, height);
                self.starfield =
                    StarField::initialize(width, height, &self.params, &mut self.rng);
            }
        }
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        if self.state == LoopState::Running {
            self.starfield.advance(self.params.rotation_speed_rad);
        }
    }

    /// Compose the current frame: background, visible stars, then the landscape
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear(self.render_config.background_color);

        for star in self.starfield.stars() {
            let pixel = star.pixel();
            if self.viewport.contains(pixel) {
                canvas.draw_point(pixel.0, pixel.1, Color::gray(star.brightness));
            }
        }

        draw_landscape(
            canvas,
            self.viewport.width,
            self.viewport.height,
            &self.render_config,
        );
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn starfield(&self) -> &StarField {
        &self.starfield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawOp, RecordingCanvas};
    use crate::canvas::FrameBuffer;
    use crate::starfield::Star;
    use glam::Vec2;
    use rand::SeedableRng;

    fn render_loop(width: u32, height: u32) -> RenderLoop {
        RenderLoop::new(
            Viewport::new(width, height),
            StarFieldParams::default(),
            RenderConfig::default(),
            StdRng::seed_from_u64(9),
        )
    }

    #[test]
    fn test_viewport_bounds_are_inclusive() {
        let viewport = Viewport::new(640, 480);

        assert!(viewport.contains((0, 0)));
        assert!(viewport.contains((640, 480)));
        assert!(viewport.contains((640, 0)));
        assert!(viewport.contains((0, 480)));

        assert!(!viewport.contains((-1, 240)));
        assert!(!viewport.contains((641, 240)));
        assert!(!viewport.contains((320, -1)));
        assert!(!viewport.contains((320, 481)));
    }

    #[test]
    fn test_starts_running_with_default_field() {
        let lp = render_loop(640, 480);
        assert_eq!(lp.state(), LoopState::Running);
        assert_eq!(lp.starfield().len(), 1000);
        assert_eq!(lp.starfield().pivot(), Vec2::new(320.0, 480.0));
        assert_eq!(lp.starfield().max_radius(), 600.0);
    }

    #[test]
    fn test_update_rotates_stars() {
        let mut lp = render_loop(640, 480);
        let before = lp.starfield().stars()[0];
        lp.update();
        let after = lp.starfield().stars()[0];

        assert_eq!(before.radius, after.radius);
        let delta = (after.angle - before.angle).rem_euclid(std::f32::consts::TAU);
        assert!((delta - 0.0002).abs() < 1e-5);
    }

    #[test]
    fn test_resize_regenerates_field() {
        let mut lp = render_loop(640, 480);
        let before: Vec<Star> = lp.starfield().stars().to_vec();

        lp.handle_event(LoopEvent::Resized {
            width: 1280,
            height: 720,
        });

        assert_eq!(lp.state(), LoopState::Running);
        assert_eq!(lp.viewport(), Viewport::new(1280, 720));
        assert_eq!(lp.starfield().max_radius(), 900.0);
        assert_eq!(lp.starfield().pivot(), Vec2::new(640.0, 720.0));
        for (a, b) in before.iter().zip(lp.starfield().stars()) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_quit_stops_everything() {
        let mut lp = render_loop(640, 480);
        lp.handle_event(LoopEvent::Quit);
        assert_eq!(lp.state(), LoopState::Stopped);
        assert!(!lp.is_running());

        let frozen: Vec<Star> = lp.starfield().stars().to_vec();
        lp.update();
        lp.handle_event(LoopEvent::Resized {
            width: 100,
            height: 100,
        });

        assert_eq!(lp.state(), LoopState::Stopped);
        assert_eq!(lp.viewport(), Viewport::new(640, 480));
        assert_eq!(lp.starfield().stars(), frozen.as_slice());
    }

    #[test]
    fn test_draw_order_and_visibility() {
        let lp = render_loop(640, 480);
        let mut canvas = RecordingCanvas::new(640, 480);
        lp.draw(&mut canvas);

        assert_eq!(canvas.ops.first(), Some(&DrawOp::Clear(Color::BLACK)));
        // Landscape spans come after every star
        let first_line = canvas
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::HLine { .. }))
            .unwrap();
        assert!(canvas.ops[first_line..]
            .iter()
            .all(|op| matches!(op, DrawOp::HLine { .. })));

        let visible = lp
            .starfield()
            .stars()
            .iter()
            .filter(|s| lp.viewport().contains(s.pixel()))
            .count();
        let points = canvas.points();
        assert_eq!(points.len(), visible);
        assert!(visible > 0 && visible < 1000);

        for (x, y, color) in points {
            assert!(lp.viewport().contains((x, y)));
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
            assert_eq!(color.a, 255);
            assert!(color.r >= 100);
        }
    }

    #[test]
    fn test_off_screen_star_is_skipped() {
        let mut lp = render_loop(640, 480);
        let pivot = lp.starfield().pivot();
        lp.starfield = StarField::from_parts(
            vec![
                // (920, 480): right of the viewport
                Star::new(pivot, 600.0, 0.0, 200),
                // On the pivot
                Star::new(pivot, 0.0, 1.3, 180),
                // Left edge
                Star::new(pivot, 320.0, std::f32::consts::PI, 150),
                // Top edge
                Star::new(pivot, 480.0, -std::f32::consts::FRAC_PI_2, 120),
            ],
            pivot,
            600.0,
        );

        let mut canvas = RecordingCanvas::new(640, 480);
        lp.draw(&mut canvas);

        let points: Vec<(i32, i32)> = canvas.points().iter().map(|&(x, y, _)| (x, y)).collect();
        assert_eq!(points.len(), 3);
        assert!(points.contains(&(320, 480)));
        assert!(points.iter().any(|&(x, y)| x == 0 && y >= 479));
        assert!(points.iter().any(|&(x, y)| y == 0 && (319..=320).contains(&x)));
        assert!(points.iter().all(|&(x, _)| x <= 640));
    }

    #[test]
    fn test_draw_into_framebuffer() {
        let lp = render_loop(640, 480);
        let mut frame = FrameBuffer::new(640, 480);
        lp.draw(&mut frame);

        // Bottom row is covered by the landscape
        assert_eq!(frame.pixel(0, 479), Some(Color::rgb(22, 29, 21)));
        // Some star made it onto the sky
        let lit = (0..480)
            .flat_map(|y| (0..640).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                frame
                    .pixel(x, y)
                    .is_some_and(|c| c != Color::BLACK && c != Color::rgb(22, 29, 21))
            })
            .count();
        assert!(lit > 0);
    }
}

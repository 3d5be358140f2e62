//! Parameter definitions with units and documented semantics.
//!
//! Every constant the visualization depends on lives here with:
//! - Units (pixels, radians per frame, milliseconds)
//! - A `Default` that reproduces the classic look

mod audio;
mod render;
mod starfield;

// Re-export all types
pub use audio::AudioConfig;
pub use render::RenderConfig;
pub use starfield::StarFieldParams;

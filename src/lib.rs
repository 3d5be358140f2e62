//! Starry Sky library - rotating star field with a looping soundtrack

pub mod audio;
pub mod canvas;
pub mod cli;
pub mod error;
pub mod landscape;
pub mod params;
pub mod render_loop;
pub mod rendering;
pub mod starfield;

pub use error::{Result, StarryError};

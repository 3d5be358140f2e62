//! Background audio: WAV decoding, the sample queue and the output device.
//!
//! The track is queued once at startup and queued again whenever the device
//! has played everything, which loops it without tracking playback position.

mod clip;
mod queue;
mod system;

// Re-export public types
pub use clip::AudioClip;
pub use queue::AudioQueue;
pub use system::AudioSystem;

//! Background audio configuration.

use std::path::PathBuf;

/// Background track configuration
#[derive(Debug, Clone)]
pub struct AudioConfig {
    /// WAV file looped for the lifetime of the window
    /// Channel count and sample rate are taken from the file itself.
    pub asset_path: PathBuf,

    /// Play audio at all (false skips device setup entirely)
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            asset_path: PathBuf::from("assets/toTheGateway_MarioGalaxy.wav"),
            enabled: true,
        }
    }
}

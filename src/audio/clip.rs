//! WAV asset decoding.

use std::path::Path;

use crate::error::{Result, StarryError};

/// Decoded audio track held in memory as interleaved `f32` samples
#[derive(Debug, Clone)]
pub struct AudioClip {
    /// Interleaved samples in [-1, 1]
    pub samples: Vec<f32>,

    /// Channels per frame, as stored in the file
    pub channels: u16,

    /// Frames per second, as stored in the file
    pub sample_rate: u32,
}

impl AudioClip {
    /// Load a WAV file, converting integer PCM to `f32`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = hound::WavReader::open(path).map_err(|e| StarryError::asset(path, e))?;
        let spec = reader.spec();

        let samples = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<std::result::Result<Vec<_>, _>>(),
            hound::SampleFormat::Int => {
                let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<std::result::Result<Vec<_>, _>>()
            }
        }
        .map_err(|e| StarryError::asset(path, e))?;

        if samples.is_empty() {
            return Err(StarryError::asset(path, "file contains no samples"));
        }

        log::info!(
            "Loaded {}: {} ch @ {}Hz, {:.1}s",
            path.display(),
            spec.channels,
            spec.sample_rate,
            samples.len() as f32 / (spec.channels as f32 * spec.sample_rate as f32)
        );

        Ok(Self {
            samples,
            channels: spec.channels,
            sample_rate: spec.sample_rate,
        })
    }

    /// Number of sample frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }
}

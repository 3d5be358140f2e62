//! Audio output device playing a looping clip.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use super::{AudioClip, AudioQueue};
use crate::error::{Result, StarryError};

/// Output stream fed from an [`AudioQueue`] that is topped up with the same
/// clip every time it runs dry
pub struct AudioSystem {
    /// Audio output stream (kept alive; dropping it closes the device)
    stream: cpal::Stream,

    /// Samples waiting for the device
    queue: AudioQueue,

    /// Decoded track re-queued on every loop
    clip: AudioClip,
}

impl AudioSystem {
    /// Open the default output device using the clip's own channel count and
    /// sample rate, and queue the clip once. Playback starts with [`Self::start`].
    pub fn open(clip: AudioClip) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| StarryError::init("audio output", "no output device found"))?;

        let config = cpal::StreamConfig {
            channels: clip.channels,
            sample_rate: cpal::SampleRate(clip.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        log::info!(
            "Audio: {} @ {}Hz, {} ch",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            config.sample_rate.0,
            config.channels
        );

        let queue = AudioQueue::new();
        let callback_queue = queue.clone();

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    callback_queue.drain_into(data);
                },
                |err| log::warn!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| StarryError::resource("audio stream", e))?;

        queue.clear();
        queue.push(&clip.samples);

        Ok(Self {
            stream,
            queue,
            clip,
        })
    }

    /// Begin playback
    pub fn start(&self) -> Result<()> {
        self.stream
            .play()
            .map_err(|e| StarryError::init("audio playback", e))
    }

    /// Queue the clip again once the device has consumed everything.
    /// Called once per frame.
    pub fn requeue_if_drained(&self) -> bool {
        let refilled = self.queue.refill_if_drained(&self.clip.samples);
        if refilled {
            log::debug!("Audio track finished, looping ({} frames)", self.clip.frames());
        }
        refilled
    }
}

//! Sample FIFO shared between the frame loop and the audio callback.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Interleaved sample queue (thread-safe, cheap to clone)
///
/// The frame loop pushes whole tracks; the output callback pops exactly as
/// many samples as the device asks for and pads with silence once empty.
#[derive(Clone, Debug, Default)]
pub struct AudioQueue {
    samples: Arc<Mutex<VecDeque<f32>>>,
}

impl AudioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append samples to the back of the queue
    pub fn push(&self, samples: &[f32]) {
        self.lock().extend(samples.iter().copied());
    }

    /// Samples waiting to be played
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop everything still queued
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Fill `out` from the front of the queue; missing samples become silence
    pub fn drain_into(&self, out: &mut [f32]) {
        let mut queue = self.lock();
        let available = queue.len().min(out.len());
        for (dst, src) in out.iter_mut().zip(queue.drain(..available)) {
            *dst = src;
        }
        out[available..].fill(0.0);
    }

    /// Queue `samples` again if everything previously queued has been played.
    /// Returns whether a refill happened.
    pub fn refill_if_drained(&self, samples: &[f32]) -> bool {
        let mut queue = self.lock();
        if !queue.is_empty() {
            return false;
        }
        queue.extend(samples.iter().copied());
        true
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<f32>> {
        // Samples stay valid even if a holder panicked mid-update
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::params::{AudioConfig, StarFieldParams};

/// Command line arguments (all optional; no flags gives the classic sky)
#[derive(Parser, Debug)]
#[command(name = "starry-sky")]
#[command(about = "A rotating star field over a quiet horizon", long_about = None)]
pub struct Args {
    /// WAV file to loop in the background
    #[arg(long, value_name = "PATH")]
    pub audio: Option<PathBuf>,

    /// Run without audio
    #[arg(long)]
    pub mute: bool,

    /// Number of stars
    #[arg(long, value_name = "COUNT")]
    pub stars: Option<usize>,

    /// Seed for a reproducible star layout
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Args {
    /// Star field parameters with command-line overrides applied
    pub fn star_field_params(&self) -> StarFieldParams {
        let mut params = StarFieldParams::default();
        if let Some(count) = self.stars {
            log::info!("Stars: {}", count);
            params.star_count = count;
        }
        params
    }

    /// Audio configuration with command-line overrides applied
    pub fn audio_config(&self) -> AudioConfig {
        let mut config = AudioConfig::default();
        if let Some(ref path) = self.audio {
            config.asset_path = path.clone();
        }
        if self.mute {
            log::info!("Audio: muted");
            config.enabled = false;
        }
        config
    }

    /// Random source for star placement
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::info!("Star layout seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

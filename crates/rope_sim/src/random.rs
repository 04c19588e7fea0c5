use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::Resource;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const SEED_ENV: &str = "ROPE_SEED";

/// Seeded generator for link variant picks, so a layout can be replayed.
#[derive(Resource)]
pub struct RopeRandom {
    seed: u64,
    rng: StdRng,
}

impl RopeRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `ROPE_SEED` if it parses, else wall-clock nanos.
    pub fn seed_from_env_or_time() -> u64 {
        std::env::var(SEED_ENV)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(1)
            })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for RopeRandom {
    fn default() -> Self {
        Self::new(Self::seed_from_env_or_time())
    }
}

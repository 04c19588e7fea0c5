use bevy::prelude::Resource;
use rope_sim::random::RopeRandom;

/// Stored run seed, so a layout can be replayed.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SeedState {
    pub value: u64,
}

/// Resolve seed from CLI, then env (`ROPE_SEED`), else time.
pub fn resolve_seed(cli_seed: Option<u64>) -> u64 {
    cli_seed.unwrap_or_else(RopeRandom::seed_from_env_or_time)
}

//! Subcommand handlers

pub mod config;
pub mod play;
pub mod status;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random source for a session: seeded when asked, from entropy otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

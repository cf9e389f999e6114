//! Seeder configuration

use std::env;

use events_common::config::env_or;
use events_common::ConfigError;

/// How much random data to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Random users created after the fixed ones
    pub users: usize,
    /// Random events created after the fixed ones
    pub events: usize,
    /// RNG seed; `None` seeds from OS entropy
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 10,
            events: 10,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Read `SEED_USERS`, `SEED_EVENTS` and `SEED_RNG`
    ///
    /// # Errors
    /// Returns `InvalidValue` when a variable is set but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let rng_seed = match env::var("SEED_RNG") {
            Ok(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SEED_RNG", raw))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            users: env_or("SEED_USERS", defaults.users)?,
            events: env_or("SEED_EVENTS", defaults.events)?,
            rng_seed,
        })
    }

    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

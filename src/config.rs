use rand::{rngs::StdRng, SeedableRng};
use tracing::warn;

use crate::game::{Dealer, Player};

/// Chips a new player sits down with.
pub const DEFAULT_STARTING_CHIPS: u32 = 50;

const STARTING_CHIPS_VAR: &str = "BLACKJACK_STARTING_CHIPS";
const SEED_VAR: &str = "BLACKJACK_SEED";
const PLAYER_NAME_VAR: &str = "BLACKJACK_PLAYER_NAME";

/// Session settings, read from the environment by the binary
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub player_name: String,
    pub starting_chips: u32,
    /// Seeds the shoe shuffle; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable lookup. Unset variables fall back
    /// to defaults; unparsable ones are logged and ignored.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let starting_chips =
            parse_var(&lookup, STARTING_CHIPS_VAR).unwrap_or(DEFAULT_STARTING_CHIPS);
        let seed = parse_var(&lookup, SEED_VAR);
        let player_name = lookup(PLAYER_NAME_VAR)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(generate_player_name);

        Self {
            player_name,
            starting_chips,
            seed,
        }
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub fn new_player(&self) -> Player {
        Player::new(self.player_name.clone(), self.starting_chips)
    }

    /// A dealer holding a freshly shuffled shoe.
    pub fn new_dealer(&self) -> Dealer {
        Dealer::new(&mut self.rng())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: generate_player_name(),
            starting_chips: DEFAULT_STARTING_CHIPS,
            seed: None,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable setting");
            None
        }
    }
}

fn generate_player_name() -> String {
    petname::Petnames::default().generate_one(2, "-")
}

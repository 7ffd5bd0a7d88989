use anyhow::Context;
use checkers::game::NUM_PARTICIPANTS;
use checkers::registry::CHECKERS;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub game: String,
    pub participants: usize,
    // Random when not set.
    pub random_seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            game: CHECKERS.to_owned(),
            participants: NUM_PARTICIPANTS,
            random_seed: None,
        }
    }
}

impl ConsoleConfig {
    pub fn apply_overrides(
        &mut self, game: Option<String>, participants: Option<usize>, random_seed: Option<u64>,
    ) {
        if let Some(game) = game {
            self.game = game;
        }
        if let Some(participants) = participants {
            self.participants = participants;
        }
        if random_seed.is_some() {
            self.random_seed = random_seed;
        }
    }
}

pub fn read_config_file(filename: &str) -> anyhow::Result<ConsoleConfig> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read config file '{filename}'."))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config file '{filename}'."))
}

fn parse_config(contents: &str) -> Result<ConsoleConfig, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}

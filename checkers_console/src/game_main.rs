use anyhow::Context;
use checkers::output::StdoutOutput;
use checkers::player::build_participants;
use checkers::random::PseudoRandomValue;
use checkers::registry::{GameRegistry, GameServices};
use log::info;

use crate::console_config::ConsoleConfig;


pub fn run(config: &ConsoleConfig) -> anyhow::Result<()> {
    let registry = GameRegistry::with_builtin_games();
    let random_value = match config.random_seed {
        Some(seed) => PseudoRandomValue::from_seed(seed),
        None => PseudoRandomValue::from_entropy(),
    };
    let services = GameServices {
        output: Box::new(StdoutOutput),
        random_value: Box::new(random_value),
        participants: build_participants(config.participants),
    };
    let mut game = registry
        .create(&config.game, services)
        .with_context(|| format!("Cannot create game '{}'.", config.game))?;
    info!("Running {} with {} participants", game.name(), config.participants);
    game.run();
    Ok(())
}

pub fn list_games() {
    for key in GameRegistry::with_builtin_games().game_keys() {
        println!("{}", key);
    }
}

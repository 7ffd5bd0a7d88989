use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::error::{RegistryError, SessionError};
use crate::game::{CheckersGame, Game};
use crate::output::Output;
use crate::player::Participant;
use crate::random::RandomValue;


pub const CHECKERS: &str = "checkers";

// Everything a game may need from the outside world.
pub struct GameServices {
    pub output: Box<dyn Output>,
    pub random_value: Box<dyn RandomValue>,
    pub participants: Vec<Participant>,
}

pub type GameConstructor = fn(GameServices) -> Result<Box<dyn Game>, SessionError>;

pub struct GameRegistry {
    constructors: HashMap<String, GameConstructor>,
}

impl GameRegistry {
    pub fn new() -> Self { GameRegistry { constructors: HashMap::new() } }

    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        registry.register(CHECKERS, new_checkers_game);
        registry
    }

    // Returns the previous constructor, if the key was already taken.
    pub fn register(
        &mut self, key: impl Into<String>, constructor: GameConstructor,
    ) -> Option<GameConstructor> {
        self.constructors.insert(key.into(), constructor)
    }

    pub fn contains(&self, key: &str) -> bool { self.constructors.contains_key(key) }

    pub fn game_keys(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).sorted().collect()
    }

    pub fn create(&self, key: &str, services: GameServices) -> Result<Box<dyn Game>, RegistryError> {
        let constructor = self
            .constructors
            .get(key)
            .ok_or_else(|| RegistryError::UnknownGame(key.to_owned()))?;
        debug!("Creating game '{}'", key);
        Ok(constructor(services)?)
    }
}

fn new_checkers_game(services: GameServices) -> Result<Box<dyn Game>, SessionError> {
    let game = CheckersGame::new(services.output, services.random_value, services.participants)?;
    Ok(Box::new(game))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LineBuffer;
    use crate::test_util::sample_services;

    struct Silent;

    impl Game for Silent {
        fn name(&self) -> &'static str { "silent" }
        fn run(&mut self) -> &mut dyn Output { unreachable!() }
    }

    fn new_silent(_: GameServices) -> Result<Box<dyn Game>, SessionError> { Ok(Box::new(Silent)) }

    #[test]
    fn builtin_keys() {
        let registry = GameRegistry::with_builtin_games();
        assert!(registry.contains(CHECKERS));
        assert_eq!(registry.game_keys(), vec![CHECKERS]);
    }

    #[test]
    fn unknown_game() {
        let registry = GameRegistry::with_builtin_games();
        let err = registry.create("chess", sample_services(&LineBuffer::new(), 2)).err().unwrap();
        assert_eq!(err, RegistryError::UnknownGame("chess".to_owned()));
    }

    #[test]
    fn custom_game() {
        let mut registry = GameRegistry::with_builtin_games();
        assert!(registry.register("silent", new_silent).is_none());
        assert!(registry.register("silent", new_silent).is_some());
        assert_eq!(registry.game_keys(), vec![CHECKERS, "silent"]);
        let game = registry.create("silent", sample_services(&LineBuffer::new(), 7)).unwrap();
        assert_eq!(game.name(), "silent");
    }
}

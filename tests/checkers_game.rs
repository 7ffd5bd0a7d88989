mod common;

use checkers::error::{RegistryError, SessionError};
use checkers::game::{CheckersGame, Game};
use checkers::output::LineBuffer;
use checkers::player::build_participants;
use checkers::registry::{CHECKERS, GameRegistry};
use checkers::test_util::{deterministic_random_value, sample_participants, sample_services};
use indoc::indoc;
use pretty_assertions::assert_eq;

use common::lines_of;


const STARTING_BOARD: &str = indoc! {"
        -----------------------------------------------------------------
        |       | noir  |       | noir  |       | noir  |       | noir  |
        -----------------------------------------------------------------
        | noir  |       | noir  |       | noir  |       | noir  |       |
        -----------------------------------------------------------------
        |       | noir  |       | noir  |       | noir  |       | noir  |
        -----------------------------------------------------------------
        |       |       |       |       |       |       |       |       |
        -----------------------------------------------------------------
        |       |       |       |       |       |       |       |       |
        -----------------------------------------------------------------
        | blanc |       | blanc |       | blanc |       | blanc |       |
        -----------------------------------------------------------------
        |       | blanc |       | blanc |       | blanc |       | blanc |
        -----------------------------------------------------------------
        | blanc |       | blanc |       | blanc |       | blanc |       |
        -----------------------------------------------------------------
"};

#[test]
fn run_two_participants() {
    let mut game =
        CheckersGame::new(LineBuffer::new(), deterministic_random_value(), sample_participants())
            .unwrap();
    game.run();
    let lines = game.into_output().lines();
    assert_eq!(lines.len(), 19);
    assert_eq!(lines[0], "Initialisation du jeu avec 2 participants.");
    assert_eq!(lines[1], "Initialisation de la grille en 8 colonnes et 8 lignes.");
    assert_eq!(lines[2..].to_vec(), lines_of(STARTING_BOARD));
}

#[test]
fn run_returns_the_output() {
    let buffer = LineBuffer::new();
    let mut game =
        CheckersGame::new(buffer.clone(), deterministic_random_value(), sample_participants())
            .unwrap();
    game.run().write_line("done");
    let lines = buffer.lines();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines.last().map(String::as_str), Some("done"));
}

#[test]
fn construction_fails_without_two_participants() {
    for count in 0..6 {
        let result = CheckersGame::new(
            LineBuffer::new(),
            deterministic_random_value(),
            build_participants(count),
        );
        match count {
            0 | 1 => assert_eq!(result.err(), Some(SessionError::NotEnoughParticipants { count })),
            2 => assert!(result.is_ok()),
            _ => assert_eq!(result.err(), Some(SessionError::TooManyParticipants { count })),
        }
    }
}

#[test]
fn registry_runs_checkers() {
    let buffer = LineBuffer::new();
    let registry = GameRegistry::with_builtin_games();
    let mut game = registry.create(CHECKERS, sample_services(&buffer, 2)).unwrap();
    assert_eq!(game.name(), CHECKERS);
    game.run();
    let lines = buffer.lines();
    assert_eq!(lines[0], "Initialisation du jeu avec 2 participants.");
    assert_eq!(lines[2..].to_vec(), lines_of(STARTING_BOARD));
}

#[test]
fn registry_reports_session_errors() {
    let registry = GameRegistry::with_builtin_games();
    let err = registry.create(CHECKERS, sample_services(&LineBuffer::new(), 3)).err().unwrap();
    assert_eq!(err, RegistryError::Session(SessionError::TooManyParticipants { count: 3 }));
    assert_eq!(
        err.to_string(),
        "cannot start game: too many participants (3); exactly two players are allowed"
    );
}

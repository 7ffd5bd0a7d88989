use itertools::Itertools;
use log::{debug, info};

use crate::coord::BoardShape;
use crate::error::SessionError;
use crate::grid::Grid;
use crate::output::Output;
use crate::player::Participant;
use crate::random::RandomValue;
use crate::render::render_grid;
use crate::starter::generate_starting_grid;


pub const NUM_PARTICIPANTS: usize = 2;

pub trait Game {
    fn name(&self) -> &'static str;

    // Writes the setup report to the output and returns the output for further inspection.
    fn run(&mut self) -> &mut dyn Output;
}

pub struct CheckersGame<O: Output, R: RandomValue> {
    output: O,
    // Part of the game contract, but the starting setup is fully deterministic.
    random_value: R,
    participants: [Participant; NUM_PARTICIPANTS],
    grid: Option<Grid>,
}

impl<O: Output, R: RandomValue> CheckersGame<O, R> {
    pub fn new(
        output: O, random_value: R, participants: Vec<Participant>,
    ) -> Result<Self, SessionError> {
        let count = participants.len();
        if count > NUM_PARTICIPANTS {
            return Err(SessionError::TooManyParticipants { count });
        }
        let participants: [Participant; NUM_PARTICIPANTS] = participants
            .try_into()
            .map_err(|_| SessionError::NotEnoughParticipants { count })?;
        debug!(
            "Checkers participants: {}",
            participants.iter().map(|p| p.id.0).join(", ")
        );
        Ok(CheckersGame { output, random_value, participants, grid: None })
    }

    pub fn participants(&self) -> &[Participant; NUM_PARTICIPANTS] { &self.participants }
    pub fn grid(&self) -> Option<&Grid> { self.grid.as_ref() }
    pub fn output(&self) -> &O { &self.output }
    pub fn random_value(&mut self) -> &mut R { &mut self.random_value }
    pub fn into_output(self) -> O { self.output }

    fn init_board(&mut self, board_shape: BoardShape) {
        let grid = generate_starting_grid(board_shape);
        for line in render_grid(&grid) {
            self.output.write_line(&line);
        }
        self.grid = Some(grid);
    }
}

impl<O: Output, R: RandomValue> Game for CheckersGame<O, R> {
    fn name(&self) -> &'static str { "checkers" }

    fn run(&mut self) -> &mut dyn Output {
        let board_shape = BoardShape::checkers();
        info!("Starting checkers with {} participants", self.participants.len());
        self.output.write_line(&format!(
            "Initialisation du jeu avec {} participants.",
            self.participants.len()
        ));
        self.output.write_line(&format!(
            "Initialisation de la grille en {} colonnes et {} lignes.",
            board_shape.num_cols(), board_shape.num_rows()
        ));
        self.init_board(board_shape);
        &mut self.output
    }
}

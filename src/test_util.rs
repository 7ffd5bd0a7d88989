// Test utilities shared by unit tests and the "tests" folder.

use crate::output::LineBuffer;
use crate::player::{Participant, build_participants};
use crate::random::PseudoRandomValue;
use crate::registry::GameServices;


// Nothing draws random values during setup, but let's fix the seed anyway in case this changes.
pub fn deterministic_random_value() -> PseudoRandomValue { PseudoRandomValue::from_seed(0) }

pub fn sample_participants() -> Vec<Participant> { build_participants(2) }

// Services that write into (a clone of) `buffer`.
pub fn sample_services(buffer: &LineBuffer, num_participants: usize) -> GameServices {
    GameServices {
        output: Box::new(buffer.clone()),
        random_value: Box::new(deterministic_random_value()),
        participants: build_participants(num_participants),
    }
}

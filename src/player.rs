use derive_new::new;
use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
}

// Ids are 1-based and sequential. Does not check `num_participants`: that's up to the game.
pub fn build_participants(num_participants: usize) -> Vec<Participant> {
    (1..=num_participants)
        .map(|idx| Participant::new(ParticipantId(idx as u32)))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids() {
        let ids: Vec<_> = build_participants(3).into_iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn no_validation() {
        assert!(build_participants(0).is_empty());
        assert_eq!(build_participants(5).len(), 5);
    }
}

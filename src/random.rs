use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


pub trait RandomValue {
    fn random_value(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<T: RandomValue + ?Sized> RandomValue for Box<T> {
    fn random_value(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).random_value(range)
    }
}

#[derive(Clone, Debug)]
pub struct PseudoRandomValue {
    rng: StdRng,
}

impl PseudoRandomValue {
    pub fn from_entropy() -> Self { PseudoRandomValue { rng: StdRng::from_os_rng() } }
    pub fn from_seed(seed: u64) -> Self { PseudoRandomValue { rng: StdRng::seed_from_u64(seed) } }
}

impl RandomValue for PseudoRandomValue {
    fn random_value(&mut self, range: RangeInclusive<u32>) -> u32 { self.rng.random_range(range) }
}

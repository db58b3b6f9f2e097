use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Bag randomizer over catalog indices `0..count`: every index is drawn once
/// per bag before the bag is refilled.
#[derive(Resource)]
pub struct PieceGenerator {
    count: usize,
    bag: Vec<usize>,
    rng: StdRng,
}

impl PieceGenerator {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, rng: StdRng) -> Self {
        let mut generator = Self {
            count,
            bag: Vec::with_capacity(count),
            rng,
        };
        generator.refill_bag();
        generator
    }

    /// Indices left in the current bag, in draw order.
    pub fn preview(&self) -> Vec<usize> {
        self.bag.iter().rev().copied().collect()
    }

    fn refill_bag(&mut self) {
        self.bag.clear();
        self.bag.extend(0..self.count);
        self.bag.shuffle(&mut self.rng);
    }
}

impl Iterator for PieceGenerator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bag.is_empty() {
            self.refill_bag();
        }

        self.bag.pop()
    }
}

//! RNG module - 7-bag piece sequencing
//!
//! The live bag always holds one full catalog's worth of pieces. Each draw
//! pops the head; once the new piece is on the board the next entry of a
//! shuffled copy of the catalog is appended to the tail. That copy is
//! reshuffled whenever its cursor wraps, so every kind is drawn exactly once
//! per cycle.
//!
//! Also provides a simple LCG so sequences are reproducible from a seed.

use std::collections::VecDeque;

use crate::piece::Piece;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece sequencer
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Catalog copy, reshuffled each time `next_index` wraps
    pieces: Vec<Piece>,
    /// Upcoming pieces in draw order
    bag: VecDeque<Piece>,
    /// Entry of `pieces` appended on the next refill
    next_index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a sequencer over `catalog`, seeded deterministically
    pub fn new(catalog: Vec<Piece>, seed: u32) -> Self {
        let mut bag = Self {
            bag: VecDeque::with_capacity(catalog.len()),
            pieces: catalog,
            next_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.reseed();
        bag
    }

    /// Start over: fresh shuffle, full bag, cursor at the start.
    ///
    /// The RNG stream continues, so consecutive games differ.
    pub fn reseed(&mut self) {
        self.next_index = 0;
        self.rng.shuffle(&mut self.pieces);
        self.bag.clear();
        self.bag.extend(self.pieces.iter().cloned());
    }

    /// The piece the next draw returns
    pub fn peek(&self) -> Option<&Piece> {
        self.bag.front()
    }

    /// The whole live bag in draw order
    pub fn queue(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.bag.iter()
    }

    pub fn len(&self) -> usize {
        self.bag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// Catalog in its current shuffled order
    pub fn catalog(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pop the head of the bag.
    ///
    /// When the cursor sits at the start of the catalog copy it is
    /// reshuffled first; the live bag itself is never reordered.
    pub fn take_next(&mut self) -> Option<Piece> {
        if self.next_index == 0 {
            self.rng.shuffle(&mut self.pieces);
        }
        self.bag.pop_front()
    }

    /// Append the entry under the cursor to the tail and advance the cursor.
    ///
    /// Called once the drawn piece has been installed.
    pub fn refill(&mut self) {
        let Some(piece) = self.pieces.get(self.next_index) else {
            return;
        };
        self.bag.push_back(piece.clone());
        self.next_index = (self.next_index + 1) % self.pieces.len();
    }

    /// Convenience for callers without an install step
    pub fn draw(&mut self) -> Option<Piece> {
        let piece = self.take_next()?;
        self.refill();
        Some(piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::PieceKind;

    fn kinds(pieces: impl IntoIterator<Item = Piece>) -> Vec<PieceKind> {
        let mut kinds: Vec<_> = pieces.into_iter().map(|p| p.kind()).collect();
        kinds.sort();
        kinds
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(7);
        let mut values: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_bag_starts_full() {
        let bag = PieceBag::new(catalog::pieces(10, 24), 1);
        assert_eq!(bag.len(), 7);
        assert_eq!(kinds(bag.queue().cloned()), PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_peek_matches_draw() {
        let mut bag = PieceBag::new(catalog::pieces(10, 24), 99);
        for _ in 0..20 {
            let peeked = bag.peek().cloned();
            assert_eq!(bag.draw(), peeked);
            assert_eq!(bag.len(), 7);
        }
    }

    #[test]
    fn test_take_without_refill_shrinks_bag() {
        let mut bag = PieceBag::new(catalog::pieces(10, 24), 3);
        bag.take_next();
        assert_eq!(bag.len(), 6);
        bag.refill();
        assert_eq!(bag.len(), 7);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceBag::new(catalog::pieces(10, 24), 42);
        let mut b = PieceBag::new(catalog::pieces(10, 24), 42);
        for _ in 0..30 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_empty_catalog_draws_nothing() {
        let mut bag = PieceBag::new(Vec::new(), 1);
        assert!(bag.peek().is_none());
        assert!(bag.draw().is_none());
        assert!(bag.is_empty());
    }
}

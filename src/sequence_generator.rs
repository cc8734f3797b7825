use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::error::Exhausted;

/// Yields every integer in `0..n` exactly once, in a uniformly random order.
///
/// The permutation is drawn up front; iteration only moves a cursor.
pub struct SequenceGenerator {
    sequence: Box<[usize]>,
    cursor: usize,
}

impl SequenceGenerator {
    pub fn new<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut sequence: Box<[usize]> = (0..n).collect();
        sequence.shuffle(rng);
        debug!(?sequence, "shuffled sequence");

        SequenceGenerator {
            sequence,
            cursor: 0,
        }
    }

    pub fn advance(&mut self) -> Result<usize, Exhausted> {
        let value = *self.sequence.get(self.cursor).ok_or(Exhausted)?;
        self.cursor += 1;
        Ok(value)
    }
}

impl Iterator for SequenceGenerator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for SequenceGenerator {
    fn len(&self) -> usize {
        self.sequence.len() - self.cursor
    }
}

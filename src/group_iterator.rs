use rand::Rng;
use tracing::debug;

use crate::{
    chunk::{join, sorted, take_exact},
    error::{Exhausted, GroupError},
    parameter::Parameter,
    sequence_generator::SequenceGenerator,
};

/// Splits a fresh random permutation of `0..n` into `g` balanced groups.
///
/// Each item is one group, sorted ascending and joined with the parameter's
/// delimiter. Exactly `g` items are produced.
pub struct GroupIterator {
    parameter: Parameter,
    sequence: SequenceGenerator,
    emitted: usize,
}

impl GroupIterator {
    pub fn new<R: Rng + ?Sized>(parameter: Parameter, rng: &mut R) -> Self {
        let sequence = SequenceGenerator::new(parameter.max_number(), rng);

        GroupIterator {
            parameter,
            sequence,
            emitted: 0,
        }
    }

    /// Emits the next group, or `GroupError::Exhausted` once all `g` are out.
    pub fn advance(&mut self) -> Result<String, GroupError> {
        if self.emitted >= self.parameter.group_count() {
            return Err(Exhausted.into());
        }

        let index = self.emitted;
        self.emitted += 1;

        let group_size = self.parameter.group_size(index);
        let group = sorted(take_exact(&mut self.sequence, group_size))?;
        let group = join(group, self.parameter.delimiter())?;
        debug!(index, group_size, %group, "emitting group");

        Ok(group)
    }

    pub fn remaining(&self) -> usize {
        self.parameter.group_count() - self.emitted
    }
}

impl Iterator for GroupIterator {
    type Item = Result<String, GroupError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GroupIterator {}

use scalargrad_core::{Tape, ValueId};

/// Represents a dataset that can be iterated over and accessed by index.
///
/// A dataset is a collection of items, where each item is typically a
/// (features, targets) pair of plain numbers; graph nodes are only created
/// when a sample is placed on a tape for a forward pass (see
/// [`sample_to_leaves`]).
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> Self::Item;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Records one sample's features as input leaves on the tape.
///
/// Input leaves are per-iteration intermediates: record them after the
/// tape's post-construction mark so they are discarded on rewind.
pub fn sample_to_leaves(tape: &mut Tape, features: &[f64]) -> Vec<ValueId> {
    features.iter().map(|&v| tape.leaf(v)).collect()
}

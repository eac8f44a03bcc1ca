use crate::Dataset;

/// A simple dataset implementation backed by paired vectors.
///
/// Assumes that the i-th element of `inputs` corresponds to the i-th element
/// of `targets`.
#[derive(Debug, Clone)]
pub struct VecDataset<InputType, TargetType>
where
    InputType: Clone,
    TargetType: Clone,
{
    inputs: Vec<InputType>,
    targets: Vec<TargetType>,
}

impl<InputType, TargetType> VecDataset<InputType, TargetType>
where
    InputType: Clone,
    TargetType: Clone,
{
    /// Creates a new VecDataset from input and target vectors.
    ///
    /// # Panics
    /// Panics if the lengths of `inputs` and `targets` vectors are different.
    pub fn new(inputs: Vec<InputType>, targets: Vec<TargetType>) -> Self {
        assert_eq!(
            inputs.len(),
            targets.len(),
            "Input and target vectors must have the same length. Got {} and {}.",
            inputs.len(),
            targets.len()
        );
        VecDataset { inputs, targets }
    }
}

impl<InputType, TargetType> Dataset for VecDataset<InputType, TargetType>
where
    InputType: Clone,
    TargetType: Clone,
{
    /// The item type is a tuple containing cloned input and target.
    type Item = (InputType, TargetType);

    fn get(&self, index: usize) -> Self::Item {
        assert!(
            index < self.len(),
            "Index out of bounds: {} >= {}",
            index,
            self.len()
        );
        (self.inputs[index].clone(), self.targets[index].clone())
    }

    /// Returns the number of samples (length of the input/target vectors).
    fn len(&self) -> usize {
        self.inputs.len() // inputs and targets have the same length due to assert in new()
    }
}

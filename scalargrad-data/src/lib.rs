pub mod dataset;
pub mod synthetic;
pub mod vec_dataset;

pub use dataset::{sample_to_leaves, Dataset};
pub use vec_dataset::VecDataset;

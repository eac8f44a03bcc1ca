pub mod layer;
pub mod mlp;
pub mod neuron;

pub use layer::Layer;
pub use mlp::MLP;
pub use neuron::Neuron;

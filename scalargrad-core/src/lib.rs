// Main crate modules
pub mod autograd;
pub mod node;
pub mod ops;
pub mod tape;

pub mod nn;

// Re-export the central types so they are reachable as `scalargrad_core::Tape`
pub use node::{Node, Op};
pub use tape::{IntoOperand, Tape, TapeMark, ValueId};

pub mod error;
pub use error::ScalarGradError;

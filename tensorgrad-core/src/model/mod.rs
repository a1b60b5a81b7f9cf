//! Model containers and the training loop.

pub mod sequential;
pub mod training;

pub use sequential::Sequential;
pub use training::{evaluate, train, History, TrainParameters};

// src/nn/mod.rs
//! Neural-network building blocks that sit directly on the engine: layers,
//! activations, losses and metrics. None of them add propagation logic; they
//! only compose operations from [`crate::ops`].

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod metrics;
pub mod module;

pub use activation::Activation;
pub use layers::{Dense, Flatten};
pub use losses::Loss;
pub use metrics::Metric;
pub use module::Module;

//! Reverse-mode differentiation: dependency edges, the backward propagator and
//! a finite-difference gradient checker.

pub mod backward;
pub mod dependency;
pub mod grad_check;

pub use backward::backward;
pub use dependency::{Dependency, GradFn};

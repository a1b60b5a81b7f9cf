pub mod dense;
pub mod flatten;

pub use dense::Dense;
pub use flatten::Flatten;

//! Broadcasting element-wise arithmetic.
//!
//! Operands of different shapes are broadcast against each other (trailing
//! dimensions aligned). The recorded gradient functions return gradients in the
//! broadcast result's shape; the backward propagator reduces them onto each operand.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use sub::sub_op;

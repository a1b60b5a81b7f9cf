use crate::buffer::Buffer;
use crate::tensor::Tensor;

/// Argument of an operation: either a tensor or a plain numeric constant.
///
/// Constants never track gradients and never get a dependency edge, so mixing
/// them into an expression costs nothing in the graph.
#[derive(Debug, Clone)]
pub enum Operand {
    Tensor(Tensor),
    Constant(Buffer),
}

impl Operand {
    /// Snapshot of the operand's values.
    pub fn data(&self) -> Buffer {
        match self {
            Operand::Tensor(t) => t.data(),
            Operand::Constant(b) => b.clone(),
        }
    }

    /// The tensor handle, if it needs a dependency edge.
    pub fn tracked(&self) -> Option<Tensor> {
        match self {
            Operand::Tensor(t) if t.requires_grad() => Some(t.clone()),
            _ => None,
        }
    }
}

impl From<Tensor> for Operand {
    fn from(t: Tensor) -> Self {
        Operand::Tensor(t)
    }
}

impl From<&Tensor> for Operand {
    fn from(t: &Tensor) -> Self {
        Operand::Tensor(t.clone())
    }
}

impl From<Buffer> for Operand {
    fn from(b: Buffer) -> Self {
        Operand::Constant(b)
    }
}

impl From<&Buffer> for Operand {
    fn from(b: &Buffer) -> Self {
        Operand::Constant(b.clone())
    }
}

impl From<Vec<f64>> for Operand {
    fn from(v: Vec<f64>) -> Self {
        Operand::Constant(Buffer::from_vec(v))
    }
}

macro_rules! impl_operand_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Constant(Buffer::scalar(v as f64))
                }
            }
        )*
    };
}

impl_operand_from_primitive!(f64, f32, i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_untracked() {
        assert!(Operand::from(2.0).tracked().is_none());
        assert!(Operand::from(3_i32).tracked().is_none());
        assert_eq!(Operand::from(3_i32).data(), Buffer::scalar(3.0));
        assert_eq!(Operand::from(vec![1.0, 2.0]).data().shape(), &[2]);
    }

    #[test]
    fn test_tensor_operand_tracking_follows_flag() {
        let plain = Tensor::new(vec![1.0], vec![1]).unwrap();
        let tracked = Tensor::new_with_grad(vec![1.0], vec![1]).unwrap();
        assert!(Operand::from(&plain).tracked().is_none());
        let handle = Operand::from(&tracked).tracked().unwrap();
        assert!(handle.ptr_eq(&tracked));
    }
}

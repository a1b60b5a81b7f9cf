// src/tensor/debug.rs
use crate::tensor::Tensor;
use std::fmt;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => write!(
                f,
                "Tensor(shape={:?}, data={:?}, requires_grad={}, has_grad={}, num_dependencies={})",
                guard.buffer.shape(),
                guard.buffer.as_slice(),
                guard.requires_grad,
                guard.grad.is_some(),
                guard.dependencies.len()
            ),
            Err(_) => write!(f, "Tensor(Error: RwLock poisoned)"),
        }
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Tensor({}", guard.buffer)?;
        if guard.requires_grad {
            write!(f, ", requires_grad=true")?;
        }
        write!(f, ")")
    }
}

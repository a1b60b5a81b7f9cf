use crate::buffer::Buffer;
use crate::error::TensorGradError;
use log::trace;
use std::cmp::max;

/// Determines the output shape resulting from broadcasting two input shapes.
///
/// Follows NumPy/PyTorch broadcasting rules:
/// 1. If the shapes have different numbers of dimensions, prepend 1s to the shorter shape.
/// 2. Compare dimensions element-wise from right to left.
/// 3. Dimensions are compatible if they are equal, or one of them is 1.
/// 4. The resulting dimension size is the maximum of the two compared dimensions.
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, TensorGradError> {
    let rank_a = shape_a.len();
    let rank_b = shape_b.len();
    let max_rank = max(rank_a, rank_b);
    let mut result_shape = vec![0; max_rank];

    for i in 0..max_rank {
        let dim_a = if i < rank_a { shape_a[rank_a - 1 - i] } else { 1 };
        let dim_b = if i < rank_b { shape_b[rank_b - 1 - i] } else { 1 };

        result_shape[max_rank - 1 - i] = if dim_a == dim_b || dim_b == 1 {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else {
            return Err(TensorGradError::BroadcastError {
                shape1: shape_a.to_vec(),
                shape2: shape_b.to_vec(),
            });
        };
    }
    Ok(result_shape)
}

/// Reduces a gradient produced in a broadcast result's shape back to the shape
/// of the operand it was broadcast from.
///
/// 1. Leading dimensions present in the gradient but absent from `target_shape`
///    are summed out.
/// 2. Dimensions of size 1 in `target_shape` but larger in the gradient are summed
///    while being kept, so the dimension count stays equal.
///
/// The result always has exactly `target_shape`. Values are summed, never rescaled.
///
/// # Errors
/// Returns `TensorGradError::ShapeMismatch` if `target_shape` could not have been
/// broadcast to the gradient's shape.
pub fn reduce_to_shape(grad: &Buffer, target_shape: &[usize]) -> Result<Buffer, TensorGradError> {
    let current_shape = grad.shape();
    if current_shape == target_shape {
        return Ok(grad.clone());
    }

    let mismatch = || TensorGradError::ShapeMismatch {
        expected: target_shape.to_vec(),
        actual: current_shape.to_vec(),
        operation: "reduce_to_shape".to_string(),
    };

    let current_rank = current_shape.len();
    let target_rank = target_shape.len();
    if current_rank < target_rank {
        return Err(mismatch());
    }

    let rank_diff = current_rank - target_rank;
    let mut axes_to_reduce: Vec<usize> = (0..rank_diff).collect();
    for (i, &target_dim) in target_shape.iter().enumerate() {
        let current_dim = current_shape[rank_diff + i];
        if current_dim == target_dim {
            continue;
        }
        if target_dim == 1 {
            axes_to_reduce.push(rank_diff + i);
        } else {
            return Err(mismatch());
        }
    }

    trace!(
        "reduce_to_shape: {:?} -> {:?} summing axes {:?}",
        current_shape,
        target_shape,
        axes_to_reduce
    );

    // Summing with keep_dims leaves the leading axes as size 1; the reshape drops them.
    let reduced = grad.sum_axes(&axes_to_reduce, true)?;
    reduced.reshape(target_shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_shapes() {
        assert_eq!(broadcast_shapes(&[2, 2], &[2]).unwrap(), vec![2, 2]);
        assert_eq!(broadcast_shapes(&[3, 1], &[1, 4]).unwrap(), vec![3, 4]);
        assert_eq!(broadcast_shapes(&[], &[2, 3]).unwrap(), vec![2, 3]);
        assert_eq!(broadcast_shapes(&[5, 1, 3], &[2, 1]).unwrap(), vec![5, 2, 3]);
        assert!(broadcast_shapes(&[2, 3], &[2]).is_err());
    }

    #[test]
    fn test_reduce_leading_dims() {
        // Gradient of a (2, 2) result reduced onto a (2,) operand.
        let grad = Buffer::ones(&[2, 2]);
        let reduced = reduce_to_shape(&grad, &[2]).unwrap();
        assert_eq!(reduced.shape(), &[2]);
        assert_eq!(reduced.as_slice(), &[2.0, 2.0]);
    }

    #[test]
    fn test_reduce_keeps_unit_dims() {
        let grad = Buffer::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        let reduced = reduce_to_shape(&grad, &[2, 1]).unwrap();
        assert_eq!(reduced.shape(), &[2, 1]);
        assert_eq!(reduced.as_slice(), &[6.0, 15.0]);

        let reduced = reduce_to_shape(&grad, &[1, 3]).unwrap();
        assert_eq!(reduced.shape(), &[1, 3]);
        assert_eq!(reduced.as_slice(), &[5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_reduce_mixed_leading_and_unit() {
        let grad = Buffer::ones(&[4, 2, 3]);
        let reduced = reduce_to_shape(&grad, &[2, 1]).unwrap();
        assert_eq!(reduced.shape(), &[2, 1]);
        assert_eq!(reduced.as_slice(), &[12.0, 12.0]);
    }

    #[test]
    fn test_reduce_to_scalar() {
        let grad = Buffer::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
        let reduced = reduce_to_shape(&grad, &[]).unwrap();
        assert!(reduced.shape().is_empty());
        assert_eq!(reduced.item().unwrap(), 6.0);
    }

    #[test]
    fn test_reduce_identity_when_shapes_match() {
        let grad = Buffer::new(vec![1.0, 2.0], vec![2]).unwrap();
        assert_eq!(reduce_to_shape(&grad, &[2]).unwrap(), grad);
    }

    #[test]
    fn test_reduce_rejects_incompatible_target() {
        let grad = Buffer::ones(&[2, 3]);
        assert!(matches!(
            reduce_to_shape(&grad, &[2]),
            Err(TensorGradError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            reduce_to_shape(&Buffer::ones(&[3]), &[2, 3]),
            Err(TensorGradError::ShapeMismatch { .. })
        ));
    }
}

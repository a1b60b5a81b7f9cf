/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Strides of `shape` seen from a (larger) broadcast `target_shape`.
///
/// Dimensions that are absent from `shape` (leading) or of size 1 in `shape`
/// get a stride of 0, so that every target coordinate maps onto the single
/// source element along that dimension.
pub fn broadcast_strides(shape: &[usize], target_shape: &[usize]) -> Vec<usize> {
    let strides = calculate_strides(shape);
    let rank_diff = target_shape.len().saturating_sub(shape.len());
    (0..target_shape.len())
        .map(|i| {
            if i < rank_diff {
                0
            } else {
                let d = i - rank_diff;
                if shape[d] == 1 {
                    0
                } else {
                    strides[d]
                }
            }
        })
        .collect()
}

/// Visits every coordinate of `shape` in row-major order and returns, for each,
/// the linear offsets produced by each set of `strides`.
///
/// This is the odometer loop shared by broadcasting kernels and reductions.
pub(crate) fn strided_offsets<const N: usize>(
    shape: &[usize],
    strides: [&[usize]; N],
) -> Vec<[usize; N]> {
    let numel: usize = shape.iter().product();
    let mut out = Vec::with_capacity(numel);
    if numel == 0 {
        return out;
    }
    let rank = shape.len();
    let mut coord = vec![0usize; rank];
    let mut offsets = [0usize; N];
    for _ in 0..numel {
        out.push(offsets);
        // Increment the odometer, updating offsets incrementally.
        let mut dim = rank;
        while dim > 0 {
            dim -= 1;
            coord[dim] += 1;
            for (k, s) in strides.iter().enumerate() {
                offsets[k] += s[dim];
            }
            if coord[dim] < shape[dim] {
                break;
            }
            for (k, s) in strides.iter().enumerate() {
                offsets[k] -= s[dim] * coord[dim];
            }
            coord[dim] = 0;
        }
    }
    out
}

// src/buffer.rs

use crate::error::TensorGradError;
use crate::tensor::broadcast_utils::broadcast_shapes;
use crate::tensor::utils::{broadcast_strides, calculate_strides, strided_offsets};
use num_traits::ToPrimitive;
use std::fmt;

/// Dense, row-major, in-memory n-dimensional array of `f64`.
///
/// `Buffer` is the numeric primitive wrapped by [`Tensor`](crate::Tensor). It knows nothing
/// about gradients: it only offers the elementwise, broadcasting, reduction and
/// matrix-multiply arithmetic that the operation layer builds on.
///
/// A shape of `[]` denotes a 0-dimensional scalar holding exactly one element.
#[derive(Clone, PartialEq)]
pub struct Buffer {
    data: Vec<f64>,
    shape: Vec<usize>,
}

/// Number of elements described by `shape`, or `None` if it overflows `usize`.
pub(crate) fn checked_numel(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

impl Buffer {
    /// Creates a buffer from flattened row-major data and a shape.
    ///
    /// # Errors
    /// Returns `TensorGradError::TensorCreationError` if `data.len()` does not match
    /// the number of elements described by `shape`.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, TensorGradError> {
        if checked_numel(&shape) != Some(data.len()) {
            return Err(TensorGradError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Buffer { data, shape })
    }

    /// A 0-dimensional buffer holding `value`.
    pub fn scalar(value: f64) -> Self {
        Buffer {
            data: vec![value],
            shape: vec![],
        }
    }

    /// A 1-dimensional buffer over `data`.
    pub fn from_vec(data: Vec<f64>) -> Self {
        let shape = vec![data.len()];
        Buffer { data, shape }
    }

    /// Builds a buffer from any primitive numeric values (integers, `f32`, ...).
    pub fn from_values<T: ToPrimitive + Copy>(
        values: &[T],
        shape: Vec<usize>,
    ) -> Result<Self, TensorGradError> {
        let data = values
            .iter()
            .map(|v| {
                v.to_f64().ok_or_else(|| {
                    TensorGradError::InvalidArgument(
                        "value is not representable as f64".to_string(),
                    )
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        Buffer::new(data, shape)
    }

    /// # Panics
    /// Panics with a capacity overflow if `shape` describes more than `usize::MAX` elements.
    pub fn full(shape: &[usize], value: f64) -> Self {
        let numel = checked_numel(shape).unwrap_or(usize::MAX);
        Buffer {
            data: vec![value; numel],
            shape: shape.to_vec(),
        }
    }

    /// Fills a buffer of `shape` by calling `f` once per element, in row-major order.
    ///
    /// # Panics
    /// Same as [`Buffer::full`].
    pub fn from_fn<F: FnMut() -> f64>(shape: &[usize], mut f: F) -> Self {
        let numel = checked_numel(shape).unwrap_or(usize::MAX);
        Buffer {
            data: (0..numel).map(|_| f()).collect(),
            shape: shape.to_vec(),
        }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Buffer::full(shape, 0.0)
    }

    pub fn ones(shape: &[usize]) -> Self {
        Buffer::full(shape, 1.0)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// True when the buffer holds a single element, whatever its rank.
    pub fn is_scalar(&self) -> bool {
        self.data.len() == 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Returns the single value of a one-element buffer.
    pub fn item(&self) -> Result<f64, TensorGradError> {
        if self.data.len() != 1 {
            return Err(TensorGradError::ShapeMismatch {
                expected: vec![],
                actual: self.shape.clone(),
                operation: "item".to_string(),
            });
        }
        Ok(self.data[0])
    }

    /// Element at multi-dimensional `index`, or `None` when out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.shape.len() {
            return None;
        }
        let strides = calculate_strides(&self.shape);
        let mut offset = 0;
        for ((&i, &dim), &stride) in index.iter().zip(&self.shape).zip(&strides) {
            if i >= dim {
                return None;
            }
            offset += i * stride;
        }
        self.data.get(offset).copied()
    }

    /// Applies `f` to every element.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Buffer {
        Buffer {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Elementwise binary map with implicit broadcasting.
    ///
    /// # Errors
    /// Returns `TensorGradError::BroadcastError` if the shapes are not broadcast-compatible.
    pub fn broadcast_with<F: Fn(f64, f64) -> f64>(
        &self,
        other: &Buffer,
        f: F,
    ) -> Result<Buffer, TensorGradError> {
        if self.shape == other.shape {
            let data = self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect();
            return Ok(Buffer {
                data,
                shape: self.shape.clone(),
            });
        }
        let out_shape = broadcast_shapes(&self.shape, &other.shape)?;
        let a_strides = broadcast_strides(&self.shape, &out_shape);
        let b_strides = broadcast_strides(&other.shape, &out_shape);
        let data = strided_offsets(&out_shape, [&a_strides, &b_strides])
            .into_iter()
            .map(|[ia, ib]| f(self.data[ia], other.data[ib]))
            .collect();
        Ok(Buffer {
            data,
            shape: out_shape,
        })
    }

    pub fn add(&self, other: &Buffer) -> Result<Buffer, TensorGradError> {
        self.broadcast_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Buffer) -> Result<Buffer, TensorGradError> {
        self.broadcast_with(other, |a, b| a - b)
    }

    pub fn mul(&self, other: &Buffer) -> Result<Buffer, TensorGradError> {
        self.broadcast_with(other, |a, b| a * b)
    }

    pub fn div(&self, other: &Buffer) -> Result<Buffer, TensorGradError> {
        self.broadcast_with(other, |a, b| a / b)
    }

    pub fn scale(&self, factor: f64) -> Buffer {
        self.map(|x| x * factor)
    }

    /// Matrix product of two 2-D buffers: `(m, k) x (k, n) -> (m, n)`.
    ///
    /// # Errors
    /// Returns `TensorGradError::ShapeMismatch` if either operand is not 2-D or
    /// the inner dimensions do not agree.
    pub fn matmul(&self, other: &Buffer) -> Result<Buffer, TensorGradError> {
        if self.ndim() != 2 || other.ndim() != 2 || self.shape[1] != other.shape[0] {
            return Err(TensorGradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: "matmul (operands must be 2-D with matching inner dimensions)"
                    .to_string(),
            });
        }
        let (m, k, n) = (self.shape[0], self.shape[1], other.shape[1]);
        let mut data = vec![0.0; m * n];
        for i in 0..m {
            for p in 0..k {
                let a = self.data[i * k + p];
                let row = &other.data[p * n..(p + 1) * n];
                for (out, &b) in data[i * n..(i + 1) * n].iter_mut().zip(row) {
                    *out += a * b;
                }
            }
        }
        Ok(Buffer {
            data,
            shape: vec![m, n],
        })
    }

    /// Transpose of a 2-D buffer.
    pub fn transpose(&self) -> Result<Buffer, TensorGradError> {
        if self.ndim() != 2 {
            return Err(TensorGradError::UnsupportedOperation(format!(
                "transpose requires a 2-D buffer, got shape {:?}",
                self.shape
            )));
        }
        let (rows, cols) = (self.shape[0], self.shape[1]);
        let mut data = Vec::with_capacity(rows * cols);
        for c in 0..cols {
            for r in 0..rows {
                data.push(self.data[r * cols + c]);
            }
        }
        Ok(Buffer {
            data,
            shape: vec![cols, rows],
        })
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Sums along `axes`. With `keep_dims` the reduced axes stay with size 1,
    /// otherwise they are removed from the shape.
    pub fn sum_axes(&self, axes: &[usize], keep_dims: bool) -> Result<Buffer, TensorGradError> {
        if let Some(&bad) = axes.iter().find(|&&a| a >= self.ndim()) {
            return Err(TensorGradError::IndexOutOfBounds {
                index: bad,
                len: self.ndim(),
            });
        }
        let kept_shape: Vec<usize> = self
            .shape
            .iter()
            .enumerate()
            .map(|(i, &d)| if axes.contains(&i) { 1 } else { d })
            .collect();
        let in_strides = calculate_strides(&self.shape);
        let out_strides = broadcast_strides(&kept_shape, &self.shape);
        let mut data = vec![0.0; kept_shape.iter().product()];
        for [i_in, i_out] in strided_offsets(&self.shape, [&in_strides, &out_strides]) {
            data[i_out] += self.data[i_in];
        }
        let shape = if keep_dims {
            kept_shape
        } else {
            self.shape
                .iter()
                .enumerate()
                .filter(|(i, _)| !axes.contains(i))
                .map(|(_, &d)| d)
                .collect()
        };
        Ok(Buffer { data, shape })
    }

    /// Same data under a new shape with the same number of elements.
    pub fn reshape(&self, shape: &[usize]) -> Result<Buffer, TensorGradError> {
        if checked_numel(shape) != Some(self.numel()) {
            return Err(TensorGradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: shape.to_vec(),
                operation: "reshape".to_string(),
            });
        }
        Ok(Buffer {
            data: self.data.clone(),
            shape: shape.to_vec(),
        })
    }

    /// Splits the buffer into rows along the last axis: `(outer, last)`.
    fn last_axis_rows(&self) -> (usize, usize) {
        let last = self.shape.last().copied().unwrap_or(1);
        let outer = if last == 0 { 0 } else { self.numel() / last };
        (outer, last)
    }

    /// Maximum along the last axis, keeping it with size 1.
    pub fn max_last_axis(&self) -> Buffer {
        let (outer, last) = self.last_axis_rows();
        let data = (0..outer)
            .map(|r| {
                self.data[r * last..(r + 1) * last]
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect();
        let mut shape = self.shape.clone();
        if let Some(l) = shape.last_mut() {
            *l = 1;
        }
        Buffer { data, shape }
    }

    /// Index of the maximum along the last axis, one entry per row.
    pub fn argmax_last(&self) -> Vec<usize> {
        let (outer, last) = self.last_axis_rows();
        (0..outer)
            .map(|r| {
                let row = &self.data[r * last..(r + 1) * last];
                let mut best = 0;
                for (i, &v) in row.iter().enumerate() {
                    if v > row[best] {
                        best = i;
                    }
                }
                best
            })
            .collect()
    }

    /// Gathers the given indices along the first axis.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Buffer, TensorGradError> {
        let rows = *self.shape.first().ok_or_else(|| {
            TensorGradError::UnsupportedOperation(
                "select_rows requires at least one dimension".to_string(),
            )
        })?;
        let row_len = if rows == 0 { 0 } else { self.numel() / rows };
        let mut data = Vec::with_capacity(indices.len() * row_len);
        for &i in indices {
            if i >= rows {
                return Err(TensorGradError::IndexOutOfBounds { index: i, len: rows });
            }
            data.extend_from_slice(&self.data[i * row_len..(i + 1) * row_len]);
        }
        let mut shape = self.shape.clone();
        shape[0] = indices.len();
        Ok(Buffer { data, shape })
    }

    /// True when any element satisfies `pred`.
    pub fn any<P: Fn(f64) -> bool>(&self, pred: P) -> bool {
        self.data.iter().any(|&x| pred(x))
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer(shape={:?}, data={:?})", self.shape, self.data)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shape.is_empty() {
            return write!(f, "{}", self.data[0]);
        }
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "] (shape {:?})", self.shape)
    }
}

impl From<f64> for Buffer {
    fn from(value: f64) -> Self {
        Buffer::scalar(value)
    }
}

impl From<Vec<f64>> for Buffer {
    fn from(data: Vec<f64>) -> Self {
        Buffer::from_vec(data)
    }
}

impl<'a> IntoIterator for &'a Buffer {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
#[path = "buffer_test.rs"]
mod tests;

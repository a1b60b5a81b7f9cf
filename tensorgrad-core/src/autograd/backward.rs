use crate::buffer::Buffer;
use crate::error::TensorGradError;
use crate::tensor::broadcast_utils::reduce_to_shape;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use log::{debug, trace};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

impl Tensor {
    /// Performs the backward pass starting from this tensor.
    ///
    /// Gradients are accumulated (added, never overwritten) into every tracked
    /// tensor reachable through the dependency graph. A tensor reachable along
    /// several paths receives the sum of every path's contribution. Callers must
    /// zero gradients between iterations.
    ///
    /// Nodes are visited once each, in reverse topological order: a node's edges
    /// run only after all of its consumers have contributed to its gradient.
    ///
    /// # Arguments
    /// * `gradient`: gradient of the final objective with respect to this tensor.
    ///   May be omitted for single-element tensors, in which case it defaults to ones.
    ///
    /// # Errors
    /// * `GradientShapeRequired` if `gradient` is omitted for a tensor with more than one element.
    /// * `ShapeMismatch` if `gradient` does not have this tensor's shape, or if a
    ///   local gradient cannot be reduced onto its operand's shape.
    /// * Any error raised by a local gradient function.
    pub fn backward(&self, gradient: Option<&Buffer>) -> Result<(), TensorGradError> {
        let shape = self.shape();
        let seed = match gradient {
            Some(g) => {
                if g.shape() != shape.as_slice() {
                    return Err(TensorGradError::ShapeMismatch {
                        expected: shape,
                        actual: g.shape().to_vec(),
                        operation: "backward".to_string(),
                    });
                }
                g.clone()
            }
            None => {
                if shape.iter().product::<usize>() != 1 {
                    return Err(TensorGradError::GradientShapeRequired { shape });
                }
                Buffer::ones(&shape)
            }
        };

        if !self.requires_grad() {
            return Ok(());
        }
        debug!("backward: starting from tensor of shape {:?}", shape);

        let order = topological_order(self);
        trace!("backward: {} tracked nodes reachable", order.len());

        // Gradients flowing into each node, complete once every consumer has run.
        let mut pending: HashMap<NodeId, Buffer> = HashMap::new();
        pending.insert(node_id(self), seed);

        for node in order.iter().rev() {
            let incoming = match pending.remove(&node_id(node)) {
                Some(grad) => grad,
                None => continue,
            };
            let dependencies = {
                let mut guard = node.write_data();
                let accumulated = match &guard.grad {
                    Some(existing) => existing.add(&incoming)?,
                    None => incoming.clone(),
                };
                guard.grad = Some(accumulated);
                guard.dependencies.clone()
            };

            for dependency in dependencies {
                if !dependency.source.requires_grad() {
                    continue;
                }
                let source_shape = dependency.source.shape();
                let mut local = (dependency.grad_fn)(&incoming)?;
                if local.shape() != source_shape.as_slice() {
                    trace!(
                        "backward: reducing local gradient {:?} -> {:?}",
                        local.shape(),
                        source_shape
                    );
                    local = reduce_to_shape(&local, &source_shape)?;
                }
                match pending.entry(node_id(&dependency.source)) {
                    Entry::Occupied(mut entry) => {
                        let summed = entry.get().add(&local)?;
                        entry.insert(summed);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(local);
                    }
                }
            }
        }
        Ok(())
    }
}

type NodeId = *const RwLock<TensorData>;

fn node_id(tensor: &Tensor) -> NodeId {
    Arc::as_ptr(&tensor.data)
}

/// Tracked nodes reachable from `root`, each listed once and after every node it
/// depends on. Edges into untracked tensors are not followed.
fn topological_order(root: &Tensor) -> Vec<Tensor> {
    let mut order = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, its sources already pushed)
    let mut stack = vec![(root.clone(), false)];
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if !visited.insert(node_id(&node)) {
            continue;
        }
        let dependencies = node.dependencies();
        stack.push((node, true));
        for dependency in dependencies {
            let source = dependency.source;
            if source.requires_grad() && !visited.contains(&node_id(&source)) {
                stack.push((source, false));
            }
        }
    }
    order
}

/// Free-function form of [`Tensor::backward`].
pub fn backward(tensor: &Tensor, gradient: Option<&Buffer>) -> Result<(), TensorGradError> {
    tensor.backward(gradient)
}

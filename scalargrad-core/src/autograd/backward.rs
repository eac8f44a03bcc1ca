use crate::node::{Node, Op};
use crate::tape::{Tape, ValueId};

/// Builds a topological order of every node reachable from `root` through
/// operand edges: depth-first, post-order, so each node is appended only
/// after all of its operands.
///
/// The visited set is an index bitset over the tape — node identity is the
/// arena index, never the value, so two coincidentally-equal nodes (a
/// zero-initialized bias next to a literal zero) stay distinct vertices.
/// A node reachable through several paths is emitted exactly once.
///
/// The traversal is iterative; a long op chain must not be bounded by the
/// call stack.
pub(crate) fn reverse_topological(tape: &Tape, root: ValueId) -> Vec<ValueId> {
    let mut visited = vec![false; tape.len()];
    let mut order = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            order.push(id);
            continue;
        }
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        stack.push((id, true));
        for operand in tape.node(id).op().operands() {
            if !visited[operand.index()] {
                stack.push((operand, false));
            }
        }
    }

    order
}

/// The single accumulation point of the chain rule: adds a weighted share of
/// a consumer's gradient into one operand. Gradients are only ever reset or
/// incremented through here, never overwritten mid-pass.
pub(crate) fn accumulate_gradient(nodes: &mut [Node], id: ValueId, amount: f64) {
    nodes[id.index()].grad += amount;
}

impl Tape {
    /// Backpropagates from `root`: after this call, every node reachable
    /// from `root` holds `d(root)/d(node)` in its gradient, with
    /// contributions summed across all consumption paths.
    ///
    /// Walks the reverse-topological order root-first, so each node's
    /// gradient is fully accumulated before its own rule fires — every
    /// consumer precedes its operands in the walk. Nodes not reachable from
    /// `root` are left untouched. On a leaf this just sets the gradient
    /// to 1.
    ///
    /// Gradients are *not* cleared here; re-running without an intervening
    /// reset accumulates (see [`Tape`] docs).
    pub fn backward(&mut self, root: ValueId) {
        let order = reverse_topological(self, root);
        log::trace!(
            "backward from node {}: {} reachable nodes",
            root.index(),
            order.len()
        );

        // d(root)/d(root) = 1
        self.nodes_mut()[root.index()].grad = 1.0;

        for &id in order.iter().rev() {
            let node = *self.node(id);
            let g = node.grad();
            match node.op() {
                Op::Leaf => {}
                Op::Add(a, b) => {
                    let nodes = self.nodes_mut();
                    accumulate_gradient(nodes, a, g);
                    accumulate_gradient(nodes, b, g);
                }
                Op::Mul(a, b) => {
                    let (a_value, b_value) = (self.value(a), self.value(b));
                    let nodes = self.nodes_mut();
                    accumulate_gradient(nodes, a, b_value * g);
                    accumulate_gradient(nodes, b, a_value * g);
                }
                Op::Pow(a, k) => {
                    let a_value = self.value(a);
                    accumulate_gradient(self.nodes_mut(), a, k * a_value.powf(k - 1.0) * g);
                }
                Op::Tanh(a) => {
                    // reads the forward output, not the input
                    let t = node.value();
                    accumulate_gradient(self.nodes_mut(), a, (1.0 - t * t) * g);
                }
                Op::Relu(a) => {
                    if self.value(a) > 0.0 {
                        accumulate_gradient(self.nodes_mut(), a, g);
                    }
                }
            }
        }
    }
}

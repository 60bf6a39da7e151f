use crate::{layers::dense::Layer, math::matrix::Matrix};

/// Parameter update rule.
///
/// The trainer hands each layer's freshly computed gradients to the optimizer
/// once per sample; the optimizer turns them into an update step and applies
/// it in place. Any accumulation buffers (momentum, adaptive moments) are
/// internal state of the optimizer, keyed by `layer_index`, and are wiped by
/// `reset()` so one optimizer value can be reused across experiments.
pub trait Optimizer {
    fn step(&mut self, layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix);

    /// Clears accumulated internal state. A no-op for stateless rules.
    fn reset(&mut self) {}
}

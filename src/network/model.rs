use crate::layers::dense::Layer;

/// Anything the training and evaluation loops can drive: a forward pass plus
/// ordered mutable access to the layers for backpropagation.
///
/// `layers_mut` returns layers input-to-output; the trainer walks them in
/// reverse when propagating deltas.
pub trait Model {
    fn forward(&mut self, input: &[f64]) -> Vec<f64>;

    fn layers_mut(&mut self) -> Vec<&mut Layer>;
}

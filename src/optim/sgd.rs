use crate::{layers::dense::Layer, math::matrix::Matrix, optim::optimizer::Optimizer};

/// Plain stochastic gradient descent: step = lr · gradient.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, _layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        let lr = self.learning_rate;
        layer.apply_update(weights_grad.map(|g| g * lr), biases_grad.map(|g| g * lr));
    }
}

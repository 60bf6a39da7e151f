use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};
use rand::Rng;

/// One affine transform (`z = x·W + b`) followed by a pointwise activation.
///
/// The layer caches its last pre-activation and activation values during the
/// forward pass; the trainer reads them back when propagating deltas.
#[derive(Debug)]
pub struct Layer {
    pub size: usize,
    pub neurons: Matrix,
    pre_neurons: Matrix, // pre-activation values (z = x·W + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Weights and biases start uniform on ±1/sqrt(input_size), the usual
    /// linear-layer default, drawn from the caller's RNG.
    pub fn new<R: Rng>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let limit = 1.0 / (input_size as f64).sqrt();
        let weights = Matrix::uniform(input_size, size, limit, rng);
        let biases = Matrix::uniform(1, size, limit, rng);

        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights,
            biases,
            activator: activation,
        }
    }

    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        let z = Matrix::from_data(vec![input.to_vec()]) * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data[0].clone()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(&self, delta: Matrix, inputs: &Matrix) -> (Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // Element-wise (Hadamard) product: δ = error ⊙ σ'(z)
        let layer_delta = delta.zip_with(&act_derivative, |a, b| a * b);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Subtracts pre-scaled update steps from the parameters. The optimizer
    /// owns the scaling (learning rate, moment corrections).
    pub fn apply_update(&mut self, weights_step: Matrix, biases_step: Matrix) {
        self.weights = self.weights.clone() - weights_step;
        self.biases = self.biases.clone() - biases_step;
    }
}

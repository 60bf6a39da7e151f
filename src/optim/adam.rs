use crate::{layers::dense::Layer, math::matrix::Matrix, optim::optimizer::Optimizer};

/// Per-layer exponential moment buffers, allocated lazily on first step.
#[derive(Debug)]
pub(crate) struct MomentState {
    pub m_weights: Matrix,
    pub v_weights: Matrix,
    pub m_biases: Matrix,
    pub v_biases: Matrix,
    pub t: u32,
}

impl MomentState {
    pub(crate) fn zeros_like(layer: &Layer) -> MomentState {
        MomentState {
            m_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
            v_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
            m_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
            v_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
            t: 0,
        }
    }
}

/// Ensures `state[layer_index]` exists, sized to the given layer.
pub(crate) fn state_slot<'a>(
    state: &'a mut Vec<Option<MomentState>>,
    layer_index: usize,
    layer: &Layer,
) -> &'a mut MomentState {
    if state.len() <= layer_index {
        state.resize_with(layer_index + 1, || None);
    }
    state[layer_index].get_or_insert_with(|| MomentState::zeros_like(layer))
}

/// Adam: per-parameter first/second moment estimates with bias correction.
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    state: Vec<Option<MomentState>>,
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            state: Vec::new(),
        }
    }
}

impl Optimizer for Adam {
    fn step(&mut self, layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        let (lr, b1, b2, eps) = (self.learning_rate, self.beta1, self.beta2, self.epsilon);
        let s = state_slot(&mut self.state, layer_index, layer);

        s.t += 1;
        s.m_weights = s.m_weights.zip_with(&weights_grad, |m, g| b1 * m + (1.0 - b1) * g);
        s.v_weights = s.v_weights.zip_with(&weights_grad, |v, g| b2 * v + (1.0 - b2) * g * g);
        s.m_biases = s.m_biases.zip_with(&biases_grad, |m, g| b1 * m + (1.0 - b1) * g);
        s.v_biases = s.v_biases.zip_with(&biases_grad, |v, g| b2 * v + (1.0 - b2) * g * g);

        // Bias-corrected moments: m̂ = m/(1-β₁ᵗ), v̂ = v/(1-β₂ᵗ)
        let m_corr = 1.0 - b1.powi(s.t as i32);
        let v_corr = 1.0 - b2.powi(s.t as i32);

        let weights_step = s
            .m_weights
            .zip_with(&s.v_weights, |m, v| lr * (m / m_corr) / ((v / v_corr).sqrt() + eps));
        let biases_step = s
            .m_biases
            .zip_with(&s.v_biases, |m, v| lr * (m / m_corr) / ((v / v_corr).sqrt() + eps));

        layer.apply_update(weights_step, biases_step);
    }

    fn reset(&mut self) {
        self.state.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_layer(rng: &mut StdRng) -> Layer {
        let mut layer = Layer::new(1, 1, ActivationFunction::Identity, rng);
        layer.weights = Matrix::from_data(vec![vec![1.0]]);
        layer.biases = Matrix::from_data(vec![vec![0.0]]);
        layer
    }

    #[test]
    fn first_step_magnitude_is_roughly_the_learning_rate() {
        // With zeroed moments the bias correction makes the first step
        // lr · g/|g| (up to epsilon), independent of gradient scale.
        let mut rng = StdRng::seed_from_u64(5);
        let mut layer = unit_layer(&mut rng);
        let mut adam = Adam::new(0.01);

        adam.step(
            0,
            &mut layer,
            Matrix::from_data(vec![vec![250.0]]),
            Matrix::from_data(vec![vec![0.0]]),
        );

        let moved = 1.0 - layer.weights.data[0][0];
        assert!((moved - 0.01).abs() < 1e-6);
    }

    #[test]
    fn step_direction_follows_gradient_sign() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut layer = unit_layer(&mut rng);
        let mut adam = Adam::new(0.01);

        adam.step(
            0,
            &mut layer,
            Matrix::from_data(vec![vec![-3.0]]),
            Matrix::from_data(vec![vec![2.0]]),
        );

        assert!(layer.weights.data[0][0] > 1.0);
        assert!(layer.biases.data[0][0] < 0.0);
    }

    #[test]
    fn reset_forgets_accumulated_moments() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut layer = unit_layer(&mut rng);
        let mut adam = Adam::new(0.01);

        adam.step(
            0,
            &mut layer,
            Matrix::from_data(vec![vec![1.0]]),
            Matrix::from_data(vec![vec![1.0]]),
        );
        adam.reset();

        // After reset the next step behaves like a first step again.
        let before = layer.weights.data[0][0];
        adam.step(
            0,
            &mut layer,
            Matrix::from_data(vec![vec![100.0]]),
            Matrix::from_data(vec![vec![0.0]]),
        );
        let moved = before - layer.weights.data[0][0];
        assert!((moved - 0.01).abs() < 1e-6);
    }
}

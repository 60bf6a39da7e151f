use crate::optim::adam::{state_slot, MomentState};
use crate::{layers::dense::Layer, math::matrix::Matrix, optim::optimizer::Optimizer};

/// Adamax: the infinity-norm variant of Adam. The second moment is replaced
/// by a running max of gradient magnitudes, so no second bias correction is
/// needed.
pub struct Adamax {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    state: Vec<Option<MomentState>>,
}

impl Adamax {
    pub fn new(learning_rate: f64) -> Adamax {
        Adamax {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            state: Vec::new(),
        }
    }
}

impl Optimizer for Adamax {
    fn step(&mut self, layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        let (lr, b1, b2, eps) = (self.learning_rate, self.beta1, self.beta2, self.epsilon);
        let s = state_slot(&mut self.state, layer_index, layer);

        s.t += 1;
        s.m_weights = s.m_weights.zip_with(&weights_grad, |m, g| b1 * m + (1.0 - b1) * g);
        s.m_biases = s.m_biases.zip_with(&biases_grad, |m, g| b1 * m + (1.0 - b1) * g);
        // uₜ = max(β₂·uₜ₋₁, |g|)
        s.v_weights = s.v_weights.zip_with(&weights_grad, |u, g| (b2 * u).max(g.abs()));
        s.v_biases = s.v_biases.zip_with(&biases_grad, |u, g| (b2 * u).max(g.abs()));

        let m_corr = 1.0 - b1.powi(s.t as i32);

        let weights_step = s
            .m_weights
            .zip_with(&s.v_weights, |m, u| (lr / m_corr) * m / (u + eps));
        let biases_step = s
            .m_biases
            .zip_with(&s.v_biases, |m, u| (lr / m_corr) * m / (u + eps));

        layer.apply_update(weights_step, biases_step);
    }

    fn reset(&mut self) {
        self.state.clear();
    }
}

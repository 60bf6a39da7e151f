/// Guards the BCE log terms against log(0) at saturated predictions.
const EPS: f64 = 1e-12;

/// Selects which loss the training loop uses.
///
/// - `Mse`                — mean-squared error; pair with Identity or Sigmoid output.
/// - `BinaryCrossEntropy` — binary cross-entropy; pair with Sigmoid output,
///   whose range matches the (0, 1) domain the log terms expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossFunction {
    Mse,
    BinaryCrossEntropy,
}

impl LossFunction {
    /// Scalar loss for one sample.
    ///
    /// MSE: mean((predicted - expected)²).
    /// BCE: -mean(y·log(p+ε) + (1-y)·log(1-p+ε)).
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        let total: f64 = predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, y)| match self {
                LossFunction::Mse => (p - y).powi(2),
                LossFunction::BinaryCrossEntropy => {
                    -(y * (p + EPS).ln() + (1.0 - y) * (1.0 - p + EPS).ln())
                }
            })
            .sum();
        total / n
    }

    /// Per-output gradient ∂L/∂a for one sample.
    ///
    /// MSE: predicted - expected.
    /// BCE: (p - y) / ((p + ε) · (1 - p + ε)).
    pub fn derivative(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, y)| match self {
                LossFunction::Mse => p - y,
                LossFunction::BinaryCrossEntropy => (p - y) / ((p + EPS) * (1.0 - p + EPS)),
            })
            .collect()
    }
}

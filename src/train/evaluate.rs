use crate::data::xor::Example;
use crate::network::model::Model;

/// Outcome of running a model over a held-out dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
}

impl Evaluation {
    /// Accuracy as a percentage: `100 · correct / total`.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.correct as f64 / self.total as f64
    }
}

/// Thresholds the model's single output at 0.5 to get a predicted boolean.
pub fn predict<M: Model>(model: &mut M, example: &Example) -> bool {
    model.forward(&example.input_vector())[0] >= 0.5
}

/// Runs the model over every example, thresholding at 0.5 and counting
/// matches against the true label. The dataset order is left untouched.
pub fn test_model<M: Model>(model: &mut M, dataset: &[Example]) -> Evaluation {
    let correct = dataset
        .iter()
        .filter(|&example| predict(model, example) == example.label)
        .count();

    Evaluation {
        correct,
        total: dataset.len(),
    }
}

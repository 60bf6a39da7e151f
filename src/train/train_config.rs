use crate::loss::loss_function::LossFunction;

/// Hyperparameters for one training run.
///
/// - `epochs` — number of full passes over the training data
/// - `loss`   — loss function paired with the model's output layer
#[derive(Debug, Clone, Copy)]
pub struct TrainConfig {
    pub epochs: usize,
    pub loss: LossFunction,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            loss: LossFunction::Mse,
        }
    }
}

impl Default for TrainConfig {
    /// The lab's configuration block: 40 epochs of MSE.
    fn default() -> Self {
        TrainConfig::new(40)
    }
}

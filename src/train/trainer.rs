use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::xor::Example;
use crate::loss::loss_function::LossFunction;
use crate::math::matrix::Matrix;
use crate::network::model::Model;
use crate::optim::optimizer::Optimizer;
use crate::optim::sgd::Sgd;
use crate::train::loss_history::LossHistory;
use crate::train::train_config::TrainConfig;

/// Trains `model` on `dataset` with a caller-chosen optimizer and loss.
///
/// Per epoch: shuffle the dataset in place, then for each example run a
/// forward pass, compute the loss, backpropagate deltas layer by layer, and
/// apply one optimizer step per layer. The mean loss of each epoch is
/// recorded in the returned [`LossHistory`].
///
/// Divergence is not handled: with an oversized learning rate the recorded
/// losses simply stop being finite.
///
/// # Panics
/// Panics if `dataset` is empty.
pub fn train_model_with<M, O, R>(
    model: &mut M,
    dataset: &mut [Example],
    optimizer: &mut O,
    config: &TrainConfig,
    rng: &mut R,
) -> LossHistory
where
    M: Model,
    O: Optimizer,
    R: Rng,
{
    assert!(!dataset.is_empty(), "training dataset must not be empty");

    let no_samples = dataset.len() as f64;
    let mut history = LossHistory::new();

    for _ in 0..config.epochs {
        let mut total_loss = 0.0;
        dataset.shuffle(rng);

        for example in dataset.iter() {
            let input = example.input_vector();
            let target = example.target_vector();

            // Forward pass; each layer caches its activations for backprop.
            let output = model.forward(&input);
            total_loss += config.loss.loss(&output, &target);

            // Initial delta: ∂L/∂a at the output layer.
            let error = config.loss.derivative(&output, &target);
            let mut delta = Matrix::from_data(vec![error]);

            // Backward pass, output layer first.
            let mut layers = model.layers_mut();
            for i in (0..layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::from_data(vec![input.clone()])
                } else {
                    layers[i - 1].neurons.clone()
                };

                // Ordering matters: the next delta must be computed from the
                // weights before the optimizer mutates them.
                let (w_grad, b_grad) =
                    layers[i].compute_gradients(delta.clone(), &input_for_layer);

                if i > 0 {
                    // Propagate δᵢ through the weights to get ∂L/∂a for layer i-1.
                    delta = b_grad.clone() * layers[i].weights.transpose();
                }

                optimizer.step(i, &mut *layers[i], w_grad, b_grad);
            }
        }

        history.push(total_loss / no_samples);
    }

    history
}

/// The fixed-recipe trainer: online SGD with MSE at the given learning rate.
pub fn train_model<M, R>(
    model: &mut M,
    dataset: &mut [Example],
    learning_rate: f64,
    epochs: usize,
    rng: &mut R,
) -> LossHistory
where
    M: Model,
    R: Rng,
{
    let mut optimizer = Sgd::new(learning_rate);
    let config = TrainConfig {
        epochs,
        loss: LossFunction::Mse,
    };
    train_model_with(model, dataset, &mut optimizer, &config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::xor::canonical_pairs;
    use crate::network::network::Network;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn history_has_one_entry_per_epoch() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut model = Network::sigmoid_xor_model(4, &mut rng);
        let mut dataset = canonical_pairs().to_vec();

        let history = train_model(&mut model, &mut dataset, 0.1, 25, &mut rng);
        assert_eq!(history.len(), 25);
    }

    #[test]
    fn dataset_keeps_the_same_examples_after_shuffling() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut model = Network::sigmoid_xor_model(4, &mut rng);
        let mut dataset = canonical_pairs().to_vec();

        train_model(&mut model, &mut dataset, 0.1, 5, &mut rng);

        assert_eq!(dataset.len(), 4);
        for pattern in canonical_pairs() {
            assert!(dataset.contains(&pattern));
        }
    }

    #[test]
    fn training_changes_the_parameters() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut model = Network::sigmoid_xor_model(4, &mut rng);
        let before = model.layers[0].weights.clone();

        let mut dataset = canonical_pairs().to_vec();
        train_model(&mut model, &mut dataset, 0.1, 1, &mut rng);

        assert_ne!(before.data, model.layers[0].weights.data);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_dataset_panics() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut model = Network::sigmoid_xor_model(4, &mut rng);
        let mut dataset: Vec<Example> = Vec::new();
        train_model(&mut model, &mut dataset, 0.1, 1, &mut rng);
    }
}

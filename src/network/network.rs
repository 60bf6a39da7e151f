use crate::{activation::activation::ActivationFunction, layers::dense::Layer, network::model::Model};
use rand::Rng;

/// A feed-forward network assembled from (size, input_size, activation)
/// tuples, input layer first. The sequential analog of wiring layers by hand.
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    pub fn new<R: Rng>(layer_specs: Vec<(usize, usize, ActivationFunction)>, rng: &mut R) -> Network {
        let layers = layer_specs
            .into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation, rng))
            .collect();
        Network { layers }
    }

    /// Affine(2→hidden) · Affine(hidden→1), no nonlinearity anywhere.
    /// The composition collapses to a single linear map, so this model
    /// cannot represent XOR no matter how long it trains.
    pub fn linear_xor_model<R: Rng>(dim_hidden: usize, rng: &mut R) -> Network {
        Network::new(
            vec![
                (dim_hidden, 2, ActivationFunction::Identity),
                (1, dim_hidden, ActivationFunction::Identity),
            ],
            rng,
        )
    }

    /// Affine(2→hidden) · Sigmoid · Affine(hidden→1). The hidden sigmoid
    /// gives the network enough representational power for XOR.
    pub fn sigmoid_xor_model<R: Rng>(dim_hidden: usize, rng: &mut R) -> Network {
        Network::new(
            vec![
                (dim_hidden, 2, ActivationFunction::Sigmoid),
                (1, dim_hidden, ActivationFunction::Identity),
            ],
            rng,
        )
    }
}

impl Model for Network {
    /// Forward pass; stores activations in each layer for backprop.
    fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        current
    }

    fn layers_mut(&mut self) -> Vec<&mut Layer> {
        self.layers.iter_mut().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn forward_threads_dimensions_through_the_stack() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut net = Network::sigmoid_xor_model(8, &mut rng);
        let out = net.forward(&[1.0, 0.0]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn linear_model_is_a_single_affine_map() {
        // f(x) - f(0) must be additive in the input for a purely linear stack.
        let mut rng = StdRng::seed_from_u64(11);
        let mut net = Network::linear_xor_model(4, &mut rng);

        let f00 = net.forward(&[0.0, 0.0])[0];
        let f10 = net.forward(&[1.0, 0.0])[0];
        let f01 = net.forward(&[0.0, 1.0])[0];
        let f11 = net.forward(&[1.0, 1.0])[0];

        assert!(((f11 - f00) - ((f10 - f00) + (f01 - f00))).abs() < 1e-9);
    }

    #[test]
    fn layers_are_exposed_input_to_output() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut net = Network::sigmoid_xor_model(8, &mut rng);
        let layers = net.layers_mut();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].size, 8);
        assert_eq!(layers[1].size, 1);
    }
}

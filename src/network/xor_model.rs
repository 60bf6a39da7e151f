use crate::{activation::activation::ActivationFunction, layers::dense::Layer, network::model::Model};
use rand::Rng;

/// The modularized XOR network: two named affine transforms with a sigmoid
/// on the hidden layer, packaged so that many independently initialized
/// copies can be created without re-wiring layers by hand.
///
/// Structurally identical to [`Network::sigmoid_xor_model`]; this form exists
/// to show delegation to named sub-transforms.
///
/// [`Network::sigmoid_xor_model`]: crate::network::network::Network::sigmoid_xor_model
pub struct XorModel {
    input_to_hidden: Layer,
    hidden_to_output: Layer,
}

impl XorModel {
    pub fn new<R: Rng>(dim_input: usize, dim_hidden: usize, dim_output: usize, rng: &mut R) -> XorModel {
        XorModel {
            input_to_hidden: Layer::new(dim_hidden, dim_input, ActivationFunction::Sigmoid, rng),
            hidden_to_output: Layer::new(dim_output, dim_hidden, ActivationFunction::Identity, rng),
        }
    }
}

impl Model for XorModel {
    fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let hidden = self.input_to_hidden.feed_from(input);
        self.hidden_to_output.feed_from(&hidden)
    }

    fn layers_mut(&mut self) -> Vec<&mut Layer> {
        vec![&mut self.input_to_hidden, &mut self.hidden_to_output]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn output_has_requested_dimension() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut model = XorModel::new(2, 8, 1, &mut rng);
        assert_eq!(model.forward(&[0.0, 1.0]).len(), 1);
    }

    #[test]
    fn independent_instances_have_independent_parameters() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut a = XorModel::new(2, 4, 1, &mut rng);
        let mut b = XorModel::new(2, 4, 1, &mut rng);

        // Drawn from the same RNG stream, so the two initializations differ.
        assert_ne!(
            a.layers_mut()[0].weights.data,
            b.layers_mut()[0].weights.data
        );
    }

    #[test]
    fn layers_come_back_in_forward_order() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut model = XorModel::new(2, 8, 1, &mut rng);
        let layers = model.layers_mut();
        assert_eq!(layers[0].size, 8);
        assert_eq!(layers[1].size, 1);
    }
}

use std::f64::consts::E;

/// Pointwise nonlinearity applied after a layer's affine transform.
///
/// `Identity` makes the layer a pure affine map; a network built entirely
/// from `Identity` layers collapses to a single linear transform, which is
/// what makes the no-activation XOR model fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationFunction {
    Sigmoid,
    Identity,
    Tanh,
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Identity => x,
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Element-wise derivative, evaluated at the pre-activation value.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Identity => 1.0,
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }
}

pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;
pub mod plot;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::model::Model;
pub use network::network::Network;
pub use network::xor_model::XorModel;
pub use loss::loss_function::LossFunction;
pub use optim::{Adam, Adamax, Optimizer, Sgd};
pub use data::xor::{canonical_pairs, gen_xor_dataset, Example};
pub use train::evaluate::{predict, test_model, Evaluation};
pub use train::loss_history::LossHistory;
pub use train::train_config::TrainConfig;
pub use train::trainer::{train_model, train_model_with};
pub use plot::loss_curve::render_loss_curve;

pub mod model;
pub mod network;
pub mod xor_model;

pub use model::Model;
pub use network::Network;
pub use xor_model::XorModel;

pub mod adam;
pub mod adamax;
pub mod optimizer;
pub mod sgd;

pub use adam::Adam;
pub use adamax::Adamax;
pub use optimizer::Optimizer;
pub use sgd::Sgd;

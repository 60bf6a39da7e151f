pub mod evaluate;
pub mod loss_history;
pub mod train_config;
pub mod trainer;

pub use evaluate::{predict, test_model, Evaluation};
pub use loss_history::LossHistory;
pub use train_config::TrainConfig;
pub use trainer::{train_model, train_model_with};

//! Optimizer comparison and learning-rate sweep on the modularized XOR model.
//!
//! Trains fresh models under SGD, Adam, and Adamax at the same learning rate,
//! then sweeps Adam across learning rates to show fluctuation at 1.0 and
//! crawling convergence at 0.0001.

use rand::rngs::StdRng;
use rand::SeedableRng;

use xor_lab::{
    gen_xor_dataset, test_model, train_model_with, Adam, Adamax, LossHistory, Sgd, TrainConfig,
    XorModel,
};

const DIM_HIDDEN: usize = 8;
const NO_TRAINING: usize = 1000;
const NO_TESTING: usize = 100;
const LEARNING_RATE: f64 = 0.01;

fn main() -> std::io::Result<()> {
    let mut rng = StdRng::seed_from_u64(3);

    let mut training_set = gen_xor_dataset(NO_TRAINING, &mut rng);
    let testing_set = gen_xor_dataset(NO_TESTING, &mut rng);
    let config = TrainConfig::default();

    println!("Stochastic Gradient Descent (lr = {LEARNING_RATE})");
    let mut sgd = Sgd::new(LEARNING_RATE);
    let mut model = XorModel::new(2, DIM_HIDDEN, 1, &mut rng);
    let history = train_model_with(&mut model, &mut training_set, &mut sgd, &config, &mut rng);
    report(&history, test_model(&mut model, &testing_set).accuracy());
    history.save_json("loss_sgd.json")?;

    println!("Adamax (lr = {LEARNING_RATE})");
    let mut adamax = Adamax::new(LEARNING_RATE);
    let mut model = XorModel::new(2, DIM_HIDDEN, 1, &mut rng);
    let history = train_model_with(&mut model, &mut training_set, &mut adamax, &config, &mut rng);
    report(&history, test_model(&mut model, &testing_set).accuracy());
    history.save_json("loss_adamax.json")?;

    println!("Adam (lr = {LEARNING_RATE})");
    let mut adam = Adam::new(LEARNING_RATE);
    let mut model = XorModel::new(2, DIM_HIDDEN, 1, &mut rng);
    let history = train_model_with(&mut model, &mut training_set, &mut adam, &config, &mut rng);
    report(&history, test_model(&mut model, &testing_set).accuracy());
    history.save_json("loss_adam.json")?;

    println!("\nAdam learning-rate sweep");
    for learning_rate in [1.0, 0.1, 0.01, 0.001, 0.0001] {
        println!("learning rate = {learning_rate}");
        let mut adam = Adam::new(learning_rate);
        let mut model = XorModel::new(2, DIM_HIDDEN, 1, &mut rng);
        let history =
            train_model_with(&mut model, &mut training_set, &mut adam, &config, &mut rng);
        report(&history, test_model(&mut model, &testing_set).accuracy());
    }

    Ok(())
}

fn report(history: &LossHistory, accuracy: f64) {
    let first = history.losses().first().copied().unwrap_or(f64::NAN);
    let last = history.last().unwrap_or(f64::NAN);
    println!("  first epoch loss = {first:.6}, last epoch loss = {last:.6}, accuracy = {accuracy:.1}%");
}

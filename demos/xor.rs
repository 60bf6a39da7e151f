//! The three-model XOR walkthrough: a purely linear stack that cannot learn
//! XOR, the same stack with a hidden sigmoid that can, and the modularized
//! form of the second model.

use rand::rngs::StdRng;
use rand::SeedableRng;

use xor_lab::{
    gen_xor_dataset, predict, render_loss_curve, test_model, train_model, Example, Model, Network,
    XorModel,
};

const DIM_INPUT: usize = 2;
const DIM_HIDDEN: usize = 8;
const DIM_OUTPUT: usize = 1;

const NO_TRAINING: usize = 1000;
const NO_TESTING: usize = 100;

const EPOCHS: usize = 40;
const LEARNING_RATE: f64 = 0.01;

fn main() -> std::io::Result<()> {
    let mut rng = StdRng::seed_from_u64(2);

    let mut training_set = gen_xor_dataset(NO_TRAINING, &mut rng);
    let testing_set = gen_xor_dataset(NO_TESTING, &mut rng);

    println!("Model 1: two linear layers, no activation");
    let mut model_1 = Network::linear_xor_model(DIM_HIDDEN, &mut rng);
    run_experiment(&mut model_1, &mut training_set, &testing_set, &mut rng, "loss_model_1.png")?;

    println!("\nModel 2: linear, sigmoid, linear");
    let mut model_2 = Network::sigmoid_xor_model(DIM_HIDDEN, &mut rng);
    run_experiment(&mut model_2, &mut training_set, &testing_set, &mut rng, "loss_model_2.png")?;

    println!("\nModel 3: the modularized XorModel");
    let mut model_3 = XorModel::new(DIM_INPUT, DIM_HIDDEN, DIM_OUTPUT, &mut rng);
    run_experiment(&mut model_3, &mut training_set, &testing_set, &mut rng, "loss_model_3.png")?;

    Ok(())
}

fn run_experiment<M: Model>(
    model: &mut M,
    training_set: &mut [Example],
    testing_set: &[Example],
    rng: &mut StdRng,
    curve_path: &str,
) -> std::io::Result<()> {
    let history = train_model(model, training_set, LEARNING_RATE, EPOCHS, rng);

    for (epoch, loss) in history.losses().iter().enumerate() {
        if (epoch + 1) % 10 == 0 {
            println!("  epoch {:>3}: mean loss = {loss:.6}", epoch + 1);
        }
    }

    for example in testing_set.iter().take(8) {
        let predicted = predict(model, example);
        let verdict = if predicted == example.label { "correct" } else { "incorrect" };
        println!(
            "  {:>5} XOR {:>5} = {:>5}  |  prediction = {:>5}  |  {verdict}",
            example.a, example.b, example.label, predicted
        );
    }

    let evaluation = test_model(model, testing_set);
    println!(
        "  accuracy = {:.1}% ({}/{})",
        evaluation.accuracy(),
        evaluation.correct,
        evaluation.total
    );

    render_loss_curve(&history, curve_path)?;
    println!("  wrote {curve_path}");
    Ok(())
}

// This binary crate is intentionally minimal.
// All training logic lives in the library (src/lib.rs and its modules).
// Run the lab walkthroughs with:
//   cargo run --example xor
//   cargo run --example optimizers
fn main() {
    println!("xor-lab: learning the XOR gate with multilayer perceptrons.");
    println!("Run `cargo run --example xor` for the three-model walkthrough.");
    println!("Run `cargo run --example optimizers` for the optimizer comparison.");
}

pub mod xor;

pub use xor::{canonical_pairs, gen_xor_dataset, Example};

use rand::Rng;

/// One labeled XOR sample: two boolean inputs and their exclusive-or.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub a: bool,
    pub b: bool,
    pub label: bool,
}

impl Example {
    pub fn new(a: bool, b: bool) -> Example {
        Example { a, b, label: a != b }
    }

    /// 2-element input encoding: true → 1.0, false → 0.0.
    pub fn input_vector(&self) -> Vec<f64> {
        vec![
            if self.a { 1.0 } else { 0.0 },
            if self.b { 1.0 } else { 0.0 },
        ]
    }

    /// 1-element target encoding: true → 1.0, false → 0.0.
    pub fn target_vector(&self) -> Vec<f64> {
        vec![if self.label { 1.0 } else { 0.0 }]
    }
}

/// Generates `size` independent examples by sampling two fair booleans each
/// and labeling with their XOR. Sampling is with replacement; there is no
/// dedup or stratification.
pub fn gen_xor_dataset<R: Rng>(size: usize, rng: &mut R) -> Vec<Example> {
    (0..size)
        .map(|_| Example::new(rng.gen_bool(0.5), rng.gen_bool(0.5)))
        .collect()
}

/// The four rows of the XOR truth table, in truth-table order.
pub fn canonical_pairs() -> [Example; 4] {
    [
        Example::new(false, false),
        Example::new(false, true),
        Example::new(true, false),
        Example::new(true, true),
    ]
}

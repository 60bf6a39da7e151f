use serde::Serialize;

/// Per-epoch mean training losses, appended once per completed epoch.
///
/// Report-only: the trainer never reads it back. Non-finite entries are
/// recorded as-is so a diverging run stays visible in the curve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LossHistory {
    epoch_losses: Vec<f64>,
}

impl LossHistory {
    pub fn new() -> LossHistory {
        LossHistory { epoch_losses: Vec::new() }
    }

    pub fn push(&mut self, mean_loss: f64) {
        self.epoch_losses.push(mean_loss);
    }

    pub fn losses(&self) -> &[f64] {
        &self.epoch_losses
    }

    pub fn len(&self) -> usize {
        self.epoch_losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epoch_losses.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }

    /// Writes the raw loss series as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

// Progress bar for the batch-writing step, using indicatif.
// Bars are disabled in debug mode to avoid mangled output.

use indicatif::{ProgressBar, ProgressStyle};

#[derive(Clone, Copy)]
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    // Create a new manager. If enabled=false, no bars are created.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    // Create a bar over the number of statements to write.
    pub fn new_batch_bar(&self, total: u64) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let bar = ProgressBar::new(total);
        bar.set_style(batch_style());
        bar.set_prefix("Writing batches".to_string());
        Some(bar)
    }
}

fn batch_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{prefix:20} {pos:>5}/{len:<5} [{bar:40}] {percent:>3}%",
    )
    .expect("valid progress template")
    .progress_chars("█ ")
}

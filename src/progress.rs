use indicatif::{ProgressBar, ProgressStyle};

/// Feedback sink advanced once per processed range, written or not.
///
/// Purely cosmetic: the driver behaves identically whichever implementation
/// it is handed, which is all quiet mode changes.
pub trait ProgressSink {
    fn advance(&self);
    fn finish(&self);
}

/// Terminal progress bar sized to the number of ranges.
pub struct IndicatifProgress {
    bar: ProgressBar,
}

impl IndicatifProgress {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::with_template(
            "{msg} [{bar:40.cyan/blue}] {pos}/{len} files",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style.progress_chars("=> "));
        bar.set_message("Splitting PDF");
        IndicatifProgress { bar }
    }
}

impl ProgressSink for IndicatifProgress {
    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

/// Quiet-mode sink.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn advance(&self) {}

    fn finish(&self) {}
}

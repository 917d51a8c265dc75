use std::io::{self, BufRead, Write};
use std::path::Path;

/// Whether one output file may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDecision {
    Proceed,
    Skip,
}

/// Synchronous confirmation source consulted when an output file already
/// exists and `--force` is not set.
///
/// Injected rather than read from stdin inside the policy, so batch callers
/// and tests can supply a deterministic answer.
pub trait ConfirmOverwrite {
    fn confirm(&mut self, path: &Path) -> OutputDecision;
}

impl<C: ConfirmOverwrite> ConfirmOverwrite for &mut C {
    fn confirm(&mut self, path: &Path) -> OutputDecision {
        (**self).confirm(path)
    }
}

pub struct OverwritePolicy<C> {
    force: bool,
    confirm: C,
}

impl<C: ConfirmOverwrite> OverwritePolicy<C> {
    pub fn new(force: bool, confirm: C) -> Self {
        OverwritePolicy { force, confirm }
    }

    /// Decide whether writing to `path` may proceed. Forced runs never
    /// touch the filesystem here; existing files are silently replaced.
    pub fn decide(&mut self, path: &Path) -> OutputDecision {
        if self.force || !path.exists() {
            return OutputDecision::Proceed;
        }
        self.confirm.confirm(path)
    }
}

/// Production confirmation source: prompts on stdout, reads one line from
/// stdin. Only a case-insensitive `y` proceeds; end-of-input counts as a
/// decline and warns, since the rest of the batch should still run.
pub struct StdinConfirm;

impl ConfirmOverwrite for StdinConfirm {
    fn confirm(&mut self, path: &Path) -> OutputDecision {
        print!(
            "File '{}' already exists. Overwrite? (Y/N): ",
            path.display()
        );
        let _ = io::stdout().flush();

        let mut response = String::new();
        match io::stdin().lock().read_line(&mut response) {
            Ok(0) => {
                eprintln!("Input interrupted. Skipping '{}'.", path.display());
                OutputDecision::Skip
            }
            Ok(_) if response.trim().eq_ignore_ascii_case("y") => OutputDecision::Proceed,
            Ok(_) => OutputDecision::Skip,
            Err(err) => {
                eprintln!(
                    "Could not read confirmation ({}). Skipping '{}'.",
                    err,
                    path.display()
                );
                OutputDecision::Skip
            }
        }
    }
}

use std::path::Path;

use anyhow::Result;

use crate::naming::{output_filename, NamingContext};
use crate::overwrite::{ConfirmOverwrite, OutputDecision, OverwritePolicy};
use crate::page_range::PageRange;
use crate::pdf::PdfDocument;
use crate::progress::ProgressSink;

/// Per-run tallies, for the closing summary only. The exit code does not
/// depend on them: a batch with write failures still "completes".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Process every range in input order: name it, clear it with the overwrite
/// policy, then extract and write. A failed write is reported and the batch
/// moves on; nothing about one range affects the next. The progress sink
/// advances exactly once per range whatever the outcome.
pub fn run<C: ConfirmOverwrite>(
    doc: &PdfDocument,
    ranges: &[PageRange],
    ctx: &NamingContext,
    output_dir: &Path,
    policy: &mut OverwritePolicy<C>,
    progress: &dyn ProgressSink,
) -> SplitOutcome {
    let mut outcome = SplitOutcome::default();

    for &range in ranges {
        let output_path = output_dir.join(output_filename(range, ctx));

        match policy.decide(&output_path) {
            OutputDecision::Skip => {
                println!("Skipping '{}'.", output_path.display());
                outcome.skipped += 1;
            }
            OutputDecision::Proceed => match write_range(doc, range, &output_path) {
                Ok(()) => outcome.written += 1,
                Err(err) => {
                    eprintln!("Error writing '{}': {:#}", output_path.display(), err);
                    outcome.failed += 1;
                }
            },
        }
        progress.advance();
    }

    progress.finish();
    outcome
}

fn write_range(doc: &PdfDocument, range: PageRange, path: &Path) -> Result<()> {
    let mut part = doc.extract_range(range)?;
    PdfDocument::save(&mut part, path)
}

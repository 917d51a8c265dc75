mod cli;
mod naming;
mod overwrite;
mod page_range;
mod pdf;
mod progress;
mod split;

use clap::{CommandFactory, Parser};
use cli::Cli;
use naming::NamingContext;
use overwrite::{OverwritePolicy, StdinConfirm};
use pdf::PdfDocument;
use progress::{IndicatifProgress, NullProgress, ProgressSink};

const EXIT_INPUT_NOT_FOUND: i32 = 2;
const EXIT_OPEN_FAILED: i32 = 3;
const EXIT_EMPTY_DOCUMENT: i32 = 4;
const EXIT_DIRECTORY_FAILED: i32 = 5;
const EXIT_INVALID_RANGE: i32 = 6;

fn main() {
    // Bare invocation prints help and succeeds, rather than tripping over
    // the required positional argument.
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        std::process::exit(0);
    }

    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

/// Staged setup, then the batch. Each setup failure has a fixed exit code
/// and nothing is written before every check has passed; per-range write
/// failures inside the batch never change the code.
fn run(cli: &Cli) -> i32 {
    if !cli.input.exists() {
        eprintln!("Error: input file '{}' not found.", cli.input.display());
        return EXIT_INPUT_NOT_FOUND;
    }

    let doc = match PdfDocument::open(&cli.input) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("Error opening PDF: {:#}", err);
            return EXIT_OPEN_FAILED;
        }
    };

    let total_pages = doc.page_count();
    if total_pages == 0 {
        eprintln!("Error: the PDF is empty.");
        return EXIT_EMPTY_DOCUMENT;
    }

    if let Err(err) = std::fs::create_dir_all(&cli.directory) {
        eprintln!(
            "Error creating directory '{}': {}",
            cli.directory.display(),
            err
        );
        return EXIT_DIRECTORY_FAILED;
    }

    // An explicit page specification always wins over granularity.
    let ranges = match &cli.pages {
        Some(spec) => match page_range::parse_page_spec(spec, total_pages) {
            Ok(ranges) => ranges,
            Err(err) => {
                eprintln!("Error: {}.", err);
                return EXIT_INVALID_RANGE;
            }
        },
        None => page_range::granularity_ranges(cli.granularity, total_pages),
    };

    let prefix = match &cli.prefix {
        Some(prefix) => prefix.clone(),
        None => cli
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("page")
            .to_string(),
    };
    let ctx = NamingContext::new(prefix, total_pages);

    let progress: Box<dyn ProgressSink> = if cli.quiet {
        Box::new(NullProgress)
    } else {
        Box::new(IndicatifProgress::new(ranges.len() as u64))
    };
    let mut policy = OverwritePolicy::new(cli.force, StdinConfirm);

    let outcome = split::run(
        &doc,
        &ranges,
        &ctx,
        &cli.directory,
        &mut policy,
        progress.as_ref(),
    );

    if !cli.quiet {
        if outcome.skipped > 0 || outcome.failed > 0 {
            println!(
                "Wrote {} of {} file(s) to '{}' ({} skipped, {} failed).",
                outcome.written,
                ranges.len(),
                cli.directory.display(),
                outcome.skipped,
                outcome.failed
            );
        } else {
            println!(
                "Wrote {} file(s) to '{}'.",
                outcome.written,
                cli.directory.display()
            );
        }
    }

    0
}

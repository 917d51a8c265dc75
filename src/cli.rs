use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into smaller files by page ranges or fixed-size chunks")]
#[command(version)]
pub struct Cli {
    /// Path to the input PDF file
    pub input: PathBuf,

    /// Page specification, e.g. "1,7,67" or "1-10" or "56-"
    #[arg(short, long)]
    pub pages: Option<String>,

    /// Pages per output file when no page specification is given
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub granularity: i64,

    /// Output directory for the split PDF files
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Custom prefix for output filenames (default: input file name without extension)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Overwrite existing output files without prompting
    #[arg(long)]
    pub force: bool,

    /// Suppress the progress bar and summary (prompts and errors still print)
    #[arg(short, long)]
    pub quiet: bool,
}

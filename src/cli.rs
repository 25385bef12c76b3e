use std::{fs, path::{Path, PathBuf}};

use anyhow::Context;
use clap::Parser;

use crate::{encyclopedia::DEFAULT_LIMIT, locale::Locale, report::HeaderLanguage};

/// Look movies up on Wikipedia and collect their details into a spreadsheet.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text file with one movie title per line
    #[arg(value_name = "INPUT", default_value = "io/input.txt")]
    pub input: PathBuf,

    /// Report to write; a `.csv` extension writes CSV, anything else XLSX
    #[arg(value_name = "OUTPUT", default_value = "io/output.xlsx")]
    pub output: PathBuf,

    /// Search results considered per title
    #[arg(
        short = 'k',
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: usize,

    /// Seconds before a request to Wikipedia is abandoned
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Search every title on this wiki (fr or en) instead of detecting its language
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Language of the report's header row
    #[arg(long, value_enum, default_value_t = HeaderLanguage::En)]
    pub header_language: HeaderLanguage,

    /// Hide the progress bar and the per-title success lines
    #[arg(short, long)]
    pub quiet: bool,
}

/// Movie titles from `path`, one per line, trimmed. Blank lines are ignored.
pub fn read_titles(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read titles from {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

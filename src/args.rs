use clap::{Parser, ValueEnum};
use offer_scraper::{FailurePolicy, OutputFormat, ScraperConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "offer-scraper")]
#[command(about = "Collects offer links, prices and vendors from a marketplace search")]
#[command(version)]
pub struct Args {
    /// Item or product to search for
    pub keyword: String,

    /// Maximum number of offers to collect
    pub max_queries: usize,

    /// Skip sponsored offers
    #[arg(long = "skip_sponsor")]
    pub skip_sponsor: bool,

    /// Remove tracking information from the saved links
    #[arg(long = "remove_tracking")]
    pub remove_tracking: bool,

    /// Output file
    #[arg(short, long, default_value = offer_scraper::export::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of detail pages fetched concurrently
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// What to do when an offer page cannot be scraped
    #[arg(long, value_enum)]
    pub on_error: Option<PolicyArg>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Stop at the first failing offer, export nothing
    Abort,
    /// Log the failing offer and continue
    Skip,
}

impl Args {
    /// Override configuration values given on the command line
    pub fn apply(&self, config: &mut ScraperConfig) {
        if let Some(concurrency) = self.concurrency {
            config.detail_concurrency = concurrency;
        }
        if let Some(policy) = self.on_error {
            config.failure_policy = convert_policy(policy);
        }
    }
}

/// Convert from CLI argument format to internal output format
pub fn convert_format(arg: FormatArg) -> OutputFormat {
    match arg {
        FormatArg::Csv => OutputFormat::Csv,
        FormatArg::Json => OutputFormat::Json,
    }
}

pub fn convert_policy(arg: PolicyArg) -> FailurePolicy {
    match arg {
        PolicyArg::Abort => FailurePolicy::Abort,
        PolicyArg::Skip => FailurePolicy::Skip,
    }
}

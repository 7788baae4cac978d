use clap::Parser;
use offer_scraper::{Collector, ScraperConfig, SearchQuery, export};
use std::error::Error;

mod args;
use args::{Args, convert_format};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            ScraperConfig::from_file(path)?
        }
        None => ScraperConfig::default(),
    };
    args.apply(&mut config);

    let query = SearchQuery::new(&args.keyword, args.max_queries, &config.root_url)
        .with_skip_sponsored(args.skip_sponsor)
        .with_strip_tracking(args.remove_tracking);

    let start_time = std::time::Instant::now();
    let collector = Collector::new(query, config)?;
    let records = collector.collect().await?;

    export(&records, &args.output, convert_format(args.format))?;

    ::log::info!(
        "Scraping complete - {} offers in {:.2} seconds",
        records.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

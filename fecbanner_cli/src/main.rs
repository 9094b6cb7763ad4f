mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use console::Term;
use fecbanner_lib::config::{base_url_override, load_api_key, DEFAULT_API_KEY_FILE};
use fecbanner_lib::openfec_api::{Client, TotalsQuery};
use fecbanner_lib::validation::validate_committee_id;
use fecbanner_lib::{fetch_totals, render_totals, FigletRenderer, RandomPalette, RenderMode};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fecbanner")]
#[command(about = "Show OpenFEC committee totals as a terminal banner")]
struct Cli {
    /// FEC committee ID (e.g. C00401224)
    committee_id: String,

    /// Calendar year to report on (default: current year)
    #[arg(long)]
    year: Option<i32>,

    /// Election cycle (default: the even year that closes --year's cycle)
    #[arg(long)]
    cycle: Option<i32>,

    /// Layout: panel, stacked, or plain
    #[arg(long, default_value = "panel")]
    layout: String,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    output: String,

    /// FIGlet font file for the banner (default: bundled standard font)
    #[arg(long)]
    font: Option<PathBuf>,

    /// File holding the OpenFEC API key, read when OPENFEC_API_KEY is unset
    #[arg(long, default_value = DEFAULT_API_KEY_FILE)]
    api_key_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fecbanner=warn".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };
    let layout: RenderMode = cli.layout.parse()?;
    let committee_id = validate_committee_id(&cli.committee_id)?;

    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    let mut query = TotalsQuery::for_year(year);
    if let Some(cycle) = cli.cycle {
        query = query.with_only_cycle(cycle);
    }

    // Load the font up front so a bad --font fails before the network call.
    let renderer = match &cli.font {
        Some(path) => FigletRenderer::from_file(path)?,
        None => FigletRenderer::standard()?,
    };

    let api_key = load_api_key(&cli.api_key_file)?;
    let client = match base_url_override() {
        Some(base_url) => Client::with_base_url(&base_url, api_key)?,
        None => Client::new(api_key)?,
    };

    let totals = fetch_totals(&client, &committee_id, &query)
        .await
        .with_context(|| format!("failed to fetch totals for {}", committee_id))?;
    let Some(totals) = totals else {
        output::print_no_totals(&committee_id, &query);
        return Ok(());
    };

    match format {
        OutputFormat::Json => output::print_json(&totals),
        OutputFormat::Text => {
            let width = Term::stdout().size_checked().map(|(_rows, cols)| cols);
            let lines = render_totals(&totals, layout, &renderer, &mut RandomPalette, width)
                .context("failed to render committee banner")?;
            output::print_lines(&lines)?;
        }
    }

    Ok(())
}

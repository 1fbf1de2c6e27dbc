use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use tourdeck_core::AppConfig;
use tourdeck_flights::{group_segments, parse_navitas, NavitasParse};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tourdeck")]
#[command(about = "Tour logistics flight-text toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse pasted Navitas booking text into flight options.
    Parse {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Parse pasted text and group segments by flight key.
    Group {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Year assumed for year-less date tokens like 15JAN.
        /// Defaults to TOURDECK_REFERENCE_YEAR, then the current year.
        #[arg(long)]
        year: Option<i32>,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tourdeck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { file, pretty } => {
            let parse = parse_input(file.as_deref(), &config)?;
            print_json(&parse, pretty)
        }
        Commands::Group { file, year, pretty } => {
            let parse = parse_input(file.as_deref(), &config)?;
            let reference_year = year
                .or(config.reference_year)
                .unwrap_or_else(|| chrono::Utc::now().year());
            let segments: Vec<_> = parse
                .options
                .iter()
                .flat_map(|o| o.segments.iter().cloned())
                .collect();
            let groups = group_segments(&segments, reference_year);
            info!(groups = groups.len(), segments = segments.len(), "grouped segments");
            print_json(&groups, pretty)
        }
    }
}

fn parse_input(file: Option<&Path>, config: &AppConfig) -> anyhow::Result<NavitasParse> {
    let text = read_input(file)?;
    let parse = parse_navitas(&text);
    info!(
        options = parse.options.len(),
        segments = parse.segment_count(),
        issues = parse.issues.len(),
        "parsed navitas text"
    );
    for issue in &parse.issues {
        warn!(%issue, "unparsed line");
    }
    if config.strict && !parse.issues.is_empty() {
        anyhow::bail!("{} line(s) could not be parsed", parse.issues.len());
    }
    Ok(parse)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

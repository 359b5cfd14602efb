//! GNS country file to OSM XML converter.
//!
//! Reads the input twice: once to index first-order administrative regions,
//! once to classify records and write nodes.

mod config;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gns2osm::classify::FeatureClassifier;
use gns2osm::country::CountryContext;
use gns2osm::gns::decode_input;
use gns2osm::osm::{OsmXmlWriter, DEFAULT_GENERATOR};
use gns2osm::pipeline::{build_admin_index, convert};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(about = "Convert a GNS country file into OSM XML")]
struct Args {
    /// GNS country file (tab-separated, optionally .gz)
    #[arg(short, long)]
    file: PathBuf,

    /// Output OSM file, "-" for stdout [default: input name with .osm]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// ISO 3166-1 alpha-2 country code
    #[arg(short, long)]
    country: Option<String>,

    /// Country name for is_in:country (overrides the built-in table)
    #[arg(long)]
    country_name: Option<String>,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Generator attribute of the <osm> element
    #[arg(long)]
    generator: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Hide progress bars
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout may carry the OSM document
    let default_level = if args.verbose { "debug" } else { "info" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    let code = args
        .country
        .clone()
        .or(config.country.code.clone())
        .context("No country code given (use --country or [country] code)")?;
    let name = args.country_name.clone().or(config.country.name.clone());
    let country = CountryContext::resolve(&code, name.as_deref())?;
    let generator = args
        .generator
        .clone()
        .or(config.output.generator.clone())
        .unwrap_or_else(|| DEFAULT_GENERATOR.to_string());

    info!("GNS to OSM conversion");
    info!("File: {}", args.file.display());
    info!("Country: {} ({})", country.name(), country.code());

    let classifier = FeatureClassifier::default();
    debug!(
        "{} classification rules, {} unreachable",
        classifier.rules().len(),
        classifier.unreachable_rules().len()
    );

    // Pass 1
    let index = build_admin_index(open_with_progress(&args.file, "ADM1 index", args.quiet)?)?;

    // Pass 2
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.file));
    let out: Box<dyn Write> = if output_path.as_os_str() == "-" {
        Box::new(BufWriter::new(io::stdout().lock()))
    } else {
        let file = File::create(&output_path)
            .with_context(|| format!("Failed to create output: {}", output_path.display()))?;
        Box::new(BufWriter::new(file))
    };

    let mut writer = OsmXmlWriter::new(out, &generator)?;
    let stats = convert(
        open_with_progress(&args.file, "Nodes", args.quiet)?,
        &index,
        &country,
        &classifier,
        &mut writer,
    )?;
    let written = writer.written();
    writer.finish()?;

    stats.log_summary();
    if output_path.as_os_str() != "-" {
        info!("Wrote {} nodes to {}", written, output_path.display());
    }

    Ok(())
}

/// Open the input for one pass with a byte progress bar on stderr.
fn open_with_progress(path: &Path, label: &str, quiet: bool) -> Result<Box<dyn Read>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open GNS file: {}", path.display()))?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let len = file.metadata().map(|m| m.len()).unwrap_or(0);
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} {msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes}",
                )?
                .progress_chars("#>-"),
        );
        pb.set_message(label.to_string());
        pb
    };

    Ok(decode_input(path, pb.wrap_read(file)))
}

/// `PH.txt` -> `PH.osm`, `PH.txt.gz` -> `PH.osm`.
fn default_output(input: &Path) -> PathBuf {
    let base = if input.extension().map_or(false, |e| e == "gz") {
        input.with_extension("")
    } else {
        input.to_path_buf()
    };
    base.with_extension("osm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        assert_eq!(default_output(Path::new("data/rp.txt")), PathBuf::from("data/rp.osm"));
        assert_eq!(default_output(Path::new("rp.txt.gz")), PathBuf::from("rp.osm"));
        assert_eq!(default_output(Path::new("rp")), PathBuf::from("rp.osm"));
    }
}

mod cli;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use geoprobe::client::HttpGeocodeClient;
use geoprobe::config::GeoProbeConfig;
use geoprobe::error::Result;
use geoprobe::input::load_addresses;
use geoprobe::report::{default_output_path, write_report};
use geoprobe::runner::BatchRunner;
use geoprobe::summary::render_summary;
use indicatif::{ProgressBar, ProgressStyle};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GeoProbeConfig::load_or_default(&cli.config)?;

    if cli.verbose {
        println!("Input Path: {}", cli.input.display());
        println!("Provider endpoint: {}", config.provider.endpoint);
    }

    let addresses = load_addresses(&cli.input)?;
    if cli.verbose {
        println!("Loaded {} input rows", addresses.len());
    }

    let client = HttpGeocodeClient::new(&config.provider)?;
    let runner = BatchRunner::new(client);

    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} addresses ({elapsed})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );

    let bar = progress_bar.clone();
    let report = runner.run_with_progress(
        addresses,
        Some(Box::new(move |tracker| {
            bar.set_length(tracker.total as u64);
            bar.set_position(tracker.completed as u64);
        })),
    );
    progress_bar.finish_and_clear();

    let output_path = cli
        .output
        .unwrap_or_else(|| default_output_path(&report.summary.run_id));
    write_report(&output_path, &report.rows)?;

    println!("{}", render_summary(&report.summary));
    println!("✅ Report saved: {}", output_path.display());

    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geoprobe")]
#[command(
    author,
    version,
    about = "Bulk-test a geocoding provider with an address file and produce a report"
)]
pub struct Cli {
    /// Path to the input address file (.csv or .json) with an 'address' column
    #[clap(short, long)]
    pub input: PathBuf,

    /// Path to the output report (.csv or .json); defaults to result/RUN_<timestamp>.csv
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Path to the provider configuration file
    #[clap(short, long, default_value = "geoprobe.toml")]
    pub config: PathBuf,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

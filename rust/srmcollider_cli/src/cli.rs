use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "srmcollider",
    about = "Minimal unique-ion-signature order and non-UIS counts for one peptide's transitions"
)]
pub struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Write the JSON result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

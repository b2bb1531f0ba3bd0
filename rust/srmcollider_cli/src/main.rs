mod cli;
mod config;
mod errors;
mod readers;

use clap::Parser;
use serde::Serialize;
use srmcollider::{
    MinTransitions,
    PrecursorIndex,
    TransitionList,
    count_non_uis_in_window,
    min_needed_transitions,
};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{
    Config,
    QueryConfig,
    TransitionsConfig,
};
use errors::CliError;

#[derive(Debug, Serialize)]
#[serde(tag = "mode")]
enum RunResult {
    #[serde(rename = "min_transitions")]
    MinTransitions { result: MinTransitions },
    #[serde(rename = "non_uis")]
    NonUis { non_uis_counts: Vec<usize> },
}

fn main() -> Result<(), CliError> {
    // Initialize logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Cli::parse();

    let conf = std::fs::File::open(&args.config).map_err(|e| CliError::Io {
        source: e,
        path: Some(args.config.to_string_lossy().to_string()),
    })?;
    let config: Config = serde_json::from_reader(conf)?;

    let transitions = match &config.transitions {
        TransitionsConfig::Inline { transitions } => transitions.clone(),
        TransitionsConfig::Csv { path } => readers::read_transitions_csv(path)?,
    };
    let transitions = TransitionList::new(transitions)?;
    info!(
        n_transitions = transitions.len(),
        "loaded transitions in preference order"
    );

    let result = match &config.query {
        QueryConfig::MinTransitions { candidates } => {
            info!(n_candidates = candidates.len(), "minimal-order query");
            let result = min_needed_transitions(&transitions, candidates, &config.params)?;
            RunResult::MinTransitions { result }
        }
        QueryConfig::NonUis {
            background,
            window,
            peptide_key,
        } => {
            let points = readers::read_background_csv(background)?;
            let index = PrecursorIndex::new(points);
            info!(n_precursors = index.len(), "non-UIS query over background");
            let counts =
                count_non_uis_in_window(&transitions, &index, window, *peptide_key, &config.params)?;
            RunResult::NonUis {
                non_uis_counts: counts,
            }
        }
    };

    match &args.output {
        Some(path) => {
            let out = std::fs::File::create(path).map_err(|e| CliError::Io {
                source: e,
                path: Some(path.to_string_lossy().to_string()),
            })?;
            serde_json::to_writer_pretty(out, &result)?;
        }
        None => {
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), &result)?;
            println!();
        }
    }

    Ok(())
}

use serde::{
    Deserialize,
    Serialize,
};
use srmcollider::{
    CandidatePeptide,
    PrecursorWindow,
    Transition,
    UisParams,
};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub transitions: TransitionsConfig,
    pub query: QueryConfig,
    pub params: UisParams,
}

/// Transitions in monitoring preference order, inline or from a CSV with
/// `product_mz,id` columns.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum TransitionsConfig {
    #[serde(rename = "inline")]
    Inline { transitions: Vec<Transition> },
    #[serde(rename = "csv")]
    Csv { path: PathBuf },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "mode")]
pub enum QueryConfig {
    /// Minimal-order computation against an explicit candidate list.
    #[serde(rename = "min_transitions")]
    MinTransitions { candidates: Vec<CandidatePeptide> },
    /// Non-UIS counts against a background precursor list (CSV with
    /// `precursor_mz,retention_time,sequence,precursor_key,charge` and an
    /// optional `isotope_label` column) filtered by the query window.
    #[serde(rename = "non_uis")]
    NonUis {
        background: PathBuf,
        window: PrecursorWindow,
        peptide_key: i64,
    },
}

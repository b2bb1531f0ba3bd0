use serde::{
    Deserialize,
    Serialize,
};

/// Isotope labelling state of a precursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IsotopeLabel {
    #[default]
    #[serde(rename = "none")]
    None,
    /// Uniform 15N labelling: every backbone and side-chain nitrogen is
    /// heavy.
    #[serde(rename = "n15")]
    N15,
}

/// Payload carried by every point in the precursor index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecursorEntry {
    pub sequence: String,
    pub precursor_key: i64,
    /// Precursor charge, used for the isotope-inclusion test. Must be >= 1.
    pub charge: i32,
    #[serde(default)]
    pub isotope_label: IsotopeLabel,
}

/// A candidate interferer supplied directly by the caller for the
/// minimal-order path (no spatial retrieval involved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePeptide {
    pub precursor_key: i64,
    pub sequence: String,
}

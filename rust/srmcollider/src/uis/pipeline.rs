use crate::errors::Result;
use crate::fragments::IonSeriesConfig;
use crate::fragments::masses::MASS_DIFF_C13;
use crate::index::{
    PrecursorIndex,
    PrecursorWindow,
};
use crate::models::precursor::{
    CandidatePeptide,
    IsotopeLabel,
};
use crate::models::tolerance::FragmentTolerance;
use crate::models::transition::TransitionList;
use crate::uis::matcher::candidate_mask;
use crate::uis::min_needed::{
    MinTransitions,
    PrefixRunSolver,
};
use crate::uis::non_uis::count_non_uis;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    trace,
};

fn default_max_isotopes() -> u32 {
    3
}

fn default_isotope_spacing() -> f64 {
    MASS_DIFF_C13
}

fn default_isotope_correction() -> f64 {
    3.0 * MASS_DIFF_C13
}

/// Call-level configuration shared by both entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UisParams {
    /// Highest order the non-unique subset counter reports.
    pub max_uis: usize,
    pub tolerance: FragmentTolerance,
    #[serde(default)]
    pub ion_series: IonSeriesConfig,
    /// Isotope offsets 0..=max_isotopes are tested against the caller
    /// window.
    #[serde(default = "default_max_isotopes")]
    pub max_isotopes: u32,
    /// Spacing of the isotope envelope.
    #[serde(default = "default_isotope_spacing")]
    pub isotope_spacing: f64,
    /// Widening applied to the low m/z edge of the index query so isotopic
    /// variants whose monoisotopic m/z sits below the caller window still
    /// get retrieved. The exact window is re-applied per isotope hypothesis.
    #[serde(default = "default_isotope_correction")]
    pub isotope_correction: f64,
}

impl Default for UisParams {
    fn default() -> Self {
        Self {
            max_uis: 5,
            tolerance: FragmentTolerance::Absolute(0.01),
            ion_series: IonSeriesConfig::default(),
            max_isotopes: default_max_isotopes(),
            isotope_spacing: default_isotope_spacing(),
            isotope_correction: default_isotope_correction(),
        }
    }
}

/// Minimal number of top-ranked transitions (in the caller's preference
/// order) that no supplied candidate can fully reproduce.
///
/// Candidate masks are consumed one at a time by the running-maximum solver
/// and never retained as a collection. Generator failures on a candidate
/// sequence abort the whole call.
pub fn min_needed_transitions(
    transitions: &TransitionList,
    candidates: &[CandidatePeptide],
    params: &UisParams,
) -> Result<MinTransitions> {
    let mut solver = PrefixRunSolver::default();
    for candidate in candidates {
        let mask = candidate_mask(
            transitions,
            &candidate.sequence,
            &params.ion_series,
            IsotopeLabel::None,
            params.tolerance,
        )?;
        trace!(key = candidate.precursor_key, mask, "candidate mask");
        solver.observe(mask);
    }
    Ok(solver.finish(transitions.len()))
}

/// Non-unique subset counts for orders `1..=max_uis` against interferers
/// retrieved from the precursor index.
///
/// The retrieval window is widened on the low m/z side by
/// `isotope_correction`; every retrieved candidate is then re-tested per
/// isotope offset against the exact caller window, and discarded when no
/// offset lands inside or when its precursor key equals `query_key`.
pub fn count_non_uis_in_window(
    transitions: &TransitionList,
    index: &PrecursorIndex,
    window: &PrecursorWindow,
    query_key: i64,
    params: &UisParams,
) -> Result<Vec<usize>> {
    let widened = PrecursorWindow {
        mz_low: window.mz_low - params.isotope_correction,
        ..*window
    };

    let mut masks = Vec::new();
    let mut retrieved = 0usize;
    for point in index.window_query(&widened) {
        retrieved += 1;
        let entry = &point.entry;
        if entry.precursor_key == query_key {
            continue;
        }
        if !isotope_in_window(point.precursor_mz, entry.charge, window, params) {
            continue;
        }
        let mask = candidate_mask(
            transitions,
            &entry.sequence,
            &params.ion_series,
            entry.isotope_label,
            params.tolerance,
        )?;
        if mask != 0 {
            trace!(key = entry.precursor_key, mask, "interference mask");
            masks.push(mask);
        }
    }
    debug!(
        retrieved,
        retained = masks.len(),
        "candidates from window query"
    );

    Ok(count_non_uis(&masks, params.max_uis))
}

/// True when any isotope hypothesis of the candidate lands inside the exact
/// (unwidened) caller window.
fn isotope_in_window(
    precursor_mz: f64,
    charge: i32,
    window: &PrecursorWindow,
    params: &UisParams,
) -> bool {
    (0..=params.max_isotopes).any(|iso| {
        let shifted = precursor_mz + (params.isotope_spacing * iso as f64) / charge as f64;
        shifted > window.mz_low && shifted < window.mz_high
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isotope_recheck_uses_the_exact_window() {
        let params = UisParams {
            max_isotopes: 1,
            ..UisParams::default()
        };
        let window = PrecursorWindow {
            mz_low: 500.0,
            rt_low: 0.0,
            mz_high: 501.0,
            rt_high: 100.0,
        };
        // Nominal mass below the window, first isotope of a 1+ precursor
        // inside it.
        assert!(isotope_in_window(499.5, 1, &window, &params));
        // Too far below for any allowed offset.
        assert!(!isotope_in_window(497.0, 1, &window, &params));
        // Higher charge shrinks the per-isotope shift below the gap.
        assert!(!isotope_in_window(499.5, 3, &window, &params));
    }

    #[test]
    fn test_window_edges_are_exclusive() {
        let params = UisParams {
            max_isotopes: 0,
            ..UisParams::default()
        };
        let window = PrecursorWindow {
            mz_low: 500.0,
            rt_low: 0.0,
            mz_high: 501.0,
            rt_high: 100.0,
        };
        assert!(!isotope_in_window(500.0, 1, &window, &params));
        assert!(!isotope_in_window(501.0, 1, &window, &params));
        assert!(isotope_in_window(500.5, 1, &window, &params));
    }
}

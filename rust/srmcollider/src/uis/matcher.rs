use crate::errors::Result;
use crate::fragments::{
    IonSeriesConfig,
    generate_fragments,
};
use crate::models::precursor::IsotopeLabel;
use crate::models::tolerance::FragmentTolerance;
use crate::models::transition::{
    InterferenceMask,
    TransitionList,
};

/// Charge states examined for every interfering precursor.
const CHARGE_STATES: [u32; 2] = [1, 2];

/// Fold one fragment list into a mask: bit `i` is set when the transition at
/// position `i` lies within tolerance of at least one theoretical fragment.
///
/// A candidate matching nothing produces `0`; that is not an error, the
/// candidate is simply irrelevant.
pub fn interference_mask(
    transitions: &TransitionList,
    fragment_mzs: &[f64],
    tolerance: FragmentTolerance,
) -> InterferenceMask {
    let mut mask: InterferenceMask = 0;
    for (i, transition) in transitions.iter().enumerate() {
        let hit = fragment_mzs
            .iter()
            .any(|f| tolerance.matches(transition.product_mz, *f));
        if hit {
            mask |= 1 << i;
        }
    }
    mask
}

/// Combined mask of one candidate across both examined charge states.
pub fn candidate_mask(
    transitions: &TransitionList,
    sequence: &str,
    series: &IonSeriesConfig,
    label: IsotopeLabel,
    tolerance: FragmentTolerance,
) -> Result<InterferenceMask> {
    let mut mask: InterferenceMask = 0;
    for charge in CHARGE_STATES {
        let fragments = generate_fragments(sequence, charge, series, label)?;
        mask |= interference_mask(transitions, &fragments, tolerance);
    }
    Ok(mask)
}

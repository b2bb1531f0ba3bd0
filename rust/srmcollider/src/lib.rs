//! Combinatorial interference engine for targeted proteomics (SRM/MRM)
//! assay design.
//!
//! Given a peptide's transitions in their monitoring preference order, the
//! engine answers two questions about precursors that share the peptide's
//! acquisition window:
//!
//! 1. How many of the top-ranked transitions must be monitored before no
//!    interfering precursor can reproduce all of them
//!    ([`min_needed_transitions`]).
//! 2. For every order up to a maximum, how many distinct transition subsets
//!    of that size are fully producible by at least one interferer
//!    ([`count_non_uis_in_window`]).
//!
//! Interference is tracked as bit flags in an [`InterferenceMask`], so the
//! number of transitions per call is capped at [`MAX_TRANSITIONS`].

// Re-export main structures
pub use crate::fragments::{
    IonSeriesConfig,
    generate_fragments,
};
pub use crate::index::{
    IndexedPrecursor,
    PrecursorIndex,
    PrecursorWindow,
};
pub use crate::models::precursor::{
    CandidatePeptide,
    IsotopeLabel,
    PrecursorEntry,
};
pub use crate::models::tolerance::FragmentTolerance;
pub use crate::models::transition::{
    InterferenceMask,
    MAX_TRANSITIONS,
    Transition,
    TransitionList,
};
pub use crate::uis::{
    MinTransitions,
    UisParams,
    count_non_uis,
    count_non_uis_in_window,
    min_needed_transitions,
};

// Declare modules
pub mod errors;
pub mod fragments;
pub mod index;
pub mod models;
pub mod uis;

// Re-export errors
pub use crate::errors::{
    Result,
    SrmColliderError,
};

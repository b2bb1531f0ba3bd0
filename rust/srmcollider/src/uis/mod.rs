//! The interference engine proper: mask folding, the minimal-order solver,
//! and the non-unique subset counter.

mod matcher;
mod min_needed;
mod non_uis;
mod pipeline;

pub use matcher::{
    candidate_mask,
    interference_mask,
};
pub use min_needed::MinTransitions;
pub use non_uis::count_non_uis;
pub use pipeline::{
    UisParams,
    count_non_uis_in_window,
    min_needed_transitions,
};

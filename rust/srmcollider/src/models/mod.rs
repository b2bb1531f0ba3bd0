pub mod precursor;
pub mod tolerance;
pub mod transition;

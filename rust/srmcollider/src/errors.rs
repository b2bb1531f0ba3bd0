use std::fmt::Display;

/// Errors the engine can raise before or during a calculation.
///
/// Note that an empty query window, a candidate matching no transition, or an
/// infeasible minimal order are NOT errors; the first two are ordinary zero
/// results and the last one is a distinguished
/// [`MinTransitions`](crate::MinTransitions) variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SrmColliderError {
    /// More transitions were supplied than there are usable bits in the
    /// interference mask. Raised before any matching work.
    CapacityExceeded { provided: usize, limit: usize },
    /// A peptide sequence contained a residue or modification tag the
    /// fragment generator does not know.
    UnknownResidue { residue: String, sequence: String },
}

impl Display for SrmColliderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { provided, limit } => {
                write!(
                    f,
                    "too many transitions: {} provided but the mask holds {}",
                    provided, limit
                )
            }
            Self::UnknownResidue { residue, sequence } => {
                write!(f, "unknown residue {:?} in sequence {:?}", residue, sequence)
            }
        }
    }
}

impl std::error::Error for SrmColliderError {}

pub type Result<T> = std::result::Result<T, SrmColliderError>;

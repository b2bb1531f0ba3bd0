use crate::errors::{
    Result,
    SrmColliderError,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Bit-flag encoding of which transitions one interfering precursor can
/// reproduce within tolerance. Bit `i` corresponds to the transition at
/// position `i` of the [`TransitionList`].
pub type InterferenceMask = u64;

/// Number of usable bits in an [`InterferenceMask`].
///
/// The most significant bit has to stay clear: the minimal-order solver scans
/// for the leading run of set bits and an all-ones mask would never terminate
/// that scan.
pub const MAX_TRANSITIONS: usize = (InterferenceMask::BITS - 1) as usize;

/// One monitored precursor-to-fragment transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Fragment (q3) m/z of the transition.
    pub product_mz: f64,
    /// Caller-assigned identifier, carried through untouched.
    pub id: i64,
}

/// Transitions in their monitoring preference order.
///
/// The order is caller-supplied and semantically meaningful: position 0 is
/// the transition the caller would monitor first, not the lowest mass.
/// Construction fails with [`SrmColliderError::CapacityExceeded`] when more
/// transitions are supplied than the mask can hold; this happens before any
/// matching work so no bit position is ever undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionList {
    transitions: Vec<Transition>,
}

impl TransitionList {
    pub fn new(transitions: Vec<Transition>) -> Result<Self> {
        if transitions.len() > MAX_TRANSITIONS {
            return Err(SrmColliderError::CapacityExceeded {
                provided: transitions.len(),
                limit: MAX_TRANSITIONS,
            });
        }
        Ok(Self { transitions })
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.transitions.iter()
    }

    pub fn as_slice(&self) -> &[Transition] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_transitions(n: usize) -> Vec<Transition> {
        (0..n)
            .map(|i| Transition {
                product_mz: 400.0 + i as f64,
                id: i as i64,
            })
            .collect()
    }

    #[test]
    fn test_capacity_boundary() {
        assert!(TransitionList::new(dummy_transitions(MAX_TRANSITIONS)).is_ok());
        let err = TransitionList::new(dummy_transitions(MAX_TRANSITIONS + 1)).unwrap_err();
        assert_eq!(
            err,
            SrmColliderError::CapacityExceeded {
                provided: MAX_TRANSITIONS + 1,
                limit: MAX_TRANSITIONS,
            }
        );
    }

    #[test]
    fn test_preserves_caller_order() {
        let mut transitions = dummy_transitions(3);
        transitions.reverse();
        let list = TransitionList::new(transitions).unwrap();
        let ids: Vec<i64> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }
}

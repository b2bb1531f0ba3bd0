//! Two-dimensional precursor lookup over (precursor m/z, retention time).
//!
//! The index is built once from a point list and never mutated afterwards;
//! `window_query` borrows `&self`, so concurrent callers need no lock.

use crate::models::precursor::PrecursorEntry;
use serde::{
    Deserialize,
    Serialize,
};

/// One indexed point: coordinates plus the precursor payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedPrecursor {
    pub precursor_mz: f64,
    pub retention_time: f64,
    pub entry: PrecursorEntry,
}

/// Rectangular query window over (precursor m/z, retention time).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecursorWindow {
    pub mz_low: f64,
    pub rt_low: f64,
    pub mz_high: f64,
    pub rt_high: f64,
}

/// Precursors sorted by m/z; the window query binary-searches the m/z span
/// and filters the retention-time axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecursorIndex {
    points: Vec<IndexedPrecursor>,
}

impl PrecursorIndex {
    pub fn new(mut points: Vec<IndexedPrecursor>) -> Self {
        points.sort_by(|a, b| a.precursor_mz.total_cmp(&b.precursor_mz));
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points inside the (closed) window, in ascending m/z order.
    pub fn window_query(
        &self,
        window: &PrecursorWindow,
    ) -> impl Iterator<Item = &IndexedPrecursor> + '_ {
        let start = self
            .points
            .partition_point(|p| p.precursor_mz < window.mz_low);
        let end = start
            + self.points[start..].partition_point(|p| p.precursor_mz <= window.mz_high);
        let (rt_low, rt_high) = (window.rt_low, window.rt_high);
        self.points[start..end]
            .iter()
            .filter(move |p| p.retention_time >= rt_low && p.retention_time <= rt_high)
    }
}

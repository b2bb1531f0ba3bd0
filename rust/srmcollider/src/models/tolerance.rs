use serde::{
    Deserialize,
    Serialize,
};

/// Tolerance applied when testing a transition against a theoretical
/// fragment m/z.
///
/// The two modes are mutually exclusive per call: either a fixed window in
/// Th, or a window scaling with the transition's own m/z (parts per million).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FragmentTolerance {
    #[serde(rename = "da")]
    Absolute(f64),
    #[serde(rename = "ppm")]
    Ppm(f64),
}

impl FragmentTolerance {
    /// Half-window width at the given transition m/z.
    pub fn window_at(&self, transition_mz: f64) -> f64 {
        match self {
            Self::Absolute(width) => *width,
            Self::Ppm(ppm) => ppm / 1e6 * transition_mz,
        }
    }

    /// True when the fragment falls inside the (open) window around the
    /// transition.
    pub fn matches(&self, transition_mz: f64, fragment_mz: f64) -> bool {
        (transition_mz - fragment_mz).abs() < self.window_at(transition_mz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_window() {
        let tol = FragmentTolerance::Absolute(0.05);
        assert!(tol.matches(500.0, 500.049));
        assert!(!tol.matches(500.0, 500.05));
        assert!(tol.matches(500.0, 499.951));
    }

    #[test]
    fn test_ppm_window_scales_with_mz() {
        let tol = FragmentTolerance::Ppm(20.0);
        // 20 ppm of 500 Th is 0.01 Th.
        assert!((tol.window_at(500.0) - 0.01).abs() < 1e-12);
        assert!(tol.matches(500.0, 500.009));
        assert!(!tol.matches(500.0, 500.011));
        // The same offset at twice the mass is inside the window.
        assert!(tol.matches(1000.0, 1000.011));
    }

    #[test]
    fn test_serde_tags() {
        let tol: FragmentTolerance = serde_json::from_str(r#"{"ppm": 10.0}"#).unwrap();
        assert_eq!(tol, FragmentTolerance::Ppm(10.0));
        let tol: FragmentTolerance = serde_json::from_str(r#"{"da": 0.7}"#).unwrap();
        assert_eq!(tol, FragmentTolerance::Absolute(0.7));
    }
}

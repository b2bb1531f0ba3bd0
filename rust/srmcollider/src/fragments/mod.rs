//! Theoretical fragment-ion generation.
//!
//! Produces the m/z values of the canonical backbone series (and their
//! small-molecule-loss variants) for a peptide at one charge state. Output
//! order is not significant; the matcher scans the full list.

pub mod masses;

use crate::errors::{
    Result,
    SrmColliderError,
};
use crate::models::precursor::IsotopeLabel;
use masses::{
    MASS_CO,
    MASS_DIFF_N15,
    MASS_H,
    MASS_H2O,
    MASS_NH3,
    MASS_OH,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Which ion series the generator emits.
///
/// Field names follow the conventional series nomenclature; every unset
/// option simply omits that series' contribution. The default is the plain
/// b and y series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IonSeriesConfig {
    pub aions: bool,
    pub a_minus_nh3: bool,
    pub bions: bool,
    pub b_minus_h2o: bool,
    pub b_minus_nh3: bool,
    pub b_plus_h2o: bool,
    pub cions: bool,
    pub xions: bool,
    pub yions: bool,
    pub y_minus_h2o: bool,
    pub y_minus_nh3: bool,
    pub zions: bool,
    pub m_minus_h2o: bool,
    pub m_minus_nh3: bool,
}

impl Default for IonSeriesConfig {
    fn default() -> Self {
        Self {
            aions: false,
            a_minus_nh3: false,
            bions: true,
            b_minus_h2o: false,
            b_minus_nh3: false,
            b_plus_h2o: false,
            cions: false,
            xions: false,
            yions: true,
            y_minus_h2o: false,
            y_minus_nh3: false,
            zions: false,
            m_minus_h2o: false,
            m_minus_nh3: false,
        }
    }
}

/// Residue masses for a sequence, with the isotope label applied.
///
/// Sequences are uppercase one-letter codes with optional bracketed
/// modification tags (`PEPC[160]TIDE`). An unknown residue or tag is a
/// [`SrmColliderError::UnknownResidue`]; an empty sequence is fine and just
/// yields no fragments downstream.
fn residue_masses(sequence: &str, label: IsotopeLabel) -> Result<Vec<f64>> {
    let unknown = |token: &str| SrmColliderError::UnknownResidue {
        residue: token.to_string(),
        sequence: sequence.to_string(),
    };

    let mut chars = sequence.char_indices().peekable();
    let mut result = Vec::with_capacity(sequence.len());
    while let Some((start, c)) = chars.next() {
        if !c.is_ascii_uppercase() {
            return Err(unknown(&c.to_string()));
        }
        let mut end = start + c.len_utf8();
        if let Some(&(_, '[')) = chars.peek() {
            // Consume up to and including the closing bracket; an
            // unterminated tag fails the lookup below.
            for (i, c) in chars.by_ref() {
                end = i + c.len_utf8();
                if c == ']' {
                    break;
                }
            }
        }
        let token = &sequence[start..end];
        let (mass, nitrogens) = masses::residue_data(token).ok_or_else(|| unknown(token))?;
        let mass = match label {
            IsotopeLabel::None => mass,
            IsotopeLabel::N15 => mass + nitrogens as f64 * MASS_DIFF_N15,
        };
        result.push(mass);
    }
    Ok(result)
}

/// Generate theoretical fragment m/z values for one peptide at one charge
/// state.
///
/// The b and y series run to length `n - 1`; the last ion of either series
/// would be the precursor itself. Derived series are offsets of b or y:
/// `a = b - CO`, `c = b + NH3`, `x = y + CO - 2H`, `z = y - NH3`, plus the
/// water/ammonia gains and losses selected in `series`. Each value is emitted
/// at `charge` as `(f + (charge - 1) * H) / charge`.
///
/// Deterministic for identical inputs; `charge` must be >= 1.
pub fn generate_fragments(
    sequence: &str,
    charge: u32,
    series: &IonSeriesConfig,
    label: IsotopeLabel,
) -> Result<Vec<f64>> {
    let residues = residue_masses(sequence, label)?;
    let n = residues.len();

    // Running sum over residues; the final value is the peptide's residue
    // mass (full neutral mass minus one water).
    let mut cumulative = Vec::with_capacity(n);
    let mut total = 0.0;
    for mass in &residues {
        total += mass;
        cumulative.push(total);
    }

    let mut fragments: Vec<f64> = Vec::new();
    if n >= 2 {
        let b: Vec<f64> = cumulative[..n - 1].iter().map(|c| c + MASS_H).collect();
        let y: Vec<f64> = cumulative[..n - 1]
            .iter()
            .map(|c| total - c + 2.0 * MASS_H + MASS_OH)
            .collect();

        if series.bions {
            fragments.extend(&b);
        }
        if series.yions {
            fragments.extend(&y);
        }
        if series.aions {
            fragments.extend(b.iter().map(|f| f - MASS_CO));
        }
        if series.cions {
            fragments.extend(b.iter().map(|f| f + MASS_NH3));
        }
        if series.xions {
            fragments.extend(y.iter().map(|f| f + MASS_CO - 2.0 * MASS_H));
        }
        if series.zions {
            fragments.extend(y.iter().map(|f| f - MASS_NH3));
        }
        if series.a_minus_nh3 {
            fragments.extend(b.iter().map(|f| f - MASS_CO - MASS_NH3));
        }
        if series.b_minus_h2o {
            fragments.extend(b.iter().map(|f| f - MASS_H2O));
        }
        if series.b_minus_nh3 {
            fragments.extend(b.iter().map(|f| f - MASS_NH3));
        }
        if series.b_plus_h2o {
            fragments.extend(b.iter().map(|f| f + MASS_H2O));
        }
        if series.y_minus_h2o {
            fragments.extend(y.iter().map(|f| f - MASS_H2O));
        }
        if series.y_minus_nh3 {
            fragments.extend(y.iter().map(|f| f - MASS_NH3));
        }
    }
    if n >= 1 {
        // Precursor losses: the full peptide is the residue sum plus water,
        // so M - H2O is the residue sum itself.
        if series.m_minus_h2o {
            fragments.push(total);
        }
        if series.m_minus_nh3 {
            fragments.push(total + MASS_H2O - MASS_NH3);
        }
    }

    let charge = charge as f64;
    Ok(fragments
        .into_iter()
        .map(|f| (f + (charge - 1.0) * MASS_H) / charge)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values come from spectral-library matches of AAAAEIAVK.
    const TEST_PEPTIDE: &str = "AAAAEIAVK";

    fn by_config() -> IonSeriesConfig {
        IonSeriesConfig::default()
    }

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_by_series_singly_charged() {
        let frags =
            generate_fragments(TEST_PEPTIDE, 1, &by_config(), IsotopeLabel::None).unwrap();
        // 8 b ions + 8 y ions for a 9-mer.
        assert_eq!(frags.len(), 16);
        // b4 = AAAA + H
        assert!(frags.iter().any(|&f| close(f, 285.1557, 1e-3)));
        // y2 = VK + 2H + OH
        assert!(frags.iter().any(|&f| close(f, 246.1817, 1e-3)));
    }

    #[test]
    fn test_doubly_charged_halves_the_mz() {
        let singly =
            generate_fragments(TEST_PEPTIDE, 1, &by_config(), IsotopeLabel::None).unwrap();
        let doubly =
            generate_fragments(TEST_PEPTIDE, 2, &by_config(), IsotopeLabel::None).unwrap();
        for (f1, f2) in singly.iter().zip(doubly.iter()) {
            assert!(close((f1 + MASS_H) / 2.0, *f2, 1e-9));
        }
    }

    #[test]
    fn test_loss_series_are_offsets() {
        let mut config = by_config();
        config.yions = false;
        let b_only = generate_fragments(TEST_PEPTIDE, 1, &config, IsotopeLabel::None).unwrap();
        config.bions = false;
        config.b_minus_h2o = true;
        let b_loss = generate_fragments(TEST_PEPTIDE, 1, &config, IsotopeLabel::None).unwrap();
        assert_eq!(b_only.len(), b_loss.len());
        for (b, loss) in b_only.iter().zip(b_loss.iter()) {
            assert!(close(b - MASS_H2O, *loss, 1e-9));
        }
    }

    #[test]
    fn test_precursor_losses() {
        let config = IonSeriesConfig {
            bions: false,
            yions: false,
            m_minus_h2o: true,
            m_minus_nh3: true,
            ..IonSeriesConfig::default()
        };
        let frags = generate_fragments("GK", 1, &config, IsotopeLabel::None).unwrap();
        let residue_sum = 57.021464 + 128.094963;
        assert_eq!(frags.len(), 2);
        assert!(close(frags[0], residue_sum, 1e-6));
        assert!(close(frags[1], residue_sum + MASS_H2O - MASS_NH3, 1e-6));
    }

    #[test]
    fn test_n15_label_shifts_by_nitrogen_count() {
        let light = generate_fragments("GK", 1, &by_config(), IsotopeLabel::None).unwrap();
        let heavy = generate_fragments("GK", 1, &by_config(), IsotopeLabel::N15).unwrap();
        // b1 is G alone (one nitrogen); y1 is K alone (two nitrogens).
        let b1_shift = heavy[0] - light[0];
        let y1_shift = heavy[1] - light[1];
        assert!(close(b1_shift, MASS_DIFF_N15, 1e-9));
        assert!(close(y1_shift, 2.0 * MASS_DIFF_N15, 1e-9));
    }

    #[test]
    fn test_modified_residue_tag() {
        let plain = generate_fragments("CK", 1, &by_config(), IsotopeLabel::None).unwrap();
        let modified = generate_fragments("C[160]K", 1, &by_config(), IsotopeLabel::None).unwrap();
        // b1 carries the carbamidomethyl shift, y1 does not.
        assert!(close(modified[0] - plain[0], 57.021464, 1e-9));
        assert!(close(modified[1], plain[1], 1e-9));
    }

    #[test]
    fn test_unknown_residue_is_rejected() {
        let err = generate_fragments("PEPTIDEZ", 1, &by_config(), IsotopeLabel::None).unwrap_err();
        assert_eq!(
            err,
            SrmColliderError::UnknownResidue {
                residue: "Z".to_string(),
                sequence: "PEPTIDEZ".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_sequence_yields_no_fragments() {
        let frags = generate_fragments("", 1, &by_config(), IsotopeLabel::None).unwrap();
        assert!(frags.is_empty());
    }
}

//! Monoisotopic masses used by the fragment generator.

/// Hydrogen atom.
pub const MASS_H: f64 = 1.00782503207;
/// Hydroxyl group.
pub const MASS_OH: f64 = 17.00273965;
/// Water.
pub const MASS_H2O: f64 = 18.01056468;
/// Ammonia.
pub const MASS_NH3: f64 = 17.02654910;
/// Carbon monoxide.
pub const MASS_CO: f64 = 27.99491462;
/// C13 - C12, the spacing of an isotope envelope.
pub const MASS_DIFF_C13: f64 = 1.0033548;
/// N15 - N14, applied per nitrogen for uniformly labelled peptides.
pub const MASS_DIFF_N15: f64 = 0.99703489;

const MASS_CARBAMIDOMETHYL: f64 = 57.021464;
const MASS_OXIDATION: f64 = 15.994915;
const MASS_PHOSPHO: f64 = 79.966331;

/// Monoisotopic residue mass and nitrogen count for a residue token.
///
/// Tokens are one-letter codes, optionally with a bracketed nominal-mass
/// modification tag (`C[160]` carbamidomethyl, `M[147]` oxidation, `S[167]`,
/// `T[181]`, `Y[243]` phospho). Returns `None` for anything else.
pub(crate) fn residue_data(token: &str) -> Option<(f64, u32)> {
    let data = match token {
        "G" => (57.021464, 1),
        "A" => (71.037114, 1),
        "S" => (87.032028, 1),
        "P" => (97.052764, 1),
        "V" => (99.068414, 1),
        "T" => (101.047679, 1),
        "C" => (103.009185, 1),
        "L" | "I" => (113.084064, 1),
        "N" => (114.042927, 2),
        "D" => (115.026943, 1),
        "Q" => (128.058578, 2),
        "K" => (128.094963, 2),
        "E" => (129.042593, 1),
        "M" => (131.040485, 1),
        "H" => (137.058912, 3),
        "F" => (147.068414, 1),
        "R" => (156.101111, 4),
        "Y" => (163.063329, 1),
        "W" => (186.079313, 2),
        // Carbamidomethyl carries one extra nitrogen.
        "C[160]" => (103.009185 + MASS_CARBAMIDOMETHYL, 2),
        "M[147]" => (131.040485 + MASS_OXIDATION, 1),
        "S[167]" => (87.032028 + MASS_PHOSPHO, 1),
        "T[181]" => (101.047679 + MASS_PHOSPHO, 1),
        "Y[243]" => (163.063329 + MASS_PHOSPHO, 1),
        _ => return None,
    };
    Some(data)
}

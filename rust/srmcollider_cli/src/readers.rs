use crate::errors::CliError;
use serde::Deserialize;
use srmcollider::{
    IndexedPrecursor,
    IsotopeLabel,
    PrecursorEntry,
    Transition,
};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TransitionRow {
    product_mz: f64,
    id: i64,
}

#[derive(Debug, Deserialize)]
struct BackgroundRow {
    precursor_mz: f64,
    retention_time: f64,
    sequence: String,
    precursor_key: i64,
    charge: i32,
    #[serde(default)]
    isotope_label: IsotopeLabel,
}

fn csv_error(source: csv::Error, path: &Path) -> CliError {
    CliError::Csv {
        source,
        path: path.to_string_lossy().to_string(),
    }
}

pub fn read_transitions_csv(path: &Path) -> Result<Vec<Transition>, CliError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(e, path))?;
    let mut transitions = Vec::new();
    for row in rdr.deserialize() {
        let row: TransitionRow = row.map_err(|e| csv_error(e, path))?;
        transitions.push(Transition {
            product_mz: row.product_mz,
            id: row.id,
        });
    }
    Ok(transitions)
}

pub fn read_background_csv(path: &Path) -> Result<Vec<IndexedPrecursor>, CliError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(e, path))?;
    let mut points = Vec::new();
    for row in rdr.deserialize() {
        let row: BackgroundRow = row.map_err(|e| csv_error(e, path))?;
        points.push(IndexedPrecursor {
            precursor_mz: row.precursor_mz,
            retention_time: row.retention_time,
            entry: PrecursorEntry {
                sequence: row.sequence,
                precursor_key: row.precursor_key,
                charge: row.charge,
                isotope_label: row.isotope_label,
            },
        });
    }
    Ok(points)
}

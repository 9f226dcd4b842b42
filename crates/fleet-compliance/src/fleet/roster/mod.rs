mod parser;

use super::domain::VehicleRecord;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read fleet roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fleet roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads vehicle records from a fleet roster CSV export.
pub struct FleetRosterImporter;

impl FleetRosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleRecord>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows without a registration number are skipped; a repeated registration
    /// number keeps the first row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<VehicleRecord>, RosterImportError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut vehicles = Vec::new();

        for row in parser::parse_rows(reader)? {
            let Some(registration) = row.record.registration_number.clone() else {
                warn!(line = row.line, "skipping roster row without a registration number");
                continue;
            };

            if !seen.insert(registration.to_ascii_uppercase()) {
                warn!(line = row.line, %registration, "skipping duplicate roster row");
                continue;
            }

            vehicles.push(row.record);
        }

        debug!(count = vehicles.len(), "imported fleet roster");
        Ok(vehicles)
    }
}

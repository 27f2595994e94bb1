// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Bank statement validation results.

use std::path::Path;

use anyhow::{Result, bail};
use serde::Deserialize;

/// Counts returned by `POST /api/validate-transactions`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationStats {
    /// Rows in the uploaded bank statement.
    pub total: u64,
    /// Manual transactions still awaiting validation that matched a row.
    pub invalid_found: u64,
    /// Transactions marked validated by this upload.
    pub validated: u64,
}

/// The backend only accepts statements with a `.csv` filename.
pub fn ensure_csv(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !name.ends_with(".csv") {
        bail!("Please upload a CSV file!");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stats() {
        let stats: ValidationStats =
            serde_json::from_str(r#"{"total": 4, "invalid_found": 2, "validated": 1}"#).unwrap();
        assert_eq!(
            stats,
            ValidationStats {
                total: 4,
                invalid_found: 2,
                validated: 1
            }
        );
    }

    #[test]
    fn csv_check_matches_filename_suffix() {
        assert!(ensure_csv(Path::new("/tmp/statement.csv")).is_ok());
        assert!(ensure_csv(Path::new("/tmp/statement.xlsx")).is_err());
        assert!(ensure_csv(Path::new("/tmp/csv")).is_err());
    }
}

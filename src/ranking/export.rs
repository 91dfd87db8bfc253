//! CSV export of the standings
//!
//! Two columns, `QB,Elo`, one row per player in standings order.

use crate::error::{RankerError, Result};
use crate::types::RankedEntry;
use std::path::Path;
use tracing::info;

/// File the export is written to when no path is given
pub const DEFAULT_EXPORT_FILE: &str = "qb_rankings.csv";

pub const CSV_HEADER: &str = "QB,Elo";

/// Quote a field if it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize standings to CSV text
pub fn to_csv(entries: &[RankedEntry]) -> String {
    let mut out = String::with_capacity(16 * (entries.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for entry in entries {
        out.push_str(&csv_field(&entry.player));
        out.push(',');
        out.push_str(&entry.rating.to_string());
        out.push('\n');
    }

    out
}

/// Write standings as CSV to `path`, replacing any existing file
pub fn write_csv(entries: &[RankedEntry], path: &Path) -> Result<()> {
    std::fs::write(path, to_csv(entries)).map_err(|e| RankerError::ExportFailed {
        message: format!("failed to write {}: {}", path.display(), e),
    })?;

    info!("Exported {} players to {}", entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(player: &str, rating: i64) -> RankedEntry {
        RankedEntry {
            player: player.to_string(),
            rating,
        }
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&[entry("Josh Allen", 1516), entry("Bo Nix", 1484)]);
        assert_eq!(csv, "QB,Elo\nJosh Allen,1516\nBo Nix,1484\n");
    }

    #[test]
    fn test_empty_export_has_header() {
        assert_eq!(to_csv(&[]), "QB,Elo\n");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let csv = to_csv(&[entry("Smith, Geno", 1500), entry("\"Broadway\" Joe", 1490)]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[1], "\"Smith, Geno\",1500");
        assert_eq!(lines[2], "\"\"\"Broadway\"\" Joe\",1490");
    }

    #[test]
    fn test_write_csv() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("export.csv");
        write_csv(&[entry("A", 1500)], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "QB,Elo\nA,1500\n");
    }

    #[test]
    fn test_write_csv_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope").join("export.csv");
        let err = write_csv(&[entry("A", 1500)], &path).unwrap_err();
        assert!(err.to_string().starts_with("Export failed"));
    }
}

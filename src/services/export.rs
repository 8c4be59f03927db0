//! CSV export
//!
//! Writes the current filtered, sorted record set of a list view to
//! `~/.care-tui/exports/<view>.csv`.

use crate::config::Config;
use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn export_dir() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("exports"))
}

/// Target path for a view's export file.
pub fn export_path(slug: &str) -> Result<PathBuf> {
    export_dir()
        .map(|dir| dir.join(format!("{}.csv", slug)))
        .ok_or_else(|| anyhow!("could not determine export directory"))
}

pub fn write_csv(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_headers_and_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("exports").join("complaints.csv");

        let headers = vec!["ID".to_string(), "Status".to_string()];
        let rows = vec![
            vec!["123456".to_string(), "Open".to_string()],
            vec!["234567".to_string(), "Resolved".to_string()],
        ];

        write_csv(&path, &headers, &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("ID,Status"));
        assert_eq!(lines.next(), Some("123456,Open"));
        assert_eq!(lines.next(), Some("234567,Resolved"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.csv");

        write_csv(
            &path,
            &["Created".to_string()],
            &[vec!["Jun 1, 2023".to_string()]],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Jun 1, 2023\""));
    }
}

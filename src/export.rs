use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Writer};
use tracing::{debug, info};

/// Write header + rows, replacing any existing file.
pub fn write_rows(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Data rows of a previous output file, header dropped. `None` if the file does not exist.
pub fn read_rows(path: &Path) -> Result<Option<Vec<Vec<String>>>> {
    if !path.exists() {
        debug!("No previous output at {}", path.display());
        return Ok(None);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let rows = rdr
        .records()
        .map(|rec| rec.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(rows))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![
            vec!["iPad".to_string(), "iPadOS 26.0.1".to_string()],
            vec!["Windows".to_string(), "Windows 11, 24H2".to_string()],
        ];
        write_rows(&path, &["Device Type", "Current OS Version"], &rows).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("Device Type,Current OS Version\n"));
        assert!(raw.contains("\"Windows 11, 24H2\""));

        assert_eq!(read_rows(&path).unwrap(), Some(rows));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_rows(&dir.path().join("nope.csv")).unwrap(), None);
    }

    #[test]
    fn ragged_previous_file_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.csv");
        std::fs::write(&path, "A,B,C\nx,y\nx,y,z\n").unwrap();
        let rows = read_rows(&path).unwrap().unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 3);
    }
}

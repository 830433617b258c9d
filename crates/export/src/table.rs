use crate::flatten::FlatTable;
use anyhow::{Context, Result};
use std::path::Path;

/// Write the flat table as a CSV spreadsheet: a header row of the five record
/// fields, then one row per participant. Written once at the end of a run,
/// never incrementally.
pub fn write_table(table: &FlatTable, path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output table: {}", path.display()))?;

    for row in &table.rows {
        writer
            .serialize(row)
            .context("failed to write participant row")?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush output table: {}", path.display()))?;

    Ok(table.rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract::ParticipantRecord;

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("participants.csv");

        let table = FlatTable {
            rows: vec![
                ParticipantRecord {
                    participant_country: "Brazil".to_string(),
                    participant_name: "John Doe".to_string(),
                    participant_prefix: "Mr.".to_string(),
                    participant_job: "Chief of Staff".to_string(),
                    participant_agency_ministry: "Ministry of Environment".to_string(),
                },
                ParticipantRecord {
                    participant_name: "Jane Roe".to_string(),
                    ..Default::default()
                },
            ],
            failed_chunks: vec![],
        };

        let written = write_table(&table, &path).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "participant_country,participant_name,participant_prefix,participant_job,participant_agency_ministry"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Brazil,John Doe,Mr.,Chief of Staff,Ministry of Environment"
        );
        // Missing fields surface as empty cells, not dropped rows.
        assert_eq!(lines.next().unwrap(), ",Jane Roe,,,");
        assert!(lines.next().is_none());
    }
}

use extract::{ChunkOutcome, ParticipantRecord};

/// The flat row set derived from a full result log.
#[derive(Debug, Default)]
pub struct FlatTable {
    pub rows: Vec<ParticipantRecord>,
    /// Indices of chunks whose extraction failed. They contribute no rows but
    /// must be reported, so an operator can re-run extraction for just those
    /// chunks instead of mistaking them for empty pages.
    pub failed_chunks: Vec<usize>,
}

/// Collect every participant record across the outcomes, preserving chunk
/// order and within-chunk record order. No deduplication and no field-level
/// validation: records that appear on both sides of a delimiter split stay
/// duplicated, and missing fields surface as empty cells.
pub fn flatten(outcomes: &[ChunkOutcome]) -> FlatTable {
    let mut table = FlatTable::default();

    for (index, outcome) in outcomes.iter().enumerate() {
        match outcome {
            ChunkOutcome::Extracted { participants } => {
                table.rows.extend(participants.iter().cloned());
            }
            ChunkOutcome::Failed { .. } => table.failed_chunks.push(index),
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants(names: &[&str]) -> ChunkOutcome {
        ChunkOutcome::Extracted {
            participants: names
                .iter()
                .map(|name| ParticipantRecord {
                    participant_name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn rows_come_from_participant_outcomes_only() {
        let outcomes = vec![
            participants(&["a", "b"]),
            ChunkOutcome::failed("timed out"),
            participants(&["c"]),
        ];

        let table = flatten(&outcomes);

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.failed_chunks, vec![1]);
    }

    #[test]
    fn row_order_follows_chunk_then_record_order() {
        let outcomes = vec![participants(&["a", "b"]), participants(&["c", "d"])];

        let names: Vec<_> = flatten(&outcomes)
            .rows
            .iter()
            .map(|r| r.participant_name.clone())
            .collect();

        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn all_failed_outcomes_yield_an_empty_table() {
        let outcomes = vec![
            ChunkOutcome::failed("one"),
            ChunkOutcome::failed("two"),
        ];

        let table = flatten(&outcomes);

        assert!(table.rows.is_empty());
        assert_eq!(table.failed_chunks, vec![0, 1]);
    }
}

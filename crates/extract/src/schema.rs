use serde::{Deserialize, Serialize};

/// One participant as the extraction model reports it.
///
/// All fields are free text and default to the empty string, so a record
/// missing a field becomes an empty cell in the output table instead of
/// rejecting the whole record. Duplicate names across countries or roles are
/// valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    #[serde(default)]
    pub participant_country: String,
    #[serde(default)]
    pub participant_name: String,
    #[serde(default)]
    pub participant_prefix: String,
    #[serde(default)]
    pub participant_job: String,
    #[serde(default)]
    pub participant_agency_ministry: String,
}

/// Outcome of extracting one chunk, in 1:1 correspondence with chunks.
///
/// Serialized untagged so a log record carries either a `participants` key or
/// an `error` key and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkOutcome {
    Extracted { participants: Vec<ParticipantRecord> },
    Failed { error: String },
}

impl ChunkOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

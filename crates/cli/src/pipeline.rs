use anyhow::Result;
use indicatif::ProgressBar;
use tracing::{info, warn};

use export::{flatten, write_table};
use extract::{ChunkOutcome, ParticipantExtractor};
use ingest::{PageSplitter, Rebalancer};
use store::ResultLog;

use crate::config::RunConfig;

/// End-of-run accounting, reported to the operator.
#[derive(Debug)]
pub struct RunSummary {
    pub total_chunks: usize,
    /// How many chunks were already covered by the log when the run started.
    pub resumed_from: usize,
    /// Chunk indices whose extraction failed and contributed no rows.
    pub failed_chunks: Vec<usize>,
    pub rows: usize,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.total_chunks - self.failed_chunks.len()
    }

    pub fn report(&self) {
        info!(
            total_chunks = self.total_chunks,
            resumed_from = self.resumed_from,
            succeeded = self.succeeded(),
            failed = self.failed_chunks.len(),
            rows = self.rows,
            "run complete"
        );
        if !self.failed_chunks.is_empty() {
            warn!(
                chunks = ?self.failed_chunks,
                "these chunks failed extraction and contributed no rows"
            );
        }
    }
}

/// Drive the whole pipeline: ingest, resume bookkeeping, the sequential
/// extract-then-persist loop, and the final flatten-and-export pass.
///
/// Chunks are processed strictly one at a time; the outcome for chunk `i` is
/// persisted before the call for chunk `i + 1` starts, so the log prefix is
/// always consistent with a contiguous prefix of chunks. Extraction failures
/// are contained per chunk; log failures abort the run.
pub async fn run<E: ParticipantExtractor>(config: &RunConfig, extractor: &E) -> Result<RunSummary> {
    let splitter = PageSplitter::default();
    let rebalancer = Rebalancer::new(config.size_threshold, config.delimiters.clone());
    let chunks = ingest::ingest_file(&config.input_path, &splitter, &rebalancer).await?;

    let log = ResultLog::new(&config.log_path);
    let done = log.resume_index()?;
    if done > chunks.len() {
        anyhow::bail!(
            "result log {} holds {} records but the document only yields {} chunks; \
             it belongs to a different document or configuration",
            log.path().display(),
            done,
            chunks.len()
        );
    }
    if done > 0 {
        info!(done, total = chunks.len(), "resuming from existing result log");
    }

    let progress = ProgressBar::new(chunks.len() as u64);
    progress.inc(done as u64);

    for (index, chunk) in chunks.iter().enumerate().skip(done) {
        let outcome = extractor.extract(&chunk.text).await;
        if let ChunkOutcome::Failed { error } = &outcome {
            warn!(chunk = index, error = %error, "chunk extraction failed");
        }
        // Persist before advancing, so an interruption loses at most the
        // chunk in flight.
        log.append(&outcome)?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    let outcomes = log.read_all()?;
    let table = flatten(&outcomes);
    let rows = write_table(&table, &config.output_path)?;

    Ok(RunSummary {
        total_chunks: chunks.len(),
        resumed_from: done,
        failed_chunks: table.failed_chunks,
        rows,
    })
}

pub mod chunk;
pub mod reader;
pub mod rebalancer;
pub mod splitter;

pub use chunk::Chunk;
pub use reader::FileReader;
pub use rebalancer::{DEFAULT_SIZE_THRESHOLD, Rebalancer};
pub use splitter::{CONTINUATION_MARKER, PageSplitter};

use anyhow::Result;
use std::path::Path;

/// Full ingestion pass: read the transcript, split it at page-continuation
/// headers, then rebalance oversized chunks.
pub async fn ingest_file(
    path: &Path,
    splitter: &PageSplitter,
    rebalancer: &Rebalancer,
) -> Result<Vec<Chunk>> {
    let content = FileReader::read_source(path).await?;
    Ok(rebalancer.rebalance(splitter.split(&content)))
}

use crate::chunk::Chunk;

/// Default chunk length limit before rebalancing. Extraction quality degrades
/// on long inputs, so pages past this size get a secondary split.
pub const DEFAULT_SIZE_THRESHOLD: usize = 4000;

/// Subdivides oversized chunks at curated delimiter strings.
///
/// The delimiter list is document-specific configuration (e.g. a country
/// heading like `"\n Haiti \n"` that marks a natural secondary boundary); no
/// generic long-text segmentation is attempted.
pub struct Rebalancer {
    size_threshold: usize,
    delimiters: Vec<String>,
}

impl Rebalancer {
    pub fn new(size_threshold: usize, delimiters: Vec<String>) -> Self {
        Self {
            size_threshold,
            delimiters,
        }
    }

    /// Pass chunks through in order, splitting any chunk whose length exceeds
    /// the threshold at the first occurrence of the first configured delimiter
    /// found in its text. Split parts appear consecutively in split order.
    pub fn rebalance(&self, chunks: Vec<Chunk>) -> Vec<Chunk> {
        let mut rebalanced = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            if chunk.length > self.size_threshold {
                rebalanced.extend(self.split_oversized(chunk));
            } else {
                rebalanced.push(chunk);
            }
        }
        rebalanced
    }

    fn split_oversized(&self, chunk: Chunk) -> Vec<Chunk> {
        for delimiter in &self.delimiters {
            if let Some(pos) = chunk.text.find(delimiter.as_str()) {
                let head = chunk.text[..pos].to_string();
                // The delimiter stays on the second part so no boundary text
                // is lost.
                let tail = chunk.text[pos..].to_string();
                return vec![Chunk::new(head), Chunk::new(tail)];
            }
        }
        // None of the delimiters occur. Pass the chunk through unchanged and
        // let the extractor do its best on the long input.
        vec![chunk]
    }
}

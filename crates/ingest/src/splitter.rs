use crate::chunk::Chunk;

/// Default page-continuation marker. The source document repeats its running
/// list across pages, each new page re-announcing itself with a header line
/// ending in this phrase.
pub const CONTINUATION_MARKER: &str = "(continued)";

/// Splits raw text into chunks along page-continuation boundaries.
pub struct PageSplitter {
    marker: String,
}

impl Default for PageSplitter {
    fn default() -> Self {
        Self {
            marker: CONTINUATION_MARKER.to_string(),
        }
    }
}

impl PageSplitter {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Split the input at lines whose trailing-whitespace-trimmed form ends
    /// with the marker. Such a line closes the current chunk and opens a new
    /// one that starts with the marker line itself.
    ///
    /// Line terminators are kept with their lines, so concatenating the chunk
    /// texts in order reproduces the input exactly.
    pub fn split(&self, raw: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for line in raw.split_inclusive('\n') {
            if line.trim_end().ends_with(&self.marker) && !current.is_empty() {
                chunks.push(Chunk::new(std::mem::take(&mut current)));
            }
            current.push_str(line);
        }
        if !current.is_empty() {
            chunks.push(Chunk::new(current));
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker_yields_single_chunk() {
        let text = "Mr. John Doe, Ambassador\nMs. Jane Roe, Chief of Staff\n";
        let chunks = PageSplitter::default().split(text);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn marker_line_starts_a_new_chunk() {
        let text = "Albania\nMr. A\nAlbania (continued)\nMr. B\n";
        let chunks = PageSplitter::default().split(text);

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].text.starts_with("Albania\n"));
        assert!(chunks[1].text.starts_with("Albania (continued)"));
    }

    #[test]
    fn marker_on_first_line_yields_one_chunk_per_marker() {
        let text = "Albania (continued)\nMr. A\nBrazil (continued)\nMr. B\n";
        let chunks = PageSplitter::default().split(text);

        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn marker_with_trailing_whitespace_still_splits() {
        let text = "Mr. A\nAlbania (continued)   \nMr. B\n";
        let chunks = PageSplitter::default().split(text);

        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn splitting_is_lossless() {
        let text = "header\r\nAlbania (continued)\nMr. A\nBrazil (continued)\nMs. B";
        let chunks = PageSplitter::default().split(text);
        let rejoined: String = chunks.iter().map(|c| c.text.as_str()).collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(rejoined, text);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(PageSplitter::default().split("").is_empty());
    }
}

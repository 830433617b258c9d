use serde::{Deserialize, Serialize};

/// A bounded unit of source text submitted as one extraction request.
///
/// `length` is the character count of `text`, computed at construction.
/// Chunks are created in document order; the position of a chunk in the run's
/// sequence ties it to its record in the result log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub length: usize,
}

impl Chunk {
    pub fn new(text: String) -> Self {
        let length = text.chars().count();
        Self { text, length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        let chunk = Chunk::new("Mr. Müller".to_string());
        assert_eq!(chunk.length, 10);
        assert!(chunk.text.len() > chunk.length);
    }
}

use crate::{Error, Result};

/// Word-wrap splitter. Produces the fewest chunks such that no chunk is
/// longer than `max_chars` characters, breaking only at whitespace. A single
/// word longer than the limit becomes its own oversized chunk.
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    max_chars: usize,
}

impl TextChunker {
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(Error::Config("max_chars must be greater than 0".to_string()));
        }
        Ok(Self { max_chars })
    }

    pub fn chunk(&self, text: &str) -> Vec<String> {
        let normalized = text.replace('\n', " ");

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in normalized.split_whitespace() {
            let word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len <= self.max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }

            if current_len > 0 {
                chunks.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            current_len = word_len;
        }

        if current_len > 0 {
            chunks.push(current);
        }

        chunks
    }
}

//! Resolution of structural redline positions to token indices and byte offsets.

use crate::token::{positions, tokenize};
use policykit_types::RedlinePosition;

/// Position lookup table for one text.
///
/// Built with the same cursor walk the redline generator uses, so every position it
/// stamps resolves here. Build once per text and reuse it for many lookups.
#[derive(Clone, Debug)]
pub struct PositionIndex {
    /// Token addresses in walk order; strictly increasing.
    positions: Vec<RedlinePosition>,
    spans: Vec<(usize, usize)>,
    end: RedlinePosition,
    text_len: usize,
}

impl PositionIndex {
    pub fn build(text: &str) -> Self {
        let tokens = tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        let (positions, end) = positions(&texts);
        Self {
            positions,
            spans: tokens.iter().map(|t| (t.start, t.end)).collect(),
            end,
            text_len: text.len(),
        }
    }

    /// Number of tokens, break markers included.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Token index at `position`. The address just past the last token resolves to
    /// `len()`.
    pub fn token_index(&self, position: &RedlinePosition) -> Option<usize> {
        if *position == self.end {
            return Some(self.len());
        }
        self.positions.binary_search(position).ok()
    }

    /// Byte span of the token at `index`.
    pub fn span(&self, index: usize) -> Option<(usize, usize)> {
        self.spans.get(index).copied()
    }

    /// Byte offset where the token at `position` starts, or the text length for the
    /// end address.
    pub fn byte_offset(&self, position: &RedlinePosition) -> Option<usize> {
        let index = self.token_index(position)?;
        Some(self.span(index).map_or(self.text_len, |(start, _)| start))
    }
}

/// One-off lookup. Rebuilds the index on every call; use [`PositionIndex`] directly when
/// resolving many positions against the same text.
pub fn find_text_position(text: &str, position: &RedlinePosition) -> Option<usize> {
    PositionIndex::build(text).byte_offset(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(paragraph: u32, sentence: u32, word: u32) -> RedlinePosition {
        RedlinePosition {
            paragraph,
            sentence,
            word,
        }
    }

    #[test]
    fn resolves_words_across_sentences_and_paragraphs() {
        let text = "Staff may use AI. Students may not.\n\nParents are notified.";
        assert_eq!(find_text_position(text, &at(0, 0, 0)), Some(0));
        assert_eq!(find_text_position(text, &at(0, 0, 2)), Some(10));
        assert_eq!(find_text_position(text, &at(0, 1, 0)), Some(18));
        assert_eq!(find_text_position(text, &at(1, 0, 0)), Some(37));
        assert_eq!(find_text_position(text, &at(1, 0, 1)), Some(45));
    }

    #[test]
    fn end_address_resolves_to_text_length() {
        let text = "One two";
        let index = PositionIndex::build(text);
        assert_eq!(index.token_index(&at(0, 0, 2)), Some(2));
        assert_eq!(index.byte_offset(&at(0, 0, 2)), Some(text.len()));
    }

    #[test]
    fn unknown_positions_do_not_resolve() {
        let index = PositionIndex::build("One two");
        assert_eq!(index.token_index(&at(4, 0, 0)), None);
        assert_eq!(find_text_position("", &at(0, 0, 1)), None);
        assert_eq!(find_text_position("", &at(0, 0, 0)), Some(0));
    }
}

//! Word tokens with paragraph-break markers, shared by redline generation, application,
//! and position lookup.

use crate::segment::PARAGRAPH_BREAK;
use policykit_types::RedlinePosition;

/// Text of the marker token placed between paragraphs.
pub(crate) const BREAK: &str = "\n\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    /// Byte span in the source. For a break this covers the gap between paragraphs.
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn is_break(&self) -> bool {
        self.text == BREAK
    }
}

pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut paragraphs: Vec<(usize, usize)> = Vec::new();
    let mut last = 0;
    for m in PARAGRAPH_BREAK.find_iter(text) {
        paragraphs.push((last, m.start()));
        last = m.end();
    }
    paragraphs.push((last, text.len()));

    let mut tokens: Vec<Token<'_>> = Vec::new();
    for (start, end) in paragraphs {
        let words = words_in(text, start, end);
        let Some(first) = words.first() else {
            continue;
        };
        if let Some(prev) = tokens.last() {
            tokens.push(Token {
                text: BREAK,
                start: prev.end,
                end: first.start,
            });
        }
        tokens.extend(words);
    }
    tokens
}

fn words_in(text: &str, start: usize, end: usize) -> Vec<Token<'_>> {
    let mut words = Vec::new();
    let mut word_start: Option<usize> = None;
    for (offset, ch) in text[start..end].char_indices() {
        let at = start + offset;
        match (ch.is_whitespace(), word_start) {
            (true, Some(s)) => {
                words.push(Token {
                    text: &text[s..at],
                    start: s,
                    end: at,
                });
                word_start = None;
            }
            (false, None) => word_start = Some(at),
            _ => {}
        }
    }
    if let Some(s) = word_start {
        words.push(Token {
            text: &text[s..end],
            start: s,
            end,
        });
    }
    words
}

/// Split change text produced by [`join_for_change`] back into tokens.
pub(crate) fn split_change_text(text: &str) -> Vec<&str> {
    text.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Single-space join; break tokens survive because they contain no spaces.
pub(crate) fn join_for_change(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// Readable text: words separated by spaces, paragraphs by a blank line.
pub(crate) fn render_tokens(tokens: &[&str]) -> String {
    let mut out = String::new();
    let mut after_word = false;
    for t in tokens {
        if *t == BREAK {
            out.push_str(BREAK);
            after_word = false;
        } else {
            if after_word {
                out.push(' ');
            }
            out.push_str(t);
            after_word = true;
        }
    }
    out
}

/// Walks tokens and tracks the structural address of the next one.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Cursor {
    pub position: RedlinePosition,
}

impl Cursor {
    pub fn advance(&mut self, token: &str) {
        let p = &mut self.position;
        if token == BREAK {
            p.paragraph += 1;
            p.sentence = 0;
            p.word = 0;
        } else if token.ends_with(['.', '!', '?']) {
            p.sentence += 1;
            p.word = 0;
        } else {
            p.word += 1;
        }
    }
}

/// Address of every token, plus the address just past the last one.
pub(crate) fn positions(tokens: &[&str]) -> (Vec<RedlinePosition>, RedlinePosition) {
    let mut cursor = Cursor::default();
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        out.push(cursor.position);
        cursor.advance(t);
    }
    (out, cursor.position)
}

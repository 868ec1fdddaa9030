//! Tiny scanner that finds where every JSON string literal starts.
//!
//! It runs over text that serde_json has already accepted, so it does not
//! validate anything. It only has to tell string contents apart from the
//! rest of the document.
//
//  Lexical items that matter here:
//
//      String   ::= '"' ( '\' any | [^"\] )* '"'
//      Other    ::= everything outside a string (skipped)
//
//  Keys and values are both strings; the scanner yields them in document
//  order, which is the order serde_json (with `preserve_order`) walks them.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::model::Position;

#[derive(Clone)]
pub struct StringStarts<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> StringStarts<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.char_indices().peekable(),
        }
    }

    /// Consume the body of a string whose opening quote was just read.
    fn skip_string_body(&mut self) {
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    self.chars.next();
                }
                '"' => return,
                _ => {}
            }
        }
    }
}

impl Iterator for StringStarts<'_> {
    /// Byte offset of the opening quote.
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        for (offset, c) in self.chars.by_ref() {
            if c == '"' {
                self.skip_string_body();
                return Some(offset);
            }
        }
        None
    }
}

/// Line and column of the character at byte `offset`.
///
/// Rescans the prefix on every call; documents are small and this only runs
/// at build time.
pub fn position_at(src: &str, offset: usize) -> Position {
    let prefix = &src[..offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix[line_start..].chars().count() + 1;
    Position { line, column }
}

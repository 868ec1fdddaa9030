//! Legacy text encoding of the `states` section.
//!
//! Each line may declare several comma-separated names and may end with a
//! `#` comment, e.g. `"actual_x, actual_y # smoothed position"`.

use crate::error::{GenError, Result};
use crate::parser::Node;

/// Split one state line into bare identifiers.
pub fn split_state_line(line: &str) -> Vec<String> {
    let code = line.split('#').next().unwrap_or_default();
    code.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// The text of one `states` entry: a string leaf or a `[position, text]` pair.
pub fn state_line(index: usize, node: &Node) -> Result<&str> {
    match node {
        Node::Str(s) => Ok(&s.value),
        Node::Array(pair) if pair.len() == 2 => {
            let text = &pair[1];
            text.as_str().map(|s| s.value.as_str()).ok_or_else(|| {
                GenError::schema(
                    format!("states[{index}]"),
                    format!("state text must be a string, found {}", text.kind()),
                )
            })
        }
        other => Err(GenError::schema(
            format!("states[{index}]"),
            format!(
                "expected a string or a [position, text] pair, found {}",
                other.kind()
            ),
        )),
    }
}

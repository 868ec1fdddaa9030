//! Position-annotating JSON loader.
//!
//! Decoding happens in two passes over the same text:
//!   1. serde_json decodes the document (and reports syntax errors);
//!   2. `lexer::StringStarts` lists the offset of every string literal.
//!
//! Walking the decoded value in document order pairs each string with the
//! next offset, so every string leaf comes out as an `Annotated`. Object keys
//! consume an offset too but are stored as plain strings.

pub mod lexer;

use std::path::Path;

use serde_json::{Number, Value};

use crate::error::{GenError, Result};
use crate::model::Annotated;
use lexer::{StringStarts, position_at};

/// A decoded JSON value whose string leaves carry their source position.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    Str(Annotated),
    Array(Vec<Node>),
    /// Keys in document order.
    Object(Vec<(String, Node)>),
}

impl Node {
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&Annotated> {
        match self {
            Node::Str(s) => Some(s),
            _ => None,
        }
    }

    /// JSON kind name, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::Str(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }
}

/// Read and annotate the definitions document at `path`.
pub fn load(path: &Path) -> Result<Node> {
    let json = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    log::info!("Loaded {}, size: {} bytes", path.display(), json.len());
    let doc = parse_annotated(&json)?;
    log::info!("JSON parsed successfully");
    Ok(doc)
}

/// Decode `json`, tagging every string leaf with its line and column.
pub fn parse_annotated(json: &str) -> Result<Node> {
    let root: Value = serde_json::from_str(json)?;

    let mut annotator = Annotator {
        src: json,
        starts: StringStarts::new(json),
    };
    let node = annotator.annotate(root)?;

    // Duplicate keys are collapsed by the decoder, leaving literals unclaimed.
    if let Some(offset) = annotator.starts.next() {
        let pos = position_at(json, offset);
        return Err(GenError::Parse {
            line: pos.line,
            column: pos.column,
            message: "duplicate object key".into(),
        });
    }
    Ok(node)
}

struct Annotator<'a> {
    src: &'a str,
    starts: StringStarts<'a>,
}

impl Annotator<'_> {
    fn annotate(&mut self, value: Value) -> Result<Node> {
        Ok(match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::Str(self.claim(s)?),
            Value::Array(items) => Node::Array(
                items
                    .into_iter()
                    .map(|v| self.annotate(v))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(map) => {
                let mut fields = Vec::with_capacity(map.len());
                for (key, v) in map {
                    // keys keep no position
                    let key = self.claim(key)?.value;
                    fields.push((key, self.annotate(v)?));
                }
                Node::Object(fields)
            }
        })
    }

    fn claim(&mut self, value: String) -> Result<Annotated> {
        let offset = self.starts.next().ok_or_else(|| GenError::Parse {
            line: 0,
            column: 0,
            message: format!("string {value:?} has no matching literal in the source"),
        })?;
        Ok(Annotated::new(position_at(self.src, offset), value))
    }
}

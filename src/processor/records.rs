//! Typed record construction from annotated document entries.

use crate::error::{GenError, Result};
use crate::model::{Annotated, Input, Real, Setting};
use crate::parser::Node;

/// Field names of a setting entry, in struct order.
pub const SETTING_FIELDS: &[&str] = &[
    "internal_name",
    "tcomment_name", // comment for translators (optional)
    "displayed_name",
    "constant",
    "minimum",
    "default",
    "maximum",
    "tcomment_tooltip", // comment for translators (optional)
    "tooltip",
];

/// Field names of an input entry, in struct order.
pub const INPUT_FIELDS: &[&str] = &[
    "id",
    "hard_minimum",
    "soft_minimum",
    "normal",
    "soft_maximum",
    "hard_maximum",
    "tcomment_name",
    "displayed_name",
    "tcomment_tooltip",
    "tooltip",
];

const OPTIONAL_FIELDS: &[&str] = &["tcomment_name", "tcomment_tooltip"];

pub fn setting_from_entry(index: usize, node: &Node) -> Result<Setting> {
    let e = Entry::new(format!("settings[{index}]"), node, SETTING_FIELDS)?;

    let internal_name = e.string("internal_name")?;
    let displayed_name = e.string("displayed_name")?;
    Ok(Setting {
        cname: internal_name.value.clone(),
        display_name: displayed_name.value.clone(),
        internal_name,
        tcomment_name: e.opt_string("tcomment_name")?,
        displayed_name,
        constant: e.boolean("constant")?,
        minimum: e.nullable_real("minimum")?,
        default: e.nullable_real("default")?,
        maximum: e.nullable_real("maximum")?,
        tcomment_tooltip: e.opt_string("tcomment_tooltip")?,
        tooltip: e.string("tooltip")?,
    })
}

pub fn input_from_entry(index: usize, node: &Node) -> Result<Input> {
    let e = Entry::new(format!("inputs[{index}]"), node, INPUT_FIELDS)?;

    let id = e.string("id")?;
    let displayed_name = e.string("displayed_name")?;
    Ok(Input {
        cname: id.value.clone(),
        display_name: displayed_name.value.clone(),
        id,
        hard_minimum: e.nullable_real("hard_minimum")?,
        soft_minimum: e.real("soft_minimum")?,
        normal: e.nullable_real("normal")?,
        soft_maximum: e.real("soft_maximum")?,
        hard_maximum: e.nullable_real("hard_maximum")?,
        tcomment_name: e.opt_string("tcomment_name")?,
        displayed_name,
        tcomment_tooltip: e.opt_string("tcomment_tooltip")?,
        tooltip: e.string("tooltip")?,
    })
}

// ─────────────────────────────────────────────────────
/// Helper: one key→value entry, checked against a fixed field list.
struct Entry<'a> {
    context: String,
    fields: &'a [(String, Node)],
}

impl<'a> Entry<'a> {
    fn new(context: String, node: &'a Node, allowed: &[&str]) -> Result<Self> {
        let fields = node.as_object().ok_or_else(|| {
            GenError::schema(&context, format!("expected an object, found {}", node.kind()))
        })?;

        if let Some((key, _)) = fields.iter().find(|(k, _)| !allowed.contains(&k.as_str())) {
            return Err(GenError::schema(&context, format!("unexpected field `{key}`")));
        }
        // report the first missing field in declaration order
        if let Some(missing) = allowed
            .iter()
            .copied()
            .filter(|f| !OPTIONAL_FIELDS.contains(f))
            .find(|f| !fields.iter().any(|(k, _)| k.as_str() == *f))
        {
            return Err(GenError::schema(&context, format!("missing field `{missing}`")));
        }

        Ok(Self { context, fields })
    }

    fn get(&self, key: &str) -> Option<&'a Node> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn wrong_kind(&self, key: &str, expected: &str, found: &Node) -> GenError {
        GenError::schema(
            &self.context,
            format!("field `{key}` must be {expected}, found {}", found.kind()),
        )
    }

    /// Required field; presence is checked in `new`.
    fn required(&self, key: &str) -> Result<&'a Node> {
        self.get(key)
            .ok_or_else(|| GenError::schema(&self.context, format!("missing field `{key}`")))
    }

    fn string(&self, key: &str) -> Result<Annotated> {
        let node = self.required(key)?;
        node.as_str()
            .cloned()
            .ok_or_else(|| self.wrong_kind(key, "a string", node))
    }

    /// Absent and `null` both mean "no value".
    fn opt_string(&self, key: &str) -> Result<Option<Annotated>> {
        match self.get(key) {
            None | Some(Node::Null) => Ok(None),
            Some(Node::Str(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.wrong_kind(key, "a string or null", other)),
        }
    }

    fn boolean(&self, key: &str) -> Result<bool> {
        match self.required(key)? {
            Node::Bool(b) => Ok(*b),
            other => Err(self.wrong_kind(key, "a boolean", other)),
        }
    }

    fn real(&self, key: &str) -> Result<Real> {
        match self.required(key)? {
            Node::Number(n) => Ok(Real::new(n.clone())),
            other => Err(self.wrong_kind(key, "a number", other)),
        }
    }

    fn nullable_real(&self, key: &str) -> Result<Option<Real>> {
        match self.required(key)? {
            Node::Null => Ok(None),
            Node::Number(n) => Ok(Some(Real::new(n.clone()))),
            other => Err(self.wrong_kind(key, "a number or null", other)),
        }
    }
}

//! Record schema and validation.
//!
//! Turns the annotated document into validated `Definitions`. Any schema or
//! validation failure aborts the whole build.
pub mod records;
pub mod states;
pub mod validate;

use std::collections::HashSet;

use crate::error::{GenError, Result};
use crate::model::Definitions;
use crate::parser::Node;
use validate::Validate;

/// Build and validate every record of the document, preserving section order.
pub fn build(doc: &Node) -> Result<Definitions> {
    if doc.as_object().is_none() {
        return Err(GenError::schema(
            "document",
            format!("expected an object, found {}", doc.kind()),
        ));
    }

    let mut inputs = Vec::new();
    for (i, entry) in section(doc, "inputs")?.iter().enumerate() {
        let input = records::input_from_entry(i, entry)?;
        input.validate()?;
        log::debug!("input {} ok", input.cname);
        inputs.push(input);
    }

    let mut settings = Vec::new();
    for (i, entry) in section(doc, "settings")?.iter().enumerate() {
        let setting = records::setting_from_entry(i, entry)?;
        setting.validate()?;
        log::debug!("setting {} ok", setting.cname);
        settings.push(setting);
    }

    let mut states = Vec::new();
    for (i, entry) in section(doc, "states")?.iter().enumerate() {
        states.extend(states::split_state_line(states::state_line(i, entry)?));
    }

    unique("inputs", inputs.iter().map(|i| i.cname.as_str()))?;
    unique("settings", settings.iter().map(|s| s.cname.as_str()))?;
    unique("states", states.iter().map(String::as_str))?;

    log::info!(
        "Found {} inputs, {} settings, {} states",
        inputs.len(),
        settings.len(),
        states.len()
    );

    Ok(Definitions {
        settings,
        inputs,
        states,
    })
}

fn section<'a>(doc: &'a Node, key: &str) -> Result<&'a [Node]> {
    let node = doc
        .get(key)
        .ok_or_else(|| GenError::schema("document", format!("missing section `{key}`")))?;
    node.as_array().ok_or_else(|| {
        GenError::schema(
            "document",
            format!("section `{key}` must be an array, found {}", node.kind()),
        )
    })
}

/// Identifiers become upper-cased C enum members, so each may appear only
/// once regardless of case.
fn unique<'a>(section: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.to_uppercase()) {
            return Err(GenError::schema(
                section,
                format!("duplicate identifier `{name}`"),
            ));
        }
    }
    Ok(())
}

//! Emit the C headers consumed by the brush engine.
//!
//! Everything here is a pure string transformation; writing to disk lives in
//! `writer::file`.

use crate::model::{Annotated, Definitions, Input, Real, Setting};

const INDENT: &str = "    ";

/// Which infinity stands in for a missing bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbounded {
    /// Minimum-like slot: `-FLT_MAX`.
    Below,
    /// Maximum-like slot: `FLT_MAX`.
    Above,
}

// ---------------------------------------------------------------
// Field stringification
// ---------------------------------------------------------------

/// C string literal with newlines and double quotes escaped.
pub fn stringify(value: &str) -> String {
    let escaped = value.replace('\n', "\\n").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

pub fn floatify(value: Option<&Real>, unbounded: Unbounded) -> String {
    match (value, unbounded) {
        (Some(v), _) => v.to_string(),
        (None, Unbounded::Above) => "FLT_MAX".into(),
        (None, Unbounded::Below) => "-FLT_MAX".into(),
    }
}

pub fn boolify(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

/// Translatable string: `N_("…")` preceded by its document location and,
/// optionally, a comment for translators.
pub fn gettextify(annotated: &Annotated, source_name: &str, comment: Option<&str>) -> String {
    let marked = format!(
        "/*: ../{source_name}:{line} */ N_({text})",
        line = annotated.pos.line,
        text = stringify(&annotated.value)
    );
    match comment {
        Some(c) if !c.is_empty() => format!("/* {c} */ {marked}"),
        _ => marked,
    }
}

/// Translator comment, extended by an optional per-string addendum.
///
/// A present addendum is always appended, even when empty.
pub fn tcomment(base: &str, addendum: Option<&Annotated>) -> String {
    match addendum {
        Some(a) => format!("{base} - {}", a.value),
        None => base.to_string(),
    }
}

pub fn tooltip_comment(name: &str, kind: &str, addendum: Option<&Annotated>) -> String {
    tcomment(&format!("Tooltip for the \"{name}\" brush {kind}"), addendum)
}

// ---------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------

/// `typedef enum { … } name;` with one member per line and a trailing count.
pub fn generate_enum(
    enum_name: &str,
    prefix: &str,
    count_name: &str,
    items: &[(usize, String)],
) -> String {
    let mut entries = Vec::with_capacity(items.len() + 1);
    for (idx, (ordinal, suffix)) in items.iter().enumerate() {
        debug_assert_eq!(idx, *ordinal, "enum members out of order");
        entries.push(format!("{INDENT}{prefix}{}", suffix.to_uppercase()));
    }
    entries.push(format!("{INDENT}{count_name}"));

    format!("typedef enum {{\n{}\n}} {enum_name};\n", entries.join(",\n"))
}

/// `static T name[] = { {…}, … };`, one initializer per line.
pub fn generate_static_struct_array(
    struct_type: &str,
    instance_name: &str,
    entries: &[Vec<String>],
) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|fields| format!("{INDENT}{{{}}}", fields.join(", ")))
        .collect();
    lines.push("\n".into());

    format!(
        "static {struct_type} {instance_name}[] = {{\n{}}};\n",
        lines.join(", \n")
    )
}

pub fn input_info_struct(i: &Input, source_name: &str) -> Vec<String> {
    let name_comment = tcomment("Brush input", i.tcomment_name.as_ref());
    let tooltip = tooltip_comment(&i.display_name, "input", i.tcomment_tooltip.as_ref());
    vec![
        stringify(&i.cname),
        floatify(i.hard_minimum.as_ref(), Unbounded::Below),
        floatify(Some(&i.soft_minimum), Unbounded::Below),
        floatify(i.normal.as_ref(), Unbounded::Above),
        floatify(Some(&i.soft_maximum), Unbounded::Above),
        floatify(i.hard_maximum.as_ref(), Unbounded::Above),
        gettextify(&i.displayed_name, source_name, Some(&name_comment)),
        gettextify(&i.tooltip, source_name, Some(&tooltip)),
    ]
}

pub fn setting_info_struct(s: &Setting, source_name: &str) -> Vec<String> {
    let name_comment = tcomment("Brush setting", s.tcomment_name.as_ref());
    let tooltip = tooltip_comment(&s.display_name, "setting", s.tcomment_tooltip.as_ref());
    vec![
        stringify(&s.cname),
        gettextify(&s.displayed_name, source_name, Some(&name_comment)),
        boolify(s.constant).to_string(),
        floatify(s.minimum.as_ref(), Unbounded::Below),
        floatify(s.default.as_ref(), Unbounded::Above),
        floatify(s.maximum.as_ref(), Unbounded::Above),
        gettextify(&s.tooltip, source_name, Some(&tooltip)),
    ]
}

// ---------------------------------------------------------------
// Header files
// ---------------------------------------------------------------

/// Include-guard token: alphanumerics upper-cased, everything else `_`.
pub fn header_guard_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .to_uppercase()
}

pub fn header_guarded(file_name: &str, content: &str) -> String {
    let guard = header_guard_name(file_name);
    format!("#ifndef {guard}\n#define {guard}\n{content}\n#endif\n")
}

/// Internal header body: setting info array, then input info array.
pub fn generate_internal_settings_code(defs: &Definitions, source_name: &str) -> String {
    let settings: Vec<Vec<String>> = defs
        .settings
        .iter()
        .map(|s| setting_info_struct(s, source_name))
        .collect();
    let inputs: Vec<Vec<String>> = defs
        .inputs
        .iter()
        .map(|i| input_info_struct(i, source_name))
        .collect();

    let mut content = String::new();
    content += &generate_static_struct_array(
        "MyPaintBrushSettingInfo",
        "settings_info_array",
        &settings,
    );
    content += "\n";
    content += &generate_static_struct_array("MyPaintBrushInputInfo", "inputs_info_array", &inputs);
    content
}

/// Public header body: input, setting and state enums.
pub fn generate_public_settings_code(defs: &Definitions) -> String {
    fn numbered<'a>(names: impl Iterator<Item = &'a String>) -> Vec<(usize, String)> {
        names.cloned().enumerate().collect()
    }

    let mut content = String::new();
    content += &generate_enum(
        "MyPaintBrushInput",
        "MYPAINT_BRUSH_INPUT_",
        "MYPAINT_BRUSH_INPUTS_COUNT",
        &numbered(defs.inputs.iter().map(|i| &i.cname)),
    );
    content += "\n";
    content += &generate_enum(
        "MyPaintBrushSetting",
        "MYPAINT_BRUSH_SETTING_",
        "MYPAINT_BRUSH_SETTINGS_COUNT",
        &numbered(defs.settings.iter().map(|s| &s.cname)),
    );
    content += "\n";
    content += &generate_enum(
        "MyPaintBrushState",
        "MYPAINT_BRUSH_STATE_",
        "MYPAINT_BRUSH_STATES_COUNT",
        &numbered(defs.states.iter()),
    );
    content += "\n";
    content
}

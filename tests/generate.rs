use std::fs;
use std::path::{Path, PathBuf};

use brushgen::writer::c::header_guard_name;
use brushgen::{GenError, WriteOutcome, generate, parser, processor};
use pretty_assertions::assert_eq;

const GENERATOR: &str = "brushgen-test";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn guarded(path: &Path, body: &str) -> String {
    let guard = header_guard_name(&path.to_string_lossy());
    format!("// DO NOT EDIT - autogenerated by {GENERATOR}\n\n#ifndef {guard}\n#define {guard}\n{body}\n#endif\n")
}

#[test]
fn generates_minimal_headers() {
    let dir = tempfile::tempdir().unwrap();
    let public = dir.path().join("mypaint-brush-settings-gen.h");
    let internal = dir.path().join("brushsettings-gen.h");

    let outcomes = generate(&fixture("minimal.json"), &public, &internal, GENERATOR).unwrap();
    assert_eq!(outcomes, (WriteOutcome::Written, WriteOutcome::Written));

    let public_body = concat!(
        "typedef enum {\n",
        "    MYPAINT_BRUSH_INPUT_PRESSURE,\n",
        "    MYPAINT_BRUSH_INPUTS_COUNT\n",
        "} MyPaintBrushInput;\n",
        "\n",
        "typedef enum {\n",
        "    MYPAINT_BRUSH_SETTING_OPAQUE,\n",
        "    MYPAINT_BRUSH_SETTING_OFFSET_Y,\n",
        "    MYPAINT_BRUSH_SETTINGS_COUNT\n",
        "} MyPaintBrushSetting;\n",
        "\n",
        "typedef enum {\n",
        "    MYPAINT_BRUSH_STATE_STROKE,\n",
        "    MYPAINT_BRUSH_STATES_COUNT\n",
        "} MyPaintBrushState;\n",
        "\n",
    );
    assert_eq!(fs::read_to_string(&public).unwrap(), guarded(&public, public_body));

    let internal_body = concat!(
        "static MyPaintBrushSettingInfo settings_info_array[] = {\n",
        "    {\"opaque\", /* Brush setting */ /*: ../minimal.json:17 */ N_(\"Opacity\"), FALSE, 0.0, 1.0, 2.0, ",
        "/* Tooltip for the \"Opacity\" brush setting */ /*: ../minimal.json:22 */ ",
        "N_(\"0 means brush is transparent, 1 fully visible\\n(also known as alpha or opacity)\")}, \n",
        "    {\"offset_y\", /* Brush setting - vertical */ /*: ../minimal.json:27 */ N_(\"Offset Y\"), TRUE, -FLT_MAX, 0, FLT_MAX, ",
        "/* Tooltip for the \"Offset Y\" brush setting */ /*: ../minimal.json:32 */ ",
        "N_(\"Moves the dabs \\\"up\\\" or down.\")}, \n",
        "\n",
        "};\n",
        "\n",
        "static MyPaintBrushInputInfo inputs_info_array[] = {\n",
        "    {\"pressure\", 0.0, 0.0, 0.4, 1.0, FLT_MAX, ",
        "/* Brush input */ /*: ../minimal.json:10 */ N_(\"Pressure\"), ",
        "/* Tooltip for the \"Pressure\" brush input */ /*: ../minimal.json:11 */ ",
        "N_(\"The pressure reported by the tablet.\")}, \n",
        "\n",
        "};\n",
    );
    assert_eq!(
        fs::read_to_string(&internal).unwrap(),
        guarded(&internal, internal_body)
    );
}

#[test]
fn second_run_is_up_to_date() {
    let dir = tempfile::tempdir().unwrap();
    let public = dir.path().join("public.h");
    let internal = dir.path().join("internal.h");
    let defs = fixture("minimal.json");

    generate(&defs, &public, &internal, GENERATOR).unwrap();
    let first = (fs::read(&public).unwrap(), fs::read(&internal).unwrap());

    let outcomes = generate(&defs, &public, &internal, GENERATOR).unwrap();
    assert_eq!(outcomes, (WriteOutcome::UpToDate, WriteOutcome::UpToDate));
    assert_eq!(first, (fs::read(&public).unwrap(), fs::read(&internal).unwrap()));
}

#[test]
fn invalid_document_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let defs = dir.path().join("brushsettings.json");
    let text = fs::read_to_string(fixture("minimal.json")).unwrap();
    // default above maximum
    fs::write(&defs, text.replace("\"default\": 1.0", "\"default\": 2.5")).unwrap();

    let public = dir.path().join("public.h");
    let internal = dir.path().join("internal.h");
    let err = generate(&defs, &public, &internal, GENERATOR).unwrap_err();

    match err.downcast_ref::<GenError>() {
        Some(GenError::Validation { name, .. }) => assert_eq!(name, "opaque"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(!public.exists());
    assert!(!internal.exists());
}

#[test]
fn missing_document_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(
        &dir.path().join("nope.json"),
        &dir.path().join("public.h"),
        &dir.path().join("internal.h"),
        GENERATOR,
    )
    .unwrap_err();
    assert!(matches!(err.downcast_ref::<GenError>(), Some(GenError::Io { .. })));
}

/// Member names between `typedef enum {` and the closing brace, count excluded.
fn enum_members<'a>(header: &'a str, enum_name: &str) -> Vec<&'a str> {
    let end = header
        .find(&format!("}} {enum_name};"))
        .expect("enum present");
    let start = header[..end].rfind("typedef enum {").expect("enum start");
    let mut members: Vec<&str> = header[start..end]
        .lines()
        .skip(1)
        .map(|l| l.trim().trim_end_matches(','))
        .filter(|l| !l.is_empty())
        .collect();
    members.pop();
    members
}

/// First field (the quoted C name) of every initializer in `array_name`.
fn array_names<'a>(header: &'a str, array_name: &str) -> Vec<&'a str> {
    let start = header
        .find(&format!("{array_name}[] = {{"))
        .expect("array present");
    let end = start + header[start..].find("};").expect("array end");
    header[start..end]
        .lines()
        .skip(1)
        .filter_map(|l| l.trim().strip_prefix("{\""))
        .filter_map(|l| l.split('"').next())
        .collect()
}

#[test]
fn enum_ordinals_match_array_indices() {
    let dir = tempfile::tempdir().unwrap();
    let public = dir.path().join("public.h");
    let internal = dir.path().join("internal.h");
    let defs = Path::new(env!("CARGO_MANIFEST_DIR")).join("brushsettings.json");

    generate(&defs, &public, &internal, GENERATOR).unwrap();
    let public = fs::read_to_string(&public).unwrap();
    let internal = fs::read_to_string(&internal).unwrap();

    for (enum_name, prefix, array) in [
        ("MyPaintBrushSetting", "MYPAINT_BRUSH_SETTING_", "settings_info_array"),
        ("MyPaintBrushInput", "MYPAINT_BRUSH_INPUT_", "inputs_info_array"),
    ] {
        let members = enum_members(&public, enum_name);
        let names = array_names(&internal, array);
        assert!(!members.is_empty());
        assert_eq!(members.len(), names.len(), "{enum_name}");
        for (member, name) in members.iter().zip(&names) {
            assert_eq!(*member, format!("{prefix}{}", name.to_uppercase()));
        }
    }
}

#[test]
fn canonical_document_is_valid() {
    let defs = Path::new(env!("CARGO_MANIFEST_DIR")).join("brushsettings.json");
    let doc = parser::load(&defs).unwrap();
    let defs = processor::build(&doc).unwrap();

    assert_eq!(defs.inputs.first().map(|i| i.cname.as_str()), Some("pressure"));
    assert_eq!(defs.settings.first().map(|s| s.cname.as_str()), Some("opaque"));
    assert_eq!(&defs.states[..3], &["x", "y", "pressure"]);
    assert!(defs.states.iter().all(|s| !s.contains('#') && !s.contains(' ')));
}

#[test]
fn location_comment_cites_document_line() {
    let text = fs::read_to_string(fixture("minimal.json")).unwrap();
    let doc = parser::parse_annotated(&text).unwrap();
    let defs = processor::build(&doc).unwrap();

    for setting in &defs.settings {
        let line = text
            .lines()
            .position(|l| l.contains(&format!("\"displayed_name\": \"{}\"", setting.display_name)))
            .map(|idx| idx + 1)
            .unwrap();
        assert_eq!(setting.displayed_name.pos.line, line);

        let fields = brushgen::writer::c::setting_info_struct(setting, "minimal.json");
        assert!(
            fields[1].contains(&format!("/*: ../minimal.json:{line} */")),
            "{}",
            fields[1]
        );
    }
}

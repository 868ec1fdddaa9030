//! Post-processing for extracted `.po` catalogs.
//!
//! The generator passes each string's location to xgettext as a translator
//! note (`/*: ../brushsettings.json:12 */`), which shows up in the catalog as
//! `#. : ../brushsettings.json:12`. This turns those notes into real location
//! comments (`#: ../brushsettings.json:12`).

use regex::Regex;

pub const DEFAULT_SOURCE_NAME: &str = "brushsettings.json";

/// Rewrite every `#. : ../<source_name>:LINE` note as `#: ../<source_name>:LINE`.
pub fn fix_locations(po: &str, source_name: &str) -> Result<String, regex::Error> {
    let pattern = format!(r"(?m)^#\. (: \.\./{}:.*)", regex::escape(source_name));
    let re = Regex::new(&pattern)?;
    Ok(re.replace_all(po, "#$1").into_owned())
}

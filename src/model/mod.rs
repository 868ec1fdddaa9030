use serde::Serialize;
use std::fmt;

/// Where a string literal starts in the definitions document.
///
/// Both coordinates are 1-based; `column` counts characters, not bytes,
/// and points at the opening quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A string leaf together with its provenance in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotated {
    pub pos: Position,
    pub value: String,
}

impl Annotated {
    pub fn new(pos: Position, value: impl Into<String>) -> Self {
        Self {
            pos,
            value: value.into(),
        }
    }
}

/// A real number exactly as written in the document.
///
/// The original text is kept so the emitted C literal matches the source
/// (`1.0` stays `1.0`, `4` stays `4`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Real(serde_json::Number);

impl Real {
    pub fn new(number: serde_json::Number) -> Self {
        Self(number)
    }

    pub fn value(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
impl From<f64> for Real {
    fn from(v: f64) -> Self {
        Self(serde_json::Number::from_f64(v).expect("finite test value"))
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────
// Records, one per entry of the document sections
// ─────────────────────────────────────────────────────

/// A user-controllable brush parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Setting {
    pub internal_name: Annotated,
    pub tcomment_name: Option<Annotated>,
    pub displayed_name: Annotated,
    /// Constant settings are not interpolated per dab.
    pub constant: bool,
    pub minimum: Option<Real>,
    pub default: Option<Real>,
    pub maximum: Option<Real>,
    pub tcomment_tooltip: Option<Annotated>,
    pub tooltip: Annotated,

    /// `internal_name` without its position.
    #[serde(skip)]
    pub cname: String,
    /// `displayed_name` without its position.
    #[serde(skip)]
    pub display_name: String,
}

/// A runtime signal (pressure, speed, …) that settings can be mapped to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Input {
    pub id: Annotated,
    pub hard_minimum: Option<Real>,
    pub soft_minimum: Real,
    pub normal: Option<Real>,
    pub soft_maximum: Real,
    pub hard_maximum: Option<Real>,
    pub tcomment_name: Option<Annotated>,
    pub displayed_name: Annotated,
    pub tcomment_tooltip: Option<Annotated>,
    pub tooltip: Annotated,

    /// `id` without its position.
    #[serde(skip)]
    pub cname: String,
    /// `displayed_name` without its position.
    #[serde(skip)]
    pub display_name: String,
}

/// Everything the writers need, in document order.
///
/// Order is load-bearing: index `i` of `settings` is ordinal `i` of the
/// generated setting enum and index `i` of the generated info array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    pub settings: Vec<Setting>,
    pub inputs: Vec<Input>,
    pub states: Vec<String>,
}

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One declaration produced from a style block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    /// Pseudo-state selector such as `:hover`; `None` for the base state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Canonical camelCase property name
    pub property: String,
    pub value: StyleValue,
}

/// Typed CSS value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StyleValue {
    /// Bare identifier (red, auto, flex)
    Keyword { value: String },

    /// Number with a unit; unitless numbers use `Unit::Number`
    Unit {
        unit: Unit,
        #[serde(serialize_with = "serialize_number")]
        value: f64,
    },

    /// Hex color
    Rgb {
        r: u8,
        g: u8,
        b: u8,
        #[serde(serialize_with = "serialize_number")]
        alpha: f64,
    },

    /// Space-separated list of simple values (1px solid red)
    Tuple { value: Vec<StyleValue> },

    /// Source text kept verbatim (strings, function calls, comma lists)
    Unparsed { value: String },
}

impl StyleValue {
    pub fn keyword(value: impl Into<String>) -> Self {
        StyleValue::Keyword {
            value: value.into(),
        }
    }

    pub fn unit(value: f64, unit: Unit) -> Self {
        StyleValue::Unit { unit, value }
    }
}

/// Largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write integral numbers as JSON integers (`10`, not `10.0`)
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Recognized CSS units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "vh")]
    Vh,
    #[serde(rename = "vw")]
    Vw,
    #[serde(rename = "vmin")]
    Vmin,
    #[serde(rename = "vmax")]
    Vmax,
    #[serde(rename = "ch")]
    Ch,
    #[serde(rename = "ex")]
    Ex,
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "pc")]
    Pc,
    #[serde(rename = "deg")]
    Deg,
    #[serde(rename = "rad")]
    Rad,
    #[serde(rename = "turn")]
    Turn,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "ms")]
    Ms,
    #[serde(rename = "fr")]
    Fr,
    /// Unitless number
    #[serde(rename = "number")]
    Number,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Vh => "vh",
            Unit::Vw => "vw",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Ch => "ch",
            Unit::Ex => "ex",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Deg => "deg",
            Unit::Rad => "rad",
            Unit::Turn => "turn",
            Unit::S => "s",
            Unit::Ms => "ms",
            Unit::Fr => "fr",
            Unit::Number => "number",
        }
    }
}

impl FromStr for Unit {
    type Err = ();

    /// Parses a unit suffix as written after a number. `number` is not a
    /// suffix, so it is rejected here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.to_ascii_lowercase().as_str() {
            "px" => Unit::Px,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "%" => Unit::Percent,
            "vh" => Unit::Vh,
            "vw" => Unit::Vw,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            "ch" => Unit::Ch,
            "ex" => Unit::Ex,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "in" => Unit::In,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "deg" => Unit::Deg,
            "rad" => Unit::Rad,
            "turn" => Unit::Turn,
            "s" => Unit::S,
            "ms" => Unit::Ms,
            "fr" => Unit::Fr,
            _ => return Err(()),
        };
        Ok(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a hyphenated CSS property name to camelCase.
///
/// `font-size` becomes `fontSize`, vendor prefixes are capitalized
/// (`-webkit-box-shadow` becomes `WebkitBoxShadow`) except `-ms-`, and custom
/// properties (`--brand`) are kept verbatim.
pub fn camel_case_property(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let (trimmed, capitalize_first) = match name.strip_prefix('-') {
        Some(rest) => (rest, !rest.starts_with("ms-")),
        None => (name, false),
    };

    let mut out = String::with_capacity(trimmed.len());
    let mut upper_next = capitalize_first;
    for ch in trimmed.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}

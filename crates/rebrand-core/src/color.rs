//! Canonical hex colors.
//!
//! Every color the engine reports or rewrites goes through [`canonical_color`]
//! so that `#ab12cd`, `AB12CD` and the spreadsheet ARGB form `FFAB12CD` all
//! compare equal.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Six uppercase hex digits, stored without the `#` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(String);

impl Color {
    /// Six-digit form written into WordprocessingML and DrawingML attributes.
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Opaque ARGB form used by SpreadsheetML (`FF` + hex).
    pub fn to_argb(&self) -> String {
        format!("FF{}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical_color(s).ok_or_else(|| format!("'{}' is not a hex color", s))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize a raw color attribute.
///
/// Accepts an optional leading `#`, 3-digit shorthand (digits doubled) and
/// 8-digit ARGB (alpha dropped). `auto`, `none`, empty strings and anything
/// that is not hex yield `None`.
pub fn canonical_color(raw: &str) -> Option<Color> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.eq_ignore_ascii_case("auto") || digits.eq_ignore_ascii_case("none") {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        8 => digits[2..].to_string(),
        _ => return None,
    };

    Some(Color(expanded.to_ascii_uppercase()))
}

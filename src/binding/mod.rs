//! Bindings: fully-qualified attribute paths touched by a command.
//!
//! Text form:
//!   data[1].marker.size   =>  Binding::Data { trace: 1, path: "marker.size" }
//!   layout.margin.l       =>  Binding::Layout { path: "margin.l" }

pub mod expand;
pub mod parse;

pub use expand::{expand, expand_unit};
pub use parse::{parse_binding_file, parse_bindings};

use anyhow::bail;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static DATA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^data\[(\d+)\]\.(.+)$").unwrap());
static LAYOUT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^layout\.(.+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Binding {
    Data { trace: usize, path: String },
    Layout { path: String },
}

impl Binding {
    pub fn data(trace: usize, path: impl Into<String>) -> Self {
        Binding::Data {
            trace,
            path: path.into(),
        }
    }

    pub fn layout(path: impl Into<String>) -> Self {
        Binding::Layout { path: path.into() }
    }

    /// Attribute path below the trace or layout root.
    pub fn path(&self) -> &str {
        match self {
            Binding::Data { path, .. } | Binding::Layout { path } => path,
        }
    }

    pub fn trace(&self) -> Option<usize> {
        match self {
            Binding::Data { trace, .. } => Some(*trace),
            Binding::Layout { .. } => None,
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Data { trace, path } => write!(f, "data[{}].{}", trace, path),
            Binding::Layout { path } => write!(f, "layout.{}", path),
        }
    }
}

impl FromStr for Binding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if let Some(caps) = DATA_RE.captures(s) {
            let trace: usize = caps[1].parse()?;
            return Ok(Binding::data(trace, &caps[2]));
        }
        if let Some(caps) = LAYOUT_RE.captures(s) {
            return Ok(Binding::layout(&caps[1]));
        }
        bail!("not a binding (expected `data[<i>].<path>` or `layout.<path>`): {:?}", s)
    }
}

impl Serialize for Binding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Binding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_roots() {
        assert_eq!(Binding::data(3, "marker.size").to_string(), "data[3].marker.size");
        assert_eq!(Binding::layout("margin.l").to_string(), "layout.margin.l");
    }

    #[test]
    fn parses_rendered_forms() {
        let b: Binding = "data[12].line.width".parse().unwrap();
        assert_eq!(b, Binding::data(12, "line.width"));
        assert_eq!(b.trace(), Some(12));
        assert_eq!(b.path(), "line.width");

        let b: Binding = "layout.height".parse().unwrap();
        assert_eq!(b, Binding::layout("height"));
        assert_eq!(b.trace(), None);
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["data[].x", "data[1]x", "data[-1].x", "layout.", "layout", "traces[0].x", ""] {
            assert!(bad.parse::<Binding>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&vec![Binding::data(0, "y"), Binding::layout("width")]).unwrap();
        assert_eq!(json, r#"["data[0].y","layout.width"]"#);

        let back: Vec<Binding> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Binding::data(0, "y"), Binding::layout("width")]);
    }
}

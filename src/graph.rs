//! Graph state as seen by the binding resolver.
//!
//! Only the trace count (and therefore trace order `0..N`) matters here; trace
//! and layout attribute content stays opaque.
//!
//! JSON shape accepted by [`Figure`]:
//! {
//!   "data":   [ { "x": [1, 2, 3] }, { "y": [4, 5, 6] } ],
//!   "layout": { "height": 500 }
//! }

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Range;
use std::sync::Arc;

/// Read-only view of a graph: an ordered list of traces plus one layout root.
pub trait GraphState {
    fn trace_count(&self) -> usize;

    /// Trace identities in plotting order.
    fn trace_indices(&self) -> Range<usize> {
        0..self.trace_count()
    }
}

impl<G: GraphState + ?Sized> GraphState for &G {
    fn trace_count(&self) -> usize {
        (**self).trace_count()
    }
}

impl<G: GraphState + ?Sized> GraphState for Arc<G> {
    fn trace_count(&self) -> usize {
        (**self).trace_count()
    }
}

/// A graph known only by how many traces it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceCount(pub usize);

impl GraphState for TraceCount {
    fn trace_count(&self) -> usize {
        self.0
    }
}

/// Figure document (`data` + `layout`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    #[serde(default)]
    pub data: Vec<Value>,

    #[serde(default)]
    pub layout: Map<String, Value>,
}

impl Figure {
    /// Figure with `n` empty traces and an empty layout.
    pub fn with_traces(n: usize) -> Self {
        Self {
            data: vec![Value::Object(Map::new()); n],
            layout: Map::new(),
        }
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("read figure {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("parse figure {}", path))
    }
}

impl GraphState for Figure {
    fn trace_count(&self) -> usize {
        self.data.len()
    }
}

//! Call-shape classification over `args[0]` / `args[1]` / `args[2]`.

use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Classified argument list. Computed once; everything downstream matches on
/// it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum NotationKind<'a> {
    /// `args[0]` is neither a string nor an object.
    Invalid,
    AttrValOnly {
        key: &'a str,
        value: &'a Value,
    },
    AttrValWithIndices {
        key: &'a str,
        value: &'a Value,
        indices: Vec<usize>,
    },
    ObjectOnly {
        attrs: &'a Map<String, Value>,
    },
    ObjectWithIndices {
        attrs: &'a Map<String, Value>,
        indices: Vec<usize>,
    },
}

impl<'a> NotationKind<'a> {
    pub fn classify(args: &'a [Value]) -> Self {
        match args.first() {
            Some(Value::String(key)) => {
                let value = args.get(1).unwrap_or(&NULL);
                match args.get(2).and_then(trace_indices) {
                    Some(indices) => NotationKind::AttrValWithIndices { key, value, indices },
                    None => NotationKind::AttrValOnly { key, value },
                }
            }
            Some(Value::Object(attrs)) => match args.get(1).and_then(trace_indices) {
                Some(indices) => NotationKind::ObjectWithIndices { attrs, indices },
                None => NotationKind::ObjectOnly { attrs },
            },
            _ => NotationKind::Invalid,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, NotationKind::Invalid)
    }

    pub fn indices(&self) -> Option<&[usize]> {
        match self {
            NotationKind::AttrValWithIndices { indices, .. }
            | NotationKind::ObjectWithIndices { indices, .. } => Some(indices.as_slice()),
            NotationKind::Invalid
            | NotationKind::AttrValOnly { .. }
            | NotationKind::ObjectOnly { .. } => None,
        }
    }
}

/// Explicit trace indices from a `[1, 0]` list or a bare `1`.
///
/// Entries that are not non-negative integers are skipped; nothing usable
/// left means "no explicit indices".
fn trace_indices(value: &Value) -> Option<Vec<usize>> {
    let indices: Vec<usize> = match value {
        Value::Array(items) => items.iter().filter_map(as_trace_index).collect(),
        Value::Number(_) => as_trace_index(value).into_iter().collect(),
        _ => return None,
    };

    if indices.is_empty() { None } else { Some(indices) }
}

fn as_trace_index(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|i| usize::try_from(i).ok())
}

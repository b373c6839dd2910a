//! Flatten a classified argument list into ordered attribute units.

use crate::command::Scope;
use crate::notation::kind::NotationKind;
use crate::notation::unit::AttributeUnit;

use serde_json::{Map, Value};

/// Normalize `args` for a command of the given scope.
///
/// Units come out in caller order: top-level keys in insertion order, nested
/// objects expanded depth-first at the position of their outer key. Explicit
/// trace indices are dropped for layout-scoped commands.
pub fn normalize(args: &[Value], scope: Scope) -> Vec<AttributeUnit> {
    let kind = NotationKind::classify(args);
    let indices = match scope {
        Scope::Data => kind.indices().map(<[usize]>::to_vec),
        Scope::Layout => None,
    };

    let mut units = Vec::new();
    match kind {
        NotationKind::Invalid => {
            tracing::debug!(
                first = ?args.first(),
                "malformed notation: first argument is neither an attribute string nor an object"
            );
        }
        NotationKind::AttrValOnly { key, value } | NotationKind::AttrValWithIndices { key, value, .. } => {
            flatten_entry(key, value, &indices, &mut units);
        }
        NotationKind::ObjectOnly { attrs } | NotationKind::ObjectWithIndices { attrs, .. } => {
            flatten_object("", attrs, &indices, &mut units);
        }
    }
    units
}

fn flatten_object(
    prefix: &str,
    attrs: &Map<String, Value>,
    indices: &Option<Vec<usize>>,
    out: &mut Vec<AttributeUnit>,
) {
    for (key, value) in attrs {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        flatten_entry(&path, value, indices, out);
    }
}

fn flatten_entry(path: &str, value: &Value, indices: &Option<Vec<usize>>, out: &mut Vec<AttributeUnit>) {
    match value {
        // Nested objects recurse; arrays are always leaf values.
        Value::Object(nested) => flatten_object(path, nested, indices, out),
        _ => out.push(AttributeUnit::new(path, value.clone(), indices.clone())),
    }
}

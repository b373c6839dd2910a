use serde_json::Value;

/// Leaf value of one attribute assignment.
///
/// Nested objects never reach this type; the normalizer flattens them.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Scalar(Value),
    Sequence(Vec<Value>),
}

impl AttrValue {
    /// Length of a sequence value, `None` for scalars.
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            AttrValue::Scalar(_) => None,
            AttrValue::Sequence(items) => Some(items.len()),
        }
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => AttrValue::Sequence(items),
            other => AttrValue::Scalar(other),
        }
    }
}

/// One normalized `key = value` assignment, optionally pinned to traces.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeUnit {
    /// Dotted attribute path, e.g. `marker.size`.
    pub key: String,
    pub value: AttrValue,
    pub explicit_indices: Option<Vec<usize>>,
}

impl AttributeUnit {
    pub fn new(key: impl Into<String>, value: impl Into<AttrValue>, explicit_indices: Option<Vec<usize>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            explicit_indices,
        }
    }
}

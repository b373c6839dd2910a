//! Expand attribute units into bindings.
//!
//! Data scope, per unit:
//! - trace list `T` = explicit indices if given, else every trace `0..N`
//! - scalar value: one binding per entry of `T`
//! - sequence value of length `L`: one binding per position `p < min(L, len(T))`,
//!   bound to trace `T[p]`
//!
//! Layout scope: exactly one binding per unit.

use crate::binding::Binding;
use crate::command::Scope;
use crate::graph::GraphState;
use crate::notation::AttributeUnit;

use std::borrow::Cow;

/// Expand all units in order.
pub fn expand<G: GraphState + ?Sized>(units: &[AttributeUnit], scope: Scope, gd: &G) -> Vec<Binding> {
    let trace_count = gd.trace_count();
    let mut out = Vec::new();
    for unit in units {
        expand_unit(unit, scope, trace_count, &mut out);
    }
    out
}

pub fn expand_unit(unit: &AttributeUnit, scope: Scope, trace_count: usize, out: &mut Vec<Binding>) {
    match scope {
        Scope::Layout => out.push(Binding::layout(unit.key.as_str())),
        Scope::Data => {
            let traces: Cow<'_, [usize]> = match unit.explicit_indices.as_deref() {
                Some(explicit) if !explicit.is_empty() => Cow::Borrowed(explicit),
                _ => Cow::Owned((0..trace_count).collect()),
            };

            // Only positions with both a trace and a value produce output.
            let n = match unit.value.sequence_len() {
                Some(len) => len.min(traces.len()),
                None => traces.len(),
            };

            out.extend(traces[..n].iter().map(|&trace| Binding::data(trace, unit.key.as_str())));
        }
    }
}

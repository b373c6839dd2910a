//! Resolve overloaded `restyle` / `relayout` call notations into the ordered
//! list of attribute paths they touch, and dispatch registered API commands.
//!
//! ```
//! use plot_api_bindings::{compute_api_command_bindings, graph::TraceCount};
//! use serde_json::json;
//!
//! let bindings = compute_api_command_bindings(&TraceCount(2), "restyle", &[json!("marker.size"), json!(7)]);
//! assert_eq!(bindings, vec!["data[0].marker.size", "data[1].marker.size"]);
//! ```

pub mod binding;
pub mod command;
pub mod graph;
pub mod notation;
pub mod render;

pub use binding::Binding;
pub use command::{Command, CommandError, CommandRegistry, Deferred, Scope, execute_api_command};
pub use graph::{Figure, GraphState};

use serde_json::Value;

pub type Result<T> = anyhow::Result<T>;

/// Bindings touched by calling `command` with `args` against `gd`.
///
/// Total: unknown commands and malformed notation give an empty list.
pub fn compute_api_command_bindings<G>(gd: &G, command: &str, args: &[Value]) -> Vec<String>
where
    G: GraphState + ?Sized,
{
    let Some(command) = Command::from_name(command) else {
        tracing::debug!(command, "no binding rules for command");
        return Vec::new();
    };

    compute_bindings(gd, command.scope(), args)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Typed bindings for `args` under `scope`.
pub fn compute_bindings<G>(gd: &G, scope: Scope, args: &[Value]) -> Vec<Binding>
where
    G: GraphState + ?Sized,
{
    let units = notation::normalize(args, scope);
    binding::expand(&units, scope, gd)
}

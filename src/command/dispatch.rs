//! Pass-through dispatcher for registered API commands.
//!
//! The returned deferred is the operation's own future: it settles once, with
//! exactly the value or reason the operation produced. No timeout, retry or
//! cancellation is layered on top.

use crate::command::registry::{CommandError, CommandRegistry};

use futures::future::BoxFuture;
use serde_json::Value;

/// Deferred outcome of a mutating operation.
pub type Deferred<T, E> = BoxFuture<'static, Result<T, E>>;

/// Looks up `command` and invokes its operation once as `operation(gd, args)`.
///
/// An unknown command fails here, before anything is invoked. Otherwise the
/// operation's deferred is handed back untouched.
pub fn execute_api_command<G: ?Sized, T, E>(
    registry: &CommandRegistry<G, T, E>,
    gd: &G,
    command: &str,
    args: Vec<Value>,
) -> Result<Deferred<T, E>, CommandError> {
    let entry = registry.lookup(command).inspect_err(|err| {
        tracing::debug!(command, %err, "dispatch failed");
    })?;

    tracing::debug!(command, scope = ?entry.scope, args = args.len(), "dispatching API command");
    Ok((entry.operation)(gd, args))
}

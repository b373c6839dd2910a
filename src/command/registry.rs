//! Name -> operation registry for API commands.

use crate::binding::Binding;
use crate::command::dispatch::Deferred;
use crate::command::{Command, Scope};
use crate::graph::GraphState;

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Registered mutating operation: called as `operation(gd, args)`.
pub type ApiMethod<G, T, E> = Arc<dyn Fn(&G, Vec<Value>) -> Deferred<T, E> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown API command: {0}")]
    UnknownCommand(String),

    #[error("API command already registered: {0}")]
    DuplicateCommand(String),

    #[error("API command name must not be empty")]
    EmptyName,
}

pub struct RegisteredCommand<G: ?Sized, T, E> {
    pub name: String,
    pub scope: Scope,
    pub operation: ApiMethod<G, T, E>,
}

impl<G: ?Sized, T, E> Clone for RegisteredCommand<G, T, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            scope: self.scope,
            operation: Arc::clone(&self.operation),
        }
    }
}

impl<G: ?Sized, T, E> std::fmt::Debug for RegisteredCommand<G, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Command registry keyed by command name.
///
/// `G` is the graph handle handed to operations, `T` / `E` are what their
/// deferreds resolve / reject with. Both default to opaque JSON values.
pub struct CommandRegistry<G: ?Sized, T = Value, E = Value> {
    commands: BTreeMap<String, RegisteredCommand<G, T, E>>,
}

impl<G: ?Sized, T, E> Default for CommandRegistry<G, T, E> {
    fn default() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }
}

impl<G: ?Sized, T, E> CommandRegistry<G, T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `operation` under `name` with the given scope.
    pub fn register<F>(&mut self, name: &str, scope: Scope, operation: F) -> Result<(), CommandError>
    where
        F: Fn(&G, Vec<Value>) -> Deferred<T, E> + Send + Sync + 'static,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::EmptyName);
        }
        if self.commands.contains_key(name) {
            return Err(CommandError::DuplicateCommand(name.to_string()));
        }

        self.commands.insert(
            name.to_string(),
            RegisteredCommand {
                name: name.to_string(),
                scope,
                operation: Arc::new(operation),
            },
        );
        Ok(())
    }

    /// Registers a built-in command under its canonical name and scope.
    pub fn register_builtin<F>(&mut self, command: Command, operation: F) -> Result<(), CommandError>
    where
        F: Fn(&G, Vec<Value>) -> Deferred<T, E> + Send + Sync + 'static,
    {
        self.register(command.name(), command.scope(), operation)
    }

    pub fn lookup(&self, name: &str) -> Result<&RegisteredCommand<G, T, E>, CommandError> {
        self.commands
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))
    }

    pub fn scope_of(&self, name: &str) -> Option<Scope> {
        self.commands.get(name).map(|c| c.scope)
    }

    /// Sorted command names.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bindings for `name` under the scope this registry binds it to.
    ///
    /// Unknown names resolve to no bindings, same as malformed notation.
    pub fn bindings<S>(&self, gd: &S, name: &str, args: &[Value]) -> Vec<Binding>
    where
        S: GraphState + ?Sized,
    {
        match self.scope_of(name) {
            Some(scope) => crate::compute_bindings(gd, scope, args),
            None => {
                tracing::debug!(command = name, "no scope registered; no bindings");
                Vec::new()
            }
        }
    }

    /// Dispatches `name`; see [`crate::command::execute_api_command`].
    pub fn execute(&self, gd: &G, name: &str, args: Vec<Value>) -> Result<Deferred<T, E>, CommandError> {
        crate::command::execute_api_command(self, gd, name, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TraceCount;
    use futures::FutureExt;
    use serde_json::json;

    fn noop(_gd: &TraceCount, _args: Vec<Value>) -> Deferred<Value, Value> {
        futures::future::ready(Ok(Value::Null)).boxed()
    }

    #[test]
    fn register_and_lookup() {
        let mut registry: CommandRegistry<TraceCount> = CommandRegistry::new();
        registry.register_builtin(Command::Restyle, noop).unwrap();
        registry.register(" restyle2 ", Scope::Data, noop).unwrap();

        assert_eq!(registry.names(), vec!["restyle", "restyle2"]);
        assert_eq!(registry.lookup("restyle").unwrap().scope, Scope::Data);
        assert_eq!(registry.lookup("restyle2").unwrap().name, "restyle2");
        assert_eq!(
            registry.lookup("relayout").unwrap_err(),
            CommandError::UnknownCommand("relayout".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_and_empty_names() {
        let mut registry: CommandRegistry<TraceCount> = CommandRegistry::new();
        registry.register_builtin(Command::Relayout, noop).unwrap();

        assert_eq!(
            registry.register("relayout", Scope::Layout, noop),
            Err(CommandError::DuplicateCommand("relayout".to_string()))
        );
        assert_eq!(registry.register("  ", Scope::Data, noop), Err(CommandError::EmptyName));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn bindings_follow_registered_scope() {
        let mut registry: CommandRegistry<TraceCount> = CommandRegistry::new();
        registry.register("style", Scope::Data, noop).unwrap();
        registry.register("layout", Scope::Layout, noop).unwrap();

        let args = [json!("width"), json!(3)];
        let data: Vec<String> = registry
            .bindings(&TraceCount(2), "style", &args)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(data, vec!["data[0].width", "data[1].width"]);

        let layout = registry.bindings(&TraceCount(2), "layout", &args);
        assert_eq!(layout, vec![Binding::layout("width")]);

        assert!(registry.bindings(&TraceCount(2), "missing", &args).is_empty());
    }
}

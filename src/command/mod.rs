//! Command layer: command names, their scopes, and the dispatch registry.
//!
//! This module is intentionally separate from notation handling. It owns:
//! - Scope (trace-indexed vs. layout-rooted)
//! - the built-in restyle / relayout commands
//! - CommandRegistry and the pass-through dispatcher

pub mod dispatch;
pub mod registry;

pub use dispatch::{Deferred, execute_api_command};
pub use registry::{ApiMethod, CommandError, CommandRegistry, RegisteredCommand};

use std::fmt;
use std::str::FromStr;

/// Where a command's attribute paths are rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Paths are per trace: `data[<i>].<key>`.
    Data,
    /// Paths hang off the single layout root: `layout.<key>`.
    Layout,
}

/// Built-in mutation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Restyle,
    Relayout,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Restyle, Command::Relayout];

    pub fn name(self) -> &'static str {
        match self {
            Command::Restyle => "restyle",
            Command::Relayout => "relayout",
        }
    }

    pub fn scope(self) -> Scope {
        match self {
            Command::Restyle => Scope::Data,
            Command::Relayout => Scope::Layout,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

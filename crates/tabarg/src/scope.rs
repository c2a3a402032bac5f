use std::ffi::OsStr;

use crate::Command;
use crate::OptionSpec;
use crate::Scope;

/// The invocation being parsed: the root command or one subcommand
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActiveScope<'c> {
    index: usize,
    command: Option<&'c Command>,
}

impl<'c> ActiveScope<'c> {
    /// The root command, no subcommand consumed
    pub fn root() -> Self {
        Self {
            index: Scope::Root.index(),
            command: None,
        }
    }

    /// Select the first command whose name equals `first`, the argument after the binary name
    pub fn resolve(commands: &'c [Command], first: Option<&OsStr>) -> Self {
        let Some(first) = first else {
            return Self::root();
        };
        commands
            .iter()
            .position(|command| !command.is_terminator() && first == command.get_name())
            .map(|position| Self {
                index: Scope::Subcommand(position).index(),
                command: Some(&commands[position]),
            })
            .unwrap_or_else(Self::root)
    }

    /// `1` for the root command, `n + 2` for subcommand `n`
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn command(&self) -> Option<&'c Command> {
        self.command
    }

    pub fn name(&self) -> Option<&'c str> {
        self.command.map(Command::get_name)
    }

    /// Whether options declared with `scope` participate in this invocation
    pub fn is_relevant(&self, scope: Scope) -> bool {
        is_relevant(self.index, scope)
    }

    /// Options that can be matched in this invocation, with their table positions
    pub fn visible<'o>(
        &self,
        options: &'o [OptionSpec],
    ) -> impl Iterator<Item = (usize, &'o OptionSpec)> + 'o {
        let index = self.index;
        options
            .iter()
            .enumerate()
            .filter(move |(_, spec)| is_relevant(index, spec.get_scope()))
    }
}

fn is_relevant(active: usize, scope: Scope) -> bool {
    match scope {
        Scope::Global => true,
        Scope::Root | Scope::Subcommand(_) => scope.index() == active,
    }
}

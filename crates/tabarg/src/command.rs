/// A subcommand, selected by the first argument
///
/// Subcommands are identified by their position in the command table; see
/// [`Scope::Subcommand`][crate::Scope::Subcommand].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    name: String,
    help: String,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: String::new(),
        }
    }

    /// End-of-table marker, a command with an empty name
    pub fn terminator() -> Self {
        Self::new("")
    }

    /// Description shown in help
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_help(&self) -> &str {
        &self.help
    }

    pub fn is_terminator(&self) -> bool {
        self.name.is_empty()
    }
}

/// At most one of two options may be given
///
/// If both options are [required][crate::OptionSpec::required], exactly one must be given and
/// neither is reported as missing on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exclusion {
    one: String,
    other: String,
}

impl Exclusion {
    /// Pair two options by long name
    pub fn new(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
        }
    }

    pub fn one(&self) -> &str {
        &self.one
    }

    pub fn other(&self) -> &str {
        &self.other
    }

    /// Whether `long` is either member of the pair
    pub fn involves(&self, long: &str) -> bool {
        self.one == long || self.other == long
    }
}

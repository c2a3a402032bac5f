use std::collections::HashSet;

use crate::Cli;
use crate::Error;
use crate::Kind;
use crate::Result;
use crate::Scope;

pub(crate) const HELP_LONG: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';

/// Reject malformed tables before any argument is read
pub(crate) fn validate(cli: &Cli) -> Result<()> {
    let options = cli.get_options();
    let commands = cli.get_commands();

    for (index, spec) in options.iter().enumerate() {
        let long = spec.get_long();
        if long.is_empty() {
            return Err(Error::definition(format_args!(
                "Invalid option at index {index}. Long option is always required!"
            )));
        }
        if spec.kind() != Kind::Boolean && !spec.is_positional() && spec.get_value_name().is_none()
        {
            return Err(Error::definition(format_args!(
                "Invalid option `{long}`. If option is not boolean a value name is required!"
            )));
        }
        if let Scope::Subcommand(n) = spec.get_scope() {
            if commands.len() <= n {
                return Err(Error::definition(format_args!(
                    "Invalid option `{long}`. Scoped to subcommand {n} but only {} are declared",
                    commands.len()
                )));
            }
        }
        if long == HELP_LONG || spec.get_short() == Some(HELP_SHORT) {
            return Err(Error::definition(format_args!(
                "Invalid option `{long}`. `--{HELP_LONG}` and `-{HELP_SHORT}` are reserved for help"
            )));
        }
    }

    let mut longs = HashSet::new();
    for spec in options {
        if !longs.insert(spec.get_long()) {
            return Err(Error::definition(format_args!(
                "Duplicate option `{}`",
                spec.get_long()
            )));
        }
    }

    for (i, spec) in options.iter().enumerate() {
        let Some(short) = spec.get_short() else {
            continue;
        };
        let clash = options[i + 1..].iter().find(|other| {
            other.get_short() == Some(short) && spec.get_scope().overlaps(other.get_scope())
        });
        if let Some(other) = clash {
            return Err(Error::definition(format_args!(
                "Options `{}` and `{}` share the short name `-{short}`",
                spec.get_long(),
                other.get_long()
            )));
        }
    }

    let mut names = HashSet::new();
    for (index, command) in commands.iter().enumerate() {
        if command.is_terminator() {
            return Err(Error::definition(format_args!(
                "Invalid command at index {index}. Command name is always required!"
            )));
        }
        if !names.insert(command.get_name()) {
            return Err(Error::definition(format_args!(
                "Duplicate command `{}`",
                command.get_name()
            )));
        }
    }

    for exclusion in cli.get_exclusions() {
        let (one, other) = (exclusion.one(), exclusion.other());
        if one.is_empty() || other.is_empty() {
            return Err(Error::definition("Empty exclusion!"));
        }
        if one == other {
            return Err(Error::definition(format_args!(
                "Option `{one}` cannot exclude itself"
            )));
        }
        for name in [one, other] {
            if !longs.contains(name) {
                return Err(Error::definition(format_args!(
                    "Exclusion refers to unknown option `{name}`"
                )));
            }
        }
    }

    Ok(())
}

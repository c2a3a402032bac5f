use crate::ActiveScope;
use crate::Cli;
use crate::Error;
use crate::ErrorKind;
use crate::Exclusion;
use crate::Matches;
use crate::OptionSpec;
use crate::Result;

/// How an exclusion pair stands after the scan
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExclusionState {
    /// One member is not visible in this invocation
    Irrelevant,
    Satisfied,
    /// Both members matched
    Conflict,
    /// Neither matched though both are required
    Unsatisfied,
}

pub(crate) fn exclusion_state(
    exclusion: &Exclusion,
    options: &[OptionSpec],
    scope: &ActiveScope<'_>,
    matches: &Matches,
) -> ExclusionState {
    let mut one_matched = false;
    let mut other_matched = false;
    let mut both_required = true;
    for (index, spec) in options.iter().enumerate() {
        if !exclusion.involves(spec.get_long()) {
            continue;
        }
        if !scope.is_relevant(spec.get_scope()) {
            return ExclusionState::Irrelevant;
        }
        both_required &= spec.is_required();
        if spec.get_long() == exclusion.one() {
            one_matched = matches.is_bound(index);
        } else {
            other_matched = matches.is_bound(index);
        }
    }
    match (one_matched, other_matched) {
        (true, true) => ExclusionState::Conflict,
        (false, false) if both_required => ExclusionState::Unsatisfied,
        _ => ExclusionState::Satisfied,
    }
}

/// Post-scan checks: exclusion pairs, then required options
pub(crate) fn check(cli: &Cli, scope: &ActiveScope<'_>, matches: &Matches) -> Result<()> {
    let options = cli.get_options();
    let exclusions = cli.get_exclusions();

    for exclusion in exclusions {
        let state = exclusion_state(exclusion, options, scope, matches);
        tracing::debug!(one = exclusion.one(), other = exclusion.other(), ?state, "exclusion");
        match state {
            ExclusionState::Irrelevant | ExclusionState::Satisfied => {}
            ExclusionState::Conflict => {
                return Err(Error::new(
                    ErrorKind::MutuallyExclusive,
                    format_args!(
                        "Options `--{}` and `--{}` are mutually exclusive. Please provide only one of them",
                        exclusion.one(),
                        exclusion.other()
                    ),
                ));
            }
            ExclusionState::Unsatisfied => {
                return Err(Error::new(
                    ErrorKind::ExclusionUnsatisfied,
                    format_args!(
                        "One of the options `--{}` and `--{}` is required because they are both required but mutually exclusive",
                        exclusion.one(),
                        exclusion.other()
                    ),
                ));
            }
        }
    }

    for (index, spec) in scope.visible(options) {
        if !spec.is_required() || matches.is_bound(index) {
            continue;
        }
        // left to the pair check above
        if exclusions.iter().any(|e| e.involves(spec.get_long())) {
            continue;
        }
        return Err(Error::new(
            ErrorKind::MissingRequired,
            format_args!("Missing required argument `{}`", spec.display_name()),
        )
        .within(spec.get_long()));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Command;
    use crate::Scope;
    use crate::Value;

    fn state(cli: &Cli, scope: &ActiveScope<'_>, bound: &[usize]) -> ExclusionState {
        let mut matches = Matches::new(cli.get_options());
        for &index in bound {
            matches.bind(index, Value::Bool(true));
        }
        exclusion_state(&cli.get_exclusions()[0], cli.get_options(), scope, &matches)
    }

    #[test]
    fn pair_states() {
        let cli = Cli::new()
            .option(OptionSpec::boolean("a").required())
            .option(OptionSpec::boolean("b").required())
            .exclusion(Exclusion::new("a", "b"));
        let root = ActiveScope::root();
        assert_eq!(state(&cli, &root, &[]), ExclusionState::Unsatisfied);
        assert_eq!(state(&cli, &root, &[0]), ExclusionState::Satisfied);
        assert_eq!(state(&cli, &root, &[1]), ExclusionState::Satisfied);
        assert_eq!(state(&cli, &root, &[0, 1]), ExclusionState::Conflict);
    }

    #[test]
    fn optional_pair_allows_neither() {
        let cli = Cli::new()
            .option(OptionSpec::boolean("a").required())
            .option(OptionSpec::boolean("b"))
            .exclusion(Exclusion::new("a", "b"));
        assert_eq!(state(&cli, &ActiveScope::root(), &[]), ExclusionState::Satisfied);
    }

    #[test]
    fn pair_outside_scope_is_skipped() {
        let commands = [Command::new("run")];
        let cli = Cli::new()
            .command(commands[0].clone())
            .option(OptionSpec::boolean("a"))
            .option(OptionSpec::boolean("b").scope(Scope::Subcommand(0)))
            .exclusion(Exclusion::new("a", "b"));
        let root = ActiveScope::root();
        assert_eq!(state(&cli, &root, &[0, 1]), ExclusionState::Irrelevant);
        let run = ActiveScope::resolve(&commands, Some(std::ffi::OsStr::new("run")));
        assert_eq!(state(&cli, &run, &[0, 1]), ExclusionState::Conflict);
    }

    #[test]
    fn missing_required_names_the_option() {
        let cli = Cli::new().option(OptionSpec::unsigned("port").value_name("PORT").required());
        let matches = Matches::new(cli.get_options());
        let err = check(&cli, &ActiveScope::root(), &matches).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert_eq!(err.message(), "Missing required argument `--port`");
    }

    #[test]
    fn required_outside_scope_is_ignored() {
        let cli = Cli::new()
            .command(Command::new("run"))
            .option(OptionSpec::boolean("fast").required().scope(Scope::Subcommand(0)));
        let matches = Matches::new(cli.get_options());
        assert!(check(&cli, &ActiveScope::root(), &matches).is_ok());
    }
}

use std::ffi::OsStr;
use std::ffi::OsString;

use tabarg_lexer::RawArgs;
use tabarg_lexer::Token;

use crate::coerce::coerce;
use crate::coerce::parse_signed;
use crate::constraints;
use crate::validate::validate;
use crate::ActiveScope;
use crate::Cli;
use crate::Error;
use crate::ErrorKind;
use crate::Kind;
use crate::Matches;
use crate::OptionSpec;
use crate::Parsed;
use crate::Result;
use crate::Value;

/// Validate the table, resolve the scope, then scan `raw` (including `argv[0]`)
pub(crate) fn run(cli: &Cli, raw: &[OsString]) -> Result<Parsed> {
    validate(cli)?;

    let mut args = RawArgs::new(raw);
    let scope = ActiveScope::resolve(cli.get_commands(), args.first());
    if scope.command().is_some() {
        args.advance(1);
    }
    tracing::debug!(scope = scope.index(), command = scope.name(), "resolved scope");

    if wants_help(args.remaining()) {
        let bin = cli.bin_name_for(args.bin());
        let text = cli
            .help_text(&bin, scope)
            .map_err(|err| Error::definition(format_args!("Failed to render help: {err}")))?;
        return Err(Error::new(ErrorKind::DisplayHelp, text));
    }

    let mut session = Session {
        cli,
        scope,
        matches: Matches::new(cli.get_options()),
    };
    session.scan(&mut args)?;
    constraints::check(cli, &scope, &session.matches)?;

    Ok(Parsed::new(scope.name().map(str::to_owned), session.matches))
}

/// `--help` or `-h` anywhere before a terminator
fn wants_help(remaining: &[OsString]) -> bool {
    remaining
        .iter()
        .map(OsString::as_os_str)
        .take_while(|arg| !tabarg_lexer::is_terminator(arg))
        .any(tabarg_lexer::is_help)
}

struct Session<'c> {
    cli: &'c Cli,
    scope: ActiveScope<'c>,
    matches: Matches,
}

impl<'c> Session<'c> {
    fn scan(&mut self, args: &mut RawArgs<'_>) -> Result<()> {
        while let Some(arg) = args.next_arg() {
            if let Some((name, value)) = tabarg_lexer::split_assignment(arg) {
                self.match_assignment(arg, name, value)?;
                continue;
            }
            let token = tabarg_lexer::classify(arg);
            tracing::trace!(?token, position = args.cursor() - 1, "token");
            match token {
                Token::Terminator => {
                    let rest = args.drain();
                    tracing::debug!(count = rest.len(), "terminator, remaining arguments are positional");
                    return self.consume_remaining(rest);
                }
                Token::Long(_) | Token::Short(_) => self.match_named(token, arg, args)?,
                Token::Positional(_) => self.match_positional(arg)?,
                Token::InvalidShort(_) => return Err(unknown(arg)),
                Token::Cluster(_) => {
                    return Err(Error::new(
                        ErrorKind::UnsupportedCluster,
                        "Multiple shorthand options at once are not yet supported",
                    )
                    .unexpected(arg.to_string_lossy()));
                }
            }
        }
        Ok(())
    }

    fn max_len(&self) -> usize {
        self.cli.settings().max_string_len()
    }

    /// First visible option named by `token`
    fn find(&self, token: Token<'_>) -> Option<(usize, &'c OptionSpec)> {
        let options = self.cli.get_options();
        self.scope
            .visible(options)
            .find(|(_, spec)| match token {
                Token::Long(name) => name == spec.get_long(),
                Token::Short(short) => spec.get_short() == Some(short),
                Token::Terminator
                | Token::Cluster(_)
                | Token::InvalidShort(_)
                | Token::Positional(_) => false,
            })
    }

    fn bind(&mut self, index: usize, spec: &OptionSpec, value: Value) {
        if self.matches.is_bound(index) {
            tracing::debug!(option = spec.get_long(), "matched again, last value wins");
        }
        tracing::trace!(option = spec.get_long(), %value, "bound");
        self.matches.bind(index, value);
    }

    /// `--name=value` or `-n=value`; never consumes the next argument
    fn match_assignment(&mut self, arg: &OsStr, name: &OsStr, value: &OsStr) -> Result<()> {
        let token = tabarg_lexer::classify(name);
        let found = match token {
            Token::Long(_) | Token::Short(_) => self.find(token),
            Token::Terminator
            | Token::Cluster(_)
            | Token::InvalidShort(_)
            | Token::Positional(_) => None,
        };
        let Some((index, spec)) = found else {
            return Err(unknown(arg));
        };
        if spec.kind() == Kind::Boolean {
            return Err(Error::new(
                ErrorKind::UnexpectedValue,
                format_args!(
                    "Invalid flag usage. Option `{}` does not expect an argument",
                    spec.display_name()
                ),
            )
            .unexpected(value.to_string_lossy())
            .within(spec.get_long()));
        }
        let value = coerce(spec, value, self.max_len())?;
        self.bind(index, spec, value);
        Ok(())
    }

    /// `--name [value]` or `-n [value]`
    fn match_named(&mut self, token: Token<'_>, arg: &OsStr, args: &mut RawArgs<'_>) -> Result<()> {
        let Some((index, spec)) = self.find(token) else {
            return Err(unknown(arg));
        };
        if spec.kind() == Kind::Boolean {
            self.bind(index, spec, Value::Bool(true));
            return Ok(());
        }
        let value = match args.peek() {
            None => return Err(missing_value(spec)),
            Some(next) if tabarg_lexer::classify(next).is_option() => option_like_value(spec, next)?,
            Some(next) => coerce(spec, next, self.max_len())?,
        };
        args.advance(1);
        self.bind(index, spec, value);
        Ok(())
    }

    /// Bind to the first visible positional that is still open
    fn match_positional(&mut self, arg: &OsStr) -> Result<()> {
        let options = self.cli.get_options();
        let mut declared = false;
        let mut open = None;
        for (index, spec) in self.scope.visible(options).filter(|(_, spec)| spec.is_positional()) {
            declared = true;
            if !self.matches.is_bound(index) {
                open = Some((index, spec));
                break;
            }
        }
        match open {
            Some((index, spec)) => {
                let value = coerce(spec, arg, self.max_len())?;
                self.bind(index, spec, value);
                Ok(())
            }
            None if declared => {
                let text = arg.to_string_lossy();
                Err(Error::new(
                    ErrorKind::TooManyPositionals,
                    format_args!("Excess positional argument `{text}`"),
                )
                .unexpected(text))
            }
            None => Err(unknown(arg)),
        }
    }

    /// After a terminator: one argument per open positional, in declaration order
    fn consume_remaining(&mut self, rest: &[OsString]) -> Result<()> {
        let open: Vec<_> = self
            .scope
            .visible(self.cli.get_options())
            .filter(|(index, spec)| spec.is_positional() && !self.matches.is_bound(*index))
            .collect();
        if open.len() < rest.len() {
            return Err(Error::new(
                ErrorKind::TooManyPositionals,
                format_args!(
                    "Too many positional arguments: Expected {} got {}",
                    open.len(),
                    rest.len()
                ),
            ));
        }
        if rest.len() < open.len() {
            return Err(Error::new(
                ErrorKind::TooFewPositionals,
                format_args!(
                    "Too few positional arguments: Expected {} got {}",
                    open.len(),
                    rest.len()
                ),
            ));
        }
        for (&(index, spec), raw) in open.iter().zip(rest) {
            let value = coerce(spec, raw, self.max_len())?;
            self.bind(index, spec, value);
        }
        Ok(())
    }
}

/// The next argument looks like an option; only a negative number can still be a value
fn option_like_value(spec: &OptionSpec, next: &OsStr) -> Result<Value> {
    match spec.kind() {
        Kind::Integer => tabarg_lexer::to_str(next)
            .and_then(|text| parse_signed(text).ok())
            .map(Value::Int)
            .ok_or_else(|| missing_value(spec)),
        Kind::UnsignedInteger => {
            let text = next.to_string_lossy();
            Err(Error::new(
                ErrorKind::InvalidValue,
                format_args!(
                    "Invalid unsigned numerical value for option `{}`: {text}",
                    spec.display_name()
                ),
            )
            .unexpected(text)
            .within(spec.get_long()))
        }
        Kind::Boolean | Kind::String => Err(missing_value(spec)),
    }
}

fn missing_value(spec: &OptionSpec) -> Error {
    Error::new(
        ErrorKind::MissingValue,
        format_args!(
            "Missing argument: Option `{}` requires an argument but none was given",
            spec.display_name()
        ),
    )
    .within(spec.get_long())
}

fn unknown(arg: &OsStr) -> Error {
    let text = arg.to_string_lossy();
    Error::new(
        ErrorKind::UnknownArgument,
        format_args!("Unknown argument `{text}`"),
    )
    .unexpected(text)
}

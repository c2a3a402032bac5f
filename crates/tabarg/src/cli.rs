use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::Path;

use crate::report::ErrorExt as _;
use crate::ActiveScope;
use crate::Command;
use crate::DefaultHelp;
use crate::Example;
use crate::Exclusion;
use crate::HelpContext;
use crate::HelpRenderer;
use crate::OptionSpec;
use crate::Parsed;
use crate::Result;

/// Longest string value accepted unless [`Cli::max_string_len`] says otherwise
pub const DEFAULT_MAX_STRING_LEN: usize = 1024;

const DEFAULT_BIN_NAME: &str = "cli";

/// Parser-wide knobs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    max_string_len: usize,
    bin_name: Option<String>,
}

impl Settings {
    /// Longest string value, in bytes
    pub fn max_string_len(&self) -> usize {
        self.max_string_len
    }

    /// Name shown in help and errors, instead of `argv[0]`
    pub fn bin_name(&self) -> Option<&str> {
        self.bin_name.as_deref()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_string_len: DEFAULT_MAX_STRING_LEN,
            bin_name: None,
        }
    }
}

/// A command line description: commands, options, and exclusion pairs
///
/// Declarations are immutable once built; each parse records its matches in
/// its own [`Parsed`], so one `Cli` can be parsed any number of times.
///
/// ```
/// use tabarg::Cli;
/// use tabarg::Command;
/// use tabarg::Exclusion;
/// use tabarg::OptionSpec;
/// use tabarg::Scope;
///
/// let cli = Cli::new()
///     .command(Command::new("run").help("Start the server"))
///     .option(OptionSpec::boolean("verbose").short('v').help("Log more"))
///     .option(
///         OptionSpec::unsigned("port")
///             .value_name("PORT")
///             .help("Port to listen on")
///             .scope(Scope::Subcommand(0)),
///     )
///     .option(OptionSpec::boolean("json"))
///     .option(OptionSpec::boolean("text"))
///     .exclusion(Exclusion::new("json", "text"));
///
/// let parsed = cli.try_parse_from(["server", "run", "--port=8080", "-v"]).unwrap();
/// assert_eq!(parsed.subcommand(), Some("run"));
/// assert_eq!(parsed.matches().get_uint("port"), Some(8080));
/// assert!(parsed.matches().get_flag("verbose"));
/// ```
pub struct Cli {
    commands: Vec<Command>,
    options: Vec<OptionSpec>,
    exclusions: Vec<Exclusion>,
    examples: Vec<Example>,
    settings: Settings,
    renderer: Box<dyn HelpRenderer + Send + Sync>,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            options: Vec::new(),
            exclusions: Vec::new(),
            examples: Vec::new(),
            settings: Settings::default(),
            renderer: Box::new(DefaultHelp),
        }
    }

    /// Add a subcommand; its position is what [`Scope::Subcommand`][crate::Scope::Subcommand] refers to
    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Add commands up to the first [`Command::terminator`]
    pub fn commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.commands
            .extend(commands.into_iter().take_while(|c| !c.is_terminator()));
        self
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Add options up to the first [`OptionSpec::terminator`]
    pub fn options(mut self, options: impl IntoIterator<Item = OptionSpec>) -> Self {
        self.options
            .extend(options.into_iter().take_while(|o| !o.is_terminator()));
        self
    }

    /// Allow at most one of two options by long name
    pub fn exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    pub fn exclusions(mut self, exclusions: impl IntoIterator<Item = Exclusion>) -> Self {
        self.exclusions.extend(exclusions);
        self
    }

    /// Add an invocation to the help's example list
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Reject string values longer than `max` bytes
    ///
    /// Defaults to [`DEFAULT_MAX_STRING_LEN`].
    pub fn max_string_len(mut self, max: usize) -> Self {
        self.settings.max_string_len = max;
        self
    }

    /// Override the name taken from `argv[0]`
    pub fn bin_name(mut self, name: impl Into<String>) -> Self {
        self.settings.bin_name = Some(name.into());
        self
    }

    /// Replace [`DefaultHelp`]
    pub fn help_renderer(mut self, renderer: impl HelpRenderer + Send + Sync + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn get_commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get_options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn get_exclusions(&self) -> &[Exclusion] {
        &self.exclusions
    }

    pub fn get_examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check the tables for programming mistakes
    ///
    /// Every parse does this first; calling it directly lets a test catch a
    /// bad table without a command line.
    pub fn validate(&self) -> Result<()> {
        crate::validate::validate(self)
    }

    /// Parse `args`, the first of which is the binary name
    ///
    /// `--help` is reported as [`ErrorKind::DisplayHelp`][crate::ErrorKind::DisplayHelp]
    /// with the rendered help as its message.
    pub fn try_parse_from<I, T>(&self, args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        crate::parser::run(self, &raw)
    }

    /// Parse [`std::env::args_os`]
    pub fn try_parse(&self) -> Result<Parsed> {
        self.try_parse_from(std::env::args_os())
    }

    /// Parse `args`, exiting the process on help or error
    pub fn parse_from<I, T>(&self, args: I) -> Parsed
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match crate::parser::run(self, &raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                let bin = self.bin_name_for(raw.first().map(OsString::as_os_str));
                err.exit(&bin)
            }
        }
    }

    /// Parse [`std::env::args_os`], exiting the process on help or error
    pub fn parse(&self) -> Parsed {
        self.parse_from(std::env::args_os())
    }

    /// [`Settings::bin_name`], else the file name of `argv[0]`
    pub(crate) fn bin_name_for(&self, argv0: Option<&OsStr>) -> String {
        if let Some(name) = self.settings.bin_name() {
            return name.to_owned();
        }
        argv0
            .map(Path::new)
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_BIN_NAME.to_owned())
    }

    pub(crate) fn help_text(&self, bin: &str, scope: ActiveScope<'_>) -> std::io::Result<String> {
        let help = HelpContext {
            bin,
            scope,
            commands: &self.commands,
            options: &self.options,
            examples: &self.examples,
        };
        let mut buffer = Vec::new();
        self.renderer.render(&help, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("commands", &self.commands)
            .field("options", &self.options)
            .field("exclusions", &self.exclusions)
            .field("examples", &self.examples)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Parse `argv` against plain tables, returning the invoked subcommand
///
/// `commands` and `options` stop at their first terminator record, if any.
///
/// ```
/// use tabarg::Command;
/// use tabarg::Exclusion;
/// use tabarg::OptionSpec;
///
/// let commands = [Command::new("build"), Command::terminator()];
/// let options = [OptionSpec::boolean("release"), OptionSpec::terminator()];
/// let exclusions: [Exclusion; 0] = [];
/// let argv = ["cargo", "build", "--release"];
/// let parsed = tabarg::try_parse(commands, options, exclusions, argv).unwrap();
/// assert_eq!(parsed.subcommand(), Some("build"));
/// assert!(parsed.matches().get_flag("release"));
/// ```
pub fn try_parse<C, O, E, I, T>(commands: C, options: O, exclusions: E, argv: I) -> Result<Parsed>
where
    C: IntoIterator<Item = Command>,
    O: IntoIterator<Item = OptionSpec>,
    E: IntoIterator<Item = Exclusion>,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::new()
        .commands(commands)
        .options(options)
        .exclusions(exclusions)
        .try_parse_from(argv)
}

/// [`try_parse`], exiting the process on help or error
pub fn parse<C, O, E, I, T>(commands: C, options: O, exclusions: E, argv: I) -> Parsed
where
    C: IntoIterator<Item = Command>,
    O: IntoIterator<Item = OptionSpec>,
    E: IntoIterator<Item = Exclusion>,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::new()
        .commands(commands)
        .options(options)
        .exclusions(exclusions)
        .parse_from(argv)
}

use crate::ActiveScope;
use crate::Command;
use crate::OptionSpec;
use crate::validate::HELP_LONG;
use crate::validate::HELP_SHORT;

const HEADER: anstyle::Style = anstyle::Style::new().bold().underline();
const LITERAL: anstyle::Style = anstyle::Style::new().bold();
const PLACEHOLDER: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan)));

const HELP_DESCRIPTION: &str = "Show this help menu";

/// A sample invocation listed in help
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    options: String,
    description: String,
}

impl Example {
    /// `options` is everything after the binary name
    pub fn new(options: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            options: options.into(),
            description: description.into(),
        }
    }

    pub fn options(&self) -> &str {
        &self.options
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Everything a [`HelpRenderer`] may show
#[derive(Copy, Clone, Debug)]
pub struct HelpContext<'a> {
    pub bin: &'a str,
    pub scope: ActiveScope<'a>,
    pub commands: &'a [Command],
    pub options: &'a [OptionSpec],
    pub examples: &'a [Example],
}

impl<'a> HelpContext<'a> {
    /// Named options visible in this invocation
    pub fn named(&self) -> impl Iterator<Item = &'a OptionSpec> + 'a {
        self.scope
            .visible(self.options)
            .map(|(_, spec)| spec)
            .filter(|spec| !spec.is_positional())
    }

    /// Positional options visible in this invocation
    pub fn positionals(&self) -> impl Iterator<Item = &'a OptionSpec> + 'a {
        self.scope
            .visible(self.options)
            .map(|(_, spec)| spec)
            .filter(|spec| spec.is_positional())
    }
}

/// Renders `--help` output
///
/// Called once, when `--help` or `-h` appears before any terminator.
pub trait HelpRenderer {
    fn render(&self, help: &HelpContext<'_>, out: &mut dyn std::io::Write) -> std::io::Result<()>;
}

/// Usage, commands, options, positionals, and examples
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultHelp;

impl DefaultHelp {
    fn width(help: &HelpContext<'_>) -> usize {
        let options = help.scope.visible(help.options).map(|(_, spec)| {
            let value = spec.get_value_name().map(|v| v.len() + 3).unwrap_or(0);
            spec.get_long().len() + value
        });
        let commands = help
            .commands
            .iter()
            .filter(|_| help.scope.command().is_none())
            .map(|command| command.get_name().len());
        options.chain(commands).fold(HELP_LONG.len(), usize::max)
    }
}

impl HelpRenderer for DefaultHelp {
    fn render(&self, help: &HelpContext<'_>, out: &mut dyn std::io::Write) -> std::io::Result<()> {
        let bin = help.bin;
        let width = Self::width(help);
        // `-x --` precedes option names
        let column = width + 5;
        let at_root = help.scope.command().is_none();
        let (h, h_) = (HEADER.render(), HEADER.render_reset());
        let (l, l_) = (LITERAL.render(), LITERAL.render_reset());
        let (p, p_) = (PLACEHOLDER.render(), PLACEHOLDER.render_reset());

        writeln!(out, "{h}Usage:{h_}")?;
        if !help.commands.is_empty() && at_root {
            writeln!(out, "  {l}{bin}{l_} [command]")?;
        }
        write!(out, "  {l}{bin}{l_} ")?;
        if let Some(name) = help.scope.name() {
            write!(out, "{l}{name}{l_} ")?;
        }
        write!(out, "[options]")?;
        for spec in help.positionals() {
            write!(out, " {p}{}{p_}", spec.get_long())?;
        }
        writeln!(out)?;

        if !help.commands.is_empty() && at_root {
            writeln!(out)?;
            writeln!(out, "{h}Available commands:{h_}")?;
            for command in help.commands {
                let name = command.get_name();
                writeln!(out, "  {l}{name: <column$}{l_} {}", command.get_help())?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{h}Available options:{h_}")?;
        for spec in help.named() {
            let short = match spec.get_short() {
                Some(c) => format!("-{c}"),
                None => "  ".to_owned(),
            };
            let long = spec.get_long();
            let mut used = long.len();
            write!(out, "  {l}{short}{l_} {l}--{long}{l_}")?;
            if let Some(value) = spec.get_value_name() {
                write!(out, " {p}<{value}>{p_}")?;
                used += value.len() + 3;
            }
            let pad = width.saturating_sub(used);
            writeln!(out, "{:pad$} {}", "", spec.get_help())?;
        }
        let pad = width - HELP_LONG.len();
        writeln!(
            out,
            "  {l}-{HELP_SHORT}{l_} {l}--{HELP_LONG}{l_}{:pad$} {HELP_DESCRIPTION}",
            ""
        )?;

        if help.positionals().next().is_some() {
            writeln!(out)?;
            writeln!(out, "{h}Positional options:{h_}")?;
            for spec in help.positionals() {
                let long = spec.get_long();
                writeln!(out, "  {p}{long: <column$}{p_} {}", spec.get_help())?;
            }
        }

        if !help.examples.is_empty() {
            writeln!(out)?;
            writeln!(out, "{h}Examples:{h_}")?;
            let example_width = help
                .examples
                .iter()
                .map(|example| example.options().len())
                .max()
                .unwrap_or(0);
            for example in help.examples {
                let options = example.options();
                writeln!(
                    out,
                    "  {bin} {options: <example_width$}  {}",
                    example.description()
                )?;
            }
        }

        if !help.commands.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "Use `{bin} [command] --help` to get help for a specific command"
            )?;
        }
        Ok(())
    }
}

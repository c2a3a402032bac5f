/// The type an option's value is coerced to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// On/off switch; never takes a value
    Boolean,
    /// Text, bounded by [`Settings::max_string_len`][crate::Settings::max_string_len]
    String,
    /// `i64`, see [`parse_signed`][crate::parse_signed]
    Integer,
    /// `u64`, see [`parse_unsigned`][crate::parse_unsigned]
    UnsignedInteger,
}

/// Under which invocation an option is visible
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// At the root and under every subcommand
    #[default]
    Global,
    /// Only when no subcommand was invoked
    Root,
    /// Only under the subcommand at this position in the command table
    Subcommand(usize),
}

impl Scope {
    /// Compact encoding: `0` global, `1` root, `n + 2` for subcommand `n`
    pub fn index(self) -> usize {
        match self {
            Self::Global => 0,
            Self::Root => 1,
            Self::Subcommand(n) => n + 2,
        }
    }

    /// Inverse of [`Scope::index`]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Global,
            1 => Self::Root,
            n => Self::Subcommand(n - 2),
        }
    }

    /// Whether some invocation sees options from both scopes
    pub fn overlaps(self, other: Self) -> bool {
        match (self, other) {
            (Self::Global, _) | (_, Self::Global) => true,
            (a, b) => a == b,
        }
    }
}

/// Declaration of a single option
///
/// Declarations are immutable; whether an option matched, and its value, is recorded per parse
/// in [`Matches`][crate::Matches].
///
/// ```
/// use tabarg::OptionSpec;
/// use tabarg::Scope;
///
/// let port = OptionSpec::unsigned("port")
///     .short('p')
///     .value_name("PORT")
///     .help("Port to listen on")
///     .required()
///     .scope(Scope::Subcommand(0));
/// assert!(port.is_required());
/// assert_eq!(port.scope_index(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
    short: Option<char>,
    long: String,
    kind: Kind,
    scope: Scope,
    required: bool,
    positional: bool,
    help: String,
    value_name: Option<String>,
    sentinel: bool,
}

impl OptionSpec {
    /// Declare an option of `kind`
    pub fn new(long: impl Into<String>, kind: Kind) -> Self {
        Self {
            short: None,
            long: long.into(),
            kind,
            scope: Scope::Global,
            required: false,
            positional: false,
            help: String::new(),
            value_name: None,
            sentinel: false,
        }
    }

    /// [`Kind::Boolean`]
    pub fn boolean(long: impl Into<String>) -> Self {
        Self::new(long, Kind::Boolean)
    }

    /// [`Kind::String`]
    pub fn string(long: impl Into<String>) -> Self {
        Self::new(long, Kind::String)
    }

    /// [`Kind::Integer`]
    pub fn integer(long: impl Into<String>) -> Self {
        Self::new(long, Kind::Integer)
    }

    /// [`Kind::UnsignedInteger`]
    pub fn unsigned(long: impl Into<String>) -> Self {
        Self::new(long, Kind::UnsignedInteger)
    }

    /// End-of-table marker
    ///
    /// [`Cli::options`][crate::Cli::options] stops reading at the first terminator, so
    /// sentinel-terminated tables can be passed as-is.
    pub fn terminator() -> Self {
        let mut spec = Self::new("", Kind::Boolean);
        spec.sentinel = true;
        spec
    }

    /// Single-character alias, `-c`
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Placeholder shown in help, e.g. `<PORT>`
    ///
    /// Required unless the option is boolean or positional.
    pub fn value_name(mut self, name: impl Into<String>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    /// Description shown in help
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Fail the parse if this option is not matched
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Bind by position rather than by name
    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }

    /// See [`Scope`]
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn get_short(&self) -> Option<char> {
        self.short
    }

    pub fn get_long(&self) -> &str {
        &self.long
    }

    pub fn get_help(&self) -> &str {
        &self.help
    }

    pub fn get_value_name(&self) -> Option<&str> {
        self.value_name.as_deref()
    }

    pub fn get_scope(&self) -> Scope {
        self.scope
    }

    /// The value type
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// See [`Scope::index`]
    pub fn scope_index(&self) -> usize {
        self.scope.index()
    }

    pub fn is_global(&self) -> bool {
        self.scope == Scope::Global
    }

    pub fn is_root(&self) -> bool {
        self.scope == Scope::Root
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_positional(&self) -> bool {
        self.positional
    }

    pub fn is_terminator(&self) -> bool {
        self.sentinel
    }

    /// How the option is named in messages: `--long`, or `<long>` for positionals
    pub fn display_name(&self) -> String {
        if self.positional {
            format!("<{}>", self.long)
        } else {
            format!("--{}", self.long)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scope_encoding() {
        assert_eq!(Scope::Global.index(), 0);
        assert_eq!(Scope::Root.index(), 1);
        assert_eq!(Scope::Subcommand(0).index(), 2);
        assert_eq!(Scope::Subcommand(7).index(), 9);
        for index in 0..12 {
            assert_eq!(Scope::from_index(index).index(), index);
        }
    }

    #[test]
    fn scope_overlap() {
        assert!(Scope::Global.overlaps(Scope::Subcommand(3)));
        assert!(Scope::Root.overlaps(Scope::Root));
        assert!(!Scope::Root.overlaps(Scope::Subcommand(0)));
        assert!(!Scope::Subcommand(0).overlaps(Scope::Subcommand(1)));
    }

    #[test]
    fn defaults() {
        let spec = OptionSpec::boolean("verbose");
        assert!(spec.is_global());
        assert!(!spec.is_root());
        assert!(!spec.is_required());
        assert!(!spec.is_positional());
        assert!(!spec.is_terminator());
        assert_eq!(spec.kind(), Kind::Boolean);
        assert_eq!(spec.display_name(), "--verbose");
    }

    #[test]
    fn terminator_is_flagged() {
        let spec = OptionSpec::terminator();
        assert!(spec.is_terminator());
        assert_eq!(spec.get_long(), "");
        assert!(!OptionSpec::boolean("").is_terminator());
    }

    #[test]
    fn positional_display_name() {
        let spec = OptionSpec::string("file").positional();
        assert_eq!(spec.display_name(), "<file>");
    }
}

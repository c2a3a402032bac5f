//! Error type for tabarg command-line parsing
//!
//! Every failure is fatal to the parse that produced it; [`ErrorKind::class`] tells whether
//! the option table, the user's input, or a post-scan constraint was at fault.
//!
//! ## Example
//! ```
//! use std::ffi::OsStr;
//! use tabarg_error::Error;
//! use tabarg_error::ErrorKind;
//! use tabarg_error::Result;
//!
//! fn reject_clusters(raw: &OsStr) -> Result<()> {
//!     match tabarg_lexer::classify(raw) {
//!         tabarg_lexer::Token::Cluster(_) => Err(Error::new(
//!             ErrorKind::UnsupportedCluster,
//!             "Multiple shorthand options at once are not yet supported",
//!         )
//!         .unexpected(raw.to_string_lossy())),
//!         _ => Ok(()),
//!     }
//! }
//!
//! let err = reject_clusters(OsStr::new("-abc")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedCluster);
//! assert_eq!(err.unexpected_token(), Some("-abc"));
//! assert!(reject_clusters(OsStr::new("-a")).is_ok());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

/// `Result<T, Error>`
///
/// `tabarg_error::Result` may be used with one *or* two type parameters.
///
/// ```rust
/// use tabarg_error::Result;
///
/// # const IGNORE: &str = stringify! {
/// fn demo1() -> Result<T> {...}
///            // ^ equivalent to std::result::Result<T, tabarg_error::Error>
///
/// fn demo2() -> Result<T, OtherError> {...}
///            // ^ equivalent to std::result::Result<T, OtherError>
/// # };
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse grouping of [`ErrorKind`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The option table itself is malformed; a programming mistake
    Definition,
    /// The command line could not be matched against the table
    Input,
    /// The scan succeeded but required/exclusion rules were violated
    Constraint,
    /// `--help` was requested; not a failure
    Help,
}

/// What went wrong
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Option, command, or exclusion table is malformed
    InvalidDefinition,
    /// No visible option matches the token
    UnknownArgument,
    /// A valued option was not followed by a value
    MissingValue,
    /// The value could not be coerced to the option's type
    InvalidValue,
    /// A string value is longer than the configured maximum
    ValueTooLong,
    /// `--flag=value` was given for a boolean option
    UnexpectedValue,
    /// More positional arguments than positional slots
    TooManyPositionals,
    /// Positional-only mode left positional slots unfilled
    TooFewPositionals,
    /// Combined short flags such as `-abc`
    UnsupportedCluster,
    /// A value had to be read as text but was not UTF-8
    InvalidUtf8,
    /// A required option was never matched
    MissingRequired,
    /// Both options of an exclusion pair were matched
    MutuallyExclusive,
    /// Neither option of a required exclusion pair was matched
    ExclusionUnsatisfied,
    /// Help was requested; the message is the rendered help
    DisplayHelp,
}

impl ErrorKind {
    /// Group this kind for reporting
    pub fn class(self) -> ErrorClass {
        match self {
            Self::InvalidDefinition => ErrorClass::Definition,
            Self::UnknownArgument
            | Self::MissingValue
            | Self::InvalidValue
            | Self::ValueTooLong
            | Self::UnexpectedValue
            | Self::TooManyPositionals
            | Self::TooFewPositionals
            | Self::UnsupportedCluster
            | Self::InvalidUtf8 => ErrorClass::Input,
            Self::MissingRequired | Self::MutuallyExclusive | Self::ExclusionUnsatisfied => {
                ErrorClass::Constraint
            }
            Self::DisplayHelp => ErrorClass::Help,
        }
    }

    /// Whether the report should point the user at `--help`
    pub fn suggests_help(self) -> bool {
        match self {
            Self::UnknownArgument
            | Self::MissingValue
            | Self::UnexpectedValue
            | Self::TooManyPositionals
            | Self::TooFewPositionals
            | Self::MissingRequired
            | Self::MutuallyExclusive
            | Self::ExclusionUnsatisfied => true,
            Self::InvalidDefinition
            | Self::InvalidValue
            | Self::ValueTooLong
            | Self::UnsupportedCluster
            | Self::InvalidUtf8
            | Self::DisplayHelp => false,
        }
    }
}

/// Argument error type for use with tabarg
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    unexpected: Option<String>,
    within: Option<String>,
}

impl Error {
    /// Create a new error object from a printable error message.
    #[cold]
    pub fn new<M>(kind: ErrorKind, message: M) -> Self
    where
        M: std::fmt::Display,
    {
        Self {
            kind,
            msg: message.to_string(),
            unexpected: None,
            within: None,
        }
    }

    /// [`ErrorKind::InvalidDefinition`]
    #[cold]
    pub fn definition<M>(message: M) -> Self
    where
        M: std::fmt::Display,
    {
        Self::new(ErrorKind::InvalidDefinition, message)
    }

    /// The token that could not be handled
    #[cold]
    pub fn unexpected<T>(mut self, token: T) -> Self
    where
        T: std::fmt::Display,
    {
        self.unexpected = Some(token.to_string());
        self
    }

    /// The option being processed when the error happened, by long name
    #[cold]
    pub fn within<T>(mut self, option: T) -> Self
    where
        T: std::fmt::Display,
    {
        self.within = Some(option.to_string());
        self
    }

    /// What went wrong
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message, without binary name or help hint
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// See [`Error::unexpected`]
    pub fn unexpected_token(&self) -> Option<&str> {
        self.unexpected.as_deref()
    }

    /// See [`Error::within`]
    pub fn within_option(&self) -> Option<&str> {
        self.within.as_deref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.msg.fmt(formatter)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let err = Error::new(ErrorKind::UnknownArgument, "Unknown argument `--nope`")
            .unexpected("--nope");
        assert_eq!(err.to_string(), "Unknown argument `--nope`");
        assert_eq!(err.unexpected_token(), Some("--nope"));
        assert_eq!(err.within_option(), None);
    }

    #[test]
    fn classes() {
        assert_eq!(ErrorKind::InvalidDefinition.class(), ErrorClass::Definition);
        assert_eq!(ErrorKind::ValueTooLong.class(), ErrorClass::Input);
        assert_eq!(ErrorKind::MutuallyExclusive.class(), ErrorClass::Constraint);
        assert_eq!(ErrorKind::DisplayHelp.class(), ErrorClass::Help);
    }

    #[test]
    fn help_hints() {
        assert!(ErrorKind::MissingRequired.suggests_help());
        assert!(!ErrorKind::InvalidValue.suggests_help());
        assert!(!ErrorKind::DisplayHelp.suggests_help());
    }
}

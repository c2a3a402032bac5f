//! Token classification for table-driven CLI parsing
//!
//! Unlike a full parser, this only answers "what does this argument look like?"
//! and leaves matching against option tables to `tabarg`.
//!
//! ## Example
//!
//! ```
//! use std::ffi::OsStr;
//! use tabarg_lexer::Token;
//!
//! assert_eq!(tabarg_lexer::classify(OsStr::new("--port")), Token::Long(OsStr::new("port")));
//! assert_eq!(tabarg_lexer::classify(OsStr::new("-p")), Token::Short('p'));
//! assert_eq!(tabarg_lexer::classify(OsStr::new("--")), Token::Terminator);
//! assert_eq!(tabarg_lexer::classify(OsStr::new("file.txt")), Token::Positional(OsStr::new("file.txt")));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod ext;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

use std::ffi::OsStr;
use std::ffi::OsString;

use ext::OsStrExt as _;

/// Token that switches the rest of the command line into positional-only mode
pub const TERMINATOR: &str = "--";
/// Single-dash spelling of [`TERMINATOR`]
pub const SHORT_TERMINATOR: &str = "-";

/// The shape of a single raw argument
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--` or `-`
    Terminator,
    /// `--name`, dashes removed
    Long(&'a OsStr),
    /// `-x`
    Short(char),
    /// `-xyz`, dash removed
    ///
    /// Combined short flags are recognized so they can be rejected.
    Cluster(&'a OsStr),
    /// `-` followed by bytes that are not valid UTF-8, dash removed
    ///
    /// Short names are `char`s, so this can never name an option.
    InvalidShort(&'a OsStr),
    /// Anything not starting with a dash
    Positional(&'a OsStr),
}

impl Token<'_> {
    /// Whether the token is spelled like an option (`--long`, `-s`, `-xyz`)
    pub fn is_option(&self) -> bool {
        matches!(
            self,
            Self::Long(_) | Self::Short(_) | Self::Cluster(_) | Self::InvalidShort(_)
        )
    }
}

/// Classify `raw` by its leading dashes
pub fn classify(raw: &OsStr) -> Token<'_> {
    if is_terminator(raw) {
        return Token::Terminator;
    }
    if let Some(name) = raw.strip_prefix("--") {
        // "--" itself was handled above so `name` is never empty
        return Token::Long(name);
    }
    if let Some(rest) = raw.strip_prefix("-") {
        return match rest.try_str() {
            Ok(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Token::Short(c),
                    _ => Token::Cluster(rest),
                }
            }
            Err(_) => Token::InvalidShort(rest),
        };
    }
    Token::Positional(raw)
}

/// Whether `raw` is `--` or `-`
pub fn is_terminator(raw: &OsStr) -> bool {
    raw == TERMINATOR || raw == SHORT_TERMINATOR
}

/// Whether `raw` asks for help (`--help` or `-h`)
pub fn is_help(raw: &OsStr) -> bool {
    raw == "--help" || raw == "-h"
}

/// Split `name=value` at the first `=`
///
/// Returns `None` when there is no `=`.
pub fn split_assignment(raw: &OsStr) -> Option<(&OsStr, &OsStr)> {
    raw.split_once("=")
}

/// Convert a token to `&str`, if it is valid UTF-8
pub fn to_str(raw: &OsStr) -> Option<&str> {
    raw.try_str().ok()
}

/// Cursor over the raw command line
#[derive(Clone, Debug)]
pub struct RawArgs<'a> {
    items: &'a [OsString],
    cursor: usize,
}

impl<'a> RawArgs<'a> {
    /// Start at the first argument after the binary name
    pub fn new(items: &'a [OsString]) -> Self {
        Self {
            items,
            cursor: usize::from(!items.is_empty()),
        }
    }

    /// The binary name, `argv[0]`
    pub fn bin(&self) -> Option<&'a OsStr> {
        self.items.first().map(OsString::as_os_str)
    }

    /// The argument that would select a subcommand, `argv[1]`
    pub fn first(&self) -> Option<&'a OsStr> {
        self.items.get(1).map(OsString::as_os_str)
    }

    /// Index of the next argument to be returned
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advance past `count` arguments without reading them
    pub fn advance(&mut self, count: usize) {
        self.cursor = (self.cursor + count).min(self.items.len());
    }

    /// The next argument, advancing past it
    pub fn next_arg(&mut self) -> Option<&'a OsStr> {
        let next = self.peek()?;
        self.cursor += 1;
        Some(next)
    }

    /// The next argument, without advancing
    pub fn peek(&self) -> Option<&'a OsStr> {
        self.items.get(self.cursor).map(OsString::as_os_str)
    }

    /// All arguments not yet returned
    pub fn remaining(&self) -> &'a [OsString] {
        &self.items[self.cursor.min(self.items.len())..]
    }

    /// Consume everything that is left
    pub fn drain(&mut self) -> &'a [OsString] {
        let rest = self.remaining();
        self.cursor = self.items.len();
        rest
    }
}

//! Table-driven CLI parsing
//!
//! Declare commands, options, and mutual-exclusion pairs as data, then let
//! [`Cli`] resolve the invoked subcommand, match every argument against the
//! options visible under it, and check required options and exclusions.
//!
//! - `--name`, `--name value`, `--name=value`, `-n`, `-n value`
//! - bare arguments fill positional options in declaration order
//! - `--` or `-` makes the rest of the line positional
//! - `--help` / `-h` before any terminator renders help
//!
//! Combined short flags (`-abc`) are rejected.
//!
//! ## Example
//!
//! ```
//! use tabarg::Cli;
//! use tabarg::Command;
//! use tabarg::ErrorKind;
//! use tabarg::OptionSpec;
//! use tabarg::Scope;
//!
//! let cli = Cli::new()
//!     .command(Command::new("run").help("Start the server"))
//!     .option(OptionSpec::boolean("verbose").short('v'))
//!     .option(
//!         OptionSpec::unsigned("port")
//!             .value_name("PORT")
//!             .required()
//!             .scope(Scope::Subcommand(0)),
//!     );
//!
//! let parsed = cli.try_parse_from(["server", "run", "-v", "--port", "0x1f90"]).unwrap();
//! assert_eq!(parsed.subcommand(), Some("run"));
//! assert_eq!(parsed.matches().get_uint("port"), Some(8080));
//!
//! let err = cli.try_parse_from(["server", "run"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingRequired);
//!
//! let err = cli.try_parse_from(["server", "--port", "80"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownArgument);
//! ```
//!
//! A binary would call [`Cli::parse`] instead, which prints help or the error
//! and exits.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod cli;
mod coerce;
mod command;
mod constraints;
mod help;
mod matches;
mod option;
mod parser;
mod report;
mod scope;
mod validate;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub use cli::parse;
pub use cli::try_parse;
pub use cli::Cli;
pub use cli::Settings;
pub use cli::DEFAULT_MAX_STRING_LEN;
pub use coerce::bounded_copy;
pub use coerce::parse_signed;
pub use coerce::parse_unsigned;
pub use command::Command;
pub use command::Exclusion;
pub use help::DefaultHelp;
pub use help::Example;
pub use help::HelpContext;
pub use help::HelpRenderer;
pub use matches::Matches;
pub use matches::Parsed;
pub use matches::Value;
pub use option::Kind;
pub use option::OptionSpec;
pub use option::Scope;
pub use report::ErrorExt;
pub use scope::ActiveScope;
pub use tabarg_error::Error;
pub use tabarg_error::ErrorClass;
pub use tabarg_error::ErrorKind;
pub use tabarg_error::Result;

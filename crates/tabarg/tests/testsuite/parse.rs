use tabarg::Cli;
use tabarg::Command;
use tabarg::ErrorClass;
use tabarg::ErrorKind;
use tabarg::Exclusion;
use tabarg::OptionSpec;
use tabarg::Scope;

fn tool() -> Cli {
    Cli::new()
        .command(Command::new("run"))
        .command(Command::new("debug"))
        .option(OptionSpec::boolean("verbose").short('v'))
        .option(OptionSpec::unsigned("timeout").value_name("SECS"))
        .option(OptionSpec::string("label").value_name("TEXT"))
        .option(OptionSpec::boolean("fast").scope(Scope::Subcommand(0)))
        .option(OptionSpec::boolean("trace").scope(Scope::Subcommand(1)))
}

#[test]
fn validate_is_idempotent() {
    let cli = tool();
    assert_eq!(cli.validate(), Ok(()));
    assert_eq!(cli.validate(), Ok(()));

    let broken = tool().option(OptionSpec::string("file"));
    let first = broken.validate().unwrap_err();
    let second = broken.validate().unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.kind().class(), ErrorClass::Definition);
}

#[test]
fn boolean_leaves_next_argument_alone() {
    let cli = tool().option(OptionSpec::string("file").positional());
    let parsed = cli.try_parse_from(["tool", "-v", "notes.txt"]).unwrap();
    assert!(parsed.matches().get_flag("verbose"));
    assert_eq!(parsed.matches().get_str("file"), Some("notes.txt"));
}

#[test]
fn assignment_and_separate_value_agree() {
    let cli = tool();
    let joined = cli.try_parse_from(["tool", "--timeout=10"]).unwrap();
    let split = cli.try_parse_from(["tool", "--timeout", "10"]).unwrap();
    assert_eq!(joined.matches(), split.matches());
    assert_eq!(joined.matches().get_uint("timeout"), Some(10));
}

#[test]
fn terminator_binds_in_order() {
    let cli = Cli::new()
        .option(OptionSpec::string("p1").positional())
        .option(OptionSpec::string("p2").positional());
    let parsed = cli.try_parse_from(["tool", "--", "foo", "bar"]).unwrap();
    assert_eq!(parsed.matches().get_str("p1"), Some("foo"));
    assert_eq!(parsed.matches().get_str("p2"), Some("bar"));
}

#[test]
fn missing_required_names_option() {
    let cli = tool().option(OptionSpec::unsigned("port").value_name("PORT").required());
    let err = cli.try_parse_from(["tool", "-v"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequired);
    assert_eq!(err.kind().class(), ErrorClass::Constraint);
    assert!(err.to_string().contains("--port"), "{err}");
}

#[test]
fn required_exclusion_pair() {
    let cli = tool()
        .option(OptionSpec::boolean("a").required())
        .option(OptionSpec::boolean("b").required())
        .exclusion(Exclusion::new("a", "b"));
    assert_eq!(
        cli.try_parse_from(["tool"]).unwrap_err().kind(),
        ErrorKind::ExclusionUnsatisfied
    );
    assert!(cli.try_parse_from(["tool", "--a"]).is_ok());
    assert!(cli.try_parse_from(["tool", "--b"]).is_ok());
    assert_eq!(
        cli.try_parse_from(["tool", "--a", "--b"]).unwrap_err().kind(),
        ErrorKind::MutuallyExclusive
    );
}

#[test]
fn subcommand_options_are_invisible_elsewhere() {
    let cli = tool();
    assert!(cli.try_parse_from(["tool", "run", "--fast"]).is_ok());

    let err = cli.try_parse_from(["tool", "debug", "--fast"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    assert_eq!(err.unexpected_token(), Some("--fast"));
}

#[test]
fn oversized_string_fails() {
    let cli = tool().max_string_len(8);
    let parsed = cli.try_parse_from(["tool", "--label", "12345678"]).unwrap();
    assert_eq!(parsed.matches().get_str("label"), Some("12345678"));

    let err = cli.try_parse_from(["tool", "--label", "123456789"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueTooLong);
}

#[test]
fn default_string_limit() {
    let cli = tool();
    let at_limit = "x".repeat(tabarg::DEFAULT_MAX_STRING_LEN);
    assert!(cli.try_parse_from(["tool", "--label", at_limit.as_str()]).is_ok());
    let over = "x".repeat(tabarg::DEFAULT_MAX_STRING_LEN + 1);
    assert!(cli.try_parse_from(["tool", "--label", over.as_str()]).is_err());
}

#[test]
fn numeric_literals() {
    assert_eq!(tabarg::parse_signed("0x2a").unwrap(), 42);
    assert_eq!(tabarg::parse_signed("0b101010").unwrap(), 42);
    assert!(tabarg::parse_signed("2a").is_err());
    assert!(tabarg::parse_signed("").is_err());
}

#[test]
fn help_is_an_error_kind() {
    let err = tool().try_parse_from(["/usr/bin/tool", "-h"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert_eq!(err.kind().class(), ErrorClass::Help);
    let help = anstream::adapter::strip_str(err.message()).to_string();
    assert!(help.starts_with("Usage:\n  tool [command]\n"), "{help}");
}

#[test]
fn free_function_entry_point() {
    let commands = [Command::new("run"), Command::terminator()];
    let options = [
        OptionSpec::boolean("fast").scope(Scope::Subcommand(0)),
        OptionSpec::terminator(),
    ];
    let exclusions: Vec<Exclusion> = Vec::new();
    let parsed = tabarg::try_parse(commands, options, exclusions, ["tool", "run", "--fast"]).unwrap();
    assert_eq!(parsed.subcommand(), Some("run"));
    assert!(parsed.matches().get_flag("fast"));
}

#[cfg(unix)]
#[test]
fn non_utf8_value() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt as _;

    let cli = tool();
    let raw = [
        OsString::from("tool"),
        OsString::from("--label"),
        OsString::from_vec(vec![b'a', 0xff]),
    ];
    let err = cli.try_parse_from(raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
}

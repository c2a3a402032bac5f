use crate::util::demo_cmd;

#[test]
fn root_help() {
    demo_cmd()
        .arg("--help")
        .assert()
        .code(0)
        .stdout_matches(
            r#"Usage:
  demo [command]
  demo [options]

Available commands:
  run                Start the server
  debug              Inspect a running server

Available options:
  -v --verbose       Log every request
  -c --config <FILE> Configuration file
  -h --help          Show this help menu

Examples:
  demo run --port 8080    Listen on port 8080
  demo debug --json 4242  Dump process 4242

Use `demo [command] --help` to get help for a specific command
"#,
        )
        .stderr_matches("");
}

#[test]
fn subcommand_help() {
    demo_cmd()
        .args(["run", "-h"])
        .assert()
        .code(0)
        .stdout_matches(
            r#"Usage:
  demo run [options]

Available options:
  -v --verbose       Log every request
  -p --port <PORT>   Port to listen on
     --offset <SECS> Clock skew to apply
  -h --help          Show this help menu

Examples:
  demo run --port 8080    Listen on port 8080
  demo debug --json 4242  Dump process 4242

Use `demo [command] --help` to get help for a specific command
"#,
        );
    demo_cmd()
        .args(["debug", "--text", "--help"])
        .assert()
        .code(0)
        .stdout_matches(
            r#"Usage:
  demo debug [options] pid

Available options:
  -v --verbose Log every request
     --json    Print as JSON
     --text    Print as text
  -h --help    Show this help menu

Positional options:
  pid          Process to inspect

Examples:
  demo run --port 8080    Listen on port 8080
  demo debug --json 4242  Dump process 4242

Use `demo [command] --help` to get help for a specific command
"#,
        );
}

#[test]
fn help_after_terminator_is_not_help() {
    demo_cmd()
        .args(["debug", "--json", "--", "--help"])
        .assert()
        .code(1)
        .stdout_matches("")
        .stderr_matches(
            "demo: Invalid unsigned numerical sequence for option `<pid>`: --help\n",
        );
}

#[test]
fn run() {
    demo_cmd()
        .args(["run", "-p", "8080", "--offset", "-5", "-v"])
        .assert()
        .success()
        .stdout_matches(
            r#"{"subcommand":"run","matches":{"verbose":true,"port":8080,"offset":-5}}
"#,
        );
}

#[test]
fn root_without_arguments() {
    demo_cmd()
        .assert()
        .success()
        .stdout_matches(
            r#"{"subcommand":null,"matches":{}}
"#,
        );
}

#[test]
fn debug_with_terminator() {
    demo_cmd()
        .args(["debug", "--json", "--", "0x1092"])
        .assert()
        .success()
        .stdout_matches(
            r#"{"subcommand":"debug","matches":{"json":true,"pid":4242}}
"#,
        );
}

#[test]
fn unknown_argument() {
    demo_cmd()
        .args(["run", "--port", "80", "--config", "demo.toml"])
        .assert()
        .code(1)
        .stdout_matches("")
        .stderr_matches(
            "demo: Unknown argument `--config`. For more information see demo --help\n",
        );
}

#[test]
fn missing_required() {
    demo_cmd()
        .arg("run")
        .assert()
        .code(1)
        .stderr_matches(
            "demo: Missing required argument `--port`. For more information see demo --help\n",
        );
}

#[test]
fn exclusions() {
    demo_cmd()
        .args(["debug", "--json", "--text"])
        .assert()
        .code(1)
        .stderr_matches(
            "demo: Options `--json` and `--text` are mutually exclusive. Please provide only one of them. For more information see demo --help\n",
        );
    demo_cmd()
        .arg("debug")
        .assert()
        .code(1)
        .stderr_matches(
            "demo: One of the options `--json` and `--text` is required because they are both required but mutually exclusive. For more information see demo --help\n",
        );
}

#[test]
fn invalid_value_has_no_hint() {
    demo_cmd()
        .args(["run", "--port", "http"])
        .assert()
        .code(1)
        .stderr_matches(
            "demo: Invalid unsigned numerical sequence for option `--port`: http\n",
        );
}

#[test]
fn clustered_flags() {
    demo_cmd()
        .args(["run", "-vp", "80"])
        .assert()
        .code(1)
        .stderr_matches("demo: Multiple shorthand options at once are not yet supported\n");
}

use tabarg::Cli;
use tabarg::Command;
use tabarg::Example;
use tabarg::Exclusion;
use tabarg::OptionSpec;
use tabarg::Scope;

fn cli() -> Cli {
    Cli::new()
        .command(Command::new("run").help("Start the server"))
        .command(Command::new("debug").help("Inspect a running server"))
        .option(
            OptionSpec::boolean("verbose")
                .short('v')
                .help("Log every request"),
        )
        .option(
            OptionSpec::string("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file")
                .scope(Scope::Root),
        )
        .option(
            OptionSpec::unsigned("port")
                .short('p')
                .value_name("PORT")
                .help("Port to listen on")
                .required()
                .scope(Scope::Subcommand(0)),
        )
        .option(
            OptionSpec::integer("offset")
                .value_name("SECS")
                .help("Clock skew to apply")
                .scope(Scope::Subcommand(0)),
        )
        .option(
            OptionSpec::boolean("json")
                .help("Print as JSON")
                .required()
                .scope(Scope::Subcommand(1)),
        )
        .option(
            OptionSpec::boolean("text")
                .help("Print as text")
                .required()
                .scope(Scope::Subcommand(1)),
        )
        .option(
            OptionSpec::unsigned("pid")
                .positional()
                .help("Process to inspect")
                .scope(Scope::Subcommand(1)),
        )
        .exclusion(Exclusion::new("json", "text"))
        .example(Example::new("run --port 8080", "Listen on port 8080"))
        .example(Example::new("debug --json 4242", "Dump process 4242"))
}

fn main() {
    let parsed = cli().parse();
    let json = serde_json::to_string(&parsed).expect("parse results are always serializable");
    println!("{json}");
}

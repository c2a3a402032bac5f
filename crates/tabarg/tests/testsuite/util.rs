/// The `demo` example, built once per test run
pub(crate) fn demo_cmd() -> snapbox::cmd::Command {
    static BIN: once_cell::sync::Lazy<std::path::PathBuf> = once_cell::sync::Lazy::new(|| {
        escargot::CargoBuild::new()
            .package("tabarg")
            .example("demo")
            .features("serde")
            .current_release()
            .current_target()
            .run()
            .unwrap_or_else(|e| panic!("{e}"))
            .path()
            .to_owned()
    });
    snapbox::cmd::Command::new(&*BIN)
        .env_remove("CLICOLOR_FORCE")
        .env_remove("CLICOLOR")
}

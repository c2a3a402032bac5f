use std::io::Write as _;

use crate::Error;
use crate::ErrorKind;

const BIN: anstyle::Style = anstyle::Style::new()
    .bold()
    .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red)));
const LITERAL: anstyle::Style = anstyle::Style::new().bold();

/// Terminal reporting for a failed parse
///
/// Help goes to stdout and exits `0`; every other error goes to stderr as
/// `<bin>: <message>` and exits `1`.
pub trait ErrorExt {
    /// The process exit code for this error
    fn exit_code(&self) -> i32;

    /// Write the report to stdout or stderr, colored when the stream supports it
    fn print(&self, bin: &str) -> std::io::Result<()>;

    /// [`ErrorExt::print`], then exit the process
    fn exit(&self, bin: &str) -> !;
}

impl ErrorExt for Error {
    fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::DisplayHelp => 0,
            _ => 1,
        }
    }

    fn print(&self, bin: &str) -> std::io::Result<()> {
        if self.kind() == ErrorKind::DisplayHelp {
            let mut stdout = anstream::stdout().lock();
            write!(stdout, "{}", self.message())?;
            return stdout.flush();
        }

        let mut stderr = anstream::stderr().lock();
        write!(
            stderr,
            "{}{bin}:{} {}",
            BIN.render(),
            BIN.render_reset(),
            self.message()
        )?;
        if self.kind().suggests_help() {
            write!(
                stderr,
                ". For more information see {}{bin} --help{}",
                LITERAL.render(),
                LITERAL.render_reset()
            )?;
        }
        writeln!(stderr)?;
        stderr.flush()
    }

    fn exit(&self, bin: &str) -> ! {
        tracing::debug!(kind = ?self.kind(), "exiting");
        let _ = self.print(bin);
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(Error::new(ErrorKind::DisplayHelp, "usage").exit_code(), 0);
        assert_eq!(Error::new(ErrorKind::UnknownArgument, "nope").exit_code(), 1);
        assert_eq!(Error::definition("bad table").exit_code(), 1);
    }
}

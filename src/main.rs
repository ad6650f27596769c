//! Entry point for the `documentos` maintenance command.

use std::process::ExitCode;

fn main() -> ExitCode {
    documentos::run()
}

use std::io::Write;
use std::process::ExitCode;

use crate::error::Result;

/// Turn the outcome of a run into process output and an exit code.
///
/// On success only the `API Key: <key>` line goes to `out`. On failure `out`
/// is left untouched and `err` receives the diagnostic followed by `failed`.
pub fn report<W: Write, E: Write>(result: Result<String>, out: &mut W, err: &mut E) -> ExitCode {
    match result {
        Ok(key) => match writeln!(out, "\nAPI Key: {}", key) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "failed to write key: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            // Nothing useful can be done if stderr itself is gone.
            let _ = writeln!(err, "{}", e);
            let _ = writeln!(err, "failed");
            ExitCode::FAILURE
        }
    }
}

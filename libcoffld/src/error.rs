pub use anyhow::Error;

pub type Result<T = (), E = Error> = core::result::Result<T, E>;

/// Prints the diagnostic for a fatal error, then terminates the process. Argument, library
/// resolution and machine-selection failures all unwind here via `?`, so a failed invocation never
/// performs a partial translation or a partial backend call.
pub fn report_error_and_exit(error: &Error) -> ! {
    eprintln!("{error:#}");
    std::process::exit(1);
}

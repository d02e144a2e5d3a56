fn main() {
    match run() {
        Ok(true) => {}
        // The backend owns its own error reporting; its failure is simply our failure.
        Ok(false) => std::process::exit(1),
        Err(error) => libcoffld::error::report_error_and_exit(&error),
    }
}

fn run() -> libcoffld::error::Result<bool> {
    let driver = libcoffld::Driver::from_args(std::env::args().skip(1))?;
    driver.run()
}

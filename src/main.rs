mod cli;
mod error;
mod logger;
mod status;
mod throttle;
mod vcgencmd;

use std::io;
use std::process::ExitCode;

use cli::parse_args;
use status::Reporter;
use vcgencmd::Vcgencmd;

fn main() -> ExitCode {
    // Parse CLI arguments (only --help / --version)
    parse_args();

    logger::init();

    // Print the report, stopping at the first failed query
    let mut reporter = Reporter::new(Vcgencmd::new(), io::stdout().lock());
    match reporter.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("report aborted: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

use clap::Command;

pub fn build_cli() -> Command {
    Command::new("vcstat")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Reports Raspberry Pi firmware clocks, voltages, temperature and throttling")
        .long_about(
            "Queries the VideoCore firmware through vcgencmd and prints clock \
             frequencies, voltages, the core temperature and the decoded throttling \
             flags. Takes no arguments.",
        )
}

/// Validates the command line. The report itself takes no options.
pub fn parse_args() {
    build_cli().get_matches();
}

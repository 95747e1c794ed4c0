use std::process;

use clap::Parser;
use httpc::args::Args;
use httpc::{client, output};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TerminalMode, TermLogger};

fn main() {
    let args = Args::parse();
    init_logging(args.log_level);

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        debug!("{:?}", err);
        process::exit(1);
    }
}

/// Sends the request described by the arguments and prints or saves the result.
fn run(args: Args) -> httpc::Result<()> {
    let request = args.into_request()?;
    let response = client::execute(&request)?;
    output::write_output(&response, request.output.as_deref())
}

/// Sends log messages at the given level or above to stderr, keeping stdout for the response.
fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    // only fails if a logger is already set
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).unwrap_or_default();
}

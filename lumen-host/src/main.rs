//! lumenctl - Lumen RGB controller host tool
//!
//! Writes a solid-color program to the controller, then keeps re-sending it
//! so the controller does not fall back to its built-in animation.

use clap::Parser;
use embassy_executor::Spawner;
use log::error;

use lumen_host::args::RunOptions;

/// Main entry point
///
/// The std executor keeps polling after this task returns, so every path
/// ends the process explicitly.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Exits with status 0 for --help, 2 for usage errors
    let options = RunOptions::parse();

    init_logging(options.verbose);

    match lumen_host::run(&options).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr; RUST_LOG overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

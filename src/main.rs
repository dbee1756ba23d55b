use clap::Parser;
use keypadkit::cli::{run, Cli};
use keypadkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_level())?;

    run(cli)
}

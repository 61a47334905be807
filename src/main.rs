//! CLI entry point for the 2048 terminal game and simulator

use clap::Parser;
use twenty48::io::cli::{Cli, Runner};

fn main() -> twenty48::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    Runner::new(cli).run()
}

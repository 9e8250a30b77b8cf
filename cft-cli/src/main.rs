//! cft - carbon footprint calculator and run history CLI.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cft",
    version,
    about = "Carbon footprint calculator with local run history"
)]
struct Cli {
    #[command(subcommand)]
    command: cft_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cft_cmd::run(cli.command)
}

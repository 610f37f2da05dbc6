//! WWD CLI - Command line tool for inspecting vegetation index datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wwd-cli",
    version,
    about = "Whispering Woods vegetation data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wwd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wwd_cmd::run(cli.command)
}

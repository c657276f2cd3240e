//! SFPD CLI - Command line tool for the San Francisco police incident data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sfpd-cli",
    version,
    about = "San Francisco police incident data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sfpd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sfpd_cmd::run(cli.command)
}

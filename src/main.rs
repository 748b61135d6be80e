use clap::Parser;
use treesync::config::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    treesync::commands::sync::run(cli)?;
    Ok(())
}

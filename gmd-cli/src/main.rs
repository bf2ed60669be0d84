//! GMD CLI - Command line driver for the Gapminder dashboard core.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gmd-cli",
    version,
    about = "Gapminder dashboard projections and event replay"
)]
struct Cli {
    #[command(flatten)]
    args: gmd_cmd::DashboardArgs,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: gmd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::debug!("[GMD] cli: loading {}", cli.args.dataset.display());
    gmd_cmd::run(&cli.args, cli.command)
}

use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sf")]
#[command(about = "Storefront back-office console")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

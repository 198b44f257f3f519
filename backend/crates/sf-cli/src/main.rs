//! sf - storefront back-office console
//!
//! # Examples
//!
//! ```bash
//! # Sign in as a webmaster
//! sf admin-login admin@shop.test --password '...'
//!
//! # Find inactive franchise users
//! sf users list --category franchise --status inactive --pretty
//!
//! # Repair every user document missing newer attributes
//! sf users reconcile
//! ```

use sf_cli::logger::{self, LogTarget};
use sf_cli::{Cli, Confirmer, Console, Result as CliErrorResult};
use sf_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        LogTarget::new(config.log_file_path()?, config.logging.colored),
    )?;
    config.log_summary();

    let mut console = Console::open(&config).await?;
    let stdin = std::io::stdin();
    let mut confirmer = Confirmer::new(cli.yes, stdin.lock(), std::io::stderr());

    let value = console.execute(cli.command, &mut confirmer).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}

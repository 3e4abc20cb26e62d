//
//  cloudflare-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cloudflare_client::cli::{exit_code_for, Cli, Commands};
use cloudflare_client::exit_codes;
use cloudflare_client::output::{OutputFormat, OutputWriter};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::new(OutputFormat::Table).write_error(&format!("{e:#}"));
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Logs to stderr, filtered by `CF_DEBUG` (e.g. `CF_DEBUG=debug`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("CF_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Zone(cmd) => cmd.run(&cli.global).await,
        Commands::Dns(cmd) => cmd.run(&cli.global).await,
        Commands::Ips(cmd) => cmd.run(&cli.global).await,
        Commands::User(cmd) => cmd.run(&cli.global).await,
        Commands::Token(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", cloudflare_client::APP_NAME, cloudflare_client::VERSION);
            Ok(())
        }
    }
}

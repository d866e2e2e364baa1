//! Shop Application CLI

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
pub async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    if let Err(error) = cli::Cli::parse().run().await {
        eprintln!("{error}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

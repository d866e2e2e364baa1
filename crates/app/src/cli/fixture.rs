use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub(crate) struct FixtureCommand {
    #[command(subcommand)]
    command: FixtureSubcommand,
}

#[derive(Debug, Subcommand)]
enum FixtureSubcommand {
    /// Validate a catalog fixture and list its products
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Path to the YAML catalog fixture
    #[arg(long, env = "CATALOG_FIXTURE")]
    path: PathBuf,
}

pub(crate) async fn run(command: FixtureCommand) -> Result<(), String> {
    match command.command {
        FixtureSubcommand::Check(args) => check(args).await,
    }
}

async fn check(args: CheckArgs) -> Result<(), String> {
    let (ctx, refs) = super::load(&args.path).await?;

    let mut names: Vec<_> = refs.into_iter().collect();
    names.sort();

    for (name, reference) in names {
        let product = ctx
            .products
            .get_product(reference)
            .await
            .map_err(|error| format!("failed to read {name}: {error}"))?;

        println!(
            "{name}\t{reference}\t{}\t{}",
            product.price(),
            product.display_name()
        );
    }

    Ok(())
}

use std::{path::Path, sync::Arc};

use clap::{Parser, Subcommand};
use jiff::Timestamp;
use rustc_hash::FxHashMap;
use shop::{catalog::Catalog, fixtures::CatalogFixture, products::ProductRef};
use shop_app::{context::AppContext, store::Store};

mod cart;
mod fixture;

#[derive(Debug, Parser)]
#[command(name = "shop-app", about = "Shop CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Fixture(fixture::FixtureCommand),
    Cart(cart::CartCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Fixture(command) => fixture::run(command).await,
            Commands::Cart(command) => cart::run(command).await,
        }
    }
}

/// Load a fixture file into a fresh store, returning the context and the
/// reference each fixture name was stored under.
async fn load(path: &Path) -> Result<(AppContext, FxHashMap<String, ProductRef>), String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    let mut catalog = Catalog::new();

    let refs = CatalogFixture::from_yaml(&contents)
        .and_then(|fixture| fixture.load_into(&mut catalog, Timestamp::now()))
        .map_err(|error| format!("failed to load {}: {error}", path.display()))?;

    Ok((AppContext::from_store(Arc::new(Store::with_catalog(catalog))), refs))
}

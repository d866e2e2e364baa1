//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Catalog seeding settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// YAML fixture to seed the catalog from; the catalog starts empty when unset
    #[arg(long, env = "CATALOG_FIXTURE")]
    pub catalog_fixture: Option<PathBuf>,
}

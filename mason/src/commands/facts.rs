use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use mason_manifest::MasonToml;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct FactsCommand {
    /// Path to mason.toml (defaults to ./mason.toml)
    #[arg(short, long, default_value = "mason.toml")]
    pub config: PathBuf,
}

impl FactsCommand {
    pub fn run(&self) -> Result<()> {
        let mason_toml = MasonToml::open(&self.config).unwrap_or_exit();

        let facts = ops::facts(mason_toml.manifest())?;
        let json = serde_json::to_string_pretty(&facts).wrap_err("Failed to serialize facts")?;
        println!("{}", json);

        Ok(())
    }
}

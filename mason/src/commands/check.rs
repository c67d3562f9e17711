use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mason_manifest::MasonToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mason.toml (defaults to ./mason.toml)
    #[arg(short, long, default_value = "mason.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let mason_toml = MasonToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&mason_toml)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

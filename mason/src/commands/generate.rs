use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mason_manifest::MasonToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mason.toml (defaults to ./mason.toml)
    #[arg(short, long, default_value = "mason.toml")]
    pub config: PathBuf,

    /// Output file (overrides [unit].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Setter prefix (overrides [generator].prefix; "" names setters after fields)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Print the generated source without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mason_toml = MasonToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &mason_toml,
            GenerateOptions {
                output: self.output.as_deref(),
                prefix: self.prefix.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

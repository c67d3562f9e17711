//! Generate operation - builder synthesis for the manifest's unit.

use std::path::Path;

use eyre::{Context, Result};
use mason_codegen::{GeneratorDriver, GeneratorOptions, Indent};
use mason_java::{JavaFile, JavaWorkingCopy};
use mason_manifest::{MasonToml, validate_prefix};
use tracing::debug;

use crate::reports::GenerateReport;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file; falls back to the manifest's.
    pub output: Option<&'a Path>,
    /// Setter prefix; falls back to the manifest's.
    pub prefix: Option<&'a str>,
    /// Whether to render without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs one generation pass over the unit described by the manifest and
/// writes the result unless this is a dry run.
pub fn generate(mason_toml: &MasonToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let manifest = mason_toml.manifest();
    let prefix = opts.prefix.unwrap_or(manifest.generator.prefix());
    if let Some(reason) = validate_prefix(prefix) {
        eyre::bail!("invalid --prefix '{}': {}", prefix, reason);
    }

    let file = JavaFile::from_manifest(manifest).wrap_err("Failed to build compilation unit")?;

    let target = opts
        .output
        .map(Path::to_path_buf)
        .or_else(|| mason_toml.output_path());
    let indent = Indent::from_width(manifest.generator.indent_width());
    let mut copy = JavaWorkingCopy::new(file).indent(indent);
    if !opts.dry_run {
        if let Some(path) = &target {
            copy = copy.target(path);
        }
    }

    debug!(prefix, dry_run = opts.dry_run, "starting generation");

    let report = GeneratorDriver::new(GeneratorOptions::new().prefix(prefix))
        .generate(copy)
        .wrap_err("Failed to generate builders")?;

    Ok(GenerateReport {
        classes: report.classes,
        diagnostics: report.diagnostics,
        source: report.output.source,
        written: report.output.path,
        dry_run: opts.dry_run,
    })
}

//! Facts operation - what the generator sees in each class.

use eyre::{Context, Result};
use mason_codegen::GeneratorDriver;
use mason_ir::ClassFacts;
use mason_java::{JavaFile, JavaWorkingCopy};
use mason_manifest::Manifest;

/// Extract the facts of every class declaration in the manifest's unit.
///
/// Non-class declarations are left out. Nothing is written.
pub fn facts(manifest: &Manifest) -> Result<Vec<ClassFacts>> {
    let file = JavaFile::from_manifest(manifest).wrap_err("Failed to build compilation unit")?;
    let mut copy = JavaWorkingCopy::new(file);

    GeneratorDriver::default()
        .facts(&mut copy)
        .wrap_err("Failed to read class facts")
}

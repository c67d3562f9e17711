use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a mason.toml file with both raw content and parsed manifest.
pub struct MasonToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl MasonToml {
    /// Open and parse a mason.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Where the generated unit is written, relative to the manifest's directory.
    ///
    /// Uses `[unit].output` when set, otherwise `<FirstType>.java`.
    pub fn output_path(&self) -> Option<PathBuf> {
        let dir = self.path.parent().unwrap_or(Path::new(""));
        match &self.manifest.unit.output {
            Some(output) => Some(dir.join(output)),
            None => self.manifest.default_output_name().map(|name| dir.join(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open_and_output_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mason.toml");
        std::fs::write(&path, "[[class]]\nname = \"Person\"\n").unwrap();

        let file = MasonToml::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert!(file.content().contains("Person"));
        assert_eq!(file.manifest().classes.len(), 1);
        assert_eq!(file.output_path(), Some(dir.path().join("Person.java")));
    }

    #[test]
    fn test_explicit_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mason.toml");
        std::fs::write(
            &path,
            "[unit]\noutput = \"src/Model.java\"\n\n[[class]]\nname = \"Person\"\n",
        )
        .unwrap();

        let file = MasonToml::open(&path).unwrap();
        assert_eq!(file.output_path(), Some(dir.path().join("src/Model.java")));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = MasonToml::open(dir.path().join("mason.toml")).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}

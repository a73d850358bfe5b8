//! The sysroot `Manifest` file.
//!
//! One `name version` line per installed component, sorted by name.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::core::errors::DeployError;
use crate::core::version::VersionNumber;
use crate::util::fs;

/// The name of the manifest file in a sysroot directory.
pub const MANIFEST_NAME: &str = "Manifest";

/// The installed version of each component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, VersionNumber>,
}

impl Manifest {
    /// Load a manifest. A missing file is an empty manifest.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Manifest::default());
        }

        let contents = fs::read_to_string(path)?;
        Ok(Manifest::parse(&contents)?)
    }

    pub fn parse(contents: &str) -> Result<Self, DeployError> {
        let mut entries = BTreeMap::new();

        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let invalid = |detail: String| {
                DeployError::config("invalid 'Manifest' file")
                    .with_detail(format!("line {}: {}", number + 1, detail))
            };

            let fields: Vec<&str> = line.split_whitespace().collect();
            let [name, version] = fields.as_slice() else {
                return Err(invalid(format!("expected 'name version' but got '{}'", line)));
            };

            let version = version
                .parse::<VersionNumber>()
                .map_err(|e| invalid(e.to_string()))?;
            entries.insert(name.to_string(), version);
        }

        Ok(Manifest { entries })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write_string(path, &self.to_string())
    }

    pub fn get(&self, name: &str) -> Option<&VersionNumber> {
        self.entries.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, version: VersionNumber) {
        self.entries.insert(name.into(), version);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VersionNumber)> {
        self.entries.iter()
    }
}

impl std::fmt::Display for Manifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, version) in &self.entries {
            writeln!(f, "{} {}", name, version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_sorted_output() {
        let mut manifest = Manifest::default();
        manifest.insert("zlib", "1.2.11".parse().unwrap());
        manifest.insert("Python", "3.7.8".parse().unwrap());
        manifest.insert("Qt", "5.15".parse().unwrap());

        assert_eq!(manifest.to_string(), "Python 3.7.8\nQt 5.15.0\nzlib 1.2.11\n");
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_NAME);

        let mut manifest = Manifest::default();
        manifest.insert("OpenSSL", "1.1.1g".parse().unwrap());
        manifest.save(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_missing_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(Manifest::load(&tmp.path().join(MANIFEST_NAME)).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_line() {
        let err = Manifest::parse("Python\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "invalid 'Manifest' file");
    }
}

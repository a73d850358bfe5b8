//! Choosing the parts an application is built from.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::part::{PartKind, PartName, ResolvedPart};
use crate::core::platform::Architecture;
use crate::core::scope::ScopedValue;
use crate::sysroot::parts::PartCatalog;

/// The component whose core modules are always needed.
const PYTHON: &str = "Python";

/// Selects parts from a sysroot's catalog, following dependencies.
pub struct Selector<'a> {
    catalog: &'a PartCatalog,
    /// Component names in the order they are searched for parent packages.
    components: Vec<&'a str>,
    android_api: Option<u32>,
    selected: BTreeMap<PartName, &'a ResolvedPart>,
}

impl<'a> Selector<'a> {
    pub fn new(
        catalog: &'a PartCatalog,
        components: Vec<&'a str>,
        android_api: Option<u32>,
    ) -> Self {
        Selector {
            catalog,
            components,
            android_api,
            selected: BTreeMap::new(),
        }
    }

    /// Select the core Python modules and the project's parts. The project's
    /// names may be scoped and default to the `Python` component.
    pub fn select(
        mut self,
        requested: &[String],
        target: Architecture,
    ) -> Result<Vec<&'a ResolvedPart>> {
        let core: Vec<&ResolvedPart> = self
            .catalog
            .for_component(PYTHON)
            .filter(|part| {
                part.core
                    && matches!(
                        part.kind,
                        PartKind::PythonModule { .. } | PartKind::PythonPackage { .. }
                    )
            })
            .collect();

        for part in core {
            self.add(&part.name.clone(), true);
        }

        for text in requested {
            let scoped = ScopedValue::parse(text)?;
            let Some(text) = scoped.resolve(target) else {
                continue;
            };

            let name = PartName::parse(text, PYTHON);
            if !self.catalog.contains(&name) {
                warn!("{} is not available for {} and is ignored", name, target);
                continue;
            }

            self.add_with_parents(&name);
        }

        Ok(self.selected.into_values().collect())
    }

    /// Add a part together with the packages containing it. A part whose
    /// package isn't provided by any component is ignored.
    fn add_with_parents(&mut self, name: &PartName) {
        if let Some(package) = name.parent() {
            // A package may be provided by a different component.
            let found = self
                .components
                .iter()
                .map(|component| PartName::new(*component, package.name.clone()))
                .find(|candidate| self.catalog.contains(candidate));

            let Some(found) = found else {
                debug!("{} has no package and is ignored", name);
                return;
            };

            self.add_with_parents(&found);
        }

        self.add(name, true);
    }

    fn add(&mut self, name: &PartName, follow_deps: bool) {
        if self.selected.contains_key(name) {
            return;
        }

        let Some(part) = self.catalog.get(name) else {
            debug!("{} is unavailable", name);
            return;
        };

        if let (Some(min), Some(api)) = (part.min_android_api, self.android_api) {
            if api < min {
                debug!("{} needs Android API {} or later", name, min);
                return;
            }
        }

        self.selected.insert(name.clone(), part);

        if follow_deps {
            for dep in &part.deps {
                self.add_with_parents(dep);
            }
        }

        for dep in &part.hidden_deps {
            self.add(dep, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysroot::specification::Specification;
    use crate::sysroot::Sysroot;
    use crate::test_support::fake_registry;
    use std::path::Path;

    const SPEC: &str = r#"
[zlib]
version = "1.2.11"

[Python]
version = "3.7.8"
"#;

    fn catalog(target: Architecture) -> PartCatalog {
        let spec =
            Specification::parse(Path::new("/work/sysroot.toml"), SPEC, &fake_registry()).unwrap();
        let sysroot = Sysroot::new(&spec, Architecture::Linux64, target, None).unwrap();
        sysroot.parts().unwrap()
    }

    fn names(parts: &[&ResolvedPart]) -> Vec<String> {
        parts.iter().map(|part| part.name.to_string()).collect()
    }

    #[test]
    fn test_core_parts_always_selected() {
        let catalog = catalog(Architecture::Linux64);
        let selector = Selector::new(&catalog, vec!["zlib", "Python"], None);
        let parts = selector.select(&[], Architecture::Linux64).unwrap();

        // Core extension modules are part of the interpreter.
        assert_eq!(names(&parts), ["Python:encodings", "Python:importlib"]);
    }

    #[test]
    fn test_dependencies_are_followed() {
        let catalog = catalog(Architecture::Linux64);
        let selector = Selector::new(&catalog, vec!["zlib", "Python"], None);
        let requested = vec!["json".to_string(), "zlib".to_string(), "win#winreg".to_string()];
        let parts = selector.select(&requested, Architecture::Linux64).unwrap();

        assert_eq!(
            names(&parts),
            [
                "Python:encodings",
                "Python:importlib",
                "Python:json",
                "Python:re",
                "Python:zlib",
                "zlib:zlib",
            ]
        );
    }

    #[test]
    fn test_unavailable_parts_are_skipped() {
        let catalog = catalog(Architecture::Linux64);
        let selector = Selector::new(&catalog, vec!["zlib", "Python"], None);

        // No OpenSSL component, so _ssl isn't available.
        let requested = vec!["_ssl".to_string(), "Python:nosuchmodule".to_string()];
        let parts = selector.select(&requested, Architecture::Linux64).unwrap();
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_parent_packages() {
        let catalog = catalog(Architecture::Linux64);
        let selector = Selector::new(&catalog, vec!["zlib", "Python"], None);

        // There is no xml package so xml.dom is of no use.
        let requested = vec!["email.mime".to_string(), "xml.dom".to_string()];
        let parts = selector.select(&requested, Architecture::Linux64).unwrap();

        assert_eq!(
            names(&parts),
            [
                "Python:email",
                "Python:email.mime",
                "Python:encodings",
                "Python:importlib",
            ]
        );
    }

    #[test]
    fn test_android_api_level() {
        let catalog = catalog(Architecture::Android32);
        let requested = vec!["ctypes".to_string()];

        let parts = Selector::new(&catalog, vec!["Python"], Some(21))
            .select(&requested, Architecture::Android32)
            .unwrap();
        assert!(!names(&parts).contains(&"Python:ctypes".to_string()));

        let parts = Selector::new(&catalog, vec!["Python"], Some(24))
            .select(&requested, Architecture::Android32)
            .unwrap();
        assert!(names(&parts).contains(&"Python:ctypes".to_string()));
    }
}

//! The catalog of parts available in a sysroot.
//!
//! Each component's declared parts are normalised for the target and then
//! checked for availability. A part is available only if everything it
//! requires is available. Optional dependencies are dropped when they are
//! missing, as are `!` dependencies when an `OpenSSL` component is present.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use tracing::debug;

use crate::core::part::{NormalisedPart, Part, PartName, Requirement, ResolvedPart};
use crate::sysroot::Sysroot;

/// The name of the component whose presence satisfies `!` dependencies.
const OPENSSL: &str = "OpenSSL";

/// Every part available for a sysroot's target.
#[derive(Debug, Clone, Default)]
pub struct PartCatalog {
    parts: BTreeMap<PartName, ResolvedPart>,
}

impl PartCatalog {
    /// Build the catalog for the components of a sysroot.
    pub fn for_sysroot(sysroot: &Sysroot) -> Result<Self> {
        let mut normalised = Vec::new();

        for component in sysroot.components() {
            let ctx = sysroot.context(component);

            for (name, alternatives) in component.plugin.provides(&ctx)? {
                if let Some(part) = Part::normalise(
                    &component.name,
                    &name,
                    &alternatives,
                    &component.version,
                    sysroot.target,
                )? {
                    normalised.push(part);
                }
            }
        }

        let has_openssl = sysroot.get_component(OPENSSL).is_some();
        Ok(PartCatalog::resolve(normalised, has_openssl))
    }

    /// Decide the availability of a set of normalised parts.
    pub fn resolve(normalised: Vec<NormalisedPart>, has_openssl: bool) -> Self {
        let order: Vec<PartName> = normalised.iter().map(|p| p.part.name.clone()).collect();

        let mut resolver = Resolver {
            pending: normalised
                .into_iter()
                .map(|p| (p.part.name.clone(), p))
                .collect(),
            state: HashMap::new(),
            has_openssl,
        };

        for name in &order {
            resolver.is_available(name);
        }

        let parts = resolver
            .state
            .into_iter()
            .filter_map(|(name, state)| match state {
                State::Available(part) => Some((name, part)),
                _ => None,
            })
            .collect();

        PartCatalog { parts }
    }

    pub fn get(&self, name: &PartName) -> Option<&ResolvedPart> {
        self.parts.get(name)
    }

    pub fn contains(&self, name: &PartName) -> bool {
        self.parts.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedPart> {
        self.parts.values()
    }

    /// The available parts provided by one component.
    pub fn for_component<'a>(
        &'a self,
        component: &'a str,
    ) -> impl Iterator<Item = &'a ResolvedPart> {
        self.parts
            .values()
            .filter(move |part| part.name.component == component)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

enum State {
    /// Being resolved, and assumed available while its dependencies are.
    InProgress,
    Available(ResolvedPart),
    Unavailable,
}

struct Resolver {
    pending: HashMap<PartName, NormalisedPart>,
    state: HashMap<PartName, State>,
    has_openssl: bool,
}

impl Resolver {
    fn is_available(&mut self, name: &PartName) -> bool {
        match self.state.get(name) {
            Some(State::InProgress | State::Available(_)) => true,
            Some(State::Unavailable) => false,
            None => match self.pending.remove(name) {
                Some(part) => self.add_part(part),
                None => false,
            },
        }
    }

    fn add_part(&mut self, normalised: NormalisedPart) -> bool {
        let NormalisedPart { mut part, deps } = normalised;
        let name = part.name.clone();
        self.state.insert(name.clone(), State::InProgress);

        let mut available_deps = Vec::new();

        for dep in deps {
            if dep.requirement == Requirement::WithoutOpenSsl && self.has_openssl {
                continue;
            }

            if self.is_available(&dep.name) {
                available_deps.push(dep.name);
            } else if dep.requirement != Requirement::Optional {
                debug!("{} is unavailable because {} is unavailable", name, dep.name);
                self.state.insert(name, State::Unavailable);
                return false;
            }
        }

        let hidden_deps = std::mem::take(&mut part.hidden_deps);
        part.hidden_deps = hidden_deps
            .into_iter()
            .filter(|dep| self.is_available(dep))
            .collect();
        part.deps = available_deps;

        self.state.insert(name, State::Available(part));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::Architecture;
    use crate::core::version::VersionNumber;

    fn normalise(component: &str, name: &str, part: Part) -> NormalisedPart {
        Part::normalise(
            component,
            name,
            &[part],
            &VersionNumber::new(3, 7, 8),
            Architecture::Linux64,
        )
        .unwrap()
        .unwrap()
    }

    fn name(text: &str) -> PartName {
        PartName::parse(text, "Python")
    }

    #[test]
    fn test_missing_required_dep_makes_part_unavailable() {
        let catalog = PartCatalog::resolve(
            vec![
                normalise("Python", "ssl", Part::python_module().deps(&["_ssl"])),
                normalise("Python", "_ssl", Part::extension_module().deps(&["OpenSSL:openssl"])),
            ],
            false,
        );

        assert!(!catalog.contains(&name("ssl")));
        assert!(!catalog.contains(&name("_ssl")));
    }

    #[test]
    fn test_optional_dep_is_dropped() {
        let catalog = PartCatalog::resolve(
            vec![
                normalise("Python", "zipfile", Part::python_module().deps(&["?zlib", "shutil"])),
                normalise("Python", "shutil", Part::python_module()),
            ],
            false,
        );

        let part = catalog.get(&name("zipfile")).unwrap();
        assert_eq!(part.deps, vec![name("shutil")]);
    }

    #[test]
    fn test_openssl_dep_only_without_openssl() {
        let parts = || {
            vec![
                normalise("Python", "hashlib", Part::python_module().deps(&["!_md5"])),
                normalise("OpenSSL", "openssl", Part::library()),
            ]
        };

        let catalog = PartCatalog::resolve(parts(), true);
        assert!(catalog.get(&name("hashlib")).unwrap().deps.is_empty());

        let catalog = PartCatalog::resolve(parts(), false);
        assert!(!catalog.contains(&name("hashlib")));
    }

    #[test]
    fn test_cyclic_deps_are_available() {
        let catalog = PartCatalog::resolve(
            vec![
                normalise("Python", "a", Part::python_module().deps(&["b"])),
                normalise("Python", "b", Part::python_module().deps(&["a"])),
            ],
            false,
        );

        assert_eq!(catalog.get(&name("a")).unwrap().deps, vec![name("b")]);
        assert_eq!(catalog.get(&name("b")).unwrap().deps, vec![name("a")]);
    }

    #[test]
    fn test_for_component() {
        let catalog = PartCatalog::resolve(
            vec![
                normalise("Python", "os", Part::python_module()),
                normalise("zlib", "zlib", Part::library()),
            ],
            false,
        );

        let names: Vec<String> = catalog
            .for_component("zlib")
            .map(|p| p.name.to_string())
            .collect();
        assert_eq!(names, vec!["zlib:zlib"]);
        assert_eq!(catalog.len(), 2);
    }
}

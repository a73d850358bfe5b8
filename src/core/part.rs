//! Parts: the typed sub-units a component provides.
//!
//! Components declare parts with the builder methods of [`Part`]. Values
//! such as libraries, defines and dependency names may carry a `scope#`
//! prefix. A declared part is turned into a [`ResolvedPart`] for a specific
//! target and component version by [`Part::normalise`].

use std::fmt;

use crate::core::errors::DeployError;
use crate::core::platform::Architecture;
use crate::core::scope::{resolve_all, Scope, ScopedValue};
use crate::core::version::{VersionNumber, VersionPrefix};

/// Fields shared by parts that are compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compiled {
    pub defines: Vec<String>,
    pub libs: Vec<String>,
    pub includepath: Vec<String>,
}

/// The type-specific content of a part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartKind {
    /// A library provided by a component, linked against by the application.
    Library {
        compiled: Compiled,
        /// The libraries are shared and must be bundled with an Android app.
        bundle_shared_libs: bool,
    },
    /// A file copied verbatim into the application's resources.
    DataFile { file_name: String },
    /// An extension module compiled into the application.
    ExtensionModule {
        compiled: Compiled,
        source: Vec<String>,
        qmake_config: Vec<String>,
        qmake_cpp11: bool,
        qmake_qt: Vec<String>,
        /// The module's file in an existing Windows installation's `DLLs`.
        pyd: Option<String>,
        /// Other DLLs from `DLLs` that the module needs.
        dlls: Vec<String>,
    },
    /// A single pure Python module.
    PythonModule {
        /// Already embedded in the interpreter and never frozen.
        builtin: bool,
    },
    /// A pure Python package, frozen as a whole.
    PythonPackage { exclusions: Vec<String> },
}

impl PartKind {
    pub fn compiled(&self) -> Option<&Compiled> {
        match self {
            PartKind::Library { compiled, .. } | PartKind::ExtensionModule { compiled, .. } => {
                Some(compiled)
            }
            _ => None,
        }
    }

    fn compiled_mut(&mut self) -> Option<&mut Compiled> {
        match self {
            PartKind::Library { compiled, .. } | PartKind::ExtensionModule { compiled, .. } => {
                Some(compiled)
            }
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PartKind::Library { .. } => "library",
            PartKind::DataFile { .. } => "data file",
            PartKind::ExtensionModule { .. } => "extension module",
            PartKind::PythonModule { .. } => "Python module",
            PartKind::PythonPackage { .. } => "Python package",
        }
    }
}

/// A part as declared by a component, before target resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub kind: PartKind,
    pub min_version: Option<VersionPrefix>,
    pub max_version: Option<VersionPrefix>,
    pub version: Option<VersionPrefix>,
    pub target: String,
    pub min_android_api: Option<u32>,
    pub internal: bool,
    pub deps: Vec<String>,
    pub hidden_deps: Vec<String>,
    pub core: bool,
}

impl Part {
    fn new(kind: PartKind) -> Self {
        Part {
            kind,
            min_version: None,
            max_version: None,
            version: None,
            target: String::new(),
            min_android_api: None,
            internal: false,
            deps: Vec::new(),
            hidden_deps: Vec::new(),
            core: false,
        }
    }

    /// A component library. Libraries are always internal.
    pub fn library() -> Self {
        let mut part = Part::new(PartKind::Library {
            compiled: Compiled::default(),
            bundle_shared_libs: false,
        });
        part.internal = true;
        part
    }

    /// A data file. Data files are always internal.
    pub fn data_file(file_name: impl Into<String>) -> Self {
        let mut part = Part::new(PartKind::DataFile {
            file_name: file_name.into(),
        });
        part.internal = true;
        part
    }

    pub fn extension_module() -> Self {
        Part::new(PartKind::ExtensionModule {
            compiled: Compiled::default(),
            source: Vec::new(),
            qmake_config: Vec::new(),
            qmake_cpp11: false,
            qmake_qt: Vec::new(),
            pyd: None,
            dlls: Vec::new(),
        })
    }

    /// An extension module that is always compiled into the interpreter.
    pub fn core_extension_module() -> Self {
        Part::extension_module().core()
    }

    pub fn python_module() -> Self {
        Part::new(PartKind::PythonModule { builtin: false })
    }

    /// A Python module that every application requires.
    pub fn core_python_module() -> Self {
        Part::python_module().core()
    }

    pub fn python_package() -> Self {
        Part::new(PartKind::PythonPackage {
            exclusions: Vec::new(),
        })
    }

    pub fn min_version(mut self, version: impl Into<VersionPrefix>) -> Self {
        self.min_version = Some(version.into());
        self
    }

    pub fn max_version(mut self, version: impl Into<VersionPrefix>) -> Self {
        self.max_version = Some(version.into());
        self
    }

    pub fn version(mut self, version: impl Into<VersionPrefix>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn target(mut self, scope: impl Into<String>) -> Self {
        self.target = scope.into();
        self
    }

    pub fn min_android_api(mut self, api: u32) -> Self {
        self.min_android_api = Some(api);
        self
    }

    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    pub fn core(mut self) -> Self {
        self.core = true;
        self
    }

    pub fn deps<S: AsRef<str>>(mut self, deps: &[S]) -> Self {
        self.deps.extend(deps.iter().map(|d| d.as_ref().to_string()));
        self
    }

    pub fn hidden_deps<S: AsRef<str>>(mut self, deps: &[S]) -> Self {
        self.hidden_deps
            .extend(deps.iter().map(|d| d.as_ref().to_string()));
        self
    }

    pub fn defines<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let Some(compiled) = self.kind.compiled_mut() {
            compiled.defines.extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    pub fn libs<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let Some(compiled) = self.kind.compiled_mut() {
            compiled.libs.extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    pub fn includepath<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let Some(compiled) = self.kind.compiled_mut() {
            compiled
                .includepath
                .extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    pub fn source<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let PartKind::ExtensionModule { source, .. } = &mut self.kind {
            source.extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    pub fn qmake_config<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let PartKind::ExtensionModule { qmake_config, .. } = &mut self.kind {
            qmake_config.extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    pub fn qmake_qt<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let PartKind::ExtensionModule { qmake_qt, .. } = &mut self.kind {
            qmake_qt.extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    pub fn qmake_cpp11(mut self) -> Self {
        if let PartKind::ExtensionModule { qmake_cpp11, .. } = &mut self.kind {
            *qmake_cpp11 = true;
        }
        self
    }

    pub fn pyd(mut self, name: &str) -> Self {
        if let PartKind::ExtensionModule { pyd, .. } = &mut self.kind {
            *pyd = Some(name.to_string());
        }
        self
    }

    pub fn dlls<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let PartKind::ExtensionModule { dlls, .. } = &mut self.kind {
            dlls.extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    pub fn bundle_shared_libs(mut self) -> Self {
        if let PartKind::Library {
            bundle_shared_libs, ..
        } = &mut self.kind
        {
            *bundle_shared_libs = true;
        }
        self
    }

    pub fn builtin(mut self) -> Self {
        if let PartKind::PythonModule { builtin } = &mut self.kind {
            *builtin = true;
        }
        self
    }

    pub fn exclusions<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        if let PartKind::PythonPackage { exclusions } = &mut self.kind {
            exclusions.extend(values.iter().map(|v| v.as_ref().to_string()));
        }
        self
    }

    /// Check if the part applies to a version of its component.
    ///
    /// An exact `version` takes precedence over the `min_version` and
    /// `max_version` bounds, which are both inclusive.
    pub fn applies_to(&self, version: &VersionNumber) -> bool {
        if let Some(ref exact) = self.version {
            return version == exact;
        }

        if let Some(ref min) = self.min_version {
            if version < min {
                return false;
            }
        }

        if let Some(ref max) = self.max_version {
            if version > max {
                return false;
            }
        }

        true
    }

    /// Resolve one part from a set of version-specific alternatives.
    ///
    /// The first alternative that applies to `version` is chosen. If its
    /// target scope excludes `target` the part is not provided at all: later
    /// alternatives are not considered.
    pub fn normalise(
        component: &str,
        name: &str,
        alternatives: &[Part],
        version: &VersionNumber,
        target: Architecture,
    ) -> Result<Option<NormalisedPart>, DeployError> {
        let Some(part) = alternatives.iter().find(|p| p.applies_to(version)) else {
            return Ok(None);
        };

        if !part.target.parse::<Scope>()?.matches(target) {
            return Ok(None);
        }

        let mut kind = part.kind.clone();
        if let Some(compiled) = kind.compiled_mut() {
            compiled.defines = resolve_all(&compiled.defines, target)?;
            compiled.libs = resolve_all(&compiled.libs, target)?;
            compiled.includepath = resolve_all(&compiled.includepath, target)?;
        }
        if let PartKind::ExtensionModule { source, dlls, .. } = &mut kind {
            *source = resolve_all(&source[..], target)?;
            *dlls = resolve_all(&dlls[..], target)?;
        }

        let deps = normalise_deps(component, &part.deps, target)?;
        let hidden_deps = normalise_deps(component, &part.hidden_deps, target)?
            .into_iter()
            .map(|dep| dep.name)
            .collect();

        Ok(Some(NormalisedPart {
            part: ResolvedPart {
                name: PartName::new(component, name),
                kind,
                min_android_api: part.min_android_api,
                internal: part.internal,
                core: part.core,
                deps: Vec::new(),
                hidden_deps,
            },
            deps,
        }))
    }
}

/// Scope each dependency by its component and drop those for other targets.
fn normalise_deps(
    component: &str,
    deps: &[String],
    target: Architecture,
) -> Result<Vec<DepRef>, DeployError> {
    let mut normalised = Vec::new();

    for dep in deps {
        let (component, dep) = match dep.split_once(':') {
            Some((component, dep)) => (component, dep),
            None => (component, dep.as_str()),
        };

        let scoped = ScopedValue::parse(dep)?;
        let Some(dep) = scoped.resolve(target) else {
            continue;
        };

        let (requirement, dep) = if let Some(dep) = dep.strip_prefix('?') {
            (Requirement::Optional, dep)
        } else if let Some(dep) = dep.strip_prefix('!') {
            (Requirement::WithoutOpenSsl, dep)
        } else {
            (Requirement::Required, dep)
        };

        normalised.push(DepRef {
            name: PartName::new(component, dep),
            requirement,
        });
    }

    Ok(normalised)
}

/// A fully scoped part name, `component:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartName {
    pub component: String,
    pub name: String,
}

impl PartName {
    pub fn new(component: impl Into<String>, name: impl Into<String>) -> Self {
        PartName {
            component: component.into(),
            name: name.into(),
        }
    }

    /// Parse `component:name`, defaulting the component when there is none.
    pub fn parse(text: &str, default_component: &str) -> Self {
        match text.split_once(':') {
            Some((component, name)) => PartName::new(component, name),
            None => PartName::new(default_component, text),
        }
    }

    /// The parent package of a dotted Python name, if any.
    pub fn parent(&self) -> Option<PartName> {
        self.name
            .rsplit_once('.')
            .map(|(parent, _)| PartName::new(self.component.clone(), parent))
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.name)
    }
}

/// How a dependency affects the availability of the part needing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The part is unavailable without the dependency.
    Required,
    /// Written `?name`: used if available.
    Optional,
    /// Written `!name`: only needed when no `OpenSSL` component is specified.
    WithoutOpenSsl,
}

/// A dependency reference before availability has been decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepRef {
    pub name: PartName,
    pub requirement: Requirement,
}

/// A part resolved for a target, with its scoped values expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPart {
    pub name: PartName,
    pub kind: PartKind,
    pub min_android_api: Option<u32>,
    pub internal: bool,
    pub core: bool,
    /// The dependencies that are available.
    pub deps: Vec<PartName>,
    /// Dependencies whose own dependencies are not followed.
    pub hidden_deps: Vec<PartName>,
}

/// A resolved part together with its unchecked dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalisedPart {
    pub part: ResolvedPart,
    pub deps: Vec<DepRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionNumber {
        s.parse().unwrap()
    }

    #[test]
    fn test_applies_to_range() {
        let part = Part::python_module().min_version((3, 6)).max_version((3, 7));

        assert!(!part.applies_to(&v("3.5.10")));
        assert!(part.applies_to(&v("3.6.0")));
        assert!(part.applies_to(&v("3.7.8")));
        assert!(!part.applies_to(&v("3.8.0")));
    }

    #[test]
    fn test_exact_version_wins() {
        let part = Part::python_module().version((3, 5)).min_version((3, 7));

        assert!(part.applies_to(&v("3.5.2")));
        assert!(!part.applies_to(&v("3.7.0")));
    }

    #[test]
    fn test_unbounded_applies_everywhere() {
        assert!(Part::python_module().applies_to(&v("0.0.1")));
    }

    #[test]
    fn test_first_applicable_alternative_wins() {
        let alternatives = [
            Part::python_module().max_version((3, 6)).deps(&["_weakrefset"]),
            Part::python_module().min_version((3, 7)).deps(&["_abc"]),
        ];

        let part =
            Part::normalise("Python", "abc", &alternatives, &v("3.7.8"), Architecture::Linux64)
                .unwrap()
                .unwrap();

        assert_eq!(part.part.name.to_string(), "Python:abc");
        assert_eq!(part.deps[0].name, PartName::new("Python", "_abc"));
    }

    #[test]
    fn test_scope_excluded_part_has_no_fallback() {
        let alternatives = [
            Part::extension_module().target("win"),
            Part::extension_module(),
        ];

        let part =
            Part::normalise("Python", "winreg", &alternatives, &v("3.7.8"), Architecture::Linux64)
                .unwrap();
        assert!(part.is_none());
    }

    #[test]
    fn test_scoped_values_are_resolved() {
        let alternatives = [Part::library().libs(&["win#-lzlib", "!win#-lz"])];

        let part = Part::normalise("zlib", "zlib", &alternatives, &v("1.2.11"), Architecture::Win64)
            .unwrap()
            .unwrap();

        assert_eq!(part.part.kind.compiled().unwrap().libs, vec!["-lzlib"]);
        assert!(part.part.internal);
    }

    #[test]
    fn test_dependency_markers() {
        let alternatives = [Part::python_module().deps(&[
            "win#nt",
            "!win#posix",
            "?_bz2",
            "!_md5",
            "OpenSSL:ssl",
        ])];

        let part = Part::normalise("Python", "x", &alternatives, &v("3.7.8"), Architecture::Linux64)
            .unwrap()
            .unwrap();

        let deps: Vec<_> = part
            .deps
            .iter()
            .map(|d| (d.name.to_string(), d.requirement))
            .collect();
        assert_eq!(
            deps,
            vec![
                ("Python:posix".to_string(), Requirement::Required),
                ("Python:_bz2".to_string(), Requirement::Optional),
                ("Python:_md5".to_string(), Requirement::WithoutOpenSsl),
                ("OpenSSL:ssl".to_string(), Requirement::Required),
            ]
        );
    }

    #[test]
    fn test_part_name_parent() {
        let name = PartName::parse("importlib._bootstrap", "Python");
        assert_eq!(name.parent(), Some(PartName::new("Python", "importlib")));
        assert_eq!(PartName::new("Python", "os").parent(), None);
    }
}

//! Application project files.
//!
//! A project is a TOML file describing an application: the sysroot it is
//! built against, the parts it needs and how it is started.
//!
//! ```toml
//! version = 0
//! sysroot = "sysroot.toml"
//! parts = ["Python:json", "PyQt5:PyQt5.QtWidgets"]
//!
//! [Application]
//! script = "demo.py"
//! ```

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::errors::{DeployError, TomlSyntaxError};
use crate::core::part::{Part, PartName};

/// The format version written by this release.
pub const PROJECT_VERSION: i64 = 0;

/// Excluded from an application package unless it says otherwise.
const DEFAULT_EXCLUSIONS: &[&str] = &[
    "*.pyc",
    "*.pyd",
    "*.pyo",
    "*.pyx",
    "*.pxi",
    "__pycache__",
    "*-info",
    "EGG_INFO",
    "*.so",
];

#[derive(Debug, Clone, Deserialize)]
struct ProjectFile {
    version: Option<i64>,
    #[serde(default)]
    sysroot: String,
    #[serde(default)]
    sysroots_dir: String,
    #[serde(default)]
    parts: Vec<String>,
    #[serde(default, rename = "Application")]
    application: Application,
}

/// The `[Application]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Application {
    pub name: String,
    pub script: String,
    pub entry_point: String,
    pub is_console: bool,
    pub is_bundle: bool,
    pub syspath: String,
    pub qmake_configuration: String,
    #[serde(rename = "Package")]
    pub package: Option<Package>,
}

/// A directory of application code embedded as resources.
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default = "default_exclusions")]
    pub exclude: Vec<String>,
    #[serde(default, rename = "Content")]
    pub contents: Vec<Content>,
}

/// A file or directory of an application package.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub name: String,
    #[serde(default)]
    pub included: bool,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default, rename = "Content")]
    pub contents: Vec<Content>,
}

fn default_exclusions() -> Vec<String> {
    DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
}

/// How the application is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Startup {
    /// A script frozen as `__main__`.
    Script(String),
    /// A callable in a module.
    EntryPoint { module: String, callable: String },
}

/// A loaded project.
#[derive(Debug, Clone)]
pub struct Project {
    path: PathBuf,
    sysroot: String,
    sysroots_dir: String,
    pub parts: Vec<String>,
    pub application: Application,
}

impl Project {
    pub fn load(path: &Path) -> Result<Self> {
        let path = std::path::absolute(path)
            .with_context(|| format!("failed to resolve {}", path.display()))?;

        if !path.is_file() {
            return Err(DeployError::config(format!("{} was not found", path.display())).into());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Project::parse(&path, &contents)
    }

    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let file: ProjectFile = toml::from_str(contents)
            .map_err(|e| TomlSyntaxError::new(&path.display().to_string(), contents, &e))?;

        let version = file
            .version
            .ok_or_else(|| DeployError::parse("missing 'version' attribute"))?;
        if version < PROJECT_VERSION {
            return Err(DeployError::parse("the project's format is no longer supported").into());
        }
        if version > PROJECT_VERSION {
            return Err(DeployError::parse(format!(
                "the project's format is version {} but only version {} is supported",
                version, PROJECT_VERSION
            ))
            .into());
        }

        Ok(Project {
            path: path.to_path_buf(),
            sysroot: file.sysroot,
            sysroots_dir: file.sysroots_dir,
            parts: file.parts,
            application: file.application,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// An absolute path, with relative paths taken from the project's
    /// directory.
    pub fn project_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        normalise(&dir.join(path))
    }

    /// The sysroot specification file.
    pub fn sysroot_file(&self) -> PathBuf {
        match self.sysroot.as_str() {
            "" => self.project_path("sysroot.toml"),
            sysroot => self.project_path(sysroot),
        }
    }

    /// The directory containing the sysroots, by default that of the
    /// specification file.
    pub fn sysroots_dir(&self) -> PathBuf {
        match self.sysroots_dir.as_str() {
            "" => self
                .sysroot_file()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
            dir => self.project_path(dir),
        }
    }

    /// The application name, taken from the first of the explicit name,
    /// the script, the package and the project file.
    pub fn application_name(&self) -> String {
        let app = &self.application;
        let stem = |path: &str| {
            let base = Path::new(path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            base.split('.').next().unwrap_or_default().to_string()
        };

        if !app.name.is_empty() {
            app.name.clone()
        } else if !app.script.is_empty() {
            stem(&app.script)
        } else if let Some(package) = &app.package {
            Path::new(&package.name)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            stem(&self.path.to_string_lossy())
        }
    }

    /// Exactly one of a script or an entry point must be given.
    pub fn startup(&self) -> Result<Startup, DeployError> {
        let app = &self.application;

        match (app.script.is_empty(), app.entry_point.is_empty()) {
            (true, true) => Err(DeployError::config(
                "either the application script name or the entry point must be specified",
            )),
            (false, false) => Err(DeployError::config(
                "either the application script name or the entry point must be specified \
                 but not both",
            )),
            (false, true) => Ok(Startup::Script(app.script.clone())),
            (true, false) => match app.entry_point.split(':').collect::<Vec<_>>()[..] {
                [module, callable] => Ok(Startup::EntryPoint {
                    module: module.to_string(),
                    callable: callable.to_string(),
                }),
                _ => Err(DeployError::config(
                    "an entry point must be a module name and a callable separated by a colon",
                )),
            },
        }
    }

    /// The parts implied by the application package, named relative to the
    /// package's parent directory.
    pub fn package_parts(&self) -> Vec<(PartName, Part)> {
        let mut parts = Vec::new();

        if let Some(package) = &self.application.package {
            let root = Path::new(&package.name)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            for content in &package.contents {
                add_content(content, &root, &mut parts);
            }
        }

        parts
    }

    /// The directory the application package's parts are found in.
    pub fn package_root(&self) -> Option<PathBuf> {
        let package = self.application.package.as_ref()?;
        self.project_path(&package.name).parent().map(Path::to_path_buf)
    }
}

/// The component name used for the parts of an application package.
pub const APPLICATION: &str = "Application";

fn add_content(content: &Content, parent: &str, parts: &mut Vec<(PartName, Part)>) {
    if !content.included {
        return;
    }

    let name = format!("{}.{}", parent, content.name);

    if content.is_directory {
        for child in &content.contents {
            add_content(child, &name, parts);
        }
    } else if let Some(module) = name.strip_suffix(".py") {
        parts.push((PartName::new(APPLICATION, module), Part::python_module()));
    } else {
        let path = format!("{}/{}", parent.replace('.', "/"), content.name);
        parts.push((PartName::new(APPLICATION, path), Part::data_file(content.name.clone())));
    }
}

/// Remove `.` and `..` components without touching the filesystem.
fn normalise(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::part::PartKind;

    fn parse(contents: &str) -> Result<Project> {
        Project::parse(Path::new("/work/demo/demo.toml"), contents)
    }

    #[test]
    fn test_version_checks() {
        let err = parse("[Application]\nscript = 'demo.py'\n").unwrap_err();
        assert_eq!(err.to_string(), "missing 'version' attribute");

        let err = parse("version = 1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the project's format is version 1 but only version 0 is supported"
        );
    }

    #[test]
    fn test_syntax_error() {
        let err = parse("version = \n").unwrap_err();
        assert!(err.downcast_ref::<TomlSyntaxError>().is_some());
    }

    #[test]
    fn test_paths() {
        let project = parse("version = 0\n").unwrap();
        assert_eq!(project.sysroot_file(), Path::new("/work/demo/sysroot.toml"));
        assert_eq!(project.sysroots_dir(), Path::new("/work/demo"));

        let project =
            parse("version = 0\nsysroot = '../specs/sysroot.toml'\nsysroots_dir = 'roots'\n")
                .unwrap();
        assert_eq!(project.sysroot_file(), Path::new("/work/specs/sysroot.toml"));
        assert_eq!(project.sysroots_dir(), Path::new("/work/demo/roots"));
    }

    #[test]
    fn test_application_name() {
        let project = parse("version = 0\n[Application]\nscript = 'src/pyqt-demo.py'\n").unwrap();
        assert_eq!(project.application_name(), "pyqt-demo");

        let project =
            parse("version = 0\n[Application]\nname = 'Demo'\nscript = 'demo.py'\n").unwrap();
        assert_eq!(project.application_name(), "Demo");

        let project = parse("version = 0\n[Application.Package]\nname = 'src/app'\n").unwrap();
        assert_eq!(project.application_name(), "app");

        let project = parse("version = 0\n").unwrap();
        assert_eq!(project.application_name(), "demo");
    }

    #[test]
    fn test_startup() {
        let project = parse("version = 0\n[Application]\nentry_point = 'app.main:run'\n").unwrap();
        assert_eq!(
            project.startup().unwrap(),
            Startup::EntryPoint {
                module: "app.main".to_string(),
                callable: "run".to_string()
            }
        );

        let project = parse("version = 0\n").unwrap();
        assert!(project.startup().is_err());

        let project =
            parse("version = 0\n[Application]\nscript = 'a.py'\nentry_point = 'a:b'\n").unwrap();
        assert!(project.startup().unwrap_err().to_string().ends_with("but not both"));

        let project = parse("version = 0\n[Application]\nentry_point = 'a:b:c'\n").unwrap();
        assert!(project.startup().is_err());
    }

    #[test]
    fn test_package_parts() {
        let project = parse(
            r#"version = 0

[Application.Package]
name = "src/app"

[[Application.Package.Content]]
name = "__init__.py"
included = true

[[Application.Package.Content]]
name = "ui"
included = true
is_directory = true

[[Application.Package.Content.Content]]
name = "main.py"
included = true

[[Application.Package.Content.Content]]
name = "icon.png"
included = true

[[Application.Package.Content]]
name = "tests.py"
included = false
"#,
        )
        .unwrap();

        assert_eq!(project.package_root(), Some(PathBuf::from("/work/demo/src")));
        assert_eq!(project.application.package.as_ref().unwrap().exclude.len(), 9);

        let parts = project.package_parts();
        let names: Vec<String> = parts.iter().map(|(name, _)| name.name.clone()).collect();
        assert_eq!(names, ["app.__init__", "app.ui.main", "app/ui/icon.png"]);
        assert_eq!(
            parts[2].1.kind,
            PartKind::DataFile {
                file_name: "icon.png".to_string()
            }
        );
    }
}

//! The application's embedded resources.
//!
//! Python modules are frozen and, like data files, embedded with Qt's
//! resource system. Everything is staged below `<build>/resources` and
//! listed in one or more `.qrc` files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::builder::freeze::FreezeJobs;
use crate::builder::project::Project;
use crate::core::errors::DeployError;
use crate::core::part::PartKind;
use crate::util::fs::{
    copy_file, ensure_dir, is_ignored, patterns, to_slash, walk_files, write_string,
};

/// Never embedded from a Python package.
const PACKAGE_IGNORE: &[&str] = &["__pycache__", "*.pyc", "*.pyo"];

/// Collects the resources of a build.
pub struct Resources<'a> {
    dir: PathBuf,
    files: Vec<String>,
    jobs: &'a mut FreezeJobs,
}

impl<'a> Resources<'a> {
    /// Stage resources in `dir`, queueing modules to freeze on `jobs`.
    pub fn new(dir: &Path, jobs: &'a mut FreezeJobs) -> Self {
        Resources {
            dir: dir.to_path_buf(),
            files: Vec::new(),
            jobs,
        }
    }

    /// The embedded files, relative to the resources directory.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Add the modules and data files of the application's package.
    pub fn add_application(&mut self, project: &Project) -> Result<()> {
        let (Some(package), Some(root)) = (&project.application.package, project.package_root())
        else {
            return Ok(());
        };

        let exclude = patterns(&package.exclude)?;

        for (name, part) in project.package_parts() {
            let file_name = match &part.kind {
                PartKind::DataFile { file_name } => file_name.clone(),
                _ => format!("{}.py", name.name.rsplit('.').next().unwrap_or_default()),
            };

            if is_ignored(&file_name, &exclude) {
                continue;
            }

            self.add_part(&name.name, &part.kind, &root)?;
        }

        Ok(())
    }

    /// Add a part whose files are found below `root`. Parts that aren't
    /// Python modules, packages or data files are ignored.
    pub fn add_part(&mut self, name: &str, kind: &PartKind, root: &Path) -> Result<()> {
        match kind {
            PartKind::PythonModule { builtin: false } => self.add_module(name, root),
            PartKind::PythonPackage { exclusions } => self.add_package(name, exclusions, root),
            PartKind::DataFile { file_name } => {
                let resource = data_file_path(name, file_name);
                self.copy(&root.join(&resource), resource)
            }
            _ => Ok(()),
        }
    }

    fn add_module(&mut self, name: &str, root: &Path) -> Result<()> {
        let base = name.replace('.', "/");
        let dir = root.join(&base);

        let (path, resource) = if dir.is_dir() {
            (dir.join("__init__.py"), format!("{}/__init__.pyo", base))
        } else {
            (root.join(format!("{}.py", base)), format!("{}.pyo", base))
        };

        if !path.exists() {
            return Err(DeployError::config(format!("'{}' does not exist", path.display())).into());
        }
        if !path.is_file() {
            return Err(DeployError::config(format!("'{}' is not a file", path.display())).into());
        }

        self.freeze(name, &path, resource)
    }

    fn add_package(&mut self, name: &str, exclusions: &[String], root: &Path) -> Result<()> {
        let base = name.replace('.', "/");
        let dir = root.join(&base);

        if !dir.is_dir() {
            return Err(DeployError::config(format!("'{}' does not exist", dir.display())).into());
        }

        let mut ignore: Vec<&str> = PACKAGE_IGNORE.to_vec();
        ignore.extend(exclusions.iter().map(String::as_str));

        for file in walk_files(&dir, &patterns(&ignore)?)? {
            let path = dir.join(&file);
            let resource = format!("{}/{}", base, to_slash(&file));

            match resource.strip_suffix(".py") {
                Some(stem) => {
                    let module = stem.replace('/', ".");
                    self.freeze(&module, &path, format!("{}.pyo", stem))?;
                }
                None => self.copy(&path, resource)?,
            }
        }

        Ok(())
    }

    fn freeze(&mut self, label: &str, source: &Path, resource: String) -> Result<()> {
        debug!("freezing {} as {}", source.display(), resource);

        // The freeze jobs only write files.
        let output = self.dir.join(&resource);
        if let Some(parent) = output.parent() {
            ensure_dir(parent)?;
        }

        self.jobs.as_data(label, source, &output, &resource);
        self.files.push(resource);
        Ok(())
    }

    fn copy(&mut self, source: &Path, resource: String) -> Result<()> {
        if !source.is_file() {
            return Err(
                DeployError::config(format!("'{}' does not exist", source.display())).into(),
            );
        }

        copy_file(source, &self.dir.join(&resource))?;
        self.files.push(resource);
        Ok(())
    }

    /// Write the `.qrc` files, splitting the resources as evenly as
    /// possible over up to `count` of them. Returns the file names.
    pub fn write_qrc(&self, count: usize) -> Result<Vec<String>> {
        let count = count.clamp(1, self.files.len().max(1));
        let per_file = self.files.len().div_ceil(count).max(1);

        let mut names = Vec::new();

        for i in 0..count {
            let name = if count == 1 {
                "pydeploy.qrc".to_string()
            } else {
                format!("pydeploy{}.qrc", i)
            };

            let start = (i * per_file).min(self.files.len());
            let end = (start + per_file).min(self.files.len());
            write_string(&self.dir.join(&name), &qrc(&self.files[start..end]))?;

            names.push(name);
        }

        Ok(names)
    }
}

/// The resource path of a data file. Any package the part name places it
/// in becomes a directory.
pub fn data_file_path(name: &str, file_name: &str) -> String {
    match name.strip_suffix(file_name) {
        Some(prefix) => {
            let prefix = prefix.trim_end_matches(['.', '/']).replace('.', "/");
            if prefix.is_empty() {
                file_name.to_string()
            } else {
                format!("{}/{}", prefix, file_name)
            }
        }
        None => name.replace('.', "/"),
    }
}

fn qrc(files: &[String]) -> String {
    let mut out = String::from("<!DOCTYPE RCC>\n<RCC version=\"1.0\">\n<qresource>\n");
    for file in files {
        out.push_str(&format!("    <file>{}</file>\n", file));
    }
    out.push_str("</qresource>\n</RCC>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn test_modules() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("lib");
        touch(&root.join("json/__init__.py"));
        touch(&root.join("os.py"));

        let mut jobs = FreezeJobs::new();
        let mut resources = Resources::new(&tmp.path().join("resources"), &mut jobs);
        resources.add_part("json", &PartKind::PythonModule { builtin: false }, &root).unwrap();
        resources.add_part("os", &PartKind::PythonModule { builtin: false }, &root).unwrap();
        resources.add_part("sys", &PartKind::PythonModule { builtin: true }, &root).unwrap();
        assert_eq!(resources.files(), ["json/__init__.pyo", "os.pyo"]);

        let err = resources
            .add_part("missing", &PartKind::PythonModule { builtin: false }, &root)
            .unwrap_err();
        assert!(err.to_string().ends_with("missing.py' does not exist"));

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs.jobs()[1].name, ":/os.pyo");
        assert_eq!(jobs.jobs()[1].output, tmp.path().join("resources/os.pyo"));
    }

    #[test]
    fn test_package_with_exclusions() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("lib");
        touch(&root.join("PyQt5/uic/__init__.py"));
        touch(&root.join("PyQt5/uic/pyuic.py"));
        touch(&root.join("PyQt5/uic/port_v2/ascii_upper.py"));
        touch(&root.join("PyQt5/uic/widget-plugins/qtcharts.py"));
        touch(&root.join("PyQt5/uic/__pycache__/x.cpython-37.pyc"));
        touch(&root.join("PyQt5/uic/icons/logo.png"));

        let mut jobs = FreezeJobs::new();
        let mut resources = Resources::new(&tmp.path().join("resources"), &mut jobs);
        let kind = PartKind::PythonPackage {
            exclusions: vec!["port_v2".to_string(), "pyuic.py".to_string()],
        };
        resources.add_part("PyQt5.uic", &kind, &root).unwrap();

        assert_eq!(
            resources.files(),
            [
                "PyQt5/uic/__init__.pyo",
                "PyQt5/uic/icons/logo.png",
                "PyQt5/uic/widget-plugins/qtcharts.pyo",
            ]
        );
        assert!(tmp.path().join("resources/PyQt5/uic/icons/logo.png").is_file());
        assert_eq!(jobs.jobs()[1].label, "PyQt5.uic.widget-plugins.qtcharts");

        // Frozen modules are written into directories that already exist.
        assert!(tmp.path().join("resources/PyQt5/uic/widget-plugins").is_dir());
    }

    #[test]
    fn test_data_file_path() {
        assert_eq!(data_file_path("app/ui/icon.png", "icon.png"), "app/ui/icon.png");
        assert_eq!(data_file_path("lib2to3.Grammar.txt", "Grammar.txt"), "lib2to3/Grammar.txt");
        assert_eq!(data_file_path("Grammar.txt", "Grammar.txt"), "Grammar.txt");
    }

    #[test]
    fn test_qrc_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("lib");
        for name in ["a", "b", "c"] {
            touch(&root.join(format!("{}.py", name)));
        }

        let mut jobs = FreezeJobs::new();
        let mut resources = Resources::new(&tmp.path().join("resources"), &mut jobs);
        for name in ["a", "b", "c"] {
            resources.add_part(name, &PartKind::PythonModule { builtin: false }, &root).unwrap();
        }

        assert_eq!(resources.write_qrc(1).unwrap(), ["pydeploy.qrc"]);
        let qrc = std::fs::read_to_string(tmp.path().join("resources/pydeploy.qrc")).unwrap();
        assert_eq!(
            qrc,
            "<!DOCTYPE RCC>\n<RCC version=\"1.0\">\n<qresource>\n    \
             <file>a.pyo</file>\n    <file>b.pyo</file>\n    <file>c.pyo</file>\n\
             </qresource>\n</RCC>\n"
        );

        // No more files than resources.
        assert_eq!(resources.write_qrc(5).unwrap().len(), 3);

        assert_eq!(resources.write_qrc(2).unwrap(), ["pydeploy0.qrc", "pydeploy1.qrc"]);
        let second = std::fs::read_to_string(tmp.path().join("resources/pydeploy1.qrc")).unwrap();
        assert!(second.contains("<file>c.pyo</file>"));
        assert!(!second.contains("a.pyo"));
    }
}

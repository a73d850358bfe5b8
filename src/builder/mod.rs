//! Building an application from a project and a sysroot.
//!
//! The builder doesn't compile anything itself. It writes a qmake project
//! and everything it refers to into a build directory: the generated
//! `main()`, frozen bootstrap code and the application's resources. The
//! result is built with the sysroot's qmake and make.

pub mod emit;
pub mod freeze;
pub mod launcher;
pub mod project;
pub mod qmake;
pub mod resources;
pub mod select;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::builder::freeze::FreezeJobs;
use crate::builder::project::{Project, Startup};
use crate::builder::qmake::{ProSettings, QmakeValues};
use crate::builder::resources::Resources;
use crate::builder::select::Selector;
use crate::core::errors::DeployError;
use crate::core::part::{PartKind, ResolvedPart};
use crate::core::platform::Platform;
use crate::plugins::python::PythonLayout;
use crate::sysroot::component::Component;
use crate::sysroot::Sysroot;
use crate::util::fs::{
    copy_file, ensure_dir, read_to_string, remove_dir_all_if_exists, to_slash, write_string,
};

/// The bootstrap scripts frozen into every application.
const BOOTSTRAPS: &[&str] = &["bootstrap", "bootstrap_external"];

/// Sources copied unchanged from the runtime directory.
const RUNTIME_SOURCES: &[&str] = &["pydeploy_start.cpp", "pdytools_module.cpp"];

/// Appended to every `.pro` file if present in the runtime directory.
const POST_CONFIGURATION: &str = "post_configuration.pro";

/// How a build is done.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    /// Defaults to `build-<target>` next to the project file.
    pub build_dir: Option<PathBuf>,
    /// Keep the contents of an existing build directory.
    pub no_clean: bool,
    /// The optimisation level modules are frozen at.
    pub opt: u8,
    /// The number of `.qrc` files to split the resources over.
    pub resources: usize,
    /// Bootstrap scripts and C++ runtime support.
    pub runtime_dir: PathBuf,
}

impl Default for BuildSettings {
    fn default() -> Self {
        BuildSettings {
            build_dir: None,
            no_clean: false,
            opt: 2,
            resources: 1,
            runtime_dir: PathBuf::from("runtime"),
        }
    }
}

/// Writes the build directory of an application.
pub struct Builder<'a> {
    sysroot: &'a Sysroot,
    project: &'a Project,
}

impl<'a> Builder<'a> {
    pub fn new(sysroot: &'a Sysroot, project: &'a Project) -> Self {
        Builder { sysroot, project }
    }

    /// The build directory that will be used.
    pub fn build_dir(&self, settings: &BuildSettings) -> PathBuf {
        settings.build_dir.clone().unwrap_or_else(|| {
            self.project
                .project_path(&format!("build-{}", self.sysroot.target))
        })
    }

    /// Write the build directory and freeze the Python code. Returns the
    /// build directory.
    pub fn build(&self, settings: &BuildSettings) -> Result<PathBuf> {
        let (build_dir, jobs) = self.prepare(settings)?;

        let python = self.sysroot.get_component("Python").ok_or_else(no_python)?;
        let host_python = PythonLayout::of(&self.sysroot.context(python))?.host_python()?;
        jobs.run(&host_python, settings.opt)?;

        Ok(build_dir)
    }

    /// Write everything except the frozen code and return the freeze jobs
    /// still to be run.
    pub fn prepare(&self, settings: &BuildSettings) -> Result<(PathBuf, FreezeJobs)> {
        let sysroot = self.sysroot;
        let project = self.project;

        if !sysroot.sysroot_dir.is_dir() {
            return Err(DeployError::config(format!(
                "the sysroot directory '{}' does not exist",
                sysroot.sysroot_dir.display()
            ))
            .into());
        }

        let runtime_dir = &settings.runtime_dir;
        if !runtime_dir.is_dir() {
            return Err(DeployError::config(format!(
                "the runtime directory '{}' does not exist",
                runtime_dir.display()
            ))
            .into());
        }

        let python = sysroot.get_component("Python").ok_or_else(no_python)?;
        let python_ctx = sysroot.context(python);
        let layout = PythonLayout::of(&python_ctx)?;

        let catalog = sysroot.parts()?;
        let components = sysroot.components().iter().map(|c| c.name.as_str()).collect();
        let android_api = sysroot.environment().android.as_ref().map(|android| android.api);
        let parts = Selector::new(&catalog, components, android_api)
            .select(&project.parts, sysroot.target)?;
        debug!("selected {} parts", parts.len());

        let name = project.application_name();
        let startup = project.startup()?;

        let build_dir = self.build_dir(settings);
        if !settings.no_clean {
            remove_dir_all_if_exists(&build_dir)?;
        }
        ensure_dir(&build_dir)?;
        info!("generating code in {}", build_dir.display());

        let mut jobs = FreezeJobs::new();

        for bootstrap in BOOTSTRAPS {
            let script = launcher::find_bootstrap(&runtime_dir.join(bootstrap), layout.version())?;
            let label = script
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            jobs.as_c(
                label,
                &script,
                &build_dir.join(format!("frozen_{}.h", bootstrap)),
                &format!("pydeploy_{}", bootstrap),
            );
        }

        if let Startup::Script(script) = &startup {
            jobs.as_c(
                script.as_str(),
                &project.project_path(script),
                &build_dir.join("frozen_main.h"),
                "pydeploy_main",
            );
        }

        write_string(&build_dir.join("pydeploy_version.h"), &launcher::version_header()?)?;

        let resource_files = self.write_resources(
            &parts,
            &build_dir.join("resources"),
            &mut jobs,
            settings.resources,
        )?;

        let values = self.qmake_values(&parts, &layout)?;

        let post_configuration = runtime_dir.join(POST_CONFIGURATION);
        let post_configuration = if post_configuration.is_file() {
            Some(read_to_string(&post_configuration)?)
        } else {
            None
        };

        let lib_dir = sysroot.target_lib_dir();
        let pro = qmake::write_pro(
            &ProSettings {
                target: sysroot.target,
                python_version: layout.version(),
                lib_dir: &lib_dir,
                is_console: project.application.is_console,
                is_bundle: project.application.is_bundle,
                frozen_main: matches!(startup, Startup::Script(_)),
                optimised: settings.opt > 0,
                resources: &resource_files,
                post_configuration: post_configuration.as_deref(),
                qmake_configuration: &project.application.qmake_configuration,
            },
            &values,
        );
        write_string(&build_dir.join(format!("{}.pro", name)), &pro)?;

        let main = launcher::main_cpp(
            &values.inittab,
            &values.defines,
            &project.application.syspath,
            &startup,
            sysroot.target.platform(),
        )?;
        write_string(&build_dir.join("pydeploy_main.cpp"), &main)?;

        for source in RUNTIME_SOURCES {
            copy_file(&runtime_dir.join(source), &build_dir.join(source))
                .with_context(|| format!("the runtime directory must contain {}", source))?;
        }

        Ok((build_dir, jobs))
    }

    /// Stage the application's package and the selected modules as
    /// resources and write the `.qrc` files.
    fn write_resources(
        &self,
        parts: &[&ResolvedPart],
        dir: &Path,
        jobs: &mut FreezeJobs,
        count: usize,
    ) -> Result<Vec<String>> {
        let mut resources = Resources::new(dir, jobs);

        resources.add_application(self.project)?;

        for part in parts {
            if !matches!(
                part.kind,
                PartKind::PythonModule { .. }
                    | PartKind::PythonPackage { .. }
                    | PartKind::DataFile { .. }
            ) {
                continue;
            }

            let component = self.component_of(part)?;
            let root = self.sysroot.context(component).target_modules_dir()?;
            resources.add_part(&part.name.name, &part.kind, &root)?;
        }

        resources.write_qrc(count)
    }

    /// Combine what every selected part adds to the build.
    fn qmake_values(
        &self,
        parts: &[&ResolvedPart],
        layout: &PythonLayout<'_>,
    ) -> Result<QmakeValues> {
        let sysroot = self.sysroot;
        let mut values = QmakeValues::default();

        values.includepath.insert(to_slash(&sysroot.target_include_dir()));
        values.includepath.insert(to_slash(&layout.target_py_include_dir()));
        values.libs.insert(format!("-L{}", to_slash(&sysroot.target_lib_dir())));
        values.libs.insert(format!("-l{}", layout.target_py_lib()));

        let python_from_source = sysroot
            .get_component("Python")
            .is_some_and(|python| python.install_from_source());
        let android = sysroot.target.platform() == Platform::Android;

        for part in parts {
            let component = self.component_of(part)?;
            let fragment = emit::emit(part, &sysroot.context(component), python_from_source)?;

            if android && !fragment.bundled_libs.is_empty() {
                let found = emit::bundled_shared_libs(
                    &fragment.bundled_libs,
                    &sysroot.sysroot_dir,
                    &sysroot.target_lib_dir(),
                )?;
                values.bundled_libs.extend(found);
            }

            values.add(fragment);
        }

        Ok(values)
    }

    fn component_of(&self, part: &ResolvedPart) -> Result<&'a Component, DeployError> {
        self.sysroot
            .get_component(&part.name.component)
            .ok_or_else(|| DeployError::config(format!("{} has no component", part.name)))
    }
}

fn no_python() -> DeployError {
    DeployError::config("the sysroot specification doesn't specify a Python component")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::Architecture;
    use crate::sysroot::specification::Specification;
    use crate::test_support::fake_registry;
    use tempfile::TempDir;

    fn touch(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    struct Fixture {
        tmp: TempDir,
        sysroot: Sysroot,
        project: Project,
    }

    fn fixture(project: &str) -> Fixture {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();

        touch(
            &dir.join("sysroot.toml"),
            "[zlib]\nversion = '1.2.11'\n\n[Python]\nversion = '3.7.8'\n",
        );
        let modules = dir.join("sysroot-linux-64/lib/python");
        touch(&modules.join("importlib/__init__.py"), "");
        touch(&modules.join("encodings/__init__.py"), "");
        touch(&modules.join("json.py"), "import re\n");
        touch(&modules.join("re.py"), "");

        let runtime = dir.join("runtime");
        touch(&runtime.join("bootstrap/bootstrap-3.7.py"), "");
        touch(&runtime.join("bootstrap_external/bootstrap_external-3.7.py"), "");
        touch(&runtime.join("pydeploy_start.cpp"), "");
        touch(&runtime.join("pdytools_module.cpp"), "");

        touch(&dir.join("demo.py"), "import json\n");
        touch(&dir.join("demo.toml"), project);

        let spec = Specification::load(&dir.join("sysroot.toml"), &fake_registry()).unwrap();
        let sysroot =
            Sysroot::new(&spec, Architecture::Linux64, Architecture::Linux64, None).unwrap();
        let project = Project::load(&dir.join("demo.toml")).unwrap();

        Fixture { tmp, sysroot, project }
    }

    fn settings(fixture: &Fixture) -> BuildSettings {
        BuildSettings {
            runtime_dir: fixture.tmp.path().join("runtime"),
            ..BuildSettings::default()
        }
    }

    #[test]
    fn test_prepare_writes_build_directory() {
        let fixture = fixture(
            "version = 0\nparts = ['json', 'zlib:zlib']\n\n\
             [Application]\nscript = 'demo.py'\nsyspath = 'lib'\n",
        );
        let builder = Builder::new(&fixture.sysroot, &fixture.project);

        let (build_dir, jobs) = builder.prepare(&settings(&fixture)).unwrap();
        assert_eq!(build_dir, fixture.tmp.path().join("build-linux-64"));

        for file in [
            "demo.pro",
            "pydeploy_main.cpp",
            "pydeploy_version.h",
            "pydeploy_start.cpp",
            "pdytools_module.cpp",
            "resources/pydeploy.qrc",
        ] {
            assert!(build_dir.join(file).is_file(), "{} is missing", file);
        }

        // Two bootstraps, the script and four modules.
        assert_eq!(jobs.len(), 7);

        let pro = std::fs::read_to_string(build_dir.join("demo.pro")).unwrap();
        assert!(pro.contains("DEFINES += PYDEPLOY_FROZEN_MAIN PYDEPLOY_OPTIMIZED\n"));
        assert!(pro.contains("LIBS += -lz\n"));
        assert!(pro.contains("sysroot-linux-64/include/python3.7\n"));

        let qrc = std::fs::read_to_string(build_dir.join("resources/pydeploy.qrc")).unwrap();
        assert!(qrc.contains("<file>json.pyo</file>"));
        assert!(qrc.contains("<file>encodings/__init__.pyo</file>"));

        let main = std::fs::read_to_string(build_dir.join("pydeploy_main.cpp")).unwrap();
        assert!(main.contains("\"__main__\", NULL, path_dirs);"));
    }

    #[cfg(unix)]
    #[test]
    fn test_prepared_jobs_freeze_nested_packages() {
        let Ok(python) = which::which("python3") else {
            return;
        };

        let fixture =
            fixture("version = 0\nparts = ['json']\n\n[Application]\nscript = 'demo.py'\n");
        let builder = Builder::new(&fixture.sysroot, &fixture.project);

        let (build_dir, jobs) = builder.prepare(&settings(&fixture)).unwrap();
        jobs.run(&python, 2).unwrap();

        for file in [
            "frozen_bootstrap.h",
            "frozen_bootstrap_external.h",
            "frozen_main.h",
            "resources/json.pyo",
            "resources/encodings/__init__.pyo",
            "resources/importlib/__init__.pyo",
        ] {
            assert!(build_dir.join(file).is_file(), "{} is missing", file);
        }
    }

    #[test]
    fn test_no_clean_keeps_build_directory() {
        let fixture = fixture("version = 0\n\n[Application]\nentry_point = 'demo:main'\n");
        let builder = Builder::new(&fixture.sysroot, &fixture.project);
        let settings = settings(&fixture);

        let stale = builder.build_dir(&settings).join("stale.txt");
        touch(&stale, "");

        builder
            .prepare(&BuildSettings {
                no_clean: true,
                ..settings.clone()
            })
            .unwrap();
        assert!(stale.exists());

        let (build_dir, jobs) = builder.prepare(&settings).unwrap();
        assert!(!stale.exists());
        assert!(!build_dir.join("frozen_main.h").exists());
        assert_eq!(jobs.len(), 4);
    }

    #[test]
    fn test_missing_directories() {
        let fixture = fixture("version = 0\n\n[Application]\nscript = 'demo.py'\n");
        let builder = Builder::new(&fixture.sysroot, &fixture.project);

        let err = builder
            .prepare(&BuildSettings {
                runtime_dir: fixture.tmp.path().join("nowhere"),
                ..BuildSettings::default()
            })
            .unwrap_err();
        assert!(err.to_string().starts_with("the runtime directory"));

        std::fs::remove_dir_all(fixture.tmp.path().join("sysroot-linux-64")).unwrap();
        let err = builder.prepare(&settings(&fixture)).unwrap_err();
        assert!(err.to_string().starts_with("the sysroot directory"));
    }
}

//! Target-specific sysroots.
//!
//! A sysroot is the directory `<sysroots dir>/sysroot-<target>` that the
//! components of a specification are installed into:
//!
//! ```text
//! sysroot-linux-64/
//!   host/       tools built to run on the host
//!   include/    target headers
//!   lib/        target libraries
//!   src/        target sources used by applications
//!   build/      temporary build directory
//!   Manifest    the installed version of each component
//! ```

pub mod archive;
pub mod component;
pub mod manifest;
pub mod parts;
pub mod planner;
pub mod specification;
pub mod toolchain;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::core::errors::DeployError;
use crate::core::platform::Architecture;
use crate::sysroot::archive::ArchiveSearch;
use crate::sysroot::component::{Component, ComponentContext, InstallContext};
use crate::sysroot::manifest::{Manifest, MANIFEST_NAME};
use crate::sysroot::parts::PartCatalog;
use crate::sysroot::specification::{show_options, terminal_width, Specification};
use crate::sysroot::toolchain::{verify_target, TargetEnvironment};
use crate::util::fs;

pub use component::ComponentPlugin;
pub use specification::PluginRegistry;

/// Options for [`Sysroot::install_components`].
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Directories searched for source archives. The specification's
    /// directory is used when this is empty.
    pub source_dirs: Vec<PathBuf>,
    pub cache_dir: PathBuf,
    pub offline: bool,
    /// Keep the build directory afterwards.
    pub no_clean: bool,
    /// Empty the sysroot and reinstall everything.
    pub force: bool,
}

/// A sysroot for one target architecture.
#[derive(Debug)]
pub struct Sysroot {
    pub specification_file: PathBuf,
    pub host: Architecture,
    pub target: Architecture,
    pub sysroot_dir: PathBuf,
    components: Vec<Component>,
    source_dir: PathBuf,
    host_python: Option<PathBuf>,
    host_qmake: Option<PathBuf>,
    environment: TargetEnvironment,
}

impl Sysroot {
    /// Create the components of a specification for a target.
    ///
    /// The sysroot lives in `sysroots_dir`, or next to the specification.
    pub fn new(
        specification: &Specification,
        host: Architecture,
        target: Architecture,
        sysroots_dir: Option<&Path>,
    ) -> Result<Self> {
        let sysroots_dir = sysroots_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| specification.dir());

        Ok(Sysroot {
            specification_file: specification.path().to_path_buf(),
            host,
            target,
            sysroot_dir: sysroots_dir.join(format!("sysroot-{}", target)),
            components: specification.create_components(target)?,
            source_dir: specification.dir(),
            host_python: None,
            host_qmake: None,
            environment: TargetEnvironment::default(),
        })
    }

    /// Use an explicit host Python rather than the one the `Python`
    /// component would provide.
    pub fn with_host_python(mut self, python: Option<PathBuf>) -> Self {
        self.host_python = python;
        self
    }

    /// Use an explicit host qmake rather than the one the `Qt` component
    /// would provide.
    pub fn with_host_qmake(mut self, qmake: Option<PathBuf>) -> Self {
        self.host_qmake = qmake;
        self
    }

    pub fn host_python_override(&self) -> Option<&Path> {
        self.host_python.as_deref()
    }

    pub fn host_qmake_override(&self) -> Option<&Path> {
        self.host_qmake.as_deref()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn get_component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn context<'a>(&'a self, component: &'a Component) -> ComponentContext<'a> {
        ComponentContext::new(component, self)
    }

    /// What was found when the target was verified.
    pub fn environment(&self) -> &TargetEnvironment {
        &self.environment
    }

    pub fn host_dir(&self) -> PathBuf {
        self.sysroot_dir.join("host")
    }

    pub fn target_include_dir(&self) -> PathBuf {
        self.sysroot_dir.join("include")
    }

    pub fn target_lib_dir(&self) -> PathBuf {
        self.sysroot_dir.join("lib")
    }

    pub fn target_src_dir(&self) -> PathBuf {
        self.sysroot_dir.join("src")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.sysroot_dir.join("build")
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.sysroot_dir.join(MANIFEST_NAME)
    }

    /// The parts available for the target.
    pub fn parts(&self) -> Result<PartCatalog> {
        PartCatalog::for_sysroot(self)
    }

    /// Verify the host, the target's toolchain and every component.
    pub fn verify(&mut self) -> Result<()> {
        info!("verifying host architecture '{}'", self.host);
        self.host.verify_as_host(self.target)?;

        info!("verifying target architecture '{}'", self.target);
        self.environment = verify_target(self.target)?;

        self.verify_components()
    }

    fn verify_components(&self) -> Result<()> {
        for component in &self.components {
            info!("verifying {} v{}", component.name, component.version);
            component.plugin.verify(&self.context(component))?;
        }

        Ok(())
    }

    /// The indices of named components, or of every component.
    fn select(&self, names: &[String]) -> Result<Vec<usize>, DeployError> {
        if names.is_empty() {
            return Ok((0..self.components.len()).collect());
        }

        let mut selected = Vec::new();

        for name in names {
            let index = self
                .components
                .iter()
                .position(|c| &c.name == name)
                .ok_or_else(|| DeployError::config(format!("unknown component '{}'", name)))?;

            if !selected.contains(&index) {
                selected.push(index);
            }
        }

        // Keep the order of the specification.
        selected.sort_unstable();
        Ok(selected)
    }

    /// Install components, or every component if `names` is empty.
    pub fn install_components(&mut self, names: &[String], options: &InstallOptions) -> Result<()> {
        self.verify()?;

        let selected = self.select(names)?;
        let manifest_file = self.manifest_file();

        let mut manifest = if options.force {
            Manifest::default()
        } else {
            Manifest::load(&manifest_file)?
        };

        let plan = planner::plan(&self.components, &selected, &manifest, options.force)?;

        for step in &plan.steps {
            if step.action == planner::Action::Skip {
                let component = &self.components[step.index];
                info!("{} v{} is already installed", component.name, component.version);
            }
        }

        if plan.is_noop() {
            return Ok(());
        }

        if options.force {
            fs::empty_dir(&self.sysroot_dir)?;
        }

        for dir in [
            self.sysroot_dir.clone(),
            self.host_dir(),
            self.target_include_dir(),
            self.target_lib_dir(),
            self.target_src_dir(),
        ] {
            fs::ensure_dir(&dir)?;
        }

        let build_dir = self.build_dir();
        fs::empty_dir(&build_dir)?;
        fs::ensure_dir(&build_dir)?;

        let source_dirs = if options.source_dirs.is_empty() {
            vec![self.source_dir.clone()]
        } else {
            options.source_dirs.clone()
        };

        let archives = ArchiveSearch {
            source_dirs,
            cache_dir: options.cache_dir.clone(),
            offline: options.offline,
        };

        let sdk_env: Vec<(String, String)> = self
            .components
            .iter()
            .flat_map(|c| c.plugin.sdk_environment(&self.context(c)))
            .collect();

        for index in plan.to_install() {
            let component = &self.components[index];
            let ctx = self.context(component);
            ctx.progress("installing component");

            let install = InstallContext::new(ctx, &build_dir, &archives, sdk_env.clone());
            component.plugin.install(&install)?;

            manifest.insert(component.name.clone(), component.version.clone());
            manifest.save(&manifest_file)?;
        }

        if !options.no_clean {
            if let Err(e) = fs::remove_dir_all_if_exists(&build_dir) {
                warn!("{:#}", e);
            }
        }

        Ok(())
    }

    /// The options table for named components, or for every component.
    pub fn show_options(&self, names: &[String]) -> Result<String> {
        let components: Vec<&Component> = self
            .select(names)?
            .into_iter()
            .map(|index| &self.components[index])
            .collect();

        Ok(show_options(&components, terminal_width()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fake_registry, installed_log};
    use tempfile::TempDir;

    const SPEC: &str = "\
[Python]
version = '3.7.8'

[Qt]
version = '5.15.0'

[zlib]
version = '1.2.11'
";

    fn sysroot(tmp: &TempDir, spec: &str) -> Sysroot {
        let path = tmp.path().join("sysroot.toml");
        std::fs::write(&path, spec).unwrap();

        let specification = Specification::load(&path, &fake_registry()).unwrap();
        let host = Architecture::host().unwrap();
        Sysroot::new(&specification, host, host, None).unwrap()
    }

    fn options(tmp: &TempDir) -> InstallOptions {
        InstallOptions {
            cache_dir: tmp.path().join("cache"),
            offline: true,
            ..InstallOptions::default()
        }
    }

    #[test]
    fn test_layout() {
        let tmp = TempDir::new().unwrap();
        let sysroot = sysroot(&tmp, SPEC);

        let expected = tmp.path().join(format!("sysroot-{}", sysroot.target));
        assert_eq!(sysroot.sysroot_dir, expected);
        assert_eq!(sysroot.target_lib_dir(), expected.join("lib"));
        assert_eq!(sysroot.manifest_file(), expected.join("Manifest"));
    }

    #[test]
    fn test_unknown_component() {
        let tmp = TempDir::new().unwrap();
        let sysroot = sysroot(&tmp, SPEC);

        let err = sysroot.show_options(&["Perl".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "unknown component 'Perl'");
    }

    #[test]
    fn test_show_selected_options() {
        let tmp = TempDir::new().unwrap();
        let sysroot = sysroot(&tmp, SPEC);

        let table = sysroot.show_options(&["zlib".to_string()]).unwrap();
        assert!(table.contains("zlib"));
        assert!(!table.contains("Python"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_install_in_preinstall_order() {
        let tmp = TempDir::new().unwrap();
        let mut sysroot = sysroot(&tmp, SPEC);

        sysroot.install_components(&[], &options(&tmp)).unwrap();

        assert_eq!(installed_log(&sysroot.sysroot_dir), vec!["zlib", "Qt", "Python"]);
        assert_eq!(
            std::fs::read_to_string(sysroot.manifest_file()).unwrap(),
            "Python 3.7.8\nQt 5.15.0\nzlib 1.2.11\n"
        );
        assert!(!sysroot.build_dir().exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_reinstall_only_changed_version() {
        let tmp = TempDir::new().unwrap();
        sysroot(&tmp, SPEC)
            .install_components(&[], &options(&tmp))
            .unwrap();

        let mut sysroot = sysroot(&tmp, &SPEC.replace("1.2.11", "1.2.12"));
        sysroot.install_components(&[], &options(&tmp)).unwrap();

        assert_eq!(
            installed_log(&sysroot.sysroot_dir),
            vec!["zlib", "Qt", "Python", "zlib"]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_nothing_to_do_has_no_side_effects() {
        let tmp = TempDir::new().unwrap();
        sysroot(&tmp, SPEC)
            .install_components(&[], &options(&tmp))
            .unwrap();

        let mut sysroot = sysroot(&tmp, SPEC);
        let opts = InstallOptions {
            no_clean: true,
            ..options(&tmp)
        };
        sysroot.install_components(&[], &opts).unwrap();

        // A build would have left the build directory behind.
        assert!(!sysroot.build_dir().exists());
        assert_eq!(installed_log(&sysroot.sysroot_dir).len(), 3);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_force_empties_sysroot() {
        let tmp = TempDir::new().unwrap();
        let mut sysroot = sysroot(&tmp, SPEC);
        sysroot.install_components(&[], &options(&tmp)).unwrap();

        let stray = sysroot.sysroot_dir.join("stray.txt");
        std::fs::write(&stray, "").unwrap();

        let opts = InstallOptions {
            force: true,
            ..options(&tmp)
        };
        sysroot
            .install_components(&["zlib".to_string()], &opts)
            .unwrap();

        assert!(!stray.exists());
        assert_eq!(installed_log(&sysroot.sysroot_dir), vec!["zlib"]);
        assert_eq!(
            std::fs::read_to_string(sysroot.manifest_file()).unwrap(),
            "zlib 1.2.11\n"
        );
    }
}

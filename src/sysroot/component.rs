//! Components and the plugin interface.
//!
//! A [`Component`] is one configured section of a specification file. Its
//! behavior comes from a [`ComponentPlugin`], which is handed a
//! [`ComponentContext`] (or, when installing, an [`InstallContext`]) giving
//! access to the sysroot, the other components and the target toolchain.

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::errors::DeployError;
use crate::core::option::{configure, ComponentOption, OptionType, OptionValues};
use crate::core::part::Part;
use crate::core::platform::{Architecture, Platform};
use crate::core::version::VersionNumber;
use crate::sysroot::archive::{self, ArchiveSearch};
use crate::sysroot::planner::Installable;
use crate::sysroot::toolchain::{AndroidToolchain, AppleSdk};
use crate::sysroot::Sysroot;
use crate::util::fs;
use crate::util::process::{find_executable, ProcessBuilder};

/// The parts a component provides, each with its version-specific
/// alternatives.
pub type Provides = Vec<(String, Vec<Part>)>;

/// The implementation of a kind of component.
pub trait ComponentPlugin: fmt::Debug {
    /// Options in addition to `version` and `install_from_source`.
    fn options(&self) -> Vec<ComponentOption> {
        Vec::new()
    }

    /// Installing from an existing installation is not possible.
    fn must_install_from_source(&self) -> bool {
        false
    }

    /// Components that, if specified, are installed before this one.
    fn preinstalls(&self) -> &'static [&'static str] {
        &[]
    }

    /// The parts provided by the configured version.
    fn provides(&self, _ctx: &ComponentContext<'_>) -> Result<Provides> {
        Ok(Vec::new())
    }

    /// Check the configuration before anything is installed.
    fn verify(&self, _ctx: &ComponentContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Install into the sysroot.
    fn install(&self, ctx: &InstallContext<'_>) -> Result<()>;

    /// The file name of the source archive, if there is one.
    fn archive_name(&self, _ctx: &ComponentContext<'_>) -> Option<String> {
        None
    }

    /// Directory URLs the source archive may be downloaded from.
    fn archive_urls(&self, _ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// The absolute path of a source file provided by the component.
    fn target_src_path(&self, ctx: &ComponentContext<'_>, name: &str) -> Result<PathBuf> {
        Ok(ctx.target_src_dir().join(name))
    }

    /// The directory containing any Python modules provided by the component.
    fn target_modules_dir(&self, ctx: &ComponentContext<'_>) -> Result<PathBuf> {
        crate::plugins::python::PythonLayout::of(ctx)
            .map(|python| python.target_sitepackages_dir())
            .map_err(Into::into)
    }

    /// Environment variables needed when building for the target.
    fn sdk_environment(&self, _ctx: &ComponentContext<'_>) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// A configured component.
#[derive(Debug)]
pub struct Component {
    pub name: String,
    pub version: VersionNumber,
    pub options: OptionValues,
    pub plugin: Box<dyn ComponentPlugin>,
}

impl Component {
    /// Configure a component from its section of a specification.
    pub fn new(name: &str, plugin: Box<dyn ComponentPlugin>, config: toml::Table) -> Result<Self> {
        let options = configure(name, &declared_options(plugin.as_ref()), config)?;
        let version = expand_vars(options.get_str("version"), |var| std::env::var(var).ok())
            .parse()
            .with_context(|| format!("invalid version number for {}", name))?;

        Ok(Component {
            name: name.to_string(),
            version,
            options,
            plugin,
        })
    }

    /// Every option the component accepts, in the order they are shown.
    pub fn declared_options(&self) -> Vec<ComponentOption> {
        declared_options(self.plugin.as_ref())
    }

    pub fn install_from_source(&self) -> bool {
        self.plugin.must_install_from_source() || self.options.get_bool("install_from_source")
    }
}

impl Installable for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &VersionNumber {
        &self.version
    }

    fn preinstalls(&self) -> Vec<String> {
        self.plugin
            .preinstalls()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }
}

fn declared_options(plugin: &dyn ComponentPlugin) -> Vec<ComponentOption> {
    let mut options = vec![ComponentOption::new("version", OptionType::Str)
        .required()
        .help("The version number of the component.")];

    if !plugin.must_install_from_source() {
        options.push(
            ComponentOption::new("install_from_source", OptionType::Bool)
                .default(true)
                .help("Install from a source package rather an existing installation."),
        );
    }

    options.extend(plugin.options());
    options
}

/// Expand `$VAR` and `${VAR}` references. Unknown variables are left as is.
fn expand_vars(text: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('$') {
        expanded.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        match lookup(name).filter(|_| !name.is_empty()) {
            Some(value) => {
                expanded.push_str(&value);
                rest = &after[consumed..];
            }
            None => {
                expanded.push('$');
                rest = after;
            }
        }
    }

    expanded.push_str(rest);
    expanded
}

/// A component's view of the sysroot.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext<'a> {
    pub component: &'a Component,
    pub sysroot: &'a Sysroot,
}

impl<'a> ComponentContext<'a> {
    pub fn new(component: &'a Component, sysroot: &'a Sysroot) -> Self {
        ComponentContext { component, sysroot }
    }

    pub fn name(&self) -> &'a str {
        &self.component.name
    }

    pub fn version(&self) -> &'a VersionNumber {
        &self.component.version
    }

    pub fn options(&self) -> &'a OptionValues {
        &self.component.options
    }

    pub fn install_from_source(&self) -> bool {
        self.component.install_from_source()
    }

    pub fn target(&self) -> Architecture {
        self.sysroot.target
    }

    pub fn target_platform(&self) -> Platform {
        self.sysroot.target.platform()
    }

    pub fn host(&self) -> Architecture {
        self.sysroot.host
    }

    pub fn host_platform(&self) -> Platform {
        self.sysroot.host.platform()
    }

    pub fn sysroot_dir(&self) -> &'a Path {
        &self.sysroot.sysroot_dir
    }

    pub fn host_dir(&self) -> PathBuf {
        self.sysroot.host_dir()
    }

    pub fn target_include_dir(&self) -> PathBuf {
        self.sysroot.target_include_dir()
    }

    pub fn target_lib_dir(&self) -> PathBuf {
        self.sysroot.target_lib_dir()
    }

    pub fn target_src_dir(&self) -> PathBuf {
        self.sysroot.target_src_dir()
    }

    /// The host's name for an executable.
    pub fn host_exe(&self, name: &str) -> String {
        self.sysroot.host.platform().exe(name)
    }

    pub fn host_make(&self) -> &'static str {
        self.sysroot.host.platform().make()
    }

    /// The context of another component, which must be specified.
    pub fn component_context(&self, name: &str) -> Result<ComponentContext<'a>, DeployError> {
        match self.sysroot.get_component(name) {
            Some(component) => Ok(ComponentContext::new(component, self.sysroot)),
            None => Err(self.error(format!(
                "'{}' must be specified as a component of the sysroot",
                name
            ))),
        }
    }

    /// Another component, which must be specified.
    pub fn get_component(&self, name: &str) -> Result<&'a Component, DeployError> {
        self.component_context(name).map(|ctx| ctx.component)
    }

    /// Another component, if it is specified.
    pub fn find_component(&self, name: &str) -> Option<&'a Component> {
        self.sysroot.get_component(name)
    }

    /// Locate an executable on PATH.
    pub fn find_exe(&self, name: &str) -> Result<PathBuf, DeployError> {
        find_executable(&self.host_exe(name))
            .ok_or_else(|| self.error(format!("'{}' could not be found on PATH", name)))
    }

    /// An error raised on behalf of the component.
    pub fn error(&self, message: impl Into<String>) -> DeployError {
        DeployError::component(self.name(), message)
    }

    /// The error for a version that is not supported.
    pub fn unsupported(&self, detail: Option<&str>) -> DeployError {
        let mut message = format!("v{} is unsupported", self.version());
        if let Some(detail) = detail {
            message.push(' ');
            message.push_str(detail);
        }
        self.error(message)
    }

    pub fn untested(&self) {
        self.warning(&format!("v{} is untested", self.version()));
    }

    pub fn warning(&self, message: &str) {
        warn!("{}: {}", self.name(), message);
    }

    pub fn progress(&self, message: &str) {
        info!("{}: {}", self.name(), message);
    }

    pub fn verbose(&self, message: &str) {
        debug!("{}: {}", self.name(), message);
    }

    /// The Apple SDK found when the target was verified.
    pub fn apple_sdk(&self) -> Result<&'a AppleSdk, DeployError> {
        self.sysroot
            .environment()
            .apple_sdk
            .as_ref()
            .ok_or_else(|| self.error("an Apple SDK is only available for Apple targets"))
    }

    /// The Android toolchain found when the target was verified.
    pub fn android(&self) -> Result<&'a AndroidToolchain, DeployError> {
        self.sysroot
            .environment()
            .android
            .as_ref()
            .ok_or_else(|| self.error("the Android NDK is only available for Android targets"))
    }

    /// Return the stripped line of a file containing `identifier`.
    pub fn get_version_from_file(&self, identifier: &str, path: &Path) -> Result<String> {
        self.verbose(&format!("determining installed version from '{}'", path.display()));

        let line = if path.is_file() {
            fs::read_to_string(path)?
                .lines()
                .find(|line| line.contains(identifier))
                .map(|line| line.trim().to_string())
        } else {
            None
        };

        line.ok_or_else(|| {
            self.error(format!("unable to find '{}' in {}", identifier, path.display()))
                .into()
        })
    }

    /// Check that an installed version is the one that was specified.
    pub fn check_installed_version(&self, installed: &VersionNumber) -> Result<(), DeployError> {
        if self.version() == installed {
            Ok(())
        } else {
            Err(self.error(format!(
                "v{} is specified but the host installation is v{}",
                self.version(),
                installed
            )))
        }
    }

    pub fn target_src_path(&self, name: &str) -> Result<PathBuf> {
        self.component.plugin.target_src_path(self, name)
    }

    pub fn target_modules_dir(&self) -> Result<PathBuf> {
        self.component.plugin.target_modules_dir(self)
    }

    pub fn archive_name(&self) -> Result<String, DeployError> {
        self.component
            .plugin
            .archive_name(self)
            .ok_or_else(|| self.error("there is no source archive"))
    }
}

/// A component's view of the sysroot while it is being installed.
pub struct InstallContext<'a> {
    ctx: ComponentContext<'a>,
    build_dir: &'a Path,
    archives: &'a ArchiveSearch,
    sdk_env: Vec<(String, String)>,
}

impl<'a> Deref for InstallContext<'a> {
    type Target = ComponentContext<'a>;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

impl<'a> InstallContext<'a> {
    pub fn new(
        ctx: ComponentContext<'a>,
        build_dir: &'a Path,
        archives: &'a ArchiveSearch,
        sdk_env: Vec<(String, String)>,
    ) -> Self {
        InstallContext {
            ctx,
            build_dir,
            archives,
            sdk_env,
        }
    }

    /// The temporary directory the component is built in.
    pub fn build_dir(&self) -> &'a Path {
        self.build_dir
    }

    /// A file in one of the source directories.
    pub fn get_file(&self, name: &str) -> Option<PathBuf> {
        self.archives.find_file(name)
    }

    /// A local copy of the component's source archive.
    pub fn get_archive(&self) -> Result<PathBuf> {
        self.get_archive_of(&self.ctx)
    }

    /// A local copy of another component's source archive.
    pub fn get_archive_of(&self, owner: &ComponentContext<'_>) -> Result<PathBuf> {
        let name = owner.archive_name()?;
        self.archives.get_archive(owner.name(), &name, || {
            owner.component.plugin.archive_urls(owner)
        })
    }

    /// Unpack an archive in the build directory, returning its root.
    pub fn unpack_archive(&self, archive: &Path) -> Result<PathBuf> {
        self.unpack_archive_in(archive, self.build_dir)
    }

    pub fn unpack_archive_in(&self, archive: &Path, dir: &Path) -> Result<PathBuf> {
        archive::unpack_archive(self.name(), archive, dir)
    }

    /// Unpack the component's own source archive in the build directory.
    pub fn unpack_source(&self) -> Result<PathBuf> {
        let archive = self.get_archive()?;
        self.unpack_archive(&archive)
    }

    /// A command that builds for the target, run in the build directory.
    pub fn command(&self, program: impl AsRef<Path>) -> ProcessBuilder {
        let mut command = self.host_command(program);
        for (key, value) in &self.sdk_env {
            command = command.env(key, value);
        }
        command
    }

    /// A command that builds for the host.
    pub fn host_command(&self, program: impl AsRef<Path>) -> ProcessBuilder {
        ProcessBuilder::new(program).cwd(self.build_dir)
    }

    /// Run a command, logging its output.
    pub fn run(&self, command: ProcessBuilder) -> Result<()> {
        self.run_capture(command).map(|_| ())
    }

    /// Run a command and return its trimmed stdout.
    pub fn run_capture(&self, command: ProcessBuilder) -> Result<String> {
        debug!("running '{}'", command.display_command());

        let output = command.exec_and_check()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            debug!("{}", line);
        }

        Ok(stdout.trim().to_string())
    }

    /// PATH with a directory prepended, for commands needing a toolchain.
    pub fn path_with(&self, dir: &Path) -> Result<String> {
        let mut paths = vec![dir.to_path_buf()];
        if let Some(path) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&path).filter(|p| p != dir));
        }

        let joined = std::env::join_paths(paths).context("failed to construct PATH")?;
        Ok(joined.to_string_lossy().into_owned())
    }

    pub fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        self.verbose(&format!("copying {} to {}", src.display(), dst.display()));
        fs::copy_file(src, dst)
    }

    /// Copy a text file, replacing each macro with its value.
    pub fn copy_file_with_macros(
        &self,
        src: &Path,
        dst: &Path,
        macros: &[(&str, &str)],
    ) -> Result<()> {
        self.verbose(&format!("copying {} to {}", src.display(), dst.display()));

        let mut contents = fs::read_to_string(src)?;
        for (key, value) in macros {
            contents = contents.replace(key, value);
        }

        fs::write_string(dst, &contents)
    }

    /// Copy a directory, replacing any existing copy.
    pub fn copy_dir(&self, src: &Path, dst: &Path, ignore: &[&str]) -> Result<()> {
        self.verbose(&format!("copying {} to {}", src.display(), dst.display()));

        fs::remove_dir_all_if_exists(dst)?;
        fs::copy_dir_all(src, dst, &fs::patterns(ignore)?)
    }

    /// Rewrite a file line by line. A missing file is ignored.
    ///
    /// The original is kept with an `.orig` extension.
    pub fn patch_file(
        &self,
        path: &Path,
        mut patcher: impl FnMut(&str, &mut String),
    ) -> Result<()> {
        if !path.is_file() {
            return Ok(());
        }

        let contents = fs::read_to_string(path)?;
        let mut orig = path.as_os_str().to_owned();
        orig.push(".orig");
        std::fs::rename(path, &orig)
            .with_context(|| format!("failed to rename {}", path.display()))?;

        let mut patched = String::with_capacity(contents.len());
        for line in contents.split_inclusive('\n') {
            patcher(line, &mut patched);
        }

        fs::write_string(path, &patched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Plain;

    impl ComponentPlugin for Plain {
        fn install(&self, _ctx: &InstallContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FromSource;

    impl ComponentPlugin for FromSource {
        fn must_install_from_source(&self) -> bool {
            true
        }

        fn options(&self) -> Vec<ComponentOption> {
            vec![ComponentOption::new("installed_modules", OptionType::List).required()]
        }

        fn install(&self, _ctx: &InstallContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    fn table(text: &str) -> toml::Table {
        text.parse().unwrap()
    }

    #[test]
    fn test_base_options() {
        let component =
            Component::new("zlib", Box::new(Plain), table("version = '1.2.11'")).unwrap();

        assert_eq!(component.version, VersionNumber::new(1, 2, 11));
        assert!(component.install_from_source());

        let names: Vec<String> = component
            .declared_options()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["version", "install_from_source"]);
    }

    #[test]
    fn test_must_install_from_source() {
        let component = Component::new(
            "PyQt5",
            Box::new(FromSource),
            table("version = '5.15.1'\ninstalled_modules = ['QtCore']"),
        )
        .unwrap();

        let names: Vec<String> = component
            .declared_options()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["version", "installed_modules"]);
        assert!(component.install_from_source());
    }

    #[test]
    fn test_install_from_source_is_not_an_option() {
        let err = Component::new(
            "PyQt5",
            Box::new(FromSource),
            table("version = '5.15.1'\ninstalled_modules = []\ninstall_from_source = false"),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "PyQt5: unknown option(s): install_from_source");
    }

    #[test]
    fn test_expand_vars() {
        let vars: HashMap<&str, &str> = [("QT_VERSION", "5.15.0"), ("X", "1")].into();
        let lookup = |name: &str| vars.get(name).map(|v| v.to_string());

        assert_eq!(expand_vars("$QT_VERSION", lookup), "5.15.0");
        assert_eq!(expand_vars("${QT_VERSION}", lookup), "5.15.0");
        assert_eq!(expand_vars("${X}.2.$X", lookup), "1.2.1");
        assert_eq!(expand_vars("$UNKNOWN", lookup), "$UNKNOWN");
        assert_eq!(expand_vars("3.7.8", lookup), "3.7.8");
        assert_eq!(expand_vars("${X", lookup), "${X");
    }
}

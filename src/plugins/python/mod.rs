//! The host and target Python interpreter.
//!
//! The host interpreter runs the freeze step of an application build and is
//! either an existing installation or built from source. The target
//! interpreter is built from source as a static library with qmake, or, on
//! Windows, copied from an existing installation.

pub mod configure;
pub mod stdlib;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::errors::DeployError;
use crate::core::option::{ComponentOption, OptionType};
use crate::core::platform::Platform;
use crate::core::version::VersionNumber;
use crate::plugins::qt::host_qmake;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::util::fs;
use crate::util::process::ProcessBuilder;

/// The latest tested patch release of each supported minor version.
const LATEST_RELEASES: &[(u32, u32, u32)] = &[(3, 5, 10), (3, 6, 11), (3, 7, 8)];

#[derive(Debug)]
pub struct Python;

/// Where the `Python` component puts things in a sysroot.
///
/// Other components use this to find the interpreter they install into.
#[derive(Debug, Clone, Copy)]
pub struct PythonLayout<'a> {
    ctx: ComponentContext<'a>,
}

impl<'a> PythonLayout<'a> {
    /// The layout of the sysroot's `Python` component, which must be
    /// specified.
    pub fn of(ctx: &ComponentContext<'a>) -> Result<Self, DeployError> {
        Ok(PythonLayout {
            ctx: ctx.component_context("Python")?,
        })
    }

    pub fn version(&self) -> &'a VersionNumber {
        self.ctx.version()
    }

    /// `pythonM.m`, used for version specific directories.
    pub fn py_subdir(&self) -> String {
        let version = self.version();
        format!("python{}.{}", version.major, version.minor)
    }

    fn install_host_from_source(&self) -> bool {
        self.ctx.options().get_bool("install_host_from_source")
    }

    /// The host interpreter.
    pub fn host_python(&self) -> Result<PathBuf, DeployError> {
        if let Some(python) = self.ctx.sysroot.host_python_override() {
            return Ok(python.to_path_buf());
        }

        if self.install_host_from_source() {
            Ok(self
                .ctx
                .host_dir()
                .join("bin")
                .join(self.ctx.host_exe(&self.py_subdir())))
        } else if self.ctx.host_platform() == Platform::Windows {
            self.ctx.find_exe("python")
        } else {
            self.ctx.find_exe(&self.py_subdir())
        }
    }

    pub fn target_py_include_dir(&self) -> PathBuf {
        self.ctx.target_include_dir().join(self.py_subdir())
    }

    /// The target's standard library.
    pub fn target_modules_dir(&self) -> PathBuf {
        self.ctx.target_lib_dir().join(self.py_subdir())
    }

    pub fn target_sitepackages_dir(&self) -> PathBuf {
        self.target_modules_dir().join("site-packages")
    }

    /// The name of the target interpreter library, as given to the linker.
    pub fn target_py_lib(&self) -> String {
        let version = self.version();

        if self.ctx.target_platform() == Platform::Windows {
            format!("python{}{}", version.major, version.minor)
        } else if !self.ctx.install_from_source() && *version <= (3, 7) {
            format!("python{}.{}m", version.major, version.minor)
        } else {
            format!("python{}.{}", version.major, version.minor)
        }
    }
}

impl Python {
    fn verify_host(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let layout = PythonLayout::of(ctx)?;

        if layout.install_host_from_source() {
            if ctx.host_platform() == Platform::Windows {
                return Err(ctx
                    .error(
                        "installing the host Python from a source package on Windows \
                         is not supported",
                    )
                    .into());
            }
            return Ok(());
        }

        let python = layout.host_python()?;
        let output = ProcessBuilder::new(&python)
            .args(["-c", "import sys; print(sys.version.split()[0])"])
            .exec_with_stdout()?;
        let host_version: VersionNumber = output.trim().parse()?;

        // The patch version doesn't matter.
        let version = ctx.version();
        if version.major != host_version.major || version.minor != host_version.minor {
            return Err(ctx
                .error(format!(
                    "v{} is specified but the host installation is v{}",
                    version, host_version
                ))
                .into());
        }

        Ok(())
    }

    fn verify_openssl(&self, ctx: &ComponentContext<'_>) -> Result<(), DeployError> {
        let Some(openssl) = ctx.find_component("OpenSSL") else {
            return Ok(());
        };

        let version = ctx.version();
        let openssl = &openssl.version;

        if *version >= (3, 7, 4) {
            if *openssl != (1, 1, 0) && *openssl != (1, 1, 1) {
                return Err(ctx.error(format!("v{} requires OpenSSL v1.1.0 or v1.1.1", version)));
            }
        } else if *version == (3, 7) {
            if *openssl != (1, 1, 0) {
                return Err(ctx.error(format!("v{} requires OpenSSL v1.1.0", version)));
            }
        } else if *openssl != (1, 0, 2) {
            return Err(ctx.error(format!("v{} requires OpenSSL v1.0.2", version)));
        }

        Ok(())
    }

    fn install_host(&self, ctx: &InstallContext<'_>) -> Result<()> {
        ctx.progress("installing the host Python from source");

        let source_dir = ctx.unpack_source()?;
        let make = ctx.host_make();

        // __PYVENV_LAUNCHER__ breaks the build on macOS.
        let command = |program: &str| {
            ctx.host_command(program)
                .cwd(&source_dir)
                .env_remove("__PYVENV_LAUNCHER__")
        };

        ctx.run(command("./configure").args([
            "--prefix".to_string(),
            ctx.host_dir().display().to_string(),
            "--with-ensurepip=no".to_string(),
        ]))?;
        ctx.run(command(make))?;
        ctx.run(command(make).arg("install"))
    }

    fn install_target(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let archive = ctx.get_archive()?;

        // A copy of the source for any separately compiled extension modules.
        let src_dir = ctx.target_src_dir();
        fs::remove_dir_all_if_exists(&src_dir.join(format!("Python-{}", ctx.version())))?;
        let modules_source = ctx.unpack_archive_in(&archive, &src_dir)?;
        self.patch_source(ctx, &modules_source)?;

        let source_dir = ctx.unpack_archive(&archive)?;
        self.patch_source(ctx, &source_dir)?;
        self.configure(ctx, &source_dir)?;

        let qmake = host_qmake(ctx.sysroot)?;
        let make = ctx.host_make();

        ctx.run(ctx.command(&qmake).cwd(&source_dir).arg(format!(
            "SYSROOT={}",
            ctx.sysroot_dir().display()
        )))?;
        ctx.run(ctx.command(make).cwd(&source_dir))?;
        ctx.run(ctx.command(make).cwd(&source_dir).arg("install"))?;

        // A dummy _sysconfigdata module lets sysconfig work.
        if let Some(name) = configure::sysconfigdata_name(ctx.target_platform()) {
            let layout = PythonLayout::of(ctx)?;
            fs::write_string(
                &layout
                    .target_modules_dir()
                    .join(format!("_sysconfigdata_m_{}.py", name)),
                configure::SYSCONFIGDATA,
            )?;
        }

        Ok(())
    }

    /// Write `config.c`, `pyconfig.h` and `python.pro`.
    fn configure(&self, ctx: &InstallContext<'_>, source_dir: &Path) -> Result<()> {
        let version = ctx.version();
        let target = ctx.target();
        let dynamic_loading = ctx.options().get_bool("dynamic_loading");

        ctx.progress(&format!("configuring Python v{} for {}", version, target));

        let modules = configure::core_extension_modules(version, target)?;

        let config_c = source_dir.join("Modules").join("config.c");
        ctx.verbose(&format!("generating {}", config_c.display()));
        fs::write_string(&config_c, &configure::config_c(version, &modules))?;

        let pyconfig = source_dir.join("pyconfig.h");

        if ctx.target_platform() == Platform::Windows {
            let pc_dir = source_dir.join("PC");
            ctx.copy_file(&pc_dir.join("pyconfig.h"), &pyconfig)?;

            // Otherwise MSVC confuses them with the ones we want.
            for name in ["config.c", "pyconfig.h"] {
                let path = pc_dir.join(name);
                if path.is_file() {
                    std::fs::rename(&path, pc_dir.join(format!("{}.orig", name)))
                        .with_context(|| format!("failed to rename {}", path.display()))?;
                }
            }
        } else {
            let prepared = format!("pyconfig-{}.h", target);

            if let Some(prepared) = ctx.get_file(&prepared) {
                ctx.copy_file(&prepared, &pyconfig)?;
            } else if ctx.host() == target {
                ctx.verbose(&format!("generating {}", pyconfig.display()));
                ctx.run(ctx.command("./configure").cwd(source_dir))?;
            } else {
                return Err(ctx
                    .error(format!(
                        "'{}' must be provided in a source directory when cross compiling",
                        prepared
                    ))
                    .into());
            }

            if !dynamic_loading {
                ctx.patch_file(&pyconfig, |line, out| {
                    if !line.trim_start().starts_with("#define HAVE_DYNAMIC_LOADING") {
                        out.push_str(line);
                    }
                })?;
            }
        }

        let python_pro = source_dir.join("python.pro");
        ctx.verbose(&format!("generating {}", python_pro.display()));
        fs::write_string(
            &python_pro,
            &configure::python_pro(version, target, dynamic_loading, &modules)?,
        )
    }

    /// Patch the source as needed for the target.
    fn patch_source(&self, ctx: &InstallContext<'_>, source_dir: &Path) -> Result<()> {
        let modules = source_dir.join("Modules");

        match ctx.target_platform() {
            Platform::Ios => {
                // iOS has no system().
                ctx.patch_file(&modules.join("posixmodule.c"), |line, out| {
                    if line.trim().replace(' ', "") != "#defineHAVE_SYSTEM1" {
                        out.push_str(line);
                    }
                })?;
            }
            Platform::Windows => {
                // sys.dllhandle only exists when Python is a DLL.
                if !ctx.options().get_bool("dynamic_loading") {
                    ctx.patch_file(
                        &source_dir.join("Lib").join("ctypes").join("__init__.py"),
                        |line, out| out.push_str(&line.replace("_sys.dllhandle", "0")),
                    )?;
                }

                ctx.patch_file(&modules.join("_io").join("_iomodule.c"), |line, out| {
                    out.push_str(&line.replace("consoleapi.h", "windows.h"))
                })?;

                let include_python_first = |line: &str, out: &mut String| {
                    if line.trim().replace(' ', "") == "#include<windows.h>" {
                        out.push_str("#include <Python.h>\n\n");
                    }
                    out.push_str(line);
                };

                let expat = modules.join("expat");
                ctx.patch_file(&expat.join("winconfig.h"), include_python_first)?;
                if *ctx.version() <= (3, 7, 4) {
                    ctx.patch_file(&expat.join("loadlibrary.c"), include_python_first)?;
                }

                // overlapped.c uses the same name.
                ctx.patch_file(&modules.join("_winapi.c"), |line, out| {
                    out.push_str(&line.replace("OverlappedType", "OverlappedType_"))
                })?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Copy the target interpreter from the host's installation on Windows.
    fn install_existing_windows(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let layout = PythonLayout::of(ctx)?;
        let python = layout.host_python()?;
        let install_dir = python
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let version = ctx.version();
        let lib_dir = ctx.target_lib_dir();

        ctx.progress(&format!("copying the installation in {}", install_dir.display()));

        let libs = install_dir.join("libs");
        let import_libs = [
            format!("{}.lib", layout.target_py_lib()),
            format!("python{}.lib", version.major),
        ];
        for lib in import_libs {
            ctx.copy_file(&libs.join(&lib), &lib_dir.join(&lib))?;
        }

        ctx.copy_dir(
            &install_dir.join("DLLs"),
            &lib_dir.join("DLLs"),
            &["*.ico", "tcl*.dll", "tk*.dll", "_tkinter.pyd"],
        )?;

        for dll in [
            format!("python{}{}.dll", version.major, version.minor),
            format!("python{}.dll", version.major),
            "vcruntime140.dll".to_string(),
        ] {
            ctx.copy_file(&install_dir.join(&dll), &lib_dir.join(&dll))?;
        }

        ctx.copy_dir(
            &install_dir.join("Lib"),
            &layout.target_modules_dir(),
            &["site-packages", "__pycache__", "*.pyc", "*.pyo"],
        )?;
        ctx.copy_dir(&install_dir.join("include"), &layout.target_py_include_dir(), &[])
    }
}

impl ComponentPlugin for Python {
    fn options(&self) -> Vec<ComponentOption> {
        vec![
            ComponentOption::new("dynamic_loading", OptionType::Bool).help(
                "Set to enable support for the dynamic loading of extension modules when \
                 building from source.",
            ),
            ComponentOption::new("install_host_from_source", OptionType::Bool)
                .default(false)
                .help(
                    "Install the host Python from a source package rather than an existing \
                     installation.",
                ),
        ]
    }

    // OpenSSL and the like are only needed when building applications.
    fn preinstalls(&self) -> &'static [&'static str] {
        &["Qt"]
    }

    fn provides(&self, _ctx: &ComponentContext<'_>) -> Result<Provides> {
        Ok(stdlib::standard_library())
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        Some(format!("Python-{}.tgz", ctx.version()))
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        Ok(vec![format!("https://www.python.org/ftp/python/{}/", ctx.version())])
    }

    fn target_src_path(&self, ctx: &ComponentContext<'_>, name: &str) -> Result<PathBuf> {
        Ok(ctx
            .target_src_dir()
            .join(format!("Python-{}", ctx.version()))
            .join("Modules")
            .join(name))
    }

    fn target_modules_dir(&self, ctx: &ComponentContext<'_>) -> Result<PathBuf> {
        Ok(PythonLayout::of(ctx)?.target_modules_dir())
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let version = ctx.version();

        let latest = LATEST_RELEASES
            .iter()
            .find(|(major, minor, _)| *version == (*major, *minor))
            .ok_or_else(|| ctx.unsupported(None))?;
        if *version > *latest {
            ctx.untested();
        }

        self.verify_host(ctx)?;

        if ctx.install_from_source() {
            ctx.get_component("Qt")?;
            self.verify_openssl(ctx)?;
        } else if ctx.host_platform() != Platform::Windows {
            return Err(ctx
                .error(format!(
                    "using an existing Python installation for the target is not supported on {}",
                    ctx.target_platform()
                ))
                .into());
        }

        if ctx.target_platform() == Platform::Android {
            if *version < (3, 6) {
                return Err(ctx.error(format!("v{} is not supported on Android", version)).into());
            }

            if ctx.android()?.api < 21 {
                return Err(ctx.error("Android API level 21 or greater is required").into());
            }
        }

        Ok(())
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        if ctx.options().get_bool("install_host_from_source") {
            self.install_host(ctx)?;
        }

        if ctx.install_from_source() {
            self.install_target(ctx)
        } else {
            self.install_existing_windows(ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::Architecture;
    use crate::sysroot::specification::Specification;
    use crate::sysroot::Sysroot;
    use crate::plugins::builtin_registry;

    fn make_sysroot(spec: &str, target: Architecture) -> Sysroot {
        let registry = builtin_registry();
        let spec = Specification::parse(Path::new("/tmp/sysroot.toml"), spec, &registry).unwrap();
        Sysroot::new(&spec, Architecture::Linux64, target, Some(Path::new("/tmp/sysroots")))
            .unwrap()
    }

    #[test]
    fn test_layout() {
        let sysroot = make_sysroot("[Python]\nversion = \"3.7.8\"\n", Architecture::Linux64);
        let python = sysroot.get_component("Python").unwrap();
        let layout = PythonLayout::of(&sysroot.context(python)).unwrap();
        let root = Path::new("/tmp/sysroots/sysroot-linux-64");

        assert_eq!(layout.py_subdir(), "python3.7");
        assert_eq!(layout.target_py_include_dir(), root.join("include").join("python3.7"));
        assert_eq!(
            layout.target_sitepackages_dir(),
            root.join("lib").join("python3.7").join("site-packages")
        );
        assert_eq!(layout.target_py_lib(), "python3.7");
    }

    #[test]
    fn test_target_py_lib_existing_installation() {
        let sysroot = make_sysroot(
            "[Python]\nversion = \"3.6.11\"\ninstall_from_source = false\n",
            Architecture::Linux64,
        );
        let python = sysroot.get_component("Python").unwrap();
        let layout = PythonLayout::of(&sysroot.context(python)).unwrap();
        assert_eq!(layout.target_py_lib(), "python3.6m");

        let sysroot = make_sysroot("[Python]\nversion = \"3.6.11\"\n", Architecture::Win64);
        let python = sysroot.get_component("Python").unwrap();
        assert_eq!(PythonLayout::of(&sysroot.context(python)).unwrap().target_py_lib(), "python36");
    }

    #[test]
    fn test_host_python_override() {
        let sysroot = make_sysroot("[Python]\nversion = \"3.7.8\"\n", Architecture::Linux64)
            .with_host_python(Some(PathBuf::from("/opt/python/bin/python3")));
        let python = sysroot.get_component("Python").unwrap();
        let layout = PythonLayout::of(&sysroot.context(python)).unwrap();

        assert_eq!(layout.host_python().unwrap(), PathBuf::from("/opt/python/bin/python3"));
    }

    #[test]
    fn test_layout_requires_python() {
        let sysroot = make_sysroot("[zlib]\nversion = \"1.2.11\"\n", Architecture::Linux64);
        let zlib = sysroot.get_component("zlib").unwrap();

        let err = PythonLayout::of(&sysroot.context(zlib)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "zlib: 'Python' must be specified as a component of the sysroot"
        );
    }
}

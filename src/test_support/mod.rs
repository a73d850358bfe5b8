//! Test utilities for pydeploy unit tests.
//!
//! The fake plugins stand in for the built-in ones without downloading or
//! building anything. Installing a fake component appends its name to a
//! log in the sysroot so that tests can check what was installed and in
//! which order.
//!
//! # Example
//!
//! ```rust,ignore
//! use pydeploy::test_support::{fake_registry, installed_log};
//!
//! let spec = Specification::load(&path, &fake_registry())?;
//! // Install...
//! assert_eq!(installed_log(&sysroot.sysroot_dir), vec!["zlib", "Qt"]);
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::option::{ComponentOption, OptionType};
use crate::core::part::Part;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::sysroot::PluginRegistry;

const LOG_NAME: &str = "installed.log";

/// Record that a component was installed.
fn log_install(ctx: &InstallContext<'_>) -> Result<()> {
    let path = ctx.sysroot_dir().join(LOG_NAME);
    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    writeln!(log, "{}", ctx.name())?;
    Ok(())
}

/// The components installed so far, in installation order.
pub fn installed_log(sysroot_dir: &Path) -> Vec<String> {
    std::fs::read_to_string(sysroot_dir.join(LOG_NAME))
        .map(|log| log.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

#[derive(Debug)]
pub struct FakeZlib;

impl ComponentPlugin for FakeZlib {
    fn provides(&self, _ctx: &ComponentContext<'_>) -> Result<Provides> {
        Ok(vec![("zlib".to_string(), vec![Part::library().libs(&["-lz"])])])
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        log_install(ctx)
    }
}

#[derive(Debug)]
pub struct FakeOpenSsl;

impl ComponentPlugin for FakeOpenSsl {
    fn provides(&self, _ctx: &ComponentContext<'_>) -> Result<Provides> {
        Ok(vec![(
            "openssl".to_string(),
            vec![Part::library().libs(&["-lssl", "-lcrypto"])],
        )])
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        log_install(ctx)
    }
}

#[derive(Debug)]
pub struct FakeQt;

impl ComponentPlugin for FakeQt {
    fn options(&self) -> Vec<ComponentOption> {
        vec![ComponentOption::new("ssl", OptionType::Str)]
    }

    fn preinstalls(&self) -> &'static [&'static str] {
        &["OpenSSL", "zlib"]
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        log_install(ctx)
    }
}

/// A Python with a small standard library and its modules in
/// `<sysroot>/lib/python`.
#[derive(Debug)]
pub struct FakePython;

impl ComponentPlugin for FakePython {
    fn preinstalls(&self) -> &'static [&'static str] {
        &["Qt"]
    }

    fn provides(&self, _ctx: &ComponentContext<'_>) -> Result<Provides> {
        let parts = vec![
            ("importlib", Part::python_package().core()),
            ("encodings", Part::python_package().core()),
            ("sys", Part::extension_module().core()),
            ("os", Part::python_module().deps(&["stat"])),
            ("stat", Part::python_module()),
            ("json", Part::python_module().deps(&["re"])),
            ("re", Part::python_module()),
            ("winreg", Part::extension_module().target("win")),
            ("_ssl", Part::extension_module().deps(&["OpenSSL:openssl"])),
            ("zlib", Part::extension_module().deps(&["zlib:zlib"])),
            ("ctypes", Part::python_package().min_android_api(24)),
            ("email", Part::python_package()),
            ("email.mime", Part::python_package()),
            ("xml.dom", Part::python_package()),
        ];

        Ok(parts
            .into_iter()
            .map(|(name, part)| (name.to_string(), vec![part]))
            .collect())
    }

    fn target_modules_dir(&self, ctx: &ComponentContext<'_>) -> Result<PathBuf> {
        Ok(ctx.target_lib_dir().join("python"))
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        log_install(ctx)
    }
}

/// A registry of the fake plugins.
pub fn fake_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();

    registry.register("OpenSSL", || Box::new(FakeOpenSsl) as Box<dyn ComponentPlugin>);
    registry.register("Python", || Box::new(FakePython) as Box<dyn ComponentPlugin>);
    registry.register("Qt", || Box::new(FakeQt) as Box<dyn ComponentPlugin>);
    registry.register("zlib", || Box::new(FakeZlib) as Box<dyn ComponentPlugin>);

    registry
}

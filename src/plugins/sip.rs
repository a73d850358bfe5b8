//! The sip module used by PyQt.
//!
//! A major version of 4 means SIP v4, where both the code generator (for
//! the host) and the module (for the target) are built from the same
//! archive. Any other version is the ABI version of a sip module built from
//! the sdist that `sip-module` creates, in which case the code generator is
//! the host's `sip-install`.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::option::{ComponentOption, OptionType};
use crate::core::part::Part;
use crate::core::platform::Platform;
use crate::plugins::python::PythonLayout;
use crate::plugins::qt::host_qmake;
use crate::sysroot::archive::pypi_urls;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::util::fs;

#[derive(Debug)]
pub struct Sip;

/// The qualified name of the sip module.
pub fn module_name<'a>(ctx: &ComponentContext<'a>) -> &'a str {
    match ctx.options().get_str("module_name") {
        "" => "sip",
        name => name,
    }
}

/// The host code generator of SIP v4.
pub fn host_sip(ctx: &ComponentContext<'_>) -> PathBuf {
    ctx.host_dir().join("bin").join(ctx.host_exe("sip"))
}

/// Where SIP v4 installs `.sip` files for the target.
pub fn target_sip_dir(ctx: &ComponentContext<'_>) -> PathBuf {
    ctx.sysroot_dir().join("share").join("sip")
}

fn is_v4(ctx: &ComponentContext<'_>) -> bool {
    *ctx.version() == 4
}

/// The project file that builds a sip module sdist as a static library.
fn sip_pro(
    android_abi: &str,
    include_dir: &str,
    target_dir: &str,
    sources: &[String],
    headers: &[String],
) -> String {
    format!(
        "TEMPLATE = lib\n\
         TARGET = sip\n\
         CONFIG -= qt\n\
         CONFIG += warn_on exceptions_off staticlib release\n\
         ANDROID_ABIS = {}\n\
         \n\
         INCLUDEPATH += {}\n\
         \n\
         target.path = {}\n\
         INSTALLS += target\n\
         \n\
         SOURCES = {}\n\
         HEADERS = {}\n",
        android_abi,
        include_dir,
        target_dir,
        sources.join(" "),
        headers.join(" ")
    )
}

impl Sip {
    /// Build and install the v4 code generator for the host.
    fn install_code_generator(
        &self,
        ctx: &InstallContext<'_>,
        archive: &std::path::Path,
    ) -> Result<()> {
        let build_dir = ctx.build_dir().join("sip-generator");
        let source_dir = ctx.unpack_archive_in(archive, &build_dir)?;
        let python = PythonLayout::of(ctx)?;

        let mut args = vec![
            "configure.py".to_string(),
            "--bindir".to_string(),
            ctx.host_dir().join("bin").display().to_string(),
        ];

        // From v4.19.12 sip.h is part of the tools.
        if *ctx.version() >= (4, 19, 12) {
            args.push("--incdir".to_string());
            args.push(python.target_py_include_dir().display().to_string());
            args.push("--no-module".to_string());
        }

        ctx.run(ctx.host_command(python.host_python()?).cwd(&source_dir).args(args))?;

        let sipgen = source_dir.join("sipgen");
        let make = ctx.host_make();
        ctx.run(ctx.host_command(make).cwd(&sipgen))?;
        ctx.run(ctx.host_command(make).cwd(&sipgen).arg("install"))
    }

    /// Build and install the v4 static module for the target.
    fn install_module(&self, ctx: &InstallContext<'_>, archive: &std::path::Path) -> Result<()> {
        let build_dir = ctx.build_dir().join("sip-module");
        let source_dir = ctx.unpack_archive_in(archive, &build_dir)?;
        let python = PythonLayout::of(ctx)?;

        let mut cfg = format!(
            "py_inc_dir = {}\npy_pylib_dir = {}\nsip_module_dir = {}\n",
            python.target_py_include_dir().display(),
            ctx.target_lib_dir().display(),
            python.target_sitepackages_dir().display()
        );
        if let Some(abi) = ctx.target().android_abi() {
            cfg.push_str(&format!("android_abi = {}\n", abi));
        }
        fs::write_string(&source_dir.join("sip.cfg"), &cfg)?;

        let mut args = vec![
            "configure.py".to_string(),
            "--static".to_string(),
            "--sysroot".to_string(),
            ctx.sysroot_dir().display().to_string(),
            "--no-pyi".to_string(),
            "--no-tools".to_string(),
            "--use-qmake".to_string(),
            "--configuration".to_string(),
            "sip.cfg".to_string(),
        ];
        if *ctx.version() >= (4, 19, 9) {
            args.push("--no-dist-info".to_string());
        }
        if !ctx.options().get_str("module_name").is_empty() {
            args.push("--sip-module".to_string());
            args.push(module_name(ctx).to_string());
        }

        ctx.run(ctx.host_command(python.host_python()?).cwd(&source_dir).args(args))?;

        let make = ctx.host_make();
        ctx.run(ctx.command(host_qmake(ctx.sysroot)?).cwd(&source_dir))?;
        ctx.run(ctx.command(make).cwd(&source_dir))?;
        ctx.run(ctx.command(make).cwd(&source_dir).arg("install"))
    }

    /// Build and install a module sdist with a generated project file.
    fn install_sdist(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let source_dir = ctx.unpack_source()?;
        let python = PythonLayout::of(ctx)?;

        let mut sources = Vec::new();
        let mut headers = Vec::new();
        for file in fs::walk_files(&source_dir, &[])? {
            if file.components().count() != 1 {
                continue;
            }

            let name = fs::to_slash(&file);
            if name.ends_with(".c") || name.ends_with(".cpp") {
                sources.push(name);
            } else if name.ends_with(".h") {
                headers.push(name);
            }
        }

        let package_dir = module_name(ctx)
            .rsplit_once('.')
            .map(|(package, _)| package.split('.').collect::<PathBuf>())
            .unwrap_or_default();

        let pro = sip_pro(
            ctx.target().android_abi().unwrap_or_default(),
            &python.target_py_include_dir().display().to_string(),
            &python.target_sitepackages_dir().join(package_dir).display().to_string(),
            &sources,
            &headers,
        );
        fs::write_string(&source_dir.join("sip.pro"), &pro)?;

        let make = ctx.host_make();
        ctx.run(ctx.command(host_qmake(ctx.sysroot)?).cwd(&source_dir))?;
        ctx.run(ctx.command(make).cwd(&source_dir))?;
        ctx.run(ctx.command(make).cwd(&source_dir).arg("install"))
    }
}

impl ComponentPlugin for Sip {
    fn options(&self) -> Vec<ComponentOption> {
        vec![ComponentOption::new("module_name", OptionType::Str)
            .help("The qualified name of the sip module.")]
    }

    fn preinstalls(&self) -> &'static [&'static str] {
        &["Python", "Qt"]
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        if is_v4(ctx) {
            Some(format!("sip-{}.tar.gz", ctx.version()))
        } else {
            Some(format!("{}-{}.tar.gz", module_name(ctx).replace('.', "_"), ctx.version()))
        }
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        if is_v4(ctx) {
            return Ok(vec![format!(
                "https://www.riverbankcomputing.com/static/Downloads/sip/{}/",
                ctx.version()
            )]);
        }

        let archive = ctx.archive_name()?;
        pypi_urls(
            &module_name(ctx).replace('.', "-"),
            &ctx.version().to_string(),
            &archive,
        )
    }

    fn provides(&self, ctx: &ComponentContext<'_>) -> Result<Provides> {
        let name = module_name(ctx);

        let mut lib_dir = PythonLayout::of(ctx)?.target_sitepackages_dir();
        if let Some((package, _)) = name.rsplit_once('.') {
            lib_dir.extend(package.split('.'));
        }

        // The containing package is provided by another component.
        let part = Part::extension_module()
            .deps(&["Python:atexit", "Python:enum", "Python:gc"])
            .libs(&[format!("-L{}", lib_dir.display()), "-lsip".to_string()]);

        Ok(vec![(name.to_string(), vec![part])])
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        if is_v4(ctx) {
            // The earliest version needed by a supported PyQt.
            if *ctx.version() < (4, 19, 14) {
                return Err(ctx.unsupported(None).into());
            }

            if ctx.target_platform() == Platform::Android
                && *ctx.version() <= (4, 19, 23)
                && ctx.get_component("Qt")?.version > (5, 14)
            {
                return Err(ctx.unsupported(Some("with Qt v5.14 or later on Android")).into());
            }
        } else {
            if ctx.options().get_str("module_name").is_empty() {
                return Err(ctx
                    .error("'module_name' must be set for SIP v5 and later")
                    .into());
            }

            ctx.find_exe("sip-install")?;
        }

        Ok(())
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        if is_v4(ctx) {
            let archive = ctx.get_archive()?;
            self.install_code_generator(ctx, &archive)?;
            self.install_module(ctx, &archive)
        } else {
            self.install_sdist(ctx)
        }
    }
}

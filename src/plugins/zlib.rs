//! The zlib compression library.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::option::{ComponentOption, OptionType};
use crate::core::part::Part;
use crate::core::platform::{Architecture, Platform};
use crate::plugins::version_at_end;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};

#[derive(Debug)]
pub struct Zlib;

impl ComponentPlugin for Zlib {
    fn options(&self) -> Vec<ComponentOption> {
        vec![ComponentOption::new("static_msvc_runtime", OptionType::Bool)
            .help("Set if the MSVC runtime should be statically linked.")]
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        Some(format!("zlib-{}.tar.gz", ctx.version()))
    }

    fn archive_urls(&self, _ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        Ok(vec!["https://zlib.net/".to_string()])
    }

    fn provides(&self, _ctx: &ComponentContext<'_>) -> Result<Provides> {
        Ok(vec![(
            "zlib".to_string(),
            vec![Part::library().libs(&["win#-lzlib", "!win#-lz"])],
        )])
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        if ctx.install_from_source() {
            return Ok(());
        }

        // Only the platform's own copy can be used.
        let root = match ctx.target_platform() {
            Platform::Android => ctx.android()?.ndk_sysroot.clone(),
            Platform::Ios | Platform::MacOs => ctx.apple_sdk()?.path.clone(),
            Platform::Linux => PathBuf::from("/"),
            Platform::Windows => {
                return Err(ctx
                    .error("using an existing installation is not supported for Windows targets")
                    .into())
            }
        };

        let line = ctx.get_version_from_file(
            "ZLIB_VERSION",
            &root.join("usr").join("include").join("zlib.h"),
        )?;
        ctx.check_installed_version(&version_at_end(&line)?)?;

        Ok(())
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        if !ctx.install_from_source() {
            return Ok(());
        }

        let source_dir = ctx.unpack_source()?;
        let make = ctx.host_make();
        let prefix = format!("--prefix={}", ctx.sysroot_dir().display());

        match ctx.target_platform() {
            Platform::Windows => {
                let mut command = ctx
                    .command(make)
                    .cwd(&source_dir)
                    .args(["-f", "win32\\Makefile.msc", "zlib.lib"]);
                if ctx.options().get_bool("static_msvc_runtime") {
                    command = command.arg("LOC=-MT");
                }
                ctx.run(command)?;

                for header in ["zconf.h", "zlib.h"] {
                    let target = ctx.target_include_dir().join(header);
                    ctx.copy_file(&source_dir.join(header), &target)?;
                }
                let target = ctx.target_lib_dir().join("zlib.lib");
                ctx.copy_file(&source_dir.join("zlib.lib"), &target)?;
            }
            Platform::Android => {
                let android = ctx.android()?;
                let path = ctx.path_with(&android.toolchain_bin)?;

                let configure = |program: &str| {
                    let mut command = ctx
                        .command(program)
                        .cwd(&source_dir)
                        .env("PATH", &path)
                        .env("CROSS_PREFIX", &android.toolchain_prefix)
                        .env("CC", &android.toolchain_cc);
                    if ctx.target() == Architecture::Android32 {
                        command = command.env("CFLAGS", "-fPIC");
                    }
                    command
                };

                ctx.run(configure("./configure").args(["--static", prefix.as_str()]))?;
                ctx.run(configure(make).args([
                    format!("AR={}ar cqs", android.toolchain_prefix),
                    "install".to_string(),
                ]))?;
            }
            platform => {
                let cflags = if platform == Platform::Ios {
                    Some(format!(
                        "-fembed-bitcode -O3 -arch arm64 -isysroot {}",
                        ctx.apple_sdk()?.path.display()
                    ))
                } else {
                    None
                };

                let command = |program: &str| {
                    let command = ctx.command(program).cwd(&source_dir);
                    match cflags {
                        Some(ref cflags) => command.env("CFLAGS", cflags),
                        None => command,
                    }
                };

                ctx.run(command("./configure").args(["--static", prefix.as_str()]))?;
                ctx.run(command(make))?;
                ctx.run(command(make).arg("install"))?;
            }
        }

        Ok(())
    }
}

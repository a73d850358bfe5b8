//! The OpenSSL library.
//!
//! Qt v5.15 needs v1.1.1, earlier versions of Qt only need v1.0. Python
//! v3.5 and v3.6 use v1.0.2, v3.7 uses v1.1.0 and v1.1.1 from v3.7.4.
//! Python v3.6.4 and earlier patch v1.0.2 on macOS and need an exact
//! release for the patch to apply.

use std::path::Path;

use anyhow::Result;

use crate::core::part::Part;
use crate::core::platform::{Architecture, Platform};
use crate::core::version::VersionNumber;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::util::fs;

#[derive(Debug)]
pub struct OpenSsl;

impl ComponentPlugin for OpenSsl {
    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        Some(format!("openssl-{}.tar.gz", ctx.version()))
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        let version = ctx.version();
        let release = if *version >= (1, 1, 1) {
            "1.1.1"
        } else if *version >= (1, 1, 0) {
            "1.1.0"
        } else {
            "1.0.2"
        };

        Ok(vec![
            format!("https://www.openssl.org/source/old/{}/", release),
            "https://www.openssl.org/source/".to_string(),
        ])
    }

    fn provides(&self, ctx: &ComponentContext<'_>) -> Result<Provides> {
        let part = if ctx.target_platform() == Platform::Windows && *ctx.version() == (1, 0) {
            Part::library().libs(&["libeay32.lib", "ssleay32.lib"])
        } else {
            let part = Part::library().libs(&[
                "win#-llibcrypto",
                "!win#-lcrypto",
                "win#-llibssl",
                "!win#-lssl",
            ]);

            if ctx.target_platform() == Platform::Android {
                part.bundle_shared_libs()
            } else {
                part
            }
        };

        Ok(vec![("openssl".to_string(), vec![part])])
    }

    fn sdk_environment(&self, ctx: &ComponentContext<'_>) -> Vec<(String, String)> {
        // v1.1.1 looks for ANDROID_NDK_HOME rather than ANDROID_NDK_ROOT.
        match ctx.android() {
            Ok(android) if std::env::var_os("ANDROID_NDK_HOME").is_none() => vec![(
                "ANDROID_NDK_HOME".to_string(),
                android.ndk_root.display().to_string(),
            )],
            _ => Vec::new(),
        }
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let version = ctx.version();
        if *version < (1, 0, 2) || *version > (1, 1, 1) {
            return Err(ctx.unsupported(None).into());
        }

        if !ctx.install_from_source() {
            return verify_installed_version(ctx);
        }

        let host = ctx.host_platform();
        let target = ctx.target_platform();

        if target != host && target != Platform::Android {
            return Err(ctx
                .error(format!(
                    "installing for {} on {} is not supported",
                    target, host
                ))
                .into());
        }

        let mut tools = vec!["perl"];

        if target == Platform::MacOs && *version == (1, 0, 2) {
            let python = ctx.get_component("Python")?.version.clone();

            if python <= (3, 6, 4) {
                let required = if python >= (3, 5, 4) {
                    "k"
                } else if python == (3, 5, 3) {
                    "j"
                } else if python == (3, 5, 2) {
                    "f"
                } else {
                    "d"
                };

                if version.suffix != required {
                    return Err(ctx
                        .error(format!("v1.0.2{} is required by Python v{}", required, python))
                        .into());
                }

                tools.push("patch");
            }
        }

        for tool in tools {
            ctx.find_exe(tool)?;
        }

        Ok(())
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        if !ctx.install_from_source() {
            return Ok(());
        }

        let source_dir = ctx.unpack_source()?;

        let mut options = vec![
            format!("--prefix={}", ctx.sysroot_dir().display()),
            "no-engine".to_string(),
        ];

        if ctx.host_platform() == Platform::Windows && ctx.find_exe("nasm").is_err() {
            ctx.verbose("disabling assembler optimisations as nasm isn't installed");
            options.push("no-asm".to_string());
        }

        let build = Build {
            ctx,
            source_dir: &source_dir,
        };

        if *ctx.version() >= (1, 1) {
            build.install_1_1(options)
        } else {
            build.install_1_0_2(options)
        }
    }
}

/// Check the version of the Linux system library.
fn verify_installed_version(ctx: &ComponentContext<'_>) -> Result<()> {
    if ctx.target_platform() != Platform::Linux {
        return Err(ctx
            .error("using an existing installation is only supported for Linux targets")
            .into());
    }

    let line = ctx.get_version_from_file(
        "OPENSSL_VERSION_NUMBER",
        Path::new("/usr/include/openssl/opensslv.h"),
    )?;

    let installed = parse_version_number(&line)
        .ok_or_else(|| ctx.error("unable to extract the version number"))?;

    // Only the parts affecting binary compatibility are compared.
    let version = ctx.version();
    if (version.major, version.minor, version.patch)
        != (installed.major, installed.minor, installed.patch)
    {
        return Err(ctx
            .error(format!(
                "v{} is specified but the host installation is v{}.{}.{}",
                version, installed.major, installed.minor, installed.patch
            ))
            .into());
    }

    Ok(())
}

/// Decode `# define OPENSSL_VERSION_NUMBER 0x1010107fL`.
fn parse_version_number(line: &str) -> Option<VersionNumber> {
    let value = line.split_whitespace().last()?;
    let value = value.strip_prefix("0x").unwrap_or(value);
    let value = value.strip_suffix('L').unwrap_or(value);
    let value = u32::from_str_radix(value, 16).ok()?;

    Some(VersionNumber::new(
        (value >> 28) & 0xff,
        (value >> 20) & 0xff,
        (value >> 12) & 0xff,
    ))
}

struct Build<'a, 'b> {
    ctx: &'b InstallContext<'a>,
    source_dir: &'b Path,
}

impl Build<'_, '_> {
    fn run<I, S>(&self, program: &str, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.ctx
            .run(self.ctx.command(program).cwd(self.source_dir).args(args))
    }

    fn install_1_1(&self, options: Vec<String>) -> Result<()> {
        let ctx = self.ctx;
        let make = ctx.host_make();

        if ctx.target_platform() == ctx.host_platform() {
            if ctx.target_platform() == Platform::Windows {
                let target = if ctx.target().word_size() == 64 {
                    "VC-WIN64A"
                } else {
                    "VC-WIN32"
                };

                let mut args = vec![
                    "Configure".to_string(),
                    target.to_string(),
                    "no-shared".to_string(),
                    format!("--openssldir={}\\ssl", ctx.sysroot_dir().display()),
                ];
                args.extend(options);

                self.run("perl", args)?;
            } else {
                let mut args = vec!["no-shared".to_string()];
                args.extend(options);

                self.run("./config", args)?;
            }

            self.run(make, Vec::<String>::new())?;
            self.run(make, ["install"])?;
        } else if ctx.target_platform() == Platform::Android {
            self.install_1_1_android(options)?;
        }

        Ok(())
    }

    fn install_1_1_android(&self, options: Vec<String>) -> Result<()> {
        let ctx = self.ctx;
        let android = ctx.android()?;
        let path = ctx.path_with(&android.toolchain_bin)?;

        let mut args = vec!["Configure".to_string()];
        args.extend(options);
        args.push("shared".to_string());
        args.push(format!("-D__ANDROID_API__={}", android.api));
        args.push(
            if ctx.target() == Architecture::Android32 {
                "android-arm"
            } else {
                "android-arm64"
            }
            .to_string(),
        );

        let command = |program: &str| {
            ctx.command(program)
                .cwd(self.source_dir)
                .env("PATH", &path)
        };

        ctx.run(command("perl").args(args))?;
        ctx.run(command(ctx.host_make()).args([
            "SHLIB_VERSION_NUMBER=",
            "SHLIB_EXT=_1_1.so",
            "build_libs",
        ]))?;

        // Qt needs the versioned name and Python the unversioned link.
        for lib in ["libcrypto", "libssl"] {
            let versioned = format!("{}_1_1.so", lib);
            ctx.copy_file(
                &self.source_dir.join(&versioned),
                &ctx.target_lib_dir().join(&versioned),
            )?;

            let link = ctx.target_lib_dir().join(format!("{}.so", lib));
            let _ = std::fs::remove_file(&link);
            symlink(Path::new(&versioned), &link)?;
        }

        ctx.copy_dir(
            &self.source_dir.join("include").join("openssl"),
            &ctx.target_include_dir().join("openssl"),
            &[],
        )
    }

    fn install_1_0_2(&self, mut options: Vec<String>) -> Result<()> {
        let ctx = self.ctx;

        // The options Python used before v3.7.
        options.extend(
            [
                "no-krb5",
                "no-idea",
                "no-mdc2",
                "no-rc5",
                "no-zlib",
                "enable-tlsext",
                "no-ssl2",
                "no-ssl3",
                "no-ssl3-method",
            ]
            .map(String::from),
        );

        if ctx.target_platform() == ctx.host_platform() {
            match ctx.target() {
                Architecture::MacOs64 => self.install_1_0_2_macos(options),
                Architecture::Win32 | Architecture::Win64 => self.install_1_0_2_win(options),
                _ => Ok(()),
            }
        } else if ctx.target_platform() == Platform::Android {
            self.install_1_0_2_android(options)
        } else {
            Ok(())
        }
    }

    fn install_1_0_2_android(&self, options: Vec<String>) -> Result<()> {
        let ctx = self.ctx;
        let android = ctx.android()?;
        let path = ctx.path_with(&android.toolchain_bin)?;
        let ndk_usr = android.ndk_sysroot.join("usr").display().to_string();

        let command = |program: &str| {
            ctx.command(program)
                .cwd(self.source_dir)
                .env("PATH", &path)
                .env("MACHINE", "arm7")
                .env("RELEASE", "2.6.37")
                .env("SYSTEM", "android")
                .env("ARCH", "arm")
                .env("ANDROID_DEV", &ndk_usr)
                .env("CC", &android.toolchain_cc)
                .env("AR", format!("{}ar", android.toolchain_prefix))
                .env("RANLIB", format!("{}ranlib", android.toolchain_prefix))
        };

        let mut args = vec!["Configure".to_string(), "shared".to_string()];
        args.extend(options);
        args.push("android".to_string());
        ctx.run(command("perl").args(args))?;

        // clang doesn't understand -mandroid.
        let makefile = self.source_dir.join("Makefile");
        let contents = fs::read_to_string(&makefile)?;
        fs::write_string(&makefile, &contents.replace("-mandroid", ""))?;

        let make = ctx.host_make();
        ctx.run(command(make).arg("depend"))?;
        ctx.run(command(make).args([
            "CALC_VERSIONS=\"SHLIB_COMPAT=; SHLIB_SOVER=\"",
            "build_libs",
            "build_apps",
        ]))?;
        ctx.run(command(make).arg("install_sw"))?;

        for lib in ["libcrypto", "libssl"] {
            // Only the shared library is wanted.
            let _ = std::fs::remove_file(ctx.target_lib_dir().join(format!("{}.a", lib)));

            // The installed library is a link to a versioned library that
            // doesn't exist.
            let lib_so = format!("{}.so", lib);
            let installed = ctx.target_lib_dir().join(&lib_so);
            let _ = std::fs::remove_file(&installed);
            ctx.copy_file(&self.source_dir.join(&lib_so), &installed)?;
        }

        Ok(())
    }

    fn install_1_0_2_macos(&self, options: Vec<String>) -> Result<()> {
        let ctx = self.ctx;

        let python = ctx.component_context("Python")?;
        if *python.version() <= (3, 6, 4) {
            let archive = ctx.get_archive_of(&python)?;
            let python_dir = ctx.unpack_archive(&archive)?;

            let pattern = python_dir
                .join("Mac")
                .join("BuildScript")
                .join("openssl*.patch");
            let patches: Vec<_> = glob::glob(&pattern.to_string_lossy())?
                .filter_map(Result::ok)
                .collect();

            if patches.len() > 1 {
                return Err(ctx
                    .error("found multiple OpenSSL patches in the Python source tree")
                    .into());
            }

            if let Some(patch) = patches.first() {
                ctx.run(
                    ctx.host_command("patch")
                        .cwd(self.source_dir)
                        .arg("-p1")
                        .arg("-i")
                        .arg(patch),
                )?;
            }

            fs::remove_dir_all_if_exists(&python_dir)?;
        }

        let sdk_env = format!("OSX_SDK={}", ctx.apple_sdk()?.path.display());

        let mut args = vec![
            "Configure".to_string(),
            "darwin64-x86_64-cc".to_string(),
            "enable-ec_nistp_64_gcc_128".to_string(),
        ];
        args.extend(options);
        self.run("perl", args)?;

        let make = ctx.host_make();
        for goal in ["depend", "all", "install_sw"] {
            self.run(make, [goal, sdk_env.as_str()])?;
        }

        Ok(())
    }

    fn install_1_0_2_win(&self, mut options: Vec<String>) -> Result<()> {
        let ctx = self.ctx;

        let (target, post_config) = if ctx.target().word_size() == 64 {
            ("VC-WIN64A", "ms\\do_win64a.bat")
        } else if options.iter().any(|o| o == "no-asm") {
            ("VC-WIN32", "ms\\do_ms.bat")
        } else {
            ("VC-WIN32", "ms\\do_nasm.bat")
        };

        // no-engine still tries to build the engines on Windows.
        options.retain(|o| o != "no-engine");

        let mut args = vec!["Configure".to_string(), target.to_string()];
        args.extend(options);
        self.run("perl", args)?;

        self.run(post_config, Vec::<String>::new())?;

        let make = ctx.host_make();
        self.run(make, ["-f", "ms\\nt.mak"])?;
        self.run(make, ["-f", "ms\\nt.mak", "install"])
    }
}

#[cfg(unix)]
fn symlink(original: &Path, link: &Path) -> Result<()> {
    use anyhow::Context;

    std::os::unix::fs::symlink(original, link)
        .with_context(|| format!("failed to create symbolic link {}", link.display()))
}

#[cfg(not(unix))]
fn symlink(original: &Path, link: &Path) -> Result<()> {
    let original = link.with_file_name(original);
    fs::copy_file(&original, link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_number() {
        let version = parse_version_number("# define OPENSSL_VERSION_NUMBER  0x1010107fL").unwrap();
        assert_eq!(version, VersionNumber::new(1, 1, 1));

        let version = parse_version_number("#define OPENSSL_VERSION_NUMBER 0x1000214fL").unwrap();
        assert_eq!(version, VersionNumber::new(1, 0, 2));

        assert!(parse_version_number("#define OPENSSL_VERSION_NUMBER unknown").is_none());
    }
}

//! The Qt toolkit.
//!
//! Qt is either built statically from source for the host platform or an
//! existing installation is used, found through its `qmake`.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::errors::DeployError;
use crate::core::option::{ComponentOption, OptionType};
use crate::core::platform::Platform;
use crate::core::version::VersionNumber;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext};
use crate::sysroot::Sysroot;

#[derive(Debug)]
pub struct Qt;

/// The host `qmake` used to build for the target.
///
/// An explicit `--qmake` wins. Otherwise it is the one built in the sysroot
/// or, for an existing installation, the one on PATH.
pub fn host_qmake(sysroot: &Sysroot) -> Result<PathBuf, DeployError> {
    if let Some(qmake) = sysroot.host_qmake_override() {
        return Ok(qmake.to_path_buf());
    }

    let qt = sysroot.get_component("Qt").ok_or_else(|| {
        DeployError::config("'Qt' must be specified as a component of the sysroot")
    })?;
    let ctx = sysroot.context(qt);

    if ctx.install_from_source() {
        Ok(ctx
            .sysroot_dir()
            .join("Qt")
            .join("bin")
            .join(ctx.host_exe("qmake")))
    } else {
        ctx.find_exe("qmake")
    }
}

/// Extract `QT_VERSION` from the output of `qmake -query`.
fn query_version(output: &str) -> Option<VersionNumber> {
    output
        .lines()
        .filter_map(|line| line.trim().split_once(':'))
        .find(|(name, _)| *name == "QT_VERSION")
        .and_then(|(_, version)| version.parse().ok())
}

impl Qt {
    fn verify_installed_version(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let qmake = host_qmake(ctx.sysroot)?;

        let output = crate::util::process::ProcessBuilder::new(&qmake)
            .arg("-query")
            .exec_with_stdout()?;

        let installed = query_version(&output).ok_or_else(|| {
            ctx.error(format!(
                "unable to determine Qt version number from {}",
                qmake.display()
            ))
        })?;

        ctx.check_installed_version(&installed)?;
        Ok(())
    }

    fn verify_platform(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let version = ctx.version();

        match ctx.target_platform() {
            Platform::Android => {
                let android = ctx.android()?;

                if android.api < 21 {
                    return Err(ctx.error("Android API level 21 or greater is required").into());
                }

                let ndk = android.ndk_version.major;
                if *version >= (5, 13, 2) || (*version >= (5, 12, 6) && *version <= (5, 13, 0)) {
                    if ndk != 20 && ndk != 21 {
                        return Err(ctx
                            .error(format!("v{} requires NDK r20 or r21", version))
                            .into());
                    }
                } else if ndk != 19 {
                    return Err(ctx.error(format!("v{} requires NDK r19", version)).into());
                }
            }
            Platform::Ios => {
                let sdk = &ctx.apple_sdk()?.version;

                if *version >= (5, 13) && *sdk < (13, 2) {
                    return Err(ctx
                        .error(format!(
                            "v{} requires iOS SDK v13.2 (Xcode 11) or later",
                            version
                        ))
                        .into());
                } else if *sdk < (12, 1) {
                    return Err(ctx
                        .error(format!(
                            "v{} requires iOS SDK v12.1 (Xcode 10) or later",
                            version
                        ))
                        .into());
                }
            }
            Platform::MacOs => {
                if ctx.apple_sdk()?.version < (10, 14) {
                    return Err(ctx
                        .error(format!(
                            "v{} requires macOS SDK v10.14 (Xcode 10) or later",
                            version
                        ))
                        .into());
                }
            }
            Platform::Linux | Platform::Windows => {}
        }

        Ok(())
    }
}

impl ComponentPlugin for Qt {
    fn options(&self) -> Vec<ComponentOption> {
        vec![
            ComponentOption::new("configure_options", OptionType::List).help(
                "The additional options to be passed to 'configure' when building from source.",
            ),
            ComponentOption::new("disabled_features", OptionType::List)
                .help("The features that are disabled when building from source."),
            ComponentOption::new("edition", OptionType::Str)
                .values(&["commercial", "opensource"])
                .help("The Qt edition being used when building from source."),
            ComponentOption::new("ssl", OptionType::Str)
                .values(&["openssl-linked", "openssl-runtime", "securetransport"])
                .help("Enable SSL support."),
            ComponentOption::new("skip", OptionType::List)
                .help("The Qt modules to skip when building from source."),
            ComponentOption::new("static_msvc_runtime", OptionType::Bool)
                .help("Set if the MSVC runtime should be statically linked."),
        ]
    }

    fn preinstalls(&self) -> &'static [&'static str] {
        &["OpenSSL", "zlib"]
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        Some(format!("qt-everywhere-src-{}.tar.xz", ctx.version()))
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        let version = ctx.version();
        Ok(vec![format!(
            "https://download.qt.io/archive/qt/{}.{}/{}/single/",
            version.major, version.minor, version
        )])
    }

    fn sdk_environment(&self, ctx: &ComponentContext<'_>) -> Vec<(String, String)> {
        let recent = *ctx.version() >= (5, 14);

        let (name, value) = match ctx.target_platform() {
            Platform::Ios => ("IPHONEOS_DEPLOYMENT_TARGET", if recent { "12.0" } else { "11.0" }),
            Platform::MacOs => ("MACOSX_DEPLOYMENT_TARGET", if recent { "10.13" } else { "10.12" }),
            _ => return Vec::new(),
        };

        if std::env::var_os(name).is_some() {
            Vec::new()
        } else {
            vec![(name.to_string(), value.to_string())]
        }
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let version = ctx.version();

        if *version >= 6 || *version < (5, 12) {
            return Err(ctx.unsupported(None).into());
        }
        if *version > (5, 15) {
            ctx.untested();
        }

        let openssl = if ctx.options().get_str("ssl") == "openssl-linked" {
            Some(ctx.get_component("OpenSSL")?)
        } else {
            None
        };

        if ctx.install_from_source() {
            if ctx.host_platform() != ctx.target_platform() {
                return Err(ctx.error("cross compiling Qt is not supported").into());
            }

            if ctx.options().get_str("edition").is_empty() {
                return Err(ctx
                    .error("the 'edition' option must be specified when building from source")
                    .into());
            }

            if let Some(openssl) = openssl {
                if *version >= (5, 15) && openssl.version != (1, 1, 1) {
                    return Err(ctx.error(format!("v{} requires OpenSSL v1.1.1", version)).into());
                }
            }
        } else {
            self.verify_installed_version(ctx)?;

            // The binary installers are built against a particular OpenSSL.
            if let Some(openssl) = openssl {
                let required: (u32, u32, u32) =
                    if *version >= (5, 12, 4) { (1, 1, 1) } else { (1, 0, 2) };

                if openssl.version != required {
                    return Err(ctx
                        .error(format!(
                            "v{} requires OpenSSL v{}.{}.{}",
                            version, required.0, required.1, required.2
                        ))
                        .into());
                }
            }
        }

        self.verify_platform(ctx)
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        if !ctx.install_from_source() {
            return Ok(());
        }

        let source_dir = ctx.unpack_source()?;
        let options = ctx.options();
        let windows = ctx.host_platform() == Platform::Windows;

        let configure = if windows { "configure.bat" } else { "./configure" };

        let mut args = vec![
            "-prefix".to_string(),
            ctx.sysroot_dir().join("Qt").display().to_string(),
            format!("-{}", options.get_str("edition")),
            "-confirm-license".to_string(),
            "-static".to_string(),
            "-release".to_string(),
            "-nomake".to_string(),
            "examples".to_string(),
            "-nomake".to_string(),
            "tools".to_string(),
            "-I".to_string(),
            ctx.target_include_dir().display().to_string(),
            "-L".to_string(),
            ctx.target_lib_dir().display().to_string(),
        ];

        if windows && options.get_bool("static_msvc_runtime") {
            args.push("-static-runtime".to_string());
        }

        match options.get_str("ssl") {
            "" => args.push("-no-ssl".to_string()),
            ssl => {
                args.push("-ssl".to_string());
                args.push(format!("-{}", ssl));

                if ssl == "openssl-linked" && windows {
                    let openssl = ctx.get_component("OpenSSL")?;
                    let libs = if openssl.version >= (1, 1) {
                        "-llibssl -llibcrypto"
                    } else {
                        "-lssleay32 -llibeay32"
                    };
                    args.push(format!(
                        "OPENSSL_LIBS={} -lws2_32 -lgdi32 -ladvapi32 -lcrypt32 -luser32",
                        libs
                    ));
                }
            }
        }

        args.extend(options.get_list("configure_options"));

        let disabled = options.get_list("disabled_features");
        for feature in &disabled {
            args.push(format!("-no-feature-{}", feature));
        }

        for module in options.get_list("skip") {
            args.push("-skip".to_string());
            args.push(module);
        }

        if windows {
            // These fail to build statically.
            args.push("-skip".to_string());
            args.push("qtimageformats".to_string());
        } else if ctx.host_platform() == Platform::Linux
            && *ctx.version() < (5, 15)
            && !disabled.iter().any(|f| f == "xcb")
        {
            args.push("-qt-xcb".to_string());
        }

        let command = |program: &str| {
            let command = ctx.command(program).cwd(&source_dir);
            if windows {
                let gnuwin32 = source_dir.join("gnuwin32").join("bin");
                match ctx.path_with(&gnuwin32) {
                    Ok(path) => command.env("PATH", path),
                    Err(_) => command,
                }
            } else {
                command
            }
        };

        ctx.run(command(configure).args(args))?;

        let make = ctx.host_make();
        ctx.run(command(make))?;
        ctx.run(command(make).arg("install"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_version() {
        let output = "QT_SYSROOT:\nQT_INSTALL_PREFIX:/opt/Qt/5.15.0/gcc_64\nQT_VERSION:5.15.0\n";
        assert_eq!(query_version(output), Some(VersionNumber::new(5, 15, 0)));
        assert_eq!(query_version("QT_SYSROOT:\n"), None);
    }
}

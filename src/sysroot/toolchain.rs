//! Verification of the target's toolchain environment.
//!
//! Apple targets need an SDK located with `xcrun`. Android targets need the
//! NDK and SDK named by environment variables. Windows targets need MSVC
//! configured for the right word size.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;

use crate::core::errors::DeployError;
use crate::core::platform::{msvc_target, Architecture, Platform};
use crate::core::version::VersionNumber;
use crate::util::fs;
use crate::util::process::ProcessBuilder;

/// The environment variables an Android target requires.
const ANDROID_ENV_VARS: [&str; 3] =
    ["ANDROID_NDK_ROOT", "ANDROID_NDK_PLATFORM", "ANDROID_SDK_ROOT"];

/// An Apple SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleSdk {
    pub path: PathBuf,
    pub version: VersionNumber,
}

/// The Android NDK and SDK being used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidToolchain {
    pub ndk_root: PathBuf,
    pub ndk_sysroot: PathBuf,
    pub ndk_version: VersionNumber,
    pub sdk_version: VersionNumber,
    pub api: u32,
    /// The directory containing the clang drivers.
    pub toolchain_bin: PathBuf,
    /// The name of the C compiler, e.g. `aarch64-linux-android21-clang`.
    pub toolchain_cc: String,
    pub toolchain_prefix: String,
}

/// What was discovered while verifying the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetEnvironment {
    pub apple_sdk: Option<AppleSdk>,
    pub android: Option<AndroidToolchain>,
}

/// Verify the toolchain for a target architecture.
pub fn verify_target(target: Architecture) -> Result<TargetEnvironment> {
    let mut environment = TargetEnvironment::default();

    match target.platform() {
        Platform::Ios => environment.apple_sdk = Some(apple_sdk("iphoneos", "iPhoneOS")?),
        Platform::MacOs => environment.apple_sdk = Some(apple_sdk("macosx", "MacOSX")?),
        Platform::Android => {
            environment.android = Some(verify_android(target, |name| std::env::var(name).ok())?)
        }
        Platform::Windows => {
            let word_size = target.word_size().to_string();
            if msvc_target(false)? != Some(word_size.as_str()) {
                return Err(DeployError::config(format!(
                    "MSVC is not configured for a {}-bit target",
                    word_size
                ))
                .into());
            }
        }
        Platform::Linux => {}
    }

    Ok(environment)
}

fn apple_sdk(sdk_name: &str, sdk_prefix: &str) -> Result<AppleSdk> {
    let path = ProcessBuilder::new("xcrun")
        .args(["--sdk", sdk_name, "--show-sdk-path"])
        .exec_with_stdout()?
        .trim()
        .to_string();

    if path.is_empty() {
        return Err(
            DeployError::config(format!("a valid '{}' SDK could not be found", sdk_name)).into(),
        );
    }

    let path = PathBuf::from(path);
    Ok(AppleSdk {
        version: apple_sdk_version(&path, sdk_prefix)?,
        path,
    })
}

/// Parse the version from an SDK directory name such as `MacOSX10.15.sdk`.
fn apple_sdk_version(path: &Path, sdk_prefix: &str) -> Result<VersionNumber, DeployError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = name.strip_prefix(sdk_prefix).unwrap_or(&name);
    let name = name.strip_suffix(".sdk").unwrap_or(name);

    name.parse()
}

/// Verify the Android NDK and SDK, reading variables through `env`.
pub fn verify_android(
    target: Architecture,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AndroidToolchain> {
    for name in ANDROID_ENV_VARS {
        if env(name).is_none() {
            return Err(DeployError::config(format!(
                "the {} environment variable must be set",
                name
            ))
            .into());
        }
    }

    let ndk_root = PathBuf::from(env("ANDROID_NDK_ROOT").unwrap_or_default());
    let ndk_platform = env("ANDROID_NDK_PLATFORM").unwrap_or_default();
    let sdk_root = PathBuf::from(env("ANDROID_SDK_ROOT").unwrap_or_default());

    let ndk_sysroot = ndk_root.join("sysroot");
    check_ndk_exists(&ndk_sysroot)?;

    let ndk_version = package_revision(&ndk_root.join("source.properties"))?
        .ok_or_else(|| DeployError::config("unable to determine the NDK revision"))?;

    // The compiler is assumed to be a working clang.
    if ndk_version.major < 19 {
        return Err(DeployError::config("NDK r19 or later is required").into());
    }
    if ndk_version.major > 21 {
        warn!("versions of the NDK later than r21 are untested");
    }

    let sdk_properties = sdk_root.join("tools").join("source.properties");
    if !sdk_properties.exists() {
        return Err(DeployError::config(format!(
            "'{}' does not exist, make sure ANDROID_SDK_ROOT is set correctly",
            sdk_properties.display()
        ))
        .into());
    }

    let sdk_version = package_revision(&sdk_properties)?
        .ok_or_else(|| DeployError::config("unable to determine the SDK version number"))?;

    let tested = VersionNumber::new(26, 1, 1);
    if sdk_version < tested {
        warn!("versions of the SDK earlier than v26.1.1 are untested");
    } else if sdk_version > tested {
        warn!("versions of the SDK later than v26.1.1 are untested");
    }

    if !ndk_root.join("platforms").join(&ndk_platform).is_dir() {
        return Err(DeployError::config(format!(
            "NDK r{} does not support {}",
            ndk_version.major, ndk_platform
        ))
        .into());
    }

    let api = ndk_platform
        .strip_prefix("android-")
        .and_then(|api| api.parse::<u32>().ok())
        .ok_or_else(|| {
            DeployError::config(
                "unable to determine the API level from the ANDROID_NDK_PLATFORM \
                 environment variable",
            )
        })?;

    let host = if cfg!(target_os = "macos") { "darwin" } else { "linux" };
    let toolchain_bin = ndk_root
        .join("toolchains")
        .join("llvm")
        .join("prebuilt")
        .join(format!("{}-x86_64", host))
        .join("bin");
    check_ndk_exists(&toolchain_bin)?;

    let toolchain_cc =
        format!("{}{}-clang", target.android_clang_prefix().unwrap_or_default(), api);
    check_ndk_exists(&toolchain_bin.join(&toolchain_cc))?;

    Ok(AndroidToolchain {
        ndk_root,
        ndk_sysroot,
        ndk_version,
        sdk_version,
        api,
        toolchain_bin,
        toolchain_cc,
        toolchain_prefix: target.android_toolchain_prefix().unwrap_or_default().to_string(),
    })
}

fn check_ndk_exists(path: &Path) -> Result<(), DeployError> {
    if path.exists() {
        Ok(())
    } else {
        Err(DeployError::config(format!(
            "'{}' does not exist, make sure ANDROID_NDK_ROOT and ANDROID_NDK_PLATFORM are set \
             correctly",
            path.display()
        )))
    }
}

/// Read `Pkg.Revision` from a `source.properties` file.
fn package_revision(path: &Path) -> Result<Option<VersionNumber>> {
    if !path.is_file() {
        return Ok(None);
    }

    for line in fs::read_to_string(path)?.lines() {
        let line = line.replace(' ', "");
        if let Some(("Pkg.Revision", revision)) = line.split_once('=') {
            return Ok(Some(revision.parse()?));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    struct FakeAndroid {
        _tmp: TempDir,
        vars: HashMap<&'static str, String>,
    }

    impl FakeAndroid {
        fn new(ndk_revision: &str) -> Self {
            let tmp = TempDir::new().unwrap();
            let ndk = tmp.path().join("ndk");
            let sdk = tmp.path().join("sdk");

            std::fs::create_dir_all(ndk.join("sysroot")).unwrap();
            std::fs::create_dir_all(ndk.join("platforms/android-24")).unwrap();
            std::fs::write(
                ndk.join("source.properties"),
                format!("Pkg.Desc = Android NDK\nPkg.Revision = {}\n", ndk_revision),
            )
            .unwrap();

            let host = if cfg!(target_os = "macos") { "darwin" } else { "linux" };
            let bin = ndk.join(format!("toolchains/llvm/prebuilt/{}-x86_64/bin", host));
            std::fs::create_dir_all(&bin).unwrap();
            std::fs::write(bin.join("aarch64-linux-android24-clang"), b"").unwrap();

            std::fs::create_dir_all(sdk.join("tools")).unwrap();
            std::fs::write(sdk.join("tools/source.properties"), "Pkg.Revision=26.1.1\n").unwrap();

            let mut vars = HashMap::new();
            vars.insert("ANDROID_NDK_ROOT", ndk.display().to_string());
            vars.insert("ANDROID_NDK_PLATFORM", "android-24".to_string());
            vars.insert("ANDROID_SDK_ROOT", sdk.display().to_string());

            FakeAndroid { _tmp: tmp, vars }
        }

        fn verify(&self) -> Result<AndroidToolchain> {
            verify_android(Architecture::Android64, |name| self.vars.get(name).cloned())
        }
    }

    #[test]
    fn test_android_toolchain() {
        let android = FakeAndroid::new("21.3.6528147");
        let toolchain = android.verify().unwrap();

        assert_eq!(toolchain.api, 24);
        assert_eq!(toolchain.ndk_version.major, 21);
        assert_eq!(toolchain.toolchain_cc, "aarch64-linux-android24-clang");
        assert_eq!(toolchain.toolchain_prefix, "aarch64-linux-android-");
    }

    #[test]
    fn test_android_requires_env_vars() {
        let mut android = FakeAndroid::new("21.3.6528147");
        android.vars.remove("ANDROID_SDK_ROOT");

        let err = android.verify().unwrap_err();
        assert_eq!(
            err.to_string(),
            "the ANDROID_SDK_ROOT environment variable must be set"
        );
    }

    #[test]
    fn test_android_requires_r19() {
        let android = FakeAndroid::new("18.1.5063045");
        assert_eq!(android.verify().unwrap_err().to_string(), "NDK r19 or later is required");
    }

    #[test]
    fn test_android_unknown_platform() {
        let mut android = FakeAndroid::new("20.1.5948944");
        android
            .vars
            .insert("ANDROID_NDK_PLATFORM", "android-99".to_string());

        assert_eq!(
            android.verify().unwrap_err().to_string(),
            "NDK r20 does not support android-99"
        );
    }

    #[test]
    fn test_apple_sdk_version() {
        let version = apple_sdk_version(
            Path::new("/Applications/Xcode.app/SDKs/MacOSX10.15.sdk"),
            "MacOSX",
        )
        .unwrap();
        assert_eq!(version, VersionNumber::new(10, 15, 0));
    }
}

//! Supported platforms and architectures.
//!
//! The set is closed: five platforms, each with one or two architectures.
//! An architecture name is `<platform>-<word size>`.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::core::errors::DeployError;

/// A target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Android,
    Ios,
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Android,
        Platform::Ios,
        Platform::Linux,
        Platform::MacOs,
        Platform::Windows,
    ];

    /// The short name used in scopes and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "win",
        }
    }

    /// The name shown to users.
    pub fn full_name(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
        }
    }

    /// The architectures of the platform, the default one first.
    pub fn architectures(&self) -> &'static [Architecture] {
        match self {
            Platform::Android => &[Architecture::Android32, Architecture::Android64],
            Platform::Ios => &[Architecture::Ios64],
            Platform::Linux => &[Architecture::Linux32, Architecture::Linux64],
            Platform::MacOs => &[Architecture::MacOs64],
            Platform::Windows => &[Architecture::Win32, Architecture::Win64],
        }
    }

    /// The name of the make program.
    pub fn make(&self) -> &'static str {
        match self {
            Platform::Windows => "nmake",
            _ => "make",
        }
    }

    /// Convert a generic executable name to the platform's form.
    pub fn exe(&self, name: &str) -> String {
        if *self == Platform::Windows && !name.ends_with(".exe") {
            format!("{}.exe", name)
        } else {
            name.to_string()
        }
    }

    /// True for the Apple platforms, which are verified with `xcrun`.
    pub fn is_apple(&self) -> bool {
        matches!(self, Platform::Ios | Platform::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| DeployError::config(format!("'{}' is not a supported platform", s)))
    }
}

/// A target architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Architecture {
    Android32,
    Android64,
    Ios64,
    Linux32,
    Linux64,
    MacOs64,
    Win32,
    Win64,
}

impl Architecture {
    pub const ALL: [Architecture; 8] = [
        Architecture::Android32,
        Architecture::Android64,
        Architecture::Ios64,
        Architecture::Linux32,
        Architecture::Linux64,
        Architecture::MacOs64,
        Architecture::Win32,
        Architecture::Win64,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Architecture::Android32 => "android-32",
            Architecture::Android64 => "android-64",
            Architecture::Ios64 => "ios-64",
            Architecture::Linux32 => "linux-32",
            Architecture::Linux64 => "linux-64",
            Architecture::MacOs64 => "macos-64",
            Architecture::Win32 => "win-32",
            Architecture::Win64 => "win-64",
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Architecture::Android32 | Architecture::Android64 => Platform::Android,
            Architecture::Ios64 => Platform::Ios,
            Architecture::Linux32 | Architecture::Linux64 => Platform::Linux,
            Architecture::MacOs64 => Platform::MacOs,
            Architecture::Win32 | Architecture::Win64 => Platform::Windows,
        }
    }

    /// The word size in bits.
    pub fn word_size(&self) -> u32 {
        match self {
            Architecture::Android32 | Architecture::Linux32 | Architecture::Win32 => 32,
            _ => 64,
        }
    }

    /// The ABI name qmake uses for an Android architecture.
    pub fn android_abi(&self) -> Option<&'static str> {
        match self {
            Architecture::Android32 => Some("armeabi-v7a"),
            Architecture::Android64 => Some("arm64-v8a"),
            _ => None,
        }
    }

    /// The prefix of the NDK's clang driver for an Android architecture.
    pub fn android_clang_prefix(&self) -> Option<&'static str> {
        match self {
            Architecture::Android32 => Some("armv7a-linux-androideabi"),
            Architecture::Android64 => Some("aarch64-linux-android"),
            _ => None,
        }
    }

    /// The prefix of the NDK's binutils for an Android architecture.
    pub fn android_toolchain_prefix(&self) -> Option<&'static str> {
        match self {
            Architecture::Android32 => Some("arm-linux-androideabi-"),
            Architecture::Android64 => Some("aarch64-linux-android-"),
            _ => None,
        }
    }

    /// Detect the architecture of the machine we are running on.
    ///
    /// On Windows an MSVC environment decides the word size when present.
    pub fn host() -> Result<Self, DeployError> {
        let word_size = if cfg!(target_pointer_width = "64") {
            "64"
        } else {
            "32"
        };

        let name = match std::env::consts::OS {
            "linux" => format!("linux-{}", word_size),
            "macos" => format!("macos-{}", word_size),
            "windows" => {
                let size = msvc_target(true)?.unwrap_or(word_size);
                format!("win-{}", size)
            }
            other => {
                return Err(DeployError::config(format!(
                    "'{}' is not a supported host platform",
                    other
                )))
            }
        };

        name.parse()
    }

    /// Return the architecture named on the command line, or the host.
    pub fn from_name_or_host(name: Option<&str>) -> Result<Self, DeployError> {
        match name {
            Some(name) => name.parse(),
            None => Architecture::host(),
        }
    }

    /// Check if this architecture can be used to build for `target`.
    pub fn can_host(&self, target: Architecture) -> bool {
        if *self == target {
            return true;
        }

        match (self, target.platform()) {
            (Architecture::Linux64, Platform::Android) => true,
            (Architecture::MacOs64, Platform::Android | Platform::Ios) => true,
            (Architecture::Win32 | Architecture::Win64, Platform::Android) => {
                warn!("using Windows to host Android deployment is untested");
                true
            }
            _ => false,
        }
    }

    /// Fail unless this architecture can host `target`.
    pub fn verify_as_host(&self, target: Architecture) -> Result<(), DeployError> {
        if self.can_host(target) {
            Ok(())
        } else {
            Err(DeployError::config(format!(
                "{} is not a supported {} development host",
                self, target
            )))
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Architecture {
    type Err = DeployError;

    /// A platform name selects that platform's default architecture.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(arch) = Architecture::ALL.into_iter().find(|a| a.name() == s) {
            return Ok(arch);
        }

        Platform::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .map(|p| p.architectures()[0])
            .ok_or_else(|| DeployError::config(format!("'{}' is not a supported architecture", s)))
    }
}

/// The word size targeted by the configured MSVC, if any.
///
/// MSVC 2015 is v14 and reports through `Platform`. 2017 and 2019 are v15 and
/// v16 and report through `VSCMD_ARG_TGT_ARCH`.
pub fn msvc_target(optional: bool) -> Result<Option<&'static str>, DeployError> {
    let vs_version = std::env::var("VisualStudioVersion").unwrap_or_else(|_| "0.0".to_string());
    let vs_major = vs_version.split('.').next().unwrap_or("0");

    let is_32 = match vs_major {
        "0" if optional => return Ok(None),
        "0" => return Err(DeployError::config("unable to detect any MSVC compiler")),
        "14" => std::env::var("Platform").ok().as_deref() != Some("X64"),
        "15" | "16" => std::env::var("VSCMD_ARG_TGT_ARCH").ok().as_deref() != Some("x64"),
        _ if optional => return Ok(None),
        _ => {
            return Err(DeployError::config(format!(
                "MSVC v{} is unsupported",
                vs_version
            )))
        }
    };

    Ok(Some(if is_32 { "32" } else { "64" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_architecture() {
        assert_eq!("linux-64".parse::<Architecture>().unwrap(), Architecture::Linux64);
        assert_eq!("android".parse::<Architecture>().unwrap(), Architecture::Android32);

        let err = "beos-64".parse::<Architecture>().unwrap_err();
        assert_eq!(err.to_string(), "'beos-64' is not a supported architecture");
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!("win".parse::<Platform>().unwrap(), Platform::Windows);
        assert!("windows".parse::<Platform>().is_err());
    }

    #[test]
    fn test_architecture_platform_and_word_size() {
        assert_eq!(Architecture::Win32.platform(), Platform::Windows);
        assert_eq!(Architecture::Win32.word_size(), 32);
        assert_eq!(Architecture::Ios64.word_size(), 64);
        assert_eq!(Architecture::Android64.android_abi(), Some("arm64-v8a"));
    }

    #[test]
    fn test_can_host() {
        assert!(Architecture::Linux64.can_host(Architecture::Linux64));
        assert!(Architecture::Linux64.can_host(Architecture::Android64));
        assert!(Architecture::MacOs64.can_host(Architecture::Ios64));
        assert!(Architecture::Win64.can_host(Architecture::Android32));
        assert!(!Architecture::Linux32.can_host(Architecture::Android32));
        assert!(!Architecture::Linux64.can_host(Architecture::Ios64));
        assert!(!Architecture::Ios64.can_host(Architecture::MacOs64));
    }

    #[test]
    fn test_verify_as_host_message() {
        let err = Architecture::Linux64
            .verify_as_host(Architecture::Ios64)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "linux-64 is not a supported ios-64 development host"
        );
    }

    #[test]
    fn test_make_and_exe() {
        assert_eq!(Platform::Windows.make(), "nmake");
        assert_eq!(Platform::Linux.make(), "make");
        assert_eq!(Platform::Windows.exe("python"), "python.exe");
        assert_eq!(Platform::Windows.exe("python.exe"), "python.exe");
        assert_eq!(Platform::MacOs.exe("python"), "python");
    }
}

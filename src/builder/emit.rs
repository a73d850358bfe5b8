//! Translating parts to build configuration.
//!
//! Each selected part contributes a [`Fragment`]: the values it adds to the
//! qmake variables of the application's `.pro` file. Values are not
//! deduplicated here.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::errors::DeployError;
use crate::core::part::{PartKind, ResolvedPart};
use crate::core::platform::Platform;
use crate::sysroot::component::ComponentContext;
use crate::util::fs::to_slash;

/// What one part adds to the build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// The module to add to the interpreter's table of built-in modules.
    pub inittab: Option<String>,
    pub defines: Vec<String>,
    pub libs: Vec<String>,
    pub includepath: Vec<String>,
    pub sources: Vec<String>,
    pub qmake_config: Vec<String>,
    pub qmake_qt: Vec<String>,
    pub qmake_cpp11: bool,
    /// Shared libraries that must be packaged with an Android application.
    pub bundled_libs: Vec<String>,
    /// Files in the `DLLs` directory of an existing Windows installation
    /// that must be copied next to the application.
    pub windows_dlls: Vec<String>,
}

/// A path provided by a component as an absolute path with `/` separators.
fn src_path(ctx: &ComponentContext<'_>, value: &str) -> Result<String> {
    Ok(to_slash(&ctx.target_src_path(value)?))
}

/// The fragment for a part provided by the component of `ctx`.
///
/// Extension modules are only compiled into the application if the target
/// interpreter was built from source. Otherwise, on Windows, the module's
/// `.pyd` and DLLs are copied from the installation.
pub fn emit(
    part: &ResolvedPart,
    ctx: &ComponentContext<'_>,
    python_from_source: bool,
) -> Result<Fragment> {
    let mut fragment = Fragment::default();

    // Core parts are part of the interpreter library.
    if part.core {
        return Ok(fragment);
    }

    let compiled = match &part.kind {
        PartKind::ExtensionModule {
            compiled,
            source,
            qmake_config,
            qmake_cpp11,
            qmake_qt,
            pyd,
            dlls,
        } => {
            if python_from_source {
                fragment.inittab = Some(part.name.name.clone());

                for value in source {
                    fragment.sources.push(src_path(ctx, value)?);
                }

                fragment.qmake_config.extend(qmake_config.iter().cloned());
                fragment.qmake_qt.extend(qmake_qt.iter().cloned());
                fragment.qmake_cpp11 = *qmake_cpp11;
            } else if let (Platform::Windows, Some(pyd)) = (ctx.target_platform(), pyd) {
                fragment.windows_dlls.push(pyd.clone());
                fragment.windows_dlls.extend(dlls.iter().cloned());
            }
            compiled
        }
        PartKind::Library {
            compiled,
            bundle_shared_libs,
        } => {
            if *bundle_shared_libs {
                fragment.bundled_libs.extend(compiled.libs.iter().cloned());
            }
            compiled
        }
        _ => return Ok(fragment),
    };

    fragment.defines.extend(compiled.defines.iter().cloned());

    for value in &compiled.libs {
        match value.strip_prefix("-L") {
            Some(dir) => fragment.libs.push(format!("-L{}", src_path(ctx, dir)?)),
            None => fragment.libs.push(value.clone()),
        }
    }

    for value in &compiled.includepath {
        fragment.includepath.push(src_path(ctx, value)?);
    }

    Ok(fragment)
}

/// Find the shared libraries named by `-l` flags in the directory of the
/// last `-L` flag (the sysroot's `lib` directory by default).
pub fn bundled_shared_libs(
    libs: &[String],
    sysroot_dir: &Path,
    lib_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut dir = lib_dir.to_path_buf();
    let mut names = Vec::new();

    for value in libs {
        if let Some(path) = value.strip_prefix("-L") {
            dir = sysroot_dir.join(path);
        } else if let Some(name) = value.strip_prefix("-l") {
            names.push(format!("lib{}.so", name));
        }
    }

    let mut found = Vec::new();

    for name in names {
        let path = dir.join(&name);
        let path = std::fs::canonicalize(&path).map_err(|_| {
            DeployError::config(format!(
                "bundled shared library '{}' does not exist",
                path.display()
            ))
        })?;

        if !path.is_file() {
            return Err(DeployError::config(format!(
                "bundled shared library '{}' does not exist",
                path.display()
            ))
            .into());
        }

        found.push(path);
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::part::{Part, PartName};
    use crate::core::platform::Architecture;
    use crate::core::version::VersionNumber;
    use crate::sysroot::specification::Specification;
    use crate::sysroot::Sysroot;
    use crate::test_support::fake_registry;
    use tempfile::TempDir;

    fn resolve(component: &str, name: &str, part: Part) -> ResolvedPart {
        let version = VersionNumber::new(1, 2, 11);
        Part::normalise(component, name, &[part], &version, Architecture::Linux64)
            .unwrap()
            .unwrap()
            .part
    }

    fn sysroot_for(target: Architecture) -> Sysroot {
        let spec = Specification::parse(
            Path::new("/work/sysroot.toml"),
            "[zlib]\nversion = '1.2.11'\n",
            &fake_registry(),
        )
        .unwrap();
        Sysroot::new(&spec, Architecture::Linux64, target, None).unwrap()
    }

    fn sysroot() -> Sysroot {
        sysroot_for(Architecture::Linux64)
    }

    #[test]
    fn test_extension_module() {
        let sysroot = sysroot();
        let zlib = sysroot.context(sysroot.get_component("zlib").unwrap());
        let part = resolve(
            "zlib",
            "zlib",
            Part::extension_module()
                .source(&["zlibmodule.c", "win#winonly.c"])
                .defines(&["USE_ZLIB"])
                .libs(&["-Llib", "-lz"])
                .includepath(&["include"])
                .qmake_qt(&["network"]),
        );

        let fragment = emit(&part, &zlib, true).unwrap();
        assert_eq!(fragment.inittab.as_deref(), Some("zlib"));
        assert_eq!(fragment.sources, ["/work/sysroot-linux-64/src/zlibmodule.c"]);
        assert_eq!(fragment.defines, ["USE_ZLIB"]);
        assert_eq!(fragment.libs, ["-L/work/sysroot-linux-64/src/lib", "-lz"]);
        assert_eq!(fragment.includepath, ["/work/sysroot-linux-64/src/include"]);
        assert_eq!(fragment.qmake_qt, ["network"]);

        // An existing interpreter can't have modules compiled in.
        let fragment = emit(&part, &zlib, false).unwrap();
        assert_eq!(fragment.inittab, None);
        assert!(fragment.sources.is_empty());
        assert_eq!(fragment.defines, ["USE_ZLIB"]);
    }

    #[test]
    fn test_windows_dlls_of_existing_installation() {
        let part = resolve(
            "zlib",
            "_ssl",
            Part::extension_module()
                .source(&["_ssl.c"])
                .pyd("_ssl.pyd")
                .dlls(&["libcrypto-1_1.dll", "libssl-1_1.dll"]),
        );

        let sysroot = sysroot_for(Architecture::Win64);
        let zlib = sysroot.context(sysroot.get_component("zlib").unwrap());

        let fragment = emit(&part, &zlib, false).unwrap();
        assert_eq!(fragment.inittab, None);
        assert_eq!(
            fragment.windows_dlls,
            ["_ssl.pyd", "libcrypto-1_1.dll", "libssl-1_1.dll"]
        );

        // A compiled in module needs no DLLs.
        assert!(emit(&part, &zlib, true).unwrap().windows_dlls.is_empty());

        let sysroot = self::sysroot();
        let zlib = sysroot.context(sysroot.get_component("zlib").unwrap());
        assert!(emit(&part, &zlib, false).unwrap().windows_dlls.is_empty());
    }

    #[test]
    fn test_core_and_python_parts_add_nothing() {
        let sysroot = sysroot();
        let zlib = sysroot.context(sysroot.get_component("zlib").unwrap());

        let core = resolve("zlib", "core", Part::extension_module().core().libs(&["-lcore"]));
        assert_eq!(emit(&core, &zlib, true).unwrap(), Fragment::default());

        let module = resolve("zlib", "gzip", Part::python_module());
        assert_eq!(emit(&module, &zlib, true).unwrap(), Fragment::default());
        assert_eq!(module.name, PartName::new("zlib", "gzip"));
    }

    #[test]
    fn test_bundled_shared_libs() {
        let tmp = TempDir::new().unwrap();
        let lib_dir = tmp.path().join("lib");
        std::fs::create_dir_all(&lib_dir).unwrap();
        std::fs::write(lib_dir.join("libssl.so"), "").unwrap();

        let found = bundled_shared_libs(&["-lssl".to_string()], tmp.path(), &lib_dir).unwrap();
        assert_eq!(found, [std::fs::canonicalize(lib_dir.join("libssl.so")).unwrap()]);

        let err = bundled_shared_libs(&["-lcrypto".to_string()], tmp.path(), &lib_dir).unwrap_err();
        assert!(err.to_string().starts_with("bundled shared library"));
    }
}

//! The generated C++ that starts the interpreter.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::builder::project::Startup;
use crate::core::errors::DeployError;
use crate::core::platform::Platform;
use crate::core::version::VersionNumber;

/// The contents of `pydeploy_version.h`.
pub fn version_header() -> Result<String> {
    let version: VersionNumber = env!("CARGO_PKG_VERSION").parse()?;
    Ok(format!("#define PYDEPLOY_HEXVERSION {:#08x}\n", version.to_hex()))
}

/// Find the bootstrap script for the newest Python version not later than
/// `python`. Scripts are named `<name>-<version>.py`.
pub fn find_bootstrap(dir: &Path, python: &VersionNumber) -> Result<PathBuf> {
    let mut best: Option<(VersionNumber, PathBuf)> = None;

    let entries =
        std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        let tail = file_name.rsplit('-').next().unwrap_or_default();
        let Ok(version) = tail.strip_suffix(".py").unwrap_or(tail).parse::<VersionNumber>() else {
            continue;
        };

        if version > *python {
            continue;
        }

        if best.as_ref().map_or(true, |(best, _)| *best < version) {
            best = Some((version, path));
        }
    }

    best.map(|(_, path)| path).ok_or_else(|| {
        DeployError::config(format!(
            "'{}' has no bootstrap script for Python v{}",
            dir.display(),
            python
        ))
        .into()
    })
}

fn write_inittab(out: &mut String, inittab: &BTreeSet<String>) {
    let base_name = |name: &str| name.rsplit('.').next().unwrap_or(name).to_string();

    for name in inittab {
        out.push_str(&format!(
            "extern \"C\" PyObject *PyInit_{}(void);\n",
            base_name(name)
        ));
    }

    out.push_str("\nstatic struct _inittab extension_modules[] = {\n");
    for name in inittab {
        out.push_str(&format!(
            "    {{\"{}\", PyInit_{}}},\n",
            name,
            base_name(name)
        ));
    }
    out.push_str("    {NULL, NULL}\n};\n");
}

/// The contents of `pydeploy_main.cpp`.
pub fn main_cpp(
    inittab: &BTreeSet<String>,
    defines: &BTreeSet<String>,
    syspath: &str,
    startup: &Startup,
    platform: Platform,
) -> Result<String, DeployError> {
    let mut out = String::new();

    // GCC 5 fails when both Py_BUILD_CORE and HAVE_STD_ATOMIC are defined.
    if defines.contains("Py_BUILD_CORE") {
        out.push_str(
            "// Py_BUILD_CORE/HAVE_STD_ATOMIC conflict workaround.\n\
             #include <pyconfig.h>\n#undef HAVE_STD_ATOMIC\n\n",
        );
    }

    out.push_str("#include <Python.h>\n\n\n");

    let c_inittab = if inittab.is_empty() {
        "NULL"
    } else {
        write_inittab(&mut out, inittab);
        "extension_modules"
    };

    let dirs = shlex::split(syspath).ok_or_else(|| {
        DeployError::config(format!("the sys.path '{}' is not valid", syspath))
    })?;
    let path_dirs = if dirs.is_empty() {
        "NULL"
    } else {
        out.push_str("static const char *path_dirs[] = {\n");
        for dir in &dirs {
            out.push_str(&format!("    \"{}\",\n", dir.replace('"', "\\\"")));
        }
        out.push_str("    NULL\n};\n\n");
        "path_dirs"
    };

    let (main_module, entry_point) = match startup {
        Startup::Script(_) => ("__main__".to_string(), "NULL".to_string()),
        Startup::EntryPoint { module, callable } => (module.clone(), format!("\"{}\"", callable)),
    };

    let args = format!("{}, \"{}\", {}, {}", c_inittab, main_module, entry_point, path_dirs);

    if platform == Platform::Windows {
        out.push_str(&format!(
            r#"

#include <windows.h>

extern int pydeploy_start(int argc, wchar_t **w_argv,
        struct _inittab *extension_modules, const char *main_module,
        const char *entry_point, const char **path_dirs);

int main(int argc, char **)
{{
    LPWSTR *w_argv = CommandLineToArgvW(GetCommandLineW(), &argc);

    return pydeploy_start(argc, w_argv, {});
}}
"#,
            args
        ));
    } else {
        out.push_str(&format!(
            r#"

extern int pydeploy_start(int argc, char **argv,
        struct _inittab *extension_modules, const char *main_module,
        const char *entry_point, const char **path_dirs);

int main(int argc, char **argv)
{{
    return pydeploy_start(argc, argv, {});
}}
"#,
            args
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_version_header() {
        let header = version_header().unwrap();
        assert!(header.starts_with("#define PYDEPLOY_HEXVERSION 0x"));
    }

    #[test]
    fn test_find_bootstrap() {
        let tmp = TempDir::new().unwrap();
        for name in ["bootstrap-3.5.py", "bootstrap-3.7.py", "bootstrap-3.8.py", "README"] {
            std::fs::write(tmp.path().join(name), "").unwrap();
        }

        let found = find_bootstrap(tmp.path(), &VersionNumber::new(3, 7, 8)).unwrap();
        assert_eq!(found, tmp.path().join("bootstrap-3.7.py"));

        let found = find_bootstrap(tmp.path(), &VersionNumber::new(3, 6, 0)).unwrap();
        assert_eq!(found, tmp.path().join("bootstrap-3.5.py"));

        assert!(find_bootstrap(tmp.path(), &VersionNumber::new(3, 4, 10)).is_err());
    }

    #[test]
    fn test_syspath_is_split_like_a_shell() {
        let startup = Startup::Script("demo.py".to_string());
        let main = main_cpp(
            &set(&[]),
            &set(&[]),
            "lib 'my dir' \"a \\\"b\\\"\" c\\ d",
            &startup,
            Platform::Linux,
        )
        .unwrap();
        assert!(main.contains(
            "    \"lib\",\n    \"my dir\",\n    \"a \\\"b\\\"\",\n    \"c d\",\n    NULL\n"
        ));

        let err = main_cpp(&set(&[]), &set(&[]), "'open", &startup, Platform::Linux).unwrap_err();
        assert_eq!(err.to_string(), "the sys.path ''open' is not valid");
    }

    #[test]
    fn test_script_main() {
        let main = main_cpp(
            &set(&["PyQt5.QtCore", "zlib"]),
            &set(&[]),
            "",
            &Startup::Script("demo.py".to_string()),
            Platform::Linux,
        )
        .unwrap();

        assert!(main.starts_with("#include <Python.h>\n"));
        assert!(main.contains(
            "extern \"C\" PyObject *PyInit_QtCore(void);\n\
             extern \"C\" PyObject *PyInit_zlib(void);\n"
        ));
        assert!(main.contains(
            "    {\"PyQt5.QtCore\", PyInit_QtCore},\n    \
             {\"zlib\", PyInit_zlib},\n    {NULL, NULL}\n"
        ));
        assert!(main.contains(
            "return pydeploy_start(argc, argv, extension_modules, \"__main__\", NULL, NULL);"
        ));
        assert!(!main.contains("path_dirs[]"));
    }

    #[test]
    fn test_entry_point_main_on_windows() {
        let startup = Startup::EntryPoint {
            module: "app.main".to_string(),
            callable: "run".to_string(),
        };
        let main = main_cpp(
            &set(&[]),
            &set(&["Py_BUILD_CORE"]),
            "lib 'site packages'",
            &startup,
            Platform::Windows,
        )
        .unwrap();

        assert!(main.starts_with("// Py_BUILD_CORE/HAVE_STD_ATOMIC conflict workaround.\n"));
        assert!(main.contains(
            "static const char *path_dirs[] = {\n    \"lib\",\n    \
             \"site packages\",\n    NULL\n};\n"
        ));
        assert!(main.contains("CommandLineToArgvW"));
        assert!(main.contains(
            "return pydeploy_start(argc, w_argv, NULL, \"app.main\", \"run\", path_dirs);"
        ));
    }
}

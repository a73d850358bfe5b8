//! Build files for a static interpreter library.
//!
//! The target interpreter is built with qmake rather than Python's own build
//! system so that the same toolchain configuration is used as for the
//! application. `config.c` lists the extension modules compiled into the
//! library and `python.pro` describes how to build and install it.


use crate::core::errors::DeployError;
use crate::core::part::{Part, PartKind};
use crate::core::platform::{Architecture, Platform};
use crate::core::scope::resolve_all;
use crate::core::version::VersionNumber;
use crate::plugins::python::stdlib::{core_module_init, core_module_sources, standard_library};

/// The core extension modules of a version of Python for a target.
pub fn core_extension_modules(
    version: &VersionNumber,
    target: Architecture,
) -> Result<Vec<String>, DeployError> {
    let mut modules = Vec::new();

    for (name, alternatives) in standard_library() {
        let Some(normalised) = Part::normalise("Python", &name, &alternatives, version, target)?
        else {
            continue;
        };

        let part = normalised.part;
        if part.core && matches!(part.kind, PartKind::ExtensionModule { .. }) {
            modules.push(name);
        }
    }

    Ok(modules)
}

/// The contents of `Modules/config.c`.
pub fn config_c(version: &VersionNumber, modules: &[String]) -> String {
    let mut out = String::from(
        "/* Automatically generated by pydeploy-sysroot. */\n\n#include <Python.h>\n\n\
         #ifdef __cplusplus\nextern \"C\" {\n#endif\n\n",
    );

    for name in modules {
        out.push_str(&format!("extern PyObject *{}(void);\n", core_module_init(name, version)));
    }

    out.push_str("\nstruct _inittab _PyImport_Inittab[] = {\n");
    for name in modules {
        out.push_str(&format!("    {{\"{}\", {}}},\n", name, core_module_init(name, version)));
    }

    out.push_str(
        "\n    /* These are needed for sys.builtin_module_names. */\n    \
         {\"builtins\", NULL},\n    {\"sys\", NULL},\n    {\"__main__\", NULL},\n\n    \
         {0, 0}\n};\n\n#ifdef __cplusplus\n}\n#endif\n",
    );

    out
}

/// Parser sources, excluding those only used to build the parser generator.
const PARSER_SOURCES: &[&str] = &[
    "Parser/acceler.c",
    "Parser/bitset.c",
    "Parser/firstsets.c",
    "Parser/grammar.c",
    "Parser/grammar1.c",
    "Parser/listnode.c",
    "Parser/metagrammar.c",
    "Parser/myreadline.c",
    "Parser/node.c",
    "Parser/parser.c",
    "Parser/parsetok.c",
    "Parser/pgen.c",
    "Parser/tokenizer.c",
];

/// Interpreter sources that must not be compiled.
const EXCLUDED_SOURCES: &[&str] = &[
    "Python/dup2.c",
    "Python/frozenmain.c",
    "Python/strdup.c",
];

/// The contents of `python.pro`.
pub fn python_pro(
    version: &VersionNumber,
    target: Architecture,
    dynamic_loading: bool,
    modules: &[String],
) -> Result<String, DeployError> {
    let windows = target.platform() == Platform::Windows;
    let py_subdir = format!("python{}.{}", version.major, version.minor);
    let lib_name = if windows {
        format!("python{}{}", version.major, version.minor)
    } else {
        py_subdir.clone()
    };

    let mut out = String::from("# Automatically generated by pydeploy-sysroot.\n\n");

    out.push_str("TEMPLATE = lib\n");
    out.push_str(&format!("TARGET = {}\n", lib_name));
    out.push_str("CONFIG -= qt\nCONFIG += staticlib warn_off\n");

    if let Some(abi) = target.android_abi() {
        out.push_str(&format!("ANDROID_ABIS = {}\n", abi));
    }

    out.push_str("\nisEmpty(SYSROOT): error(\"SYSROOT must be set\")\n\n");

    out.push_str("DEFINES += NDEBUG Py_BUILD_CORE\n");
    out.push_str("INCLUDEPATH += . Include\n");

    if windows {
        out.push_str("INCLUDEPATH += PC\n");
        if !dynamic_loading {
            out.push_str("DEFINES += Py_NO_ENABLE_SHARED\n");
        }
    } else {
        out.push_str(&format!(
            "DEFINES += PYTHONPATH=\\\\\\\"\\\\\\\" PREFIX=\\\\\\\"/\\\\\\\" \
             EXEC_PREFIX=\\\\\\\"/\\\\\\\" VERSION=\\\\\\\"{}.{}\\\\\\\" VPATH=\\\\\\\"\\\\\\\"\n",
            version.major, version.minor
        ));
    }

    out.push_str("\ntarget.path = $$SYSROOT/lib\n");
    out.push_str(&format!("headers.path = $$SYSROOT/include/{}\n", py_subdir));
    out.push_str("headers.files = pyconfig.h Include/*.h\n");
    out.push_str(&format!("stdlib.path = $$SYSROOT/lib/{}\n", py_subdir));
    out.push_str("stdlib.files = Lib/*\n");
    out.push_str("INSTALLS += target headers stdlib\n\n");

    let mut sources: Vec<String> = vec![
        "Modules/config.c".to_string(),
        "Modules/getbuildinfo.c".to_string(),
        "Modules/main.c".to_string(),
    ];
    sources.extend(PARSER_SOURCES.iter().map(|s| s.to_string()));

    if windows {
        sources.extend(
            ["PC/dl_nt.c", "PC/getpathp.c", "PC/invalid_parameter_handler.c"]
                .iter()
                .map(|s| s.to_string()),
        );
    } else {
        sources.push("Modules/getpath.c".to_string());
    }

    if dynamic_loading {
        sources.push(if windows {
            "Python/dynload_win.c".to_string()
        } else {
            "Python/dynload_shlib.c".to_string()
        });
    }

    for module in modules {
        for source in resolve_all(core_module_sources(module), target)? {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }

    out.push_str("SOURCES = \\\n");
    for source in &sources {
        out.push_str(&format!("    {} \\\n", source));
    }
    out.push_str("    $$files(Objects/*.c) \\\n    $$files(Python/*.c)\n\n");

    out.push_str("SOURCES -= $$files(Python/dynload_*.c)\n");
    for source in EXCLUDED_SOURCES {
        out.push_str(&format!("SOURCES -= {}\n", source));
    }

    if dynamic_loading {
        // Put back the one removed with the others.
        let dynload = if windows { "Python/dynload_win.c" } else { "Python/dynload_shlib.c" };
        out.push_str(&format!("SOURCES += {}\n", dynload));
    }

    Ok(out)
}

/// The platform part of the name of the `_sysconfigdata` module.
///
/// These match a default build on macOS and Linux and are unique on Android
/// and iOS.
pub fn sysconfigdata_name(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Android => Some("linux_android"),
        Platform::Ios => Some("darwin_ios"),
        Platform::MacOs => Some("darwin_darwin"),
        Platform::Linux => Some("linux_x86_64-linux-gnu"),
        Platform::Windows => None,
    }
}

pub const SYSCONFIGDATA: &str = "# Automatically generated.\n\nbuild_time_vars = {\n}\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionNumber {
        s.parse().unwrap()
    }

    #[test]
    fn test_core_modules_for_target() {
        let linux = core_extension_modules(&v("3.7.8"), Architecture::Linux64).unwrap();
        assert!(linux.iter().any(|m| m == "posix"));
        assert!(linux.iter().any(|m| m == "zipimport"));
        assert!(!linux.iter().any(|m| m == "winreg"));

        let windows = core_extension_modules(&v("3.7.8"), Architecture::Win64).unwrap();
        assert!(windows.iter().any(|m| m == "nt"));
        assert!(!windows.iter().any(|m| m == "pwd"));

        // zipimport is an ordinary extension module in 3.5.
        let old = core_extension_modules(&v("3.5.10"), Architecture::Linux64).unwrap();
        assert!(!old.iter().any(|m| m == "zipimport"));
    }

    #[test]
    fn test_config_c() {
        let modules = vec!["_imp".to_string(), "marshal".to_string(), "posix".to_string()];
        let config = config_c(&v("3.6.11"), &modules);

        assert!(config.contains("extern PyObject *PyInit_imp(void);"));
        assert!(config.contains("    {\"marshal\", PyMarshal_Init},\n"));
        assert!(config.contains("    {\"posix\", PyInit_posix},\n"));
        assert!(config.contains("{\"builtins\", NULL}"));
        assert!(config.trim_end().ends_with("#endif"));
    }

    #[test]
    fn test_python_pro_linux() {
        let modules = core_extension_modules(&v("3.7.8"), Architecture::Linux64).unwrap();
        let pro = python_pro(&v("3.7.8"), Architecture::Linux64, false, &modules).unwrap();

        assert!(pro.contains("TARGET = python3.7\n"));
        assert!(pro.contains("headers.path = $$SYSROOT/include/python3.7\n"));
        assert!(pro.contains("    Modules/posixmodule.c \\\n"));
        assert!(pro.contains("    Modules/getpath.c \\\n"));
        assert!(!pro.contains("PC/"));
        assert!(!pro.contains("ANDROID_ABIS"));
        assert!(!pro.contains("SOURCES += Python/dynload"));
    }

    #[test]
    fn test_python_pro_windows_dynamic() {
        let modules = core_extension_modules(&v("3.7.8"), Architecture::Win64).unwrap();
        let pro = python_pro(&v("3.7.8"), Architecture::Win64, true, &modules).unwrap();

        assert!(pro.contains("TARGET = python37\n"));
        assert!(pro.contains("    PC/winreg.c \\\n"));
        assert!(pro.contains("    Modules/_io/winconsoleio.c \\\n"));
        assert!(pro.contains("SOURCES += Python/dynload_win.c\n"));
        assert!(!pro.contains("Py_NO_ENABLE_SHARED"));
    }

    #[test]
    fn test_python_pro_android() {
        let pro = python_pro(&v("3.7.8"), Architecture::Android64, false, &[]).unwrap();
        assert!(pro.contains("ANDROID_ABIS = arm64-v8a\n"));
    }
}

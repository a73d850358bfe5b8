//! The QScintilla editor widget and its Python bindings.
//!
//! The static C++ library is built with qmake from `Qt4Qt5` before the
//! bindings in `Python` are built against PyQt5.

use std::path::Path;

use anyhow::Result;

use crate::core::part::Part;
use crate::core::platform::Platform;
use crate::core::version::VersionNumber;
use crate::plugins::pyqt::{
    add_on_configuration, add_on_configure_py, disabled_features, install_pyqt_component,
    installed_modules, make_install, pyqt_archive, using_sip_v4, verify_pyqt_component,
    SipInstall, ADD_ON_PREINSTALLS,
};
use crate::plugins::qt::host_qmake;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::util::fs;

const PRINTER_FEATURE: &str = "PyQt_Printer";

#[derive(Debug)]
pub struct QScintilla;

/// The version as used in archive names. The convention for `.0` releases
/// began after v2.11.0.
fn version_str(version: &VersionNumber) -> String {
    if *version == (2, 11, 0) {
        "2.11".to_string()
    } else {
        version.to_string()
    }
}

fn has_print_support(ctx: &ComponentContext<'_>) -> Result<bool> {
    Ok(installed_modules(ctx)?.iter().any(|m| m == "QtPrintSupport"))
}

/// Remove printing from a `.pro` or feature file line. Newer iOS mkspecs
/// have no `printsupport`.
fn patch_for_ios(line: &str, out: &mut String) {
    if !line.contains("qsciprinter") {
        out.push_str(&line.replace("printsupport", ""));
    }
}

impl QScintilla {
    fn install_library(&self, ctx: &InstallContext<'_>, source_dir: &Path) -> Result<()> {
        let qt4qt5 = source_dir.join("Qt4Qt5");

        if ctx.target_platform() == Platform::Ios {
            ctx.patch_file(&qt4qt5.join("qscintilla.pro"), patch_for_ios)?;
            ctx.patch_file(
                &qt4qt5.join("features_staticlib").join("qscintilla2.prf"),
                patch_for_ios,
            )?;
        }

        let mut command = ctx
            .command(host_qmake(ctx.sysroot)?)
            .cwd(&qt4qt5)
            .args(["CONFIG+=staticlib", "DEFINES+=SCI_NAMESPACE"]);

        if let Some(abi) = ctx.target().android_abi() {
            command = command.arg(format!("ANDROID_ABIS={}", abi));
        }

        // PyQt-builder sets the build mode explicitly so the default can't
        // be relied on.
        if !using_sip_v4(ctx)? {
            command = command.arg("CONFIG+=release");
        }

        ctx.run(command)?;
        make_install(ctx, &qt4qt5)
    }

    fn install_using_sip_v4(&self, ctx: &InstallContext<'_>, source_dir: &Path) -> Result<()> {
        let python_dir = source_dir.join("Python");

        let mut disabled = disabled_features(ctx)?;
        if !has_print_support(ctx)? && !disabled.iter().any(|f| f == PRINTER_FEATURE) {
            disabled.push(PRINTER_FEATURE.to_string());
        }

        let cfg = add_on_configuration(ctx, false, &disabled)?;
        fs::write_string(&python_dir.join("qscintilla.cfg"), &cfg)?;

        let mut command = add_on_configure_py(ctx, &python_dir, "qscintilla.cfg")?
            .args(["--no-stubs", "--pyqt", "PyQt5"]);
        if let Some(abi) = ctx.target().android_abi() {
            command = command.arg(format!("ANDROID_ABIS={}", abi));
        }

        ctx.run(command)?;
        make_install(ctx, &python_dir)
    }
}

impl ComponentPlugin for QScintilla {
    fn must_install_from_source(&self) -> bool {
        true
    }

    fn preinstalls(&self) -> &'static [&'static str] {
        ADD_ON_PREINSTALLS
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        let version = ctx.version();

        if *version <= (2, 11, 2) {
            Some(format!("QScintilla_gpl-{}.tar.gz", version_str(version)))
        } else {
            Some(format!("QScintilla-{}.tar.gz", version_str(version)))
        }
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        Ok(vec![format!(
            "https://www.riverbankcomputing.com/static/Downloads/QScintilla/{}/",
            version_str(ctx.version())
        )])
    }

    fn provides(&self, ctx: &ComponentContext<'_>) -> Result<Provides> {
        let mut deps = vec!["PyQt5:PyQt5.QtWidgets"];
        if has_print_support(ctx)? {
            deps.push("PyQt5:PyQt5.QtPrintSupport");
        }

        Ok(vec![(
            "PyQt5.Qsci".to_string(),
            vec![Part::extension_module()
                .deps(&deps)
                .libs(&["-lQsci"])
                .qmake_config(&["qscintilla2"])],
        )])
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let version = ctx.version();

        if *version < (2, 11) {
            return Err(ctx.unsupported(None).into());
        }
        if *version > (2, 11, 5) {
            ctx.untested();
        }

        // Scintilla needs C++ library functions missing before NDK r14.
        if ctx.target_platform() == Platform::Android && ctx.android()?.ndk_version < 14 {
            return Err(ctx.error("Android NDK r14 or later is required").into());
        }

        let pyqt = ctx.get_component("PyQt5")?;
        verify_pyqt_component(ctx, &pyqt.version, (5, 4), (1, 5))
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let archive = pyqt_archive(ctx, "QScintilla", &version_str(ctx.version()))?;
        let source_dir = ctx.unpack_archive(&archive)?;

        self.install_library(ctx, &source_dir)?;

        if using_sip_v4(ctx)? {
            return self.install_using_sip_v4(ctx, &source_dir);
        }

        // The project has no bindings section so the module is named.
        let enable = vec!["Qsci".to_string()];
        let printer = vec![PRINTER_FEATURE.to_string()];
        let build = SipInstall {
            project: &[],
            enable: Some(enable.as_slice()),
            disabled_features: if has_print_support(ctx)? {
                None
            } else {
                Some(printer.as_slice())
            },
        };

        install_pyqt_component(ctx, &source_dir, &build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::platform::Architecture;
    use crate::plugins::builtin_registry;
    use crate::sysroot::specification::Specification;
    use crate::sysroot::Sysroot;

    fn spec_text(version: &str, modules: &str) -> String {
        format!(
            "[Python]\nversion = \"3.7.8\"\n\
             [SIP]\nversion = \"12.8.1\"\nmodule_name = \"PyQt5.sip\"\n\
             [PyQt5]\nversion = \"5.15.2\"\ninstalled_modules = [{}]\n\
             [QScintilla]\nversion = \"{}\"\n",
            modules, version
        )
    }

    #[test]
    fn test_provides_depends_on_print_support() {
        let registry = builtin_registry();

        for (modules, expected) in [
            ("\"QtWidgets\"", vec!["PyQt5:PyQt5.QtWidgets"]),
            (
                "\"QtWidgets\", \"QtPrintSupport\"",
                vec!["PyQt5:PyQt5.QtWidgets", "PyQt5:PyQt5.QtPrintSupport"],
            ),
        ] {
            let spec = Specification::parse(
                Path::new("/tmp/sysroot.toml"),
                &spec_text("2.11.5", modules),
                &registry,
            )
            .unwrap();
            let sysroot =
                Sysroot::new(&spec, Architecture::Linux64, Architecture::Linux64, None).unwrap();
            let qsci = sysroot.context(sysroot.get_component("QScintilla").unwrap());

            let provides = QScintilla.provides(&qsci).unwrap();
            assert_eq!(provides[0].0, "PyQt5.Qsci");
            assert_eq!(provides[0].1[0].deps, expected);
        }
    }

    #[test]
    fn test_archive_names() {
        let registry = builtin_registry();

        for (version, expected) in [
            ("2.11.0", "QScintilla_gpl-2.11.tar.gz"),
            ("2.11.2", "QScintilla_gpl-2.11.2.tar.gz"),
            ("2.11.5", "QScintilla-2.11.5.tar.gz"),
        ] {
            let spec = Specification::parse(
                Path::new("/tmp/sysroot.toml"),
                &spec_text(version, "\"QtWidgets\""),
                &registry,
            )
            .unwrap();
            let sysroot =
                Sysroot::new(&spec, Architecture::Linux64, Architecture::Linux64, None).unwrap();
            let qsci = sysroot.context(sysroot.get_component("QScintilla").unwrap());

            assert_eq!(QScintilla.archive_name(&qsci).as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_old_versions_are_unsupported() {
        let registry = builtin_registry();
        let spec = Specification::parse(
            Path::new("/tmp/sysroot.toml"),
            &spec_text("2.10.8", "\"QtWidgets\""),
            &registry,
        )
        .unwrap();
        let sysroot =
            Sysroot::new(&spec, Architecture::Linux64, Architecture::Linux64, None).unwrap();
        let qsci = sysroot.context(sysroot.get_component("QScintilla").unwrap());

        let err = QScintilla.verify(&qsci).unwrap_err();
        assert!(err.to_string().contains("v2.10.8 is unsupported"));
    }

    #[test]
    fn test_patch_for_ios() {
        let mut out = String::new();
        for line in ["QT += widgets printsupport\n", "HEADERS += qsciprinter.h\n", "x\n"] {
            patch_for_ios(line, &mut out);
        }

        assert_eq!(out, "QT += widgets \nx\n");
    }
}

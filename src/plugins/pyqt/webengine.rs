//! The PyQtWebEngine bindings for the Qt WebEngine libraries.

use anyhow::Result;

use crate::core::part::Part;
use crate::core::platform::Platform;
use crate::core::version::VersionNumber;
use crate::plugins::pyqt::{
    add_on_configuration, add_on_configure_py, disabled_features, install_pyqt_component,
    installed_modules, make_install, pyqt_archive, using_sip_v4, verify_pyqt_component,
    SipInstall, ADD_ON_PREINSTALLS,
};
use crate::sysroot::archive::pypi_urls;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::util::fs;

#[derive(Debug)]
pub struct PyQtWebEngine;

fn version_str(version: &VersionNumber) -> String {
    if *version == (5, 12, 0) {
        "5.12".to_string()
    } else {
        version.to_string()
    }
}

impl ComponentPlugin for PyQtWebEngine {
    fn must_install_from_source(&self) -> bool {
        true
    }

    fn preinstalls(&self) -> &'static [&'static str] {
        ADD_ON_PREINSTALLS
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        let version = ctx.version();

        if *version <= (5, 13, 1) {
            Some(format!("PyQtWebEngine_gpl-{}.tar.gz", version_str(version)))
        } else {
            Some(format!("PyQtWebEngine-{}.tar.gz", version_str(version)))
        }
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        let version = version_str(ctx.version());

        if *ctx.version() <= (5, 14) {
            return Ok(vec![format!(
                "https://www.riverbankcomputing.com/static/Downloads/PyQtWebEngine/{}/",
                version
            )]);
        }

        pypi_urls("PyQtWebEngine", &version, &ctx.archive_name()?)
    }

    fn provides(&self, ctx: &ComponentContext<'_>) -> Result<Provides> {
        let mut widgets_deps = vec![
            "PyQt5.QtWebEngineCore",
            "PyQt5:PyQt5.QtNetwork",
            "PyQt5:PyQt5.QtPrintSupport",
            "PyQt5:PyQt5.QtWidgets",
        ];
        if installed_modules(ctx)?.iter().any(|m| m == "QtWebChannel") {
            widgets_deps.push("PyQt5:PyQt5.QtWebChannel");
        }

        Ok(vec![
            (
                "PyQt5.QtWebEngine".to_string(),
                vec![Part::extension_module()
                    .deps(&["PyQt5.QtWebEngineCore"])
                    .libs(&["-lQtWebEngine"])
                    .qmake_qt(&["webengine"])],
            ),
            (
                "PyQt5.QtWebEngineCore".to_string(),
                vec![Part::extension_module()
                    .deps(&["PyQt5:PyQt5.QtNetwork", "PyQt5:PyQt5.QtGui"])
                    .libs(&["-lQtWebEngineCore"])
                    .qmake_qt(&["webenginecore"])],
            ),
            (
                "PyQt5.QtWebEngineWidgets".to_string(),
                vec![Part::extension_module()
                    .deps(&widgets_deps)
                    .libs(&["-lQtWebEngineWidgets"])
                    .qmake_cpp11()
                    .qmake_qt(&["webenginewidgets"])],
            ),
        ])
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let platform = ctx.target_platform();
        if matches!(platform, Platform::Android | Platform::Ios) {
            return Err(ctx
                .error(format!("PyQtWebEngine is not supported on {}", platform))
                .into());
        }

        verify_pyqt_component(ctx, ctx.version(), (5, 4), (1, 5))
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let archive = pyqt_archive(ctx, "PyQtWebEngine", &version_str(ctx.version()))?;
        let source_dir = ctx.unpack_archive(&archive)?;

        if !using_sip_v4(ctx)? {
            return install_pyqt_component(ctx, &source_dir, &SipInstall::default());
        }

        let cfg = add_on_configuration(ctx, true, &disabled_features(ctx)?)?;
        fs::write_string(&source_dir.join("pyqtwebengine.cfg"), &cfg)?;

        let mut command = add_on_configure_py(ctx, &source_dir, "pyqtwebengine.cfg")?;

        // v5.12.0 is missing the stub file options.
        if *ctx.version() > (5, 12, 0) {
            command = command.arg("--no-stubs");
        }

        ctx.run(command)?;
        make_install(ctx, &source_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::core::platform::Architecture;
    use crate::plugins::builtin_registry;
    use crate::sysroot::specification::Specification;
    use crate::sysroot::Sysroot;

    fn spec_text(modules: &str) -> String {
        format!(
            "[Python]\nversion = \"3.7.8\"\n\
             [SIP]\nversion = \"12.8.1\"\nmodule_name = \"PyQt5.sip\"\n\
             [PyQt5]\nversion = \"5.15.2\"\ninstalled_modules = [{}]\n\
             [PyQtWebEngine]\nversion = \"5.15.2\"\n",
            modules
        )
    }

    fn widgets_deps(modules: &str) -> Vec<String> {
        let registry = builtin_registry();
        let spec =
            Specification::parse(Path::new("/tmp/sysroot.toml"), &spec_text(modules), &registry)
                .unwrap();
        let sysroot =
            Sysroot::new(&spec, Architecture::Linux64, Architecture::Linux64, None).unwrap();
        let webengine = sysroot.context(sysroot.get_component("PyQtWebEngine").unwrap());

        let provides = PyQtWebEngine.provides(&webengine).unwrap();
        let names: Vec<&str> = provides.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            ["PyQt5.QtWebEngine", "PyQt5.QtWebEngineCore", "PyQt5.QtWebEngineWidgets"]
        );

        provides[2].1[0].deps.clone()
    }

    #[test]
    fn test_web_channel_is_optional() {
        let without = widgets_deps("\"QtWidgets\"");
        assert!(!without.iter().any(|d| d == "PyQt5:PyQt5.QtWebChannel"));

        let with = widgets_deps("\"QtWidgets\", \"QtWebChannel\"");
        assert_eq!(with.last().map(String::as_str), Some("PyQt5:PyQt5.QtWebChannel"));
    }

    #[test]
    fn test_mobile_targets_are_rejected() {
        let registry = builtin_registry();
        let spec = Specification::parse(
            Path::new("/tmp/sysroot.toml"),
            &spec_text("\"QtWidgets\""),
            &registry,
        )
        .unwrap();
        let sysroot =
            Sysroot::new(&spec, Architecture::Linux64, Architecture::Android64, None).unwrap();
        let webengine = sysroot.context(sysroot.get_component("PyQtWebEngine").unwrap());

        let err = PyQtWebEngine.verify(&webengine).unwrap_err();
        assert!(err.to_string().contains("PyQtWebEngine is not supported on android"));
    }
}

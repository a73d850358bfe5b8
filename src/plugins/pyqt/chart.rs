//! The PyQtChart bindings for the Qt Charts library.

use anyhow::Result;

use crate::core::part::Part;
use crate::core::version::VersionNumber;
use crate::plugins::pyqt::{
    add_on_configuration, add_on_configure_py, disabled_features, install_pyqt_component,
    make_install, pyqt_archive, using_sip_v4, verify_pyqt_component, SipInstall,
    ADD_ON_PREINSTALLS,
};
use crate::sysroot::archive::pypi_urls;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::util::fs;

#[derive(Debug)]
pub struct PyQtChart;

/// The version as used in archive names. The convention for `.0` releases
/// began with v5.13.0.
fn version_str(version: &VersionNumber) -> String {
    if *version == (5, 12, 0) {
        "5.12".to_string()
    } else {
        version.to_string()
    }
}

impl ComponentPlugin for PyQtChart {
    fn must_install_from_source(&self) -> bool {
        true
    }

    fn preinstalls(&self) -> &'static [&'static str] {
        ADD_ON_PREINSTALLS
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        let version = ctx.version();

        if *version <= (5, 13, 0) {
            Some(format!("PyQtChart_gpl-{}.tar.gz", version_str(version)))
        } else {
            Some(format!("PyQtChart-{}.tar.gz", version_str(version)))
        }
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        let version = version_str(ctx.version());

        if *ctx.version() <= (5, 14) {
            return Ok(vec![format!(
                "https://www.riverbankcomputing.com/static/Downloads/PyQtChart/{}/",
                version
            )]);
        }

        pypi_urls("PyQtChart", &version, &ctx.archive_name()?)
    }

    fn provides(&self, _ctx: &ComponentContext<'_>) -> Result<Provides> {
        Ok(vec![(
            "PyQt5.QtChart".to_string(),
            vec![Part::extension_module()
                .deps(&["PyQt5:PyQt5.QtWidgets"])
                .libs(&["-lQtChart"])
                .qmake_qt(&["charts"])],
        )])
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        verify_pyqt_component(ctx, ctx.version(), (5, 4), (1, 5))
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let archive = pyqt_archive(ctx, "PyQtChart", &version_str(ctx.version()))?;
        let source_dir = ctx.unpack_archive(&archive)?;

        if !using_sip_v4(ctx)? {
            return install_pyqt_component(ctx, &source_dir, &SipInstall::default());
        }

        let cfg = add_on_configuration(ctx, true, &disabled_features(ctx)?)?;
        fs::write_string(&source_dir.join("pyqtchart.cfg"), &cfg)?;

        let mut command = add_on_configure_py(ctx, &source_dir, "pyqtchart.cfg")?.arg("--no-stubs");
        if let Some(abi) = ctx.target().android_abi() {
            command = command.arg(format!("ANDROID_ABIS={}", abi));
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

    fn spec_text(version: &str) -> String {
        format!(
            "[Python]\nversion = \"3.7.8\"\n\
             [SIP]\nversion = \"12.8.1\"\nmodule_name = \"PyQt5.sip\"\n\
             [PyQt5]\nversion = \"5.15.2\"\ninstalled_modules = [\"QtWidgets\"]\n\
             [PyQtChart]\nversion = \"{}\"\n",
            version
        )
    }

    #[test]
    fn test_archive_names() {
        let registry = builtin_registry();

        for (version, expected) in [
            ("5.12.0", "PyQtChart_gpl-5.12.tar.gz"),
            ("5.13.0", "PyQtChart_gpl-5.13.0.tar.gz"),
            ("5.15.2", "PyQtChart-5.15.2.tar.gz"),
        ] {
            let spec = Specification::parse(
                Path::new("/tmp/sysroot.toml"),
                &spec_text(version),
                &registry,
            )
            .unwrap();
            let sysroot =
                Sysroot::new(&spec, Architecture::Linux64, Architecture::Linux64, None).unwrap();
            let chart = sysroot.context(sysroot.get_component("PyQtChart").unwrap());

            assert_eq!(PyQtChart.archive_name(&chart).as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_provides() {
        let registry = builtin_registry();
        let spec =
            Specification::parse(Path::new("/tmp/sysroot.toml"), &spec_text("5.15.2"), &registry)
                .unwrap();
        let sysroot =
            Sysroot::new(&spec, Architecture::Linux64, Architecture::Linux64, None).unwrap();
        let chart = sysroot.context(sysroot.get_component("PyQtChart").unwrap());

        let provides = PyQtChart.provides(&chart).unwrap();
        assert_eq!(provides.len(), 1);
        assert_eq!(provides[0].0, "PyQt5.QtChart");

        let part = &provides[0].1[0];
        assert_eq!(part.deps, ["PyQt5:PyQt5.QtWidgets"]);
        assert_eq!(part.kind.compiled().unwrap().libs, ["-lQtChart"]);
    }
}

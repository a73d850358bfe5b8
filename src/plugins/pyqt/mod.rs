//! The PyQt5 bindings and the shared build logic of the add-on bindings
//! (PyQtChart, PyQtWebEngine and QScintilla) that are built against them.
//!
//! With SIP v4 the bindings are configured with `configure.py` and a
//! configuration file. With later versions the project's `pyproject.toml` is
//! rewritten to describe a static build for the target and `sip-install`
//! does the rest.

pub mod chart;
pub mod qscintilla;
pub mod webengine;

use std::path::{Path, PathBuf};

use anyhow::Result;
use toml_edit::{value, Array, DocumentMut, Item, Table};

use crate::core::errors::DeployError;
use crate::core::option::{ComponentOption, OptionType};
use crate::core::part::Part;
use crate::core::platform::Platform;
use crate::core::version::VersionNumber;
use crate::plugins::python::PythonLayout;
use crate::plugins::qt::host_qmake;
use crate::plugins::sip;
use crate::sysroot::archive::pypi_urls;
use crate::sysroot::component::{ComponentContext, ComponentPlugin, InstallContext, Provides};
use crate::util::fs;
use crate::util::process::ProcessBuilder;

const LICENSE_FILE: &str = "pyqt-commercial.sip";

/// The components that are installed before PyQt5 and its add-ons.
const ADD_ON_PREINSTALLS: &[&str] = &["Python", "PyQt5", "Qt", "SIP"];

#[derive(Debug)]
pub struct PyQt5;

/// Every part the bindings can provide. The QtCore library is found in
/// `qtcore_lib_dir`.
fn all_parts(qtcore_lib_dir: &str) -> Vec<(&'static str, Part)> {
    let ext = |deps: &[&str], lib: &str, qt: &[&str]| {
        Part::extension_module()
            .deps(deps)
            .libs(&[format!("-l{}", lib)])
            .qmake_qt(qt)
    };

    vec![
        ("PyQt5", Part::python_module().deps(&["Python:pkgutil"])),
        (
            "PyQt5.QAxContainer",
            ext(&["PyQt5.QtWidgets"], "QAxContainer", &["axcontainer"]).target("win"),
        ),
        ("PyQt5.Qt", ext(&["PyQt5"], "Qt", &[])),
        (
            "PyQt5.QtAndroidExtras",
            ext(&["PyQt5.QtCore"], "QtAndroidExtras", &["androidextras"]).target("android"),
        ),
        ("PyQt5.QtBluetooth", ext(&["PyQt5.QtCore"], "QtBluetooth", &["bluetooth"])),
        (
            "PyQt5.QtCore",
            Part::extension_module()
                .deps(&["SIP:PyQt5.sip", "PyQt5"])
                .libs(&[format!("-L{}", qtcore_lib_dir), "-lQtCore".to_string()]),
        ),
        ("PyQt5.QtDBus", ext(&["PyQt5.QtCore"], "QtDBus", &["dbus"])),
        ("PyQt5.QtGui", ext(&["PyQt5.QtCore"], "QtGui", &[])),
        ("PyQt5.QtHelp", ext(&["PyQt5.QtWidgets"], "QtHelp", &["help"])),
        ("PyQt5.QtLocation", ext(&["PyQt5.QtPositioning"], "QtLocation", &["location"])),
        (
            "PyQt5.QtMacExtras",
            ext(&["PyQt5.QtGui"], "QtMacExtras", &["macextras"]).target("ios|macos"),
        ),
        (
            "PyQt5.QtMultimedia",
            ext(&["PyQt5.QtGui", "PyQt5.QtNetwork"], "QtMultimedia", &["multimedia"]),
        ),
        (
            "PyQt5.QtMultimediaWidgets",
            ext(
                &["PyQt5.QtMultimedia", "PyQt5.QtWidgets"],
                "QtMultimediaWidgets",
                &["multimediawidgets"],
            ),
        ),
        ("PyQt5.QtNetwork", ext(&["PyQt5.QtCore"], "QtNetwork", &["network"])),
        (
            "PyQt5.QtNetworkAuth",
            ext(&["PyQt5.QtNetwork"], "QtNetworkAuth", &["network", "networkauth"]),
        ),
        ("PyQt5.QtNfc", ext(&["PyQt5.QtCore"], "QtNfc", &["nfc"])),
        ("PyQt5.QtOpenGL", ext(&["PyQt5.QtWidgets"], "QtOpenGL", &["opengl"])),
        ("PyQt5.QtPositioning", ext(&["PyQt5.QtCore"], "QtPositioning", &["positioning"])),
        (
            "PyQt5.QtPrintSupport",
            ext(&["PyQt5.QtWidgets"], "QtPrintSupport", &["printsupport"]).target("!ios"),
        ),
        ("PyQt5.QtQml", ext(&["PyQt5.QtNetwork"], "QtQml", &["qml"])),
        ("PyQt5.QtQuick", ext(&["PyQt5.QtGui", "PyQt5.QtQml"], "QtQuick", &["quick"])),
        (
            "PyQt5.QtQuick3D",
            ext(&["PyQt5.QtGui", "PyQt5.QtQml"], "QtQuick3D", &["quick3d"]).min_version((5, 15)),
        ),
        (
            "PyQt5.QtQuickWidgets",
            ext(&["PyQt5.QtQuick", "PyQt5.QtWidgets"], "QtQuickWidgets", &["quickwidgets"]),
        ),
        (
            "PyQt5.QtRemoteObjects",
            ext(&["PyQt5.QtCore"], "QtRemoteObjects", &["remoteobjects"]),
        ),
        ("PyQt5.QtSensors", ext(&["PyQt5.QtCore"], "QtSensors", &["sensors"])),
        ("PyQt5.QtSerialPort", ext(&["PyQt5.QtCore"], "QtSerialPort", &["serialport"])),
        ("PyQt5.QtSql", ext(&["PyQt5.QtWidgets"], "QtSql", &["sql"])),
        ("PyQt5.QtSvg", ext(&["PyQt5.QtWidgets"], "QtSvg", &["svg"])),
        ("PyQt5.QtTest", ext(&["PyQt5.QtWidgets"], "QtTest", &["testlib"])),
        (
            "PyQt5.QtTextToSpeech",
            ext(&["PyQt5.QtCore"], "QtTextToSpeech", &["texttospeech"]).min_version((5, 15, 1)),
        ),
        ("PyQt5.QtWebChannel", ext(&["PyQt5.QtCore"], "QtWebChannel", &["webchannel"])),
        ("PyQt5.QtWebSockets", ext(&["PyQt5.QtNetwork"], "QtWebSockets", &["websockets"])),
        ("PyQt5.QtWidgets", ext(&["PyQt5.QtGui"], "QtWidgets", &["widgets"])),
        (
            "PyQt5.QtWinExtras",
            ext(&["PyQt5.QtWidgets"], "QtWinExtras", &["winextras"]).target("win"),
        ),
        (
            "PyQt5.QtX11Extras",
            ext(&["PyQt5.QtCore"], "QtX11Extras", &["x11extras"]).target("linux"),
        ),
        ("PyQt5.QtXml", ext(&["PyQt5.QtCore"], "QtXml", &["xml"])),
        ("PyQt5.QtXmlPatterns", ext(&["PyQt5.QtNetwork"], "QtXmlPatterns", &["xmlpatterns"])),
        ("PyQt5._QOpenGLFunctions_2_0", ext(&["PyQt5.QtGui"], "_QOpenGLFunctions_2_0", &[])),
        ("PyQt5._QOpenGLFunctions_2_1", ext(&["PyQt5.QtGui"], "_QOpenGLFunctions_2_1", &[])),
        (
            "PyQt5._QOpenGLFunctions_4_1_Core",
            ext(&["PyQt5.QtGui"], "_QOpenGLFunctions_4_1_Core", &[]),
        ),
        ("PyQt5._QOpenGLFunctions_ES2", ext(&["PyQt5.QtGui"], "_QOpenGLFunctions_ES2", &[])),
        (
            "PyQt5.uic",
            Part::python_package()
                .deps(&[
                    "Python:io",
                    "Python:logging",
                    "Python:os",
                    "Python:re",
                    "Python:traceback",
                    "Python:xml.etree.ElementTree",
                ])
                .exclusions(&["port_v2", "pyuic.py"]),
        ),
    ]
}

/// The names that may appear in `installed_modules`.
fn installable_modules() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = all_parts("")
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| *name != "PyQt5" && *name != "PyQt5.uic")
        .filter_map(|name| name.strip_prefix("PyQt5."))
        .collect();
    names.sort_unstable();
    names
}

/// The target platform name as PyQt knows it.
pub fn pyqt_platform(platform: Platform) -> &'static str {
    match platform {
        Platform::Android | Platform::Linux => "linux",
        Platform::Ios | Platform::MacOs => "darwin",
        Platform::Windows => "win32",
    }
}

/// The version as used in archive names. The convention for `.0` releases
/// began with v5.13.0.
fn version_str(version: &VersionNumber) -> String {
    if *version == (5, 12, 0) {
        "5.12".to_string()
    } else {
        version.to_string()
    }
}

pub fn using_sip_v4(ctx: &ComponentContext<'_>) -> Result<bool, DeployError> {
    Ok(ctx.get_component("SIP")?.version == 4)
}

/// The modules of PyQt5 that are installed, without the `PyQt5.` prefix.
pub fn installed_modules(ctx: &ComponentContext<'_>) -> Result<Vec<String>, DeployError> {
    Ok(ctx.component_context("PyQt5")?.options().get_list("installed_modules"))
}

/// The features of PyQt5 to disable, including any implied by the Qt build.
pub fn disabled_features(ctx: &ComponentContext<'_>) -> Result<Vec<String>, DeployError> {
    let mut features = ctx.component_context("PyQt5")?.options().get_list("disabled_features");

    let qt = ctx.component_context("Qt")?;
    if qt.options().get_str("ssl").is_empty() && !features.iter().any(|f| f == "PyQt_SSL") {
        features.push("PyQt_SSL".to_string());
    }

    Ok(features)
}

/// The version reported by one of the SIP build tools.
fn tool_version(ctx: &ComponentContext<'_>, exe: &str) -> Result<VersionNumber> {
    let path = ctx.find_exe(exe)?;
    let output = ProcessBuilder::new(&path).arg("-V").exec_with_stdout()?;

    Ok(output.trim().parse().map_err(|_| {
        ctx.error(format!("unable to determine the version of {}", path.display()))
    })?)
}

/// Check that a component built against PyQt5 can be. `min_pyqt` is the
/// oldest PyQt5 with the same major version that will do. The SIP and
/// PyQt-builder versions only matter when SIP v4 is not being used.
pub fn verify_pyqt_component(
    ctx: &ComponentContext<'_>,
    min_pyqt: &VersionNumber,
    min_sipbuild: (u32, u32),
    min_pyqtbuild: (u32, u32),
) -> Result<()> {
    let pyqt = ctx.component_context("PyQt5")?;
    let version = pyqt.version();

    if min_pyqt.major != version.major || min_pyqt.minor > version.minor {
        return Err(pyqt.error(format!("PyQt v{} or later is required", min_pyqt)).into());
    }

    if using_sip_v4(ctx)? {
        return Ok(());
    }

    // Support for SIP v5 was added during v5.13.
    if *version < (5, 14) {
        return Err(pyqt.error("SIP v5 requires v5.14.0 or later").into());
    }

    let sipbuild = tool_version(&pyqt, "sip-install")?;

    // Projects using SIP v5 are assumed to build with v6 as well.
    let compatible = if min_sipbuild.0 == 5 {
        sipbuild.major == 5 || sipbuild.major == 6
    } else {
        sipbuild.major == min_sipbuild.0
    };
    if !compatible {
        return Err(pyqt.error(format!("SIP v{} is required", min_sipbuild.0)).into());
    }
    if sipbuild < min_sipbuild {
        return Err(pyqt
            .error(format!("SIP v{}.{} or later is required", min_sipbuild.0, min_sipbuild.1))
            .into());
    }

    let pyqtbuild = tool_version(&pyqt, "pyqt-bundle")?;
    if pyqtbuild.major != min_pyqtbuild.0 || pyqtbuild < min_pyqtbuild {
        return Err(pyqt
            .error(format!(
                "PyQt-builder v{}.{} or later is required",
                min_pyqtbuild.0, min_pyqtbuild.1
            ))
            .into());
    }

    Ok(())
}

/// The source archive of PyQt5 or an add-on, the commercial one if there is
/// a license file.
pub fn pyqt_archive(ctx: &InstallContext<'_>, product: &str, version: &str) -> Result<PathBuf> {
    // A commercial archive is never downloaded.
    if ctx.get_file(LICENSE_FILE).is_none() {
        return ctx.get_archive();
    }

    let name = format!("{}_commercial-{}.tar.gz", product, version);
    ctx.get_file(&name)
        .ok_or_else(|| ctx.error(format!("unable to find '{}'", name)).into())
}

/// What a static target build changes in `pyproject.toml`.
#[derive(Debug, Clone)]
pub struct PyProjectConfig<'a> {
    pub component: &'a str,
    pub sip_module: &'a str,
    pub sip_version: &'a VersionNumber,
    pub py_platform: &'a str,
    pub py_version: &'a VersionNumber,
    pub py_include_dir: String,
    pub py_pylib_dir: String,
    pub py_pylib_lib: String,
    pub target_dir: String,
    pub build: &'a SipInstall<'a>,
}

/// The component-specific parts of a build with `sip-install`.
#[derive(Debug, Clone, Default)]
pub struct SipInstall<'a> {
    /// Switches set in `tool.sip.project`.
    pub project: &'a [(&'a str, bool)],
    /// The bindings to build, if not all of them.
    pub enable: Option<&'a [String]>,
    /// Set for every bindings section.
    pub disabled_features: Option<&'a [String]>,
}

/// Find or create a table, returning `None` if something else is in the way.
fn section<'d>(doc: &'d mut DocumentMut, path: &[&str]) -> Option<&'d mut Table> {
    let mut table = doc.as_table_mut();

    for name in path {
        table = table
            .entry(name)
            .or_insert_with(|| {
                let mut t = Table::new();
                t.set_implicit(true);
                Item::Table(t)
            })
            .as_table_mut()?;
    }

    Some(table)
}

fn string_array(values: &[String]) -> Array {
    values.iter().map(String::as_str).collect()
}

/// Rewrite a `pyproject.toml` so that `sip-install` builds static bindings
/// for the target.
pub fn reconfigure_pyproject(
    contents: &str,
    config: &PyProjectConfig<'_>,
) -> Result<String, DeployError> {
    let error = |message: String| DeployError::component(config.component, message);

    let mut doc: DocumentMut = contents.parse().map_err(|e: toml_edit::TomlError| {
        error("there was an error loading 'pyproject.toml'".to_string()).with_detail(e.to_string())
    })?;

    let project = section(&mut doc, &["tool", "sip", "project"]).ok_or_else(|| {
        error("'tool.sip.project' in 'pyproject.toml' is not a table".to_string())
    })?;

    // Versions before v5.15.1 did not set these reliably.
    let sip_module = project.get("sip-module").and_then(Item::as_str).unwrap_or("PyQt5.sip");
    if sip_module != config.sip_module {
        return Err(error(format!(
            "sip module '{}' is required but '{}' is provided",
            sip_module, config.sip_module
        )));
    }

    let abi_version: VersionNumber = project
        .get("abi-version")
        .and_then(Item::as_str)
        .unwrap_or("12.8")
        .parse()?;
    if abi_version.major != config.sip_version.major || abi_version > *config.sip_version {
        return Err(error(format!(
            "sip module ABI v{} is required but v{} is provided",
            abi_version, config.sip_version
        )));
    }

    project["py-platform"] = value(config.py_platform);
    project["py-major-version"] = value(i64::from(config.py_version.major));
    project["py-minor-version"] = value(i64::from(config.py_version.minor));
    project["py-include-dir"] = value(config.py_include_dir.as_str());
    project["py-pylib-dir"] = value(config.py_pylib_dir.as_str());
    project["py-pylib-lib"] = value(config.py_pylib_lib.as_str());
    project["target-dir"] = value(config.target_dir.as_str());

    if let Some(enable) = config.build.enable {
        project["enable"] = value(string_array(enable));
    }

    for (key, switch) in config.build.project {
        project[*key] = value(*switch);
    }

    let bindings = section(&mut doc, &["tool", "sip", "bindings"]).ok_or_else(|| {
        error("'tool.sip.bindings' in 'pyproject.toml' is not a table".to_string())
    })?;

    // Every enabled module gets a section so that it can be configured.
    for module in config.build.enable.unwrap_or_default() {
        if !bindings.contains_key(module) {
            bindings.insert(module, Item::Table(Table::new()));
        }
    }

    for (_, item) in bindings.iter_mut() {
        if let Some(module) = item.as_table_mut() {
            module.insert("static", value(true));
            if let Some(disabled) = config.build.disabled_features {
                module.insert("disabled-features", value(string_array(disabled)));
            }
        }
    }

    Ok(doc.to_string())
}

/// Build and install PyQt5 or an add-on with `sip-install`.
pub fn install_pyqt_component(
    ctx: &InstallContext<'_>,
    source_dir: &Path,
    build: &SipInstall<'_>,
) -> Result<()> {
    let python = PythonLayout::of(ctx)?;
    let sip = ctx.component_context("SIP")?;

    let pyproject = source_dir.join("pyproject.toml");
    if !pyproject.is_file() {
        return Err(ctx.error("unable to find 'pyproject.toml'").into());
    }

    let config = PyProjectConfig {
        component: ctx.name(),
        sip_module: sip::module_name(&sip),
        sip_version: sip.version(),
        py_platform: pyqt_platform(ctx.target_platform()),
        py_version: python.version(),
        py_include_dir: python.target_py_include_dir().display().to_string(),
        py_pylib_dir: ctx.target_lib_dir().display().to_string(),
        py_pylib_lib: python.target_py_lib(),
        target_dir: python.target_sitepackages_dir().display().to_string(),
        build,
    };

    let contents = reconfigure_pyproject(&fs::read_to_string(&pyproject)?, &config)?;
    fs::write_string(&pyproject, &contents)?;

    let mut command = ctx
        .command(ctx.find_exe("sip-install")?)
        .cwd(source_dir)
        .arg("--qmake")
        .arg(host_qmake(ctx.sysroot)?)
        .args(["--no-distinfo", "--concatenate", "2", "--no-docstrings"]);

    if let Some(abi) = ctx.target().android_abi() {
        command = command.arg("--android-abi").arg(abi);
    }
    if tracing::enabled!(tracing::Level::DEBUG) {
        command = command.arg("--verbose");
    }

    ctx.run(command)
}

/// The SIP v4 configuration file of an add-on. `with_platform` adds the
/// target platform.
pub fn add_on_configuration(
    ctx: &ComponentContext<'_>,
    with_platform: bool,
    disabled: &[String],
) -> Result<String> {
    let python = PythonLayout::of(ctx)?;
    let sip = ctx.component_context("SIP")?;

    let mut cfg = String::new();
    if with_platform {
        cfg.push_str(&format!("py_platform = {}\n", pyqt_platform(ctx.target_platform())));
    }
    cfg.push_str(&format!(
        "py_inc_dir = {}\npy_pylib_dir = {}\npy_pylib_lib = {}\npy_sip_dir = {}\n\
         [PyQt 5]\nmodule_dir = {}\nsip_module = PyQt5.sip\n",
        python.target_py_include_dir().display(),
        ctx.target_lib_dir().display(),
        python.target_py_lib(),
        sip::target_sip_dir(&sip).display(),
        python.target_sitepackages_dir().join("PyQt5").display()
    ));
    if !disabled.is_empty() {
        cfg.push_str(&format!("pyqt_disabled_features = {}\n", disabled.join(" ")));
    }

    Ok(cfg)
}

/// The SIP v4 `configure.py` command of an add-on using the configuration
/// file `cfg_name`.
pub fn add_on_configure_py(
    ctx: &InstallContext<'_>,
    source_dir: &Path,
    cfg_name: &str,
) -> Result<ProcessBuilder> {
    let python = PythonLayout::of(ctx)?;
    let sip = ctx.component_context("SIP")?;

    let mut command = ctx
        .host_command(python.host_python()?)
        .cwd(source_dir)
        .arg("configure.py")
        .arg("--static")
        .arg("--qmake")
        .arg(host_qmake(ctx.sysroot)?)
        .arg("--sysroot")
        .arg(ctx.sysroot_dir())
        .args(["--no-qsci-api", "--no-sip-files", "--configuration", cfg_name])
        .arg("--sip")
        .arg(sip::host_sip(&sip))
        .args(["-c", "--no-dist-info"]);

    if tracing::enabled!(tracing::Level::DEBUG) {
        command = command.arg("--verbose");
    }

    Ok(command)
}

/// Run `make` and `make install` in a configured directory.
pub fn make_install(ctx: &InstallContext<'_>, dir: &Path) -> Result<()> {
    let make = ctx.host_make();
    ctx.run(ctx.command(make).cwd(dir))?;
    ctx.run(ctx.command(make).cwd(dir).arg("install"))
}

impl PyQt5 {
    fn verify_sip_v4(&self, ctx: &ComponentContext<'_>) -> Result<(), DeployError> {
        let version = ctx.version();
        let sip_version = &ctx.get_component("SIP")?.version;

        let required: Option<(u32, u32, u32)> = if *version >= (5, 15) {
            Some((4, 19, 23))
        } else if *version >= (5, 14) {
            Some((4, 19, 20))
        } else if *version >= (5, 13, 1) {
            Some((4, 19, 19))
        } else {
            None
        };

        if let Some((major, minor, patch)) = required {
            if *sip_version < (major, minor, patch) {
                return Err(ctx.error(format!(
                    "SIP v{}.{}.{} or later is required",
                    major, minor, patch
                )));
            }
        }

        Ok(())
    }

    fn install_using_sip_v4(&self, ctx: &InstallContext<'_>, source_dir: &Path) -> Result<()> {
        let python = PythonLayout::of(ctx)?;
        let sip = ctx.component_context("SIP")?;
        let disabled = disabled_features(ctx)?;

        let mut cfg = format!(
            "py_platform = {}\npy_inc_dir = {}\npy_pylib_dir = {}\npy_pylib_lib = {}\n\
             pyqt_module_dir = {}\npyqt_sip_dir = {}\n[Qt 5.0]\npyqt_modules = {}\n",
            pyqt_platform(ctx.target_platform()),
            python.target_py_include_dir().display(),
            ctx.target_lib_dir().display(),
            python.target_py_lib(),
            python.target_sitepackages_dir().display(),
            sip::target_sip_dir(&sip).join("PyQt5").display(),
            ctx.options().get_list("installed_modules").join(" ")
        );
        if !disabled.is_empty() {
            cfg.push_str(&format!("pyqt_disabled_features = {}\n", disabled.join(" ")));
        }
        fs::write_string(&source_dir.join("pyqt5.cfg"), &cfg)?;

        let mut command = ctx
            .host_command(python.host_python()?)
            .cwd(source_dir)
            .arg("configure.py")
            .arg("--static")
            .arg("--qmake")
            .arg(host_qmake(ctx.sysroot)?)
            .arg("--sysroot")
            .arg(ctx.sysroot_dir())
            .args([
                "--no-tools",
                "--no-qsci-api",
                "--no-designer-plugin",
                "--no-python-dbus",
                "--no-qml-plugin",
                "--no-stubs",
                "--configuration",
                "pyqt5.cfg",
            ])
            .arg("--sip")
            .arg(sip::host_sip(&sip))
            .args(["--confirm-license", "-c", "-j2", "--no-dist-info"]);

        if tracing::enabled!(tracing::Level::DEBUG) {
            command = command.arg("--verbose");
        }
        if let Some(abi) = ctx.target().android_abi() {
            command = command.arg(format!("ANDROID_ABIS={}", abi));
        }

        ctx.run(command)?;
        make_install(ctx, source_dir)
    }
}

impl ComponentPlugin for PyQt5 {
    fn options(&self) -> Vec<ComponentOption> {
        vec![
            ComponentOption::new("disabled_features", OptionType::List)
                .help("The features that are disabled."),
            ComponentOption::new("installed_modules", OptionType::List)
                .required()
                .values(&installable_modules())
                .help("The extension modules to be installed."),
        ]
    }

    fn must_install_from_source(&self) -> bool {
        true
    }

    fn preinstalls(&self) -> &'static [&'static str] {
        &["Python", "Qt", "SIP"]
    }

    fn archive_name(&self, ctx: &ComponentContext<'_>) -> Option<String> {
        let version = ctx.version();

        if *version <= (5, 13, 1) {
            Some(format!("PyQt5_gpl-{}.tar.gz", version_str(version)))
        } else {
            Some(format!("PyQt5-{}.tar.gz", version_str(version)))
        }
    }

    fn archive_urls(&self, ctx: &ComponentContext<'_>) -> Result<Vec<String>> {
        let version = version_str(ctx.version());

        if *ctx.version() <= (5, 14) {
            return Ok(vec![format!(
                "https://www.riverbankcomputing.com/static/Downloads/PyQt5/{}/",
                version
            )]);
        }

        pypi_urls("PyQt5", &version, &ctx.archive_name()?)
    }

    fn provides(&self, ctx: &ComponentContext<'_>) -> Result<Provides> {
        let lib_dir = PythonLayout::of(ctx)?.target_sitepackages_dir().join("PyQt5");
        let mut parts = all_parts(&lib_dir.display().to_string());
        let installed = ctx.options().get_list("installed_modules");

        let mut provides = Vec::new();
        for name in ["PyQt5", "PyQt5.uic"] {
            if let Some(index) = parts.iter().position(|(n, _)| *n == name) {
                let (name, part) = parts.swap_remove(index);
                provides.push((name.to_string(), vec![part]));
            }
        }

        for module in installed {
            let name = format!("PyQt5.{}", module);
            let index = parts
                .iter()
                .position(|(n, _)| *n == name)
                .ok_or_else(|| ctx.error(format!("'{}' is not a PyQt5 module", module)))?;
            let (_, part) = parts.swap_remove(index);
            provides.push((name, vec![part]));
        }

        Ok(provides)
    }

    fn verify(&self, ctx: &ComponentContext<'_>) -> Result<()> {
        let version = ctx.version();

        if *version < (5, 12) {
            return Err(ctx.unsupported(None).into());
        }
        if *version > (5, 15) {
            ctx.untested();
        }

        if using_sip_v4(ctx)? {
            self.verify_sip_v4(ctx)?;
        } else {
            verify_pyqt_component(ctx, version, (5, 4), (1, 5))?;
        }

        Ok(())
    }

    fn install(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let archive = pyqt_archive(ctx, "PyQt5", &version_str(ctx.version()))?;
        let source_dir = ctx.unpack_archive(&archive)?;

        if let Some(license) = ctx.get_file(LICENSE_FILE) {
            ctx.copy_file(&license, &source_dir.join("sip").join(LICENSE_FILE))?;
        }

        if using_sip_v4(ctx)? {
            return self.install_using_sip_v4(ctx, &source_dir);
        }

        let enable = ctx.options().get_list("installed_modules");
        let disabled = disabled_features(ctx)?;
        let build = SipInstall {
            project: &[
                ("confirm-license", true),
                ("designer-plugin", false),
                ("qml-plugin", false),
                ("dbus-python", false),
                ("tools", false),
            ],
            enable: Some(enable.as_slice()),
            disabled_features: Some(disabled.as_slice()),
        };

        install_pyqt_component(ctx, &source_dir, &build)
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

    const PYPROJECT: &str = r#"# Specify the build system.
[build-system]
requires = ["sip >=5.5.0, <7", "PyQt-builder >=1.6, <2"]
build-backend = "sipbuild.api"

[tool.sip.metadata]
name = "PyQt5"
version = "5.15.2"

[tool.sip.project]
abi-version = "12.8"
sip-module = "PyQt5.sip"
tag-prefix = "Qt"

[tool.sip.bindings.QtCore]
qmake-QT = ["-gui"]

[tool.sip.bindings.QtGui]
"#;

    const PYQT5_PROJECT: &[(&str, bool)] = &[("confirm-license", true), ("tools", false)];

    fn config<'a>(
        sip_version: &'a VersionNumber,
        py_version: &'a VersionNumber,
        build: &'a SipInstall<'a>,
    ) -> PyProjectConfig<'a> {
        PyProjectConfig {
            component: "PyQt5",
            sip_module: "PyQt5.sip",
            sip_version,
            py_platform: "linux",
            py_version,
            py_include_dir: "/s/include/python3.7".to_string(),
            py_pylib_dir: "/s/lib".to_string(),
            py_pylib_lib: "python3.7".to_string(),
            target_dir: "/s/lib/python3.7/site-packages".to_string(),
            build,
        }
    }

    #[test]
    fn test_reconfigure_pyproject() {
        let sip_version: VersionNumber = "12.8.1".parse().unwrap();
        let py_version: VersionNumber = "3.7.8".parse().unwrap();
        let enable = vec!["QtCore".to_string(), "QtWidgets".to_string()];
        let disabled = vec!["PyQt_SSL".to_string()];

        let build = SipInstall {
            project: PYQT5_PROJECT,
            enable: Some(enable.as_slice()),
            disabled_features: Some(disabled.as_slice()),
        };

        let out = reconfigure_pyproject(PYPROJECT, &config(&sip_version, &py_version, &build))
            .unwrap();
        let doc: toml::Table = toml::from_str(&out).unwrap();

        let project = &doc["tool"]["sip"]["project"];
        assert_eq!(project["py-platform"].as_str(), Some("linux"));
        assert_eq!(project["py-minor-version"].as_integer(), Some(7));
        assert_eq!(project["target-dir"].as_str(), Some("/s/lib/python3.7/site-packages"));
        assert_eq!(project["confirm-license"].as_bool(), Some(true));
        assert_eq!(project["tools"].as_bool(), Some(false));
        assert_eq!(project["tag-prefix"].as_str(), Some("Qt"));

        let bindings = doc["tool"]["sip"]["bindings"].as_table().unwrap();
        assert_eq!(bindings.len(), 3);
        for name in ["QtCore", "QtGui", "QtWidgets"] {
            assert_eq!(bindings[name]["static"].as_bool(), Some(true));
            assert_eq!(
                bindings[name]["disabled-features"].as_array().unwrap()[0].as_str(),
                Some("PyQt_SSL")
            );
        }
        assert_eq!(bindings["QtCore"]["qmake-QT"][0].as_str(), Some("-gui"));

        // Formatting and comments outside the changed values survive.
        assert!(out.starts_with("# Specify the build system.\n"));
    }

    #[test]
    fn test_reconfigure_pyproject_without_sections() {
        let sip_version: VersionNumber = "12.8.1".parse().unwrap();
        let py_version: VersionNumber = "3.7.8".parse().unwrap();
        let enable = vec!["QtCore".to_string()];

        let build = SipInstall {
            enable: Some(enable.as_slice()),
            ..Default::default()
        };

        let out = reconfigure_pyproject("", &config(&sip_version, &py_version, &build)).unwrap();
        let doc: toml::Table = toml::from_str(&out).unwrap();

        assert_eq!(doc["tool"]["sip"]["project"]["py-major-version"].as_integer(), Some(3));
        assert_eq!(doc["tool"]["sip"]["bindings"]["QtCore"]["static"].as_bool(), Some(true));
    }

    #[test]
    fn test_reconfigure_pyproject_for_add_on() {
        let sip_version: VersionNumber = "12.8.1".parse().unwrap();
        let py_version: VersionNumber = "3.7.8".parse().unwrap();
        let build = SipInstall::default();

        let out = reconfigure_pyproject(PYPROJECT, &config(&sip_version, &py_version, &build))
            .unwrap();
        let doc: toml::Table = toml::from_str(&out).unwrap();

        let project = doc["tool"]["sip"]["project"].as_table().unwrap();
        assert!(!project.contains_key("enable"));
        assert!(!project.contains_key("confirm-license"));

        let core = doc["tool"]["sip"]["bindings"]["QtCore"].as_table().unwrap();
        assert_eq!(core["static"].as_bool(), Some(true));
        assert!(!core.contains_key("disabled-features"));
    }

    #[test]
    fn test_reconfigure_pyproject_checks_sip() {
        let py_version: VersionNumber = "3.7.8".parse().unwrap();

        let old_abi: VersionNumber = "12.7.2".parse().unwrap();
        let build = SipInstall::default();
        let err = reconfigure_pyproject(PYPROJECT, &config(&old_abi, &py_version, &build))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "PyQt5: sip module ABI v12.8.0 is required but v12.7.2 is provided"
        );

        let sip_version: VersionNumber = "12.8.1".parse().unwrap();
        let mut other = config(&sip_version, &py_version, &build);
        other.sip_module = "sip";
        let err = reconfigure_pyproject(PYPROJECT, &other).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PyQt5: sip module 'PyQt5.sip' is required but 'sip' is provided"
        );
    }

    #[test]
    fn test_version_str_and_platform() {
        assert_eq!(version_str(&"5.12.0".parse().unwrap()), "5.12");
        assert_eq!(version_str(&"5.15.2".parse().unwrap()), "5.15.2");
        assert_eq!(pyqt_platform(Platform::Android), "linux");
        assert_eq!(pyqt_platform(Platform::Ios), "darwin");
        assert_eq!(pyqt_platform(Platform::Windows), "win32");
    }

    #[test]
    fn test_installable_modules() {
        let modules = installable_modules();
        assert!(modules.contains(&"QtCore"));
        assert!(modules.contains(&"_QOpenGLFunctions_ES2"));
        assert!(!modules.contains(&"uic"));
        assert!(!modules.contains(&"PyQt5"));
    }

    #[test]
    fn test_provides() {
        let spec = "[Python]\nversion = \"3.7.8\"\n\
                    [SIP]\nversion = \"12.8.1\"\nmodule_name = \"PyQt5.sip\"\n\
                    [PyQt5]\nversion = \"5.15.2\"\n\
                    installed_modules = [\"QtCore\", \"QtWidgets\"]\n";
        let registry = builtin_registry();
        let spec = Specification::parse(Path::new("/tmp/sysroot.toml"), spec, &registry).unwrap();
        let sysroot = Sysroot::new(
            &spec,
            Architecture::Linux64,
            Architecture::Linux64,
            Some(Path::new("/tmp/sysroots")),
        )
        .unwrap();
        let pyqt = sysroot.context(sysroot.get_component("PyQt5").unwrap());

        let provides = PyQt5.provides(&pyqt).unwrap();
        let names: Vec<&str> = provides.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["PyQt5", "PyQt5.uic", "PyQt5.QtCore", "PyQt5.QtWidgets"]);

        let libs = &provides[2].1[0].kind.compiled().unwrap().libs;
        assert_eq!(
            libs[0],
            "-L/tmp/sysroots/sysroot-linux-64/lib/python3.7/site-packages/PyQt5"
        );

        assert_eq!(PyQt5.archive_name(&pyqt).as_deref(), Some("PyQt5-5.15.2.tar.gz"));
    }
}

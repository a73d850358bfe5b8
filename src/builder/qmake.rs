//! The application's qmake `.pro` file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::builder::emit::Fragment;
use crate::core::platform::{Architecture, Platform};
use crate::core::version::VersionNumber;

/// Sources that qmake handles with a variable other than `SOURCES`.
const SOURCE_VARIABLES: &[(&str, &str)] = &[
    (".asm", "MASMSOURCES"),
    (".h", "HEADERS"),
    (".java", "JAVASOURCES"),
    (".l", "LEXSOURCES"),
    (".pyx", "CYTHONSOURCES"),
    (".y", "YACCSOURCES"),
];

/// The values of every qmake variable, collected from the parts.
#[derive(Debug, Clone, Default)]
pub struct QmakeValues {
    pub inittab: BTreeSet<String>,
    pub defines: BTreeSet<String>,
    pub libs: BTreeSet<String>,
    pub includepath: BTreeSet<String>,
    pub sources: BTreeSet<String>,
    pub qmake_config: BTreeSet<String>,
    pub qmake_qt: BTreeSet<String>,
    pub qmake_cpp11: bool,
    pub bundled_libs: BTreeSet<PathBuf>,
    pub windows_dlls: BTreeSet<String>,
}

impl QmakeValues {
    pub fn add(&mut self, fragment: Fragment) {
        self.inittab.extend(fragment.inittab);
        self.defines.extend(fragment.defines);
        self.libs.extend(fragment.libs);
        self.includepath.extend(fragment.includepath);
        self.sources.extend(fragment.sources);
        self.qmake_config.extend(fragment.qmake_config);
        self.qmake_qt.extend(fragment.qmake_qt);
        self.qmake_cpp11 |= fragment.qmake_cpp11;
        self.windows_dlls.extend(fragment.windows_dlls);
    }
}

/// Everything about the application that the `.pro` file depends on.
#[derive(Debug, Clone)]
pub struct ProSettings<'a> {
    pub target: Architecture,
    pub python_version: &'a VersionNumber,
    /// The sysroot's target `lib` directory.
    pub lib_dir: &'a Path,
    pub is_console: bool,
    pub is_bundle: bool,
    pub frozen_main: bool,
    pub optimised: bool,
    /// The `.qrc` files, relative to the `resources` directory.
    pub resources: &'a [String],
    /// Project independent configuration appended before the application's.
    pub post_configuration: Option<&'a str>,
    pub qmake_configuration: &'a str,
}

/// Copy the DLLs an existing Windows installation needs next to the
/// executable after it is linked.
fn write_windows_dlls(
    out: &mut String,
    lib_dir: &Path,
    version: &VersionNumber,
    dlls: &BTreeSet<String>,
) {
    let mut names: Vec<String> = dlls.iter().map(|dll| format!("DLLs\\{}", dll)).collect();

    names.push(format!("python{}{}.dll", version.major, version.minor));
    names.push(format!("python{}.dll", version.major));
    names.push("vcruntime140.dll".to_string());
    if *version >= (3, 8) {
        names.push("vcruntime140_1.dll".to_string());
    }

    for name in names {
        out.push_str(&format!(
            "
PDY_DLL = {}\\{}
exists($$PDY_DLL) {{
    CONFIG(debug, debug|release) {{
        QMAKE_POST_LINK += $(COPY_FILE) $$shell_path($$PDY_DLL) $$shell_path($$OUT_PWD/debug) &
    }} else {{
        QMAKE_POST_LINK += $(COPY_FILE) $$shell_path($$PDY_DLL) $$shell_path($$OUT_PWD/release) &
    }}
}}
",
            lib_dir.display(),
            name
        ));
    }
}

fn write_values<'v>(out: &mut String, name: &str, values: impl IntoIterator<Item = &'v String>) {
    for value in values {
        let mut var = name;
        let mut value = value.as_str();

        if name == "SOURCES" {
            let other = SOURCE_VARIABLES.iter().find(|(ext, _)| value.ends_with(ext));
            if let Some((_, other)) = other {
                var = other;
            }
        } else if name == "LIBS" && value.starts_with("\"-framework") && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }

        out.push_str(&format!("{} += {}\n", var, value));
    }
}

/// The contents of `<app>.pro`.
pub fn write_pro(settings: &ProSettings<'_>, values: &QmakeValues) -> String {
    let platform = settings.target.platform();
    let mut out = String::new();

    out.push_str(&format!(
        "# Generated for {} and Python v{}.\n\n",
        settings.target, settings.python_version
    ));
    out.push_str("TEMPLATE = app\n\n");

    if !values.qmake_qt.is_empty() {
        let qt: Vec<&str> = values.qmake_qt.iter().map(String::as_str).collect();
        out.push_str(&format!("QT += {}\n", qt.join(" ")));
    }

    let mut config = vec!["warn_off"];
    if platform == Platform::Windows && settings.is_console {
        config.push("console");
    }
    if values.qmake_cpp11 {
        config.push("c++11");
    }
    out.push_str(&format!("CONFIG += {}\n", config.join(" ")));

    if platform == Platform::MacOs && !settings.is_bundle {
        out.push_str("CONFIG -= app_bundle\n");
    }

    if !values.qmake_config.is_empty() {
        let extra: Vec<&str> = values.qmake_config.iter().map(String::as_str).collect();
        out.push_str(&format!("CONFIG += {}\n", extra.join(" ")));
    }

    // Python v3.6 and later need C99. c++11 in CONFIG doesn't affect CFLAGS.
    if *settings.python_version >= (3, 6) && platform != Platform::Windows {
        out.push_str("\nQMAKE_CFLAGS += -std=c99\n");
    }

    out.push_str("\nRESOURCES = \\\n");
    let resources: Vec<String> = settings
        .resources
        .iter()
        .map(|name| format!("    resources/{}", name))
        .collect();
    out.push_str(&resources.join(" \\\n"));
    out.push('\n');

    let mut defines = Vec::new();
    let mut headers = vec![
        "pydeploy_version.h",
        "frozen_bootstrap.h",
        "frozen_bootstrap_external.h",
    ];
    if settings.frozen_main {
        defines.push("PYDEPLOY_FROZEN_MAIN");
        headers.push("frozen_main.h");
    }
    if settings.optimised {
        defines.push("PYDEPLOY_OPTIMIZED");
    }

    if !defines.is_empty() || !values.defines.is_empty() {
        out.push('\n');
        if !defines.is_empty() {
            out.push_str(&format!("DEFINES += {}\n", defines.join(" ")));
        }
        write_values(&mut out, "DEFINES", &values.defines);
    }

    if !values.includepath.is_empty() {
        out.push('\n');
        write_values(&mut out, "INCLUDEPATH", &values.includepath);
    }

    out.push_str("\nSOURCES = pydeploy_main.cpp pydeploy_start.cpp pdytools_module.cpp\n");
    write_values(&mut out, "SOURCES", &values.sources);

    out.push_str(&format!("\nHEADERS = {}\n", headers.join(" ")));

    if !values.libs.is_empty() {
        out.push('\n');
        write_values(&mut out, "LIBS", &values.libs);
    }

    if let Some(abi) = settings.target.android_abi() {
        out.push_str(&format!("\nANDROID_ABIS = {}\n", abi));

        if !values.bundled_libs.is_empty() {
            let libs: Vec<String> = values
                .bundled_libs
                .iter()
                .map(|lib| crate::util::fs::to_slash(lib))
                .collect();
            out.push_str(&format!("ANDROID_EXTRA_LIBS += {}\n", libs.join(" ")));
        }
    }

    if !values.windows_dlls.is_empty() {
        write_windows_dlls(
            &mut out,
            settings.lib_dir,
            settings.python_version,
            &values.windows_dlls,
        );
    }

    if let Some(post) = settings.post_configuration {
        out.push('\n');
        out.push_str(post);
        if !post.ends_with('\n') {
            out.push('\n');
        }
    }

    let qmake_configuration = settings.qmake_configuration.trim();
    if !qmake_configuration.is_empty() {
        out.push_str(&format!("\n{}\n", qmake_configuration));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings<'a>(
        target: Architecture,
        version: &'a VersionNumber,
        resources: &'a [String],
    ) -> ProSettings<'a> {
        ProSettings {
            target,
            python_version: version,
            lib_dir: Path::new("C:/sysroot/lib"),
            is_console: true,
            is_bundle: false,
            frozen_main: true,
            optimised: false,
            resources,
            post_configuration: None,
            qmake_configuration: "",
        }
    }

    #[test]
    fn test_values_are_sorted_and_unique() {
        let mut values = QmakeValues::default();
        values.add(Fragment {
            inittab: Some("zlib".to_string()),
            libs: vec!["-lz".to_string(), "-L/s/lib".to_string()],
            sources: vec!["/s/src/b.c".to_string(), "/s/src/a.h".to_string()],
            ..Fragment::default()
        });
        values.add(Fragment {
            libs: vec!["-lz".to_string(), "\"-framework Security\"".to_string()],
            qmake_qt: vec!["widgets".to_string(), "network".to_string()],
            qmake_cpp11: true,
            ..Fragment::default()
        });

        let version = VersionNumber::new(3, 7, 8);
        let resources = vec!["pydeploy.qrc".to_string()];
        let pro = write_pro(&settings(Architecture::Linux64, &version, &resources), &values);

        assert!(pro.starts_with("# Generated for linux-64 and Python v3.7.8.\n\nTEMPLATE = app\n"));
        assert!(pro.contains("QT += network widgets\n"));
        assert!(pro.contains("CONFIG += warn_off c++11\n"));
        assert!(pro.contains("QMAKE_CFLAGS += -std=c99\n"));
        assert!(pro.contains("RESOURCES = \\\n    resources/pydeploy.qrc\n"));
        assert!(pro.contains("DEFINES += PYDEPLOY_FROZEN_MAIN\n"));
        assert!(
            pro.contains("SOURCES += /s/src/b.c\nHEADERS += /s/src/a.h\n")
                || pro.contains("HEADERS += /s/src/a.h\nSOURCES += /s/src/b.c\n")
        );
        assert!(pro.contains(
            "HEADERS = pydeploy_version.h frozen_bootstrap.h frozen_bootstrap_external.h \
             frozen_main.h\n"
        ));
        assert!(pro.contains("LIBS += -framework Security\nLIBS += -L/s/lib\nLIBS += -lz\n"));
        assert_eq!(pro.matches("LIBS += -lz").count(), 1);
        assert!(!pro.contains("console"));
    }

    #[test]
    fn test_platform_specifics() {
        let values = QmakeValues::default();
        let version = VersionNumber::new(3, 7, 8);
        let resources = vec!["pydeploy0.qrc".to_string(), "pydeploy1.qrc".to_string()];

        let win = write_pro(&settings(Architecture::Win64, &version, &resources), &values);
        assert!(win.contains("CONFIG += warn_off console\n"));
        assert!(!win.contains("-std=c99"));
        assert!(win.contains("    resources/pydeploy0.qrc \\\n    resources/pydeploy1.qrc\n"));

        let mac = write_pro(&settings(Architecture::MacOs64, &version, &resources), &values);
        assert!(mac.contains("CONFIG -= app_bundle\n"));

        let android = write_pro(&settings(Architecture::Android64, &version, &resources), &values);
        assert!(android.contains("ANDROID_ABIS = arm64-v8a\n"));
    }

    #[test]
    fn test_windows_dlls() {
        let mut values = QmakeValues::default();
        values.add(Fragment {
            windows_dlls: vec!["_ssl.pyd".to_string(), "libssl-1_1.dll".to_string()],
            ..Fragment::default()
        });

        let version = VersionNumber::new(3, 8, 5);
        let resources = vec!["pydeploy.qrc".to_string()];
        let pro = write_pro(&settings(Architecture::Win64, &version, &resources), &values);

        for name in [
            "DLLs\\_ssl.pyd",
            "DLLs\\libssl-1_1.dll",
            "python38.dll",
            "python3.dll",
            "vcruntime140.dll",
            "vcruntime140_1.dll",
        ] {
            assert!(
                pro.contains(&format!("PDY_DLL = C:/sysroot/lib\\{}\n", name)),
                "{} is missing",
                name
            );
        }
        assert!(pro.contains("$$shell_path($$OUT_PWD/release) &\n"));

        // Nothing is copied when every module is compiled in.
        let settings = settings(Architecture::Win64, &version, &resources);
        let pro = write_pro(&settings, &QmakeValues::default());
        assert!(!pro.contains("PDY_DLL"));
    }

    #[test]
    fn test_extra_configuration() {
        let values = QmakeValues::default();
        let version = VersionNumber::new(3, 5, 10);
        let resources = vec!["pydeploy.qrc".to_string()];
        let mut settings = settings(Architecture::Linux64, &version, &resources);
        settings.optimised = true;
        settings.post_configuration = Some("linux: LIBS += -lutil");
        settings.qmake_configuration = "  QMAKE_LFLAGS += -static\n";

        let pro = write_pro(&settings, &values);
        assert!(!pro.contains("-std=c99"));
        assert!(pro.contains("DEFINES += PYDEPLOY_FROZEN_MAIN PYDEPLOY_OPTIMIZED\n"));
        assert!(pro.ends_with("\nlinux: LIBS += -lutil\n\nQMAKE_LFLAGS += -static\n"));
    }
}

//! The built-in component plugins.

pub mod openssl;
pub mod pyqt;
pub mod python;
pub mod qt;
pub mod sip;
pub mod zlib;

use crate::core::errors::DeployError;
use crate::core::version::VersionNumber;
use crate::sysroot::component::ComponentPlugin;
use crate::sysroot::specification::PluginRegistry;

/// A registry containing every built-in plugin.
pub fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();

    registry.register("OpenSSL", || Box::new(openssl::OpenSsl) as Box<dyn ComponentPlugin>);
    registry.register("PyQt5", || Box::new(pyqt::PyQt5) as Box<dyn ComponentPlugin>);
    registry.register("PyQtChart", || Box::new(pyqt::chart::PyQtChart) as Box<dyn ComponentPlugin>);
    registry.register("PyQtWebEngine", || {
        Box::new(pyqt::webengine::PyQtWebEngine) as Box<dyn ComponentPlugin>
    });
    registry.register("Python", || Box::new(python::Python) as Box<dyn ComponentPlugin>);
    registry.register("QScintilla", || {
        Box::new(pyqt::qscintilla::QScintilla) as Box<dyn ComponentPlugin>
    });
    registry.register("Qt", || Box::new(qt::Qt) as Box<dyn ComponentPlugin>);
    registry.register("SIP", || Box::new(sip::Sip) as Box<dyn ComponentPlugin>);
    registry.register("zlib", || Box::new(zlib::Zlib) as Box<dyn ComponentPlugin>);

    registry
}

/// Parse the version at the end of a line such as `#define X "1.2.11"`.
pub(crate) fn version_at_end(line: &str) -> Result<VersionNumber, DeployError> {
    let last = line.split_whitespace().last().unwrap_or_default();
    last.trim_matches('"').parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = builtin_registry();
        let names: Vec<&str> = registry.names().collect();

        assert_eq!(
            names,
            vec![
                "OpenSSL",
                "PyQt5",
                "PyQtChart",
                "PyQtWebEngine",
                "Python",
                "QScintilla",
                "Qt",
                "SIP",
                "zlib"
            ]
        );
    }

    #[test]
    fn test_version_at_end() {
        let version = version_at_end("#define ZLIB_VERSION \"1.2.11\"").unwrap();
        assert_eq!(version, VersionNumber::new(1, 2, 11));
    }
}

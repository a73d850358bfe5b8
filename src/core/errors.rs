//! Error types shared by the sysroot and build operations.
//!
//! Every failure is fatal to a run. The variants are grouped into four
//! kinds so that callers (and tests) can tell a malformed input from a bad
//! configuration, a failed external tool or an unobtainable archive.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::util::diagnostic::{sentence, Diagnostic};

/// The broad category of a [`DeployError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Configuration,
    ExternalTool,
    Download,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse error"),
            ErrorKind::Configuration => write!(f, "configuration error"),
            ErrorKind::ExternalTool => write!(f, "external tool error"),
            ErrorKind::Download => write!(f, "download error"),
        }
    }
}

/// An unrecoverable error.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("{message}")]
    Parse { message: String },

    #[error("{}", scoped_message(.component.as_deref(), .message))]
    Configuration {
        component: Option<String>,
        message: String,
        detail: Option<String>,
    },

    #[error("dependency cycle detected: {}", .cycle.join(" -> "))]
    DependencyCycle { cycle: Vec<String> },

    #[error("execution of '{program}' failed: {detail}")]
    ExternalTool { program: String, detail: String },

    #[error("{}", scoped_message(.component.as_deref(), &format!("unable to find '{}'", .archive)))]
    Download {
        component: Option<String>,
        archive: String,
        attempts: Vec<String>,
    },
}

/// Format a message, optionally scoped to the component that raised it.
fn scoped_message(component: Option<&str>, message: &str) -> String {
    match component {
        Some(name) => format!("{}: {}", name, message),
        None => message.to_string(),
    }
}

impl DeployError {
    /// A parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        DeployError::Parse {
            message: message.into(),
        }
    }

    /// A configuration error not attributable to a component.
    pub fn config(message: impl Into<String>) -> Self {
        DeployError::Configuration {
            component: None,
            message: message.into(),
            detail: None,
        }
    }

    /// A configuration error raised on behalf of a component.
    pub fn component(component: impl Into<String>, message: impl Into<String>) -> Self {
        DeployError::Configuration {
            component: Some(component.into()),
            message: message.into(),
            detail: None,
        }
    }

    /// Attach detail shown only in verbose mode.
    pub fn with_detail(mut self, text: impl Into<String>) -> Self {
        if let DeployError::Configuration { detail, .. } = &mut self {
            *detail = Some(text.into());
        }
        self
    }

    /// The category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeployError::Parse { .. } => ErrorKind::Parse,
            DeployError::Configuration { .. } | DeployError::DependencyCycle { .. } => {
                ErrorKind::Configuration
            }
            DeployError::ExternalTool { .. } => ErrorKind::ExternalTool,
            DeployError::Download { .. } => ErrorKind::Download,
        }
    }

    /// The message as shown to the user.
    ///
    /// Messages raised on behalf of a component read `Name: message.`, all
    /// others are capitalised and end with a period.
    pub fn user_message(&self) -> String {
        match self {
            DeployError::Configuration {
                component: Some(_), ..
            }
            | DeployError::Download {
                component: Some(_), ..
            } => format!("{}.", self),
            _ => sentence(&self.to_string()),
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self, verbose: bool) -> Diagnostic {
        let mut diag = Diagnostic::error(self.user_message());

        match self {
            DeployError::Configuration {
                detail: Some(detail),
                ..
            } if verbose => {
                diag = diag.with_context(detail.clone());
            }
            DeployError::DependencyCycle { .. } => {
                diag = diag.with_suggestion(
                    "Break the cycle by removing a component from a `preinstalls` list",
                );
            }
            DeployError::ExternalTool { program, .. } => {
                diag = diag.with_suggestion(format!(
                    "Check that `{}` is installed and on PATH",
                    program
                ));
            }
            DeployError::Download { attempts, .. } => {
                if verbose {
                    for attempt in attempts {
                        diag = diag.with_context(format!("tried {}", attempt));
                    }
                }
                diag = diag
                    .with_suggestion("Pass a directory containing the archive with `--source-dir`")
                    .with_suggestion("Check your network connection");
            }
            _ => {}
        }

        diag
    }
}

/// A TOML syntax error in a specification or project file.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("{message}")]
#[diagnostic(code(pydeploy::toml_syntax))]
pub struct TomlSyntaxError {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl TomlSyntaxError {
    /// Build from a `toml` deserialization error and the text that failed.
    pub fn new(name: &str, contents: &str, err: &toml::de::Error) -> Self {
        TomlSyntaxError {
            message: format!("{}: {}", name, err.message()),
            src: NamedSource::new(name, contents.to_string()),
            span: err.span().map(SourceSpan::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_scoped_message() {
        let err = DeployError::component("zlib", "'version' has not been specified");
        assert_eq!(err.to_string(), "zlib: 'version' has not been specified");
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_user_message() {
        let err = DeployError::component("zlib", "v1.2.3 is unsupported");
        assert_eq!(err.user_message(), "zlib: v1.2.3 is unsupported.");

        let err = DeployError::config("unknown component 'Qt'");
        assert_eq!(err.user_message(), "Unknown component 'Qt'.");
    }

    #[test]
    fn test_cycle_is_configuration_error() {
        let err = DeployError::DependencyCycle {
            cycle: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "dependency cycle detected: A -> B -> A");
    }

    #[test]
    fn test_detail_only_in_verbose_diagnostic() {
        let err = DeployError::config("invalid 'Manifest' file").with_detail("line 3");

        assert!(!err.to_diagnostic(false).format(false).contains("line 3"));
        assert!(err.to_diagnostic(true).format(false).contains("line 3"));
    }
}

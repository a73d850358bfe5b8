//! User-facing diagnostic messages.
//!
//! A diagnostic carries the primary message, optional context lines and a
//! numbered list of things the user can try.

use std::fmt;
use std::path::PathBuf;

use miette::{GraphicalReportHandler, GraphicalTheme};

use crate::core::errors::{DeployError, TomlSyntaxError};

/// Common suggestion messages.
pub mod suggestions {
    /// The sysroot for a target has not been built yet.
    pub const NO_SYSROOT: &str = "Run `pydeploy-sysroot` for the target first";

    /// Rerun with more output.
    pub const VERBOSE: &str = "Rerun with `--verbose` for more details";

    /// A project is missing its runtime files.
    pub const RUNTIME_DIR: &str =
        "Pass the directory holding the bootstrap scripts with `--runtime-dir`";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
    /// The file the diagnostic refers to, if any.
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    fn new(severity: Severity, message: String) -> Self {
        Diagnostic {
            message,
            severity,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Error, message.into())
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Warning, message.into())
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity = match (color, self.severity) {
            (true, Severity::Error) => "\x1b[1;31merror\x1b[0m".to_string(),
            (true, Severity::Warning) => "\x1b[1;33mwarning\x1b[0m".to_string(),
            (false, severity) => severity.to_string(),
        };

        output.push_str(&format!("{}: {}\n", severity, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  → {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Capitalise the first character and make sure there is a trailing period.
pub fn sentence(message: &str) -> String {
    let mut chars = message.chars();
    let mut text = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };

    if !text.ends_with('.') {
        text.push('.');
    }

    text
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

/// Turn an error returned by an operation into a diagnostic.
///
/// Returns `None` for TOML syntax errors, which are rendered by miette with
/// the offending source instead.
pub fn from_error(err: &anyhow::Error, verbose: bool) -> Option<Diagnostic> {
    if err.downcast_ref::<TomlSyntaxError>().is_some() {
        return None;
    }

    let (mut diag, primary) = match err.downcast_ref::<DeployError>() {
        Some(deploy) => (deploy.to_diagnostic(verbose), deploy.to_string()),
        None => (Diagnostic::error(sentence(&err.to_string())), err.to_string()),
    };

    for cause in err.chain().map(|cause| cause.to_string()) {
        if cause != primary {
            diag = diag.with_context(cause);
        }
    }

    let message = diag.message.to_lowercase();
    if message.contains("the sysroot directory") {
        diag = diag.with_suggestion(suggestions::NO_SYSROOT);
    } else if message.contains("the runtime directory") || message.contains("bootstrap script") {
        diag = diag.with_suggestion(suggestions::RUNTIME_DIR);
    }

    if !verbose {
        diag = diag.with_suggestion(suggestions::VERBOSE);
    }

    Some(diag)
}

/// Report an error on stderr.
pub fn report(err: &anyhow::Error, verbose: bool, color: bool) {
    if let Some(syntax) = err.downcast_ref::<TomlSyntaxError>() {
        let handler = if color {
            GraphicalReportHandler::new()
        } else {
            GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        };

        let mut out = String::new();
        if handler.render_report(&mut out, syntax).is_ok() {
            eprint!("{}", out);
            return;
        }
    }

    match from_error(err, verbose) {
        Some(diag) => emit(&diag, color),
        None => eprintln!("error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("zlib: unable to find 'zlib-1.2.11.tar.gz'")
            .with_context("tried /src/zlib-1.2.11.tar.gz")
            .with_suggestion("Pass a directory containing the archive with `--source-dir`");

        let output = diag.format(false);
        assert!(output.starts_with("error: zlib: unable to find 'zlib-1.2.11.tar.gz'\n"));
        assert!(output.contains("tried /src/zlib-1.2.11.tar.gz"));
        assert!(output.contains("help: consider:"));
        assert!(output.contains("1. Pass a directory"));
    }

    #[test]
    fn test_from_error() {
        let err =
            anyhow::Error::from(DeployError::config("the sysroot directory '/s' does not exist"));
        let diag = from_error(&err, false).unwrap();
        assert_eq!(diag.message, "The sysroot directory '/s' does not exist.");
        assert_eq!(diag.suggestions, [suggestions::NO_SYSROOT, suggestions::VERBOSE]);

        let err = anyhow::anyhow!("disk full").context("failed to write demo.pro");
        let diag = from_error(&err, true).unwrap();
        assert_eq!(diag.message, "Failed to write demo.pro.");
        assert_eq!(diag.context, ["disk full"]);
        assert!(diag.suggestions.is_empty());
    }

    #[test]
    fn test_toml_errors_are_not_diagnostics() {
        let contents = "version = \n";
        let toml_err = toml::from_str::<toml::Table>(contents).unwrap_err();
        let err = anyhow::Error::from(TomlSyntaxError::new("demo.toml", contents, &toml_err));
        assert!(from_error(&err, false).is_none());
    }

    #[test]
    fn test_sentence() {
        assert_eq!(sentence("unknown option(s): a, b"), "Unknown option(s): a, b.");
        assert_eq!(sentence("Already done."), "Already done.");
        assert_eq!(sentence(""), "");
    }
}

//! Target scopes.
//!
//! A scope is a `|` separated list of platform or architecture names, each
//! optionally negated with a leading `!`. It matches a target when any of
//! its terms does. An empty scope matches everything.
//!
//! Values are scoped by prefixing them with a scope and a `#`, for example
//! `win#-lzlib` or `!win#-lz`.

use std::fmt;
use std::str::FromStr;

use crate::core::errors::DeployError;
use crate::core::platform::{Architecture, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Platform(Platform),
    Architecture(Architecture),
}

impl Token {
    fn matches(&self, target: Architecture) -> bool {
        match self {
            Token::Platform(platform) => target.platform() == *platform,
            Token::Architecture(arch) => target == *arch,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Platform(p) => write!(f, "{}", p),
            Token::Architecture(a) => write!(f, "{}", a),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Term {
    negated: bool,
    token: Token,
}

/// A parsed scope expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    terms: Vec<Term>,
}

impl Scope {
    /// The scope that matches every target.
    pub fn any() -> Self {
        Scope::default()
    }

    /// Build a scope from a list of platform names.
    pub fn from_platforms<S: AsRef<str>>(names: &[S]) -> Result<Self, DeployError> {
        let terms = names
            .iter()
            .map(|name| {
                Ok(Term {
                    negated: false,
                    token: Token::Platform(name.as_ref().trim().parse()?),
                })
            })
            .collect::<Result<Vec<_>, DeployError>>()?;

        Ok(Scope { terms })
    }

    /// Check if the scope places no restriction on the target.
    pub fn is_any(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if the scope covers a target.
    pub fn matches(&self, target: Architecture) -> bool {
        self.is_any()
            || self
                .terms
                .iter()
                .any(|term| term.token.matches(target) != term.negated)
    }
}

impl FromStr for Scope {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Ok(Scope::any());
        }

        let terms = compact
            .split('|')
            .map(|term| {
                let (negated, name) = match term.strip_prefix('!') {
                    Some(name) => (true, name),
                    None => (false, term),
                };

                let token = if name.contains('-') {
                    Token::Architecture(parse_architecture(name)?)
                } else {
                    Token::Platform(name.parse()?)
                };

                Ok(Term { negated, token })
            })
            .collect::<Result<Vec<_>, DeployError>>()?;

        Ok(Scope { terms })
    }
}

/// Parse an exact architecture name, without the platform fallback.
fn parse_architecture(name: &str) -> Result<Architecture, DeployError> {
    Architecture::ALL
        .into_iter()
        .find(|a| a.name() == name)
        .ok_or_else(|| DeployError::config(format!("'{}' is not a supported architecture", name)))
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            if term.negated {
                write!(f, "!")?;
            }
            write!(f, "{}", term.token)?;
        }
        Ok(())
    }
}

/// A value that only applies to targets within a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedValue {
    pub scope: Scope,
    pub value: String,
}

impl ScopedValue {
    /// Parse `scope#value`. A value without a `#` applies everywhere.
    pub fn parse(text: &str) -> Result<Self, DeployError> {
        match text.split_once('#') {
            Some((scope, value)) => Ok(ScopedValue {
                scope: scope.parse()?,
                value: value.to_string(),
            }),
            None => Ok(ScopedValue {
                scope: Scope::any(),
                value: text.to_string(),
            }),
        }
    }

    /// Return the value if it applies to the target.
    pub fn resolve(&self, target: Architecture) -> Option<&str> {
        self.scope.matches(target).then_some(self.value.as_str())
    }
}

/// Parse a list of scoped values and keep those that apply to the target.
pub fn resolve_all<S: AsRef<str>>(
    values: &[S],
    target: Architecture,
) -> Result<Vec<String>, DeployError> {
    let mut resolved = Vec::new();

    for value in values {
        let scoped = ScopedValue::parse(value.as_ref())?;
        if let Some(value) = scoped.resolve(target) {
            resolved.push(value.to_string());
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(s: &str) -> Scope {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_scope_matches_everything() {
        for arch in Architecture::ALL {
            assert!(scope("").matches(arch));
            assert!(scope("  ").matches(arch));
        }
    }

    #[test]
    fn test_platform_or() {
        let apple = scope("ios | macos");
        assert!(apple.matches(Architecture::Ios64));
        assert!(apple.matches(Architecture::MacOs64));
        assert!(!apple.matches(Architecture::Linux64));
    }

    #[test]
    fn test_negated_architecture() {
        let not_win32 = scope("!win-32");
        assert!(!not_win32.matches(Architecture::Win32));
        assert!(not_win32.matches(Architecture::Win64));
        assert!(not_win32.matches(Architecture::Linux64));
    }

    #[test]
    fn test_unknown_token_is_configuration_error() {
        let err = "beos".parse::<Scope>().unwrap_err();
        assert_eq!(err.to_string(), "'beos' is not a supported platform");

        let err = "linux-128".parse::<Scope>().unwrap_err();
        assert_eq!(err.to_string(), "'linux-128' is not a supported architecture");
    }

    #[test]
    fn test_platform_list() {
        let platforms = Scope::from_platforms(&["android", "ios"]).unwrap();
        assert!(platforms.matches(Architecture::Android64));
        assert!(!platforms.matches(Architecture::Win64));
        assert_eq!(platforms.to_string(), "android|ios");
    }

    #[test]
    fn test_scoped_value() {
        let lib = ScopedValue::parse("win#-lzlib").unwrap();
        assert_eq!(lib.resolve(Architecture::Win64), Some("-lzlib"));
        assert_eq!(lib.resolve(Architecture::Linux64), None);

        let plain = ScopedValue::parse("-lz").unwrap();
        assert_eq!(plain.resolve(Architecture::Ios64), Some("-lz"));

        // Only the first '#' separates the scope.
        let define = ScopedValue::parse("linux#HASH=#").unwrap();
        assert_eq!(define.resolve(Architecture::Linux32), Some("HASH=#"));
    }

    #[test]
    fn test_resolve_all() {
        let libs = resolve_all(&["win#-lzlib", "!win#-lz"], Architecture::MacOs64).unwrap();
        assert_eq!(libs, vec!["-lz"]);
    }
}

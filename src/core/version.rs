//! Release version numbers.
//!
//! A [`VersionNumber`] is `major.minor.patch` followed by an optional
//! free-form suffix (`3.7.8`, `1.1.1g`, `5.15.0rc1`). Ordering between two
//! full version numbers compares the numeric parts and then the suffix as a
//! string.
//!
//! Comparisons against a [`VersionPrefix`] only look at as many fields as the
//! prefix carries, so `3.7.8 == 3` and `3.7.8 == (3, 7)` both hold while
//! `3.7.8 > (3, 6)`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::errors::DeployError;

/// A parsed version number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub suffix: String,
}

impl VersionNumber {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionNumber {
            major,
            minor,
            patch,
            suffix: String::new(),
        }
    }

    /// Attach a suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Decode an integer of the form `0xMMmmpp`.
    pub fn from_hex(encoded: u32) -> Self {
        VersionNumber::new((encoded >> 16) & 0xff, (encoded >> 8) & 0xff, encoded & 0xff)
    }

    /// Encode as `0xMMmmpp`, ignoring any suffix.
    pub fn to_hex(&self) -> u32 {
        ((self.major & 0xff) << 16) | ((self.minor & 0xff) << 8) | (self.patch & 0xff)
    }

    /// Compare against a prefix of variable precision.
    pub fn compare_prefix(&self, prefix: &VersionPrefix) -> Ordering {
        let ordering = self.major.cmp(&prefix.major);
        if ordering != Ordering::Equal {
            return ordering;
        }

        let Some(minor) = prefix.minor else {
            return Ordering::Equal;
        };
        let ordering = self.minor.cmp(&minor);
        if ordering != Ordering::Equal {
            return ordering;
        }

        let Some(patch) = prefix.patch else {
            return Ordering::Equal;
        };
        let ordering = self.patch.cmp(&patch);
        if ordering != Ordering::Equal {
            return ordering;
        }

        match prefix.suffix {
            Some(ref suffix) => self.suffix.as_str().cmp(suffix.as_str()),
            None => Ordering::Equal,
        }
    }
}

impl FromStr for VersionNumber {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.splitn(3, '.').collect();

        // The last part is a leading integer followed by any suffix.
        let last = parts.pop().unwrap_or_default();
        let digits = last
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(last.len());
        let (int_part, suffix) = last.split_at(digits);

        if !int_part.is_empty() {
            parts.push(int_part);
        } else if parts.is_empty() {
            return Err(DeployError::parse(format!("'{}' has no major number", s)));
        }

        while parts.len() < 3 {
            parts.push("0");
        }

        let field = |index: usize, name: &str| {
            parts[index].parse::<u32>().map_err(|_| {
                DeployError::parse(format!("the {} number of '{}' is invalid", name, s))
            })
        };

        Ok(VersionNumber {
            major: field(0, "major")?,
            minor: field(1, "minor")?,
            patch: field(2, "patch")?,
            suffix: suffix.to_string(),
        })
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}{}", self.major, self.minor, self.patch, self.suffix)
    }
}

impl From<(u32, u32, u32)> for VersionNumber {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        VersionNumber::new(major, minor, patch)
    }
}

/// The right hand side of a variable precision comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPrefix {
    pub major: u32,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    pub suffix: Option<String>,
}

impl From<u32> for VersionPrefix {
    fn from(major: u32) -> Self {
        VersionPrefix {
            major,
            minor: None,
            patch: None,
            suffix: None,
        }
    }
}

impl From<(u32, u32)> for VersionPrefix {
    fn from((major, minor): (u32, u32)) -> Self {
        VersionPrefix {
            minor: Some(minor),
            ..VersionPrefix::from(major)
        }
    }
}

impl From<(u32, u32, u32)> for VersionPrefix {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        VersionPrefix {
            patch: Some(patch),
            ..VersionPrefix::from((major, minor))
        }
    }
}

impl From<(u32, u32, u32, &str)> for VersionPrefix {
    fn from((major, minor, patch, suffix): (u32, u32, u32, &str)) -> Self {
        VersionPrefix {
            suffix: Some(suffix.to_string()),
            ..VersionPrefix::from((major, minor, patch))
        }
    }
}

impl PartialEq<VersionPrefix> for VersionNumber {
    fn eq(&self, other: &VersionPrefix) -> bool {
        self.compare_prefix(other) == Ordering::Equal
    }
}

impl PartialOrd<VersionPrefix> for VersionNumber {
    fn partial_cmp(&self, other: &VersionPrefix) -> Option<Ordering> {
        Some(self.compare_prefix(other))
    }
}

/// Allow `version >= (1, 1, 1)` without building a [`VersionPrefix`].
macro_rules! compare_with {
    ($($ty:ty),*) => {$(
        impl PartialEq<$ty> for VersionNumber {
            fn eq(&self, other: &$ty) -> bool {
                self.compare_prefix(&VersionPrefix::from(*other)) == Ordering::Equal
            }
        }

        impl PartialOrd<$ty> for VersionNumber {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                Some(self.compare_prefix(&VersionPrefix::from(*other)))
            }
        }
    )*};
}

compare_with!(u32, (u32, u32), (u32, u32, u32));

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionNumber {
        s.parse().unwrap()
    }

    fn p(prefix: impl Into<VersionPrefix>) -> VersionPrefix {
        prefix.into()
    }

    #[test]
    fn test_parse_full() {
        let version = v("3.7.8");
        assert_eq!(version, VersionNumber::new(3, 7, 8));
        assert_eq!(version.to_string(), "3.7.8");
    }

    #[test]
    fn test_parse_suffix_and_padding() {
        assert_eq!(v("1.1.1g"), VersionNumber::new(1, 1, 1).with_suffix("g"));
        assert_eq!(v("5.15rc1"), VersionNumber::new(5, 15, 0).with_suffix("rc1"));
        assert_eq!(v("3").to_string(), "3.0.0");
        assert_eq!(v("3.x"), VersionNumber::new(3, 0, 0).with_suffix("x"));
    }

    #[test]
    fn test_parse_errors() {
        let err = "abc".parse::<VersionNumber>().unwrap_err();
        assert_eq!(err.to_string(), "'abc' has no major number");

        let err = "a.1".parse::<VersionNumber>().unwrap_err();
        assert_eq!(err.to_string(), "the major number of 'a.1' is invalid");

        let err = "3..4".parse::<VersionNumber>().unwrap_err();
        assert_eq!(err.to_string(), "the minor number of '3..4' is invalid");

        let err = "3.7.99999999999".parse::<VersionNumber>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "the patch number of '3.7.99999999999' is invalid"
        );
    }

    #[test]
    fn test_normalised_round_trip() {
        for text in ["3.7.8", "1.1.1g", "5.15.0rc1", "0.0.0"] {
            assert_eq!(v(text).to_string(), text);
        }
    }

    #[test]
    fn test_hex() {
        assert_eq!(VersionNumber::from_hex(0x030708), VersionNumber::new(3, 7, 8));
        assert_eq!(v("5.12.3").to_hex(), 0x050c03);
    }

    #[test]
    fn test_prefix_precision() {
        let version = v("3.7.8");

        assert!(version == p(3));
        assert!(version == p((3, 7)));
        assert!(version > p((3, 6)));
        assert!(version < p((3, 8)));
        assert!(version >= p((3, 7, 8)));
        assert!(version < p((4, 0)));
        assert!(version != p((3, 7, 8, "rc1")));
    }

    #[test]
    fn test_tuple_comparisons() {
        let version = v("1.1.1g");

        assert!(version == (1, 1, 1));
        assert!(version >= (1, 1));
        assert!(version < (1, 2));
        assert!(version > 0);
    }

    #[test]
    fn test_full_ordering() {
        assert!(v("3.7.8") > v("3.7.2"));
        assert!(v("3.10.0") > v("3.9.9"));
        assert!(v("1.1.1g") > v("1.1.1"));
        assert_eq!(v("3.7"), v("3.7.0"));
    }
}

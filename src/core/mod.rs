//! Core data structures.
//!
//! This module contains the foundational types shared by the sysroot
//! builder and the application builder:
//! - Version numbers and target scopes
//! - The supported platforms and architectures
//! - Parts and component options
//! - The error taxonomy

pub mod errors;
pub mod option;
pub mod part;
pub mod platform;
pub mod scope;
pub mod version;

pub use errors::{DeployError, ErrorKind};
pub use option::{ComponentOption, OptionType, OptionValues};
pub use part::{Part, PartKind, PartName, ResolvedPart};
pub use platform::{Architecture, Platform};
pub use scope::{Scope, ScopedValue};
pub use version::{VersionNumber, VersionPrefix};

//! pydeploy - Deploy Python applications as single executables
//!
//! This crate provides the library behind `pydeploy-sysroot`, which
//! builds target-specific sysroots of Python, Qt and friends, and
//! `pydeploy-build`, which turns an application project into a qmake
//! build directory against such a sysroot.

pub mod builder;
pub mod core;
pub mod ops;
pub mod plugins;
pub mod sysroot;
pub mod util;

/// Test utilities for pydeploy unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides fake component plugins that install nothing.
#[cfg(test)]
pub mod test_support;

pub use builder::{project::Project, Builder};
pub use core::errors::DeployError;
pub use sysroot::Sysroot;
pub use util::context::GlobalContext;

//! High-level operations.
//!
//! This module contains the implementation of the pydeploy commands.

pub mod pydeploy_build;
pub mod pydeploy_sysroot;

pub use pydeploy_build::{pydeploy_build, BuildOptions};
pub use pydeploy_sysroot::{
    open_sysroot, pydeploy_sysroot, SysrootLocation, SysrootOptions, SysrootOutcome,
};

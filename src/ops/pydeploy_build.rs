//! Implementation of `pydeploy-build`.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::builder::project::Project;
use crate::builder::{BuildSettings, Builder};
use crate::core::errors::DeployError;
use crate::ops::pydeploy_sysroot::{open_sysroot, SysrootLocation};
use crate::util::GlobalContext;

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// The project file.
    pub project: PathBuf,

    /// Build directory (default = build-<target> next to the project)
    pub build_dir: Option<PathBuf>,

    /// Keep the contents of the build directory
    pub no_clean: bool,

    /// Optimisation level used when freezing (0, 1 or 2)
    pub opt: Option<u8>,

    /// Number of .qrc files
    pub resources: Option<usize>,

    pub python: Option<PathBuf>,
    pub qmake: Option<PathBuf>,

    /// Bootstrap scripts and C++ runtime sources
    pub runtime_dir: Option<PathBuf>,

    /// Target architecture (default = host)
    pub target: Option<String>,
}

/// Turn the command line and configuration into build settings.
fn settings(ctx: &GlobalContext, project: &Project, opts: &BuildOptions) -> Result<BuildSettings> {
    let config = &ctx.config().build;
    let defaults = BuildSettings::default();

    let opt = opts.opt.or(config.opt).unwrap_or(defaults.opt);
    if opt > 2 {
        return Err(DeployError::config(format!(
            "the optimisation level must be 0, 1 or 2, not {}",
            opt
        ))
        .into());
    }

    let resources = opts.resources.or(config.resources).unwrap_or(defaults.resources);
    if resources < 1 {
        return Err(DeployError::config("the number of resources must be at least 1").into());
    }

    let runtime_dir = match opts.runtime_dir.as_ref().or(config.runtime_dir.as_ref()) {
        Some(dir) => ctx.cwd().join(dir),
        None => project.project_path("runtime"),
    };

    Ok(BuildSettings {
        build_dir: opts.build_dir.as_ref().map(|dir| ctx.cwd().join(dir)),
        no_clean: opts.no_clean,
        opt,
        resources,
        runtime_dir,
    })
}

/// Generate the build directory of an application.
pub fn pydeploy_build(ctx: &GlobalContext, opts: &BuildOptions) -> Result<PathBuf> {
    let project = Project::load(&ctx.cwd().join(&opts.project))?;
    let settings = settings(ctx, &project, opts)?;

    let specification = project.sysroot_file();
    let sysroots_dir = match &ctx.config().sysroot.sysroots_dir {
        Some(dir) => ctx.cwd().join(dir),
        None => project.sysroots_dir(),
    };

    let mut sysroot = open_sysroot(
        ctx,
        &SysrootLocation {
            specification: &specification,
            target: opts.target.as_deref(),
            sysroots_dir: Some(&sysroots_dir),
            python: opts.python.as_deref(),
            qmake: opts.qmake.as_deref(),
        },
    )?;
    sysroot.verify()?;

    let build_dir = Builder::new(&sysroot, &project).build(&settings)?;
    info!("the application can now be built in {}", build_dir.display());

    Ok(build_dir)
}

//! Implementation of `pydeploy-sysroot`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::core::platform::Architecture;
use crate::plugins::builtin_registry;
use crate::sysroot::specification::Specification;
use crate::sysroot::{InstallOptions, PluginRegistry, Sysroot};
use crate::util::GlobalContext;

/// Options for the sysroot command.
#[derive(Debug, Clone, Default)]
pub struct SysrootOptions {
    /// The specification file.
    pub specification: PathBuf,

    /// Components to install (empty = all)
    pub components: Vec<String>,

    /// Empty the sysroot first
    pub force: bool,

    /// Keep the temporary build directory
    pub no_clean: bool,

    /// Show the options of the components instead of installing them
    pub show_options: bool,

    /// Verify the specification without installing anything
    pub verify_only: bool,

    pub python: Option<PathBuf>,
    pub qmake: Option<PathBuf>,
    pub source_dirs: Vec<PathBuf>,
    pub sysroots_dir: Option<PathBuf>,

    /// Target architecture (default = host)
    pub target: Option<String>,
}

/// What the sysroot command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SysrootOutcome {
    /// The options table to show.
    Options(String),
    Verified,
    Installed(PathBuf),
}

/// Where a sysroot is and which host tools it uses.
#[derive(Debug, Clone)]
pub struct SysrootLocation<'a> {
    pub specification: &'a Path,
    pub target: Option<&'a str>,
    pub sysroots_dir: Option<&'a Path>,
    pub python: Option<&'a Path>,
    pub qmake: Option<&'a Path>,
}

/// Load a specification and create the sysroot for a target. Settings not
/// given explicitly are taken from the configuration.
pub fn open_sysroot(ctx: &GlobalContext, location: &SysrootLocation<'_>) -> Result<Sysroot> {
    open_sysroot_with(ctx, location, &builtin_registry())
}

fn open_sysroot_with(
    ctx: &GlobalContext,
    location: &SysrootLocation<'_>,
    registry: &PluginRegistry,
) -> Result<Sysroot> {
    let config = &ctx.config().sysroot;
    let resolve = |path: &Path| ctx.cwd().join(path);

    let specification = Specification::load(&resolve(location.specification), registry)?;

    let host = Architecture::host()?;
    let target = Architecture::from_name_or_host(location.target)?;

    let sysroots_dir = location
        .sysroots_dir
        .or(config.sysroots_dir.as_deref())
        .map(resolve);
    let python = location.python.or(config.python.as_deref()).map(resolve);
    let qmake = location.qmake.or(config.qmake.as_deref()).map(resolve);

    Ok(Sysroot::new(&specification, host, target, sysroots_dir.as_deref())?
        .with_host_python(python)
        .with_host_qmake(qmake))
}

/// Show options, verify or install the components of a specification.
pub fn pydeploy_sysroot(ctx: &GlobalContext, opts: &SysrootOptions) -> Result<SysrootOutcome> {
    run_with(ctx, opts, &builtin_registry())
}

fn run_with(
    ctx: &GlobalContext,
    opts: &SysrootOptions,
    registry: &PluginRegistry,
) -> Result<SysrootOutcome> {
    let mut sysroot = open_sysroot_with(
        ctx,
        &SysrootLocation {
            specification: &opts.specification,
            target: opts.target.as_deref(),
            sysroots_dir: opts.sysroots_dir.as_deref(),
            python: opts.python.as_deref(),
            qmake: opts.qmake.as_deref(),
        },
        registry,
    )?;

    if opts.show_options {
        return Ok(SysrootOutcome::Options(sysroot.show_options(&opts.components)?));
    }

    if opts.verify_only {
        sysroot.verify()?;
        return Ok(SysrootOutcome::Verified);
    }

    let source_dirs = if opts.source_dirs.is_empty() {
        &ctx.config().sysroot.source_dirs
    } else {
        &opts.source_dirs
    };

    let options = InstallOptions {
        source_dirs: source_dirs.iter().map(|dir| ctx.cwd().join(dir)).collect(),
        cache_dir: ctx.cache_dir(),
        offline: ctx.is_offline(),
        no_clean: opts.no_clean,
        force: opts.force,
    };

    sysroot.install_components(&opts.components, &options)?;
    info!("sysroot is up to date in {}", sysroot.sysroot_dir.display());

    Ok(SysrootOutcome::Installed(sysroot.sysroot_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fake_registry, installed_log};
    use crate::util::Config;
    use tempfile::TempDir;

    fn context(tmp: &TempDir) -> GlobalContext {
        GlobalContext::with_cwd(tmp.path().to_path_buf()).with_config(Config::default())
    }

    #[test]
    fn test_show_options() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("sysroot.toml"), "[zlib]\nversion = '1.2.11'\n").unwrap();

        let opts = SysrootOptions {
            specification: PathBuf::from("sysroot.toml"),
            show_options: true,
            ..SysrootOptions::default()
        };

        match pydeploy_sysroot(&context(&tmp), &opts).unwrap() {
            SysrootOutcome::Options(table) => assert!(table.contains("zlib")),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_install_components() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("sysroot.toml"),
            "[zlib]\nversion = '1.2.11'\n\n[Python]\nversion = '3.7.8'\n",
        )
        .unwrap();

        let opts = SysrootOptions {
            specification: PathBuf::from("sysroot.toml"),
            sysroots_dir: Some(PathBuf::from("roots")),
            ..SysrootOptions::default()
        };

        let mut config = Config::default();
        config.net.offline = true;
        config.net.cache_dir = Some(PathBuf::from("cache"));
        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf()).with_config(config);
        let sysroot_dir = match run_with(&ctx, &opts, &fake_registry()).unwrap() {
            SysrootOutcome::Installed(dir) => dir,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert!(sysroot_dir.starts_with(tmp.path().join("roots")));
        assert_eq!(installed_log(&sysroot_dir), vec!["zlib", "Python"]);
        assert!(sysroot_dir.join("Manifest").is_file());

        // Everything is up to date the second time.
        run_with(&ctx, &opts, &fake_registry()).unwrap();
        assert_eq!(installed_log(&sysroot_dir).len(), 2);
    }

    #[test]
    fn test_missing_specification() {
        let tmp = TempDir::new().unwrap();
        let opts = SysrootOptions {
            specification: PathBuf::from("missing.toml"),
            ..SysrootOptions::default()
        };

        assert!(pydeploy_sysroot(&context(&tmp), &opts).is_err());
    }

    #[test]
    fn test_sysroot_location_from_config() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("sysroot.toml"), "[zlib]\nversion = '1.2.11'\n").unwrap();

        let mut config = Config::default();
        config.sysroot.sysroots_dir = Some(PathBuf::from("roots"));
        config.sysroot.python = Some(PathBuf::from("/opt/python3.7"));
        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf()).with_config(config);

        let location = SysrootLocation {
            specification: Path::new("sysroot.toml"),
            target: None,
            sysroots_dir: None,
            python: None,
            qmake: None,
        };
        let sysroot = open_sysroot(&ctx, &location).unwrap();
        assert!(sysroot.sysroot_dir.starts_with(tmp.path().join("roots")));
        assert_eq!(sysroot.host_python_override(), Some(Path::new("/opt/python3.7")));

        // The command line wins.
        let location = SysrootLocation {
            sysroots_dir: Some(Path::new("other")),
            ..location
        };
        let sysroot = open_sysroot(&ctx, &location).unwrap();
        assert!(sysroot.sysroot_dir.starts_with(tmp.path().join("other")));
    }
}

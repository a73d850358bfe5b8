//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Build a target-specific sysroot from a specification file
#[derive(Parser)]
#[command(name = "pydeploy-sysroot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The sysroot specification file
    pub specification: PathBuf,

    /// Install (or show the options of) this component only
    #[arg(short, long = "component", value_name = "NAME")]
    pub components: Vec<String>,

    /// Empty the sysroot and install every component from scratch
    #[arg(long)]
    pub force: bool,

    /// Keep the temporary build directory
    #[arg(long)]
    pub no_clean: bool,

    /// Show the options of the components and exit
    #[arg(long, conflicts_with = "verify")]
    pub options: bool,

    /// Verify the specification and the target environment and exit
    #[arg(long)]
    pub verify: bool,

    /// The host Python interpreter to use
    #[arg(long, value_name = "EXE", env = "PYDEPLOY_PYTHON")]
    pub python: Option<PathBuf>,

    /// The host qmake to use
    #[arg(long, value_name = "EXE")]
    pub qmake: Option<PathBuf>,

    /// A directory containing source archives (may be repeated)
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dirs: Vec<PathBuf>,

    /// The directory the sysroot is created in
    #[arg(long, value_name = "DIR")]
    pub sysroots_dir: Option<PathBuf>,

    /// The target architecture (default = host)
    #[arg(long, value_name = "ARCH")]
    pub target: Option<String>,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

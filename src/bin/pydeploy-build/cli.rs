//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Generate the build directory of a Python application
#[derive(Parser)]
#[command(name = "pydeploy-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The project file
    pub project: PathBuf,

    /// The build directory (default = build-<target> next to the project)
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Keep the contents of an existing build directory
    #[arg(long)]
    pub no_clean: bool,

    /// The optimisation level used when freezing Python code
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=2))]
    pub opt: Option<u8>,

    /// The number of resource files to split the application's modules over
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub resources: Option<u64>,

    /// The host Python interpreter to use
    #[arg(long, value_name = "EXE", env = "PYDEPLOY_PYTHON")]
    pub python: Option<PathBuf>,

    /// The host qmake to use
    #[arg(long, value_name = "EXE")]
    pub qmake: Option<PathBuf>,

    /// The directory containing the bootstrap scripts and runtime sources
    #[arg(long, value_name = "DIR")]
    pub runtime_dir: Option<PathBuf>,

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

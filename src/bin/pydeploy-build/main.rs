//! pydeploy-build - Generate the build directory of a Python application

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use pydeploy::ops::{pydeploy_build, BuildOptions};
use pydeploy::util::diagnostic::report;
use pydeploy::util::GlobalContext;

fn main() {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("pydeploy=debug")
    } else if cli.quiet {
        EnvFilter::new("pydeploy=warn")
    } else {
        EnvFilter::new("pydeploy=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let verbose = cli.verbose;
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        report(&e, verbose, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    let mut ctx = GlobalContext::new()?;
    ctx.set_verbose(cli.verbose);
    ctx.set_color(color);

    let opts = BuildOptions {
        project: cli.project,
        build_dir: cli.build_dir,
        no_clean: cli.no_clean,
        opt: cli.opt,
        resources: cli.resources.map(|n| n as usize),
        python: cli.python,
        qmake: cli.qmake,
        runtime_dir: cli.runtime_dir,
        target: cli.target,
    };

    let build_dir = pydeploy_build(&ctx, &opts)?;
    println!("{}", build_dir.display());

    Ok(())
}

//! pydeploy-sysroot - Build sysroots for deploying Python applications

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use pydeploy::ops::{pydeploy_sysroot, SysrootOptions, SysrootOutcome};
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

    let opts = SysrootOptions {
        specification: cli.specification,
        components: cli.components,
        force: cli.force,
        no_clean: cli.no_clean,
        show_options: cli.options,
        verify_only: cli.verify,
        python: cli.python,
        qmake: cli.qmake,
        source_dirs: cli.source_dirs,
        sysroots_dir: cli.sysroots_dir,
        target: cli.target,
    };

    match pydeploy_sysroot(&ctx, &opts)? {
        SysrootOutcome::Options(table) => print!("{}", table),
        SysrootOutcome::Verified => println!("The sysroot specification is valid."),
        SysrootOutcome::Installed(_) => {}
    }

    Ok(())
}

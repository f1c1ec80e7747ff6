use std::io;
use std::process;

use clap::Parser;
use harness::{HarnessError, Options, SpaceKind, StageHarness};
use memory::{AddressSpace, HostSpace, SimulatedSpace};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // stdout carries the prompt protocol; diagnostics stay on stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let options = match Options::try_parse() {
        Ok(options) => options,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_tracing();

    let space: Box<dyn AddressSpace> = match options.space {
        SpaceKind::Host => Box::new(HostSpace::new()),
        SpaceKind::Simulated => Box::new(SimulatedSpace::new()),
    };
    tracing::debug!(?space, "address space ready");

    let mut harness = StageHarness::new(space, io::stdin().lock(), io::stdout().lock())
        .verbose(options.verbose);
    harness.banner(process::id())?;

    match harness.run() {
        Ok(_) => Ok(()),
        Err(HarnessError::AssertionFailed { round, assertion }) => {
            eprintln!("level42: round {}: Assertion `{}' failed.", round, assertion);
            process::abort();
        }
        Err(e) => Err(e.into()),
    }
}

mod fixture;

use anyhow::Result;
use stategraph::{PlanWriter, runner};
use std::io;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // The desired-state graph goes to stdout as a JSON plan; the apply
    // engine picks it up from there. A declaration failure surfaces as a
    // nonzero exit status carrying the first error.
    let stdout = io::stdout();
    let mut engine = PlanWriter::new(stdout.lock());
    let summary = runner::run(&mut engine, fixture::build)?;

    log::info!(
        "declared {} resources ({} dependency edges)",
        summary.resources,
        summary.edges
    );
    Ok(())
}

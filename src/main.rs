/*!
 * Partition Simulator - Main Entry Point
 *
 * Interactive fixed-partition memory simulator:
 * - Memory setup from PARTSIM_* variables or prompts
 * - First-fit process placement with random sizes
 * - Partition, process, and memory map views
 */

use anyhow::{Context, Result};
use partition_sim::cli::{setup_engine, Menu, RandomSizes};
use partition_sim::monitoring::session_span;
use partition_sim::{init_tracing, SimulatorConfig};
use std::io::{self, Write};
use tracing::info;

fn main() -> Result<()> {
    let config = SimulatorConfig::from_env().context("invalid PARTSIM_* configuration")?;
    init_tracing(config.trace_json);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "=========================================================")?;
    writeln!(output, "  FIXED-PARTITION MEMORY SIMULATOR")?;
    writeln!(output, "  Placement: first fit")?;
    writeln!(output, "=========================================================")?;

    let mut engine = setup_engine(&config, &mut input, &mut output)?;

    let span = session_span(engine.id());
    let _entered = span.enter();
    info!(
        partitions = engine.partition_count(),
        seeded = config.seed.is_some(),
        "Session started"
    );

    Menu::new(
        &mut engine,
        &mut input,
        &mut output,
        RandomSizes::from_seed(config.seed),
    )
    .with_row_width(config.memory_row_width)
    .run()?;

    let stats = engine.stats();
    info!(
        active = stats.active_processes,
        terminated = stats.terminated_processes,
        "Session finished"
    );
    writeln!(output, "\n>>> Resources released. Goodbye.")?;
    Ok(())
}

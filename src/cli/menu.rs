/*!
 * Interactive Menu
 * Prompt-driven front end over one allocation engine
 */

use super::render;
use super::sizes::SizeSource;
use crate::core::config::SimulatorConfig;
use crate::core::errors::SimulatorError;
use crate::core::types::{Pid, Size};
use crate::engine::AllocationEngine;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateProcess,
    CloseProcess,
    ShowProcesses,
    ShowPartitions,
    ShowMemory,
    ShowTerminated,
    ShowStats,
    DumpJson,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::CreateProcess),
            "2" => Ok(MenuChoice::CloseProcess),
            "3" => Ok(MenuChoice::ShowProcesses),
            "4" => Ok(MenuChoice::ShowPartitions),
            "5" => Ok(MenuChoice::ShowMemory),
            "6" => Ok(MenuChoice::ShowTerminated),
            "7" => Ok(MenuChoice::ShowStats),
            "8" => Ok(MenuChoice::DumpJson),
            "0" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid option: {}", other)),
        }
    }
}

const MENU: &str = "
================ MAIN MENU ================
  1. Create process
  2. Close process
  3. Show process table
  4. Show partition table
  5. Show memory map
  6. Show terminated processes
  7. Show statistics
  8. Dump state as JSON
  0. Exit
===========================================
Select an option: ";

/// Read one line, `None` on EOF
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

/// Prompt until a positive integer is entered that satisfies `check`
fn prompt_size<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    check: impl Fn(Size) -> Option<String>,
) -> Result<Size>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("input closed during setup");
        };
        match line.parse::<Size>() {
            Ok(value) if value > 0 => match check(value) {
                None => return Ok(value),
                Some(message) => writeln!(output, "Error: {}", message)?,
            },
            _ => writeln!(output, "Error: the size must be a positive integer.")?,
        }
    }
}

/// Build an engine from configured sizes, prompting for any that are missing
pub fn setup_engine<R, W>(
    config: &SimulatorConfig,
    input: &mut R,
    output: &mut W,
) -> Result<AllocationEngine>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n=== MEMORY SETUP ===")?;

    let total = match config.total_memory_kb {
        Some(total) => total,
        None => prompt_size(input, output, "Total memory size (KB): ", |_| None)?,
    };
    let partition = match config.partition_kb {
        Some(partition) => partition,
        None => prompt_size(input, output, "Partition size (KB): ", |value| {
            (value > total).then(|| "the partition size cannot exceed total memory.".to_string())
        })?,
    };

    let engine = match AllocationEngine::configure(total, partition) {
        Ok(engine) => engine,
        Err(err) => {
            let err = SimulatorError::from(err);
            render::render_error(output, &err)?;
            return Err(err).with_context(|| {
                format!("cannot configure {} KB with {} KB partitions", total, partition)
            });
        }
    };

    writeln!(
        output,
        ">>> Created {} partitions of {} KB each.",
        engine.partition_count(),
        engine.partition_kb()
    )?;
    let unaddressable = engine.partitions().unaddressable_kb();
    if unaddressable > 0 {
        writeln!(output, ">>> {} KB past the last partition are unusable.", unaddressable)?;
    }
    Ok(engine)
}

/// Menu loop over one engine
pub struct Menu<'a, R, W, S> {
    engine: &'a mut AllocationEngine,
    input: R,
    output: W,
    sizes: S,
    row_width: usize,
}

impl<'a, R, W, S> Menu<'a, R, W, S>
where
    R: BufRead,
    W: Write,
    S: SizeSource,
{
    pub fn new(engine: &'a mut AllocationEngine, input: R, output: W, sizes: S) -> Self {
        Self {
            engine,
            input,
            output,
            sizes,
            row_width: crate::core::limits::DEFAULT_MEMORY_ROW_WIDTH,
        }
    }

    pub fn with_row_width(mut self, row_width: usize) -> Self {
        self.row_width = row_width;
        self
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                writeln!(self.output, "\nInput closed, exiting...")?;
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "\nExiting...")?;
                    return Ok(());
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => {
                    debug!(%err, "Invalid menu input");
                    writeln!(self.output, "\nInvalid option. Try again.")?;
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::CreateProcess => self.create_process()?,
            MenuChoice::CloseProcess => self.close_process()?,
            MenuChoice::ShowProcesses => {
                render::render_processes(&mut self.output, &self.engine.list_active_processes())?
            }
            MenuChoice::ShowPartitions => {
                render::render_partitions(&mut self.output, &self.engine.list_partitions())?
            }
            MenuChoice::ShowMemory => render::render_memory(
                &mut self.output,
                self.engine.memory().cells(),
                self.row_width,
            )?,
            MenuChoice::ShowTerminated => render::render_terminated(
                &mut self.output,
                &self.engine.list_terminated_processes(),
            )?,
            MenuChoice::ShowStats => render::render_stats(&mut self.output, &self.engine.stats())?,
            MenuChoice::DumpJson => {
                serde_json::to_writer_pretty(&mut self.output, &self.engine.snapshot())
                    .context("failed to serialize engine state")?;
                writeln!(self.output)?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn create_process(&mut self) -> Result<()> {
        let size = self.sizes.next_size(self.engine.partition_kb());

        writeln!(self.output, "\n--- CREATING PROCESS ---")?;
        writeln!(self.output, "Process ID: {}", self.engine.next_pid())?;
        writeln!(self.output, "Required size: {} KB", size)?;

        match self.engine.create_process(size) {
            Ok(report) => render::render_placement(&mut self.output, &report)?,
            Err(err) => {
                render::render_error(&mut self.output, &err.into())?;
                writeln!(self.output, "       The process could not be created.")?;
            }
        }
        Ok(())
    }

    fn close_process(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- CLOSE PROCESS ---")?;
        write!(self.output, "Process ID to close: ")?;
        self.output.flush()?;

        let Some(line) = read_line(&mut self.input)? else {
            return Ok(());
        };
        let Ok(pid) = line.parse::<Pid>() else {
            writeln!(self.output, "ERROR: '{}' is not a valid process ID.", line)?;
            return Ok(());
        };

        match self.engine.close_process(pid) {
            Ok(report) => render::render_release(&mut self.output, &report)?,
            Err(err) => render::render_error(&mut self.output, &err.into())?,
        }
        Ok(())
    }
}

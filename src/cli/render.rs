/*!
 * Table Rendering
 * Plain-text views of engine state
 */

use crate::core::errors::SimulatorError;
use crate::core::limits::{EMPTY_COLUMN, FREE_CELL_LABEL};
use crate::engine::{EngineStats, PlacementReport, ReleaseReport};
use crate::memory::{Cell, PartitionView};
use crate::process::Process;
use miette::Diagnostic;
use std::io::{self, Write};

pub fn render_processes<W: Write>(out: &mut W, processes: &[Process]) -> io::Result<()> {
    writeln!(out, "\n========== ACTIVE PROCESSES ==========")?;
    write_process_rows(out, processes, "No active processes.")?;
    writeln!(out, "======================================")
}

pub fn render_terminated<W: Write>(out: &mut W, processes: &[Process]) -> io::Result<()> {
    writeln!(out, "\n========== TERMINATED PROCESSES ==========")?;
    write_process_rows(out, processes, "No terminated processes.")?;
    if !processes.is_empty() {
        writeln!(out, "\nTotal terminated processes: {}", processes.len())?;
    }
    writeln!(out, "==========================================")
}

fn write_process_rows<W: Write>(out: &mut W, processes: &[Process], empty: &str) -> io::Result<()> {
    writeln!(out, "{:<10} {:<15} {:<20}", "ID", "Size (KB)", "Start Address")?;
    writeln!(out, "{}", "-".repeat(46))?;

    if processes.is_empty() {
        return writeln!(out, "{}", empty);
    }
    for p in processes {
        writeln!(
            out,
            "{:<10} {:<15} {:<20}",
            p.id, p.required_size, p.assigned_address
        )?;
    }
    Ok(())
}

pub fn render_partitions<W: Write>(out: &mut W, partitions: &[PartitionView]) -> io::Result<()> {
    writeln!(out, "\n==================== PARTITION TABLE ====================")?;
    writeln!(
        out,
        "{:<8} {:<10} {:<14} {:<10} {:<10} {:<12}",
        "Part", "State", "Start (KB)", "Size (KB)", "Process", "Frag. (%)"
    )?;
    writeln!(out, "{}", "-".repeat(69))?;

    for p in partitions {
        let state = if p.occupied { "Occupied" } else { "Free" };
        let occupant = p
            .occupant
            .map_or_else(|| EMPTY_COLUMN.to_string(), |pid| pid.to_string());
        let fragmentation = p
            .fragmentation_pct
            .map_or_else(|| EMPTY_COLUMN.to_string(), |pct| format!("{:.2}", pct));

        writeln!(
            out,
            "{:<8} {:<10} {:<14} {:<10} {:<10} {:<12}",
            p.id, state, p.start_address, p.size, occupant, fragmentation
        )?;
    }
    writeln!(out, "=========================================================")
}

/// Memory map in rows of `row_width` cells
pub fn render_memory<W: Write>(out: &mut W, cells: &[Cell], row_width: usize) -> io::Result<()> {
    writeln!(out, "\n========== MEMORY MAP ==========")?;
    writeln!(out, "Legend: {} = free, [P<n>] = process n", FREE_CELL_LABEL)?;
    writeln!(out, "--------------------------------")?;

    for row in cells.chunks(row_width.max(1)) {
        let line: Vec<String> = row.iter().map(cell_label).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    writeln!(out, "================================")
}

fn cell_label(cell: &Cell) -> String {
    match cell {
        Cell::Free => FREE_CELL_LABEL.to_string(),
        Cell::Owned(pid) => format!("[P{}]", pid),
    }
}

pub fn render_stats<W: Write>(out: &mut W, stats: &EngineStats) -> io::Result<()> {
    writeln!(out, "\n========== STATISTICS ==========")?;
    writeln!(out, "Total memory:           {} KB", stats.total_memory_kb)?;
    writeln!(out, "Partition size:         {} KB", stats.partition_kb)?;
    writeln!(
        out,
        "Partitions:             {} ({} occupied, {} free)",
        stats.partition_count, stats.occupied_partitions, stats.free_partitions
    )?;
    writeln!(out, "Unaddressable memory:   {} KB", stats.unaddressable_kb)?;
    writeln!(
        out,
        "Used memory:            {} KB ({:.2}%)",
        stats.used_kb, stats.usage_percentage
    )?;
    writeln!(out, "Internal fragmentation: {} KB", stats.wasted_kb)?;
    writeln!(
        out,
        "Average fragmentation:  {:.2}%",
        stats.average_fragmentation_pct
    )?;
    writeln!(
        out,
        "Processes:              {} active, {} terminated",
        stats.active_processes, stats.terminated_processes
    )?;
    writeln!(out, "================================")
}

pub fn render_placement<W: Write>(out: &mut W, report: &PlacementReport) -> io::Result<()> {
    writeln!(out, ">>> PROCESS {} CREATED <<<", report.process_id)?;
    writeln!(out, "    Size: {} KB", report.required_size)?;
    writeln!(out, "    Partition: {}", report.partition_id)?;
    writeln!(out, "    Start address: {}", report.start_address)?;
    writeln!(
        out,
        "    Internal fragmentation: {:.2}%",
        report.fragmentation_pct
    )
}

pub fn render_release<W: Write>(out: &mut W, report: &ReleaseReport) -> io::Result<()> {
    writeln!(out, ">>> PROCESS {} CLOSED <<<", report.process.id)?;
    writeln!(out, "    Partition {} released.", report.partition_id)
}

/// Error line followed by the diagnostic help, if any
pub fn render_error<W: Write>(out: &mut W, err: &SimulatorError) -> io::Result<()> {
    writeln!(out, "ERROR: {}", err)?;
    if let Some(help) = err.help() {
        writeln!(out, "       help: {}", help)?;
    }
    Ok(())
}

/*!
 * Terminated Log
 * Append-only history of closed processes
 */

use super::types::Process;
use crate::core::types::Pid;

/// Closed processes in closing order
///
/// Records are never mutated once appended.
#[derive(Debug, Clone, Default)]
pub struct TerminatedLog {
    entries: Vec<Process>,
}

impl TerminatedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, process: Process) {
        self.entries.push(process);
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.entries.iter().any(|p| p.id == pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

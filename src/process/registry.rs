/*!
 * Process Registry
 * Active processes in insertion order
 */

use super::types::Process;
use crate::core::types::Pid;

/// Insertion-ordered set of active processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process, keeping insertion order
    pub fn insert(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Remove the process with matching ID
    ///
    /// Absence is a normal outcome and yields `None`.
    pub fn remove(&mut self, pid: Pid) -> Option<Process> {
        let index = self.processes.iter().position(|p| p.id == pid)?;
        Some(self.processes.remove(index))
    }

    pub fn find(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == pid)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.find(pid).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

/*!
 * Process Module
 * Active process registry and terminated history
 */

pub mod registry;
pub mod terminated;
pub mod types;

// Re-export for convenience
pub use registry::ProcessRegistry;
pub use terminated::TerminatedLog;
pub use types::{Process, ProcessState};

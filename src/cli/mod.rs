/*!
 * CLI Module
 * Interactive front end: setup prompts, menu loop, size sources, rendering
 */

pub mod menu;
pub mod render;
pub mod sizes;

pub use menu::{setup_engine, Menu, MenuChoice};
pub use sizes::{FixedSizes, RandomSizes, SizeSource};

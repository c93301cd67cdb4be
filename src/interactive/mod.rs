//! Interactive menu loop
//!
//! Drives the add / summary / update-budget menu over a [`Console`], which
//! wraps stdin and stdout in production and in-memory buffers in tests.

pub mod console;
pub mod menu;
pub mod session;

pub use console::{stdio, Console};
pub use menu::{format_menu, MenuChoice};
pub use session::{resolve_budget, run, run_interactive, Session};

//! CLI command handlers, one file per command.

mod check;
mod split;

pub use check::run_check;
pub use split::run_split;

//! # CLI Behavior
//!
//! This is **one possible UI client** for learnshelf, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `learnshelf` with no arguments defaults to `learnshelf list`:
//! browsing the library is the common case.
//!
//! ## Addressing Resources
//!
//! Lists number resources `1..n`, newest first. Those numbers (and ranges
//! such as `2-4`, or full UUIDs) are what `view`, `edit`, `progress` and
//! `delete` take. Numbers refer to the unfiltered list, so `list --level
//! advanced` shows the same numbers a plain `list` would.
//!
//! ## Output
//!
//! Human-readable output goes to stdout. `--json` on `list`, `view` and
//! `stats` prints the structured result instead. Logs go to stderr and are
//! controlled by `-v`, `-q` and `LEARNSHELF_LOG`.
//!
//! ## Module Structure
//!
//! - `commands`: Tracing setup, context wiring and per-command handlers
//! - `render`: Output formatting (lists, detail views, stats, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;

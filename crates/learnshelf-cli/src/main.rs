//! # learnshelf CLI
//!
//! learnshelf ships with a terminal client, but the binary is intentionally
//! thin: the CLI lives in `src/cli/`, while this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/learnshelf/`: Core library with UI-agnostic business logic
//! - `crates/learnshelf-cli/`: This CLI tool, depends on the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/learnshelf-cli/src/cli/)                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with console styles (render.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/learnshelf/src/api.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI is responsible for **all** user-facing concerns: argument parsing,
//! logging setup, context initialization, dispatch, error reporting and
//! rendering.
//!
//! ## Testing Approach
//!
//! - Argument parsing is tested against `clap` directly in `setup.rs`.
//! - Rendering is tested by feeding canned `CmdResult` values to `render.rs`.
//! - `tests/cli_e2e.rs` runs the binary against a temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

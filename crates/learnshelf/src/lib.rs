//! # learnshelf Architecture
//!
//! learnshelf is a **UI-agnostic learning-resource library**: users keep the
//! links and files they learn from, classify them by category, level,
//! priority and status, track progress, search and filter them, and see
//! aggregate statistics. The terminal client in `learnshelf-cli` is one
//! possible front-end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (learnshelf-cli)                                  │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, holds the Session             │
//! │  - Normalizes inputs (selector strings, category names)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! │  - Uses the Filter & Stats engine (filter.rs, stats.rs)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Filter & Stats Engine
//!
//! [`filter_resources`] and [`compute_stats`] are pure functions over
//! in-memory resources. Every listing reloads from the store and recomputes
//! both; there is no cache to invalidate.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the caller decides whether
//! and where they are shown.
//!
//! ## Module Overview
//!
//! - [`model`]: Resource, Category and the classification enums
//! - [`draft`]: Validated create/update requests
//! - [`filter`]: [`FilterSelection`] and [`filter_resources`]
//! - [`stats`]: [`ResourceStats`] and [`compute_stats`]
//! - [`index`]: Display indexes and selector parsing
//! - [`session`]: The injected user identity
//! - [`store`]: Storage abstraction and backends
//! - [`commands`]: One module per operation
//! - [`api`]: The facade UIs talk to
//! - [`config`] / [`init`]: Configuration and context setup

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod index;
pub mod init;
pub mod model;
pub mod session;
pub mod stats;
pub mod store;

pub use filter::{filter_resources, FilterSelection};
pub use stats::{compute_stats, ResourceStats};

//! # Deckid Architecture
//!
//! Deckid keeps a **dense, per-group ordinal** inside a text label on records
//! (`Math@00001`, `Math@00002`, ...). It is a library first; the bundled CLI is
//! one client of it, standing in for the application that owns the records.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store and config         │
//! │  - Host hooks: OnRecordCreate, OnSessionStart               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves names and positions, builds CmdResult messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Ordinal Core (label.rs, ordinal/, view.rs)                 │
//! │  - Parse/format labels, next index, swap, sweep, reconcile  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Labels
//!
//! A label is `<group>@<index>`, the index zero-padded to five digits. The
//! label is the only place the ordinal lives: there is no separate position
//! column. Records without the label field are never touched.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types.
//! It never prints and never exits. Diagnostics go through `tracing`; whoever
//! embeds the library decides whether to install a subscriber.
//!
//! ## Testing Strategy
//!
//! 1. **Ordinal core and commands**: unit tests next to the code, on the
//!    `InMemoryStore` fixtures in `store::memory::fixtures`.
//! 2. **FileStore**: integration tests in `tests/` on a temp directory.
//! 3. **CLI**: end-to-end tests in `tests/` running the binary with
//!    `DECKID_HOME` pointed at a temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and host hooks
//! - [`commands`]: One module per user-facing operation
//! - [`label`]: Label parsing and formatting
//! - [`ordinal`]: Index discovery, swap, sweep and reconcile
//! - [`view`]: Ordered snapshots with move up/down
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Groups, records and fields
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod label;
pub mod model;
pub mod ordinal;
pub mod store;
pub mod view;

//! # Gradebook Architecture
//!
//! Gradebook is a **UI-agnostic student record library** with a terminal menu as its
//! first client. Everything from [`api`] inward works on plain Rust values and knows
//! nothing about stdin, stdout or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu loop, prompts, renders   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns typed Result / Option values                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, queries and aggregates                       │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - InMemoryStore (the only backend; records are volatile)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Invariants
//!
//! - Roll numbers are unique under case-insensitive comparison.
//! - Every record carries exactly five marks, each in `[0, 100]`.
//! - `total`, `average` and `grade` always agree with the current marks. The average
//!   is rounded to two decimals *before* the grade is looked up.
//! - `add` and `update` either fully apply or leave the store untouched.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business rules against
//!    [`store::memory::InMemoryStore`]. Most tests live here.
//! 2. **API** (`api.rs`): dispatch tests.
//! 3. **CLI** (`cli/`): menu scripts fed through an in-memory reader, and render
//!    output checked with colors disabled.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: Core data types (`StudentRecord`, `Marks`, `Subject`, `Grade`)
//! - [`validation`]: Pure raw-input validation used by the commands and the menu
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;

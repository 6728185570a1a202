//! # Ward Architecture
//!
//! Ward is an in-memory patient registry. It is a library first: the `ward`
//! binary is one client of it, and the only place that touches a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, input validation, record rendering   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into records and messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - PatientTree (binary search tree), InMemoryStore (BTreeMap)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The ordered store
//!
//! Patients are keyed by a unique integer id and kept in an unbalanced binary
//! search tree. Listings and searches walk the tree in order, so every result
//! comes back sorted by id. The tree is never rebalanced: inserting ids in
//! sorted order produces a list-shaped tree and linear-time operations.
//!
//! Duplicate ids and unknown ids are reported as values
//! ([`error::WardError::DuplicateKey`], [`error::WardError::NotFound`]) and
//! leave the store untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Patient` and `PatientUpdate`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Strategist backend.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, and typed CRUD
//! operations for every entity store plus the publish transition and the
//! dashboard aggregation query.

pub mod database;
pub mod migrations;
pub mod queries;

pub use database::Database;

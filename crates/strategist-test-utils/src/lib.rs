// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the Strategist workspace.
//!
//! Provides [`MockGateway`], a scripted [`strategist_core::AiGateway`]
//! implementation, and [`temp_database`] for isolated SQLite fixtures.

pub mod mock_gateway;

pub use mock_gateway::MockGateway;

use strategist_storage::Database;

/// Open an isolated temp-directory database for one test.
///
/// The returned TempDir must stay alive for the duration of the test;
/// dropping it removes the database file.
pub async fn temp_database() -> (Database, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("strategist-test.db");
    let db = Database::open(db_path.to_str().expect("utf-8 temp path"))
        .await
        .expect("open test database");
    (db, dir)
}

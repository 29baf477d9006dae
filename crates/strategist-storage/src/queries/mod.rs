// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for CRUD operations on the entity stores.

pub mod analytics;
pub mod content;
pub mod dashboard;
pub mod ideas;
pub mod pillars;
pub mod platforms;
pub mod profile;
pub mod subtasks;
pub mod tasks;

/// Parse a stored enum column back into its closed Rust enum.
///
/// Stored values are written through the enum's Display impl, so a parse
/// failure means the column was tampered with outside the application.
pub(crate) fn parse_enum<T: std::str::FromStr>(
    column: usize,
    value: String,
) -> Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            format!("unrecognized enum value `{value}`").into(),
        )
    })
}

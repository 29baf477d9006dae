// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST API surface for the Strategist backend.
//!
//! Routes are thin adapters: deserialize form-lenient input, call the
//! matching storage query (or the AI gateway), and map
//! [`strategist_core::StrategistError`] onto HTTP statuses.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState, ServerConfig};

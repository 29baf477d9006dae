// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Strategist backend.
//!
//! This crate provides the error taxonomy, domain entity types, request
//! input structs with form-lenient deserialization, and the AI gateway
//! trait used throughout the Strategist workspace.

pub mod de;
pub mod error;
pub mod inputs;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export key items at crate root for ergonomic imports.
pub use error::StrategistError;
pub use traits::AiGateway;
pub use types::{
    AnalyticsRecord, ContentIdea, ContentItem, ContentPillar, ContentSubtask, DashboardSummary,
    GeneratedIdea, Platform, PlatformRef, Profile, Task,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _config = StrategistError::Config("test".into());
        let _validation = StrategistError::validation("title", "must not be empty");
        let _not_found = StrategistError::not_found("platform", 7);
        let _storage = StrategistError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _gateway = StrategistError::gateway("unreachable");
        let _timeout = StrategistError::Timeout {
            duration: std::time::Duration::from_secs(60),
        };
        let _internal = StrategistError::Internal("test".into());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = StrategistError::validation("pillar_name", "must not be empty");
        assert_eq!(err.to_string(), "invalid pillar_name: must not be empty");
    }

    #[test]
    fn not_found_error_names_entity_and_id() {
        let err = StrategistError::not_found("content item", 42);
        assert_eq!(err.to_string(), "content item 42 not found");
    }
}

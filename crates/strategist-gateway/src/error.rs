// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error-to-HTTP mapping for the REST surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use strategist_core::StrategistError;
use tracing::error;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
    /// Offending field for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Wrapper giving [`StrategistError`] an HTTP representation.
#[derive(Debug)]
pub struct ApiError(pub StrategistError);

impl From<StrategistError> for ApiError {
    fn from(err: StrategistError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, field) = match &self.0 {
            StrategistError::Validation { field, .. } => {
                (StatusCode::BAD_REQUEST, Some(field.to_string()))
            }
            StrategistError::NotFound { .. } => (StatusCode::NOT_FOUND, None),
            StrategistError::Gateway { .. } => (StatusCode::BAD_GATEWAY, None),
            StrategistError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, None),
            StrategistError::Storage { .. } => {
                error!(error = %self.0, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            StrategistError::Config(_) | StrategistError::Internal(_) => {
                error!(error = %self.0, "internal failure");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let error = match &self.0 {
            // Gateway failures get a user-facing retry hint on top of the cause.
            StrategistError::Gateway { message, .. } => {
                format!("{message} -- please try again")
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error, field })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_field() {
        let response =
            ApiError(StrategistError::validation("pillar_name", "must not be empty"))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError(StrategistError::not_found("task", 9)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn gateway_maps_to_502() {
        let response = ApiError(StrategistError::gateway("unreachable")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn timeout_maps_to_504() {
        let response = ApiError(StrategistError::Timeout {
            duration: std::time::Duration::from_secs(60),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}

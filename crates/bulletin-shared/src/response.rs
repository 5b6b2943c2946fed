//! The uniform response envelope.
//!
//! Every endpoint answers `{"status": "success", "data": ...}` on success
//! (list responses also carry a `results` count) and
//! `{"status": "fail", "message": ...}` on failure.

use serde::{Deserialize, Serialize};

/// Successful response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            results: None,
        }
    }

    /// A list response carrying the number of returned items.
    pub fn page(data: T, results: usize) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            results: Some(results),
        }
    }
}

/// Failure response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailResponse {
    pub status: String,
    pub message: String,
}

impl FailResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            message: message.into(),
        }
    }

    // Common failure constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn forbidden() -> Self {
        Self::new("Forbidden")
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_results() {
        let body = serde_json::to_value(ApiResponse::success("x")).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], "x");
        assert!(body.get("results").is_none());
    }

    #[test]
    fn page_envelope_carries_results() {
        let body = serde_json::to_value(ApiResponse::page(vec![1, 2, 3], 3)).unwrap();
        assert_eq!(body["results"], 3);
    }

    #[test]
    fn fail_envelope_shape() {
        let body = serde_json::to_value(FailResponse::forbidden()).unwrap();
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Forbidden");
    }
}

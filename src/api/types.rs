use serde::{Deserialize, Serialize};

/// Stable user-facing messages for the transport error taxonomy.
pub mod messages {
    pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
    pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
    pub const UNAUTHORIZED: &str = "Session expired. Please login again.";
    pub const FORBIDDEN: &str = "You do not have permission to perform this action.";
    pub const SERVER_ERROR: &str = "Server error. Please try again later.";
    pub const UNKNOWN_ERROR: &str = "An unexpected error occurred.";
    pub const NO_TOKEN_TO_REFRESH: &str = "No token to refresh.";
    pub const MISSING_BASE_URL: &str = "API base URL is not configured.";

    pub const UPDATE_SUCCESS: &str = "App version updated successfully!";
    pub const UPDATE_FAILED: &str = "Failed to update version.";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// The single global version-configuration record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVersion {
    pub latest_version: String,
    pub min_supported_version: String,
    pub force_update: bool,
    pub update_message: String,
}

/// Error body shapes the backend is known to emit.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BackendErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BackendErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    Network,
    Unauthorized,
    Forbidden,
    Server,
    LoginFailed,
    NoTokenToRefresh,
    Unknown,
}

/// A classified transport or session error. `message` is the stable text for
/// the taxonomy bucket; `detail` preserves whatever the backend said and
/// `status` the original HTTP status, when there was a response at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::new(ApiErrorKind::Network, messages::NETWORK_ERROR)
        }
    }

    /// Wraps a classified login failure. The backend's own words win when the
    /// server answered; network-class failures keep their stable message.
    pub fn login_failed(err: ApiError) -> Self {
        let message = match (err.status, &err.detail) {
            (Some(_), Some(detail)) => detail.clone(),
            _ if !err.message.is_empty() => err.message.clone(),
            _ => messages::LOGIN_FAILED.to_string(),
        };
        Self {
            kind: ApiErrorKind::LoginFailed,
            message,
            status: err.status,
            detail: err.detail,
        }
    }

    pub fn no_token_to_refresh() -> Self {
        Self::new(ApiErrorKind::NoTokenToRefresh, messages::NO_TOKEN_TO_REFRESH)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unknown, message)
    }

    /// Maps an HTTP failure status into the taxonomy, keeping the backend's
    /// own message as `detail`.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let (kind, message) = match status {
            401 => (ApiErrorKind::Unauthorized, messages::UNAUTHORIZED.to_string()),
            403 => (ApiErrorKind::Forbidden, messages::FORBIDDEN.to_string()),
            500 | 502 | 503 | 504 => (ApiErrorKind::Server, messages::SERVER_ERROR.to_string()),
            _ => (
                ApiErrorKind::Unknown,
                detail.clone().unwrap_or_else(|| messages::UNKNOWN_ERROR.to_string()),
            ),
        };
        Self {
            kind,
            message,
            status: Some(status),
            detail,
        }
    }

    /// The most specific message available: the backend's own text when we
    /// have it, the stable taxonomy message otherwise.
    pub fn backend_message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.message)
    }
}

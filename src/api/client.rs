use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::types::{ApiError, BackendErrorBody};
use crate::config;
use crate::router;
use crate::utils::{token, token_store};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client. Every request goes through [`ApiClient::execute`],
/// which attaches the bearer credential on the way out and classifies
/// failures on the way back, so call sites never duplicate status handling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> Result<String, ApiError> {
        if let Some(base) = &self.base_url {
            return Ok(base.clone());
        }
        config::await_api_base_url()
            .await
            .ok_or_else(|| ApiError::unknown(crate::api::types::messages::MISSING_BASE_URL))
    }

    /// Bearer header for the stored credential, only when it is still valid.
    /// Requests without a usable credential go out unauthenticated.
    pub(crate) fn auth_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(stored) = token_store::get_token() {
            if token::is_valid() {
                match format!("Bearer {}", stored).parse() {
                    Ok(value) => {
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(err) => log::warn!("invalid bearer header: {}", err),
                }
            }
        }
        headers
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .timeout(REQUEST_TIMEOUT)
            .headers(Self::auth_headers())
            .send()
            .await
            .map_err(|err| {
                log::error!("request failed: {}", err);
                ApiError::network(err.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::classify_failure(response).await)
        }
    }

    async fn classify_failure(response: Response) -> ApiError {
        let status = response.status();
        let detail = response
            .json::<BackendErrorBody>()
            .await
            .ok()
            .and_then(BackendErrorBody::into_message);

        if status == StatusCode::UNAUTHORIZED {
            // A known-dead credential must never keep an authenticated view
            // alive, even when the in-memory session is stale.
            log::warn!("unauthorized response, clearing session");
            token_store::remove_token();
            redirect_to_login_if_needed();
        }

        ApiError::from_status(status.as_u16(), detail)
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))
    }
}

pub(crate) fn should_redirect_to_login(pathname: &str) -> bool {
    pathname != router::ROUTE_LOGIN
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if !should_redirect_to_login(&pathname) {
                return;
            }
        }
        let _ = location.set_href(router::ROUTE_LOGIN);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login_if_needed() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::token_with_expiry;

    #[test]
    fn redirect_predicate_skips_login_route() {
        assert!(!should_redirect_to_login("/"));
        assert!(should_redirect_to_login("/dashboard"));
        assert!(should_redirect_to_login("/anything"));
    }

    #[test]
    fn auth_headers_attach_only_valid_tokens() {
        token_store::remove_token();
        assert!(ApiClient::auth_headers().get(AUTHORIZATION).is_none());

        token_store::set_token(&token_with_expiry(-60));
        assert!(ApiClient::auth_headers().get(AUTHORIZATION).is_none());

        let live = token_with_expiry(3600);
        token_store::set_token(&live);
        let headers = ApiClient::auth_headers();
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some(format!("Bearer {}", live).as_str())
        );
        token_store::remove_token();
    }
}

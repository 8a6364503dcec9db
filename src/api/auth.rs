use serde_json::json;

use super::client::ApiClient;
use super::types::{ApiError, LoginCredentials, LoginResponse};

impl ApiClient {
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .execute(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(credentials),
            )
            .await?;
        Self::parse_json(response).await
    }

    pub async fn refresh_token(&self, token: &str) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .execute(
                self.http_client()
                    .post(format!("{}/auth/refresh", base_url))
                    .json(&json!({ "token": token })),
            )
            .await?;
        Self::parse_json(response).await
    }

    /// Backend-side session teardown. Errors are returned to the caller; the
    /// session controller treats them as advisory.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await?;
        self.execute(self.http_client().post(format!("{}/auth/logout", base_url)))
            .await?;
        Ok(())
    }
}

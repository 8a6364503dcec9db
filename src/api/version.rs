use super::client::ApiClient;
use super::types::{ApiError, AppVersion};

impl ApiClient {
    pub async fn get_app_version(&self) -> Result<AppVersion, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .execute(self.http_client().get(format!("{}/app/version", base_url)))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn update_app_version(&self, record: &AppVersion) -> Result<AppVersion, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .execute(
                self.http_client()
                    .post(format!("{}/app/version", base_url))
                    .json(record),
            )
            .await?;
        Self::parse_json(response).await
    }
}

use crate::api::{ApiClient, ApiError, AppVersion};
use std::rc::Rc;

#[derive(Clone)]
pub struct VersionRepository {
    api: Rc<ApiClient>,
}

impl VersionRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self) -> Result<AppVersion, ApiError> {
        self.api.get_app_version().await
    }

    pub async fn save(&self, record: &AppVersion) -> Result<AppVersion, ApiError> {
        self.api.update_app_version(record).await
    }
}

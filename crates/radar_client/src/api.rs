use std::time::Duration;

use crate::{
    ApiError, ApiFailure, DatasetResponse, LoadingStatus, ReorderEntry, ReorderRequest,
};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The five aggregation-service endpoints the dashboard consumes.
#[async_trait::async_trait]
pub trait RadarApi: Send + Sync {
    async fn fetch_dataset(&self) -> Result<DatasetResponse, ApiError>;
    async fn fetch_loading_status(&self) -> Result<LoadingStatus, ApiError>;
    async fn trigger_news_refresh(&self) -> Result<(), ApiError>;
    async fn trigger_summary_refresh(&self) -> Result<(), ApiError>;
    async fn persist_order(&self, order: &[ReorderEntry]) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpRadarApi {
    settings: ClientSettings,
}

impl HttpRadarApi {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))?;
        base.join(path)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))
    }

    async fn send_checked(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl RadarApi for HttpRadarApi {
    async fn fetch_dataset(&self) -> Result<DatasetResponse, ApiError> {
        let client = self.build_client()?;
        let response = self
            .send_checked(client.get(self.endpoint("/api/all")?))
            .await?;
        response
            .json::<DatasetResponse>()
            .await
            .map_err(map_reqwest_error)
    }

    async fn fetch_loading_status(&self) -> Result<LoadingStatus, ApiError> {
        let client = self.build_client()?;
        let response = self
            .send_checked(client.get(self.endpoint("/api/loading-status")?))
            .await?;
        response
            .json::<LoadingStatus>()
            .await
            .map_err(map_reqwest_error)
    }

    async fn trigger_news_refresh(&self) -> Result<(), ApiError> {
        let client = self.build_client()?;
        self.send_checked(client.post(self.endpoint("/api/refresh")?))
            .await?;
        Ok(())
    }

    async fn trigger_summary_refresh(&self) -> Result<(), ApiError> {
        let client = self.build_client()?;
        self.send_checked(client.post(self.endpoint("/api/refresh-summary")?))
            .await?;
        Ok(())
    }

    async fn persist_order(&self, order: &[ReorderEntry]) -> Result<(), ApiError> {
        let client = self.build_client()?;
        let body = ReorderRequest {
            order: order.to_vec(),
        };
        self.send_checked(
            client
                .put(self.endpoint("/api/admin/topics/reorder")?)
                .json(&body),
        )
        .await?;
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(ApiFailure::Decode, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}

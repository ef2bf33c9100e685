use std::{future::Future, time::Duration};

use api_types::{
    ErrorBody,
    forecast::ForecastResponse,
    income::IncomeNew,
    nudge::Nudge,
};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// The backend operations the dashboard depends on.
pub trait DashboardApi: Send + Sync {
    /// `GET /api/forecast`
    fn forecast(&self) -> impl Future<Output = Result<ForecastResponse, ClientError>> + Send;

    /// `GET /api/nudge`
    fn nudge(&self) -> impl Future<Output = Result<Nudge, ClientError>> + Send;

    /// `POST /api/income`; the response body is not used.
    fn add_income(&self, amount: f64) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// HTTP implementation of [`DashboardApi`].
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// `timeout` bounds every request; without one a hung backend keeps the
    /// refresh pending until the transport gives up.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let res = self.http.get(self.endpoint(path)?).send().await?;
        let res = ensure_success(res).await?;
        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl DashboardApi for Client {
    async fn forecast(&self) -> Result<ForecastResponse, ClientError> {
        self.get_json("api/forecast").await
    }

    async fn nudge(&self) -> Result<Nudge, ClientError> {
        self.get_json("api/nudge").await
    }

    async fn add_income(&self, amount: f64) -> Result<(), ClientError> {
        let res = self
            .http
            .post(self.endpoint("api/income")?)
            .json(&IncomeNew { amount })
            .send()
            .await?;
        ensure_success(res).await?;
        Ok(())
    }
}

async fn ensure_success(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let message = res
        .json::<ErrorBody>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(ClientError::Status { status, message })
}

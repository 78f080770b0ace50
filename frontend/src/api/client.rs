use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::{
        multipart::FormPayload,
        types::{ApiError, MutationResponse},
    },
    config,
};

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

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let response = self.execute(self.http_client().get(&url)).await?;
        Self::parse_json(response).await
    }

    /// Reads a singleton resource. A 404, `null`, `{}` or `[]` body all mean "absent".
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let url = self.url(path).await;
        let response = self.execute(self.http_client().get(&url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Value = Self::parse_json(response).await?;
        let record = match body {
            Value::Null => return Ok(None),
            Value::Array(mut items) => {
                if items.is_empty() {
                    return Ok(None);
                }
                items.swap_remove(0)
            }
            Value::Object(ref map) if map.is_empty() => return Ok(None),
            Value::Object(mut map) if map.contains_key("data") => {
                match map.remove("data").unwrap_or(Value::Null) {
                    Value::Null => return Ok(None),
                    Value::Array(items) if items.is_empty() => return Ok(None),
                    Value::Array(mut items) => items.swap_remove(0),
                    other => other,
                }
            }
            other => other,
        };
        serde_json::from_value(record)
            .map(Some)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<MutationResponse, ApiError> {
        let url = self.url(path).await;
        let response = self
            .execute(self.http_client().request(method, &url).json(body))
            .await?;
        Self::parse_ack(response).await
    }

    pub(crate) async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        payload: FormPayload,
    ) -> Result<MutationResponse, ApiError> {
        let url = self.url(path).await;
        let form = payload.into_form()?;
        let response = self
            .execute(self.http_client().request(method, &url).multipart(form))
            .await?;
        Self::parse_ack(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<MutationResponse, ApiError> {
        let url = self.url(path).await;
        let response = self.execute(self.http_client().delete(&url)).await?;
        Self::parse_ack(response).await
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        if let Some(response) = mock_response(&request)? {
            return Ok(response);
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        ApiError::http_status(status, body.as_ref())
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    async fn parse_ack(response: Response) -> Result<MutationResponse, ApiError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
        if text.trim().is_empty() {
            return Ok(MutationResponse::default());
        }
        match serde_json::from_str::<MutationResponse>(&text) {
            Ok(ack) => Ok(ack),
            // Some endpoints acknowledge with a bare JSON string.
            Err(_) => Ok(MutationResponse {
                message: serde_json::from_str::<String>(&text).ok(),
                id: None,
            }),
        }
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mock_response(_request: &reqwest::Request) -> Result<Option<Response>, ApiError> {
    Ok(None)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::mock_response;

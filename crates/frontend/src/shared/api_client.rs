//! JSON client for the REST API.
//!
//! The auth store is injected; every request carries its bearer token and a
//! 401 answer clears it and sends the browser to the login route.

use std::sync::Arc;

use contracts::shared::envelope::{decode_body, list_from_value};
use contracts::shared::error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_utils::api_base;
use super::config::client_config;
use crate::system::auth::storage::{self, AuthStore};

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    auth: Arc<dyn AuthStore>,
    login_route: String,
}

impl ApiClient {
    pub fn new(base: String, auth: Arc<dyn AuthStore>, login_route: String) -> Self {
        Self {
            base,
            auth,
            login_route,
        }
    }

    /// Client for the configured API base, backed by browser storage
    pub fn from_config() -> Self {
        Self::new(
            api_base(),
            storage::local_store(),
            client_config().auth.login_route.clone(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn on_unauthorized(&self) {
        log::warn!("Session rejected by the API, redirecting to {}", self.login_route);
        self.auth.clear();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&self.login_route);
        }
    }

    /// Turn a non-2xx response into an error, handling 401 on the way
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response_body(status, &body);
        if err.is_unauthorized() {
            self.on_unauthorized();
        } else {
            log::error!("API request failed with {}: {}", status, err);
        }
        Err(err)
    }

    async fn read<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let response = self.check(response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_body(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request: Request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Request::get(&self.url(path))).await?;
        self.read(response).await
    }

    /// GET a collection that may arrive bare or wrapped in an object
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let value: Value = self.get(path).await?;
        list_from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_json(Request::post(&self.url(path)), body).await?;
        self.read(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_json(Request::put(&self.url(path)), body).await?;
        self.read(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Request::delete(&self.url(path))).await?;
        let _: Value = self.read(response).await?;
        Ok(())
    }

    /// Raw bytes of a file produced by the server
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Request::get(&self.url(path))).await?;
        let response = self.check(response).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST without the 401 redirect, for the login form
    pub async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status,
                message: contracts::shared::error::extract_error_message(&body),
            });
        }
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_body(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Client used by the page-level API modules
pub fn client() -> ApiClient {
    ApiClient::from_config()
}

//! [`AuthApi`] over `reqwest`.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use session::api::{
    ADMIN_REGISTER_PATH, ADMIN_USERS_PATH, ApiConfig, LOGIN_PATH, REGISTER_PATH, bearer, status_error,
};
use session::{ApiError, AuthApi, LoginRequest, RegisterRequest, TokenResponse, UserListing};

#[derive(Clone, Debug)]
pub struct ReqwestAuthApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestAuthApi {
    pub fn new(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.config.endpoint(path))
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.config.endpoint(path))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "api request rejected");
    Err(status_error(status.as_u16(), &body))
}

async fn read<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for ReqwestAuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        read(send(self.post(LOGIN_PATH).json(credentials)).await?).await
    }

    async fn register(&self, user: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        read(send(self.post(REGISTER_PATH).json(user)).await?).await
    }

    async fn list_users(&self, token: &str) -> Result<UserListing, ApiError> {
        let request = self.get(ADMIN_USERS_PATH).header(reqwest::header::AUTHORIZATION, bearer(token));
        read(send(request).await?).await
    }

    async fn register_admin(&self, token: &str, admin: &RegisterRequest) -> Result<(), ApiError> {
        let request = self
            .post(ADMIN_REGISTER_PATH)
            .header(reqwest::header::AUTHORIZATION, bearer(token))
            .json(admin);
        let created: Value = read(send(request).await?).await.unwrap_or(Value::Null);
        tracing::debug!(%created, "admin created");
        Ok(())
    }
}

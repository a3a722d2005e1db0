//! REST client for the remote auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to [`ApiError::Network`], non-2xx responses to
//! [`ApiError::Status`] with the backend's `{"error": ...}` message, and body
//! mismatches to [`ApiError::Decode`]. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use session::api::{ADMIN_REGISTER_PATH, ADMIN_USERS_PATH, ApiConfig, LOGIN_PATH, REGISTER_PATH};
use session::{ApiError, AuthApi, LoginRequest, RegisterRequest, TokenResponse, UserListing};

/// [`AuthApi`] over `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[cfg(feature = "hydrate")]
mod fetch {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use session::ApiError;
    use session::api::{bearer, status_error};

    fn network(e: &gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub(super) fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let resp = builder
            .json(body)
            .map_err(|e| network(&e))?
            .send()
            .await
            .map_err(|e| network(&e))?;
        ensure_ok(resp).await
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| network(&e))?;
        ensure_ok(resp).await
    }

    async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status, url = %resp.url(), "api request rejected");
        Err(status_error(status, &body))
    }

    pub(super) async fn read<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(LOGIN_PATH));
            let resp = fetch::send_json(builder, credentials).await?;
            fetch::read(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, self.url(LOGIN_PATH));
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, user: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(REGISTER_PATH));
            let resp = fetch::send_json(builder, user).await?;
            fetch::read(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, self.url(REGISTER_PATH));
            Err(ApiError::Unavailable)
        }
    }

    async fn list_users(&self, token: &str) -> Result<UserListing, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = fetch::authorized(gloo_net::http::Request::get(&self.url(ADMIN_USERS_PATH)), Some(token));
            let resp = fetch::send(builder).await?;
            fetch::read(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, self.url(ADMIN_USERS_PATH));
            Err(ApiError::Unavailable)
        }
    }

    async fn register_admin(&self, token: &str, admin: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder =
                fetch::authorized(gloo_net::http::Request::post(&self.url(ADMIN_REGISTER_PATH)), Some(token));
            fetch::send_json(builder, admin).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, admin, self.url(ADMIN_REGISTER_PATH));
            Err(ApiError::Unavailable)
        }
    }
}

use std::sync::Arc;

use futures::lock::Mutex;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiError, RefreshResponse},
    config,
    session::{BrowserSession, SessionStore},
};

struct ClientInner {
    http: Client,
    base_url: Option<String>,
    session: Arc<dyn SessionStore>,
    /// Serializes refresh attempts so concurrent 401s trigger one
    /// refresh call instead of a stampede.
    refresh_gate: Mutex<()>,
}

/// HTTP client for the learning platform API.
///
/// Cheap to clone; all request methods attach the current access token as a
/// bearer header and transparently retry once after a successful token
/// refresh when the server answers 401.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(Arc::new(BrowserSession))
    }

    pub fn with_session(session: Arc<dyn SessionStore>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: Client::new(),
                base_url: None,
                session,
                refresh_gate: Mutex::new(()),
            }),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: Client::new(),
                base_url: Some(base_url.into()),
                session,
                refresh_gate: Mutex::new(()),
            }),
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.inner.session
    }

    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.inner.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Dispatches the request built by `build`, attaching the current access
    /// token. On 401 the access token is refreshed (one attempt, funneled
    /// through `refresh_gate`) and the request is rebuilt and sent once more;
    /// a second 401 is returned as-is.
    pub(crate) async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        // Read the token once up front: it is both the credential on the
        // request and the baseline the refresh gate compares against. Reading
        // again after the 401 could observe a token another caller already
        // rotated and trigger a second refresh.
        let sent_with = self.inner.session.access_token();
        let response = self.dispatch(&build, sent_with.clone()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        if !self.refresh_access_token(sent_with).await {
            return Ok(response);
        }

        let fresh = self.inner.session.access_token();
        self.dispatch(&build, fresh).await
    }

    async fn dispatch<F>(&self, build: &F, token: Option<String>) -> Result<Response, ApiError>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let mut request = build(&self.inner.http);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.map_err(ApiError::network)
    }

    /// Obtains a fresh access token using the stored refresh token. Returns
    /// whether the caller should retry its original request.
    ///
    /// `stale` is the access token the failed request was sent with; if the
    /// stored token has already moved past it another caller refreshed while
    /// we waited on the gate, and retrying with the new token suffices.
    async fn refresh_access_token(&self, stale: Option<String>) -> bool {
        let _guard = self.inner.refresh_gate.lock().await;

        if self.inner.session.access_token() != stale {
            return true;
        }

        let refresh = match self.inner.session.refresh_token() {
            Some(token) => token,
            None => return false,
        };

        let base_url = self.resolved_base_url().await;
        let response = self
            .inner
            .http
            .post(format!("{base_url}/auth/refresh"))
            .bearer_auth(&refresh)
            .json(&serde_json::json!({}))
            .send()
            .await;

        let refreshed = match response {
            Ok(resp) if resp.status().is_success() => resp.json::<RefreshResponse>().await.ok(),
            Ok(_) | Err(_) => None,
        };

        match refreshed {
            Some(body) => {
                self.inner.session.set_access_token(&body.access_token);
                true
            }
            None => {
                log::warn!("token refresh failed, clearing session");
                self.inner.session.clear();
                false
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserializes a success body or classifies the failure status.
pub(crate) async fn json_or_error<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(ApiError::decode);
    }

    let body: Option<Value> = response.json().await.ok();
    let message = body
        .as_ref()
        .and_then(extract_message)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

    let mut error = if status == StatusCode::UNAUTHORIZED {
        ApiError::unauthorized(message)
    } else if status.is_client_error() {
        ApiError::validation(message)
    } else if status.is_server_error() {
        ApiError::server(message)
    } else {
        ApiError::unknown(message)
    };
    error.status = Some(status.as_u16());
    error.details = body;
    Err(error)
}

// The backend is not consistent about its error key.
fn extract_message(body: &Value) -> Option<String> {
    for key in ["error", "msg", "message"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }
    None
}

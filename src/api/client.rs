use std::sync::Arc;

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::auth::credentials::{CredentialProvider, CredentialScope};
use crate::error::{PanelError, Rejection};

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Authenticated client for the payroll backend's REST api.
///
/// No timeout and no retries: a request either completes or hangs, exactly
/// like the browser views this panel replaces.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    scope: CredentialScope,
    credentials: Arc<dyn CredentialProvider>,
}

impl BackendClient {
    pub fn new(
        base_url: &str,
        scope: CredentialScope,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, PanelError> {
        Url::parse(base_url).map_err(|e| PanelError::Invalid(format!("backend url: {e}")))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            scope,
            credentials,
        })
    }

    /// Absolute url of `path`. Empty query pairs are skipped; without any
    /// pair the url carries no `?` at all.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, PanelError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| PanelError::Invalid(format!("api path `{path}`: {e}")))?;

        let pairs: Vec<_> = query.iter().filter(|(_, value)| !value.is_empty()).collect();
        if !pairs.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (key, value) in pairs {
                qp.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Absolute url of `path` followed by `segments`, each percent-encoded
    /// as a single path segment. Empty, `.` and `..` segments are refused.
    pub fn segment_url(&self, path: &str, segments: &[&str]) -> Result<Url, PanelError> {
        let mut url = self.url(path, &[])?;
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(PanelError::Invalid(format!("`{bad}` is not a record id")));
        }
        url.path_segments_mut()
            .map_err(|_| PanelError::Invalid(format!("api path `{path}` cannot take segments")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn bearer(&self) -> Result<String, PanelError> {
        self.credentials
            .bearer(self.scope)
            .map(|token| format!("Bearer {token}"))
            .ok_or(PanelError::MissingCredential(self.scope))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, PanelError> {
        let url = self.url(path, query)?;
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .header("Authorization", self.bearer()?)
            .send()
            .await?;

        let bytes = Self::success_body(response).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Mutating request. `body` is sent as JSON when present, otherwise the
    /// request has no body at all. Success is decided by the status alone;
    /// a success body that is empty or not JSON yields `Value::Null`.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, PanelError> {
        let url = self.url(path, &[])?;
        self.send_json_to(method, url, body).await
    }

    /// Same as `send_json`, against an already built url.
    pub async fn send_json_to<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Value, PanelError> {
        debug!(%method, %url, "sending");

        let mut request = self
            .http
            .request(method, url)
            .header("Authorization", self.bearer()?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let bytes = Self::success_body(request.send().await?).await?;
        Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn success_body(response: reqwest::Response) -> Result<Vec<u8>, PanelError> {
        let status = response.status();
        let bytes = response.bytes().await?.to_vec();
        if status.is_success() {
            return Ok(bytes);
        }
        Err(Self::rejection(status, &bytes).into())
    }

    fn rejection(status: StatusCode, body: &[u8]) -> Rejection {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error);
        Rejection {
            status: status.as_u16(),
            message,
        }
    }
}

//! HTTP client for the honeyquest backend.
//!
//! The core treats the backend as an opaque collaborator: this crate only
//! moves the engine's wire types over REST and maps failures to a typed
//! [`ApiError`]. No retry policy lives here — callers decide what a failed
//! request means for them.

use serde::{Deserialize, Serialize};
use url::Url;

use honeyquest_engine::{
    Feedback, Metadata, Profile, QueryBucketsWrapper, QueryResponse, QueryWrapper,
};

/// The one error code the UI reacts to specially: the user has answered
/// every query in the dataset.
pub const ERROR_CODE_OUT_OF_SAMPLES: &str = "OUT_OF_SAMPLES";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
        /// Structured error detail, when the backend sent one
        detail: Option<ErrorDetail>,
    },
}

/// Structured error details the backend attaches to some failures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    #[serde(default)]
    pub answered_queries: Option<u32>,
    #[serde(default)]
    pub total_queries: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

impl ApiError {
    /// The structured detail of a status error, if present.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            ApiError::Status { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }

    /// Tests if the error carries the given backend error code.
    pub fn is_of_type(&self, code: &str) -> bool {
        self.detail().is_some_and(|detail| detail.code == code)
    }

    /// The answered/total counts of an out-of-samples error.
    pub fn out_of_samples(&self) -> Option<(u32, u32)> {
        let detail = self.detail()?;
        if detail.code != ERROR_CODE_OUT_OF_SAMPLES {
            return None;
        }
        Some((
            detail.answered_queries.unwrap_or(0),
            detail.total_queries.unwrap_or(0),
        ))
    }
}

/// Client for the backend REST API, bound to one server base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

/// Two clients are interchangeable iff they talk to the same server.
/// UI layers rely on this to memoize components that receive a client.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(server_url: &str) -> Result<Self, ApiError> {
        // a missing trailing slash would make Url::join drop the last
        // path segment of the base
        let normalized = if server_url.ends_with('/') {
            server_url.to_string()
        } else {
            format!("{server_url}/")
        };
        Ok(Self {
            base_url: Url::parse(&normalized)?,
            client: reqwest::Client::new(),
        })
    }

    pub async fn get_query(&self) -> Result<QueryWrapper, ApiError> {
        self.get_json("api/query").await
    }

    pub async fn get_query_buckets(&self) -> Result<QueryBucketsWrapper, ApiError> {
        self.get_json("api/query/buckets").await
    }

    pub async fn get_metadata(&self, metadata_id: &str) -> Result<Metadata, ApiError> {
        let mut url = self.endpoint(&format!("api/metadata/{metadata_id}"))?;
        url.query_pairs_mut().append_pair("text_format", "markdown");
        self.request_json(self.client.get(url)).await
    }

    /// The stored profile of this session, or `None` when the backend
    /// does not know the user yet.
    pub async fn get_profile(&self) -> Result<Option<Profile>, ApiError> {
        self.get_json("api/profile").await
    }

    pub async fn put_profile(&self, profile: &Profile) -> Result<(), ApiError> {
        let url = self.endpoint("api/profile")?;
        self.expect_ok(self.client.put(url).json(profile)).await
    }

    pub async fn delete_profile(&self) -> Result<(), ApiError> {
        let url = self.endpoint("api/profile")?;
        self.expect_ok(self.client.delete(url)).await
    }

    pub async fn post_answer(&self, response: &QueryResponse) -> Result<(), ApiError> {
        let url = self.endpoint("api/response")?;
        self.expect_ok(self.client.post(url).json(response)).await
    }

    pub async fn post_feedback(&self, feedback: &Feedback) -> Result<(), ApiError> {
        let url = self.endpoint("api/feedback")?;
        self.expect_ok(self.client.post(url).json(feedback)).await
    }

    pub async fn post_admin_auth(&self, token: &str) -> Result<(), ApiError> {
        let url = self.endpoint("api/admin/auth")?;
        let body = AdminAuthRequest {
            token: token.to_string(),
        };
        self.expect_ok(self.client.post(url).json(&body)).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        self.request_json(self.client.get(url)).await
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn expect_ok(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        let error = parse_status_error(status.as_u16(), message);
        log::warn!("backend request failed: {error}");
        Err(error)
    }
}

#[derive(Debug, Serialize)]
struct AdminAuthRequest {
    token: String,
}

/// Map a non-success response to a status error, extracting the structured
/// detail object when the body carries one.
fn parse_status_error(status: u16, message: String) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(&message)
        .ok()
        .map(|body| body.detail);
    ApiError::Status {
        status,
        message,
        detail,
    }
}

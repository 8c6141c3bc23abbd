use std::time::Duration;

use comments_core::Comment;
use comments_logging::{comments_debug, comments_warn};
use futures_util::StreamExt;

use crate::decode::decode_comments;
use crate::{ApiResponse, TransportError};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub comments_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            comments_path: "comments".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Transport seam for the comments endpoint.
#[async_trait::async_trait]
pub trait CommentsApi: Send + Sync {
    async fn get_comments(&self) -> Result<ApiResponse<Vec<Comment>>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCommentsApi {
    settings: ClientSettings,
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ReqwestCommentsApi {
    pub fn new(settings: ClientSettings) -> Result<Self, TransportError> {
        let endpoint = resolve_endpoint(&settings)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;

        Ok(Self {
            settings,
            client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, TransportError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(TransportError::TooLarge {
                    max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(TransportError::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                });
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl CommentsApi for ReqwestCommentsApi {
    async fn get_comments(&self) -> Result<ApiResponse<Vec<Comment>>, TransportError> {
        comments_debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let reason = status
            .canonical_reason()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| status.as_u16().to_string());
        comments_debug!("GET {} -> {}", self.endpoint, status);

        if !status.is_success() {
            comments_warn!("comments endpoint returned {}", status);
            return Ok(ApiResponse {
                status: status.as_u16(),
                reason,
                body: None,
            });
        }

        let bytes = self.read_body(response).await?;
        let body = decode_comments(&bytes)?;

        Ok(ApiResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

fn resolve_endpoint(settings: &ClientSettings) -> Result<reqwest::Url, TransportError> {
    let base = reqwest::Url::parse(&settings.base_url)
        .map_err(|err| TransportError::InvalidUrl(err.to_string()))?;
    base.join(&settings.comments_path)
        .map_err(|err| TransportError::InvalidUrl(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(err.to_string());
    }
    TransportError::Network(err.to_string())
}

//! Chat-completion client
//!
//! Performs one request/response exchange with the chat-completions endpoint
//! and returns the assistant's reply text. The HTTP call goes through the
//! [`Transport`] trait so tests can substitute an in-memory implementation.

use crate::error::{AppError, AppResult, BoxError};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Chat-completions endpoint used by the CLI
pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Model identifier used by the CLI
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Timeout for the whole request/response cycle
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Endpoint, model and timeout for a [`ChatCompletionClient`]
///
/// The CLI always uses [`ClientOptions::default`]. Other values exist so tests
/// can point the client at a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: OPENAI_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Outgoing JSON POST
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub bearer_token: String,
    pub body: Vec<u8>,
}

/// Status and fully-read body of an HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Sends a single HTTP request
///
/// Implementations must not retry. Any failure to obtain a complete response
/// (connect, TLS, timeout, body read) is returned as `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// [`Transport`] backed by `reqwest` with rustls
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose every request is bounded by `timeout`
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let response = self
            .client
            .post(&request.url)
            .bearer_auth(&request.bearer_token)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body)
            .send()
            .await
            .inspect_err(|e| {
                tracing::debug!(
                    url = %request.url,
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    "HTTP request failed"
                );
            })?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Client for a single chat-completion exchange
pub struct ChatCompletionClient<T = ReqwestTransport> {
    transport: T,
    options: ClientOptions,
}

impl ChatCompletionClient<ReqwestTransport> {
    /// Build a client over `reqwest` using `options.timeout`
    pub fn with_reqwest(options: ClientOptions) -> AppResult<Self> {
        let transport = ReqwestTransport::new(options.timeout)?;
        Ok(Self::new(transport, options))
    }
}

impl<T: Transport> ChatCompletionClient<T> {
    pub fn new(transport: T, options: ClientOptions) -> Self {
        Self { transport, options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `prompt` as a single user message and return the first reply
    ///
    /// Performs exactly one [`Transport::send`]. The reply content is returned
    /// exactly as the API sent it.
    ///
    /// # Errors
    ///
    /// - [`AppError::Transport`] if no complete response was received
    /// - [`AppError::Api`] if the status is not 200
    /// - [`AppError::Decode`] if the 200 body is not a valid response
    /// - [`AppError::EmptyResponse`] if `choices` is empty
    pub async fn complete(&self, api_key: &str, prompt: &str) -> AppResult<String> {
        let request = ChatCompletionRequest::from_prompt(&self.options.model, prompt);
        let body = serde_json::to_vec(&request).map_err(AppError::Encode)?;

        tracing::debug!(
            endpoint = %self.options.endpoint,
            model = %self.options.model,
            prompt_chars = prompt.chars().count(),
            "Sending chat completion request"
        );

        let response = self
            .transport
            .send(HttpRequest {
                url: self.options.endpoint.clone(),
                bearer_token: api_key.to_string(),
                body,
            })
            .await
            .map_err(|source| AppError::Transport {
                endpoint: self.options.endpoint.clone(),
                source,
            })?;

        if response.status != StatusCode::OK {
            tracing::debug!(
                status = %response.status,
                body_bytes = response.body.len(),
                "Chat completion request rejected"
            );
            return Err(AppError::Api {
                status: response.status.to_string(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_slice(&response.body).map_err(AppError::Decode)?;

        tracing::debug!(
            model = parsed.model.as_deref().unwrap_or("unknown"),
            choices = parsed.choices.len(),
            prompt_tokens = parsed.usage.map(|u| u.prompt_tokens),
            completion_tokens = parsed.usage.map(|u| u.completion_tokens),
            total_tokens = parsed.usage.map(|u| u.total_tokens),
            "Chat completion response decoded"
        );

        parsed.into_first_content().ok_or(AppError::EmptyResponse)
    }
}

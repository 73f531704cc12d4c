use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use std::env;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::observability;
use crate::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolve the API key from an explicit value or the environment.
///
/// `GEMINI_API_KEY` takes precedence; `GOOGLE_API_KEY` is accepted for
/// compatibility with the wider Google tooling.  An empty key is treated the
/// same as a missing one: both are configuration errors, raised here, before
/// any request is built.
fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    let api_key = match api_key {
        Some(key) => key,
        None => env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("GOOGLE_API_KEY"))
            .map_err(|_| {
                Error::configuration(
                    "API key not provided and neither GEMINI_API_KEY nor GOOGLE_API_KEY is set",
                )
            })?,
    };
    if api_key.trim().is_empty() {
        return Err(Error::configuration("API key is empty"));
    }
    Ok(api_key)
}

/// Build the underlying HTTP client with the request deadline baked in.
fn build_http_client(timeout: Duration) -> Result<ReqwestClient> {
    ReqwestClient::builder().timeout(timeout).build().map_err(|e| {
        Error::http_client(
            format!("could not construct HTTP client: {e}"),
            Some(Box::new(e)),
        )
    })
}

/// Client for the Generative Language API.
#[derive(Debug, Clone)]
pub struct Gemini {
    api_key: String,
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl Gemini {
    /// Build a client with the default endpoint and timeout.
    ///
    /// Pass the key directly or leave it `None` to read `GEMINI_API_KEY`
    /// (or `GOOGLE_API_KEY`) from the environment.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = resolve_api_key(api_key)?;
        let timeout = DEFAULT_TIMEOUT;
        Ok(Self {
            api_key,
            client: build_http_client(timeout)?,
            base_url: DEFAULT_API_URL.to_string(),
            timeout,
        })
    }

    /// Build a client against a different endpoint or with a different
    /// request deadline.  The base URL must parse; a missing trailing slash
    /// is added so path joins stay correct.
    pub fn with_options(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = resolve_api_key(api_key)?;

        let base_url = match base_url {
            Some(base_url) => {
                url::Url::parse(&base_url)?;
                if base_url.ends_with('/') {
                    base_url
                } else {
                    format!("{base_url}/")
                }
            }
            None => DEFAULT_API_URL.to_string(),
        };

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        Ok(Self {
            api_key,
            client: build_http_client(timeout)?,
            base_url,
            timeout,
        })
    }

    /// Headers attached to every request.  The key travels in
    /// `x-goog-api-key`, never in the URL.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key).expect("API key should be valid"),
        );
        headers
    }

    /// Turn a non-success response into the matching [`Error`] variant.
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // The API wraps failures in {"error": {"code", "message", "status"}}.
        #[derive(Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("could not read the error body: {e}"),
                    Some(Box::new(e)),
                );
            }
        };

        let parsed_error = serde_json::from_str::<ErrorResponse>(&error_body).ok();
        let error_status = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.status.clone());
        let error_message = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| error_body.clone());

        // The status line decides the variant; the parsed body refines it.
        match status_code {
            401 | 403 => Error::authentication(error_message),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_status, error_message),
        }
    }

    /// Post a request to `models/{model_id}:generateContent` and parse the
    /// response.  One round trip, no retries.
    pub async fn generate(
        &self,
        model_id: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        observability::CLIENT_REQUESTS.click();
        let start = Instant::now();
        let url = format!("{}models/{}:generateContent", self.base_url, model_id);

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                observability::CLIENT_REQUEST_ERRORS.click();
                if e.is_timeout() {
                    Error::timeout(e.to_string(), Some(self.timeout.as_secs_f64()))
                } else if e.is_connect() {
                    Error::connection(e.to_string(), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("request failed: {e}"), Some(Box::new(e)))
                }
            })?;

        if !response.status().is_success() {
            observability::CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        let response = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                observability::CLIENT_REQUEST_ERRORS.click();
                Error::serialization(
                    format!("Failed to parse response: {}", e),
                    Some(Box::new(e)),
                )
            })?;
        observability::CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
        Ok(response)
    }
}

/// The text-in/text-out boundary to the remote generative model.
///
/// [`Gemini`] is the production implementation; tests substitute their own.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` against the named backend model.
    async fn generate_text(
        &self,
        model_id: &str,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String>;
}

#[async_trait::async_trait]
impl TextGenerator for Gemini {
    async fn generate_text(
        &self,
        model_id: &str,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt).with_generation_config(config);
        let response = self.generate(model_id, request).await?;
        response.text()
    }
}

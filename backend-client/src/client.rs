//! Resilient HTTP client for the portfolio backend.
//!
//! Every public call resolves to a [`FetchResult`]; transport failures,
//! non-2xx statuses and unparsable bodies are logged and turned into
//! `{success: false}` envelopes instead of errors. Read calls run the
//! payload through the matching normalizer from `folio_content`.

use folio_content::{Blog, Experience, Normalize, Project, Service, Skill, Testimonial};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::contact::ContactForm;
use crate::envelope::{FetchResult, ResponseEnvelope};
use crate::error::{ConfigError, FetchError};
use crate::query::{BlogQuery, ProjectQuery, item_path, with_query};

/// Per-request options for [`PortfolioClient::safe_fetch`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub method: Method,
    /// Merged over the default `Content-Type: application/json`; caller
    /// values win.
    pub headers: HeaderMap,
    /// Serialized as the JSON request body when present.
    pub body: Option<Value>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl FetchOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json(body: Value) -> Self {
        Self {
            method: Method::POST,
            headers: HeaderMap::new(),
            body: Some(body),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Client for the portfolio content API.
///
/// Cheap to clone; holds no per-request state.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// API root without a trailing slash.
    base_url: String,
}

impl PortfolioClient {
    /// Creates a client from validated configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self::with_client(http, config.normalized_base_url()))
    }

    /// Creates a client with a custom HTTP client.
    ///
    /// Useful for testing or custom configurations.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request `<base_url><endpoint>` and unwrap the response envelope.
    ///
    /// Never fails: any error becomes `{success: false, data: None, error}`.
    pub async fn safe_fetch(&self, endpoint: &str, options: FetchOptions) -> FetchResult<Value> {
        let method = options.method.clone();
        match self.try_fetch(endpoint, options).await {
            Ok(body) => {
                let envelope = ResponseEnvelope::classify(body);
                tracing::debug!(
                    %method,
                    endpoint,
                    envelope = envelope.source_key().unwrap_or("bare"),
                    "backend request succeeded"
                );
                FetchResult::ok(envelope.into_payload())
            }
            Err(e) => {
                tracing::warn!(
                    %method,
                    endpoint,
                    category = e.category(),
                    error = %e,
                    "backend request failed"
                );
                FetchResult::failure(e.to_string())
            }
        }
    }

    async fn try_fetch(&self, endpoint: &str, options: FetchOptions) -> Result<Value, FetchError> {
        let url = format!("{}{endpoint}", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn get_list<T: Normalize>(&self, endpoint: &str) -> FetchResult<Vec<T>> {
        self.safe_fetch(endpoint, FetchOptions::get())
            .await
            .normalized_with(T::normalize_array)
    }

    async fn get_one<T: Normalize>(&self, endpoint: &str) -> FetchResult<T> {
        self.safe_fetch(endpoint, FetchOptions::get())
            .await
            .normalized_with(|data| T::normalize(data, 0))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Content endpoints
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn get_projects(&self) -> FetchResult<Vec<Project>> {
        self.get_list("/projects").await
    }

    pub async fn get_projects_filtered(&self, query: &ProjectQuery) -> FetchResult<Vec<Project>> {
        self.get_list(&with_query("/projects", &query.to_pairs())).await
    }

    /// `GET /projects/:id`; the backend matches either the id or the slug.
    pub async fn get_project(&self, id_or_slug: &str) -> FetchResult<Project> {
        self.get_one(&item_path("projects", id_or_slug)).await
    }

    pub async fn get_blogs(&self) -> FetchResult<Vec<Blog>> {
        self.get_list("/blogs").await
    }

    pub async fn get_blogs_filtered(&self, query: &BlogQuery) -> FetchResult<Vec<Blog>> {
        self.get_list(&with_query("/blogs", &query.to_pairs())).await
    }

    pub async fn get_blog_by_slug(&self, slug: &str) -> FetchResult<Blog> {
        self.get_one(&item_path("blogs", slug)).await
    }

    pub async fn get_skills(&self) -> FetchResult<Vec<Skill>> {
        self.get_list("/skills").await
    }

    pub async fn get_services(&self) -> FetchResult<Vec<Service>> {
        self.get_list("/services").await
    }

    pub async fn get_experience(&self) -> FetchResult<Vec<Experience>> {
        self.get_list("/experience").await
    }

    pub async fn get_testimonials(&self) -> FetchResult<Vec<Testimonial>> {
        self.get_list("/testimonials").await
    }

    /// `POST /contact`. The backend's creation payload is returned as is.
    pub async fn submit_contact(&self, form: &ContactForm) -> FetchResult<Value> {
        let body = match serde_json::to_value(form) {
            Ok(body) => body,
            Err(e) => return FetchResult::failure(format!("failed to encode contact form: {e}")),
        };
        self.safe_fetch("/contact", FetchOptions::post_json(body)).await
    }
}

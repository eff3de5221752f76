// API client module: a small blocking HTTP client that talks to the
// Moltbook REST API. It is intentionally small and synchronous; every
// CLI invocation performs exactly one request and exits.

use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::Method;
use serde_json::Value;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Production API root. Overridable through `MOLTBOOK_API_URL`, which is
/// also how the tests point the client at a mock server.
pub const DEFAULT_BASE_URL: &str = "https://www.moltbook.com/api/v1";

/// Everything a command handler can fail with. The `Display` strings are
/// the exact messages the binary prints to stderr, so formatting lives in
/// one place instead of being repeated across ~30 handlers.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("API key not found. Please run `register` or set MOLTBOOK_API_KEY.")]
    MissingApiKey,
    /// Server answered with a non-2xx status. The body is passed through
    /// raw, never re-interpreted.
    #[error("Error: {status} - {body}")]
    Http { status: u16, body: String },
    /// Request never completed: DNS, refused connection, timeout, or a
    /// 2xx body that was not valid JSON (reqwest reports both the same way).
    #[error("Error: Could not connect to Moltbook API. {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Blocking API client holding the base URL and an optional bearer token.
/// Unauthenticated (`register`) and authenticated commands share it; the
/// token is simply absent for the former.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client against `MOLTBOOK_API_URL` or the production URL.
    pub fn from_env(token: Option<String>) -> Self {
        let base_url =
            std::env::var("MOLTBOOK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url, token)
    }

    pub fn new(base_url: String, token: Option<String>) -> Self {
        ApiClient {
            client: Client::new(),
            base_url,
            token,
        }
    }

    fn start(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, url);
        if let Some(t) = &self.token {
            req = req.bearer_auth(t);
        }
        req
    }

    /// The one generic executor behind every command: method + path +
    /// query pairs + optional JSON body, returning the parsed JSON
    /// response on any 2xx status.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, CliError> {
        let mut req = self.start(method, path);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(b) = body {
            req = req.json(&b);
        }
        let res = Self::check(req.send()?)?;
        Ok(res.json()?)
    }

    /// Variant for delete/void endpoints: status is checked, the response
    /// body is ignored and the caller prints its own success message.
    pub fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), CliError> {
        let mut req = self.start(method, path);
        if let Some(b) = body {
            req = req.json(&b);
        }
        Self::check(req.send()?).map(|_| ())
    }

    /// Upload a local file as multipart form data under the `file` field.
    /// The handle is scoped to this single request.
    pub fn upload(&self, path: &str, file_path: &Path) -> Result<(), CliError> {
        let file = File::open(file_path)?;
        let file_name = file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        let part = multipart::Part::reader(file).file_name(file_name);
        let form = multipart::Form::new().part("file", part);
        let res = self.start(Method::POST, path).multipart(form).send()?;
        Self::check(res).map(|_| ())
    }

    fn check(res: Response) -> Result<Response, CliError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().unwrap_or_else(|_| "".into());
        Err(CliError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

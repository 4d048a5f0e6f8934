//! The HTTP side: one POST per call, JSON in, JSON out.

use std::time::Duration;

use dynalister::InboxItem;
use reqwest::header::ACCEPT;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::types::{Change, Response};

pub const DEFAULT_BASE_URL: &str = "https://dynalist.io/api/v1/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How to reach the API and who to authenticate as.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Secret API token from the Dynalist developer page.
    pub token: String,
    /// Endpoint paths are appended to this.
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking Dynalist API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    token: String,
    base_url: String,
}

/// Every request body is the call's own fields plus the token.
#[derive(Serialize)]
struct Authed<'a, P> {
    token: &'a str,
    #[serde(flatten)]
    params: P,
}

#[derive(Serialize)]
struct NoParams {}

#[derive(Serialize)]
struct FileEditParams<'a> {
    changes: &'a [Change],
}

#[derive(Serialize)]
struct DocReadParams<'a> {
    file_id: &'a str,
}

#[derive(Serialize)]
struct DocEditParams<'a> {
    file_id: &'a str,
    changes: &'a [Change],
}

#[derive(Serialize)]
struct InboxAddParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<i64>,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
    checked: bool,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("dynalister/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(config, http)
    }

    /// Use a preconfigured `reqwest` client (proxies, TLS roots, and so on).
    /// The config's timeout is ignored in favour of the client's own.
    pub fn with_http_client(config: ClientConfig, http: reqwest::blocking::Client) -> Result<Self> {
        if config.token.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }

        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http,
            token: config.token,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All files and folders visible to the account.
    pub fn file_list(&self) -> Result<Response> {
        self.post("file/list", NoParams {})
    }

    /// Create, rename, or move files and folders.
    pub fn file_edit(&self, changes: &[Change]) -> Result<Response> {
        self.post("file/edit", FileEditParams { changes })
    }

    /// Every item in a document.
    pub fn doc_read(&self, file_id: &str) -> Result<Response> {
        self.post("doc/read", DocReadParams { file_id })
    }

    /// Insert, edit, move, or delete items in a document.
    pub fn doc_edit(&self, file_id: &str, changes: &[Change]) -> Result<Response> {
        self.post("doc/edit", DocEditParams { file_id, changes })
    }

    /// Add an item to the inbox configured for the account.
    pub fn inbox_add(&self, item: &InboxItem) -> Result<Response> {
        self.post(
            "inbox/add",
            InboxAddParams {
                index: item.index,
                content: &item.content,
                note: item.note.as_deref(),
                checked: item.checked,
            },
        )
    }

    fn post<P: Serialize>(&self, endpoint: &str, params: P) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(endpoint, "dynalist request");

        let res = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&Authed {
                token: &self.token,
                params,
            })
            .send()?;

        let status = res.status();
        let body = res.text()?;

        let response: Response = match serde_json::from_str(&body) {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    body: truncate(&body, 200),
                });
            }
            Err(e) => return Err(ApiError::Decode(e)),
        };

        tracing::debug!(endpoint, code = %response.code, "dynalist response");
        response.into_result()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

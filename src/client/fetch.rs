#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client as HttpClient, StatusCode};

use crate::config::SiteConfig;

/// One GET, body as text. Non-2xx is an error.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    http: HttpClient,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(cfg: &SiteConfig) -> Result<Self, FetchError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = cfg.timeout { builder = builder.timeout(timeout); }
        let http = builder.build().map_err(FetchError::Http)?;
        Ok(Self { http, user_agent: cfg.user_agent.clone() })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(FetchError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url: url.to_string() });
        }
        response.text().await.map_err(FetchError::Http)
    }
}

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status { status: StatusCode, url: String },
    #[cfg(test)]
    Simulated(String),
    #[cfg(test)]
    MockQueueEmpty,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(err) => write!(f, "{err}"),
            FetchError::Status { status, url } => {
                write!(f, "request to {url} failed with status code {status}")
            }
            #[cfg(test)]
            FetchError::Simulated(msg) => write!(f, "{msg}"),
            #[cfg(test)]
            FetchError::MockQueueEmpty => write!(f, "mock fetcher response queue is empty"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            // Display already carries reqwest's message; continue from its cause
            FetchError::Http(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

/// Canned responses in push order; records every requested URL.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: Mutex<VecDeque<Result<String, FetchError>>>,
    calls: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn push_body(&self, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(body.to_string()));
    }

    pub fn push_status(&self, status: StatusCode, url: &str) {
        self.responses.lock().unwrap().push_back(Err(FetchError::Status { status, url: url.to_string() }));
    }

    pub fn push_failure(&self, msg: &str) {
        self.responses.lock().unwrap().push_back(Err(FetchError::Simulated(msg.to_string())));
    }

    pub fn calls(&self) -> Vec<String> { self.calls.lock().unwrap().clone() }
}

#[cfg(test)]
#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::MockQueueEmpty))
    }
}

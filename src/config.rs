use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_ORIGIN: &str = "https://nekopoi.care";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Where pages come from and how we identify ourselves to the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub origin: String,
    pub user_agent: String,
    // None = wait as long as the origin takes
    pub timeout: Option<Duration>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by SCRAPE_ORIGIN, SCRAPE_USER_AGENT, SCRAPE_TIMEOUT_SECS,
    /// then by an explicit `--origin`.
    pub fn resolve(origin_arg: Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Ok(ua) = std::env::var("SCRAPE_USER_AGENT") {
            if !ua.trim().is_empty() { cfg.user_agent = ua; }
        }
        if let Ok(secs) = std::env::var("SCRAPE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().with_context(|| format!("SCRAPE_TIMEOUT_SECS={:?} is not a number", secs))?;
            cfg.timeout = Some(Duration::from_secs(secs));
        }
        let origin = origin_arg.or_else(|| std::env::var("SCRAPE_ORIGIN").ok());
        if let Some(origin) = origin {
            cfg.origin = normalize_origin(&origin)?;
        }
        Ok(cfg)
    }

    /// Bare origin for page 1, `/page/N` otherwise.
    pub fn home_url(&self, page: u32) -> String {
        if page == 1 { self.origin.clone() } else { format!("{}/page/{}", self.origin, page) }
    }

    pub fn genre_url(&self, slug: &str, page: u32) -> String {
        if page == 1 {
            format!("{}/category/{}", self.origin, slug)
        } else {
            format!("{}/category/{}/page/{}", self.origin, slug, page)
        }
    }
}

fn normalize_origin(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid origin URL: {}", raw))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("Origin must be http(s): {}", raw);
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

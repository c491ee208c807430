//! The three fetch operations: home listing, genre listing, detail.
//!
//! Each is one GET plus one extraction. No retry, no caching; any transport
//! failure comes back as a single error carrying the underlying message.

mod fetch;

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;

pub use fetch::{Fetcher, HttpFetcher};
#[cfg(test)]
pub use fetch::MockFetcher;

use crate::config::SiteConfig;
use crate::extractor::{DetailRecord, Extractor, GenreTag, ListingItem, PageKind, PaginationLink, Report};
use crate::telemetry::{self};
use crate::telemetry::ops::scrape::Phase as ScrapePhase;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub items: Vec<ListingItem>,
    pub pagination: Vec<PaginationLink>,
    pub genres: Vec<GenreTag>,
    pub current_page: u32,
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenrePage {
    pub items: Vec<ListingItem>,
    pub genre: String,
    pub current_page: u32,
    pub total_items: usize,
}

/// Operation payload plus the fields the extractor found empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Scraped<T> {
    pub data: T,
    pub missing: Vec<String>,
}

impl<T: Serialize> Scraped<T> {
    /// JSON form of `data`; strict adds a `missing_fields` key next to the payload fields.
    pub fn to_value(&self, strict: bool) -> serde_json::Result<Value> {
        let mut data = serde_json::to_value(&self.data)?;
        if strict {
            if let Value::Object(map) = &mut data {
                map.insert("missing_fields".to_string(), Value::from(self.missing.clone()));
            }
        }
        Ok(data)
    }
}

#[derive(Clone)]
pub struct ScrapeService {
    site: SiteConfig,
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<Extractor>,
}

impl ScrapeService {
    pub fn new(site: SiteConfig, fetcher: Arc<dyn Fetcher>, extractor: Arc<Extractor>) -> Self {
        Self { site, fetcher, extractor }
    }

    /// reqwest-backed service with the default selector table.
    pub fn from_config(site: SiteConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&site)?;
        let extractor = Extractor::with_default_rules()?;
        Ok(Self::new(site, Arc::new(fetcher), Arc::new(extractor)))
    }

    pub async fn home(&self, page: u32) -> Result<Scraped<HomePage>> {
        let log = telemetry::scrape();
        let root = log.root_span_kv([("op", "home".to_string()), ("page", page.to_string())]);
        async {
            let url = self.site.home_url(page);
            let html = self.fetch(&url).await?;
            let Report { record, missing } = log
                .span(&ScrapePhase::Extract)
                .in_scope(|| self.extractor.listing_report(&html, PageKind::Listing));
            log.scraped(&url, record.items.len(), &missing);
            let total_items = record.items.len();
            let data = HomePage {
                items: record.items,
                pagination: record.pagination,
                genres: record.genres,
                current_page: page,
                total_items,
            };
            Ok(Scraped { data, missing })
        }
        .instrument(root)
        .await
    }

    pub async fn genre(&self, slug: &str, page: u32) -> Result<Scraped<GenrePage>> {
        let log = telemetry::scrape();
        let root = log.root_span_kv([
            ("op", "genre".to_string()),
            ("genre", slug.to_string()),
            ("page", page.to_string()),
        ]);
        async {
            let url = self.site.genre_url(slug, page);
            let html = self.fetch(&url).await?;
            let Report { record, missing } = log
                .span(&ScrapePhase::Extract)
                .in_scope(|| self.extractor.listing_report(&html, PageKind::GenreListing));
            log.scraped(&url, record.items.len(), &missing);
            let total_items = record.items.len();
            let data = GenrePage { items: record.items, genre: slug.to_string(), current_page: page, total_items };
            Ok(Scraped { data, missing })
        }
        .instrument(root)
        .await
    }

    /// `url` is used as-is; it is expected to be a link taken from a listing.
    pub async fn detail(&self, url: &str) -> Result<Scraped<DetailRecord>> {
        let log = telemetry::scrape();
        let root = log.root_span_kv([("op", "detail".to_string()), ("url", url.to_string())]);
        async {
            let html = self.fetch(url).await?;
            let Report { mut record, missing } = log
                .span(&ScrapePhase::Extract)
                .in_scope(|| self.extractor.detail_report(&html));
            record.source_url = url.to_string();
            log.scraped(url, 1, &missing);
            Ok(Scraped { data: record, missing })
        }
        .instrument(root)
        .await
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let log = telemetry::scrape();
        let span = log.span_kv(&ScrapePhase::Fetch, [("url", url.to_string())]);
        match self.fetcher.fetch(url).instrument(span).await {
            Ok(body) => Ok(body),
            Err(err) => {
                log.warn_kv("fetch failed", [("url", url.to_string()), ("error", err.to_string())]);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{fixtures, ItemKind};
    use reqwest::StatusCode;

    fn service(mock: Arc<MockFetcher>) -> ScrapeService {
        ScrapeService::new(SiteConfig::default(), mock, Arc::new(Extractor::with_default_rules().unwrap()))
    }

    #[tokio::test]
    async fn home_page_one_hits_bare_origin() {
        let mock = Arc::new(MockFetcher::new());
        mock.push_body(fixtures::HOME_PAGE);
        let out = service(mock.clone()).home(1).await.unwrap();

        assert_eq!(mock.calls(), vec!["https://nekopoi.care"]);
        assert_eq!(out.data.current_page, 1);
        assert_eq!(out.data.total_items, 3);
        assert_eq!(out.data.items.len(), out.data.total_items);
        assert_eq!(out.data.genres.len(), 3);
        assert_eq!(out.data.pagination.len(), 2);
    }

    #[tokio::test]
    async fn home_later_page_echoes_page_number() {
        let mock = Arc::new(MockFetcher::new());
        mock.push_body(fixtures::GENRE_PAGE);
        let out = service(mock.clone()).home(2).await.unwrap();

        assert_eq!(mock.calls(), vec!["https://nekopoi.care/page/2"]);
        assert_eq!(out.data.current_page, 2);
        assert_eq!(out.data.total_items, 2);
    }

    #[tokio::test]
    async fn genre_listing_tags_items_and_echoes_slug() {
        let mock = Arc::new(MockFetcher::new());
        mock.push_body(fixtures::GENRE_PAGE);
        let out = service(mock.clone()).genre("action", 3).await.unwrap();

        assert_eq!(mock.calls(), vec!["https://nekopoi.care/category/action/page/3"]);
        assert_eq!(out.data.genre, "action");
        assert_eq!(out.data.current_page, 3);
        assert!(out.data.items.iter().all(|i| i.kind == ItemKind::Genre));
        assert!(out.missing.is_empty());
    }

    #[tokio::test]
    async fn detail_records_source_url() {
        let mock = Arc::new(MockFetcher::new());
        mock.push_body(fixtures::DETAIL_PAGE);
        let url = "https://nekopoi.care/shiny-days-episode-3/";
        let out = service(mock.clone()).detail(url).await.unwrap();

        assert_eq!(mock.calls(), vec![url]);
        assert_eq!(out.data.source_url, url);
        assert_eq!(out.data.downloads.len(), 2);
        assert_eq!(out.missing, vec!["related[1].thumbnail"]);
    }

    #[tokio::test]
    async fn upstream_status_is_a_plain_failure() {
        let mock = Arc::new(MockFetcher::new());
        mock.push_status(StatusCode::BAD_GATEWAY, "https://nekopoi.care/category/action");
        let err = service(mock).genre("action", 1).await.unwrap_err();
        assert!(err.to_string().contains("502 Bad Gateway"));
    }

    #[tokio::test]
    async fn strict_value_carries_missing_fields() {
        let mock = Arc::new(MockFetcher::new());
        mock.push_body(fixtures::HOME_PAGE);
        let out = service(mock).home(1).await.unwrap();

        let plain = out.to_value(false).unwrap();
        assert!(plain.get("missing_fields").is_none());
        let strict = out.to_value(true).unwrap();
        assert_eq!(strict["missing_fields"], serde_json::json!(out.missing));
        assert_eq!(strict["total_items"], 3);
    }
}

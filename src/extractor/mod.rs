//! Selector-driven extraction from origin HTML to typed records.
//!
//! Extraction is pure: it reads a document string and a page kind and never
//! fails. A selector that matches nothing leaves its field empty; the strict
//! report lists those fields instead of raising.

mod detail;
mod dom;
mod listing;
mod rules;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

use anyhow::Result;
use serde::Serialize;

pub use rules::SelectorRules;
pub use types::*;

use rules::Selectors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind { Listing, GenreListing, Detail }

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extraction {
    Listing(ListingPage),
    Detail(DetailRecord),
}

/// Record plus the paths of fields that came back empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<T> {
    pub record: T,
    pub missing: Vec<String>,
}

pub struct Extractor {
    rules: SelectorRules,
    sel: Selectors,
}

impl Extractor {
    pub fn new(rules: SelectorRules) -> Result<Self> {
        let sel = Selectors::compile(&rules)?;
        Ok(Extractor { rules, sel })
    }

    pub fn with_default_rules() -> Result<Self> { Self::new(SelectorRules::DEFAULT) }

    pub fn extract(&self, html: &str, kind: PageKind) -> Extraction {
        match kind {
            PageKind::Listing => Extraction::Listing(self.listing(html)),
            PageKind::GenreListing => Extraction::Listing(self.genre_listing(html)),
            PageKind::Detail => Extraction::Detail(self.detail(html)),
        }
    }

    pub fn extract_report(&self, html: &str, kind: PageKind) -> Report<Extraction> {
        match kind {
            PageKind::Listing | PageKind::GenreListing => {
                let r = self.listing_report(html, kind);
                Report { record: Extraction::Listing(r.record), missing: r.missing }
            }
            PageKind::Detail => {
                let r = self.detail_report(html);
                Report { record: Extraction::Detail(r.record), missing: r.missing }
            }
        }
    }

    pub fn listing(&self, html: &str) -> ListingPage {
        listing::extract_listing(&self.rules, &self.sel, html, ItemKind::Episode)
    }

    pub fn genre_listing(&self, html: &str) -> ListingPage {
        listing::extract_listing(&self.rules, &self.sel, html, ItemKind::Genre)
    }

    pub fn detail(&self, html: &str) -> DetailRecord {
        detail::extract_detail(&self.rules, &self.sel, html)
    }

    pub fn listing_report(&self, html: &str, kind: PageKind) -> Report<ListingPage> {
        let item_kind = if kind == PageKind::GenreListing { ItemKind::Genre } else { ItemKind::Episode };
        let record = listing::extract_listing(&self.rules, &self.sel, html, item_kind);
        let missing = listing::missing_fields(&record, item_kind);
        Report { record, missing }
    }

    pub fn detail_report(&self, html: &str) -> Report<DetailRecord> {
        let record = self.detail(html);
        let missing = detail::missing_fields(&record);
        Report { record, missing }
    }
}

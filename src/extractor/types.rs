use serde::Serialize;

// Listing records

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind { Episode, Genre }

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingItem {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub genres: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreTag { pub name: String, pub slug: String }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLink {
    #[serde(rename = "page")]
    pub label: String,
    pub url: String,
}

/// One listing page. `pagination` and `genres` stay empty for genre listings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListingPage {
    pub items: Vec<ListingItem>,
    pub pagination: Vec<PaginationLink>,
    pub genres: Vec<GenreTag>,
}

// Detail records

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream { pub player: String, pub url: String }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download { pub quality: String, pub url: String }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode { pub title: String, pub date: String, pub link: String }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Related { pub title: String, pub link: String, pub thumbnail: String }

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DetailRecord {
    pub title: String,
    pub thumbnail: String,
    pub genres: Vec<String>,
    pub streams: Vec<Stream>,
    pub downloads: Vec<Download>,
    pub episodes: Vec<Episode>,
    pub related: Vec<Related>,
    /// Filled in by the caller; the extractor never sees the URL.
    pub source_url: String,
}

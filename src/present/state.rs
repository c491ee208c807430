use crate::client::{GenrePage, HomePage};
use crate::extractor::{DetailRecord, GenreTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View { #[default] Home, Genre, Detail }

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Home(HomePage),
    Genre(GenrePage),
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Load,
    Home,
    SelectGenre(String),
    Next,
    Prev,
    Open(String),
    Back,
}

/// The fetch an intent turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Home { page: u32 },
    Genre { slug: String, page: u32 },
    Detail { url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Home(HomePage),
    Genre(GenrePage),
    Detail(DetailRecord),
}

/// One snapshot of the UI. Transitions return a new snapshot; `page` and
/// `genre` only change when a listing fetch succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub view: View,
    pub page: u32,
    pub genre: Option<String>,
    pub loading: bool,
    pub listing: Option<Listing>,
    pub detail: Option<DetailRecord>,
    // genre menu from the last home listing
    pub menu: Vec<GenreTag>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { view: View::Home, page: 1, genre: None, loading: false, listing: None, detail: None, menu: Vec::new() }
    }
}

impl ViewState {
    /// None when the intent does nothing in this state (or a fetch is in flight).
    pub fn plan(&self, intent: Intent) -> Option<Request> {
        if self.loading { return None; }
        match intent {
            Intent::Load | Intent::Home => Some(Request::Home { page: 1 }),
            Intent::SelectGenre(slug) => {
                if slug.is_empty() { None } else { Some(Request::Genre { slug, page: 1 }) }
            }
            Intent::Next => self.listing_request(self.page.checked_add(1)?),
            Intent::Prev => {
                if self.page <= 1 { None } else { self.listing_request(self.page - 1) }
            }
            Intent::Open(url) => {
                if url.is_empty() { None } else { Some(Request::Detail { url }) }
            }
            Intent::Back => {
                if self.view != View::Detail { return None; }
                Some(self.remembered_listing(self.page))
            }
        }
    }

    fn listing_request(&self, page: u32) -> Option<Request> {
        if self.view == View::Detail { return None; }
        Some(self.remembered_listing(page))
    }

    fn remembered_listing(&self, page: u32) -> Request {
        match &self.genre {
            Some(slug) => Request::Genre { slug: slug.clone(), page },
            None => Request::Home { page },
        }
    }

    pub fn begin(&self) -> ViewState {
        ViewState { loading: true, ..self.clone() }
    }

    pub fn succeed(&self, payload: Payload) -> ViewState {
        let mut next = ViewState { loading: false, ..self.clone() };
        match payload {
            Payload::Home(page) => {
                next.view = View::Home;
                next.page = page.current_page;
                next.genre = None;
                next.menu = page.genres.clone();
                next.listing = Some(Listing::Home(page));
                next.detail = None;
            }
            Payload::Genre(page) => {
                next.view = View::Genre;
                next.page = page.current_page;
                next.genre = Some(page.genre.clone());
                next.listing = Some(Listing::Genre(page));
                next.detail = None;
            }
            Payload::Detail(rec) => {
                next.view = View::Detail;
                next.detail = Some(rec);
            }
        }
        next
    }

    /// Failed fetch: prior view stays, loading clears.
    pub fn fail(&self) -> ViewState {
        ViewState { loading: false, ..self.clone() }
    }

    /// 1-based link lookup: listing items, or related titles on a detail view.
    pub fn link_at(&self, n: usize) -> Option<String> {
        let idx = n.checked_sub(1)?;
        let link = match (self.view, &self.detail, &self.listing) {
            (View::Detail, Some(rec), _) => rec.related.get(idx).map(|r| r.link.clone()),
            (_, _, Some(Listing::Home(p))) => p.items.get(idx).map(|i| i.link.clone()),
            (_, _, Some(Listing::Genre(p))) => p.items.get(idx).map(|i| i.link.clone()),
            _ => None,
        };
        link.filter(|l| !l.is_empty())
    }
}

use std::fmt::Write;

use crate::extractor::{DetailRecord, ListingItem, PaginationLink};

use super::state::{Listing, View, ViewState};

// cards show at most this many genre chips
const CARD_GENRES: usize = 3;

pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    if state.loading {
        out.push_str("Loading…\n");
        return out;
    }
    match (state.view, &state.detail) {
        (View::Detail, Some(rec)) => render_detail(&mut out, rec),
        _ => render_listing(&mut out, state),
    }
    out
}

fn render_listing(out: &mut String, state: &ViewState) {
    let header = match &state.genre {
        Some(slug) => format!("Genre: {}", slug),
        None => "Home".to_string(),
    };
    let _ = writeln!(out, "== {} · page {} ==", header, state.page);

    if !state.menu.is_empty() {
        let chips: Vec<String> = state.menu.iter().map(|g| format!("{} ({})", g.name, g.slug)).collect();
        let _ = writeln!(out, "Genres: {}", chips.join("  "));
    }

    let (items, pagination): (&[ListingItem], &[PaginationLink]) = match &state.listing {
        Some(Listing::Home(p)) => (&p.items, &p.pagination),
        Some(Listing::Genre(p)) => (&p.items, &[]),
        None => (&[], &[]),
    };
    if items.is_empty() {
        out.push_str("(no items)\n");
    }
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, item.title);
        if !item.genres.is_empty() {
            let chips: Vec<&str> = item.genres.iter().take(CARD_GENRES).map(String::as_str).collect();
            let _ = writeln!(out, "    [{}]", chips.join("] ["));
        }
    }
    if !pagination.is_empty() {
        let labels: Vec<&str> = pagination.iter().map(|p| p.label.as_str()).collect();
        let _ = writeln!(out, "Pages: {}", labels.join(" | "));
    }
}

fn render_detail(out: &mut String, rec: &DetailRecord) {
    let _ = writeln!(out, "== {} ==", if rec.title.is_empty() { "(untitled)" } else { &rec.title });
    if !rec.thumbnail.is_empty() { let _ = writeln!(out, "Image: {}", rec.thumbnail); }
    if !rec.genres.is_empty() { let _ = writeln!(out, "Genres: {}", rec.genres.join(", ")); }

    out.push_str("Stream players:\n");
    for s in &rec.streams { let _ = writeln!(out, "  {:<8} {}", s.player, s.url); }

    if !rec.downloads.is_empty() {
        out.push_str("Downloads:\n");
        for d in &rec.downloads { let _ = writeln!(out, "  {:<8} {}", d.quality, d.url); }
    }
    if !rec.episodes.is_empty() {
        out.push_str("Episodes:\n");
        for e in &rec.episodes { let _ = writeln!(out, "  {}  ({})", e.title, e.date); }
    }
    if !rec.related.is_empty() {
        out.push_str("Related:\n");
        for (i, r) in rec.related.iter().enumerate() { let _ = writeln!(out, "{:>2}. {}", i + 1, r.title); }
    }
    if !rec.source_url.is_empty() { let _ = writeln!(out, "Source: {}", rec.source_url); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HomePage;
    use crate::extractor::{Download, GenreTag, ItemKind, Stream};
    use crate::present::state::Payload;

    #[test]
    fn listing_cards_show_three_genres() {
        let page = HomePage {
            items: vec![ListingItem {
                title: "Shiny Days Episode 3".into(),
                link: "https://nekopoi.care/shiny/".into(),
                thumbnail: String::new(),
                genres: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                kind: ItemKind::Episode,
            }],
            pagination: vec![PaginationLink { label: "2".into(), url: "https://nekopoi.care/page/2".into() }],
            genres: vec![GenreTag { name: "Action".into(), slug: "action".into() }],
            current_page: 1,
            total_items: 1,
        };
        let s = ViewState::default().succeed(Payload::Home(page));
        let text = render(&s);
        assert!(text.starts_with("== Home · page 1 ==\n"));
        assert!(text.contains("Genres: Action (action)"));
        assert!(text.contains(" 1. Shiny Days Episode 3\n    [A] [B] [C]\n"));
        assert!(text.contains("Pages: 2"));
    }

    #[test]
    fn empty_listing_says_so() {
        assert!(render(&ViewState::default()).contains("(no items)"));
    }

    #[test]
    fn loading_hides_content() {
        assert_eq!(render(&ViewState::default().begin()), "Loading…\n");
    }

    #[test]
    fn detail_view_lists_players_and_downloads() {
        let rec = DetailRecord {
            title: "Shiny Days Episode 3".into(),
            streams: vec![Stream { player: "KStream".into(), url: "https://kstream.example/e/1".into() }],
            downloads: vec![Download { quality: "720p".into(), url: "https://files.example/720".into() }],
            source_url: "https://nekopoi.care/shiny/".into(),
            ..DetailRecord::default()
        };
        let text = render(&ViewState::default().succeed(Payload::Detail(rec)));
        assert!(text.starts_with("== Shiny Days Episode 3 ==\n"));
        assert!(text.contains("  KStream  https://kstream.example/e/1\n"));
        assert!(text.contains("  720p     https://files.example/720\n"));
        assert!(!text.contains("Episodes:"));
        assert!(text.ends_with("Source: https://nekopoi.care/shiny/\n"));
    }
}

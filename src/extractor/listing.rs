use scraper::Html;

use super::dom::{attr_of, own_attr, own_text, slug_from_href, text_of};
use super::rules::{SelectorRules, Selectors};
use super::types::{GenreTag, ItemKind, ListingItem, ListingPage, PaginationLink};

// Home and genre pages share the card rules; only the home page is scanned
// for pager and category-menu anchors.
pub fn extract_listing(rules: &SelectorRules, sel: &Selectors, html: &str, kind: ItemKind) -> ListingPage {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let items: Vec<ListingItem> = root
        .select(&sel.post_card)
        .map(|card| ListingItem {
            title: text_of(card, &sel.card_title),
            link: attr_of(card, &sel.card_title, "href"),
            thumbnail: attr_of(card, &sel.card_thumbnail, "src"),
            genres: card.select(&sel.tag_links).map(own_text).collect(),
            kind,
        })
        .collect();

    if kind == ItemKind::Genre {
        return ListingPage { items, ..ListingPage::default() };
    }

    let pagination = root
        .select(&sel.pager_links)
        .map(|a| PaginationLink { label: own_text(a), url: own_attr(a, "href") })
        .collect();

    let genres = root
        .select(&sel.category_menu)
        .map(|a| GenreTag {
            name: own_text(a),
            slug: slug_from_href(&own_attr(a, "href"), rules.category_marker),
        })
        .collect();

    ListingPage { items, pagination, genres }
}

pub fn missing_fields(page: &ListingPage, kind: ItemKind) -> Vec<String> {
    let mut missing = Vec::new();
    if page.items.is_empty() { missing.push("items".to_string()); }
    for (i, item) in page.items.iter().enumerate() {
        if item.title.is_empty() { missing.push(format!("items[{}].title", i)); }
        if item.link.is_empty() { missing.push(format!("items[{}].link", i)); }
        if item.thumbnail.is_empty() { missing.push(format!("items[{}].thumbnail", i)); }
        if item.genres.is_empty() { missing.push(format!("items[{}].genres", i)); }
    }
    if kind == ItemKind::Episode {
        if page.pagination.is_empty() { missing.push("pagination".to_string()); }
        if page.genres.is_empty() { missing.push("genres".to_string()); }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::fixtures;

    fn run(html: &str, kind: ItemKind) -> ListingPage {
        let rules = SelectorRules::DEFAULT;
        let sel = Selectors::compile(&rules).unwrap();
        extract_listing(&rules, &sel, html, kind)
    }

    #[test]
    fn one_item_per_card_in_document_order() {
        let page = run(fixtures::HOME_PAGE, ItemKind::Episode);
        let titles: Vec<&str> = page.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Shiny Days Episode 3", "Moonlit Garden Episode 1", "Quiet Harbor OVA"]);
        assert_eq!(page.items[0].link, "https://nekopoi.care/shiny-days-episode-3/");
        assert_eq!(page.items[0].thumbnail, "https://nekopoi.care/img/shiny-3.jpg");
        assert_eq!(page.items[0].genres, vec!["Action", "Comedy"]);
        assert!(page.items.iter().all(|i| i.kind == ItemKind::Episode));
    }

    #[test]
    fn missing_thumbnail_does_not_abort() {
        let page = run(fixtures::HOME_PAGE, ItemKind::Episode);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[2].thumbnail, "");
        assert_eq!(page.items[2].title, "Quiet Harbor OVA");
        assert!(page.items[2].genres.is_empty());
    }

    #[test]
    fn home_page_collects_pager_and_categories() {
        let page = run(fixtures::HOME_PAGE, ItemKind::Episode);
        assert_eq!(page.pagination.len(), 2);
        assert_eq!(page.pagination[0], PaginationLink { label: "2".into(), url: "https://nekopoi.care/page/2".into() });
        assert_eq!(page.pagination[1].label, "Next »");

        let slugs: Vec<&str> = page.genres.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, vec!["action", "romance", ""]);
        assert_eq!(page.genres[0].name, "Action");
    }

    #[test]
    fn genre_page_skips_pager_and_categories() {
        let page = run(fixtures::GENRE_PAGE, ItemKind::Genre);
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|i| i.kind == ItemKind::Genre));
        assert!(page.pagination.is_empty());
        assert!(page.genres.is_empty());
    }

    #[test]
    fn empty_document_yields_empty_page() {
        let page = run("<html><body><p>maintenance</p></body></html>", ItemKind::Episode);
        assert_eq!(page, ListingPage::default());
    }

    #[test]
    fn missing_fields_lists_absent_values() {
        let page = run(fixtures::HOME_PAGE, ItemKind::Episode);
        let missing = missing_fields(&page, ItemKind::Episode);
        assert_eq!(missing, vec!["items[2].thumbnail", "items[2].genres"]);

        let empty = missing_fields(&ListingPage::default(), ItemKind::Episode);
        assert_eq!(empty, vec!["items", "pagination", "genres"]);
    }
}

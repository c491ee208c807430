use scraper::Html;

use super::dom::{attr_of, own_attr, own_text, text_of};
use super::rules::{SelectorRules, Selectors};
use super::types::{DetailRecord, Download, Episode, Related, Stream};

pub fn extract_detail(rules: &SelectorRules, sel: &Selectors, html: &str) -> DetailRecord {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let title = text_of(root, &sel.detail_title);
    let thumbnail = attr_of(root, &sel.detail_image, "src");
    let genres = root.select(&sel.tag_links).map(own_text).collect();

    // embedded frames first, then outbound redirect anchors
    let mut streams: Vec<Stream> = root
        .select(&sel.frames)
        .filter_map(|frame| frame.value().attr("src"))
        .filter(|src| src.contains(rules.frame_scheme_marker))
        .map(|src| Stream { player: rules.frame_player.to_string(), url: src.to_string() })
        .collect();
    streams.extend(
        root.select(&sel.redirect_links)
            .map(|a| own_attr(a, "href"))
            .filter(|href| !href.is_empty())
            .map(|url| Stream { player: rules.redirect_player.to_string(), url }),
    );

    let downloads = root
        .select(&sel.download_links)
        .map(|a| (own_text(a), own_attr(a, "href")))
        .filter(|(text, href)| !text.is_empty() && !href.is_empty())
        .map(|(quality, url)| Download { quality, url })
        .collect();

    let episodes = root
        .select(&sel.episode_rows)
        .map(|row| Episode {
            title: text_of(row, &sel.episode_title),
            date: text_of(row, &sel.episode_date),
            link: attr_of(row, &sel.episode_link, "href"),
        })
        .collect();

    let related = root
        .select(&sel.related_rows)
        .map(|row| Related {
            title: text_of(row, &sel.related_title),
            link: attr_of(row, &sel.related_title, "href"),
            thumbnail: attr_of(row, &sel.related_thumbnail, "src"),
        })
        .collect();

    DetailRecord { title, thumbnail, genres, streams, downloads, episodes, related, source_url: String::new() }
}

pub fn missing_fields(rec: &DetailRecord) -> Vec<String> {
    let mut missing = Vec::new();
    let mut check = |absent: bool, path: &str| if absent { missing.push(path.to_string()) };
    check(rec.title.is_empty(), "title");
    check(rec.thumbnail.is_empty(), "thumbnail");
    check(rec.genres.is_empty(), "genres");
    check(rec.streams.is_empty(), "streams");
    check(rec.downloads.is_empty(), "downloads");
    check(rec.episodes.is_empty(), "episodes");
    check(rec.related.is_empty(), "related");
    for (i, ep) in rec.episodes.iter().enumerate() {
        if ep.title.is_empty() { missing.push(format!("episodes[{}].title", i)); }
        if ep.date.is_empty() { missing.push(format!("episodes[{}].date", i)); }
        if ep.link.is_empty() { missing.push(format!("episodes[{}].link", i)); }
    }
    for (i, rel) in rec.related.iter().enumerate() {
        if rel.title.is_empty() { missing.push(format!("related[{}].title", i)); }
        if rel.link.is_empty() { missing.push(format!("related[{}].link", i)); }
        if rel.thumbnail.is_empty() { missing.push(format!("related[{}].thumbnail", i)); }
    }
    missing
}

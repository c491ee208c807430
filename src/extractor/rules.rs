use anyhow::{anyhow, Result};
use scraper::Selector;

/// Every selector, marker and label the extractor depends on.
/// Markup changes on the origin site are absorbed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorRules {
    // listing pages
    pub post_card: &'static str,
    pub card_title: &'static str,
    pub card_thumbnail: &'static str,
    pub tag_links: &'static str,
    pub pager_links: &'static str,
    pub category_menu: &'static str,
    pub category_marker: &'static str,

    // detail pages
    pub detail_title: &'static str,
    pub detail_image: &'static str,
    pub frames: &'static str,
    pub frame_scheme_marker: &'static str,
    pub frame_player: &'static str,
    pub redirect_marker: &'static str,
    pub redirect_player: &'static str,
    pub download_links: &'static str,
    pub episode_rows: &'static str,
    pub episode_title: &'static str,
    pub episode_date: &'static str,
    pub episode_link: &'static str,
    pub related_rows: &'static str,
    pub related_title: &'static str,
    pub related_thumbnail: &'static str,
}

impl SelectorRules {
    pub const DEFAULT: SelectorRules = SelectorRules {
        post_card: ".eropost",
        card_title: ".title a",
        card_thumbnail: ".img-thumb img",
        tag_links: ".cat-links a",
        pager_links: ".pagination a",
        category_menu: ".menu-category-kanan ul li a",
        category_marker: "/category/",

        detail_title: ".post-title h1",
        detail_image: ".wp-post-image",
        frames: ".responsive-embed iframe",
        frame_scheme_marker: "http",
        frame_player: "KStream",
        redirect_marker: "nekopoi.care/go?to=",
        redirect_player: "Mirror",
        download_links: ".dlbox a",
        episode_rows: ".eplister ul li",
        episode_title: ".epl-title",
        episode_date: ".epl-date",
        episode_link: "a",
        related_rows: ".related-posts .item-related",
        related_title: ".title-related a",
        related_thumbnail: ".img-related img",
    };
}

/// Compiled form of [`SelectorRules`].
pub(crate) struct Selectors {
    pub post_card: Selector,
    pub card_title: Selector,
    pub card_thumbnail: Selector,
    pub tag_links: Selector,
    pub pager_links: Selector,
    pub category_menu: Selector,
    pub detail_title: Selector,
    pub detail_image: Selector,
    pub frames: Selector,
    pub redirect_links: Selector,
    pub download_links: Selector,
    pub episode_rows: Selector,
    pub episode_title: Selector,
    pub episode_date: Selector,
    pub episode_link: Selector,
    pub related_rows: Selector,
    pub related_title: Selector,
    pub related_thumbnail: Selector,
}

impl Selectors {
    pub fn compile(rules: &SelectorRules) -> Result<Self> {
        let redirect = format!("a[href*=\"{}\"]", rules.redirect_marker);
        Ok(Selectors {
            post_card: parse(rules.post_card)?,
            card_title: parse(rules.card_title)?,
            card_thumbnail: parse(rules.card_thumbnail)?,
            tag_links: parse(rules.tag_links)?,
            pager_links: parse(rules.pager_links)?,
            category_menu: parse(rules.category_menu)?,
            detail_title: parse(rules.detail_title)?,
            detail_image: parse(rules.detail_image)?,
            frames: parse(rules.frames)?,
            redirect_links: parse(&redirect)?,
            download_links: parse(rules.download_links)?,
            episode_rows: parse(rules.episode_rows)?,
            episode_title: parse(rules.episode_title)?,
            episode_date: parse(rules.episode_date)?,
            episode_link: parse(rules.episode_link)?,
            related_rows: parse(rules.related_rows)?,
            related_title: parse(rules.related_title)?,
            related_thumbnail: parse(rules.related_thumbnail)?,
        })
    }
}

fn parse(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector `{}`: {:?}", css, e))
}

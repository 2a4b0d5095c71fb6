//! DOM extraction rules for the chan page markup.
//!
//! Listing pages are scanned thumb by thumb: anything a thumb fails to carry
//! degrades to an empty field instead of failing the page. Detail pages are
//! stricter in exactly one place: without the original-file link there is no
//! file URL and no hash, so the whole fetch fails.
use scraper::{ElementRef, Html, Selector};

use skc_common::post::{
    rating::Rating,
    tags::{Tag, TagType},
    Post, Source,
};
use skc_common::SankakuServer;

use crate::error::ExtractorError;

/// Label and anchor conventions of the detail page stats list.
///
/// The frontend renders these as locale-dependent literals, so they stay an
/// explicit table the caller can override instead of being inferred from the
/// markup.
#[derive(Debug, Clone)]
pub struct StatsLabels {
    /// Leading text of the line item carrying the source attribution.
    pub source_prefixes: Vec<String>,
    /// `id` of the anchor pointing at the original file.
    pub original_anchor: String,
    /// `id` of the anchor pointing at the resized sample.
    pub resized_anchor: String,
}

impl Default for StatsLabels {
    fn default() -> Self {
        Self {
            source_prefixes: vec![String::from("Source:"), String::from("ソース:")],
            original_anchor: String::from("highres"),
            resized_anchor: String::from("lowres"),
        }
    }
}

fn selector(input: &str) -> Result<Selector, ExtractorError> {
    Selector::parse(input)
        .map_err(|e| ExtractorError::HtmlParseFail(format!("invalid selector {input}: {e:?}")))
}

/// Rewrites protocol-relative URLs to https. Absolute URLs pass through
/// unchanged, so the rewrite is idempotent.
pub(crate) fn normalize_url(url: &str) -> String {
    match url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

/// Filename stem of the last path segment: everything before the first `.`.
/// Without an extension the stem is the whole filename.
pub(crate) fn file_stem(url: &str) -> String {
    let name = url.rsplit('/').next().unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Thumbnail location for a content hash on the static file host:
/// `<static>/data/preview/<md5[0..2]>/<md5[2..4]>/<md5>.jpg`.
///
/// Hashes too short to provide both path segments yield an empty URL.
pub(crate) fn preview_url_from_md5(static_url: &str, md5: &str) -> String {
    match (md5.get(0..2), md5.get(2..4)) {
        (Some(first), Some(second)) => {
            format!("{static_url}/data/preview/{first}/{second}/{md5}.jpg")
        }
        _ => String::new(),
    }
}

/// Extracts every thumb on a listing page.
pub(crate) fn parse_post_list(html: &str) -> Result<Vec<Post>, ExtractorError> {
    let document = Html::parse_document(html);
    let thumb = selector("span.thumb")?;
    let preview = selector("img.preview")?;

    let posts = document
        .select(&thumb)
        .map(|element| parse_thumb(&element, &preview))
        .collect();

    Ok(posts)
}

fn parse_thumb(element: &ElementRef, preview: &Selector) -> Post {
    let raw_id = element.value().attr("id").unwrap_or_default();
    let id = raw_id.strip_prefix('p').unwrap_or(raw_id).to_string();

    let (tags, preview_url) = match element.select(preview).next() {
        Some(img) => {
            let tags = img
                .value()
                .attr("title")
                .unwrap_or_default()
                .split_whitespace()
                .map(Tag::named)
                .collect();
            let preview_url = normalize_url(img.value().attr("src").unwrap_or_default());
            (tags, preview_url)
        }
        None => (Vec::new(), String::new()),
    };

    Post {
        id,
        server: SankakuServer::Chan,
        md5: String::new(),
        rating: Rating::Unknown,
        tags,
        preview_url,
        sample_url: String::new(),
        file_url: String::new(),
        source: None,
    }
}

/// Extracts the full record from a detail page.
///
/// The page id comes from the caller: the requested post id is authoritative,
/// the page itself doesn't repeat it anywhere reliable.
pub(crate) fn parse_post_detail(
    html: &str,
    post_id: &str,
    labels: &StatsLabels,
    static_url: &str,
) -> Result<Post, ExtractorError> {
    let document = Html::parse_document(html);
    let stats_item = selector("#stats li")?;
    let anchor = selector("a")?;

    let mut source = None;
    let mut file_url = String::new();
    let mut sample_url = String::new();

    for item in document.select(&stats_item) {
        let text = item.text().collect::<String>().trim().to_string();

        if let Some(prefix) = labels
            .source_prefixes
            .iter()
            .find(|p| text.starts_with(p.as_str()))
        {
            source = parse_source(&item, &anchor, &text, prefix);
            continue;
        }

        for link in item.select(&anchor) {
            let href = || normalize_url(link.value().attr("href").unwrap_or_default());
            match link.value().attr("id") {
                Some(id) if id == labels.original_anchor => file_url = href(),
                Some(id) if id == labels.resized_anchor => sample_url = href(),
                _ => {}
            }
        }
    }

    if file_url.is_empty() {
        return Err(ExtractorError::MissingOriginalFile);
    }

    let md5 = file_stem(&file_url);
    let preview_url = preview_url_from_md5(static_url, &md5);
    let tags = parse_tag_sidebar(&document)?;

    Ok(Post {
        id: post_id.to_string(),
        server: SankakuServer::Chan,
        md5,
        rating: Rating::Unknown,
        tags,
        preview_url,
        sample_url,
        file_url,
        source,
    })
}

fn parse_source(
    item: &ElementRef,
    anchor: &Selector,
    text: &str,
    prefix: &str,
) -> Option<Source> {
    if let Some(link) = item.select(anchor).next() {
        return Some(Source {
            title: link.text().collect::<String>().trim().to_string(),
            url: normalize_url(link.value().attr("href").unwrap_or_default()),
        });
    }

    // Plain-text attribution without a link.
    let title = text[prefix.len()..].trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(Source {
            title,
            url: String::new(),
        })
    }
}

fn parse_tag_sidebar(document: &Html) -> Result<Vec<Tag>, ExtractorError> {
    let sidebar_anchor = selector("#tag-sidebar li a")?;

    let mut tags = Vec::new();
    for link in document.select(&sidebar_anchor) {
        let name = link
            .text()
            .collect::<String>()
            .trim()
            .replace(' ', "_");
        if name.is_empty() {
            continue;
        }

        let tag_type = link
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|li| li.value().attr("class"))
            .map_or(TagType::Any, TagType::from_class_name);

        tags.push(Tag::with_type(&name, tag_type));
    }

    Ok(tags)
}

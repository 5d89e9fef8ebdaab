//! Website metadata extraction from `<title>` and `<meta>` tags.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

// Pre-compiled selectors
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_DESC_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name='description']").unwrap());
static META_KEYWORDS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name='keywords']").unwrap());
static OG_IMAGE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property='og:image']").unwrap());

/// Metadata fields lifted from one page. Missing tags yield absent fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
}

/// Extract metadata from a parsed document.
///
/// The first matching tag wins for every field. The `og:image` content is
/// resolved against `page_url` when relative.
pub fn extract_metadata(page_url: &Url, document: &Html) -> WebsiteMetadata {
    let title = document
        .select(&TITLE_SEL)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty());

    let description = first_content(document, &META_DESC_SEL);
    let keywords = first_content(document, &META_KEYWORDS_SEL);

    let og_image = first_content(document, &OG_IMAGE_SEL)
        .and_then(|content| page_url.join(&content).ok())
        .map(|u| u.to_string());

    WebsiteMetadata {
        title,
        description,
        keywords,
        og_image,
    }
}

fn first_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

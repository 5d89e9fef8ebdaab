//! HTML extraction for the analysis pipeline.
//!
//! - Metadata fields from `<title>` and `<meta>` tags (`metadata`)
//! - Social profile links from anchor hrefs (`social`)
//!
//! Both extractors run over a single parsed document; a page is fetched and
//! parsed exactly once per analysis.

use scraper::Html;
use url::Url;

pub mod metadata;
pub mod social;

pub use metadata::WebsiteMetadata;
pub use social::SocialLinks;

/// Parse the document once and run both extractors over it.
pub fn analyze_document(page_url: &Url, html: &str) -> (WebsiteMetadata, SocialLinks) {
    let document = Html::parse_document(html);
    let metadata = metadata::extract_metadata(page_url, &document);
    let social = social::extract_social_links(&document);
    (metadata, social)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_parse_feeds_both_extractors() {
        let page_url = Url::parse("https://loja.example.com").unwrap();
        let html = r#"
            <html><head>
              <title>Loja Aurora</title>
              <meta name="description" content="Moda feminina">
            </head><body>
              <a href="https://instagram.com/lojaaurora">ig</a>
            </body></html>
        "#;
        let (metadata, social) = analyze_document(&page_url, html);
        assert_eq!(metadata.title.as_deref(), Some("Loja Aurora"));
        assert_eq!(metadata.description.as_deref(), Some("Moda feminina"));
        assert_eq!(
            social.instagram.as_deref(),
            Some("https://instagram.com/lojaaurora")
        );
    }

    #[test]
    fn empty_document_yields_absent_everything() {
        let page_url = Url::parse("https://example.com").unwrap();
        let (metadata, social) = analyze_document(&page_url, "");
        assert_eq!(metadata, WebsiteMetadata::default());
        assert_eq!(social, SocialLinks::default());
    }
}

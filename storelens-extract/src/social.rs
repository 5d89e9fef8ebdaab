//! Social profile link extraction from anchor hrefs.
//!
//! Matching is naive substring containment on the href, by design: a path
//! that merely mentions "facebook.com" counts as a Facebook link. That quirk
//! is part of the documented behavior, not something to fix silently.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// First discovered profile link per platform; absent when no href matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
}

/// Walk every `a[href]` and record the first href containing each platform
/// domain. A single href is credited to at most one platform, checked in
/// fixed order (instagram, facebook, twitter, linkedin, youtube, tiktok).
pub fn extract_social_links(document: &Html) -> SocialLinks {
    let mut links = SocialLinks::default();

    for element in document.select(&ANCHOR_SEL) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.contains("instagram.com") && links.instagram.is_none() {
            links.instagram = Some(href.to_string());
        } else if href.contains("facebook.com") && links.facebook.is_none() {
            links.facebook = Some(href.to_string());
        } else if href.contains("twitter.com") && links.twitter.is_none() {
            links.twitter = Some(href.to_string());
        } else if href.contains("linkedin.com") && links.linkedin.is_none() {
            links.linkedin = Some(href.to_string());
        } else if href.contains("youtube.com") && links.youtube.is_none() {
            links.youtube = Some(href.to_string());
        } else if href.contains("tiktok.com") && links.tiktok.is_none() {
            links.tiktok = Some(href.to_string());
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> SocialLinks {
        extract_social_links(&Html::parse_document(html))
    }

    #[test]
    fn records_one_link_per_platform() {
        let got = extract(
            r#"<body>
              <a href="https://instagram.com/loja">ig</a>
              <a href="https://facebook.com/loja">fb</a>
              <a href="https://www.youtube.com/@loja">yt</a>
            </body>"#,
        );
        assert_eq!(got.instagram.as_deref(), Some("https://instagram.com/loja"));
        assert_eq!(got.facebook.as_deref(), Some("https://facebook.com/loja"));
        assert_eq!(got.youtube.as_deref(), Some("https://www.youtube.com/@loja"));
        assert_eq!(got.twitter, None);
        assert_eq!(got.linkedin, None);
        assert_eq!(got.tiktok, None);
    }

    #[test]
    fn first_match_wins() {
        let got = extract(
            r#"<body>
              <a href="https://instagram.com/primeira">1</a>
              <a href="https://instagram.com/segunda">2</a>
            </body>"#,
        );
        assert_eq!(
            got.instagram.as_deref(),
            Some("https://instagram.com/primeira")
        );
    }

    #[test]
    fn substring_containment_quirk_is_preserved() {
        // Not a real Facebook profile, but the href contains the domain.
        let got = extract(r#"<a href="https://example.com/blog/facebook.com-review">x</a>"#);
        assert_eq!(
            got.facebook.as_deref(),
            Some("https://example.com/blog/facebook.com-review")
        );
    }

    #[test]
    fn one_href_is_credited_to_a_single_platform() {
        // Contains both domains; the chain order assigns it to instagram only.
        let got = extract(r#"<a href="https://instagram.com/go?next=facebook.com/loja">x</a>"#);
        assert!(got.instagram.is_some());
        assert_eq!(got.facebook, None);
    }

    #[test]
    fn anchors_without_matches_yield_nothing() {
        let got = extract(r#"<a href="https://example.com/contato">contato</a>"#);
        assert_eq!(got, SocialLinks::default());
    }
}

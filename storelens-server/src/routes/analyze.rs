//! Analysis route handler: one fetch, one parse, one rendered message.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use storelens_analysis::{VisibilityData, classify, outreach};
use storelens_extract::{SocialLinks, WebsiteMetadata, analyze_document};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Flat result object for one analysis. Lives only for the duration of the
/// request/response cycle; nothing is persisted.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub store_name: String,
    pub contact_person: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub instagram_link: Option<String>,
    pub facebook_link: Option<String>,
    pub twitter_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub youtube_link: Option<String>,
    pub tiktok_link: Option<String>,
    pub estimated_traffic: String,
    pub seo_score: String,
    pub has_blog: bool,
    pub conquista: String,
    pub oportunidade: String,
    pub cold_outreach_message: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<Value>)> {
    let url = match req.url.filter(|u| !u.is_empty()) {
        Some(u) => u,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "URL não fornecida" })),
            ));
        }
    };

    let (metadata, social) = fetch_and_extract(&state, &url).await;
    let visibility = VisibilityData::simulate(&url);

    let findings = classify(&metadata, &social, &visibility);
    let conquista = outreach::join_sentences(&findings.conquista);
    let oportunidade = outreach::join_sentences(&findings.oportunidade);

    let store_name = outreach::store_name(metadata.title.as_deref(), &url);
    let cold_outreach_message =
        outreach::render_message(&store_name, &conquista, &oportunidade, &state.signer);

    Ok(Json(AnalysisResult {
        url,
        store_name,
        contact_person: state.signer.contact_person.clone(),
        title: metadata.title,
        description: metadata.description,
        keywords: metadata.keywords,
        og_image: metadata.og_image,
        instagram_link: social.instagram,
        facebook_link: social.facebook,
        twitter_link: social.twitter,
        linkedin_link: social.linkedin,
        youtube_link: social.youtube,
        tiktok_link: social.tiktok,
        estimated_traffic: visibility.estimated_traffic,
        seo_score: visibility.seo_score,
        has_blog: visibility.has_blog,
        conquista,
        oportunidade,
        cold_outreach_message,
    }))
}

/// Fetch and parse the page. Failures degrade to all-absent metadata and
/// links — logged, never surfaced as a request failure.
async fn fetch_and_extract(state: &AppState, raw_url: &str) -> (WebsiteMetadata, SocialLinks) {
    let page_url = match Url::parse(raw_url) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(url = %raw_url, error = %e, "analyze.url_parse_failed");
            return (WebsiteMetadata::default(), SocialLinks::default());
        }
    };

    match state.pages.fetch_page(&page_url).await {
        Ok(html) => analyze_document(&page_url, &html),
        Err(e) => {
            tracing::warn!(url = %page_url, error = %e, "analyze.fetch_failed");
            (WebsiteMetadata::default(), SocialLinks::default())
        }
    }
}

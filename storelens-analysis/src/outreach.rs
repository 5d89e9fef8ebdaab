//! Sentence joining and the cold-outreach message template.

use serde::{Deserialize, Serialize};
use url::Url;

/// Identity signing the rendered message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signer {
    pub agency_name: String,
    pub contact_person: String,
    pub scheduling_link: String,
}

impl Default for Signer {
    fn default() -> Self {
        Self {
            agency_name: "DataFashion Marketing".to_string(),
            contact_person: "Time de Marketing".to_string(),
            scheduling_link: "calendly.com/datafashion/15min".to_string(),
        }
    }
}

/// Join sentences with `". "` and a single trailing period.
///
/// The classifier stores sentences without their closing period, so the
/// result carries exactly one period per sentence. An empty list renders as
/// just `"."`, matching the fixed template shape.
pub fn join_sentences(sentences: &[&str]) -> String {
    format!("{}.", sentences.join(". "))
}

/// Pick the display name for the store: page title, else the URL host,
/// else the raw input string.
pub fn store_name(title: Option<&str>, raw_url: &str) -> String {
    if let Some(t) = title {
        return t.to_string();
    }
    Url::parse(raw_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| raw_url.to_string())
}

/// Fill the fixed multi-line outreach template.
pub fn render_message(
    store_name: &str,
    conquista: &str,
    oportunidade: &str,
    signer: &Signer,
) -> String {
    format!(
        "\nOlá, {contact},\n\nNós da {agency} notamos o trabalho de vocês em {store}. \
Identificamos as seguintes conquistas: {conquista}\n\nE vimos que há uma grande oportunidade \
para: {oportunidade} Podemos ajudar a destravar esse potencial.\n\nQue tal conversarmos por \
15 minutos para mostrar como podemos impulsionar suas vendas online?\n\nAgende aqui: {link}\n\n\
Atenciosamente,\nEquipe {agency}\n",
        contact = signer.contact_person,
        agency = signer.agency_name,
        store = store_name,
        conquista = conquista,
        oportunidade = oportunidade,
        link = signer.scheduling_link,
    )
}

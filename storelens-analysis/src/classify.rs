//! Fixed decision table mapping analysis signals to canned sentences.
//!
//! Signals are evaluated in a fixed order: the six platforms (instagram,
//! facebook, twitter, linkedin, youtube, tiktok), then title, description,
//! keywords, Open Graph image, and finally the blog flag. Each true signal
//! appends exactly one achievement; most false signals append one
//! opportunity. Twitter, LinkedIn, and YouTube have no absence branch.
//!
//! Sentences are stored without their trailing period; the renderer joins
//! them with `". "` and closes the string with a single period.

use storelens_extract::{SocialLinks, WebsiteMetadata};

use crate::visibility::VisibilityData;

/// Ordered sentence lists produced by the decision table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub conquista: Vec<&'static str>,
    pub oportunidade: Vec<&'static str>,
}

/// Run the decision table. Pure: identical input yields identical output.
pub fn classify(
    metadata: &WebsiteMetadata,
    social: &SocialLinks,
    visibility: &VisibilityData,
) -> Findings {
    let mut findings = Findings::default();
    let conquista = &mut findings.conquista;
    let oportunidade = &mut findings.oportunidade;

    // Redes sociais
    if social.instagram.is_some() {
        conquista.push("Presença ativa no Instagram");
        oportunidade.push("Explorar mais Reels e Stories para aumentar o engajamento e alcance");
    } else {
        oportunidade
            .push("Grande potencial de crescimento com a criação de uma presença no Instagram");
    }

    if social.facebook.is_some() {
        conquista.push("Presença no Facebook");
        oportunidade.push("Otimizar campanhas de Facebook Ads para segmentação de público");
    } else {
        oportunidade.push(
            "Considerar a criação de uma página no Facebook para alcançar um público mais amplo",
        );
    }

    if social.twitter.is_some() {
        conquista.push("Presença no Twitter");
        oportunidade
            .push("Utilizar o Twitter para notícias rápidas, promoções e promoções em tempo real");
    }

    if social.linkedin.is_some() {
        conquista.push("Presença no LinkedIn");
        oportunidade.push("Aproveitar o LinkedIn para networking B2B ou branding corporativo");
    }

    if social.youtube.is_some() {
        conquista.push("Presença no YouTube");
        oportunidade
            .push("Desenvolver conteúdo em vídeo (tutoriais, reviews) para SEO e engajamento");
    }

    if social.tiktok.is_some() {
        conquista.push("Presença no TikTok");
        oportunidade.push("Criar vídeos curtos e virais para atrair a geração Z");
    } else {
        oportunidade.push("Explorar o TikTok para alcançar um público jovem e engajado");
    }

    // Metadados do site
    if metadata
        .title
        .as_deref()
        .is_some_and(|t| t.chars().count() > 10)
    {
        conquista.push("Título do site claro e descritivo");
    } else {
        oportunidade.push(
            "Otimizar o título do site para melhorar o SEO e a atratividade nos resultados de busca",
        );
    }

    if metadata
        .description
        .as_deref()
        .is_some_and(|d| d.chars().count() > 50)
    {
        conquista.push("Meta descrição otimizada e informativa");
    } else {
        oportunidade
            .push("Melhorar a meta descrição para aumentar a taxa de cliques nos motores de busca");
    }

    if metadata.keywords.is_some() {
        conquista.push("Palavras-chave relevantes configuradas");
    } else {
        oportunidade.push("Adicionar palavras-chave relevantes para melhorar a indexação e o SEO");
    }

    if metadata.og_image.is_some() {
        conquista.push("Imagem Open Graph configurada para compartilhamento social");
    } else {
        oportunidade
            .push("Configurar uma imagem Open Graph para melhorar a apresentação em redes sociais");
    }

    // Visibilidade (simulada)
    if visibility.has_blog {
        conquista.push("Possui um blog ativo");
        oportunidade.push(
            "Publicar conteúdo regularmente no blog para atrair tráfego orgânico e educar o público",
        );
    } else {
        oportunidade
            .push("Considerar a criação de um blog para melhorar o SEO, gerar conteúdo e autoridade");
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use storelens_extract::{SocialLinks, WebsiteMetadata};

    fn all_present() -> (WebsiteMetadata, SocialLinks, VisibilityData) {
        let metadata = WebsiteMetadata {
            title: Some("Loja Aurora Moda Feminina".into()),
            description: Some(
                "Roupas, acessórios e calçados femininos com entrega para todo o Brasil.".into(),
            ),
            keywords: Some("moda, roupas".into()),
            og_image: Some("https://cdn.example.com/capa.jpg".into()),
        };
        let social = SocialLinks {
            instagram: Some("https://instagram.com/loja".into()),
            facebook: Some("https://facebook.com/loja".into()),
            twitter: Some("https://twitter.com/loja".into()),
            linkedin: Some("https://linkedin.com/company/loja".into()),
            youtube: Some("https://youtube.com/@loja".into()),
            tiktok: Some("https://tiktok.com/@loja".into()),
        };
        let visibility = VisibilityData::simulate("https://loja.com/blog");
        (metadata, social, visibility)
    }

    #[test]
    fn all_absent_yields_only_opportunities() {
        let findings = classify(
            &WebsiteMetadata::default(),
            &SocialLinks::default(),
            &VisibilityData::simulate("https://loja.com"),
        );
        assert!(findings.conquista.is_empty());
        // instagram, facebook, tiktok, title, description, keywords,
        // og:image, blog — the eight absence branches.
        assert_eq!(findings.oportunidade.len(), 8);
    }

    #[test]
    fn achievement_count_equals_true_signal_count() {
        let (metadata, social, visibility) = all_present();
        let findings = classify(&metadata, &social, &visibility);
        assert_eq!(findings.conquista.len(), 11);
        // Seven presence branches also carry a follow-up opportunity.
        assert_eq!(findings.oportunidade.len(), 7);
    }

    #[test]
    fn evaluation_order_is_fixed() {
        let (metadata, social, visibility) = all_present();
        let findings = classify(&metadata, &social, &visibility);
        assert_eq!(findings.conquista[0], "Presença ativa no Instagram");
        assert_eq!(findings.conquista[5], "Presença no TikTok");
        assert_eq!(findings.conquista[6], "Título do site claro e descritivo");
        assert_eq!(findings.conquista[10], "Possui um blog ativo");
    }

    #[test]
    fn short_title_is_an_opportunity() {
        let metadata = WebsiteMetadata {
            title: Some("Dez chars!".into()), // exactly 10, not > 10
            ..Default::default()
        };
        let findings = classify(
            &metadata,
            &SocialLinks::default(),
            &VisibilityData::simulate("https://loja.com"),
        );
        assert!(!findings
            .conquista
            .contains(&"Título do site claro e descritivo"));
        assert!(findings
            .oportunidade
            .iter()
            .any(|s| s.starts_with("Otimizar o título")));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // Eleven characters with accents clears the > 10 bar even though a
        // byte count would behave differently for other inputs.
        let metadata = WebsiteMetadata {
            title: Some("Coleção Avó".into()),
            ..Default::default()
        };
        assert_eq!(metadata.title.as_deref().unwrap().chars().count(), 11);
        let findings = classify(
            &metadata,
            &SocialLinks::default(),
            &VisibilityData::simulate("https://loja.com"),
        );
        assert!(findings
            .conquista
            .contains(&"Título do site claro e descritivo"));
    }

    #[test]
    fn short_description_is_an_opportunity() {
        let metadata = WebsiteMetadata {
            description: Some("curta demais".into()),
            ..Default::default()
        };
        let findings = classify(
            &metadata,
            &SocialLinks::default(),
            &VisibilityData::simulate("https://loja.com"),
        );
        assert!(!findings
            .conquista
            .contains(&"Meta descrição otimizada e informativa"));
    }

    #[test]
    fn twitter_presence_has_no_absence_branch() {
        let absent = classify(
            &WebsiteMetadata::default(),
            &SocialLinks::default(),
            &VisibilityData::simulate("https://loja.com"),
        );
        assert!(!absent.oportunidade.iter().any(|s| s.contains("Twitter")));
    }
}

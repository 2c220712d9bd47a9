//! Per-page SEO metadata derivation.
//!
//! Every generated page carries a title / description / keywords / canonical
//! URL quadruple, derived from the surah (and ayah) records with fixed
//! bilingual copy matching the published site. Ayah pages additionally carry
//! a schema.org `Article` JSON-LD block describing the verse as part of its
//! surah.
//!
//! Values here are raw text; HTML-entity escaping happens at injection time
//! in [`crate::template`], and JSON string escaping is serde_json's problem.

use crate::config::SeoConfig;
use crate::corpus::{Ayah, Surah};
use crate::numerals;
use serde_json::{Value, json};

/// Derived metadata for one page. Never persisted.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Canonical page URL under the configured base.
    pub url: String,
    /// First in-scope ayah text on surah pages (empty when the surah has no
    /// loadable ayahs); the ayah's own text on ayah pages. Surfaced in the
    /// `check` inventory, not injected into any template region.
    pub preview: String,
    /// JSON-LD `Article` block; ayah pages only.
    pub structured_data: Option<Value>,
}

/// Metadata for a surah's landing page. `in_scope` is the ayah subset the
/// page renderer will emit, used only for the preview text.
pub fn surah_meta(config: &SeoConfig, surah: &Surah, in_scope: &[Ayah]) -> PageMeta {
    let sources = config
        .tafsir_sources
        .iter()
        .map(|s| format!("تفسير {}", s.arabic))
        .collect::<Vec<_>>()
        .join(", ");

    PageMeta {
        title: format!(
            "سورة {} | Surah {} - التفاسير",
            surah.name_arabic, surah.name_english
        ),
        description: format!(
            "اقرأ تفسير سورة {} ({}) - {} آية - {}. تفاسير متعددة: الطبري، ابن كثير، السعدي، القرطبي، الكشاف، الرازي وغيرها.",
            surah.name_arabic, surah.name_english, surah.ayah_count, surah.revelation_type
        ),
        keywords: format!(
            "سورة {}, {}, تفسير, القرآن, {}",
            surah.name_arabic, surah.name_english, sources
        ),
        url: format!("{}/surah/{}", config.base_url, surah.id),
        preview: in_scope
            .first()
            .map(|a| a.text_arabic.clone())
            .unwrap_or_default(),
        structured_data: None,
    }
}

/// Metadata for a single ayah page, including its JSON-LD block.
pub fn ayah_meta(config: &SeoConfig, surah: &Surah, ayah: &Ayah) -> PageMeta {
    let arabic_ordinal = numerals::to_arabic_indic(ayah.ayah_number);

    let title = format!(
        "سورة {} - آية {} | Surah {} Ayah {} - التفاسير",
        surah.name_arabic, arabic_ordinal, surah.name_english, ayah.ayah_number
    );
    let description = format!(
        "{} - تفسير الآية {} من سورة {}. اقرأ التفسير من الطبري، ابن كثير، السعدي والمزيد.",
        ayah.text_arabic, ayah.ayah_number, surah.name_arabic
    );
    let keywords = format!(
        "آية {} سورة {}, {} ayah {}, quran {}:{}, تفسير, القرآن الكريم",
        ayah.ayah_number,
        surah.name_arabic,
        surah.name_english,
        ayah.ayah_number,
        surah.id,
        ayah.ayah_number
    );
    let url = format!(
        "{}/surah/{}/ayah/{}",
        config.base_url, surah.id, ayah.ayah_number
    );

    let structured_data = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "name": title,
        "headline": format!("سورة {} - آية {}", surah.name_arabic, arabic_ordinal),
        "description": description,
        "url": url,
        "mainEntityOfPage": url,
        "inLanguage": ["ar", "en"],
        "about": {
            "@type": "Thing",
            "name": "القرآن الكريم - The Holy Quran"
        },
        "isPartOf": {
            "@type": "Book",
            "name": format!("سورة {}", surah.name_arabic),
            "alternateName": format!("Surah {}", surah.name_english)
        },
        "publisher": {
            "@type": "Organization",
            "name": "التفاسير - Tafaseer",
            "url": config.base_url
        }
    });

    PageMeta {
        title,
        description,
        keywords,
        url,
        preview: ayah.text_arabic.clone(),
        structured_data: Some(structured_data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn surah_meta_bilingual_title() {
        let config = SeoConfig::default();
        let meta = surah_meta(&config, &fatiha(), &fatiha_ayahs());
        assert_eq!(meta.title, "سورة الفاتحة | Surah Al-Fatiha - التفاسير");
    }

    #[test]
    fn surah_description_carries_count_and_revelation_type() {
        let config = SeoConfig::default();
        let meta = surah_meta(&config, &fatiha(), &fatiha_ayahs());
        assert!(meta.description.contains("7 آية"));
        assert!(meta.description.contains("مكية"));
    }

    #[test]
    fn surah_keywords_list_every_tafsir_source() {
        let config = SeoConfig::default();
        let meta = surah_meta(&config, &fatiha(), &fatiha_ayahs());
        for source in &config.tafsir_sources {
            assert!(
                meta.keywords.contains(&format!("تفسير {}", source.arabic)),
                "keywords missing {}",
                source.english
            );
        }
    }

    #[test]
    fn surah_canonical_url() {
        let config = SeoConfig::default();
        let meta = surah_meta(&config, &fatiha(), &[]);
        assert_eq!(meta.url, "https://tafaseer.web.app/surah/1");
    }

    #[test]
    fn surah_preview_is_first_in_scope_ayah() {
        let config = SeoConfig::default();
        let meta = surah_meta(&config, &fatiha(), &fatiha_ayahs());
        assert!(meta.preview.contains("بِسْمِ"));
    }

    #[test]
    fn surah_preview_empty_without_ayahs() {
        let config = SeoConfig::default();
        let meta = surah_meta(&config, &fatiha(), &[]);
        assert!(meta.preview.is_empty());
    }

    #[test]
    fn surah_pages_carry_no_structured_data() {
        let config = SeoConfig::default();
        assert!(surah_meta(&config, &fatiha(), &[]).structured_data.is_none());
    }

    #[test]
    fn ayah_title_renders_arabic_indic_ordinal() {
        let config = SeoConfig::default();
        let s = fatiha();
        let a = ayah(23, "نص تجريبي");
        let meta = ayah_meta(&config, &s, &a);
        assert!(meta.title.contains("آية ٢٣"));
        assert!(meta.title.contains("Ayah 23"));
    }

    #[test]
    fn ayah_description_leads_with_verse_text() {
        let config = SeoConfig::default();
        let s = fatiha();
        let a = &fatiha_ayahs()[1];
        let meta = ayah_meta(&config, &s, a);
        assert!(meta.description.starts_with(&a.text_arabic));
    }

    #[test]
    fn ayah_keywords_carry_chapter_verse_reference() {
        let config = SeoConfig::default();
        let meta = ayah_meta(&config, &fatiha(), &fatiha_ayahs()[6]);
        assert!(meta.keywords.contains("quran 1:7"));
    }

    #[test]
    fn ayah_canonical_url() {
        let config = SeoConfig::default();
        let meta = ayah_meta(&config, &fatiha(), &fatiha_ayahs()[2]);
        assert_eq!(meta.url, "https://tafaseer.web.app/surah/1/ayah/3");
    }

    #[test]
    fn ayah_structured_data_shape() {
        let config = SeoConfig::default();
        let meta = ayah_meta(&config, &fatiha(), &fatiha_ayahs()[0]);
        let data = meta.structured_data.unwrap();

        assert_eq!(data["@type"], "Article");
        assert_eq!(data["headline"], "سورة الفاتحة - آية ١");
        assert_eq!(data["inLanguage"], json!(["ar", "en"]));
        assert_eq!(data["isPartOf"]["@type"], "Book");
        assert_eq!(data["isPartOf"]["alternateName"], "Surah Al-Fatiha");
        assert_eq!(data["publisher"]["name"], "التفاسير - Tafaseer");
        assert_eq!(data["publisher"]["url"], "https://tafaseer.web.app");
        assert_eq!(data["url"], data["mainEntityOfPage"]);
    }

    #[test]
    fn urls_follow_configured_base() {
        let config = SeoConfig {
            base_url: "https://quran.example".to_string(),
            ..SeoConfig::default()
        };
        let meta = ayah_meta(&config, &fatiha(), &fatiha_ayahs()[0]);
        assert_eq!(meta.url, "https://quran.example/surah/1/ayah/1");
    }
}

//! Base template loading and exact-match metadata injection.
//!
//! The app's web build produces one `index.html` that every pre-rendered page
//! starts from. This module rewrites the SEO-relevant head tags in place —
//! the title element, the name/description/keywords metas, the canonical
//! link, and the Open Graph and Twitter card equivalents — and leaves every
//! other byte of the template untouched.
//!
//! ## Matching Contract
//!
//! Each slot is located by the exact tag pattern the web build emits (first
//! match wins). A slot whose pattern is absent from the template is skipped,
//! not invented: the injection still succeeds and the skipped slot names are
//! reported so the caller can warn. The `[\s\S]*?` patterns span attribute
//! lists that wrap across lines, which the build's formatter produces for
//! the longer meta tags.
//!
//! ## Escaping
//!
//! Every injected value is HTML-entity-escaped first. Corpus text goes into
//! attribute values and element text, so `& < > " '` must never reach the
//! markup raw.

use crate::meta::PageMeta;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("base template not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read the base template, failing fatally (with the path) when absent.
pub fn load(path: &Path) -> Result<String, TemplateError> {
    if !path.exists() {
        return Err(TemplateError::Missing(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A replaceable head-tag slot in the base template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Title,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    Canonical,
    OgUrl,
    OgTitle,
    OgDescription,
    TwitterUrl,
    TwitterTitle,
    TwitterDescription,
}

impl Slot {
    /// Name used in skip warnings and reports.
    fn name(self) -> &'static str {
        match self {
            Slot::Title => "title",
            Slot::MetaTitle => "meta:title",
            Slot::MetaDescription => "meta:description",
            Slot::MetaKeywords => "meta:keywords",
            Slot::Canonical => "link:canonical",
            Slot::OgUrl => "og:url",
            Slot::OgTitle => "og:title",
            Slot::OgDescription => "og:description",
            Slot::TwitterUrl => "twitter:url",
            Slot::TwitterTitle => "twitter:title",
            Slot::TwitterDescription => "twitter:description",
        }
    }
}

/// Injected field values, escaped once per page.
struct Escaped {
    title: String,
    description: String,
    keywords: String,
    url: String,
}

fn slot_tag(slot: Slot, esc: &Escaped) -> String {
    match slot {
        Slot::Title => format!("<title>{}</title>", esc.title),
        Slot::MetaTitle => format!(r#"<meta name="title" content="{}">"#, esc.title),
        Slot::MetaDescription => {
            format!(r#"<meta name="description" content="{}">"#, esc.description)
        }
        Slot::MetaKeywords => format!(r#"<meta name="keywords" content="{}">"#, esc.keywords),
        Slot::Canonical => format!(r#"<link rel="canonical" href="{}">"#, esc.url),
        Slot::OgUrl => format!(r#"<meta property="og:url" content="{}">"#, esc.url),
        Slot::OgTitle => format!(r#"<meta property="og:title" content="{}">"#, esc.title),
        Slot::OgDescription => format!(
            r#"<meta property="og:description" content="{}">"#,
            esc.description
        ),
        Slot::TwitterUrl => format!(r#"<meta property="twitter:url" content="{}">"#, esc.url),
        Slot::TwitterTitle => {
            format!(r#"<meta property="twitter:title" content="{}">"#, esc.title)
        }
        Slot::TwitterDescription => format!(
            r#"<meta property="twitter:description" content="{}">"#,
            esc.description
        ),
    }
}

/// Result of injecting one page's metadata into the template.
#[derive(Debug)]
pub struct Injection {
    pub html: String,
    /// Slots whose placeholder tag was not found in the template.
    pub skipped: Vec<&'static str>,
}

/// Compiled slot patterns, built once per run and reused for every page.
pub struct Injector {
    slots: Vec<(Slot, Regex)>,
}

impl Injector {
    pub fn new() -> Self {
        // Literal patterns; compilation cannot fail.
        let pattern = |p: &str| Regex::new(p).unwrap();
        let slots = vec![
            (Slot::Title, pattern("<title>.*?</title>")),
            (Slot::MetaTitle, pattern(r#"<meta name="title" content=".*?">"#)),
            (
                Slot::MetaDescription,
                pattern(r#"<meta name="description"[\s\S]*?content=".*?">"#),
            ),
            (
                Slot::MetaKeywords,
                pattern(r#"<meta name="keywords"[\s\S]*?content=".*?">"#),
            ),
            (Slot::Canonical, pattern(r#"<link rel="canonical" href=".*?">"#)),
            (Slot::OgUrl, pattern(r#"<meta property="og:url" content=".*?">"#)),
            (
                Slot::OgTitle,
                pattern(r#"<meta property="og:title" content=".*?">"#),
            ),
            (
                Slot::OgDescription,
                pattern(r#"<meta property="og:description"[\s\S]*?content=".*?">"#),
            ),
            (
                Slot::TwitterUrl,
                pattern(r#"<meta property="twitter:url" content=".*?">"#),
            ),
            (
                Slot::TwitterTitle,
                pattern(r#"<meta property="twitter:title" content=".*?">"#),
            ),
            (
                Slot::TwitterDescription,
                pattern(r#"<meta property="twitter:description" content=".*?">"#),
            ),
        ];
        Self { slots }
    }

    /// Rewrite every known slot of `template` with the page's metadata, and
    /// append the JSON-LD block before `</head>` when the page carries one.
    pub fn inject(&self, template: &str, meta: &PageMeta) -> Injection {
        let esc = Escaped {
            title: escape_html(&meta.title),
            description: escape_html(&meta.description),
            keywords: escape_html(&meta.keywords),
            url: escape_html(&meta.url),
        };

        let mut html = template.to_string();
        let mut skipped = Vec::new();
        for (slot, pattern) in &self.slots {
            let tag = slot_tag(*slot, &esc);
            if pattern.is_match(&html) {
                // NoExpand: corpus text may contain `$`
                html = pattern.replace(&html, NoExpand(&tag)).into_owned();
            } else {
                skipped.push(slot.name());
            }
        }

        if let Some(data) = &meta.structured_data {
            // Value is built from json!() with string keys only
            let json = serde_json::to_string_pretty(data).unwrap();
            let block = format!("<script type=\"application/ld+json\">\n{json}\n</script>\n</head>");
            if html.contains("</head>") {
                html = html.replacen("</head>", &block, 1);
            } else {
                skipped.push("structured-data");
            }
        }

        Injection { html, skipped }
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

/// HTML-entity escaping for injected text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

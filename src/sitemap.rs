//! The sitemap job: one `<url>` entry per generated page.
//!
//! The document starts with three fixed entries (homepage, surah list,
//! search), then one entry per surah and per in-scope ayah — the same page
//! set the page job writes, enumerated through [`crate::scope`].
//!
//! ## Priority Policy
//!
//! | page | priority |
//! |------|----------|
//! | homepage | 1.0 |
//! | surah list | 0.9 |
//! | search | 0.8 |
//! | surah, popular | 0.9 |
//! | surah, id ≤ 20, not popular | 0.8 |
//! | surah, id > 20, not popular | 0.7 |
//! | ayah of popular surah | 0.8 |
//! | ayah of non-popular surah | 0.6 |
//!
//! `changefreq` is `weekly` for the homepage and `monthly` for everything
//! else. Every entry's `lastmod` is the run date (UTC), so the file is
//! byte-identical across reruns within a day on unchanged input.
//!
//! The document is written atomically: staged to a sibling temp file, then
//! renamed onto the target path.

use crate::config::SeoConfig;
use crate::corpus::{self, Ayah, CorpusError, Surah};
use crate::scope;
use chrono::NaiveDate;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed non-enumerated entries: homepage, surah list, search.
pub const FIXED_URLS: usize = 3;

/// Totals for one sitemap run.
#[derive(Debug)]
pub struct SitemapReport {
    pub surah_urls: usize,
    pub ayah_urls: usize,
    /// Surahs whose ayah file failed to parse and was treated as empty.
    pub degraded_surahs: Vec<u32>,
    pub out_path: PathBuf,
}

impl SitemapReport {
    pub fn total_urls(&self) -> usize {
        FIXED_URLS + self.surah_urls + self.ayah_urls
    }
}

/// Sitemap priority for a surah page.
pub fn surah_priority(config: &SeoConfig, surah_id: u32) -> &'static str {
    if scope::is_popular(config, surah_id) {
        "0.9"
    } else if surah_id <= 20 {
        "0.8"
    } else {
        "0.7"
    }
}

/// Sitemap priority for an ayah page, by its surah's popularity.
pub fn ayah_priority(popular: bool) -> &'static str {
    if popular { "0.8" } else { "0.6" }
}

/// Build the complete sitemap document for the loaded corpus.
pub fn build(config: &SeoConfig, date: NaiveDate, entries: &[(Surah, Vec<Ayah>)]) -> String {
    let lastmod = date.format("%Y-%m-%d").to_string();
    let base = &config.base_url;

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n        xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    push_comment(&mut xml, "Homepage");
    push_url(&mut xml, &format!("{base}/"), &lastmod, "weekly", "1.0");
    push_comment(&mut xml, "Surah List");
    push_url(&mut xml, &format!("{base}/surahs"), &lastmod, "monthly", "0.9");
    push_comment(&mut xml, "Search");
    push_url(&mut xml, &format!("{base}/search"), &lastmod, "monthly", "0.8");

    for (surah, ayahs) in entries {
        let popular = scope::is_popular(config, surah.id);

        push_comment(
            &mut xml,
            &format!("Surah {}: {}", surah.id, surah.name_english),
        );
        push_url(
            &mut xml,
            &format!("{base}/surah/{}", surah.id),
            &lastmod,
            "monthly",
            surah_priority(config, surah.id),
        );

        for ayah in scope::in_scope(config, surah, ayahs) {
            push_url(
                &mut xml,
                &format!("{base}/surah/{}/ayah/{}", surah.id, ayah.ayah_number),
                &lastmod,
                "monthly",
                ayah_priority(popular),
            );
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(loc)));
    xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
    xml.push_str("  </url>\n");
}

fn push_comment(xml: &mut String, text: &str) {
    xml.push_str(&format!("  <!-- {text} -->\n"));
}

/// Minimal escaping for XML text content.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Run the sitemap job: load the corpus, build the document, write it
/// atomically to `out_path`.
pub fn generate(
    data_dir: &Path,
    out_path: &Path,
    config: &SeoConfig,
    date: NaiveDate,
) -> Result<SitemapReport, SitemapError> {
    let surahs = corpus::load_surahs(data_dir)?;
    let total = surahs.len();

    let mut entries = Vec::with_capacity(total);
    let mut degraded_surahs = Vec::new();
    for (idx, surah) in surahs.into_iter().enumerate() {
        let (ayahs, degraded) = corpus::load_ayahs_or_warn(data_dir, surah.id);
        if degraded {
            degraded_surahs.push(surah.id);
        }
        entries.push((surah, ayahs));

        print!("\r  Processing surah {}/{}...", idx + 1, total);
        let _ = io::stdout().flush();
    }
    if total > 0 {
        println!();
    }

    let xml = build(config, date, &entries);
    let surah_urls = entries.len();
    let ayah_urls = entries
        .iter()
        .map(|(surah, ayahs)| scope::in_scope(config, surah, ayahs).len())
        .sum();

    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let staging = out_path.with_extension("tmp");
    fs::write(&staging, &xml)?;
    fs::rename(&staging, out_path)?;

    Ok(SitemapReport {
        surah_urls,
        ayah_urls,
        degraded_surahs,
        out_path: out_path.to_path_buf(),
    })
}

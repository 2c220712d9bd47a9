//! CLI output formatting for both jobs and the `check` inventory.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! The `check` inventory is information-first: each surah leads with its
//! positional index and bilingual name, with the page count and a truncated
//! preview of its first in-scope ayah as indented context:
//!
//! ```text
//! Surahs
//! 001 الفاتحة / Al-Fatiha (7 ayahs, 8 pages, popular)
//!     Preview: بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ
//! 002 البقرة / Al-Baqarah (286 ayahs, 11 pages)
//!     Preview: الم
//! ```

use crate::config::SeoConfig;
use crate::corpus::{Ayah, Surah};
use crate::meta;
use crate::pages::PagesReport;
use crate::scope;
use crate::sitemap::SitemapReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate to `max` characters, appending `...` if truncated. Counts chars,
/// not bytes — corpus text is Arabic and byte slicing would split codepoints.
fn truncate_preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Page job
// ============================================================================

/// Format the page job summary.
pub fn format_pages_report(report: &PagesReport) -> Vec<String> {
    let mut lines = vec![
        format!("Generated {} surah pages", report.surah_pages),
        format!("Generated {} ayah pages", report.ayah_pages),
    ];
    if !report.degraded_surahs.is_empty() {
        lines.push(format!(
            "Degraded (ayah file unreadable, treated as empty): surah {}",
            join_ids(&report.degraded_surahs)
        ));
    }
    if !report.skipped_fields.is_empty() {
        let fields: Vec<&str> = report.skipped_fields.iter().copied().collect();
        lines.push(format!("Placeholders not found: {}", fields.join(", ")));
    }
    lines
}

/// Print the page job summary to stdout.
pub fn print_pages_report(report: &PagesReport) {
    for line in format_pages_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Sitemap job
// ============================================================================

/// Format the sitemap job summary.
pub fn format_sitemap_report(report: &SitemapReport) -> Vec<String> {
    let mut lines = vec![
        format!("Added {} surah URLs", report.surah_urls),
        format!("Added {} ayah URLs", report.ayah_urls),
        format!("Total: {} URLs", report.total_urls()),
    ];
    if !report.degraded_surahs.is_empty() {
        lines.push(format!(
            "Degraded (ayah file unreadable, treated as empty): surah {}",
            join_ids(&report.degraded_surahs)
        ));
    }
    lines.push(format!("Sitemap saved to: {}", report.out_path.display()));
    lines
}

/// Print the sitemap job summary to stdout.
pub fn print_sitemap_report(report: &SitemapReport) {
    for line in format_sitemap_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check inventory
// ============================================================================

/// Format the `check` inventory for a loaded corpus.
pub fn format_check_output(config: &SeoConfig, entries: &[(Surah, Vec<Ayah>)]) -> Vec<String> {
    let mut lines = vec!["Surahs".to_string()];

    for (pos, (surah, ayahs)) in entries.iter().enumerate() {
        let in_scope = scope::in_scope(config, surah, ayahs);
        let popular = if scope::is_popular(config, surah.id) {
            ", popular"
        } else {
            ""
        };
        lines.push(format!(
            "{} {} / {} ({} ayahs, {} pages{})",
            format_index(pos + 1),
            surah.name_arabic,
            surah.name_english,
            ayahs.len(),
            1 + in_scope.len(),
            popular
        ));

        let preview = meta::surah_meta(config, surah, in_scope).preview;
        if !preview.is_empty() {
            lines.push(format!("    Preview: {}", truncate_preview(&preview, 60)));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("    Base URL: {}", config.base_url));
    lines.push(format!(
        "    Popular surahs: {}",
        join_ids(&config.popular_surahs)
    ));
    lines.push(format!(
        "    Tafsir sources: {}",
        config.tafsir_sources.len()
    ));
    lines
}

/// Print the `check` inventory to stdout.
pub fn print_check_output(config: &SeoConfig, entries: &[(Surah, Vec<Ayah>)]) {
    for line in format_check_output(config, entries) {
        println!("{}", line);
    }
}

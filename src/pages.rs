//! The page job: pre-rendered HTML for every surah and in-scope ayah.
//!
//! ## Generated Pages
//!
//! - **Surah pages** (`surah/<id>.html`): one per surah in the index, always
//!   written — even when the surah's ayah file is missing or unreadable.
//! - **Ayah pages** (`surah/<id>/ayah/<number>.html`): one per in-scope ayah,
//!   as decided by [`crate::scope`].
//!
//! Output paths are a pure function of the ids, so no two pages collide and
//! re-running the job overwrites the same files byte-for-byte.
//!
//! [`render`] is pure — template string in, rendered pages out — so tests
//! exercise the whole page derivation without touching the filesystem.
//! [`generate`] wraps it with corpus loading, directory creation, file
//! writes, and the progress counter.

use crate::config::SeoConfig;
use crate::corpus::{self, Ayah, CorpusError, Surah};
use crate::meta;
use crate::scope;
use crate::template::{self, Injector, TemplateError};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagesError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Surah,
    Ayah,
}

/// One rendered page, ready to be written below the output root.
#[derive(Debug)]
pub struct RenderedPage {
    /// Path relative to the output root, e.g. `surah/1/ayah/7.html`.
    pub rel_path: PathBuf,
    pub html: String,
    pub kind: PageKind,
    /// Template slots whose placeholder was not found.
    pub skipped: Vec<&'static str>,
}

/// Totals for one page-job run.
#[derive(Debug, Default)]
pub struct PagesReport {
    pub surah_pages: usize,
    pub ayah_pages: usize,
    /// Surahs whose ayah file failed to parse and was treated as empty.
    pub degraded_surahs: Vec<u32>,
    /// Distinct template slots that were never found, in slot order.
    pub skipped_fields: BTreeSet<&'static str>,
}

/// Render the surah page plus every in-scope ayah page for one surah.
pub fn render(
    injector: &Injector,
    config: &SeoConfig,
    template: &str,
    surah: &Surah,
    ayahs: &[Ayah],
) -> Vec<RenderedPage> {
    let in_scope = scope::in_scope(config, surah, ayahs);
    let mut pages = Vec::with_capacity(1 + in_scope.len());

    let surah_meta = meta::surah_meta(config, surah, in_scope);
    let injection = injector.inject(template, &surah_meta);
    pages.push(RenderedPage {
        rel_path: Path::new("surah").join(format!("{}.html", surah.id)),
        html: injection.html,
        kind: PageKind::Surah,
        skipped: injection.skipped,
    });

    for ayah in in_scope {
        let ayah_meta = meta::ayah_meta(config, surah, ayah);
        let injection = injector.inject(template, &ayah_meta);
        pages.push(RenderedPage {
            rel_path: Path::new("surah")
                .join(surah.id.to_string())
                .join("ayah")
                .join(format!("{}.html", ayah.ayah_number)),
            html: injection.html,
            kind: PageKind::Ayah,
            skipped: injection.skipped,
        });
    }

    pages
}

/// Run the page job: load the corpus, render every page, write the output
/// tree. Existing files are overwritten unconditionally.
pub fn generate(
    data_dir: &Path,
    template_path: &Path,
    out_dir: &Path,
    config: &SeoConfig,
) -> Result<PagesReport, PagesError> {
    let surahs = corpus::load_surahs(data_dir)?;
    let template = template::load(template_path)?;
    let injector = Injector::new();

    let mut report = PagesReport::default();
    let total = surahs.len();

    for (idx, surah) in surahs.iter().enumerate() {
        let (ayahs, degraded) = corpus::load_ayahs_or_warn(data_dir, surah.id);
        if degraded {
            report.degraded_surahs.push(surah.id);
        }

        for page in render(&injector, config, &template, surah, &ayahs) {
            let path = out_dir.join(&page.rel_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &page.html)?;

            match page.kind {
                PageKind::Surah => report.surah_pages += 1,
                PageKind::Ayah => report.ayah_pages += 1,
            }
            for field in page.skipped {
                // warn once per distinct slot, not once per page
                if report.skipped_fields.insert(field) {
                    eprintln!("Warning: template placeholder not found for {field}, field left as-is");
                }
            }
        }

        print!("\r  Processing surah {}/{}...", idx + 1, total);
        let _ = io::stdout().flush();
    }
    if total > 0 {
        println!();
    }

    Ok(report)
}

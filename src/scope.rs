//! In-scope ayah enumeration, shared by the page renderer and the sitemap
//! builder.
//!
//! Both jobs must agree exactly on which ayahs of a surah get dedicated
//! pages; this module is the single source of truth for that decision.
//! Popular surahs get all their ayahs, everything else gets the first
//! `ayah_page_cap` — and in either case never more than were actually
//! loaded, even when the index's `ayah_count` claims more.

use crate::config::SeoConfig;
use crate::corpus::{Ayah, Surah};

/// Whether a surah is on the popular whitelist.
pub fn is_popular(config: &SeoConfig, surah_id: u32) -> bool {
    config.popular_surahs.contains(&surah_id)
}

/// The prefix of `ayahs` that gets dedicated pages for this surah.
pub fn in_scope<'a>(config: &SeoConfig, surah: &Surah, ayahs: &'a [Ayah]) -> &'a [Ayah] {
    let limit = if is_popular(config, surah.id) {
        surah.ayah_count
    } else {
        surah.ayah_count.min(config.ayah_page_cap)
    };
    let take = (limit as usize).min(ayahs.len());
    &ayahs[..take]
}

//! # Tafaseer SEO
//!
//! A one-shot batch generator for the static SEO artifacts of the Tafaseer
//! Quran commentary app: pre-rendered per-surah and per-ayah HTML pages with
//! injected metadata, and an XML sitemap covering the same page set.
//!
//! # Architecture: Two Jobs, One Policy
//!
//! The generator is two independent batch jobs over the same JSON corpus:
//!
//! ```text
//! 1. Pages     assets/data/ + index.html  →  build/web/surah/**.html
//! 2. Sitemap   assets/data/               →  web/sitemap.xml
//! ```
//!
//! Neither job reads the other's output. What they share is the corpus loader
//! and a single enumeration policy ([`scope`]) deciding which ayahs of a surah
//! get dedicated pages: all of them for the popular whitelist, the first ten
//! otherwise. Keeping that policy in one function is what guarantees the
//! sitemap never links a page the renderer didn't write.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`corpus`] | Loads `surahs.json` and per-surah ayah files into typed records |
//! | [`scope`] | In-scope-ayah policy shared by both jobs |
//! | [`meta`] | Derives per-page title/description/keywords/URL and JSON-LD |
//! | [`numerals`] | Western → Arabic-Indic digit conversion for ayah ordinals |
//! | [`template`] | Exact-match metadata injection into the base HTML template |
//! | [`pages`] | Page job — renders and writes one file per surah/ayah page |
//! | [`sitemap`] | Sitemap job — priority policy, XML emission, atomic write |
//! | [`config`] | `seo.toml` loading, validation, stock config generation |
//! | [`output`] | CLI report and inventory formatting |
//!
//! # Design Decisions
//!
//! ## Template Mutation, Not Template Generation
//!
//! The HTML shell is produced by the app's own web build and arrives here as
//! an opaque `index.html`. The generator does not own that markup; it rewrites
//! eleven well-known head tags in place and leaves every other byte untouched,
//! so app-build changes (script hashes, icons, manifest links) flow through
//! without coordination. A tag that is missing from the template is skipped
//! and reported, never invented.
//!
//! ## Failure Asymmetry
//!
//! A missing or unparseable surah index is a configuration error and aborts
//! the run with a non-zero exit. A missing or unparseable per-surah ayah file
//! degrades that one surah to zero ayahs — the surah page is still written,
//! with empty preview text — and the run continues. The asymmetry is part of
//! the contract: the index is the run's configuration, ayah files are items.
//!
//! ## Sequential on Purpose
//!
//! 114 surahs and a few thousand small file writes complete in well under a
//! second of I/O. Each surah is processed to completion before the next, in
//! corpus order. Every run overwrites deterministically, so recovery from an
//! interrupted run is "run it again".

pub mod config;
pub mod corpus;
pub mod meta;
pub mod numerals;
pub mod output;
pub mod pages;
pub mod scope;
pub mod sitemap;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Generator configuration.
//!
//! Handles loading and validating `seo.toml`. The file lives inside the data
//! directory next to `surahs.json` and is entirely optional — every field has
//! a stock default matching the published Tafaseer site, so a bare corpus
//! builds without any configuration at all.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://tafaseer.web.app"   # no trailing slash
//! popular_surahs = [1, 18, 36, 55, 56, 67, 78, 112, 113, 114]
//! ayah_page_cap = 10
//!
//! [[tafsir_sources]]
//! arabic = "الطبري"
//! english = "Tabari"
//! ```
//!
//! Unknown keys are rejected to catch typos early. The popular list, the cap,
//! and the tafsir sources exist as config rather than constants so tests (and
//! forks of the app) can run the generator against alternate fixtures.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `seo.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    /// Canonical site origin for every generated URL. No trailing slash.
    pub base_url: String,
    /// Surahs whose ayahs ALL get dedicated pages and higher sitemap priority.
    pub popular_surahs: Vec<u32>,
    /// Ayah pages per non-popular surah, capped by the surah's ayah count.
    pub ayah_page_cap: u32,
    /// Commentary sources folded into the keywords meta tag.
    pub tafsir_sources: Vec<TafsirSource>,
}

/// A commentary source, named in both languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TafsirSource {
    pub arabic: String,
    pub english: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tafaseer.web.app".to_string(),
            popular_surahs: vec![1, 18, 36, 55, 56, 67, 78, 112, 113, 114],
            ayah_page_cap: 10,
            tafsir_sources: default_tafsir_sources(),
        }
    }
}

fn default_tafsir_sources() -> Vec<TafsirSource> {
    [
        ("الطبري", "Tabari"),
        ("ابن كثير", "Ibn Kathir"),
        ("السعدي", "Saadi"),
        ("القرطبي", "Qurtubi"),
        ("البغوي", "Baghawi"),
        ("ابن عاشور", "Ibn Ashur"),
        ("الكشاف", "Kashaf"),
        ("الرازي", "Razi"),
    ]
    .into_iter()
    .map(|(arabic, english)| TafsirSource {
        arabic: arabic.to_string(),
        english: english.to_string(),
    })
    .collect()
}

impl SeoConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation("base_url must not be empty".into()));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with a slash".into(),
            ));
        }
        if self.ayah_page_cap == 0 {
            return Err(ConfigError::Validation(
                "ayah_page_cap must be at least 1".into(),
            ));
        }
        if self.tafsir_sources.is_empty() {
            return Err(ConfigError::Validation(
                "tafsir_sources must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load `seo.toml` from the data directory, falling back to stock defaults
/// when the file doesn't exist.
pub fn load_config(data_dir: &Path) -> Result<SeoConfig, ConfigError> {
    let path = data_dir.join("seo.toml");
    if !path.exists() {
        return Ok(SeoConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: SeoConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock `seo.toml`, printed by the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    let mut out = String::from(
        r#"# tafaseer-seo configuration
# Place this file as seo.toml inside the data directory (next to surahs.json).
# All options are optional - defaults shown below.

# Canonical site origin used for every generated URL. No trailing slash.
base_url = "https://tafaseer.web.app"

# Surahs whose ayahs ALL get dedicated pages (not just the first ten) and
# higher sitemap priority.
popular_surahs = [1, 18, 36, 55, 56, 67, 78, 112, 113, 114]

# Ayah pages generated per non-popular surah, capped by the surah's
# ayah count.
ayah_page_cap = 10

# Commentary sources folded into the keywords meta tag, one block each.
"#,
    );
    for source in default_tafsir_sources() {
        out.push_str(&format!(
            "\n[[tafsir_sources]]\narabic = \"{}\"\nenglish = \"{}\"\n",
            source.arabic, source.english
        ));
    }
    out
}

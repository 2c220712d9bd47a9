//! Corpus loading: the surah index and per-surah ayah files.
//!
//! The corpus is a read-only JSON tree produced by the app's content build:
//!
//! ```text
//! assets/data/
//! ├── seo.toml                 # Generator config (optional)
//! ├── surahs.json              # Ordered surah index (all 114)
//! └── ayahs/
//!     ├── surah_1.json         # Ayahs of surah 1, ordered by ayah_number
//!     ├── surah_2.json
//!     └── ...
//! ```
//!
//! ## Failure Policy
//!
//! [`load_surahs`] is fatal: without the index there is nothing to enumerate,
//! so its errors propagate to `main` and the run exits non-zero naming the
//! path. [`load_ayahs`] distinguishes a missing file (`Ok` with no ayahs — a
//! surah with no ayah file still gets a surah page) from a malformed one
//! (`Err`); [`load_ayahs_or_warn`] applies the per-surah degradation both
//! jobs use: warn on stderr, treat as empty, keep going.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("duplicate surah id {0} in surah index")]
    DuplicateSurah(u32),
    #[error("surah id 0 in surah index (ids are 1-based)")]
    InvalidSurahId,
}

/// One chapter of the Quran, as recorded in `surahs.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surah {
    /// 1-based chapter number, unique across the index.
    pub id: u32,
    pub name_arabic: String,
    pub name_english: String,
    /// Declared verse count. The loaded ayah file may carry fewer entries;
    /// enumeration never trusts this past what was actually loaded.
    pub ayah_count: u32,
    pub revelation_type: RevelationType,
}

/// Where a surah was revealed. Corpus files carry either the English or the
/// Arabic spelling; display is always the Arabic form because every
/// interpolation site is an Arabic sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationType {
    #[serde(rename = "Meccan", alias = "مكية")]
    Meccan,
    #[serde(rename = "Medinan", alias = "مدنية")]
    Medinan,
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RevelationType::Meccan => "مكية",
            RevelationType::Medinan => "مدنية",
        })
    }
}

/// One verse, as recorded in `ayahs/surah_<id>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ayah {
    /// 1-based, unique and contiguous within its surah.
    pub ayah_number: u32,
    pub text_arabic: String,
}

/// Path of the surah index inside a data directory.
pub fn surah_index_path(data_dir: &Path) -> PathBuf {
    data_dir.join("surahs.json")
}

/// Path of one surah's ayah file inside a data directory.
pub fn ayah_file_path(data_dir: &Path, surah_id: u32) -> PathBuf {
    data_dir.join("ayahs").join(format!("surah_{surah_id}.json"))
}

/// Load and validate the surah index. Any failure here is fatal to the run.
pub fn load_surahs(data_dir: &Path) -> Result<Vec<Surah>, CorpusError> {
    let path = surah_index_path(data_dir);
    let content = fs::read_to_string(&path).map_err(|source| CorpusError::Io {
        path: path.clone(),
        source,
    })?;
    let surahs: Vec<Surah> =
        serde_json::from_str(&content).map_err(|source| CorpusError::Json { path, source })?;

    let mut seen = HashSet::new();
    for surah in &surahs {
        if surah.id == 0 {
            return Err(CorpusError::InvalidSurahId);
        }
        if !seen.insert(surah.id) {
            return Err(CorpusError::DuplicateSurah(surah.id));
        }
    }
    Ok(surahs)
}

/// Load one surah's ayahs. A missing file is `Ok(vec![])` by contract; a
/// malformed file is an `Err` so the caller can log the degradation.
pub fn load_ayahs(data_dir: &Path, surah_id: u32) -> Result<Vec<Ayah>, CorpusError> {
    let path = ayah_file_path(data_dir, surah_id);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path).map_err(|source| CorpusError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CorpusError::Json { path, source })
}

/// Per-surah degradation policy shared by both jobs: a malformed ayah file is
/// warned about and treated as empty rather than aborting the run. Returns
/// the loaded ayahs and whether degradation occurred.
pub fn load_ayahs_or_warn(data_dir: &Path, surah_id: u32) -> (Vec<Ayah>, bool) {
    match load_ayahs(data_dir, surah_id) {
        Ok(ayahs) => (ayahs, false),
        Err(err) => {
            eprintln!("Warning: treating surah {surah_id} as empty: {err}");
            (Vec::new(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn load_surahs_reads_index_in_order() {
        let tmp = TempDir::new().unwrap();
        write_corpus(
            tmp.path(),
            &[fatiha(), surah(114, "الناس", "An-Nas", 6, RevelationType::Meccan)],
            &[],
        );

        let surahs = load_surahs(tmp.path()).unwrap();
        assert_eq!(surahs.len(), 2);
        assert_eq!(surahs[0].id, 1);
        assert_eq!(surahs[0].name_english, "Al-Fatiha");
        assert_eq!(surahs[1].id, 114);
    }

    #[test]
    fn missing_index_is_io_error_naming_path() {
        let tmp = TempDir::new().unwrap();
        let err = load_surahs(tmp.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("surahs.json"));
    }

    #[test]
    fn malformed_index_is_json_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(surah_index_path(tmp.path()), "{not json").unwrap();
        let err = load_surahs(tmp.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));
    }

    #[test]
    fn duplicate_surah_id_is_error() {
        let tmp = TempDir::new().unwrap();
        write_corpus(tmp.path(), &[fatiha(), fatiha()], &[]);
        let err = load_surahs(tmp.path()).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateSurah(1)));
    }

    #[test]
    fn surah_id_zero_is_error() {
        let tmp = TempDir::new().unwrap();
        write_corpus(
            tmp.path(),
            &[surah(0, "خطأ", "Broken", 3, RevelationType::Meccan)],
            &[],
        );
        let err = load_surahs(tmp.path()).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidSurahId));
    }

    #[test]
    fn load_ayahs_missing_file_is_empty_not_error() {
        let tmp = TempDir::new().unwrap();
        let ayahs = load_ayahs(tmp.path(), 42).unwrap();
        assert!(ayahs.is_empty());
    }

    #[test]
    fn load_ayahs_reads_file() {
        let tmp = TempDir::new().unwrap();
        write_corpus(tmp.path(), &[fatiha()], &[(1, fatiha_ayahs())]);

        let ayahs = load_ayahs(tmp.path(), 1).unwrap();
        assert_eq!(ayahs.len(), 7);
        assert_eq!(ayahs[0].ayah_number, 1);
        assert!(ayahs[0].text_arabic.contains("بِسْمِ"));
    }

    #[test]
    fn load_ayahs_malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("ayahs")).unwrap();
        std::fs::write(ayah_file_path(tmp.path(), 7), "[{broken").unwrap();
        let err = load_ayahs(tmp.path(), 7).unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));
    }

    #[test]
    fn load_ayahs_or_warn_degrades_malformed_to_empty() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("ayahs")).unwrap();
        std::fs::write(ayah_file_path(tmp.path(), 7), "[{broken").unwrap();

        let (ayahs, degraded) = load_ayahs_or_warn(tmp.path(), 7);
        assert!(ayahs.is_empty());
        assert!(degraded);
    }

    #[test]
    fn load_ayahs_or_warn_passes_through_good_file() {
        let tmp = TempDir::new().unwrap();
        write_corpus(tmp.path(), &[fatiha()], &[(1, fatiha_ayahs())]);

        let (ayahs, degraded) = load_ayahs_or_warn(tmp.path(), 1);
        assert_eq!(ayahs.len(), 7);
        assert!(!degraded);
    }

    // =========================================================================
    // Revelation type parsing
    // =========================================================================

    #[test]
    fn revelation_type_accepts_english_spelling() {
        let s: Surah = serde_json::from_str(
            r#"{"id":2,"name_arabic":"البقرة","name_english":"Al-Baqarah","ayah_count":286,"revelation_type":"Medinan"}"#,
        )
        .unwrap();
        assert_eq!(s.revelation_type, RevelationType::Medinan);
    }

    #[test]
    fn revelation_type_accepts_arabic_spelling() {
        let s: Surah = serde_json::from_str(
            r#"{"id":1,"name_arabic":"الفاتحة","name_english":"Al-Fatiha","ayah_count":7,"revelation_type":"مكية"}"#,
        )
        .unwrap();
        assert_eq!(s.revelation_type, RevelationType::Meccan);
    }

    #[test]
    fn revelation_type_displays_arabic() {
        assert_eq!(RevelationType::Meccan.to_string(), "مكية");
        assert_eq!(RevelationType::Medinan.to_string(), "مدنية");
    }

    #[test]
    fn ayah_file_path_follows_naming_convention() {
        let path = ayah_file_path(Path::new("assets/data"), 36);
        assert_eq!(path, Path::new("assets/data/ayahs/surah_36.json"));
    }
}

//! Shared test fixtures for the tafaseer-seo test suite.
//!
//! Provides record builders, a canonical Al-Fatiha fixture, a corpus writer
//! for filesystem-level tests, and a base template carrying every slot the
//! injector knows — with the description/keywords metas wrapped across lines
//! the way the app's web build formats them.

use crate::corpus::{Ayah, RevelationType, Surah};
use std::fs;
use std::path::Path;

/// A base template with every injectable slot present.
pub const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>التفاسير - تفسير القرآن الكريم</title>
  <meta name="title" content="التفاسير">
  <meta name="description"
        content="اقرأ القرآن الكريم مع تفاسير متعددة">
  <meta name="keywords"
        content="قرآن, تفسير, التفاسير">
  <link rel="canonical" href="https://tafaseer.web.app/">
  <meta property="og:url" content="https://tafaseer.web.app/">
  <meta property="og:title" content="التفاسير">
  <meta property="og:description" content="اقرأ القرآن الكريم مع تفاسير متعددة">
  <meta property="twitter:url" content="https://tafaseer.web.app/">
  <meta property="twitter:title" content="التفاسير">
  <meta property="twitter:description" content="اقرأ القرآن الكريم مع تفاسير متعددة">
  <link rel="manifest" href="manifest.json">
  <script src="flutter_bootstrap.js" async></script>
</head>
<body>
  <div id="app"></div>
</body>
</html>
"#;

/// Build a surah record.
pub fn surah(id: u32, arabic: &str, english: &str, ayah_count: u32, rev: RevelationType) -> Surah {
    Surah {
        id,
        name_arabic: arabic.to_string(),
        name_english: english.to_string(),
        ayah_count,
        revelation_type: rev,
    }
}

/// Build an ayah record.
pub fn ayah(number: u32, text: &str) -> Ayah {
    Ayah {
        ayah_number: number,
        text_arabic: text.to_string(),
    }
}

/// Surah 1, the canonical popular-surah fixture.
pub fn fatiha() -> Surah {
    surah(1, "الفاتحة", "Al-Fatiha", 7, RevelationType::Meccan)
}

/// The seven ayahs of surah 1.
pub fn fatiha_ayahs() -> Vec<Ayah> {
    [
        "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
        "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
        "الرَّحْمَٰنِ الرَّحِيمِ",
        "مَالِكِ يَوْمِ الدِّينِ",
        "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
        "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
        "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| ayah(i as u32 + 1, text))
    .collect()
}

/// Numbered placeholder ayahs for size-driven tests.
pub fn synthetic_ayahs(count: u32) -> Vec<Ayah> {
    (1..=count)
        .map(|n| ayah(n, &format!("آية تجريبية رقم {n}")))
        .collect()
}

/// Write `surahs.json` and the given per-surah ayah files under `data_dir`.
pub fn write_corpus(data_dir: &Path, surahs: &[Surah], ayahs: &[(u32, Vec<Ayah>)]) {
    fs::create_dir_all(data_dir.join("ayahs")).unwrap();
    fs::write(
        data_dir.join("surahs.json"),
        serde_json::to_string_pretty(surahs).unwrap(),
    )
    .unwrap();
    for (id, list) in ayahs {
        fs::write(
            data_dir.join("ayahs").join(format!("surah_{id}.json")),
            serde_json::to_string_pretty(list).unwrap(),
        )
        .unwrap();
    }
}

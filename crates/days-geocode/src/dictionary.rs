//! Bidirectional synonym dictionary between canonical English keys and
//! localized place names.
//!
//! Built once at startup and never mutated; the client holds it behind an
//! `Arc` so concurrent resolutions share one copy.

use std::collections::HashMap;

use days_core::SynonymsFile;

/// Canonical key → localized name pairs shipped with the planner.
const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    // Destinations
    ("aitutaki", "아이투타키"),
    ("santorini", "산토리니"),
    ("palau", "팔라우"),
    ("gili meno", "길리 메노"),
    ("boracay", "보라카이"),
    ("rarotonga", "라로통가"),
    ("maldives", "몰디브"),
    ("iceland", "아이슬란드"),
    ("yellowknife", "옐로나이프"),
    ("galapagos", "갈라파고스"),
    ("pamir highway", "파미르"),
    ("swiss alps", "알프스"),
    ("salar de uyuni", "우유니"),
    ("paris", "파리"),
    ("rome", "로마"),
    ("new york", "뉴욕"),
    ("tokyo", "도쿄"),
    ("london", "런던"),
    ("danang", "다낭"),
    ("cebu", "세부"),
    ("osaka", "오사카"),
    ("shanghai", "상하이"),
    ("fukuoka", "후쿠오카"),
    ("serengeti", "세렝게티"),
    ("antarctica", "남극"),
    ("svalbard", "스발바르"),
    ("gobi desert", "고비 사막"),
    ("seoul", "서울"),
    ("jeju", "제주"),
    ("busan", "부산"),
    ("bangkok", "방콕"),
    ("hanoi", "하노이"),
    ("ho chi minh city", "호치민"),
    ("taipei", "타이베이"),
    ("hong kong", "홍콩"),
    ("singapore", "싱가포르"),
    ("bali", "발리"),
    ("los angeles", "로스앤젤레스"),
    ("san francisco", "샌프란시스코"),
    ("barcelona", "바르셀로나"),
    ("prague", "프라하"),
    // Countries
    ("south korea", "대한민국"),
    ("japan", "일본"),
    ("china", "중국"),
    ("taiwan", "대만"),
    ("vietnam", "베트남"),
    ("thailand", "태국"),
    ("indonesia", "인도네시아"),
    ("philippines", "필리핀"),
    ("mongolia", "몽골"),
    ("france", "프랑스"),
    ("italy", "이탈리아"),
    ("spain", "스페인"),
    ("greece", "그리스"),
    ("switzerland", "스위스"),
    ("norway", "노르웨이"),
    ("czech republic", "체코"),
    ("united kingdom", "영국"),
    ("united states", "미국"),
    ("canada", "캐나다"),
    ("ecuador", "에콰도르"),
    ("bolivia", "볼리비아"),
    ("tanzania", "탄자니아"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymEntry {
    /// Lower-cased canonical English key.
    pub key: String,
    pub localized: String,
}

#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    entries: Vec<SynonymEntry>,
    by_key: HashMap<String, usize>,
}

impl SynonymDictionary {
    /// Builds a dictionary from `(key, localized)` pairs.
    ///
    /// Keys are trimmed and lower-cased. When a key repeats, the first pair
    /// wins and later ones are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dictionary = Self::default();
        for (key, localized) in pairs {
            let key = key.as_ref().trim().to_lowercase();
            if dictionary.by_key.contains_key(&key) {
                continue;
            }
            dictionary.by_key.insert(key.clone(), dictionary.entries.len());
            dictionary.entries.push(SynonymEntry {
                key,
                localized: localized.into(),
            });
        }
        dictionary
    }

    /// The table shipped with the planner.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_SYNONYMS.iter().copied())
    }

    /// Builds a dictionary from a validated synonyms file.
    #[must_use]
    pub fn from_config(file: &SynonymsFile) -> Self {
        Self::from_pairs(
            file.synonyms
                .iter()
                .map(|s| (s.key.as_str(), s.localized.clone())),
        )
    }

    /// Localized name for an already-normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.by_key
            .get(key)
            .map(|&idx| self.entries[idx].localized.as_str())
    }

    /// Key of the first entry, in load order, whose localized name equals
    /// `localized` exactly (case-sensitive).
    #[must_use]
    pub fn key_for(&self, localized: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.localized == localized)
            .map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SynonymEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;

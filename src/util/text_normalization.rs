//! Team-name reconciliation helpers used by fixture ingestion.

use lazy_static::lazy_static;
use regex::Regex;
use similar::TextDiff;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"\b(19|20)\d{2}\b").unwrap();
}

const STOP_WORDS: [&str; 8] = ["the", "a", "an", "rugby", "fc", "rfc", "club", "team"];

/// Applied in order, by substring replacement.
const TEAM_ALIASES: [(&str, &str); 9] = [
    ("all blacks", "new zealand"),
    ("springboks", "south africa"),
    ("wallabies", "australia"),
    ("england", "england"),
    ("wales", "wales"),
    ("scotland", "scotland"),
    ("ireland", "ireland"),
    ("france", "france"),
    ("italy", "italy"),
];

/// Lowercases, keeps only `a-z`, `0-9`, whitespace and `-`, and collapses runs of whitespace.
pub fn normalize_text(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn remove_common_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_team_name(name: &str) -> String {
    let mut normalized = remove_common_words(&normalize_text(name));
    for (alias, canonical) in TEAM_ALIASES {
        if alias != canonical && normalized.contains(alias) {
            normalized = normalized.replace(alias, canonical);
        }
    }
    normalized
}

/// Sequence ratio `2 * M / T` over characters, in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// First four-digit year from 1900 to 2099, e.g. the season in "Six Nations 2025".
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch<'a> {
    pub candidate: &'a str,
    pub index: usize,
    pub score: f64,
}

/// Both sides are compared as normalized team names. Candidates scoring at least
/// `threshold` come back best first; equal scores keep input order.
pub fn fuzzy_match<'a, S: AsRef<str>>(
    query: &str,
    candidates: &'a [S],
    threshold: f64,
) -> Vec<FuzzyMatch<'a>> {
    let query = normalize_team_name(query);
    let mut matches: Vec<FuzzyMatch<'a>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let candidate = candidate.as_ref();
            let score = similarity(&query, &normalize_team_name(candidate));
            (score >= threshold).then_some(FuzzyMatch {
                candidate,
                index,
                score,
            })
        })
        .collect();
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_strips_punctuation_and_whitespace() {
        assert_eq!(normalize_text("  Stade   Français-Paris! "), "stade franais-paris");
        assert_eq!(normalize_text("Munster\tRugby\n"), "munster rugby");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn stop_words_are_dropped() {
        assert_eq!(remove_common_words("the leicester tigers rfc"), "leicester tigers");
        assert_eq!(remove_common_words("club team"), "");
    }

    #[test]
    fn nicknames_resolve_to_countries() {
        assert_eq!(normalize_team_name("The All Blacks RFC"), "new zealand");
        assert_eq!(normalize_team_name("Springboks"), "south africa");
        assert_eq!(normalize_team_name("WALLABIES"), "australia");
        assert_eq!(normalize_team_name("Ireland Rugby"), "ireland");
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity("wales", "wales"), 1.0);
        assert_eq!(similarity("", "wales"), 0.0);
        assert!(similarity("ireland", "iceland") < 1.0);
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-4, "{actual} != {expected}");
    }

    #[test]
    fn similarity_counts_matching_characters() {
        assert_close(similarity("scarlet", "scarlets"), 14.0 / 15.0);
        assert_close(similarity("ulster", "munster"), 10.0 / 13.0);
        assert_close(similarity("irland", "ireland"), 12.0 / 13.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn fuzzy_match_applies_aliases_on_both_sides() {
        let candidates = ["New Zealand", "South Africa"];
        let matches = fuzzy_match("The All Blacks", &candidates, 0.9);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].candidate, "New Zealand");
        assert_eq!(matches[0].score, 1.0);

        let reverse = fuzzy_match("South Africa", &["Springboks RFC"], 0.9);
        assert_eq!(reverse.len(), 1);
    }

    #[test]
    fn close_club_names_clear_a_loose_threshold() {
        let matches = fuzzy_match("Ulster Rugby", &["Munster", "Leinster"], 0.75);
        assert_eq!(matches[0].candidate, "Munster");
    }

    #[test]
    fn years_are_pulled_from_season_names() {
        assert_eq!(extract_year("Six Nations 2025"), Some(2025));
        assert_eq!(extract_year("1999 Rugby World Cup"), Some(1999));
        assert_eq!(extract_year("Season 2024/25"), Some(2024));
        assert_eq!(extract_year("Round 12345"), None);
        assert_eq!(extract_year("Super Rugby Pacific"), None);
    }

    #[test]
    fn fuzzy_match_ranks_exact_first() {
        let candidates = ["Ireland", "Iceland", "France"];
        let matches = fuzzy_match("Ireland", &candidates, 0.7);

        assert!(!matches.is_empty());
        assert_eq!(matches[0].candidate, "Ireland");
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[0].score, 1.0);
        assert!(matches.iter().all(|m| m.score >= 0.7));
        assert!(matches.iter().all(|m| m.candidate != "France"));
    }

    #[test]
    fn fuzzy_match_is_stable_on_ties() {
        let candidates = vec!["Wales".to_string(), "wales".to_string()];
        let matches = fuzzy_match("WALES", &candidates, 0.9);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 1);
    }
}

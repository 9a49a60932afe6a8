//! Keyword heuristics that classify and score a record.
//!
//! These are deliberately coarse. Keyword order and first-match-wins are part
//! of the contract: reordering a list changes which label a record gets.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::text::sentences;
use crate::models::{AcademicLevel, OpenAccessStatus};

/// Terms marking specialist material, checked before [`GRADUATE_KEYWORDS`].
pub const ADVANCED_KEYWORDS: &[&str] = &[
    "meta-analysis",
    "systematic review",
    "theoretical framework",
    "epistemolog",
    "ontolog",
    "phenomenolog",
    "hermeneutic",
    "poststructural",
    "critical theory",
    "structural equation",
    "bayesian",
];

/// Terms marking research-methods material.
pub const GRADUATE_KEYWORDS: &[&str] = &[
    "hypothesis",
    "regression",
    "statistical significance",
    "methodology",
    "empirical",
    "longitudinal",
    "multivariate",
    "panel data",
    "quantitative analysis",
    "qualitative analysis",
];

/// Tag fragments that mark a geography subfield.
pub const SUBFIELD_TERMS: &[&str] = &[
    "urban",
    "climate",
    "population",
    "economic",
    "cultural",
    "political",
    "spatial",
    "environmental",
];

/// Subfield used when no tag qualifies.
pub const DEFAULT_SUBFIELD: &str = "Human Geography";

/// Maximum subfield labels per paper.
pub const MAX_SUBFIELDS: usize = 3;

/// Methodology cascade: the first entry with a matching needle names the label.
pub const METHODOLOGY_RULES: &[(&[&str], &str)] = &[
    (&["mixed method", "mixed-method"], "Mixed methods"),
    (&["survey"], "Survey research"),
    (&["qualitative", "interview"], "Qualitative interviews"),
    (&["gis", "spatial"], "GIS and spatial analysis"),
    (&["statistical", "quantitative", "regression"], "Statistical analysis"),
    (&["case study"], "Case study"),
    (&["literature review", "meta-analysis", "systematic review"], "Literature review"),
    (&["experiment"], "Experimental design"),
];

/// Methodology used when nothing in the cascade matches.
pub const DEFAULT_METHODOLOGY: &str = "Mixed methods";

/// Emitted when no sentence reads like a finding.
pub const FINDINGS_PLACEHOLDER: &str = "Key findings are still being analyzed for this study.";

/// Emitted when the abstract yields no sentences.
pub const SUMMARY_PLACEHOLDER: &str = "Summary not available.";

/// Literal jargon substitutions applied to summaries, in order.
///
/// This is text replacement, not simplification: it can mangle grammar and
/// never shortens an argument. Treat summaries as a reading aid only.
/// Matching ignores case; a capitalised term gets a capitalised replacement.
pub const PLAIN_LANGUAGE: &[(&str, &str)] = &[
    ("methodology", "research method"),
    ("empirical", "based on real data"),
    ("theoretical", "based on ideas and concepts"),
    ("epistemological", "about how we know things"),
    ("paradigm", "way of thinking"),
    ("spatiotemporal", "across space and time"),
    ("anthropogenic", "caused by humans"),
    ("heterogeneity", "variety"),
];

const MAX_FINDINGS: usize = 3;
const MIN_FINDING_CHARS: usize = 10;
const SUMMARY_SENTENCES: usize = 2;
const RICH_ABSTRACT_CHARS: usize = 100;

static FINDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)found|show(s)?|demonstrate(s)?|reveal(s)?|indicate(s)?|suggest(s)?|conclude(s)?|results? show",
    )
    .expect("valid finding regex")
});

static PLAIN_LANGUAGE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PLAIN_LANGUAGE
        .iter()
        .map(|(jargon, plain)| {
            let pattern = format!("(?i){}", regex::escape(jargon));
            (Regex::new(&pattern).expect("valid jargon regex"), *plain)
        })
        .collect()
});

/// Classify reading level from title and abstract.
#[must_use]
pub fn academic_level(title: &str, abstract_text: &str) -> AcademicLevel {
    let text = format!("{title} {abstract_text}").to_lowercase();

    if ADVANCED_KEYWORDS.iter().any(|k| text.contains(k)) {
        AcademicLevel::Advanced
    } else if GRADUATE_KEYWORDS.iter().any(|k| text.contains(k)) {
        AcademicLevel::Graduate
    } else {
        AcademicLevel::Undergraduate
    }
}

/// Pick up to three geography subfields from provider tags.
///
/// Tags are kept in provider order; case-insensitive duplicates are dropped.
/// Never returns an empty list.
#[must_use]
pub fn geography_subfields<'a>(tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut picked: Vec<String> = Vec::new();

    for tag in tags {
        let tag = tag.trim();
        let lower = tag.to_lowercase();
        let relevant =
            lower.contains("geograph") || SUBFIELD_TERMS.iter().any(|term| lower.contains(term));

        if relevant && !picked.iter().any(|p| p.to_lowercase() == lower) {
            picked.push(tag.to_string());
            if picked.len() == MAX_SUBFIELDS {
                break;
            }
        }
    }

    if picked.is_empty() {
        picked.push(DEFAULT_SUBFIELD.to_string());
    }
    picked
}

/// Label the methodology described in an abstract.
#[must_use]
pub fn methodology(abstract_text: &str) -> &'static str {
    let text = abstract_text.to_lowercase();

    METHODOLOGY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| text.contains(n)))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_METHODOLOGY)
}

/// Inputs to the relevance heuristic.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    /// Open access colour.
    pub open_access: OpenAccessStatus,
    /// Publication date.
    pub published: NaiveDate,
    /// Citation count.
    pub citations: u32,
    /// Abstract text (placeholder included).
    pub abstract_text: &'a str,
}

/// Heuristic quality/freshness score in `0..=10`.
///
/// Starts at 5: +2 open access, +1 published within two calendar years,
/// +2 for more than 10 citations per year (+1 for more than 5), +1 for an
/// abstract longer than 100 characters.
#[must_use]
pub fn relevance_score(inputs: &ScoreInputs<'_>, today: NaiveDate) -> u8 {
    let mut score: i32 = 5;

    if inputs.open_access.is_open() {
        score += 2;
    }

    let age_years = (today.year() - inputs.published.year()).max(0);
    if age_years <= 2 {
        score += 1;
    }

    let citations_per_year = f64::from(inputs.citations) / f64::from(age_years.max(1));
    if citations_per_year > 10.0 {
        score += 2;
    } else if citations_per_year > 5.0 {
        score += 1;
    }

    if inputs.abstract_text.chars().count() > RICH_ABSTRACT_CHARS {
        score += 1;
    }

    score.clamp(0, 10) as u8
}

/// Pull up to three finding sentences out of an abstract.
///
/// Never returns an empty list; falls back to [`FINDINGS_PLACEHOLDER`].
#[must_use]
pub fn key_findings(abstract_text: &str) -> Vec<String> {
    let findings: Vec<String> = sentences(abstract_text)
        .into_iter()
        .filter(|s| FINDING.is_match(s))
        .take(MAX_FINDINGS)
        .map(|s| s.trim().to_string())
        .filter(|s| s.chars().count() >= MIN_FINDING_CHARS)
        .collect();

    if findings.is_empty() {
        vec![FINDINGS_PLACEHOLDER.to_string()]
    } else {
        findings
    }
}

/// First two sentences of the abstract with [`PLAIN_LANGUAGE`] applied.
#[must_use]
pub fn summary(abstract_text: &str) -> String {
    let opening = sentences(abstract_text)
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");

    if opening.is_empty() {
        return SUMMARY_PLACEHOLDER.to_string();
    }

    PLAIN_LANGUAGE_PATTERNS.iter().fold(opening, |text, (jargon, plain)| {
        jargon
            .replace_all(&text, |caps: &regex::Captures<'_>| match_case(&caps[0], plain))
            .into_owned()
    })
}

fn match_case(found: &str, plain: &str) -> String {
    if !found.starts_with(char::is_uppercase) {
        return plain.to_string();
    }
    let mut chars = plain.chars();
    chars
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_academic_level_advanced() {
        let level = academic_level("Green space", "A meta-analysis of park cooling.");
        assert_eq!(level, AcademicLevel::Advanced);
    }

    #[test]
    fn test_academic_level_graduate() {
        let level = academic_level("Green space", "We test the hypothesis that parks cool cities.");
        assert_eq!(level, AcademicLevel::Graduate);
    }

    #[test]
    fn test_academic_level_default() {
        let level = academic_level("Maps for kids", "An introduction to reading maps.");
        assert_eq!(level, AcademicLevel::Undergraduate);
    }

    #[test]
    fn test_academic_level_advanced_wins_over_graduate() {
        let level = academic_level("", "A meta-analysis testing one hypothesis.");
        assert_eq!(level, AcademicLevel::Advanced);
    }

    #[test]
    fn test_subfields_filter_and_cap() {
        let tags = ["Urban heat", "Physics", "Human geography", "Climate change", "Population"];
        assert_eq!(
            geography_subfields(tags),
            vec!["Urban heat", "Human geography", "Climate change"]
        );
    }

    #[test]
    fn test_subfields_default() {
        assert_eq!(geography_subfields(["Physics", "Chemistry"]), vec![DEFAULT_SUBFIELD]);
        assert_eq!(geography_subfields(std::iter::empty()), vec![DEFAULT_SUBFIELD]);
    }

    #[test]
    fn test_subfields_dedupe_case_insensitive() {
        assert_eq!(geography_subfields(["Urban Studies", "urban studies"]), vec!["Urban Studies"]);
    }

    #[test]
    fn test_methodology_cascade_order() {
        assert_eq!(methodology("A mixed methods survey of residents."), "Mixed methods");
        assert_eq!(methodology("A household survey with interviews."), "Survey research");
        assert_eq!(methodology("Semi-structured interviews with farmers."), "Qualitative interviews");
        assert_eq!(methodology("We use GIS overlays."), "GIS and spatial analysis");
        assert_eq!(methodology("Regression on census tracts."), "Statistical analysis");
        assert_eq!(methodology("A case study of Lagos."), "Case study");
        assert_eq!(methodology("A literature review of slums."), "Literature review");
        assert_eq!(methodology("A field experiment on shade."), "Experimental design");
        assert_eq!(methodology("Nothing to see."), DEFAULT_METHODOLOGY);
    }

    #[test]
    fn test_relevance_max_clamps_to_ten() {
        let inputs = ScoreInputs {
            open_access: OpenAccessStatus::Gold,
            published: date(2025, 3, 1),
            citations: 40,
            abstract_text: &"x".repeat(150),
        };
        assert_eq!(relevance_score(&inputs, date(2026, 6, 1)), 10);
    }

    #[test]
    fn test_relevance_baseline() {
        let inputs = ScoreInputs {
            open_access: OpenAccessStatus::Closed,
            published: date(2000, 1, 1),
            citations: 0,
            abstract_text: "short",
        };
        assert_eq!(relevance_score(&inputs, date(2026, 6, 1)), 5);
    }

    #[test]
    fn test_relevance_moderate_citation_velocity() {
        // 10 years old, 60 citations = 6/year
        let inputs = ScoreInputs {
            open_access: OpenAccessStatus::Closed,
            published: date(2016, 1, 1),
            citations: 60,
            abstract_text: "short",
        };
        assert_eq!(relevance_score(&inputs, date(2026, 1, 1)), 6);
    }

    #[test]
    fn test_relevance_same_year_divides_by_one() {
        let inputs = ScoreInputs {
            open_access: OpenAccessStatus::Closed,
            published: date(2026, 1, 1),
            citations: 11,
            abstract_text: "short",
        };
        // +1 recent, +2 velocity
        assert_eq!(relevance_score(&inputs, date(2026, 5, 1)), 8);
    }

    #[test]
    fn test_key_findings_extracts_indicator_sentences() {
        let text = "We study parks. Results show cooling of 2C. Trees reveal shade effects. \
                    Another sentence. We found strong links. Data suggests more.";
        assert_eq!(
            key_findings(text),
            vec![
                "Results show cooling of 2C.",
                "Trees reveal shade effects.",
                "We found strong links."
            ]
        );
    }

    #[test]
    fn test_key_findings_drops_short_sentences() {
        assert_eq!(key_findings("It shows. Nothing else here."), vec![FINDINGS_PLACEHOLDER]);
    }

    #[test]
    fn test_key_findings_placeholder() {
        assert_eq!(key_findings("Plain description only."), vec![FINDINGS_PLACEHOLDER]);
        assert_eq!(key_findings(""), vec![FINDINGS_PLACEHOLDER]);
    }

    #[test]
    fn test_summary_substitutes_jargon() {
        let text = "Our methodology is empirical. The theoretical part is short. Third sentence.";
        assert_eq!(
            summary(text),
            "Our research method is based on real data. The based on ideas and concepts part is short."
        );
    }

    #[test]
    fn test_summary_substitutes_capitalised_jargon() {
        assert_eq!(summary("Methodology matters."), "Research method matters.");
        assert_eq!(
            summary("EMPIRICAL work. Heterogeneity is high."),
            "Based on real data work. Variety is high."
        );
    }

    #[test]
    fn test_summary_placeholder() {
        assert_eq!(summary(""), SUMMARY_PLACEHOLDER);
    }
}

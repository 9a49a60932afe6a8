//! Formatter output tests for Markdown and JSON.

use chrono::NaiveDate;

use geo_research::formatters;
use geo_research::models::{
    AcademicLevel, NO_ABSTRACT, OpenAccessStatus, PaperAuthor, ResearchPaper, ResponseFormat,
    ViewMode,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn make_paper() -> ResearchPaper {
    ResearchPaper {
        id: "W42".to_string(),
        title: "Heat and the City".to_string(),
        authors: vec![PaperAuthor {
            name: "R. Oke".to_string(),
            affiliation: Some("UBC".to_string()),
            external_id: None,
        }],
        r#abstract: "Cities are warmer. Results show cities are warmer.".to_string(),
        summary: "Cities are warmer.".to_string(),
        publication_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        journal: Some("Urban Climate".to_string()),
        doi: Some("10.1000/heat".to_string()),
        url: Some("https://example.org/w42".to_string()),
        citation_count: 12,
        open_access_status: OpenAccessStatus::Gold,
        geography_subfields: vec!["Urban Geography".to_string(), "Climate".to_string()],
        academic_level: AcademicLevel::Graduate,
        methodology: "Survey research".to_string(),
        key_findings: vec!["Results show cities are warmer.".to_string()],
        relevance_score: 8,
    }
}

fn bare_paper() -> ResearchPaper {
    ResearchPaper {
        authors: vec![],
        r#abstract: NO_ABSTRACT.to_string(),
        journal: None,
        doi: None,
        url: None,
        key_findings: vec![],
        ..make_paper()
    }
}

// =============================================================================
// Markdown
// =============================================================================

#[test]
fn test_paper_markdown_snapshot() {
    let output = formatters::format_paper_markdown(&make_paper(), 1);

    insta::assert_snapshot!(output, @r"
    ## 1. Heat and the City

    **Authors**: R. Oke

    **Published**: 2023-06-01 | **Citations**: 12 | **Journal**: Urban Climate

    **Level**: graduate | **Methodology**: Survey research | **Access**: gold | **Relevance**: 8/10

    **Subfields**: Urban Geography, Climate

    **Links**: [Read](https://example.org/w42) | [DOI](https://doi.org/10.1000/heat)

    > **In short**: Cities are warmer.

    **Key findings**:
    - Results show cities are warmer.

    **Abstract**: Cities are warmer. Results show cities are warmer.
    ");
}

#[test]
fn test_grid_snapshot_escapes_pipes() {
    let mut paper = make_paper();
    paper.title = "Heat | Cities".to_string();
    let output = formatters::format_papers_grid(&[&paper]);

    insta::assert_snapshot!(output, @r"
    # Papers (1 results)

    | # | Title | First author | Year | Citations | Level | Access | Score |
    |---|-------|--------------|------|-----------|-------|--------|-------|
    | 1 | Heat \| Cities | R. Oke | 2023 | 12 | graduate | gold | 8 |
    ");
}

#[test]
fn test_markdown_omits_missing_sections() {
    let output = formatters::format_paper_markdown(&bare_paper(), 3);

    assert!(output.starts_with("## 3. Heat and the City"));
    assert!(!output.contains("**Authors**"));
    assert!(!output.contains("**Journal**"));
    assert!(!output.contains("**Links**"));
    assert!(!output.contains("**Key findings**"));
    assert!(!output.contains("**Abstract**"));
    assert!(output.contains("**Citations**: 12"));
}

#[test]
fn test_grid_without_authors_uses_dash() {
    let paper = bare_paper();
    let output = formatters::format_papers_grid(&[&paper]);
    assert!(output.contains("| 1 | Heat and the City | - | 2023 |"));
}

#[test]
fn test_list_numbers_papers() {
    let first = make_paper();
    let mut second = make_paper();
    second.title = "Second".to_string();

    let output = formatters::format_papers_markdown(&[&first, &second]);
    assert!(output.starts_with("# Papers (2 results)"));
    assert!(output.contains("## 1. Heat and the City"));
    assert!(output.contains("## 2. Second"));
    assert_eq!(output.matches("\n---\n").count(), 2);
}

// =============================================================================
// render
// =============================================================================

#[test]
fn test_render_dispatch() {
    let paper = make_paper();
    let papers = [&paper];

    let grid = formatters::render(&papers, ResponseFormat::Markdown, ViewMode::Grid);
    assert!(grid.contains("| # | Title |"));

    let list = formatters::render(&papers, ResponseFormat::Markdown, ViewMode::List);
    assert!(list.contains("## 1. Heat and the City"));

    let json = formatters::render(&papers, ResponseFormat::Json, ViewMode::Grid);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["papers"][0]["id"], "W42");
    assert_eq!(value["papers"][0]["subfields"][1], "Climate");
}

#[test]
fn test_render_empty() {
    assert_eq!(formatters::render(&[], ResponseFormat::Markdown, ViewMode::List), "No papers found.");
    let json = formatters::render(&[], ResponseFormat::Json, ViewMode::List);
    assert!(json.contains("\"total\":0"));
}

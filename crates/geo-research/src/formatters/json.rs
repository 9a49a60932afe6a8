//! Compact JSON output.

use serde_json::{Value, json};

use crate::models::ResearchPaper;

/// Create a compact paper representation for JSON output.
///
/// Drops the long text fields (abstract, summary) and omits empty optionals.
#[must_use]
pub fn compact_paper(paper: &ResearchPaper) -> Value {
    let mut obj = json!({
        "id": paper.id,
        "title": paper.title,
        "date": paper.publication_date.to_string(),
        "citations": paper.citation_count,
        "openAccess": paper.open_access_status,
        "level": paper.academic_level,
        "methodology": paper.methodology,
        "subfields": paper.geography_subfields,
        "relevance": paper.relevance_score,
    });

    if !paper.authors.is_empty() {
        obj["authors"] = json!(paper.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>());
    }

    if let Some(journal) = &paper.journal {
        obj["journal"] = json!(journal);
    }

    if let Some(doi) = &paper.doi {
        obj["doi"] = json!(doi);
    }

    if let Some(url) = &paper.url {
        obj["url"] = json!(url);
    }

    obj
}

/// A result list as `{"total": n, "papers": [...]}`.
#[must_use]
pub fn papers_json(papers: &[&ResearchPaper]) -> Value {
    json!({
        "total": papers.len(),
        "papers": papers.iter().map(|p| compact_paper(p)).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{AcademicLevel, NO_ABSTRACT, OpenAccessStatus, PaperAuthor};

    fn paper() -> ResearchPaper {
        ResearchPaper {
            id: "W42".to_string(),
            title: "Heat and the City".to_string(),
            authors: vec![PaperAuthor {
                name: "R. Oke".to_string(),
                affiliation: None,
                external_id: None,
            }],
            r#abstract: NO_ABSTRACT.to_string(),
            summary: "Summary not available.".to_string(),
            publication_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            journal: None,
            doi: Some("10.1000/heat".to_string()),
            url: None,
            citation_count: 12,
            open_access_status: OpenAccessStatus::Gold,
            geography_subfields: vec!["Urban Geography".to_string()],
            academic_level: AcademicLevel::Graduate,
            methodology: "Survey research".to_string(),
            key_findings: vec![],
            relevance_score: 8,
        }
    }

    #[test]
    fn test_compact_paper_fields() {
        let value = compact_paper(&paper());
        assert_eq!(value["id"], "W42");
        assert_eq!(value["date"], "2023-06-01");
        assert_eq!(value["openAccess"], "gold");
        assert_eq!(value["level"], "graduate");
        assert_eq!(value["authors"][0], "R. Oke");
        assert_eq!(value["doi"], "10.1000/heat");
    }

    #[test]
    fn test_compact_paper_omits_missing_optionals() {
        let value = compact_paper(&paper());
        assert!(value.get("journal").is_none());
        assert!(value.get("url").is_none());
        assert!(value.get("abstract").is_none());
    }

    #[test]
    fn test_papers_json_total() {
        let p = paper();
        let value = papers_json(&[&p, &p]);
        assert_eq!(value["total"], 2);
        assert_eq!(value["papers"].as_array().map(Vec::len), Some(2));
    }
}

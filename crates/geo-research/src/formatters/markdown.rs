//! Markdown output formatting.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::models::ResearchPaper;

/// Abstract characters shown in the list view.
const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Format papers as a detailed Markdown list.
#[must_use]
pub fn format_papers_markdown(papers: &[&ResearchPaper]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &ResearchPaper, index: usize) -> String {
    let mut output = String::new();

    let _ = write!(output, "## {index}. {}\n\n", paper.title);

    if !paper.authors.is_empty() {
        let _ = write!(output, "**Authors**: {}\n\n", paper.author_names());
    }

    let mut meta = vec![
        format!("**Published**: {}", paper.publication_date),
        format!("**Citations**: {}", paper.citation_count),
    ];
    if let Some(journal) = &paper.journal {
        meta.push(format!("**Journal**: {journal}"));
    }
    let _ = write!(output, "{}\n\n", meta.join(" | "));

    let _ = write!(
        output,
        "**Level**: {} | **Methodology**: {} | **Access**: {} | **Relevance**: {}/10\n\n",
        paper.academic_level,
        paper.methodology,
        paper.open_access_status.as_str(),
        paper.relevance_score
    );

    let _ = write!(output, "**Subfields**: {}\n\n", paper.geography_subfields.join(", "));

    let mut links = Vec::new();
    if let Some(url) = &paper.url {
        links.push(format!("[Read]({url})"));
    }
    if let Some(doi) = &paper.doi {
        links.push(format!("[DOI](https://doi.org/{doi})"));
    }
    if !links.is_empty() {
        let _ = write!(output, "**Links**: {}\n\n", links.join(" | "));
    }

    let _ = write!(output, "> **In short**: {}\n\n", paper.summary);

    if !paper.key_findings.is_empty() {
        output.push_str("**Key findings**:\n");
        for finding in &paper.key_findings {
            let _ = writeln!(output, "- {finding}");
        }
        output.push('\n');
    }

    if paper.has_abstract() {
        let _ = writeln!(output, "**Abstract**: {}", preview(&paper.r#abstract));
    }

    output
}

/// Format papers as a compact Markdown table, one row per paper.
#[must_use]
pub fn format_papers_grid(papers: &[&ResearchPaper]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());
    output.push_str("| # | Title | First author | Year | Citations | Level | Access | Score |\n");
    output.push_str("|---|-------|--------------|------|-----------|-------|--------|-------|\n");

    for (i, paper) in papers.iter().enumerate() {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            i + 1,
            cell(&paper.title),
            cell(paper.first_author().unwrap_or("-")),
            paper.publication_date.format("%Y"),
            paper.citation_count,
            paper.academic_level,
            paper.open_access_status.as_str(),
            paper.relevance_score
        );
    }

    output
}

fn preview(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(ABSTRACT_PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Table cells cannot contain pipes or newlines.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_papers_markdown(&[]), "No papers found.");
        assert_eq!(format_papers_grid(&[]), "No papers found.");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(400);
        let cut = preview(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), ABSTRACT_PREVIEW_CHARS + 3);

        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_cell_escapes_pipes() {
        assert_eq!(cell("A | B\nC"), "A \\| B C");
    }
}

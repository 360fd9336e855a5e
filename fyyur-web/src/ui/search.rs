//! Search results page (venues and artists share it)

use fyyur_common::db::SearchResults;

use super::escape_html;
use super::layout::{page, Section};

/// Which records were searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Venues,
    Artists,
}

impl SearchKind {
    fn base_path(self) -> &'static str {
        match self {
            SearchKind::Venues => "/venues",
            SearchKind::Artists => "/artists",
        }
    }

    fn section(self) -> Section {
        match self {
            SearchKind::Venues => Section::Venues,
            SearchKind::Artists => Section::Artists,
        }
    }
}

pub fn results_page(kind: SearchKind, term: &str, results: &SearchResults) -> String {
    let items: Vec<String> = results
        .data
        .iter()
        .map(|r| {
            format!(
                r#"<li><a href="{}/{}">{}</a><span class="count">{} upcoming shows</span></li>"#,
                kind.base_path(),
                r.id,
                escape_html(&r.name),
                r.num_upcoming_shows
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Number of search results for "{}": {}</h1>
<ul class="items">
{}
</ul>"#,
        escape_html(term),
        results.count,
        items.join("\n")
    );
    page("Search", kind.section(), None, &body)
}

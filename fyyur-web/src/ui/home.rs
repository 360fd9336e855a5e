//! Home page: recently listed venues and artists

use fyyur_common::db::RecordSummary;

use super::escape_html;
use super::layout::{page, Section};
use crate::flash::Flash;

fn recent_list(title: &str, base: &str, records: &[RecordSummary]) -> String {
    let items = if records.is_empty() {
        r#"<li class="not-seeking">Nothing listed yet.</li>"#.to_string()
    } else {
        records
            .iter()
            .map(|r| format!(r#"<li><a href="{}/{}">{}</a></li>"#, base, r.id, escape_html(&r.name)))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!("<h2>{}</h2>\n<ul class=\"items\">\n{}\n</ul>", title, items)
}

pub fn home_page(
    venues: &[RecordSummary],
    artists: &[RecordSummary],
    flash: Option<&Flash>,
) -> String {
    let body = format!(
        r#"<h1>Fyyur</h1>
<p class="subtitle">Find venues, discover artists, book shows.</p>
<div class="actions">
    <a class="button" href="/venues/create">Post a venue</a>
    <a class="button" href="/artists/create">Post an artist</a>
    <a class="button" href="/shows/create">Post a show</a>
</div>
{}
{}"#,
        recent_list("Recently listed venues", "/venues", venues),
        recent_list("Recently listed artists", "/artists", artists),
    );
    page("Home", Section::Home, flash, &body)
}

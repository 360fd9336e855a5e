//! Show pages, plus the show cards embedded in venue and artist pages

use fyyur_common::db::{BookedShow, RecordSummary, ShowListing, ShowSchedule};
use fyyur_common::time::{format_datetime, DateFormat};
use fyyur_common::validation::ShowForm;
use fyyur_common::ValidationErrors;

use super::fields::{select, text_input, InputKind, SelectOption};
use super::layout::{page, Section};
use super::escape_html;
use crate::flash::Flash;

fn image_tag(link: Option<&str>, alt: &str) -> String {
    match link {
        Some(src) => format!(r#"<img src="{}" alt="{}">"#, escape_html(src), escape_html(alt)),
        None => String::new(),
    }
}

/// Past and upcoming cards for a venue or artist page
///
/// `other_base` is where the other party of each booking lives (`/artists`
/// on a venue page, `/venues` on an artist page).
pub fn schedule_sections(schedule: &ShowSchedule, other_base: &str) -> String {
    format!(
        "{}\n{}",
        booked_cards("Upcoming Shows", &schedule.upcoming, other_base),
        booked_cards("Past Shows", &schedule.past, other_base)
    )
}

fn booked_cards(title: &str, shows: &[BookedShow], other_base: &str) -> String {
    let cards: Vec<String> = shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="show-card">
    {image}
    <a href="{base}/{id}">{name}</a>
    <div class="when">{when}</div>
</div>"#,
                image = image_tag(show.other_image_link.as_deref(), &show.other_name),
                base = other_base,
                id = show.other_id,
                name = escape_html(&show.other_name),
                when = format_datetime(&show.start_time, DateFormat::Full),
            )
        })
        .collect();

    format!(
        "<h2>{} ({})</h2>\n<div class=\"show-cards\">\n{}\n</div>",
        title,
        shows.len(),
        cards.join("\n")
    )
}

pub fn list_page(shows: &[ShowListing], flash: Option<&Flash>) -> String {
    let cards: Vec<String> = shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="show-card">
    {image}
    <a href="/artists/{artist_id}">{artist}</a>
    <div>playing at <a href="/venues/{venue_id}">{venue}</a></div>
    <div class="when">{when}</div>
</div>"#,
                image = image_tag(show.artist_image_link.as_deref(), &show.artist_name),
                artist_id = show.artist_id,
                artist = escape_html(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape_html(&show.venue_name),
                when = format_datetime(&show.start_time, DateFormat::Medium),
            )
        })
        .collect();

    let body = if cards.is_empty() {
        r#"<h1>Shows</h1>
<p class="not-seeking">No shows booked yet. <a href="/shows/create">Post one</a>.</p>"#
            .to_string()
    } else {
        format!(
            "<h1>Shows</h1>\n<div class=\"show-cards\">\n{}\n</div>",
            cards.join("\n")
        )
    };
    page("Shows", Section::Shows, flash, &body)
}

fn options(records: &[RecordSummary]) -> Vec<SelectOption> {
    records
        .iter()
        .map(|r| SelectOption {
            value: r.id.to_string(),
            label: r.name.clone(),
        })
        .collect()
}

pub fn form_page(
    form: &ShowForm,
    artists: &[RecordSummary],
    venues: &[RecordSummary],
    errors: &ValidationErrors,
    flash: Option<&Flash>,
) -> String {
    let body = format!(
        r#"<h1>List a new show</h1>
<form class="record" method="post" action="/shows/create">
{artist}
{venue}
{start_time}
<button class="button" type="submit">Create Show</button>
</form>"#,
        artist = select("artist_id", "Artist", &options(artists), &form.artist_id, errors),
        venue = select("venue_id", "Venue", &options(venues), &form.venue_id, errors),
        start_time = text_input(
            "start_time",
            "Start time (YYYY-MM-DD HH:MM:SS)",
            &form.start_time,
            InputKind::DateTime,
            true,
            errors,
        ),
    );
    page("New Show", Section::Shows, flash, &body)
}

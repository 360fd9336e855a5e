//! Artist pages

use fyyur_common::db::{ArtistDetail, RecordSummary};
use fyyur_common::validation::ArtistForm;
use fyyur_common::ValidationErrors;

use super::fields::{checkbox, text_input, textarea, FormMode, InputKind};
use super::layout::{page, Section};
use super::shows::schedule_sections;
use super::venues::{detail_row, link_row, location};
use super::escape_html;
use crate::flash::Flash;

pub fn list_page(artists: &[RecordSummary], flash: Option<&Flash>) -> String {
    let items: Vec<String> = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, escape_html(&a.name)))
        .collect();

    let body = if items.is_empty() {
        r#"<h1>Artists</h1>
<p class="not-seeking">No artists listed yet.</p>"#
            .to_string()
    } else {
        format!("<h1>Artists</h1>\n<ul class=\"items\">\n{}\n</ul>", items.join("\n"))
    };
    page("Artists", Section::Artists, flash, &body)
}

pub fn detail_page(detail: &ArtistDetail, flash: Option<&Flash>) -> String {
    let artist = &detail.artist;

    let seeking = match (artist.seeking_venue, artist.seeking_description.as_deref()) {
        (true, Some(d)) => format!(
            r#"<div class="seeking">Currently seeking performance venues: {}</div>"#,
            escape_html(d)
        ),
        (true, None) => r#"<div class="seeking">Currently seeking performance venues</div>"#.to_string(),
        (false, _) => r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string(),
    };

    let image = match artist.image_link.as_deref() {
        Some(src) => format!(r#"<img src="{}" alt="{}">"#, escape_html(src), escape_html(&artist.name)),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="detail">
    <div>
        <dl>
            <dt>City</dt><dd>{location}</dd>
            {phone}
            {website}
            {facebook}
        </dl>
        {seeking}
    </div>
    {image}
</div>
<div class="actions">
    <a class="button" href="/artists/{id}/edit">Edit</a>
    <form method="post" action="/artists/{id}">
        <button class="button button-danger" type="submit">Delete</button>
    </form>
</div>
{shows}"#,
        name = escape_html(&artist.name),
        id = artist.id,
        location = location(artist.city.as_deref(), artist.state.as_deref()),
        phone = detail_row("Phone", artist.phone.as_deref()),
        website = link_row("Website", artist.website_link.as_deref()),
        facebook = link_row("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        image = image,
        shows = schedule_sections(&detail.shows, "/venues"),
    );
    page(&artist.name, Section::Artists, flash, &body)
}

pub fn form_page(
    mode: FormMode,
    form: &ArtistForm,
    errors: &ValidationErrors,
    flash: Option<&Flash>,
) -> String {
    let (title, heading, submit) = match mode {
        FormMode::Create => (
            "New Artist".to_string(),
            "List a new artist".to_string(),
            "Create Artist",
        ),
        FormMode::Edit(_) => (
            format!("Edit {}", form.name),
            format!("Edit artist {}", escape_html(&form.name)),
            "Save Changes",
        ),
    };

    let fields = [
        text_input("name", "Name", &form.name, InputKind::Text, true, errors),
        text_input("city", "City", &form.city, InputKind::Text, false, errors),
        text_input("state", "State", &form.state, InputKind::Text, false, errors),
        text_input("phone", "Phone", &form.phone, InputKind::Tel, false, errors),
        text_input("image_link", "Image Link", &form.image_link, InputKind::Url, false, errors),
        text_input("facebook_link", "Facebook Link", &form.facebook_link, InputKind::Url, false, errors),
        text_input("website_link", "Website Link", &form.website_link, InputKind::Url, false, errors),
        checkbox("seeking_venue", "Looking for venues", form.seeking_venue_checked()),
        textarea("seeking_description", "Seeking Description", &form.seeking_description, errors),
    ];

    let body = format!(
        r#"<h1>{}</h1>
<form class="record" method="post" action="{}">
{}
<button class="button" type="submit">{}</button>
</form>"#,
        heading,
        mode.action("/artists"),
        fields.join("\n"),
        submit,
    );
    page(&title, Section::Artists, flash, &body)
}

//! Venue pages

use fyyur_common::db::{Area, VenueDetail};
use fyyur_common::validation::VenueForm;
use fyyur_common::ValidationErrors;

use super::fields::{checkbox, text_input, textarea, FormMode, InputKind};
use super::layout::{page, Section};
use super::shows::schedule_sections;
use super::escape_html;
use crate::flash::Flash;

/// `<dt>/<dd>` pair, skipped when the value is absent
pub(super) fn detail_row(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("<dt>{}</dt><dd>{}</dd>", label, escape_html(v)),
        None => String::new(),
    }
}

/// Like [`detail_row`] but the value is rendered as a link
pub(super) fn link_row(label: &str, href: Option<&str>) -> String {
    match href {
        Some(h) => {
            let h = escape_html(h);
            format!(r#"<dt>{}</dt><dd><a href="{}">{}</a></dd>"#, label, h, h)
        }
        None => String::new(),
    }
}

pub(super) fn location(city: Option<&str>, state: Option<&str>) -> String {
    match (city, state) {
        (Some(c), Some(s)) => format!("{}, {}", escape_html(c), escape_html(s)),
        (Some(c), None) => escape_html(c),
        (None, Some(s)) => escape_html(s),
        (None, None) => String::new(),
    }
}

pub fn list_page(areas: &[Area], flash: Option<&Flash>) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    if areas.is_empty() {
        body.push_str(r#"<p class="not-seeking">No venues listed yet.</p>"#);
    }
    for area in areas {
        let heading = location(area.city.as_deref(), area.state.as_deref());
        body.push_str(&format!(
            "<h2>{}</h2>\n<ul class=\"items\">\n",
            if heading.is_empty() { "Unknown location".to_string() } else { heading }
        ));
        for venue in &area.venues {
            body.push_str(&format!(
                "<li><a href=\"/venues/{}\">{}</a><span class=\"count\">{} upcoming shows</span></li>\n",
                venue.id,
                escape_html(&venue.name),
                venue.num_upcoming_shows
            ));
        }
        body.push_str("</ul>\n");
    }
    page("Venues", Section::Venues, flash, &body)
}

pub fn detail_page(detail: &VenueDetail, flash: Option<&Flash>) -> String {
    let venue = &detail.venue;

    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking">Currently seeking talent{}</div>"#,
            venue
                .seeking_description
                .as_deref()
                .map(|d| format!(": {}", escape_html(d)))
                .unwrap_or_default()
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let image = venue
        .image_link
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="{}">"#, escape_html(src), escape_html(&venue.name)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="detail">
    <div>
        <dl>
            {address}
            {location}
            {phone}
            {website}
            {facebook}
        </dl>
        {seeking}
    </div>
    {image}
</div>
<div class="actions">
    <a class="button" href="/venues/{id}/edit">Edit</a>
    <form method="post" action="/venues/{id}">
        <button class="button button-danger" type="submit">Delete</button>
    </form>
</div>
{shows}"#,
        name = escape_html(&venue.name),
        id = venue.id,
        address = detail_row("Address", venue.address.as_deref()),
        location = format!(
            "<dt>City</dt><dd>{}</dd>",
            location(venue.city.as_deref(), venue.state.as_deref())
        ),
        phone = detail_row("Phone", venue.phone.as_deref()),
        website = link_row("Website", venue.website_link.as_deref()),
        facebook = link_row("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking,
        image = image,
        shows = schedule_sections(&detail.shows, "/artists"),
    );
    page(&venue.name, Section::Venues, flash, &body)
}

pub fn form_page(
    mode: FormMode,
    form: &VenueForm,
    errors: &ValidationErrors,
    flash: Option<&Flash>,
) -> String {
    let (heading, submit) = match mode {
        FormMode::Create => ("List a new venue".to_string(), "Create Venue"),
        FormMode::Edit(_) => (format!("Edit venue {}", escape_html(&form.name)), "Save Changes"),
    };

    let fields = [
        text_input("name", "Name", &form.name, InputKind::Text, true, errors),
        text_input("city", "City", &form.city, InputKind::Text, false, errors),
        text_input("state", "State", &form.state, InputKind::Text, false, errors),
        text_input("address", "Address", &form.address, InputKind::Text, false, errors),
        text_input("phone", "Phone", &form.phone, InputKind::Tel, false, errors),
        text_input("image_link", "Image Link", &form.image_link, InputKind::Url, false, errors),
        text_input("facebook_link", "Facebook Link", &form.facebook_link, InputKind::Url, false, errors),
        text_input("website_link", "Website Link", &form.website_link, InputKind::Url, false, errors),
        checkbox("seeking_talent", "Looking for talent", form.seeking_talent_checked()),
        textarea("seeking_description", "Seeking Description", &form.seeking_description, errors),
    ];

    let body = format!(
        r#"<h1>{heading}</h1>
<form class="record" method="post" action="{action}">
{fields}
<button class="button" type="submit">{submit}</button>
</form>"#,
        heading = heading,
        action = mode.action("/venues"),
        fields = fields.join("\n"),
        submit = submit,
    );

    let title = match mode {
        FormMode::Create => "New Venue".to_string(),
        FormMode::Edit(_) => format!("Edit {}", form.name),
    };
    page(&title, Section::Venues, flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::db::{RecordSummary, ShowSchedule, Venue};

    fn hop() -> Venue {
        let stamp = chrono::NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            address: Some("1015 Folsom Street".to_string()),
            phone: Some("123-123-1234".to_string()),
            website_link: Some("https://www.themusicalhop.com".to_string()),
            facebook_link: None,
            image_link: None,
            seeking_talent: true,
            seeking_description: Some("Looking for local artists".to_string()),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn test_list_groups_by_area() {
        let areas = vec![Area {
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            venues: vec![RecordSummary {
                id: 1,
                name: "The Musical Hop".to_string(),
                num_upcoming_shows: 0,
            }],
        }];
        let html = list_page(&areas, None);
        assert!(html.contains("<h2>San Francisco, CA</h2>"));
        assert!(html.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
    }

    #[test]
    fn test_detail_shows_fields_and_actions() {
        let detail = VenueDetail {
            venue: hop(),
            shows: ShowSchedule::default(),
        };
        let html = detail_page(&detail, None);
        assert!(html.contains("1015 Folsom Street"));
        assert!(html.contains("Currently seeking talent: Looking for local artists"));
        assert!(html.contains(r#"action="/venues/1""#));
        assert!(html.contains(r#"href="/venues/1/edit""#));
        assert!(!html.contains("Facebook"));
    }

    #[test]
    fn test_edit_form_prefilled() {
        let form = VenueForm::from(&hop());
        let html = form_page(FormMode::Edit(1), &form, &ValidationErrors::new(), None);
        assert!(html.contains(r#"action="/venues/1/edit""#));
        assert!(html.contains(r#"value="The Musical Hop""#));
        assert!(html.contains(r#"name="seeking_talent" value="y" checked"#));
    }
}

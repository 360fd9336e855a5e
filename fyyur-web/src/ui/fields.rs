//! Form field rendering
//!
//! Each helper echoes the submitted value and, when the field was rejected,
//! marks the input invalid and prints the message under it.

use fyyur_common::ValidationErrors;

use super::escape_html;

/// Input `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Url,
    DateTime,
}

impl InputKind {
    fn as_attr(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
            // Free text so "YYYY-MM-DD HH:MM:SS" is accepted as typed
            InputKind::DateTime => "text",
        }
    }
}

/// Whether a record form creates a new row or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Form `action` under `base` (`/venues` or `/artists`)
    pub fn action(self, base: &str) -> String {
        match self {
            FormMode::Create => format!("{}/create", base),
            FormMode::Edit(id) => format!("{}/{}/edit", base, id),
        }
    }
}

/// One option of a `<select>`
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

fn error_note(field: &str, errors: &ValidationErrors) -> (&'static str, String) {
    match errors.get(field) {
        Some(message) => (
            r#" class="invalid""#,
            format!(
                r#"<div class="field-error">{}</div>"#,
                escape_html(message)
            ),
        ),
        None => ("", String::new()),
    }
}

pub fn text_input(
    field: &str,
    label: &str,
    value: &str,
    kind: InputKind,
    required: bool,
    errors: &ValidationErrors,
) -> String {
    let (class, note) = error_note(field, errors);
    format!(
        r#"<label for="{field}">{label}</label>
<input type="{kind}" id="{field}" name="{field}" value="{value}"{class}{required}>
{note}"#,
        field = field,
        label = escape_html(label),
        kind = kind.as_attr(),
        value = escape_html(value),
        class = class,
        required = if required { " required" } else { "" },
        note = note,
    )
}

pub fn textarea(field: &str, label: &str, value: &str, errors: &ValidationErrors) -> String {
    let (class, note) = error_note(field, errors);
    format!(
        r#"<label for="{field}">{label}</label>
<textarea id="{field}" name="{field}" rows="3"{class}>{value}</textarea>
{note}"#,
        field = field,
        label = escape_html(label),
        value = escape_html(value),
        class = class,
        note = note,
    )
}

pub fn checkbox(field: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}" value="y"{}> {}</label>"#,
        field,
        if checked { " checked" } else { "" },
        escape_html(label)
    )
}

pub fn select(
    field: &str,
    label: &str,
    options: &[SelectOption],
    selected: &str,
    errors: &ValidationErrors,
) -> String {
    let (class, note) = error_note(field, errors);
    let mut html = format!(
        r#"<label for="{field}">{label}</label>
<select id="{field}" name="{field}"{class}>
<option value="">Choose...</option>
"#,
        field = field,
        label = escape_html(label),
        class = class,
    );
    for option in options {
        let is_selected = option.value == selected.trim();
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape_html(&option.value),
            if is_selected { " selected" } else { "" },
            escape_html(&option.label)
        ));
    }
    html.push_str("</select>\n");
    html.push_str(&note);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_echoes_value_and_error() {
        let errors = ValidationErrors::single("phone", "Invalid phone number.");
        let html = text_input("phone", "Phone", "call <us>", InputKind::Tel, false, &errors);
        assert!(html.contains(r#"value="call &lt;us&gt;""#));
        assert!(html.contains(r#"class="invalid""#));
        assert!(html.contains("Invalid phone number."));
    }

    #[test]
    fn test_text_input_without_error() {
        let html = text_input("name", "Name", "Hop", InputKind::Text, true, &ValidationErrors::new());
        assert!(!html.contains("field-error"));
        assert!(html.contains(" required"));
    }

    #[test]
    fn test_select_marks_choice() {
        let options = vec![
            SelectOption { value: "1".into(), label: "The Musical Hop".into() },
            SelectOption { value: "2".into(), label: "Park Square".into() },
        ];
        let html = select("venue_id", "Venue", &options, "2", &ValidationErrors::new());
        assert!(html.contains(r#"<option value="2" selected>Park Square</option>"#));
        assert!(html.contains(r#"<option value="1">The Musical Hop</option>"#));
    }
}

//! Page shell shared by every page

use super::escape_html;
use crate::flash::{Flash, FlashLevel};

/// Navigation section a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Venues,
    Artists,
    Shows,
}

impl Section {
    /// Search box target: artist pages search artists, everything else venues
    fn search_action(self) -> (&'static str, &'static str) {
        match self {
            Section::Artists => ("/artists/search", "Find an artist"),
            _ => ("/venues/search", "Find a venue"),
        }
    }
}

/// Wrap `body` in the full document
///
/// `title` is escaped here; `body` must already be safe markup.
pub fn page(title: &str, section: Section, flash: Option<&Flash>, body: &str) -> String {
    let (search_action, search_placeholder) = section.search_action();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/fyyur.css">
</head>
<body>
    <header>
        <div class="header-content">
            <a class="brand" href="/">Fyyur</a>
            <nav>
                {nav}
            </nav>
            <form class="search" method="post" action="{search_action}">
                <input type="search" name="search_term" placeholder="{search_placeholder}" aria-label="Search">
            </form>
        </div>
    </header>
    {flash}
    <main class="container">
{body}
    </main>
    <footer>fyyur-web v{version}</footer>
</body>
</html>
"#,
        title = escape_html(title),
        nav = nav_links(section),
        search_action = search_action,
        search_placeholder = search_placeholder,
        flash = flash_banner(flash),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn nav_links(section: Section) -> String {
    let links = [
        (Section::Venues, "/venues", "Venues"),
        (Section::Artists, "/artists", "Artists"),
        (Section::Shows, "/shows", "Shows"),
    ];

    let mut html: Vec<String> = links
        .iter()
        .map(|(s, href, label)| {
            let class = if *s == section { r#" class="active""# } else { "" };
            format!(r#"<a href="{}"{}>{}</a>"#, href, class, label)
        })
        .collect();

    html.push(r#"<a href="/venues/create">Post a venue</a>"#.to_string());
    html.push(r#"<a href="/artists/create">Post an artist</a>"#.to_string());
    html.push(r#"<a href="/shows/create">Post a show</a>"#.to_string());
    html.join("\n                ")
}

fn flash_banner(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => {
            let class = match flash.level {
                FlashLevel::Success => "flash-success",
                FlashLevel::Error => "flash-error",
            };
            format!(
                r#"<div class="flash {}" role="alert">{}</div>"#,
                class,
                escape_html(&flash.message)
            )
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_box_follows_section() {
        let html = page("Artists", Section::Artists, None, "");
        assert!(html.contains(r#"action="/artists/search""#));

        let html = page("Shows", Section::Shows, None, "");
        assert!(html.contains(r#"action="/venues/search""#));
    }

    #[test]
    fn test_flash_is_escaped() {
        let flash = Flash::success("Venue <Hop> was successfully listed!");
        let html = page("Home", Section::Home, Some(&flash), "");
        assert!(html.contains("flash-success"));
        assert!(html.contains("Venue &lt;Hop&gt; was successfully listed!"));
    }
}

//! HTML generation for the dashboard.
//!
//! Page layout: title and welcome text, two columns with one table each
//! (recent on the left, all-time on the right), then a link list per time
//! range. Every value coming from Spotify goes through [`escape_html`].

use crate::{
    errors::Error,
    types::{Dashboard, TopTracks},
    utils::{build_track_links, build_track_table, escape_html},
};

pub const PAGE_TITLE: &str = "Spotify Song Analysis";
pub const HEADING: &str = "🎶 Your Top 20 Spotify Wrapped 🎶";

const STYLE: &str = r#"
    body { font-family: sans-serif; margin: 2rem auto; max-width: 1100px; color: #333; }
    h1 { text-align: center; }
    h3 { color: #1DB954; }
    .columns { display: flex; gap: 2rem; }
    .column { flex: 1; }
    table { border-collapse: collapse; width: 100%; font-size: 16px; }
    th, td { border-bottom: 1px solid #ddd; padding: 4px 8px; text-align: left; }
    th { font-weight: 600; }
    td.rank { color: #888; width: 2em; }
    a { color: #1DB954; text-decoration: none; }
    a:hover { text-decoration: underline; }
"#;

pub fn dashboard_page(dashboard: &Dashboard) -> String {
    let tables: String = dashboard
        .sections()
        .iter()
        .map(|section| format!(r#"<div class="column">{}</div>"#, table_html(section)))
        .collect();

    let links: String = dashboard
        .sections()
        .iter()
        .map(|section| links_html(section))
        .collect::<Vec<_>>()
        .join("<hr>");

    layout(&format!(
        r#"<h1>{heading}</h1>
<p>Welcome to your personalized <strong>Spotify Song Insights</strong>! Here you can explore your top 20 songs over the past few weeks and your all-time favorites.</p>
<div class="columns">{tables}</div>
<hr>
<p>Want to listen to these songs? Click the names below to open them on Spotify!</p>
{links}"#,
        heading = HEADING,
        tables = tables,
        links = links
    ))
}

pub fn error_page(err: &Error) -> String {
    let hint = match err {
        Error::Authentication(_) => {
            r#"<p><a href="/">Try signing in again.</a></p>"#
        }
        _ => "",
    };

    layout(&format!(
        "<h1>Could not load your top tracks</h1>\n<p>{}</p>\n{}",
        escape_html(&err.to_string()),
        hint
    ))
}

/// Answer to the OAuth redirect when only `spotwrapped auth` is running.
pub fn login_complete_page() -> String {
    layout(
        "<h1>Authentication successful</h1>\n<p>You can close this window and run <code>spotwrapped serve</code>.</p>",
    )
}

/// One table: rank, track name, artists.
pub fn table_html(section: &TopTracks) -> String {
    let rows: String = build_track_table(&section.tracks)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            format!(
                r#"<tr><td class="rank">{}</td><td>{}</td><td>{}</td></tr>"#,
                i + 1,
                escape_html(&row.name),
                escape_html(&row.artists)
            )
        })
        .collect();

    format!(
        "<h3>{}</h3>\n<table><thead><tr><th></th><th>Track Name</th><th>Artists</th></tr></thead><tbody>{}</tbody></table>",
        section.time_range.table_heading(),
        rows
    )
}

pub fn links_html(section: &TopTracks) -> String {
    let items: String = build_track_links(&section.tracks)
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}" target="_blank">{}</a> by {}</li>"#,
                escape_html(&link.url),
                escape_html(&link.name),
                escape_html(&link.artists)
            )
        })
        .collect();

    format!(
        "<p><strong>{}:</strong></p>\n<ul>{}</ul>",
        section.time_range.links_heading(),
        items
    )
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = PAGE_TITLE,
        style = STYLE,
        body = body
    )
}

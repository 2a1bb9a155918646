use axum::http::StatusCode;
use spotwrapped::errors::Error;
use spotwrapped::render::*;
use spotwrapped::types::{Dashboard, TimeRange, TopTracks, Track, TrackArtist};

fn create_test_track(id: &str, name: &str, artists: &[&str]) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| TrackArtist {
                name: a.to_string(),
            })
            .collect(),
    }
}

fn create_test_dashboard(recent: Vec<Track>, all_time: Vec<Track>) -> Dashboard {
    Dashboard {
        recent: TopTracks {
            time_range: TimeRange::ShortTerm,
            tracks: recent,
        },
        all_time: TopTracks {
            time_range: TimeRange::LongTerm,
            tracks: all_time,
        },
    }
}

#[test]
fn test_dashboard_page_layout() {
    let dashboard = create_test_dashboard(
        vec![create_test_track("abc123", "Recent Song", &["A", "B"])],
        vec![create_test_track("def456", "Classic Song", &["C"])],
    );

    let html = dashboard_page(&dashboard);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("<title>{}</title>", PAGE_TITLE)));
    assert!(html.contains(HEADING));
    assert_eq!(html.matches(r#"<div class="column">"#).count(), 2);

    // Recent table comes before the all-time table
    let recent = html.find("Recent Top 20").unwrap();
    let all_time = html.find("All Time Top 20").unwrap();
    assert!(recent < all_time);

    // Links follow the tables
    let prompt = html.find("Click the names below").unwrap();
    assert!(all_time < prompt);
    assert!(html.contains("Your Top Songs (Last 4 Weeks)"));
    assert!(html.contains("Your Top Songs (All Time)"));
    assert!(html.contains(
        r#"<a href="https://open.spotify.com/track/abc123" target="_blank">Recent Song</a> by A, B"#
    ));
    assert!(html.contains(
        r#"<a href="https://open.spotify.com/track/def456" target="_blank">Classic Song</a> by C"#
    ));
}

#[test]
fn test_table_html_rows_in_order() {
    let section = TopTracks {
        time_range: TimeRange::ShortTerm,
        tracks: vec![
            create_test_track("1", "Zeta", &["A"]),
            create_test_track("2", "Alpha", &["B"]),
            create_test_track("3", "Mid", &["C"]),
        ],
    };

    let html = table_html(&section);

    assert_eq!(html.matches("<tr><td class=\"rank\">").count(), 3);
    let zeta = html.find("Zeta").unwrap();
    let alpha = html.find("Alpha").unwrap();
    let mid = html.find("Mid").unwrap();
    assert!(zeta < alpha && alpha < mid);
    assert!(html.contains(r#"<td class="rank">3</td><td>Mid</td><td>C</td>"#));
}

#[test]
fn test_empty_recent_still_renders_all_time() {
    let dashboard = create_test_dashboard(
        Vec::new(),
        vec![create_test_track("def456", "Classic Song", &["C"])],
    );

    let html = dashboard_page(&dashboard);

    assert!(html.contains("Recent Top 20"));
    assert!(html.contains("<td>Classic Song</td>"));
    assert!(html.contains("https://open.spotify.com/track/def456"));
}

#[test]
fn test_track_names_are_escaped() {
    let section = TopTracks {
        time_range: TimeRange::LongTerm,
        tracks: vec![create_test_track(
            "x",
            "<script>alert(1)</script>",
            &["Tom & Jerry"],
        )],
    };

    let table = table_html(&section);
    let links = links_html(&section);

    assert!(!table.contains("<script>"));
    assert!(table.contains("&lt;script&gt;"));
    assert!(table.contains("Tom &amp; Jerry"));
    assert!(!links.contains("<script>"));
}

#[test]
fn test_error_page_shows_message() {
    let err = Error::Authentication("state mismatch <x>".to_string());

    let html = error_page(&err);

    assert!(html.contains("Could not load your top tracks"));
    assert!(html.contains("Authentication error: state mismatch &lt;x&gt;"));
    assert!(html.contains(r#"<a href="/">"#));
}

#[test]
fn test_error_status_codes() {
    assert_eq!(
        Error::Authentication("x".into()).status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        Error::Configuration("x".into()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_login_complete_page_points_to_serve() {
    let html = login_complete_page();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Authentication successful"));
    assert!(html.contains("spotwrapped serve"));
    assert!(!html.contains("<table>"));
}

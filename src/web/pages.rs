use crate::events::model::Event;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use itertools::Itertools;

const SWIPE_JS: &str = include_str!("static/swipe.js");

const STYLE: &str = "body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
.event { border: 1px solid #ccc; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
button { font-size: 1.2rem; margin-right: 1rem; }
label { display: block; margin-top: 0.5rem; }";

#[derive(strum::IntoStaticStr, Debug, Clone, Copy)]
pub enum Page {
    #[strum(serialize = "Gigswipe")]
    Index,
    #[strum(serialize = "Swipe")]
    Swipe,
    #[strum(serialize = "Your matches")]
    Results,
    #[strum(serialize = "Submit an event")]
    SubmitEvent,
}

/// GET /static/js/swipe.js
pub async fn serve_swipe_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        SWIPE_JS,
    )
        .into_response()
}

pub fn index() -> String {
    layout(
        Page::Index,
        "<p>Find the shows your favorite artists are playing.</p>
<p><a href=\"/login\">Log in to start swiping</a></p>
<p><a href=\"/submit_event\">Submit an event</a></p>",
    )
}

pub fn swipe(matching_count: usize) -> String {
    layout(
        Page::Swipe,
        &format!(
            "<p>{} events match your artists.</p>
<div id=\"event\" class=\"event\"></div>
<button id=\"dislike-btn\">Nope</button>
<button id=\"like-btn\">Like</button>
<p><a href=\"/results\">See your matches</a> | <a href=\"/submit_event\">Submit an event</a></p>
<script src=\"/static/js/swipe.js\"></script>",
            matching_count
        ),
    )
}

pub fn results(liked_events: &[Event]) -> String {
    let body = if liked_events.is_empty() {
        "<p>You haven't liked any events yet.</p>".to_string()
    } else {
        liked_events.iter().map(event_card).join("\n")
    };

    layout(
        Page::Results,
        &format!("{}\n<p><a href=\"/swipe\">Swipe again</a></p>", body),
    )
}

pub fn submit_event() -> String {
    layout(
        Page::SubmitEvent,
        "<form method=\"post\" action=\"/submit_event\">
<label>Name <input name=\"event_name\" required></label>
<label>Date <input name=\"date\" type=\"date\" required></label>
<label>Venue <input name=\"venue\" required></label>
<label>Artists (comma separated) <input name=\"artists\" required></label>
<button type=\"submit\">Submit</button>
</form>
<p><a href=\"/swipe\">Back to swiping</a></p>",
    )
}

fn event_card(event: &Event) -> String {
    format!(
        "<div class=\"event\"><h2>{}</h2><p>Date: {}</p><p>Venue: {}</p><p>Artists: {}</p></div>",
        escape(&event.name),
        escape(&event.date),
        escape(&event.venue),
        event.artists.iter().map(|artist| escape(artist)).join(", ")
    )
}

fn layout(page: Page, body: &str) -> String {
    let title: &'static str = page.into();

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>"
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

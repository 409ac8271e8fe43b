use super::model::Event;
use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

// Note: the events file is edited by hand, so every field tolerates being absent or mistyped
#[derive(Debug, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "deserialize_str")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub venue: String,
    #[serde(default, deserialize_with = "deserialize_artists")]
    pub artists: Vec<String>,
}

impl EventRecord {
    pub fn to_model(self) -> Event {
        Event::new(self.name, self.date, self.venue, self.artists)
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        Self {
            name: event.name,
            date: event.date,
            venue: event.venue,
            artists: event.artists,
        }
    }
}

/// Body of `POST /submit_event`
#[derive(Debug, Default, Deserialize)]
pub struct SubmitEventForm {
    pub event_name: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub artists: Option<String>,
}

impl SubmitEventForm {
    pub fn into_event(self) -> Result<Event, AppError> {
        let name = self.event_name.ok_or(AppError::MissingField("event_name"))?;
        let date = self.date.ok_or(AppError::MissingField("date"))?;
        let venue = self.venue.ok_or(AppError::MissingField("venue"))?;
        let artists = self.artists.ok_or(AppError::MissingField("artists"))?;

        Ok(Event::new(name, date, venue, parse_artists(&artists)))
    }
}

/// Body of `POST /api/like_event`, the event is kept as sent even when fields are missing
#[derive(Debug, Default, Deserialize)]
pub struct LikeRequest {
    pub event: Option<EventRecord>,
}

impl LikeRequest {
    pub fn into_event(self) -> Option<Event> {
        self.event.map(EventRecord::to_model)
    }
}

pub fn parse_artists(artists: &str) -> Vec<String> {
    artists
        .split(',')
        .map(str::trim)
        .filter(|artist| !artist.is_empty())
        .map(str::to_string)
        .collect()
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => {
            warn!("Expected a string, found '{}' (using it as text)", other);
            other.to_string()
        }
    })
}

fn deserialize_artists<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(artist) => Some(artist),
                _ => None,
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            warn!("Artists should be a list, found '{}' (ignoring)", other);
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_split_and_trim_artists() {
        assert_eq!(parse_artists("P, Q ,R"), vec!["P", "Q", "R"]);
    }

    #[test_log::test]
    fn should_drop_blank_artists() {
        assert_eq!(parse_artists(" , Honey Dijon,,  "), vec!["Honey Dijon"]);
        assert!(parse_artists("").is_empty());
    }

    #[test_log::test]
    fn when_a_form_field_is_missing_should_name_it() {
        let form = SubmitEventForm {
            event_name: Some("Awakenings".to_string()),
            date: Some("2025-06-28".to_string()),
            venue: None,
            artists: Some("Charlotte de Witte".to_string()),
        };

        let err = form.into_event().unwrap_err();

        assert!(matches!(err, AppError::MissingField("venue")), "{:?}", err);
    }

    #[test_log::test]
    fn should_accept_empty_form_fields() {
        let form = SubmitEventForm {
            event_name: Some(String::new()),
            date: Some(String::new()),
            venue: Some(String::new()),
            artists: Some(String::new()),
        };

        let event = form.into_event().unwrap();

        assert!(event.artists.is_empty());
    }

    #[test_log::test]
    fn should_deserialize_record_without_artists() {
        let records = serde_json::from_str::<Vec<EventRecord>>(
            r##"
              [{
                "name": "Tomorrowland",
                "date": "2025-07-18",
                "venue": "De Schorre"
              }]"##,
        );

        assert!(records.is_ok(), "{:?}", records);

        let event = records.unwrap().pop().unwrap().to_model();

        assert_eq!(event.name, "Tomorrowland");
        assert!(event.artists.is_empty());
    }

    #[test_log::test]
    fn should_deserialize_record_with_null_and_mistyped_fields() {
        let records = serde_json::from_str::<Vec<EventRecord>>(
            r##"
              [{
                "name": "A State of Trance",
                "date": null,
                "venue": "Jaarbeurs",
                "artists": ["Armin van Buuren", 42, "Ferry Corsten"]
              }]"##,
        );

        assert!(records.is_ok(), "{:?}", records);

        let event = records.unwrap().pop().unwrap().to_model();

        assert_eq!(event.date, "");
        assert_eq!(event.artists, vec!["Armin van Buuren", "Ferry Corsten"]);
    }

    #[test_log::test]
    fn should_deserialize_like_request_without_event() {
        let request = serde_json::from_str::<LikeRequest>("{}").unwrap();

        assert!(request.into_event().is_none());
    }

    #[test_log::test]
    fn should_keep_a_partial_liked_event() {
        let request = serde_json::from_str::<LikeRequest>(r#"{"event": {"name": "Supplied"}}"#);

        assert!(request.is_ok(), "{:?}", request);

        let event = request.unwrap().into_event().unwrap();

        assert_eq!(event.name, "Supplied");
        assert_eq!(event.venue, "");
        assert!(event.artists.is_empty());
    }
}

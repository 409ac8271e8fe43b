use super::model::Event;
use tracing::debug;

/**
   Returns the events sharing at least one artist with `user_artists`, in their original order.
   An empty artist list never matches anything.
*/
pub fn matching_events(all_events: &[Event], user_artists: &[String]) -> Vec<Event> {
    let matching: Vec<Event> = all_events
        .iter()
        .filter(|event| event.features_any(user_artists))
        .cloned()
        .collect();

    debug!(
        "{} of {} events match {} artists",
        matching.len(),
        all_events.len(),
        user_artists.len()
    );

    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, artists: &[&str]) -> Event {
        Event::new(
            name.to_string(),
            "2025-07-12".to_string(),
            "Ziggo Dome".to_string(),
            artists.iter().map(|a| a.to_string()).collect(),
        )
    }

    fn artists(names: &[&str]) -> Vec<String> {
        names.iter().map(|a| a.to_string()).collect()
    }

    #[test_log::test]
    fn should_only_keep_events_with_a_favorite_artist() {
        let all = vec![event("A", &["X"]), event("B", &["Y"])];

        let result = matching_events(&all, &artists(&["X"]));

        assert_eq!(result, vec![event("A", &["X"])]);
    }

    #[test_log::test]
    fn when_there_are_no_favorite_artists_should_match_nothing() {
        let all = vec![event("A", &["X"]), event("B", &["Y"])];

        assert!(matching_events(&all, &[]).is_empty());
    }

    #[test_log::test]
    fn should_preserve_the_store_order() {
        let all = vec![
            event("First", &["Y", "X"]),
            event("Skipped", &["Z"]),
            event("Second", &["Y"]),
            event("Third", &["X"]),
        ];

        let names: Vec<String> = matching_events(&all, &artists(&["X", "Y"]))
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test_log::test]
    fn should_match_artists_case_sensitively() {
        let all = vec![event("A", &["honey dijon"])];

        assert!(matching_events(&all, &artists(&["Honey Dijon"])).is_empty());
    }

    #[test_log::test]
    fn should_keep_duplicate_events() {
        let all = vec![event("A", &["X"]), event("A", &["X"])];

        assert_eq!(matching_events(&all, &artists(&["X"])).len(), 2);
    }

    #[test_log::test]
    fn events_without_artists_should_never_match() {
        let all = vec![event("A", &[])];

        assert!(matching_events(&all, &artists(&["X"])).is_empty());
    }
}

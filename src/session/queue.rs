use crate::events::model::Event;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Events still to be swiped plus the ones liked so far.
///
/// `remaining` is a snapshot taken when the swipe flow was entered, it is never refreshed from the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwipeQueue {
    remaining: VecDeque<Event>,
    liked: Vec<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LikeOutcome {
    Ok,
    /// Nothing left to like, the liked list was not touched
    Empty,
}

impl SwipeQueue {
    pub fn new(matching: Vec<Event>) -> Self {
        Self {
            remaining: matching.into(),
            liked: Vec::new(),
        }
    }

    pub fn next(&self) -> Option<&Event> {
        self.remaining.front()
    }

    /**
       Records a like and moves on to the next event.
       * event: what the client was shown, defaults to the current front when absent
    */
    pub fn like(&mut self, event: Option<Event>) -> LikeOutcome {
        let Some(front) = self.remaining.pop_front() else {
            warn!("Like received with no events left, ignoring it");
            return LikeOutcome::Empty;
        };

        let liked = event.unwrap_or(front);

        debug!("Liked '{}'", liked.name);
        self.liked.push(liked);

        LikeOutcome::Ok
    }

    pub fn dislike(&mut self) -> Option<Event> {
        let skipped = self.remaining.pop_front();

        if let Some(event) = &skipped {
            debug!("Disliked '{}'", event.name);
        }

        skipped
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn liked(&self) -> &[Event] {
        &self.liked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str) -> Event {
        Event::new(
            name.to_string(),
            "2025-10-25".to_string(),
            "Melkweg".to_string(),
            vec!["Honey Dijon".to_string()],
        )
    }

    fn queue_of(names: &[&str]) -> SwipeQueue {
        SwipeQueue::new(names.iter().map(|name| event(name)).collect())
    }

    #[test_log::test]
    fn next_should_keep_returning_the_same_event() {
        let queue = queue_of(&["A", "B"]);

        assert_eq!(queue.next(), Some(&event("A")));
        assert_eq!(queue.next(), Some(&event("A")));
        assert_eq!(queue.remaining(), 2);
    }

    #[test_log::test]
    fn when_empty_next_should_be_none() {
        assert_eq!(SwipeQueue::default().next(), None);
    }

    #[test_log::test]
    fn dislike_should_drop_exactly_one_event() {
        let mut queue = queue_of(&["A", "B"]);

        assert_eq!(queue.dislike(), Some(event("A")));
        assert_eq!(queue.remaining(), 1);
        assert_eq!(queue.next(), Some(&event("B")));
        assert!(queue.liked().is_empty());
    }

    #[test_log::test]
    fn when_empty_dislike_should_do_nothing() {
        let mut queue = SwipeQueue::default();

        assert_eq!(queue.dislike(), None);
        assert_eq!(queue.remaining(), 0);
    }

    #[test_log::test]
    fn like_should_append_the_supplied_event_and_pop_the_front() {
        let mut queue = queue_of(&["A", "B"]);

        let outcome = queue.like(Some(event("Shown")));

        assert_eq!(outcome, LikeOutcome::Ok);
        assert_eq!(queue.liked(), &[event("Shown")]);
        assert_eq!(queue.remaining(), 1);
        assert_eq!(queue.next(), Some(&event("B")));
    }

    #[test_log::test]
    fn when_no_event_is_supplied_like_should_keep_the_front() {
        let mut queue = queue_of(&["A", "B"]);

        queue.like(None);

        assert_eq!(queue.liked(), &[event("A")]);
    }

    #[test_log::test]
    fn when_empty_like_should_be_rejected() {
        let mut queue = queue_of(&["A"]);
        queue.like(None);

        let outcome = queue.like(Some(event("Stale")));

        assert_eq!(outcome, LikeOutcome::Empty);
        assert_eq!(queue.liked(), &[event("A")]);
        assert_eq!(queue.remaining(), 0);
    }

    #[test_log::test]
    fn outcome_should_read_as_a_status() {
        let ok: &'static str = LikeOutcome::Ok.into();
        let empty: &'static str = LikeOutcome::Empty.into();

        assert_eq!(ok, "ok");
        assert_eq!(empty, "empty");
    }

    #[test_log::test]
    fn liked_events_should_accumulate_in_order() {
        let mut queue = queue_of(&["A", "B", "C"]);

        queue.like(None);
        queue.dislike();
        queue.like(None);

        assert_eq!(queue.liked(), &[event("A"), event("C")]);
        assert_eq!(queue.next(), None);
    }
}

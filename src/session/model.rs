use super::queue::SwipeQueue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSession {
    pub logged_in: bool,
    /// Favorite artists, assigned at login
    pub artists: Vec<String>,
    pub queue: SwipeQueue,
}

impl UserSession {
    pub fn logged_in(artists: Vec<String>) -> Self {
        Self {
            logged_in: true,
            artists,
            queue: SwipeQueue::default(),
        }
    }
}

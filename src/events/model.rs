use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: String,
    pub venue: String,
    pub artists: Vec<String>,
}

impl Event {
    pub fn new(name: String, date: String, venue: String, artists: Vec<String>) -> Self {
        Self {
            name,
            date,
            venue,
            artists,
        }
    }

    /// Case-sensitive, exact match on any of the given artists
    pub fn features_any(&self, artists: &[String]) -> bool {
        self.artists.iter().any(|artist| artists.contains(artist))
    }
}

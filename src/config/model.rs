use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

pub const DEFAULT_FAVORITE_ARTISTS: [&str; 4] = [
    "Martin Garrix",
    "Armin van Buuren",
    "Charlotte de Witte",
    "Honey Dijon",
];

/// Ten years, well inside what a cookie expiry date can hold
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub events_file: PathBuf,
    /// Stand-in for the artists a real login would fetch from the user's profile
    pub favorite_artists: Vec<String>,
    pub session_config: SessionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            events_file: PathBuf::from("events.json"),
            favorite_artists: DEFAULT_FAVORITE_ARTISTS
                .iter()
                .map(|artist| artist.to_string())
                .collect(),
            session_config: SessionConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_secure: bool,
    pub ttl_hours: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_secure: true,
            ttl_hours: 24,
        }
    }
}

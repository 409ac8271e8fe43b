use crate::config::model::{
    Config, SessionConfig, DEFAULT_FAVORITE_ARTISTS, MAX_SESSION_TTL_HOURS,
};
use crate::events::dto::parse_artists;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;

pub fn load_config() -> Config {
    let host = load_host_config("HOST", "0.0.0.0");
    let port = load_port_config("PORT", 5000);
    let events_file = PathBuf::from(load_str_config("EVENTS_FILE", "events.json"));
    let favorite_artists = load_artists_config("FAVORITE_ARTISTS");

    let cookie_secure = load_bool_config("SESSION_COOKIE_SECURE", true);
    let ttl_hours = load_i64_config("SESSION_TTL_HOURS", 24, MAX_SESSION_TTL_HOURS);

    Config {
        host,
        port,
        events_file,
        favorite_artists,
        session_config: SessionConfig {
            cookie_secure,
            ttl_hours,
        },
    }
}

fn load_str_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        info!("{} not set, using default: {}", name, default);
        default.to_string()
    })
}

fn load_host_config(name: &str, default: &str) -> IpAddr {
    load_str_config(name, default)
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an IP address.", name))
}

fn load_port_config(name: &str, default: u16) -> u16 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected a port number.", name))
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_i64_config(name: &str, default: i64, max: i64) -> i64 {
    match env::var(name) {
        Ok(value) => parse_i64_config(name, &value, max),
        Err(_) => default,
    }
}

fn parse_i64_config(name: &str, value: &str, max: i64) -> i64 {
    let value: i64 = value
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an integer number.", name));

    if value <= 0 || value > max {
        panic!(
            "Invalid config '{}'. Expected a number between 1 and {}.",
            name, max
        );
    }

    value
}

fn load_artists_config(name: &str) -> Vec<String> {
    match env::var(name) {
        Ok(value) => parse_artists(&value),
        Err(_) => DEFAULT_FAVORITE_ARTISTS
            .iter()
            .map(|artist| artist.to_string())
            .collect(),
    }
}

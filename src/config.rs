// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{Coordinates, TextSearch};
use serde_derive::{Deserialize, Serialize};
use std::io::Read;

/// API key and search defaults, read from a JSON file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Config {
    #[serde(default)]
    key: String,
    #[serde(default)]
    location: Option<Coordinates>,
    #[serde(default)]
    radius: Option<u32>,
}

impl Config {
    pub const KEY_VAR: &'static str = "GOOGLE_API_KEY";

    pub fn from_config<R: Read>(config: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(config)
    }

    pub fn location(&self) -> Option<Coordinates> {self.location}
    pub fn radius(&self) -> Option<u32> {self.radius}

    /// Picks the first non-empty key among the command line, the
    /// environment and this configuration.
    pub fn resolve_key(&self, cli: Option<&str>, env: Option<&str>)
        -> Option<String>
    {
        cli.into_iter()
            .chain(env)
            .chain(Some(self.key.as_str()))
            .find(|key| !key.is_empty())
            .map(String::from)
    }

    /// Fills in the location and radius the search does not set itself.
    pub fn apply_defaults(&self, mut search: TextSearch) -> TextSearch {
        search.location = search.location.or(self.location);
        search.radius = search.radius.or(self.radius);
        search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_optional() {
        let config = Config::from_config(&b"{}"[..]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.resolve_key(None, None), None);
    }

    #[test]
    fn parses_search_defaults() {
        let json = br#"{
            "key": "file-key",
            "location": {"latitude": 40.7128, "longitude": -74.006},
            "radius": 5000
        }"#;
        let config = Config::from_config(&json[..]).unwrap();
        assert_eq!(config.location(),
            Some(Coordinates {latitude: 40.7128, longitude: -74.006}));
        assert_eq!(config.radius(), Some(5000));
    }

    #[test]
    fn key_priority() {
        let config = Config {key: "file".into(), ..Config::default()};
        assert_eq!(config.resolve_key(Some("cli"), Some("env")).unwrap(),
            "cli");
        assert_eq!(config.resolve_key(None, Some("env")).unwrap(), "env");
        assert_eq!(config.resolve_key(Some(""), None).unwrap(), "file");
    }

    #[test]
    fn search_keeps_explicit_parameters() {
        let config = Config {
            location: Some(Coordinates {latitude: 1.0, longitude: 2.0}),
            radius: Some(100),
            ..Config::default()
        };
        let search = config.apply_defaults(TextSearch::new("tea").radius(5));
        assert_eq!(search.location, config.location());
        assert_eq!(search.radius, Some(5));
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(Config::from_config(&br#"{"radius": -1}"#[..]).is_err());
    }
}

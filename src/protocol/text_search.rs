// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{Coordinates, Error, Protocol};
use hyper::{Body, Request};
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// Free-text place search, optionally biased around a location.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSearch {
    pub query: String,
    pub location: Option<Coordinates>,
    /// Meters around `location`.
    pub radius: Option<u32>,
}

impl TextSearch {
    pub fn new<S: Into<String>>(query: S) -> Self {
        TextSearch {query: query.into(), location: None, radius: None}
    }

    pub fn location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Place {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub place_id: String,
}

const URL_BASE: &str =
    "https://maps.googleapis.com/maps/api/place/textsearch/json";

impl Protocol for TextSearch {
    type Output = Vec<Place>;

    fn request(&self, key: &str) -> Result<Request<Body>, Error> {
        let mut params = vec![
            ("query", self.query.clone()),
            ("key", key.to_string()),
        ];
        if let Some(location) = self.location {
            params.push(("location", location.to_string()));
        }
        if let Some(radius) = self.radius {
            params.push(("radius", radius.to_string()));
        }
        super::get_request(URL_BASE, &params)
    }

    fn parse(&self, mut body: Value) -> Result<Vec<Place>, Error> {
        match super::status(&body)? {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(Vec::new()),
            status => return Err(super::status_error(status, &body)),
        }
        let results = body.get_mut("results")
            .map(Value::take)
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Ok(serde_json::from_value(results)?)
    }
}

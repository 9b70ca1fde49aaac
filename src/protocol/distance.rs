// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{Coordinates, Error, ErrorKind, Protocol};
use hyper::{Body, Request};
use serde_derive::Serialize;
use serde_json::Value;
use tracing::debug;

/// Travel between two points, as a single-cell distance matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceMatrix {
    pub origin: Coordinates,
    pub destination: Coordinates,
}

/// Human-readable distance and duration texts, e.g. "5.3 km" and "12 mins".
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Distance {
    pub distance: Option<String>,
    pub duration: Option<String>,
}

const URL_BASE: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

impl Protocol for DistanceMatrix {
    type Output = Distance;

    fn request(&self, key: &str) -> Result<Request<Body>, Error> {
        let params = [
            ("origins", self.origin.to_string()),
            ("destinations", self.destination.to_string()),
            ("key", key.to_string()),
        ];
        super::get_request(URL_BASE, &params)
    }

    fn parse(&self, body: Value) -> Result<Distance, Error> {
        match super::status(&body)? {
            "OK" => {}
            status => return Err(super::status_error(status, &body)),
        }
        let element = body.pointer("/rows/0/elements/0")
            .ok_or_else(|| Error::new(ErrorKind::BadResponse,
                "Missing distance matrix element"))?;
        if let Some(status) = element.get("status").and_then(Value::as_str) {
            if status != "OK" {
                debug!(status, "distance matrix element not OK");
            }
        }
        let text = |key: &str| {
            element.get(key)
                .and_then(|v| v.get("text"))
                .and_then(Value::as_str)
                .map(String::from)
        };
        Ok(Distance {distance: text("distance"), duration: text("duration")})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn matrix() -> DistanceMatrix {
        DistanceMatrix {
            origin: Coordinates {latitude: 48.8584, longitude: 2.2945},
            destination: Coordinates {latitude: 48.8606, longitude: 2.3376},
        }
    }

    #[test]
    fn request_uses_coordinates() {
        let req = matrix().request("k").unwrap();
        assert_eq!(req.uri().path(), "/maps/api/distancematrix/json");
        assert_eq!(super::super::query_pairs(&req), vec![
            ("origins".to_string(), "48.8584,2.2945".to_string()),
            ("destinations".to_string(), "48.8606,2.3376".to_string()),
            ("key".to_string(), "k".to_string()),
        ]);
    }

    #[test]
    fn parses_first_element() {
        let body = json!({
            "status": "OK",
            "rows": [{"elements": [{
                "status": "OK",
                "distance": {"text": "4.4 km", "value": 4381},
                "duration": {"text": "14 mins", "value": 840},
            }]}],
        });
        assert_eq!(matrix().parse(body).unwrap(), Distance {
            distance: Some("4.4 km".into()),
            duration: Some("14 mins".into()),
        });
    }

    #[test]
    fn unreachable_element_has_no_texts() {
        let body = json!({
            "status": "OK",
            "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}],
        });
        assert_eq!(matrix().parse(body).unwrap(), Distance::default());
    }

    #[test]
    fn empty_rows_are_a_bad_response() {
        let body = json!({"status": "OK", "rows": []});
        let e = matrix().parse(body).unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::BadResponse);
    }

    #[test]
    fn over_limit_is_an_api_error() {
        let body = json!({"status": "OVER_QUERY_LIMIT", "rows": []});
        let e = matrix().parse(body).unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::ApiStatus("OVER_QUERY_LIMIT".into()));
    }
}

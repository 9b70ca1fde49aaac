// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{extract, AddressComponent, Coordinates, Error, ErrorKind,
    NormalizedAddress, Protocol};
use hyper::{Body, Request};
use serde_derive::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceDetails {
    pub place_id: String,
}

impl PlaceDetails {
    pub fn new<S: Into<String>>(place_id: S) -> Self {
        PlaceDetails {place_id: place_id.into()}
    }
}

/// The `result` member of a place details response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PlaceDetailsResult {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Geometry {
    #[serde(default)]
    location: Option<LatLng>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
struct LatLng {
    lat: Option<f64>,
    lng: Option<f64>,
}

impl PlaceDetailsResult {
    pub fn name(&self) -> Option<&str> {self.name.as_ref().map(|s| &**s)}

    pub fn formatted_address(&self) -> Option<&str> {
        self.formatted_address.as_ref().map(|s| &**s)
    }

    pub fn address_components(&self) -> &[AddressComponent] {
        &self.address_components
    }

    pub fn address(&self) -> NormalizedAddress {
        extract(&self.address_components)
    }

    /// Location of the place, if the response carried both coordinates.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let location = self.geometry.as_ref()?.location?;
        Some(Coordinates {
            latitude: location.lat?,
            longitude: location.lng?,
        })
    }
}

const URL_BASE: &str = "https://maps.googleapis.com/maps/api/place/details/json";

impl Protocol for PlaceDetails {
    type Output = PlaceDetailsResult;

    fn request(&self, key: &str) -> Result<Request<Body>, Error> {
        let params = [
            ("place_id", self.place_id.clone()),
            ("key", key.to_string()),
        ];
        super::get_request(URL_BASE, &params)
    }

    fn parse(&self, mut body: Value) -> Result<PlaceDetailsResult, Error> {
        match super::status(&body)? {
            "OK" => {}
            status => return Err(super::status_error(status, &body)),
        }
        let result = body.get_mut("result")
            .map(Value::take)
            .ok_or_else(|| Error::new(ErrorKind::BadResponse,
                "Missing result"))?;
        Ok(serde_json::from_value(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sydney() -> Value {
        json!({
            "status": "OK",
            "result": {
                "name": "Google Workplace 6",
                "formatted_address": "48 Pirrama Rd, Pyrmont NSW 2009, Australia",
                "address_components": [
                    {"long_name": "48", "short_name": "48",
                        "types": ["street_number"]},
                    {"long_name": "Pirrama Road", "short_name": "Pirrama Rd",
                        "types": ["route"]},
                    {"long_name": "Pyrmont", "short_name": "Pyrmont",
                        "types": ["locality", "political"]},
                    {"long_name": "New South Wales", "short_name": "NSW",
                        "types": ["administrative_area_level_1", "political"]},
                    {"long_name": "Australia", "short_name": "AU",
                        "types": ["country", "political"]},
                    {"long_name": "2009", "short_name": "2009",
                        "types": ["postal_code"]},
                ],
                "geometry": {"location": {"lat": -33.866489, "lng": 151.1958561}},
            },
        })
    }

    #[test]
    fn request_names_the_place() {
        let req = PlaceDetails::new("ChIJN1t_tDeuEmsRUsoyG83frY4")
            .request("k").unwrap();
        assert_eq!(req.uri().path(), "/maps/api/place/details/json");
        assert_eq!(super::super::query_pairs(&req), vec![
            ("place_id".to_string(), "ChIJN1t_tDeuEmsRUsoyG83frY4".to_string()),
            ("key".to_string(), "k".to_string()),
        ]);
    }

    #[test]
    fn parses_address_and_location() {
        let details = PlaceDetails::new("x").parse(sydney()).unwrap();
        assert_eq!(details.name(), Some("Google Workplace 6"));
        assert_eq!(details.address_components().len(), 6);
        let addr = details.address();
        assert_eq!(addr.street(), Some("48 Pirrama Road"));
        assert_eq!(addr.city(), Some("Pyrmont"));
        assert_eq!(addr.state(), Some("New South Wales"));
        assert_eq!(addr.postal_code(), Some("2009"));
        assert_eq!(addr.country(), Some("Australia"));
        assert_eq!(details.coordinates(), Some(Coordinates {
            latitude: -33.866489,
            longitude: 151.1958561,
        }));
    }

    #[test]
    fn sparse_result_has_no_address_or_location() {
        let body = json!({"status": "OK", "result": {"geometry": {
            "location": {"lat": 1.0}}}});
        let details = PlaceDetails::new("x").parse(body).unwrap();
        assert_eq!(details.formatted_address(), None);
        assert_eq!(details.address(), NormalizedAddress::default());
        assert_eq!(details.coordinates(), None);
    }

    #[test]
    fn missing_result_is_a_bad_response() {
        let e = PlaceDetails::new("x").parse(json!({"status": "OK"}))
            .unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::BadResponse);
    }

    #[test]
    fn not_found_is_an_api_error() {
        let e = PlaceDetails::new("x").parse(json!({"status": "NOT_FOUND"}))
            .unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::ApiStatus("NOT_FOUND".into()));
    }
}

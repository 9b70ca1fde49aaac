// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

mod details;
mod distance;
mod text_search;

pub use self::details::{PlaceDetails, PlaceDetailsResult};
pub use self::distance::{Distance, DistanceMatrix};
pub use self::text_search::{Place, TextSearch};

use crate::{Error, ErrorKind};
use hyper::{Body, Request};
use serde_json::Value;
use url::Url;

/// A Google Maps web service endpoint.
pub trait Protocol {
    type Output;

    fn request(&self, key: &str) -> Result<Request<Body>, Error>;
    fn parse(&self, body: Value) -> Result<Self::Output, Error>;
}

fn get_request(url_base: &str, params: &[(&str, String)])
    -> Result<Request<Body>, Error>
{
    let url = Url::parse_with_params(url_base, params)?;
    Request::builder().uri(url.as_str())
        .body(Body::empty())
        .map_err(|e| Error::new(ErrorKind::BadRequest, e))
}

fn status(body: &Value) -> Result<&str, Error> {
    body.get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::new(ErrorKind::BadResponse, "Missing status"))
}

fn status_error(status: &str, body: &Value) -> Error {
    let kind = ErrorKind::ApiStatus(status.to_string());
    match body.get("error_message").and_then(Value::as_str) {
        Some(message) => Error::new(kind, message.to_string()),
        None => kind.into(),
    }
}

#[cfg(test)]
fn query_pairs(req: &Request<Body>) -> Vec<(String, String)> {
    let url = Url::parse(&req.uri().to_string()).unwrap();
    url.query_pairs().into_owned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_params_in_order() {
        let req = get_request("https://example.com/json",
            &[("a", "1".to_string()), ("b", "x y".to_string())]).unwrap();
        assert_eq!(req.method(), &hyper::Method::GET);
        assert_eq!(query_pairs(&req), vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "x y".to_string()),
        ]);
    }

    #[test]
    fn missing_status_is_a_bad_response() {
        let e = status(&json!({"results": []})).unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::BadResponse);
    }

    #[test]
    fn status_error_keeps_message() {
        let body = json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
        });
        let e = status_error(status(&body).unwrap(), &body);
        assert_eq!(e.kind(), &ErrorKind::ApiStatus("REQUEST_DENIED".into()));
        assert_eq!(std::error::Error::source(&e).unwrap().to_string(),
            "The provided API key is invalid.");
    }
}

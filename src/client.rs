// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{Coordinates, Distance, DistanceMatrix, Error, ErrorKind,
    PlaceDetails, Protocol};
use futures::{Future, Stream};
use hyper::StatusCode;
use hyper::client::HttpConnector;
use hyper_tls::HttpsConnector;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Issues Google Maps web service requests with a fixed API key.
#[derive(Clone, Debug)]
pub struct Client {
    key: Arc<str>,
    http: hyper::Client<HttpsConnector<HttpConnector>>,
}

impl Client {
    const DNS_THREADS: usize = 4;

    pub fn new<S: Into<String>>(key: S) -> Result<Self, Error> {
        let connector = HttpsConnector::new(Self::DNS_THREADS)?;
        let http = hyper::Client::builder()
            .build::<_, hyper::Body>(connector);
        Ok(Client {key: Arc::from(key.into()), http})
    }

    /// Sends the request and decodes the body of a successful response.
    pub fn fetch_json<P: Protocol>(&self, protocol: &P)
        -> Box<dyn Future<Item = Value, Error = Error> + Send>
    {
        let req = match protocol.request(&self.key) {
            Ok(req) => req,
            Err(e) => return Box::new(futures::future::err(e)),
        };
        let path = req.uri().path().to_string();
        debug!(path = %path, "sending request");
        let json = self.http.request(req)
            .from_err::<Error>()
            .and_then(|resp| {
                let status = resp.status();
                resp.into_body()
                    .concat2()
                    .from_err::<Error>()
                    .map(move |body| (status, body))
            })
            .and_then(|(status, body)| decode(status, &body))
            .map_err(move |e| {
                debug!(path = %path, error = %e, "request failed");
                e
            });
        Box::new(json)
    }

    pub fn fetch<P>(&self, protocol: P)
        -> Box<dyn Future<Item = P::Output, Error = Error> + Send>
    where
        P: Protocol + Send + 'static,
        P::Output: Send + 'static,
    {
        let json = self.fetch_json(&protocol);
        Box::new(json.and_then(move |body| protocol.parse(body)))
    }

    /// Looks up the location of a place.
    pub fn coordinates(&self, place_id: &str)
        -> Box<dyn Future<Item = Coordinates, Error = Error> + Send>
    {
        let place_id = place_id.to_string();
        let details = self.fetch(PlaceDetails::new(place_id.clone()));
        let coords = details.and_then(move |details| {
            details.coordinates().ok_or_else(|| {
                Error::new(ErrorKind::LocationNotFound,
                    format!("No coordinates for place {}", place_id))
            })
        });
        Box::new(coords)
    }

    /// Distance and travel time between two places.
    ///
    /// Both places are looked up concurrently before querying the distance
    /// matrix.
    pub fn distance(&self, from: &str, to: &str)
        -> Box<dyn Future<Item = Distance, Error = Error> + Send>
    {
        let client = self.clone();
        let distance = self.coordinates(from)
            .join(self.coordinates(to))
            .and_then(move |(origin, destination)| {
                debug!(%origin, %destination, "resolved places");
                client.fetch(DistanceMatrix {origin, destination})
            });
        Box::new(distance)
    }
}

fn decode(status: StatusCode, body: &[u8]) -> Result<Value, Error> {
    if !status.is_success() {
        let text = String::from_utf8_lossy(body).into_owned();
        return Err(Error::new(ErrorKind::HttpStatus(status.as_u16()), text));
    }
    Ok(serde_json::from_slice::<Value>(body)?)
}

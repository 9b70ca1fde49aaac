// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

#![deny(warnings)]

mod address;
mod client;
mod config;
mod err;
mod protocol;
mod report;

pub use crate::address::{extract, AddressComponent, NormalizedAddress};
pub use crate::client::Client;
pub use crate::config::Config;
pub use crate::err::{Error, ErrorKind};
pub use crate::protocol::{Distance, DistanceMatrix, Place, PlaceDetails,
    PlaceDetailsResult, Protocol, TextSearch};
pub use crate::report::{DetailsReport, DistanceReport, PlaceReport,
    SearchReport};

use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, self};
use std::str::FromStr;

/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.split(',');
        let (lat, long) = match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(long), None) => (lat, long),
            _ => return Err(Error::new(ErrorKind::BadRequest,
                format!("Expected LAT,LNG but got \"{}\"", s))),
        };
        let parse = |v: &str| -> Result<f64, Error> {
            let v = v.trim().parse::<f64>()
                .map_err(|e| Error::new(ErrorKind::BadRequest, e))?;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(Error::new(ErrorKind::BadRequest,
                    format!("Coordinate {} is not finite", v)))
            }
        };
        Ok(Coordinates {latitude: parse(lat)?, longitude: parse(long)?})
    }
}

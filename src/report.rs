// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

//! Human-readable rendering of API results.

use crate::{Distance, Place, PlaceDetailsResult};
use std::fmt::{Display, self};

const SEPARATOR_WIDTH: usize = 50;
const NOT_AVAILABLE: &str = "Not available";

pub struct PlaceReport<'a>(pub &'a Place);

impl<'a> Display for PlaceReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let place = self.0;
        writeln!(f, "Name: {}", place.name)?;
        writeln!(f, "Address: {}", place.formatted_address)?;
        match place.rating {
            Some(rating) => writeln!(f, "Rating: {}", rating)?,
            None => writeln!(f, "Rating: No rating available")?,
        }
        writeln!(f, "Place ID: {}", place.place_id)?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

pub struct SearchReport<'a>(pub &'a [Place]);

impl<'a> Display for SearchReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No places found.");
        }
        self.0.iter().try_for_each(|place| write!(f, "{}", PlaceReport(place)))
    }
}

pub struct DetailsReport<'a>(pub &'a PlaceDetailsResult);

impl<'a> Display for DetailsReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let details = self.0;
        let addr = details.address();
        writeln!(f, "Formatted Address: {}",
            details.formatted_address().unwrap_or("No address available"))?;
        let fields = [
            ("Street", addr.street()),
            ("City", addr.city()),
            ("State", addr.state()),
            ("Zip Code", addr.postal_code()),
            ("Country", addr.country()),
        ];
        for (label, value) in &fields {
            let value = value.filter(|v| !v.is_empty());
            writeln!(f, "{}: {}", label, value.unwrap_or(NOT_AVAILABLE))?;
        }
        Ok(())
    }
}

pub struct DistanceReport<'a>(pub &'a Distance);

impl<'a> Display for DistanceReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Distance: {}, Duration: {}", or_na(&self.0.distance),
            or_na(&self.0.duration))
    }
}

fn or_na(text: &Option<String>) -> &str {
    text.as_ref().map_or("N/A", |s| &**s)
}

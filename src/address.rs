// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use serde_derive::{Deserialize, Serialize};

/// One typed token of a place's postal address.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn new<S: Into<String>>(long_name: S, types: &[&str]) -> Self {
        let long_name = long_name.into();
        AddressComponent {
            short_name: long_name.clone(),
            long_name,
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn has_type(&self, ty: &str) -> bool {
        self.types.iter().any(|t| t == ty)
    }
}

/// Street, city, state, postal code and country of a place.
///
/// Fields missing from the components stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NormalizedAddress {
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl NormalizedAddress {
    pub fn street(&self) -> Option<&str> {self.street.as_ref().map(|s| &**s)}
    pub fn city(&self) -> Option<&str> {self.city.as_ref().map(|s| &**s)}
    pub fn state(&self) -> Option<&str> {self.state.as_ref().map(|s| &**s)}

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_ref().map(|s| &**s)
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_ref().map(|s| &**s)
    }
}

/// Folds address components into a `NormalizedAddress`.
///
/// Each recognized type is checked independently, so a component carrying
/// several of them updates every matching field. Later components win,
/// except that a route is appended to a preceding street number.
pub fn extract(components: &[AddressComponent]) -> NormalizedAddress {
    components.iter().fold(NormalizedAddress::default(), |mut addr, c| {
        let name = &c.long_name;
        if c.has_type("street_number") {
            addr.street = Some(name.clone());
        }
        if c.has_type("route") {
            let number = addr.street.take().filter(|s| !s.is_empty());
            addr.street = Some(match number {
                Some(number) => format!("{} {}", number, name),
                None => name.clone(),
            });
        }
        if c.has_type("locality") {
            addr.city = Some(name.clone());
        }
        if c.has_type("administrative_area_level_1") {
            addr.state = Some(name.clone());
        }
        if c.has_type("postal_code") {
            addr.postal_code = Some(name.clone());
        }
        if c.has_type("country") {
            addr.country = Some(name.clone());
        }
        addr
    })
}

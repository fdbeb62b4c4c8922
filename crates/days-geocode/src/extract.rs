//! Projection of raw upstream records into canonical output records.

use crate::dictionary::SynonymDictionary;
use crate::standardize::standardize;
use crate::types::{AddressParts, Candidate, Location, ReverseAddress, ReversePlace};

/// Parses decimal-degree text. Malformed text yields `NaN`; callers treat
/// `NaN` coordinates as invalid.
#[must_use]
pub fn parse_coordinate(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// First field that is present and non-empty.
fn first_non_empty<'a>(fields: &[&'a Option<String>]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| field.as_deref())
        .find(|value| !value.is_empty())
}

/// Projects a forward candidate into a [`Location`].
///
/// `name` takes the most specific administrative level available, in the
/// order city, town, village, island, state, country, and falls back to
/// `fallback_name`.
#[must_use]
pub fn project(candidate: &Candidate, fallback_name: &str) -> Location {
    let empty = AddressParts::default();
    let address = candidate.address.as_ref().unwrap_or(&empty);

    let name = first_non_empty(&[
        &address.city,
        &address.town,
        &address.village,
        &address.island,
        &address.state,
        &address.country,
    ])
    .unwrap_or(fallback_name)
    .to_owned();

    Location {
        lat: parse_coordinate(&candidate.lat),
        lng: parse_coordinate(&candidate.lon),
        name,
        country: address.country.clone().unwrap_or_default(),
        display_name: candidate.display_name.clone(),
    }
}

/// Projects a reverse response into a [`ReverseAddress`], localizing the
/// city and country through the dictionary.
///
/// Returns `None` when the response carries no address object.
#[must_use]
pub fn project_reverse(dictionary: &SynonymDictionary, place: &ReversePlace) -> Option<ReverseAddress> {
    let address = place.address.as_ref()?;

    let city_raw = first_non_empty(&[
        &address.city,
        &address.town,
        &address.village,
        &address.municipality,
        &address.island,
        &address.state,
    ])
    .unwrap_or("");
    let country_raw = address.country.as_deref().unwrap_or("");

    let country = standardize(dictionary, country_raw);
    let mut city = standardize(dictionary, city_raw);
    if city.is_empty() {
        city.clone_from(&country);
    }

    Some(ReverseAddress {
        full_address: place.display_name.clone(),
        city,
        country,
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

//! Location input validation
//!
//! A location is either a `"lat,lng"` coordinate pair or free text that the
//! upstream provider geocodes. Only coordinate-shaped input is checked here;
//! anything else passes through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::LocationError;

/// Optional sign, 1-3 integer digits and an optional fraction on each side,
/// whitespace tolerated around the comma and at the ends. Strings with more
/// integer digits (e.g. "1234,5678") do not match and count as free text.
static COORD_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*-?\d{1,3}(?:\.\d+)?\s*,\s*-?\d{1,3}(?:\.\d+)?\s*$")
        .expect("coordinate regex is valid")
});

/// Validate a single location string.
///
/// Coordinate-shaped input must parse as two numbers with latitude in
/// [-90, 90] and longitude in [-180, 180]. Free text always succeeds.
pub fn validate_location(input: &str) -> Result<(), LocationError> {
    if !COORD_SHAPE.is_match(input) {
        return Ok(());
    }

    let compact = input.replace(' ', "");
    let (lat_str, lng_str) = match compact.split_once(',') {
        Some(parts) => parts,
        None => return Err(LocationError::MalformedCoordinate),
    };

    // The shape gate makes a parse failure nearly impossible, but the
    // contract keeps it distinct from the range check.
    let lat: f64 = lat_str
        .parse()
        .map_err(|_| LocationError::MalformedCoordinate)?;
    let lng: f64 = lng_str
        .parse()
        .map_err(|_| LocationError::MalformedCoordinate)?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(LocationError::CoordinateOutOfRange);
    }

    Ok(())
}

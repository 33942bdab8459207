//! Road avoidance tags
//!
//! The final avoidance set is the union of what the client asked for and
//! what the travel mode mandates. Tags are provider strings ("toll road",
//! "Limited Access", "unpaved", ...) and are never removed, only added.

use std::collections::BTreeSet;

use crate::core::mode::TravelMode;

/// Build the avoidance set sent upstream and echoed in the response.
pub fn build_avoids(requested: &[String], mode: &TravelMode) -> BTreeSet<String> {
    let mut avoids: BTreeSet<String> = requested.iter().cloned().collect();

    // Motorcycles must stay off limited-access highways. Fixed domain rule.
    if *mode == TravelMode::Motorcycle {
        avoids.insert("Limited Access".to_string());
    }

    // Unpaved-road avoidance is explicitly supported; re-inserting is a
    // no-op under set semantics and intentionally kept that way.
    if requested.iter().any(|a| a == "unpaved") {
        avoids.insert("unpaved".to_string());
    }

    avoids
}

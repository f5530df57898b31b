// ABOUTME: Static catalog of fantasy destinations and the shared starting point
// ABOUTME: Lookup by id with not-found errors for unknown destinations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use epic_run_core::errors::{AppError, AppResult};
use epic_run_core::models::{Coordinate, Destination, Difficulty};

/// Label of the shared journey starting point
pub const START_NAME: &str = "London";

/// Every journey departs from London
pub const START_LOCATION: Coordinate = Coordinate::new(51.5074, -0.1278);

/// All destinations, ordered by distance
pub const DESTINATIONS: [Destination; 6] = [
    Destination {
        id: "hogwarts",
        name: "Hogwarts",
        franchise: "Harry Potter",
        distance_km: 50.0,
        description: "Journey to the School of Witchcraft and Wizardry. Cross the Scottish Highlands to reach the magical castle.",
        image: "destinations/hogwarts.jpg",
        difficulty: Difficulty::Easy,
        estimated_days: 7,
        coordinate: Coordinate::new(56.4907, -5.6076),
    },
    Destination {
        id: "narnia",
        name: "Narnia",
        franchise: "The Chronicles of Narnia",
        distance_km: 100.0,
        description: "Step through the wardrobe and run through the magical lands of Narnia to reach Cair Paravel.",
        image: "destinations/narnia.jpg",
        difficulty: Difficulty::Medium,
        estimated_days: 14,
        coordinate: Coordinate::new(54.6333, -5.9167),
    },
    Destination {
        id: "rivendell",
        name: "Rivendell",
        franchise: "The Lord of the Rings",
        distance_km: 200.0,
        description: "Travel through the Misty Mountains to reach the Last Homely House, sanctuary of the Elves.",
        image: "destinations/rivendell.jpg",
        difficulty: Difficulty::Medium,
        estimated_days: 28,
        coordinate: Coordinate::new(-41.2865, 174.7762),
    },
    Destination {
        id: "mordor",
        name: "Mordor",
        franchise: "The Lord of the Rings",
        distance_km: 470.0,
        description: "One does not simply walk into Mordor. But you can run there! Follow Frodo's path to Mount Doom.",
        image: "destinations/mordor.jpg",
        difficulty: Difficulty::Hard,
        estimated_days: 60,
        coordinate: Coordinate::new(-39.1234, 175.3456),
    },
    Destination {
        id: "asgard",
        name: "Asgard",
        franchise: "Marvel / Norse Mythology",
        distance_km: 750.0,
        description: "Cross the Bifrost Rainbow Bridge and ascend to the realm of the Gods.",
        image: "destinations/asgard.jpg",
        difficulty: Difficulty::Epic,
        estimated_days: 100,
        coordinate: Coordinate::new(63.4305, 10.3951),
    },
    Destination {
        id: "wakanda",
        name: "Wakanda",
        franchise: "Black Panther",
        distance_km: 1000.0,
        description: "Journey across Africa to find the hidden kingdom of Wakanda. Wakanda Forever!",
        image: "destinations/wakanda.jpg",
        difficulty: Difficulty::Epic,
        estimated_days: 140,
        coordinate: Coordinate::new(-1.2921, 36.8219),
    },
];

/// Find a destination by id
#[must_use]
pub fn find_destination(id: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

/// Find a destination by id, failing with a not-found error
///
/// # Errors
///
/// Returns `ResourceNotFound` when no destination has the given id
pub fn destination(id: &str) -> AppResult<&'static Destination> {
    find_destination(id)
        .ok_or_else(|| AppError::not_found(format!("Destination '{id}'")).with_resource_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use epic_run_core::errors::ErrorCode;

    #[test]
    fn test_lookup() {
        let mordor = destination("mordor").unwrap();
        assert!((mordor.distance_km - 470.0).abs() < f64::EPSILON);
        assert_eq!(mordor.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_unknown_destination() {
        let error = destination("gondor").unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert!(find_destination("").is_none());
    }

    #[test]
    fn test_catalog_is_ordered_by_distance() {
        assert!(DESTINATIONS
            .windows(2)
            .all(|pair| pair[0].distance_km < pair[1].distance_km));
    }
}

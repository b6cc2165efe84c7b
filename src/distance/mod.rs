//! distance — pairwise distance matrices for location centroids.
//!
//! Purpose
//! -------
//! Build the `n×n` distance input consumed by the gravity model and the
//! intervening-opportunities builder from per-location coordinates that
//! the caller has already obtained.
//!
//! Conventions
//! -----------
//! - Coordinates are in decimal degrees; distances are in kilometres.
//! - Location order follows the coordinate vectors, matching the feature
//!   vectors passed to the models.

pub mod haversine;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::haversine::{EARTH_RADIUS_KM, haversine_distance_matrix};

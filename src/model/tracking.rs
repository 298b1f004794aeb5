//! Tracking sample types: the latest simulated position per booking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::BookingId;

/// The latest simulated GPS position and speed for one booking.
///
/// Speed is always within `[25, 80]`; coordinates drift around the seed point
/// and are rounded to 5 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSample {
    pub lat: f64,
    pub lng: f64,
    pub speed: u32,
    pub updated_at: DateTime<Utc>,
}

/// Wire form of a sample: the booking id flattened alongside the coordinates,
/// exactly as `tracking_update` payloads and bootstrap entries carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingPoint {
    pub booking_id: BookingId,
    #[serde(flatten)]
    pub sample: TrackingSample,
}

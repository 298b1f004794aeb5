//! The Booking domain type: a driver's acceptance of a load.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::LoadId;

/// Type-safe identifier for Bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl From<u64> for BookingId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe identifier for the driver who accepted a load.
///
/// Driver records themselves live outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub u64);

impl Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a booking.
///
/// Currently single-valued; kept as an enum so the terminal set stays
/// extensible without inventing transitions this system never performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    InTransit,
}

/// A driver's acceptance of a load, creating an active shipment in transit.
///
/// A booking references exactly one load; creating it is atomic with flipping
/// that load to booked, so no two bookings can ever share a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub load_id: LoadId,
    pub driver_id: DriverId,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for accepting a load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub load_id: LoadId,
    pub driver_id: DriverId,
}

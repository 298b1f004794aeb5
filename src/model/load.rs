//! The Load domain type: a freight shipment posted by a customer.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type-safe identifier for Loads.
///
/// Ids start at 1, increase strictly, and are never reused; serialized as a
/// plain positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(pub u64);

impl From<u64> for LoadId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for LoadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe identifier for the customer who posted a load.
///
/// Customer records themselves live outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a load. The only transition is `Open -> Booked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Open,
    Booked,
}

/// A freight shipment posted by a customer, awaiting a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: LoadId,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub material: String,
    pub price: f64,
    pub customer_id: CustomerId,
    pub status: LoadStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for posting a new load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadCreate {
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub material: String,
    pub price: f64,
    pub customer_id: CustomerId,
}

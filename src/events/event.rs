//! Wire events delivered to subscribers.
//!
//! Every event serializes as `{"event": <name>, "data": <payload>}` so the
//! transport layer can forward frames without inspecting them.

use serde::{Deserialize, Serialize};

use crate::model::{Booking, Load, TrackingPoint};

/// Full-state snapshot handed to a subscriber at connect time.
///
/// Computed fresh for every subscriber, so late joiners see current truth:
/// the tracking array holds the latest sample per in-transit booking, not the
/// seed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub loads: Vec<Load>,
    pub bookings: Vec<Booking>,
    pub tracking: Vec<TrackingPoint>,
}

/// An event published to all subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event {
    /// Sent once per new subscriber, before any live event.
    Bootstrap(Snapshot),
    /// A booking was created; carries the full record.
    BookingCreated(Booking),
    /// A tracking sample changed, at seed time or on a simulator tick.
    TrackingUpdate(TrackingPoint),
}

impl Event {
    pub fn bootstrap(loads: Vec<Load>, bookings: Vec<Booking>, tracking: Vec<TrackingPoint>) -> Self {
        Self::Bootstrap(Snapshot {
            loads,
            bookings,
            tracking,
        })
    }

    pub fn booking_created(booking: Booking) -> Self {
        Self::BookingCreated(booking)
    }

    pub fn tracking_update(point: TrackingPoint) -> Self {
        Self::TrackingUpdate(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BookingId, BookingStatus, CustomerId, DriverId, LoadId, LoadStatus, TrackingSample,
    };
    use chrono::{TimeZone, Utc};

    fn fixed_booking() -> Booking {
        Booking {
            id: BookingId(1),
            load_id: LoadId(1),
            driver_id: DriverId(3),
            status: BookingStatus::InTransit,
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    fn fixed_point() -> TrackingPoint {
        TrackingPoint {
            booking_id: BookingId(1),
            sample: TrackingSample {
                lat: 28.6139,
                lng: 77.209,
                speed: 52,
                updated_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 5).unwrap(),
            },
        }
    }

    #[test]
    fn test_booking_created_wire_shape() {
        let json = serde_json::to_value(Event::booking_created(fixed_booking())).unwrap();
        assert_eq!(json["event"], "booking_created");
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["data"]["loadId"], 1);
        assert_eq!(json["data"]["driverId"], 3);
        assert_eq!(json["data"]["status"], "in_transit");
        assert_eq!(json["data"]["createdAt"], "2026-01-15T09:30:00Z");
    }

    #[test]
    fn test_tracking_update_wire_shape() {
        let json = serde_json::to_value(Event::tracking_update(fixed_point())).unwrap();
        assert_eq!(json["event"], "tracking_update");
        // The booking id is flattened alongside the sample fields.
        assert_eq!(json["data"]["bookingId"], 1);
        assert_eq!(json["data"]["lat"], 28.6139);
        assert_eq!(json["data"]["lng"], 77.209);
        assert_eq!(json["data"]["speed"], 52);
        assert_eq!(json["data"]["updatedAt"], "2026-01-15T09:30:05Z");
    }

    #[test]
    fn test_bootstrap_round_trip_is_lossless() {
        let load = Load {
            id: LoadId(1),
            origin: "Delhi".into(),
            destination: "Jaipur".into(),
            weight: 10.0,
            material: "steel".into(),
            price: 5000.0,
            customer_id: CustomerId(7),
            status: LoadStatus::Booked,
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 29, 0).unwrap(),
        };
        let event = Event::bootstrap(vec![load], vec![fixed_booking()], vec![fixed_point()]);

        let encoded = serde_json::to_string(&event).unwrap();
        let decoded: Event = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_payload_round_trips_are_lossless() {
        for event in [
            Event::booking_created(fixed_booking()),
            Event::tracking_update(fixed_point()),
        ] {
            let encoded = serde_json::to_string(&event).unwrap();
            let decoded: Event = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, event);
        }
    }
}

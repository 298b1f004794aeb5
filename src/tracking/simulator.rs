//! The tracking simulator actor.
//!
//! Owns exactly one [`TrackingSample`] per booking and advances them on
//! demand. It has no reference back into the booking registry beyond the ids
//! the ticker hands it, and a tick never errors: ids without a sample are
//! simply skipped.

use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::clients::TrackingClient;
use crate::framework::Response;
use crate::model::{BookingId, TrackingPoint, TrackingSample};

/// Seed coordinate every new sample starts from.
pub const SEED_LAT: f64 = 28.6139;
pub const SEED_LNG: f64 = 77.209;
/// Initial speed of a freshly seeded sample.
pub const SEED_SPEED: u32 = 52;
/// Inclusive speed bounds every sample respects.
pub const SPEED_MIN: u32 = 25;
pub const SPEED_MAX: u32 = 80;

// Per-tick perturbation spans: coordinates move by uniform [-0.01, +0.01],
// speed by uniform [-4, +4] before clamping.
const DRIFT_SPAN: f64 = 0.02;
const SPEED_JITTER_SPAN: f64 = 8.0;

/// Messages understood by the tracking simulator.
#[derive(Debug)]
pub enum TrackingRequest {
    /// Create the sample for a new booking at the seed coordinate.
    Seed {
        booking_id: BookingId,
        respond_to: Response<TrackingSample>,
    },
    /// Fetch the latest sample for one booking.
    Get {
        booking_id: BookingId,
        respond_to: Response<Option<TrackingSample>>,
    },
    /// Fetch every sample, in seed order. Used for bootstrap snapshots.
    All {
        respond_to: Response<Vec<TrackingPoint>>,
    },
    /// Advance the samples for the given in-transit bookings and return the
    /// updated points for broadcast.
    Tick {
        active: Vec<BookingId>,
        respond_to: Response<Vec<TrackingPoint>>,
    },
}

/// Actor owning the simulated position samples, keyed by booking id.
pub struct TrackingSimulator {
    receiver: mpsc::Receiver<TrackingRequest>,
    samples: HashMap<BookingId, TrackingSample>,
    seed_order: Vec<BookingId>,
}

/// Creates a new tracking simulator and its client.
pub fn new() -> (TrackingSimulator, TrackingClient) {
    let (sender, receiver) = mpsc::channel(32);
    let simulator = TrackingSimulator {
        receiver,
        samples: HashMap::new(),
        seed_order: Vec::new(),
    };
    (simulator, TrackingClient::new(sender))
}

impl TrackingSimulator {
    /// Runs the simulator's event loop, processing messages until the channel
    /// closes.
    pub async fn run(mut self) {
        info!("Tracking simulator started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TrackingRequest::Seed {
                    booking_id,
                    respond_to,
                } => {
                    let sample = TrackingSample {
                        lat: SEED_LAT,
                        lng: SEED_LNG,
                        speed: SEED_SPEED,
                        updated_at: Utc::now(),
                    };
                    if !self.samples.contains_key(&booking_id) {
                        self.seed_order.push(booking_id);
                    }
                    self.samples.insert(booking_id, sample.clone());
                    debug!(%booking_id, "Seeded sample");
                    let _ = respond_to.send(Ok(sample));
                }
                TrackingRequest::Get {
                    booking_id,
                    respond_to,
                } => {
                    let sample = self.samples.get(&booking_id).cloned();
                    debug!(%booking_id, found = sample.is_some(), "Get sample");
                    let _ = respond_to.send(Ok(sample));
                }
                TrackingRequest::All { respond_to } => {
                    let points: Vec<TrackingPoint> = self
                        .seed_order
                        .iter()
                        .filter_map(|id| {
                            self.samples.get(id).map(|sample| TrackingPoint {
                                booking_id: *id,
                                sample: sample.clone(),
                            })
                        })
                        .collect();
                    debug!(count = points.len(), "All samples");
                    let _ = respond_to.send(Ok(points));
                }
                TrackingRequest::Tick { active, respond_to } => {
                    let mut rng = rand::rng();
                    let mut updated = Vec::with_capacity(active.len());
                    for id in active {
                        match self.samples.get_mut(&id) {
                            Some(sample) => {
                                let next = advance(sample, &mut rng);
                                *sample = next.clone();
                                updated.push(TrackingPoint {
                                    booking_id: id,
                                    sample: next,
                                });
                            }
                            // Seeding is 1:1 with booking creation, so this
                            // only happens if a caller passes a stale id.
                            None => debug!(%id, "No sample for booking, skipping"),
                        }
                    }
                    debug!(count = updated.len(), "Tick");
                    let _ = respond_to.send(Ok(updated));
                }
            }
        }

        info!(samples = self.samples.len(), "Tracking simulator shutdown");
    }
}

/// Advances one sample by a random perturbation.
fn advance(sample: &TrackingSample, rng: &mut impl Rng) -> TrackingSample {
    let lat = round5(sample.lat + (rng.random::<f64>() - 0.5) * DRIFT_SPAN);
    let lng = round5(sample.lng + (rng.random::<f64>() - 0.5) * DRIFT_SPAN);
    let speed = (f64::from(sample.speed) + (rng.random::<f64>() - 0.5) * SPEED_JITTER_SPAN)
        .round()
        .clamp(f64::from(SPEED_MIN), f64::from(SPEED_MAX)) as u32;

    TrackingSample {
        lat,
        lng,
        speed,
        updated_at: Utc::now(),
    }
}

fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_sample() -> TrackingSample {
        TrackingSample {
            lat: SEED_LAT,
            lng: SEED_LNG,
            speed: SEED_SPEED,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_round5() {
        assert_eq!(round5(28.613_944_444_4), 28.613_94);
        assert_eq!(round5(-0.000_004), 0.0);
        assert_eq!(round5(77.209), 77.209);
    }

    #[test]
    fn test_advance_keeps_speed_clamped() {
        let mut rng = rand::rng();
        // Walk from both bounds; every resulting speed must stay in range.
        for start in [SPEED_MIN, SPEED_MAX, SEED_SPEED] {
            let mut sample = TrackingSample {
                speed: start,
                ..seed_sample()
            };
            for _ in 0..500 {
                sample = advance(&sample, &mut rng);
                assert!((SPEED_MIN..=SPEED_MAX).contains(&sample.speed));
            }
        }
    }

    #[test]
    fn test_advance_bounds_drift_and_rounds() {
        let mut rng = rand::rng();
        let mut sample = seed_sample();
        for _ in 0..200 {
            let next = advance(&sample, &mut rng);
            // Independent perturbations of at most 0.01 per axis, with a
            // little slack for the 5-decimal rounding.
            assert!((next.lat - sample.lat).abs() <= 0.01 + 1e-5);
            assert!((next.lng - sample.lng).abs() <= 0.01 + 1e-5);
            assert_eq!(next.lat, round5(next.lat));
            assert_eq!(next.lng, round5(next.lng));
            sample = next;
        }
    }

    #[tokio::test]
    async fn test_seed_then_tick_and_skip_unknown() {
        let (simulator, client) = new();
        tokio::spawn(simulator.run());

        let seeded = client.seed(BookingId(1)).await.unwrap();
        assert_eq!(seeded.lat, SEED_LAT);
        assert_eq!(seeded.lng, SEED_LNG);
        assert_eq!(seeded.speed, SEED_SPEED);

        // Unknown ids are skipped, not errors.
        let updated = client
            .tick(vec![BookingId(1), BookingId(42)])
            .await
            .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].booking_id, BookingId(1));

        let latest = client.get_sample(BookingId(1)).await.unwrap().unwrap();
        assert_eq!(latest, updated[0].sample);
        assert!(client.get_sample(BookingId(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_all_points_empty_without_bookings() {
        let (simulator, client) = new();
        tokio::spawn(simulator.run());

        for _ in 0..3 {
            let updated = client.tick(Vec::new()).await.unwrap();
            assert!(updated.is_empty());
        }
        assert!(client.all_points().await.unwrap().is_empty());
    }
}

//! Booking actor tests with the load registry mocked out.
//!
//! Exercises the orchestration in `on_create` against canned load registry
//! responses, with a real simulator and bus observing the side effects.

use chrono::Utc;

use loadboard::booking_actor::{self, BookingContext, BookingError};
use loadboard::clients::LoadClient;
use loadboard::events::{Event, EventBus};
use loadboard::framework::{FrameworkError, MockClient};
use loadboard::model::{
    Booking, BookingCreate, BookingId, BookingStatus, CustomerId, DriverId, Load, LoadId,
    LoadStatus,
};
use loadboard::tracking;

fn booked_load(id: u64) -> Load {
    Load {
        id: LoadId(id),
        origin: "Delhi".into(),
        destination: "Jaipur".into(),
        weight: 12.5,
        material: "steel".into(),
        price: 18000.0,
        customer_id: CustomerId(2),
        status: LoadStatus::Booked,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_create_booking_flips_load_seeds_tracking_and_publishes() {
    let mut load_mock = MockClient::<Load>::new();
    load_mock.expect_action(LoadId(1)).return_ok(booked_load(1));

    let (simulator, tracking_client) = tracking::new();
    tokio::spawn(simulator.run());

    let bus = EventBus::new(16);
    let mut events = bus.subscribe();

    let (actor, booking_client) = booking_actor::new();
    tokio::spawn(actor.run(BookingContext {
        loads: LoadClient::new(load_mock.client()),
        tracking: tracking_client.clone(),
        bus,
    }));

    let booking = booking_client
        .create_booking(BookingCreate {
            load_id: LoadId(1),
            driver_id: DriverId(3),
        })
        .await
        .unwrap();
    assert_eq!(booking.id, BookingId(1));
    assert_eq!(booking.load_id, LoadId(1));
    assert_eq!(booking.driver_id, DriverId(3));
    assert_eq!(booking.status, BookingStatus::InTransit);

    load_mock.verify();

    // The simulator was seeded during creation.
    let sample = tracking_client
        .get_sample(booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sample.lat, 28.6139);
    assert_eq!(sample.speed, 52);

    // The booking event precedes the seeded tracking update.
    let first = events.recv().await.unwrap();
    assert_eq!(first, Event::booking_created(booking.clone()));
    match events.recv().await.unwrap() {
        Event::TrackingUpdate(point) => {
            assert_eq!(point.booking_id, booking.id);
            assert_eq!(point.sample, sample);
        }
        other => panic!("expected tracking update, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_load_flip_stores_nothing_and_stays_silent() {
    let mut load_mock = MockClient::<Load>::new();
    load_mock
        .expect_action(LoadId(1))
        .return_err(FrameworkError::Conflict("Load 1 is already booked".into()));

    let (simulator, tracking_client) = tracking::new();
    tokio::spawn(simulator.run());

    let bus = EventBus::new(16);
    let mut events = bus.subscribe();

    let (actor, booking_client) = booking_actor::new();
    tokio::spawn(actor.run(BookingContext {
        loads: LoadClient::new(load_mock.client()),
        tracking: tracking_client.clone(),
        bus,
    }));

    let err = booking_client
        .create_booking(BookingCreate {
            load_id: LoadId(1),
            driver_id: DriverId(3),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Conflict(_)));

    load_mock.verify();

    // Nothing was stored, seeded, or published.
    assert!(booking_client.list_bookings().await.unwrap().is_empty());
    assert!(tracking_client
        .get_sample(BookingId(1))
        .await
        .unwrap()
        .is_none());
    assert!(matches!(
        events.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}

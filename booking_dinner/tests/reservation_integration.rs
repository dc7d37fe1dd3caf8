//! Integration tests for the reservation flow from initialization to cancellation.

use booking_dinner::ledger::{BookingId, InMemoryLedger, TableLedger};
use booking_dinner::reservation::{ReservationError, ReservationService, RestaurantConfig};
use std::sync::Arc;

fn setup_service() -> (ReservationService, Arc<InMemoryLedger>) {
    let ledger = Arc::new(InMemoryLedger::new());
    let service = ReservationService::new(ledger.clone(), RestaurantConfig::default())
        .expect("Default config should be valid");
    (service, ledger)
}

#[tokio::test]
async fn test_full_reservation_lifecycle() {
    let (service, ledger) = setup_service();

    service.initialize_tables(10).await.unwrap();

    let reservation = service.reserve_tables(3).await.unwrap();
    assert_eq!(reservation.tables_booked, 1);
    assert_eq!(reservation.remaining_tables, 9);
    assert_eq!(reservation.booking_id.as_str().len(), 6);

    let booking = ledger
        .booking(&reservation.booking_id)
        .await
        .expect("Booking should be stored in the ledger");
    assert_eq!(booking.party_size, 3);

    let cancellation = service
        .cancel_reservation(reservation.booking_id.as_str())
        .await
        .unwrap();
    assert_eq!(cancellation.tables_freed, 1);
    assert_eq!(cancellation.remaining_tables, 10);
}

#[tokio::test]
async fn test_initialize_zero_and_reserve_before_initialize() {
    let (service, _) = setup_service();

    let err = service.initialize_tables(0).await.unwrap_err();
    assert!(matches!(err, ReservationError::InvalidTableCount { .. }));

    for customers in [4, 0, -2] {
        let err = service.reserve_tables(customers).await.unwrap_err();
        assert_eq!(err, ReservationError::NotInitialized);
    }
}

#[tokio::test]
async fn test_every_valid_count_initializes_exactly_once() {
    let config = RestaurantConfig::default();

    for n in 1..=i64::from(config.max_tables) {
        let service =
            ReservationService::new(Arc::new(InMemoryLedger::new()), config.clone()).unwrap();

        service.initialize_tables(n).await.unwrap();
        assert_eq!(i64::from(service.available_tables().await), n);

        let err = service.initialize_tables(n).await.unwrap_err();
        assert_eq!(err, ReservationError::AlreadyInitialized);
    }
}

#[tokio::test]
async fn test_failed_initialize_does_not_lock_out_valid_one() {
    let (service, _) = setup_service();

    assert!(service.initialize_tables(100).await.is_err());
    assert!(!service.status().await.initialized);

    service.initialize_tables(5).await.unwrap();
    assert!(service.status().await.initialized);
}

#[tokio::test]
async fn test_cancel_twice_yields_invalid_booking_id() {
    let (service, _) = setup_service();
    service.initialize_tables(10).await.unwrap();

    let reservation = service.reserve_tables(6).await.unwrap();
    let id = reservation.booking_id.as_str();

    service.cancel_reservation(id).await.unwrap();
    let err = service.cancel_reservation(id).await.unwrap_err();
    assert_eq!(err, ReservationError::InvalidBookingId(id.to_string()));
    assert_eq!(service.available_tables().await, 10);
}

#[tokio::test]
async fn test_failed_reserve_keeps_availability() {
    let (service, _) = setup_service();
    service.initialize_tables(3).await.unwrap();

    service.reserve_tables(8).await.unwrap();
    let before = service.status().await;

    let err = service.reserve_tables(5).await.unwrap_err();
    assert_eq!(
        err,
        ReservationError::InsufficientCapacity {
            requested: 2,
            available: 1
        }
    );
    assert_eq!(service.status().await, before);

    // A party that fits the remaining table still goes through
    let reservation = service.reserve_tables(4).await.unwrap();
    assert_eq!(reservation.remaining_tables, 0);
}

#[tokio::test]
async fn test_many_bookings_keep_ledger_balanced() {
    let (service, _) = setup_service();
    service.initialize_tables(20).await.unwrap();

    let mut ids = Vec::new();
    for party in [2, 5, 9, 4, 12, 1] {
        ids.push(service.reserve_tables(party).await.unwrap().booking_id);
    }

    let status = service.status().await;
    assert_eq!(status.active_bookings, 6);
    assert_eq!(status.booked_tables, 1 + 2 + 3 + 1 + 3 + 1);
    assert!(status.is_balanced());

    for id in ids.iter().step_by(2) {
        service.cancel_reservation(id.as_str()).await.unwrap();
    }

    let status = service.status().await;
    assert_eq!(status.active_bookings, 3);
    assert!(status.is_balanced());
}

#[tokio::test]
async fn test_custom_seating_capacity() {
    let config = RestaurantConfig {
        seats_per_table: 6,
        max_tables: 50,
        ..Default::default()
    };
    let service = ReservationService::new(Arc::new(InMemoryLedger::new()), config).unwrap();
    service.initialize_tables(50).await.unwrap();

    assert_eq!(service.reserve_tables(6).await.unwrap().tables_booked, 1);
    assert_eq!(service.reserve_tables(7).await.unwrap().tables_booked, 2);
    assert_eq!(service.reserve_tables(18).await.unwrap().tables_booked, 3);
}

#[tokio::test]
async fn test_service_works_over_trait_object() {
    let ledger: Arc<dyn TableLedger> = Arc::new(InMemoryLedger::new());
    ledger.initialize(4).await.unwrap();

    // Bookings made directly on the ledger are cancellable through the service
    ledger.reserve(BookingId::new("WALKIN"), 2, 1).await.unwrap();

    let service = ReservationService::new(ledger.clone(), RestaurantConfig::default()).unwrap();
    let cancellation = service.cancel_reservation("WALKIN").await.unwrap();
    assert_eq!(cancellation.tables_freed, 1);
    assert_eq!(cancellation.remaining_tables, 4);
}

//! Concurrency tests: many reservations racing against one shared ledger.

use booking_dinner::ledger::InMemoryLedger;
use booking_dinner::reservation::{ReservationError, ReservationService, RestaurantConfig};
use std::sync::Arc;

fn shared_service(max_tables: u32) -> Arc<ReservationService> {
    let config = RestaurantConfig {
        max_tables,
        ..Default::default()
    };
    Arc::new(ReservationService::new(Arc::new(InMemoryLedger::new()), config).unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_reservations_never_oversell() {
    const K: usize = 64;

    let service = shared_service(100);
    service.initialize_tables((K - 1) as i64).await.unwrap();

    let mut handles = Vec::with_capacity(K);
    for _ in 0..K {
        let service = service.clone();
        handles.push(tokio::spawn(async move { service.reserve_tables(1).await }));
    }

    let mut successes = 0;
    let mut capacity_failures = 0;
    for handle in handles {
        match handle.await.expect("Task should not panic") {
            Ok(_) => successes += 1,
            Err(ReservationError::InsufficientCapacity { .. }) => capacity_failures += 1,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }

    assert_eq!(successes, K - 1);
    assert_eq!(capacity_failures, 1);
    assert_eq!(service.available_tables().await, 0);
    assert!(service.status().await.is_balanced());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_reserve_and_cancel_stay_balanced() {
    let service = shared_service(50);
    service.initialize_tables(50).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..200i64 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let party = (i % 11) + 1;
            if let Ok(reservation) = service.reserve_tables(party).await {
                if i % 2 == 0 {
                    service
                        .cancel_reservation(reservation.booking_id.as_str())
                        .await
                        .expect("Own booking should cancel");
                }
            }
        }));
    }

    for handle in handles {
        handle.await.expect("Task should not panic");
    }

    let status = service.status().await;
    assert!(status.is_balanced());
    assert!(status.available_tables <= 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_initialize_succeeds_once() {
    let service = shared_service(20);

    let mut handles = Vec::new();
    for n in 1..=16i64 {
        let service = service.clone();
        handles.push(tokio::spawn(async move { service.initialize_tables(n).await }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(e) => assert_eq!(e, ReservationError::AlreadyInitialized),
        }
    }

    assert_eq!(successes, 1);
    let status = service.status().await;
    assert_eq!(status.available_tables, status.total_tables);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_double_cancel_frees_once() {
    let service = shared_service(20);
    service.initialize_tables(10).await.unwrap();
    let reservation = service.reserve_tables(8).await.unwrap();
    let id = reservation.booking_id.into_string();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let service = service.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move { service.cancel_reservation(&id).await }));
    }

    let mut freed = 0;
    for handle in handles {
        if let Ok(cancellation) = handle.await.unwrap() {
            freed += cancellation.tables_freed;
        }
    }

    assert_eq!(freed, 2);
    assert_eq!(service.available_tables().await, 10);
}

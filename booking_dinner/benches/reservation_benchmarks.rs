use booking_dinner::{
    InMemoryLedger, ReservationService, RestaurantConfig,
    reservation::{BookingCodeConfig, BookingIdGenerator},
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::sync::Arc;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

/// Benchmark booking code generation for a few code lengths
fn bench_booking_id_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_id_generate");

    for length in [6usize, 12, 32] {
        let generator = BookingIdGenerator::new(&BookingCodeConfig {
            length,
            ..Default::default()
        });
        group.bench_with_input(BenchmarkId::from_parameter(length), &generator, |b, g| {
            b.iter(|| g.generate());
        });
    }

    group.finish();
}

/// Benchmark a reserve immediately followed by its cancel
fn bench_reserve_cancel_cycle(c: &mut Criterion) {
    let rt = runtime();
    let service = ReservationService::new(
        Arc::new(InMemoryLedger::new()),
        RestaurantConfig::default(),
    )
    .unwrap();
    rt.block_on(service.initialize_tables(20)).unwrap();

    c.bench_function("reserve_cancel_cycle", |b| {
        b.iter(|| {
            rt.block_on(async {
                let reservation = service.reserve_tables(6).await.unwrap();
                service
                    .cancel_reservation(reservation.booking_id.as_str())
                    .await
                    .unwrap();
            })
        });
    });
}

/// Benchmark availability reads against a ledger holding many bookings
fn bench_status_with_bookings(c: &mut Criterion) {
    let rt = runtime();
    let config = RestaurantConfig {
        seats_per_table: 1,
        max_tables: 10_000,
        ..Default::default()
    };
    let service = ReservationService::new(Arc::new(InMemoryLedger::new()), config).unwrap();
    rt.block_on(async {
        service.initialize_tables(10_000).await.unwrap();
        for _ in 0..5_000 {
            service.reserve_tables(1).await.unwrap();
        }
    });

    c.bench_function("available_tables_read", |b| {
        b.iter(|| rt.block_on(service.available_tables()));
    });

    c.bench_function("status_snapshot_5000_bookings", |b| {
        b.iter(|| rt.block_on(service.status()));
    });
}

criterion_group!(
    benches,
    bench_booking_id_generation,
    bench_reserve_cancel_cycle,
    bench_status_with_bookings
);
criterion_main!(benches);

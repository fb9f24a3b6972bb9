use chrono::{Days, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_occupancy::{Booking, Room};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

// Benchmark for a year-long occupancy scan against rooms of varying booking
// list sizes
pub fn occupancy_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_occupancy");

    for bookings_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(bookings_count),
            bookings_count,
            |b, &bookings_count| {
                // Three-night stays spaced five days apart, wrapping through
                // the years as needed
                let mut room = Room::new("Suite 005", 20000.0, 0);
                let handle = room.room_ref();
                let mut check_in = midnight(2025, 1, 1);
                for i in 0..bookings_count {
                    let check_out = check_in.checked_add_days(Days::new(3)).unwrap();
                    room.bookings.push(Booking::new(
                        format!("guest{}", i),
                        format!("guest{}@mail.com", i),
                        check_in,
                        check_out,
                        0,
                        handle.clone(),
                    ));
                    check_in = check_in.checked_add_days(Days::new(5)).unwrap();
                }

                let start = midnight(2025, 1, 1);
                let end = midnight(2026, 1, 1);

                b.iter(|| black_box(room.occupancy_percentage(black_box(start), black_box(end))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, occupancy_benchmark);
criterion_main!(benches);

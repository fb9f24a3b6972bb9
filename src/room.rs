// Rooms and occupancy calculations, per room and across a collection.

use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::booking::{Booking, MILLIS_PER_DAY};

// Error type for collection-level occupancy calculations
#[derive(Error, Debug, PartialEq)]
pub enum OccupancyError {
    #[error("cannot average occupancy over an empty room collection")]
    NoRooms,
}

// Lightweight, non-owning handle to a room: the pricing identity a Booking
// carries instead of a back-pointer into the room's own booking list.
// Matching back to a Room goes by name equality, so two distinct rooms
// sharing a name are indistinguishable to the occupancy check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRef {
    pub name: String,
    pub rate: f64,
    pub discount: u32,
}

// A room with its nightly rate, a flat room-level discount percentage and
// the list of bookings taken against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub bookings: Vec<Booking>,
    pub rate: f64,
    pub discount: u32,
}

impl Room {
    // Bookings are wired in by the caller after construction.
    pub fn new(name: impl Into<String>, rate: f64, discount: u32) -> Self {
        Self {
            name: name.into(),
            bookings: Vec::new(),
            rate,
            discount,
        }
    }

    // Handle for wiring this room into a Booking.
    pub fn room_ref(&self) -> RoomRef {
        RoomRef {
            name: self.name.clone(),
            rate: self.rate,
            discount: self.discount,
        }
    }

    // True when some booking in the list covers `date`, checkin and checkout
    // both included. Bookings whose room handle names a different room are
    // skipped; the list is caller-maintained and may contain strays.
    pub fn is_occupied(&self, date: NaiveDateTime) -> bool {
        self.bookings
            .iter()
            .any(|booking| {
                booking.room.name == self.name
                    && booking.check_in <= date
                    && date <= booking.check_out
            })
    }

    // Share of days between `start` and `end` during which the room is
    // occupied, as a rounded integer percentage. Probes one day at a time
    // from `start`; an end at or before the start yields 0.
    pub fn occupancy_percentage(&self, start: NaiveDateTime, end: NaiveDateTime) -> u32 {
        let raw_interval = (end - start).num_milliseconds();
        if raw_interval < 1 {
            return 0;
        }

        // Rounded so sub-day drift from variable-length days does not skew
        // the day count.
        let days_interval = (raw_interval as f64 / MILLIS_PER_DAY).round() as i64;
        let mut days_occupied = 0i64;
        let mut cursor = start;

        for _ in 0..days_interval {
            if self.is_occupied(cursor) {
                days_occupied += 1;
            }
            // Step by calendar day rather than a fixed 24h increment, keeping
            // the cursor aligned to the same time-of-day across transitions.
            cursor = cursor.checked_add_days(Days::new(1)).unwrap_or(cursor);
        }

        debug!(
            room = %self.name,
            days_occupied,
            days_interval,
            "occupancy percentage computed"
        );

        ((days_occupied as f64 / days_interval as f64) * 100.0).round() as u32
    }

    // Rounded mean of the per-room occupancy percentages over the range.
    // An empty collection has no meaningful average and is an error.
    pub fn total_occupancy_percentage(
        rooms: &[Room],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<u32, OccupancyError> {
        if rooms.is_empty() {
            return Err(OccupancyError::NoRooms);
        }

        let total_percentage: u32 = rooms
            .iter()
            .map(|room| room.occupancy_percentage(start, end))
            .sum();

        debug!(rooms = rooms.len(), total_percentage, "total occupancy computed");

        Ok((total_percentage as f64 / rooms.len() as f64).round() as u32)
    }

    // The rooms that are not fully booked over the range, in their original
    // order. Returns references into the input slice, not copies.
    pub fn available_rooms<'a>(
        rooms: &'a [Room],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<&'a Room> {
        rooms
            .iter()
            .filter(|room| room.occupancy_percentage(start, end) != 100)
            .collect()
    }
}

// Booking records and stay fee calculation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::room::RoomRef;

// Milliseconds in one calendar day; all day-count arithmetic runs in this unit.
pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

// A guest's stay in a single room. Guest fields are free text and not
// validated. The room is carried as a lightweight RoomRef wired in by the
// caller; the Room's own booking list is maintained separately and is not
// required to contain this booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub email: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub discount: u32,
    pub room: RoomRef,
}

impl Booking {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
        discount: u32,
        room: RoomRef,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            check_in,
            check_out,
            discount,
            room,
        }
    }

    // Total price for the stay: the nightly rate with the room discount taken
    // off, times the (possibly fractional) day count, with the booking
    // discount then taken off the subtotal. A checkout before the checkin is
    // an invalid stay and yields 0 rather than an error.
    pub fn fee(&self) -> f64 {
        let time_difference = (self.check_out - self.check_in).num_milliseconds();
        if time_difference < 0 {
            return 0.0;
        }

        let days_difference = time_difference as f64 / MILLIS_PER_DAY;
        let mut room_price = self.room.rate;

        // A fractional rate is a major-unit amount (e.g. 200.50 euros);
        // normalize it to minor units. A whole-valued rate is taken as
        // already being in minor units.
        if room_price.fract() != 0.0 {
            room_price = (room_price * 100.0).round();
        }

        let room_discount_total = if self.room.discount != 0 {
            room_price * (self.room.discount as f64 / 100.0)
        } else {
            0.0
        };

        let booking_total = days_difference * (room_price - room_discount_total);

        let booking_discount_total = if self.discount != 0 {
            booking_total * (self.discount as f64 / 100.0)
        } else {
            0.0
        };

        booking_total - booking_discount_total
    }
}

// Hotel room booking calculations: stay fees with nested discounts, and
// occupancy over date ranges for single rooms and room collections.

pub mod booking;
pub mod room;

// Re-export key types for convenience
pub use booking::Booking;
pub use room::{OccupancyError, Room, RoomRef};

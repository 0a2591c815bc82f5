pub mod block;
pub mod booking;
pub mod money;
pub mod slot;
pub mod staff;

pub use block::Block;
pub use booking::{Booking, BookingStatus, NewBooking, UNASSIGNED_STAFF};
pub use money::Money;
pub use slot::{parse_date, TimeSlot};
pub use staff::Staff;

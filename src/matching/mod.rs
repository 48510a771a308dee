pub mod view;

pub use view::{my_bookings, open_matches};

use crate::domain::models::{Booking, SkillFilter};

/// Bookings the viewer takes part in, as host or joined guest, in insertion
/// order. Cancelled bookings never show up here.
pub fn my_bookings<'a>(bookings: &'a [Booking], viewer: &str) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.is_active() && b.involves(viewer))
        .collect()
}

/// Open slots the viewer could claim, in insertion order. Hosts never see
/// their own listing as joinable.
pub fn open_matches<'a>(
    bookings: &'a [Booking],
    viewer: &str,
    filter: SkillFilter,
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.is_open())
        .filter(|b| b.host_id != viewer)
        .filter(|b| matches_filter(b, filter))
        .collect()
}

fn matches_filter(booking: &Booking, filter: SkillFilter) -> bool {
    match filter {
        SkillFilter::All => true,
        SkillFilter::Level(wanted) => booking
            .target_skill
            .map(|target| target.accepts(wanted))
            .unwrap_or(false),
    }
}

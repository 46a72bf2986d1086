// Booking requests: validated against the catalog and confirmed.
// Nothing is persisted; an accepted booking is logged for the staff.

pub mod handlers;
pub mod validation;

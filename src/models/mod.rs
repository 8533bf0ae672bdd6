pub mod booking;
pub mod contact;

pub use booking::{BlockedSlot, Booking, BookingRequest, BookingStatus, PackageType, ServiceType};
pub use contact::{ContactEntry, ContactRequest, ContactStatus};

/// Good-enough shape check for intake forms: one `@`, non-empty local part,
/// and a dot somewhere in the domain. Deliverability is the mailer's problem.
pub fn is_well_formed_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !s.contains(char::is_whitespace)
}

use anyhow::Context;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use crate::models::{
    Booking, BookingStatus, ContactEntry, ContactStatus, PackageType, ServiceType,
};

// Timestamps cross the storage boundary as RFC 3339 strings and come back
// as native DateTime<Utc> values.

fn to_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_iso(s: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("invalid stored timestamp: {s}"))
}

// ── Bookings ──

pub fn insert_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO bookings (id, name, email, phone, service_type, pickup_location,
                               dropoff_location, booking_date, booking_end_date,
                               duration_hours, package_type, message, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            booking.id,
            booking.name,
            booking.email,
            booking.phone,
            booking.service_type.as_str(),
            booking.pickup_location,
            booking.dropoff_location,
            to_iso(&booking.booking_date),
            booking.booking_end_date.as_ref().map(to_iso),
            booking.duration_hours,
            booking.package_type.map(|p| p.as_str()),
            booking.message,
            booking.status.as_str(),
            to_iso(&booking.created_at),
        ],
    )?;
    Ok(())
}

pub fn list_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, service_type, pickup_location, dropoff_location,
                booking_date, booking_end_date, duration_hours, package_type, message,
                status, created_at
         FROM bookings",
    )?;

    let rows = stmt.query_map([], |row| Ok(booking_from_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booking(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, service_type, pickup_location, dropoff_location,
                booking_date, booking_end_date, duration_hours, package_type, message,
                status, created_at
         FROM bookings WHERE id = ?1",
    )?;

    let mut rows = stmt.query_map(params![id], |row| Ok(booking_from_row(row)))?;
    match rows.next() {
        Some(row) => Ok(Some(row??)),
        None => Ok(None),
    }
}

/// Non-cancelled bookings whose start falls within `[start, end]` inclusive.
/// A booking that begins before `start` but runs into the range is not
/// returned; the filter is on the start column only.
pub fn bookings_starting_between(
    conn: &Connection,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, service_type, pickup_location, dropoff_location,
                booking_date, booking_end_date, duration_hours, package_type, message,
                status, created_at
         FROM bookings
         WHERE booking_date >= ?1 AND booking_date <= ?2 AND status != 'cancelled'
         ORDER BY booking_date ASC",
    )?;

    let rows = stmt.query_map(params![to_iso(start), to_iso(end)], |row| {
        Ok(booking_from_row(row))
    })?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

/// Returns whether a row matched; idempotent per status value.
pub fn update_booking_status(
    conn: &Connection,
    id: &str,
    status: &BookingStatus,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE bookings SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(count > 0)
}

pub fn count_bookings(conn: &Connection, status: Option<&BookingStatus>) -> anyhow::Result<i64> {
    let count = match status {
        Some(s) => conn.query_row(
            "SELECT COUNT(*) FROM bookings WHERE status = ?1",
            params![s.as_str()],
            |row| row.get(0),
        )?,
        None => conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?,
    };
    Ok(count)
}

fn booking_from_row(row: &Row) -> anyhow::Result<Booking> {
    let service_type_str: String = row.get(4)?;
    let booking_date_str: String = row.get(7)?;
    let booking_end_date_str: Option<String> = row.get(8)?;
    let package_type_str: Option<String> = row.get(10)?;
    let status_str: String = row.get(12)?;
    let created_at_str: String = row.get(13)?;

    Ok(Booking {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        service_type: ServiceType::parse(&service_type_str)
            .with_context(|| format!("unknown stored service type: {service_type_str}"))?,
        pickup_location: row.get(5)?,
        dropoff_location: row.get(6)?,
        booking_date: parse_iso(&booking_date_str)?,
        booking_end_date: booking_end_date_str.as_deref().map(parse_iso).transpose()?,
        duration_hours: row.get(9)?,
        package_type: package_type_str
            .as_deref()
            .map(|s| {
                PackageType::parse(s).with_context(|| format!("unknown stored package type: {s}"))
            })
            .transpose()?,
        message: row.get(11)?,
        status: BookingStatus::parse(&status_str)
            .with_context(|| format!("unknown stored booking status: {status_str}"))?,
        created_at: parse_iso(&created_at_str)?,
    })
}

// ── Contacts ──

pub fn insert_contact(conn: &Connection, contact: &ContactEntry) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO contacts (id, name, email, phone, service, message, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            contact.id,
            contact.name,
            contact.email,
            contact.phone,
            contact.service,
            contact.message,
            contact.status.as_str(),
            to_iso(&contact.created_at),
        ],
    )?;
    Ok(())
}

pub fn list_contacts(conn: &Connection) -> anyhow::Result<Vec<ContactEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, service, message, status, created_at FROM contacts",
    )?;

    let rows = stmt.query_map([], |row| Ok(contact_from_row(row)))?;

    let mut contacts = vec![];
    for row in rows {
        contacts.push(row??);
    }
    Ok(contacts)
}

pub fn count_contacts(conn: &Connection, status: Option<&ContactStatus>) -> anyhow::Result<i64> {
    let count = match status {
        Some(s) => conn.query_row(
            "SELECT COUNT(*) FROM contacts WHERE status = ?1",
            params![s.as_str()],
            |row| row.get(0),
        )?,
        None => conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?,
    };
    Ok(count)
}

fn contact_from_row(row: &Row) -> anyhow::Result<ContactEntry> {
    let status_str: String = row.get(6)?;
    let created_at_str: String = row.get(7)?;

    Ok(ContactEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        service: row.get(4)?,
        message: row.get(5)?,
        status: ContactStatus::parse(&status_str)
            .with_context(|| format!("unknown stored contact status: {status_str}"))?,
        created_at: parse_iso(&created_at_str)?,
    })
}

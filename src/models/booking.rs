use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled service engagement. `booking_end_date` is derived from
/// `duration_hours` at creation time and is `None` for point-in-time
/// bookings (no duration given).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: ServiceType,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub booking_date: DateTime<Utc>,
    pub booking_end_date: Option<DateTime<Utc>>,
    pub duration_hours: Option<i64>,
    pub package_type: Option<PackageType>,
    pub message: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Public intake payload. Enum-valued fields arrive as raw strings and are
/// rejected at the boundary, before anything touches storage.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub booking_date: DateTime<Utc>,
    pub duration_hours: Option<i64>,
    pub package_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceType {
    #[serde(rename = "car-with-driver")]
    CarWithDriver,
    #[serde(rename = "car-self-drive")]
    CarSelfDrive,
    #[serde(rename = "computer")]
    Computer,
    #[serde(rename = "consulting")]
    Consulting,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::CarWithDriver => "car-with-driver",
            ServiceType::CarSelfDrive => "car-self-drive",
            ServiceType::Computer => "computer",
            ServiceType::Consulting => "consulting",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "car-with-driver" => Some(ServiceType::CarWithDriver),
            "car-self-drive" => Some(ServiceType::CarSelfDrive),
            "computer" => Some(ServiceType::Computer),
            "consulting" => Some(ServiceType::Consulting),
            _ => None,
        }
    }

    pub fn is_car_service(&self) -> bool {
        matches!(self, ServiceType::CarWithDriver | ServiceType::CarSelfDrive)
    }
}

/// Descriptive only; nothing downstream branches on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PackageType {
    #[serde(rename = "short-trip")]
    ShortTrip,
    #[serde(rename = "half-day")]
    HalfDay,
    #[serde(rename = "full-day")]
    FullDay,
    #[serde(rename = "airport")]
    Airport,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::ShortTrip => "short-trip",
            PackageType::HalfDay => "half-day",
            PackageType::FullDay => "full-day",
            PackageType::Airport => "airport",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "short-trip" => Some(PackageType::ShortTrip),
            "half-day" => Some(PackageType::HalfDay),
            "full-day" => Some(PackageType::FullDay),
            "airport" => Some(PackageType::Airport),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Strict parse; unknown values map to `None` so callers can reject them
    /// before touching storage.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }
}

/// One availability-calendar entry: a claimed time window. For bookings
/// without a duration, `end == start`.
#[derive(Debug, Clone, Serialize)]
pub struct BlockedSlot {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub service_type: ServiceType,
}

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use super::Notifier;
use crate::models::{Booking, ContactEntry};

/// Sends plain-text email through an HTTP email API (Resend-style JSON
/// endpoint). An empty API key switches to dev mode: messages are logged
/// instead of sent.
pub struct HttpEmailNotifier {
    api_url: String,
    api_key: String,
    from: String,
    business_email: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

impl HttpEmailNotifier {
    pub fn new(api_url: String, api_key: String, from: String, business_email: String) -> Self {
        Self {
            api_url,
            api_key,
            from,
            business_email,
            client: reqwest::Client::new(),
        }
    }

    async fn send(&self, to: &str, subject: &str, text: String) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            tracing::info!(to, subject, "dev mode: email not sent");
            return Ok(());
        }

        self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&OutboundEmail {
                from: &self.from,
                to,
                subject,
                text,
            })
            .send()
            .await
            .context("failed to reach email API")?
            .error_for_status()
            .context("email API returned error")?;

        Ok(())
    }
}

fn describe_window(booking: &Booking) -> String {
    match booking.booking_end_date {
        Some(end) => format!(
            "{} to {}",
            booking.booking_date.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        ),
        None => booking.booking_date.format("%Y-%m-%d %H:%M").to_string(),
    }
}

fn booking_summary(booking: &Booking) -> String {
    let mut lines = vec![
        format!("Service: {}", booking.service_type.as_str()),
        format!("When: {}", describe_window(booking)),
        format!("Name: {}", booking.name),
        format!("Phone: {}", booking.phone),
    ];
    if let Some(pkg) = booking.package_type {
        lines.push(format!("Package: {}", pkg.as_str()));
    }
    if booking.service_type.is_car_service() {
        if let Some(pickup) = &booking.pickup_location {
            lines.push(format!("Pickup: {pickup}"));
        }
        if let Some(dropoff) = &booking.dropoff_location {
            lines.push(format!("Dropoff: {dropoff}"));
        }
    }
    if let Some(msg) = &booking.message {
        lines.push(format!("Message: {msg}"));
    }
    lines.join("\n")
}

#[async_trait]
impl Notifier for HttpEmailNotifier {
    async fn send_booking_confirmation(&self, booking: &Booking) -> anyhow::Result<()> {
        let subject = format!("Booking received - {}", booking.service_type.as_str());
        let text = format!(
            "Hi {},\n\nWe received your booking and will confirm it shortly.\n\n{}\n\nReference: {}",
            booking.name,
            booking_summary(booking),
            booking.id
        );
        self.send(&booking.email, &subject, text).await
    }

    async fn send_booking_alert(&self, booking: &Booking) -> anyhow::Result<()> {
        let subject = format!("New booking: {}", booking.service_type.as_str());
        let text = format!(
            "New booking from {} <{}>.\n\n{}\n\nReference: {}",
            booking.name,
            booking.email,
            booking_summary(booking),
            booking.id
        );
        self.send(&self.business_email, &subject, text).await
    }

    async fn send_contact_alert(&self, contact: &ContactEntry) -> anyhow::Result<()> {
        let subject = format!("New inquiry: {}", contact.service);
        let text = format!(
            "New contact form entry from {} <{}>.\n\nService: {}\nPhone: {}\nMessage: {}\n\nReference: {}",
            contact.name,
            contact.email,
            contact.service,
            contact.phone.as_deref().unwrap_or("-"),
            contact.message.as_deref().unwrap_or("-"),
            contact.id
        );
        self.send(&self.business_email, &subject, text).await
    }
}

pub mod email;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::models::{Booking, ContactEntry};

/// Outbound message delivery. Implementations format and transport the
/// message; callers only decide when one is owed.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_booking_confirmation(&self, booking: &Booking) -> anyhow::Result<()>;
    async fn send_booking_alert(&self, booking: &Booking) -> anyhow::Result<()>;
    async fn send_contact_alert(&self, contact: &ContactEntry) -> anyhow::Result<()>;
}

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Awaits a dispatch only to log its outcome. Errors and timeouts are logged
/// and swallowed; the triggering operation already succeeded by the time this
/// runs and must not be failed by a broken mailer.
pub async fn best_effort<F>(what: &str, fut: F)
where
    F: Future<Output = anyhow::Result<()>>,
{
    match tokio::time::timeout(DISPATCH_TIMEOUT, fut).await {
        Ok(Ok(())) => tracing::info!(what, "notification sent"),
        Ok(Err(e)) => tracing::error!(what, error = %e, "notification failed"),
        Err(_) => tracing::error!(what, "notification timed out"),
    }
}

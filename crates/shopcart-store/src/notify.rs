//! User-facing notification seam.

/// Sink for user-facing error messages.
///
/// Fire-and-forget: the cart engine never inspects a result. In a real
/// storefront this feeds the toast layer; in tests it records messages.
pub trait NotificationSink: Send + Sync {
    /// Surface an error message to the user.
    fn error(&self, message: &str);
}

/// Sink that routes notifications to the structured log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!(target: "shopcart::notify", "{message}");
    }
}

pub mod terminal;

use crate::model::SignalAlert;

/// Sink for alert notifications.
///
/// The rendered HTML body is handed over alongside the alert so a delivery
/// implementation can forward it as-is; actual mail transport lives outside
/// this crate.
pub trait Notifier: Send + Sync {
    fn notify(&self, alert: &SignalAlert, body_html: &str);
}

use crate::model::SignalAlert;
use crate::notifier::Notifier;

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, alert: &SignalAlert, body_html: &str) {
        tracing::warn!(
            symbol = %alert.symbol,
            signal = %alert.signal,
            direction = %alert.direction,
            timeframe = %alert.timeframe,
            last_close = alert.last_close,
            body_bytes = body_html.len(),
            "ALERT: {} {} on {}",
            alert.signal,
            alert.symbol,
            alert.timeframe,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_notifier_does_not_panic() {
        let notifier = TerminalNotifier;
        let alert = SignalAlert {
            symbol: "BTCUSDT".into(),
            signal: "BUY".into(),
            direction: "UP".into(),
            timeframe: "1h".into(),
            last_close: Some(42000.0),
            timestamp: None,
        };
        // Should not panic
        notifier.notify(&alert, "<!DOCTYPE html>");
    }
}

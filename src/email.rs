use chrono::{Datelike, SecondsFormat};

use crate::clock::Clock;
use crate::config::EmailConfig;
use crate::model::{DirectionStyle, SignalAlert, SignalStyle};

/// Placeholder shown when no closing price accompanies the alert.
const MISSING_VALUE: &str = "—";

/// Inline stylesheet for the alert document. Kept out of the format string
/// so the CSS braces need no escaping.
const STYLE: &str = r#"    body {
      margin: 0;
      padding: 0;
      font-family: 'Segoe UI', Arial, sans-serif;
      background-color: #f4f4f7;
      color: #111827;
    }
    .container {
      max-width: 600px;
      margin: 40px auto;
      background: #ffffff;
      border-radius: 10px;
      overflow: hidden;
      box-shadow: 0 4px 12px rgba(0,0,0,0.1);
    }
    .header {
      background-color: #1a73e8;
      color: #ffffff;
      text-align: center;
      padding: 20px;
      font-size: 24px;
      font-weight: bold;
    }
    .content {
      padding: 30px;
      font-size: 16px;
      line-height: 1.6;
    }
    .signal {
      display: inline-block;
      padding: 10px 20px;
      border-radius: 8px;
      color: #ffffff;
      font-weight: bold;
      text-transform: uppercase;
    }
    .buy { background-color: #28a745; }
    .sell { background-color: #dc3545; }
    .neutral { background-color: #6c757d; }
    .direction {
      display: inline-block;
      padding: 5px 12px;
      border-radius: 6px;
      font-weight: bold;
      text-transform: uppercase;
      color: #fff;
    }
    .up { background-color: #16a34a; }
    .down { background-color: #dc2626; }
    .neutral-dir { background-color: #6b7280; }
    .data-table {
      width: 100%;
      border-collapse: collapse;
      margin-top: 20px;
    }
    .data-table th, .data-table td {
      text-align: left;
      padding: 10px;
      border-bottom: 1px solid #e5e7eb;
    }
    .data-table th {
      background-color: #f9fafb;
      font-weight: bold;
    }
    .footer {
      text-align: center;
      font-size: 13px;
      color: #6b7280;
      padding: 20px;
      background-color: #f9fafb;
    }"#;

/// Renders the alert email document for a [`SignalAlert`].
pub struct EmailRenderer {
    config: EmailConfig,
    clock: Box<dyn Clock>,
}

impl EmailRenderer {
    pub fn new(config: EmailConfig, clock: Box<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Render the complete HTML document for a signal alert.
    ///
    /// Rendering cannot fail: unknown signal/direction values fall back to
    /// neutral styling and missing optional fields get default
    /// representations. The clock is read for the footer year, and again
    /// for the timestamp cell when the alert carries none.
    pub fn render(&self, alert: &SignalAlert) -> String {
        let signal_class = SignalStyle::classify(&alert.signal).css_class();
        let direction_class = DirectionStyle::classify(&alert.direction).css_class();

        let last_close = match alert.last_close {
            Some(value) => value.to_string(),
            None => MISSING_VALUE.to_owned(),
        };
        let timestamp = alert.timestamp.clone().unwrap_or_else(|| {
            self.clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        });

        let style = STYLE;
        let header_title = &self.config.header_title;
        let product_name = &self.config.product_name;
        let symbol = &alert.symbol;
        let signal = &alert.signal;
        let direction = &alert.direction;
        let timeframe = &alert.timeframe;
        let year = self.clock.now().year();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{header_title}</title>
  <style>
{style}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">{header_title}</div>
    <div class="content">
      <p>Hello Trader,</p>
      <p>Our algorithm has detected a new market signal:</p>

      <p><strong>Symbol:</strong> {symbol}</p>
      <p><strong>Timeframe:</strong> {timeframe}</p>

      <p><strong>Signal:</strong>
        <span class="signal {signal_class}">{signal}</span>
      </p>

      <p><strong>Direction:</strong>
        <span class="direction {direction_class}">{direction}</span>
      </p>

      <table class="data-table">
        <tr><th>Last Close</th><td>{last_close}</td></tr>
        <tr><th>Timestamp</th><td>{timestamp}</td></tr>
      </table>

      <p>Check your chart to confirm and manage the trade carefully.</p>
    </div>
    <div class="footer">
      &copy; {year} {product_name}. All rights reserved.
    </div>
  </div>
</body>
</html>
"#
        )
    }
}

use serde::Deserialize;

/// A single market signal event to be rendered for delivery.
///
/// `signal` and `direction` are free-form strings: the well-known values
/// (`"BUY"`/`"SELL"`, `"UP"`/`"DOWN"`) get dedicated styling and anything
/// else falls through to a neutral presentation. All fields are inserted
/// into the email verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalAlert {
    pub symbol: String,
    pub signal: String,
    pub direction: String,
    pub timeframe: String,
    #[serde(default)]
    pub last_close: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Visual style bucket for a signal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalStyle {
    Buy,
    Sell,
    Neutral,
}

impl SignalStyle {
    /// Matching is exact and case-sensitive; anything but `"BUY"` or
    /// `"SELL"` is neutral.
    pub fn classify(signal: &str) -> Self {
        match signal {
            "BUY" => Self::Buy,
            "SELL" => Self::Sell,
            _ => Self::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Neutral => "neutral",
        }
    }
}

/// Visual style bucket for a trend direction value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionStyle {
    Up,
    Down,
    Neutral,
}

impl DirectionStyle {
    /// Matching is exact and case-sensitive; anything but `"UP"` or
    /// `"DOWN"` is neutral.
    pub fn classify(direction: &str) -> Self {
        match direction {
            "UP" => Self::Up,
            "DOWN" => Self::Down,
            _ => Self::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral-dir",
        }
    }
}

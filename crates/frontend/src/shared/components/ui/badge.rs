use leptos::prelude::*;

/// Colour of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Blue => "status-badge badge-blue",
            Tone::Green => "status-badge badge-green",
            Tone::Yellow => "status-badge badge-yellow",
            Tone::Red => "status-badge badge-red",
            Tone::Purple => "status-badge badge-purple",
        }
    }
}

/// Stock-control differences: zero blue, gain green, loss yellow.
pub fn stock_tone(value: f64) -> Tone {
    if value > 0.0 {
        Tone::Green
    } else if value < 0.0 {
        Tone::Yellow
    } else {
        Tone::Blue
    }
}

/// Projected balances: shortage red, exhausted yellow, surplus green.
pub fn balance_tone(value: f64) -> Tone {
    if value < 0.0 {
        Tone::Red
    } else if value == 0.0 {
        Tone::Yellow
    } else {
        Tone::Green
    }
}

/// Balance after obras compared with the current stock.
pub fn obras_tone(current: f64, after_obras: f64) -> Tone {
    if after_obras < 0.0 {
        Tone::Red
    } else if after_obras > current {
        Tone::Green
    } else {
        Tone::Yellow
    }
}

#[component]
pub fn Badge(tone: Tone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_tone() {
        assert_eq!(stock_tone(0.0), Tone::Blue);
        assert_eq!(stock_tone(4.0), Tone::Green);
        assert_eq!(stock_tone(-1.0), Tone::Yellow);
    }

    #[test]
    fn test_balance_tone() {
        assert_eq!(balance_tone(-0.5), Tone::Red);
        assert_eq!(balance_tone(0.0), Tone::Yellow);
        assert_eq!(balance_tone(10.0), Tone::Green);
    }

    #[test]
    fn test_obras_tone() {
        assert_eq!(obras_tone(10.0, -1.0), Tone::Red);
        assert_eq!(obras_tone(10.0, 12.0), Tone::Green);
        assert_eq!(obras_tone(10.0, 10.0), Tone::Yellow);
        assert_eq!(obras_tone(10.0, 3.0), Tone::Yellow);
    }
}

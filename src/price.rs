//! Price strings as collectors write them: `$16`, `Rs.3699`, `Rs. 1999`,
//! `2000 yen`, `€72`.
//!
//! [`format_price`] normalises the text for display and adds an approximate
//! US-dollar figure for other currencies. Conversion rates are fixed; they are
//! for a rough sense of scale, not accounting.

/// Currencies the parser recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Inr,
    Jpy,
    Eur,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
            Self::Jpy => "¥",
            Self::Eur => "€",
        }
    }

    /// Approximate value of one unit in US dollars.
    pub fn usd_rate(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Inr => 0.012,
            Self::Jpy => 0.0067,
            Self::Eur => 1.08,
        }
    }
}

/// Markers tried against the start of the text, longest first.
const PREFIXES: &[(&str, Currency)] = &[
    ("usd", Currency::Usd),
    ("us$", Currency::Usd),
    ("$", Currency::Usd),
    ("rs.", Currency::Inr),
    ("rs", Currency::Inr),
    ("inr", Currency::Inr),
    ("₹", Currency::Inr),
    ("jpy", Currency::Jpy),
    ("¥", Currency::Jpy),
    ("eur", Currency::Eur),
    ("€", Currency::Eur),
];

/// Markers tried against the end of the text.
const SUFFIXES: &[(&str, Currency)] = &[
    ("yen", Currency::Jpy),
    ("jpy", Currency::Jpy),
    ("¥", Currency::Jpy),
    ("usd", Currency::Usd),
    ("$", Currency::Usd),
    ("inr", Currency::Inr),
    ("rs", Currency::Inr),
    ("eur", Currency::Eur),
    ("€", Currency::Eur),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub currency: Currency,
    pub amount: f64,
}

impl Price {
    pub fn usd_value(&self) -> f64 {
        self.amount * self.currency.usd_rate()
    }
}

/// Why a price string could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceError {
    pub message: String,
}

impl std::fmt::Display for PriceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PriceError {}

/// Text ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceDisplay {
    pub display: String,
    /// Approximate USD amount, present for non-USD prices.
    pub converted: Option<String>,
}

pub fn parse_price(raw: &str) -> Result<Price, PriceError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(PriceError {
            message: "empty price".to_string(),
        });
    }
    // ASCII lowercasing keeps byte offsets, so slices below stay aligned.
    let lower = text.to_ascii_lowercase();

    let mut currency = None;
    let mut rest: &str = &lower;
    if let Some((marker, c)) = PREFIXES.iter().find(|(m, _)| rest.starts_with(m)) {
        currency = Some(*c);
        rest = &rest[marker.len()..];
    } else if let Some((marker, c)) = SUFFIXES.iter().find(|(m, _)| rest.ends_with(m)) {
        currency = Some(*c);
        rest = &rest[..rest.len() - marker.len()];
    }
    let currency = currency.ok_or_else(|| PriceError {
        message: format!("no currency in {:?}", raw),
    })?;

    let digits: String = rest
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    let amount: f64 = digits.parse().map_err(|_| PriceError {
        message: format!("bad amount in {:?}", raw),
    })?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(PriceError {
            message: format!("bad amount in {:?}", raw),
        });
    }
    Ok(Price { currency, amount })
}

/// Normalised display text plus an approximate USD conversion.
///
/// Unreadable input is shown as written, without a conversion.
pub fn format_price(raw: &str) -> PriceDisplay {
    match parse_price(raw) {
        Ok(price) => PriceDisplay {
            display: format!("{}{}", price.currency.symbol(), group_thousands(price.amount)),
            converted: (price.currency != Currency::Usd)
                .then(|| format!("≈ ${}", group_thousands(price.usd_value().round()))),
        },
        Err(_) => PriceDisplay {
            display: raw.trim().to_string(),
            converted: None,
        },
    }
}

/// `1234.5` → `1,234.50`, `3699` → `3,699`.
fn group_thousands(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if frac != 0 {
        grouped.push_str(&format!(".{:02}", frac));
    }
    grouped
}

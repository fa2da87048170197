use thiserror::Error;

/// Money is stored as integer cents so that totals stay exact.
/// $50.50 = 5050 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string.
/// Example: 5050 -> "50.50", -1 -> "-0.01"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.abs();
    format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
}

/// Format cents with the dollar sign used by all user-facing output.
/// Example: 5050 -> "$50.50"
pub fn format_usd(cents: Cents) -> String {
    format!("${}", format_cents(cents))
}

/// Parse user-entered amount text into cents.
/// Accepts "50", "50.5" (= 50.50), "50.50", ".50" and negative forms;
/// digits past the second decimal place are truncated.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, decimals_str) = match digits.split_once('.') {
        Some((_, decimals)) if decimals.contains('.') => {
            return Err(ParseCentsError::InvalidFormat);
        }
        Some((units, decimals)) => (units, decimals),
        None => (digits, ""),
    };

    // "-", "." and "-." carry no digits at all
    if units_str.is_empty() && decimals_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?
    };

    let fraction: i64 = match decimals_str.len() {
        0 => 0,
        // a single digit is tenths: "12.5" means 12.50
        1 => {
            decimals_str
                .parse::<i64>()
                .map_err(|_| ParseCentsError::InvalidFormat)?
                * 10
        }
        _ => decimals_str
            .get(..2)
            .ok_or(ParseCentsError::InvalidFormat)?
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units * 100 + fraction;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("amount is empty")]
    Empty,
    #[error("not a valid amount")]
    InvalidFormat,
}

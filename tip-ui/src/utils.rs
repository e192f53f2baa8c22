use rust_decimal::Decimal;
use tip_core::calculations::common::round_half_up;

/// Symbol shown in front of amounts for the currencies we know by sight.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Inserts `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount for display in `currency_code`.
///
/// Rounds half-up to cents and groups thousands, e.g. `$1,234.50`.
/// Currencies without a known symbol are prefixed with their code
/// (`CHF 12.00`).
pub fn format_currency(
    amount: Decimal,
    currency_code: &str,
) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let number = format!("{}.{cents}", group_thousands(whole));

    match currency_symbol(currency_code) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{currency_code} {number}"),
    }
}

/// Formats an optional raw field value for display, using "—" when empty.
pub fn field_display(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { "—" } else { trimmed }
}

use rust_decimal::{Decimal, RoundingStrategy};

/// Display properties for a supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySpec {
    pub code: &'static str,
    pub symbol: &'static str,
    pub decimals: u32,
}

/// Currencies offered by the settings screen. Unknown codes fall back to a
/// bare two-decimal rendering.
pub const CURRENCIES: &[CurrencySpec] = &[
    CurrencySpec { code: "USD", symbol: "$", decimals: 2 },
    CurrencySpec { code: "EUR", symbol: "€", decimals: 2 },
    CurrencySpec { code: "JPY", symbol: "¥", decimals: 0 },
    CurrencySpec { code: "GBP", symbol: "£", decimals: 2 },
    CurrencySpec { code: "DZD", symbol: "د.ج", decimals: 2 },
];

pub fn currency_spec(code: &str) -> Option<CurrencySpec> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .copied()
}

/// Canonical numeric string for an amount: rounded (half away from zero) to
/// the currency's decimal places, trailing zeros stripped.
pub fn format_amount(value: Decimal, currency: &str) -> String {
    let dp = currency_spec(currency).map(|c| c.decimals).unwrap_or(2);
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Human display form: currency symbol, fixed decimal places, optional
/// thousands grouping. Intended for UI surfaces only; canonical output
/// fields keep `format_amount`.
pub fn format_amount_display(value: Decimal, currency: &str, grouping: bool) -> String {
    let spec = currency_spec(currency);
    let dp = spec.map(|c| c.decimals).unwrap_or(2);
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let mut s = pad_fraction_to_dp(&abs.normalize().to_string(), dp);
    if grouping {
        s = group_number_string(&s);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if let Some(spec) = spec {
        out.push_str(spec.symbol);
    }
    out.push_str(&s);
    out
}

fn group_int_digits(int_part: &str) -> String {
    // Insert commas every 3 digits, preserving any leading zeros.
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len.saturating_sub(i + 1);
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

fn pad_fraction_to_dp(s: &str, dp: u32) -> String {
    if dp == 0 {
        return s
            .split_once('.')
            .map(|(i, _)| i.to_string())
            .unwrap_or_else(|| s.to_string());
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };

    let mut out = String::with_capacity(int_part.len() + 1 + dp as usize);
    out.push_str(int_part);
    out.push('.');

    let mut written = 0usize;
    for ch in frac_part.chars().take(dp as usize) {
        out.push(ch);
        written += 1;
    }
    while written < dp as usize {
        out.push('0');
        written += 1;
    }

    out
}

fn group_number_string(s: &str) -> String {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let grouped = group_int_digits(int_part);
    match frac_part {
        Some(f) if !f.is_empty() => format!("{grouped}.{f}"),
        _ => grouped,
    }
}

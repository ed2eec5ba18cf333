use std::fmt;

use serde::{Deserialize, Serialize};

/// How a model is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub(crate) enum QuotaType {
    /// Charged per token, separately for input and completion
    Metered,
    /// Fixed charge per call
    FlatRate,
}

impl TryFrom<u8> for QuotaType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(QuotaType::Metered),
            1 => Ok(QuotaType::FlatRate),
            other => Err(format!("unknown quota_type {other} (expected 0 or 1)")),
        }
    }
}

impl From<QuotaType> for u8 {
    fn from(value: QuotaType) -> Self {
        match value {
            QuotaType::Metered => 0,
            QuotaType::FlatRate => 1,
        }
    }
}

/// `model_price` as sent by the gateway: a JSON number, a numeric string, or
/// null/absent
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum RawPrice {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawPrice {
    /// Value of the leading numeric part of the text, NaN when there is none.
    ///
    /// `"2.5 USD"` reads as 2.5; a missing price is NaN.
    pub(crate) fn value(&self) -> f64 {
        match self {
            RawPrice::Number(n) => *n,
            RawPrice::Text(s) => parse_leading_number(s),
            RawPrice::Missing => f64::NAN,
        }
    }

    /// Value only when the whole trimmed text is a number, NaN otherwise.
    pub(crate) fn exact_value(&self) -> f64 {
        match self {
            RawPrice::Number(n) => *n,
            RawPrice::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            RawPrice::Missing => f64::NAN,
        }
    }
}

impl fmt::Display for RawPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPrice::Number(n) => write!(f, "{n}"),
            RawPrice::Text(s) => write!(f, "\"{s}\""),
            RawPrice::Missing => f.write_str("null"),
        }
    }
}

/// Longest prefix of `[+-]digits[.digits][e[+-]digits]` (or `Infinity`) after
/// leading whitespace.
fn parse_leading_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// One model row from `/api/pricing`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PricingEntry {
    pub(crate) model_name: String,
    pub(crate) quota_type: QuotaType,
    pub(crate) model_ratio: f64,
    #[serde(default)]
    pub(crate) model_price: RawPrice,
    pub(crate) completion_ratio: f64,
}

/// Display-ready price summary; the variant follows `quota_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub(crate) enum FormattedPrice {
    #[serde(rename = "metered")]
    Metered { input: String, completion: String },
    #[serde(rename = "flat-rate")]
    FlatRate { price: String },
}

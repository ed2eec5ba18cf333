use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::PRICING_PATH;
use crate::error::AppError;

use super::format::format_price;
use super::types::{FormattedPrice, PricingEntry, QuotaType};

/// Number of leading entries shown as popular models
pub(crate) const POPULAR_MODEL_LIMIT: usize = 8;

/// Group whose ratio applies to anonymous visitors
const DEFAULT_GROUP: &str = "default";

/// What to do with a flat-rate `model_price` that is not a number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum PricePolicy {
    /// Reject the payload
    #[default]
    Strict,
    /// Read its leading number, or let it render as `$NaN` when there is none
    Lenient,
}

/// Body of `GET /api/pricing`. Entries stay untyped until the prefix is taken.
#[derive(Debug, Deserialize)]
struct PricingResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Vec<serde_json::Value>,
    #[serde(default)]
    group_ratio: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PricingRow {
    #[serde(flatten)]
    pub(crate) entry: PricingEntry,
    pub(crate) formatted_price: FormattedPrice,
}

/// Validated, formatted working set shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PricingSheet {
    pub(crate) group_ratio: f64,
    pub(crate) models: Vec<PricingRow>,
}

/// Parse and validate a raw pricing body into a sheet.
pub(crate) fn parse_pricing(body: &str, policy: PricePolicy) -> Result<PricingSheet, AppError> {
    let response: PricingResponse =
        serde_json::from_str(body).map_err(|source| AppError::Payload {
            endpoint: PRICING_PATH.to_string(),
            source,
        })?;
    response.into_sheet(policy)
}

impl PricingResponse {
    fn into_sheet(self, policy: PricePolicy) -> Result<PricingSheet, AppError> {
        if !self.success {
            return Err(AppError::Api {
                endpoint: PRICING_PATH.to_string(),
                message: self.message.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let group_ratio = self.group_ratio.get(DEFAULT_GROUP).copied().unwrap_or(1.0);
        if !group_ratio.is_finite() || group_ratio < 0.0 {
            return Err(AppError::InvalidGroupRatio { value: group_ratio });
        }

        let mut models = Vec::with_capacity(POPULAR_MODEL_LIMIT);
        for (index, value) in self.data.into_iter().take(POPULAR_MODEL_LIMIT).enumerate() {
            let entry = decode_entry(index, value)?;
            validate_entry(&entry, policy)?;
            let formatted_price = format_price(&entry, group_ratio);
            models.push(PricingRow {
                entry,
                formatted_price,
            });
        }

        Ok(PricingSheet {
            group_ratio,
            models,
        })
    }
}

fn decode_entry(index: usize, value: serde_json::Value) -> Result<PricingEntry, AppError> {
    let model = value
        .get("model_name")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{index}"));
    serde_json::from_value(value).map_err(|e| AppError::InvalidEntry {
        model,
        reason: e.to_string(),
    })
}

fn validate_entry(entry: &PricingEntry, policy: PricePolicy) -> Result<(), AppError> {
    let invalid = |reason: String| AppError::InvalidEntry {
        model: entry.model_name.clone(),
        reason,
    };

    if entry.model_name.trim().is_empty() {
        return Err(invalid("model_name is empty".to_string()));
    }
    for (field, value) in [
        ("model_ratio", entry.model_ratio),
        ("completion_ratio", entry.completion_ratio),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!(
                "{field} {value} is not a finite, non-negative number"
            )));
        }
    }

    if entry.quota_type == QuotaType::FlatRate {
        let price = match policy {
            PricePolicy::Strict => entry.model_price.exact_value(),
            PricePolicy::Lenient => entry.model_price.value(),
        };
        if price.is_nan() {
            if policy == PricePolicy::Lenient {
                return Ok(());
            }
            return Err(invalid(format!(
                "model_price {} is not a number",
                entry.model_price
            )));
        }
        if price.is_infinite() || price < 0.0 {
            return Err(invalid(format!(
                "model_price {price} is not a finite, non-negative number"
            )));
        }
    }

    Ok(())
}

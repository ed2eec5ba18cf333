use std::time::Instant;

use crate::api::Gateway;
use crate::consts::PRICING_PATH;
use crate::error::AppError;
use crate::store::{PRICING_RESPONSE_KEY, Store};
use crate::utils::debug_enabled;

use super::response::{PricePolicy, PricingSheet, parse_pricing};

/// Load pricing from the gateway, falling back to the last stored body.
///
/// With `offline` set only the stored body is consulted. A fresh body is
/// stored only after it validates.
pub(crate) fn load_pricing(
    gateway: &dyn Gateway,
    store: &mut dyn Store,
    offline: bool,
    policy: PricePolicy,
    quiet: bool,
) -> Result<PricingSheet, AppError> {
    let start = Instant::now();

    if offline {
        let body = store
            .get(PRICING_RESPONSE_KEY)
            .ok_or(AppError::NoCachedPricing)?;
        let sheet = parse_pricing(&body, policy)?;
        if !quiet {
            eprintln!(
                "Using cached pricing ({:.2}ms)",
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        return Ok(sheet);
    }

    if !quiet {
        eprint!("Fetching pricing from {}...", gateway.server_address());
    }
    match gateway.get_text(PRICING_PATH) {
        Ok(body) => {
            let sheet = parse_pricing(&body, policy);
            if !quiet {
                match &sheet {
                    Ok(sheet) => eprintln!(
                        " {} models ({:.2}ms)",
                        sheet.models.len(),
                        start.elapsed().as_secs_f64() * 1000.0
                    ),
                    Err(_) => eprintln!(" rejected"),
                }
            }
            let sheet = sheet?;
            if let Err(e) = store.set(PRICING_RESPONSE_KEY, &body)
                && !quiet
            {
                eprintln!("Warning: {e}");
            }
            Ok(sheet)
        }
        Err(fetch_err) => {
            if !quiet {
                eprintln!(" failed, trying cache...");
            }
            if debug_enabled() {
                eprintln!("[DEBUG] {fetch_err}");
            }
            match store.get(PRICING_RESPONSE_KEY) {
                Some(body) => parse_pricing(&body, policy),
                None => Err(fetch_err.into()),
            }
        }
    }
}
